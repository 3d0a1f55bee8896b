pub mod add;
pub mod find;
pub mod list;
pub mod remove;

use crate::cli::Arguments;
use crate::{AppError, AppResult};
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Add,
    FindById,
    Remove,
}

impl FromStr for Operation {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "list" => Ok(Operation::List),
            "add" => Ok(Operation::Add),
            "findById" => Ok(Operation::FindById),
            "remove" => Ok(Operation::Remove),
            other => Err(AppError::InvalidOperation(other.to_string())),
        }
    }
}

/// Validates the flags and routes to the matching handler.
///
/// No file is touched until every flag the operation needs is present.
pub fn perform<W: Write>(args: &Arguments, out: &mut W) -> AppResult<()> {
    let file_name = required(&args.file_name, "fileName")?;
    let operation: Operation = required(&args.operation, "operation")?.parse()?;
    let path = Path::new(file_name);

    tracing::debug!(?operation, file = %path.display(), "dispatching");

    match operation {
        Operation::List => list::run_list(path, out),
        Operation::Add => add::run_add(path, required(&args.item, "item")?, out),
        Operation::FindById => find::run_find_by_id(path, required(&args.id, "id")?, out),
        Operation::Remove => remove::run_remove(path, required(&args.id, "id")?, out),
    }
}

fn required<'a>(value: &'a str, flag: &'static str) -> AppResult<&'a str> {
    if value.is_empty() {
        Err(AppError::MissingFlag(flag))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args(operation: &str, file_name: &str) -> Arguments {
        Arguments {
            operation: operation.into(),
            file_name: file_name.into(),
            ..Arguments::default()
        }
    }

    #[test]
    fn file_name_is_checked_first() {
        let err = perform(&Arguments::default(), &mut Vec::new()).unwrap_err();
        assert!(matches!(err, AppError::MissingFlag("fileName")));
    }

    #[test]
    fn operation_is_required() {
        let err = perform(&args("", "items.json"), &mut Vec::new()).unwrap_err();
        assert!(matches!(err, AppError::MissingFlag("operation")));
    }

    #[test]
    fn unknown_operation_is_rejected() {
        let err = perform(&args("purge", "items.json"), &mut Vec::new()).unwrap_err();
        assert_eq!(err.to_string(), "Operation purge not allowed!");
    }

    #[test]
    fn missing_operation_flags_leave_file_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("items.json");
        let path = path.to_str().unwrap();

        let err = perform(&args("add", path), &mut Vec::new()).unwrap_err();
        assert!(matches!(err, AppError::MissingFlag("item")));
        let err = perform(&args("findById", path), &mut Vec::new()).unwrap_err();
        assert!(matches!(err, AppError::MissingFlag("id")));
        let err = perform(&args("remove", path), &mut Vec::new()).unwrap_err();
        assert!(matches!(err, AppError::MissingFlag("id")));

        assert!(!dir.path().join("items.json").exists());
    }

    #[test]
    fn full_lifecycle() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("items.json");
        let file_name = path.to_str().unwrap().to_string();
        let run = |operation: &str, item: &str, id: &str| {
            let mut out = Vec::new();
            let args = Arguments {
                operation: operation.into(),
                item: item.into(),
                id: id.into(),
                file_name: file_name.clone(),
            };
            perform(&args, &mut out).unwrap();
            String::from_utf8(out).unwrap()
        };
        let record = r#"{"id":"1","email":"a@x.com","age":30}"#;

        assert_eq!(run("add", record, ""), "");
        assert_eq!(run("list", "", ""), format!("[{record}]"));
        assert_eq!(run("add", record, ""), "Item with id 1 already exists");
        assert_eq!(run("findById", "", "1"), record);
        assert_eq!(run("remove", "", "1"), "");
        assert_eq!(run("list", "", ""), "[]");
        assert_eq!(run("remove", "", "1"), "Item with id 1 not found");
    }
}

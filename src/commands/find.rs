use crate::AppResult;
use crate::store;
use std::io::Write;
use std::path::Path;

/// Writes the first item with the given id as JSON. A miss writes nothing.
pub fn run_find_by_id<W: Write>(path: &Path, id: &str, out: &mut W) -> AppResult<()> {
    let items = store::load(path)?;

    match store::find_by_id(&items, id) {
        Some(item) => {
            serde_json::to_writer(&mut *out, item)?;
        }
        None => tracing::debug!(id, searched = items.len(), "no item with id"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppError;
    use std::fs;
    use tempfile::TempDir;

    const CONTENT: &str = r#"[{"id":"1","email":"a@x.com","age":30},{"id":"2","email":"b@x.com","age":41}]"#;

    #[test]
    fn hit_writes_record_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("items.json");
        fs::write(&path, CONTENT).unwrap();

        let mut out = Vec::new();
        run_find_by_id(&path, "2", &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            r#"{"id":"2","email":"b@x.com","age":41}"#
        );
    }

    #[test]
    fn miss_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("items.json");
        fs::write(&path, CONTENT).unwrap();

        let mut out = Vec::new();
        run_find_by_id(&path, "9", &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let err = run_find_by_id(&dir.path().join("absent.json"), "1", &mut Vec::new())
            .unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }
}

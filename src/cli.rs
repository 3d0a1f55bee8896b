use clap::Parser;
use std::ffi::OsString;

/// Flags for a single invocation.
///
/// Every flag defaults to an empty string; the dispatcher treats an empty
/// value as a missing flag so that it can report which one is required.
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "item-store")]
#[command(about = "Manages a JSON file of {id, email, age} records")]
#[command(version)]
pub struct Arguments {
    /// Operation to perform: list, add, findById or remove
    #[arg(long, default_value = "", hide_default_value = true, allow_hyphen_values = true)]
    pub operation: String,

    /// Record as a JSON object, required by `add`
    #[arg(long, default_value = "", hide_default_value = true, allow_hyphen_values = true)]
    pub item: String,

    /// Record identifier, required by `findById` and `remove`
    #[arg(long, default_value = "", hide_default_value = true, allow_hyphen_values = true)]
    pub id: String,

    /// Path to the backing JSON file
    #[arg(
        long = "fileName",
        default_value = "",
        hide_default_value = true,
        allow_hyphen_values = true
    )]
    pub file_name: String,
}

const VALUE_FLAGS: [&str; 4] = ["operation", "item", "id", "fileName"];

impl Arguments {
    /// Parses the process arguments, accepting `-flag` as well as `--flag`.
    pub fn from_env() -> Self {
        Self::parse_from(normalize_flag_syntax(std::env::args_os()))
    }
}

/// Rewrites single-dash long flags (`-fileName x`, `-id=3`) to their
/// double-dash form. The token following a value flag is left untouched so
/// values that begin with a dash survive.
pub fn normalize_flag_syntax<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut normalized = Vec::new();
    let mut expect_value = false;
    let mut passthrough = false;

    for (index, arg) in args.into_iter().enumerate() {
        if index == 0 || expect_value || passthrough {
            expect_value = false;
            normalized.push(arg);
            continue;
        }

        let Some(text) = arg.to_str() else {
            normalized.push(arg);
            continue;
        };

        if text == "--" {
            passthrough = true;
            normalized.push(arg);
            continue;
        }

        let flag = if let Some(rest) = text.strip_prefix("--") {
            rest
        } else if let Some(rest) = text.strip_prefix('-') {
            rest
        } else {
            normalized.push(arg);
            continue;
        };

        let (name, inline_value) = match flag.split_once('=') {
            Some((name, _)) => (name, true),
            None => (flag, false),
        };

        if VALUE_FLAGS.contains(&name) {
            expect_value = !inline_value;
            normalized.push(OsString::from(format!("--{flag}")));
        } else if !text.starts_with("--") && name.len() > 1 {
            normalized.push(OsString::from(format!("-{text}")));
        } else {
            normalized.push(arg);
        }
    }

    normalized
}

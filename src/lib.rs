pub mod cli;
pub mod commands;
pub mod error;
pub mod item;
pub mod logging;
pub mod store;

pub use cli::Arguments;
pub use error::{AppError, AppResult};
pub use item::Item;

use std::io;

/// Main library entry point
pub fn run() -> AppResult<()> {
    let args = Arguments::from_env();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::perform(&args, &mut out)
}

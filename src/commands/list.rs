use crate::AppResult;
use crate::store;
use std::io::Write;
use std::path::Path;

/// Copies the backing file to `out` byte for byte.
pub fn run_list<W: Write>(path: &Path, out: &mut W) -> AppResult<()> {
    let raw = store::read_raw(path)?;
    tracing::debug!(bytes = raw.len(), "listing backing file");
    out.write_all(&raw)?;
    Ok(())
}

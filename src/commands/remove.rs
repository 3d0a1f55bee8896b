use crate::AppResult;
use crate::store;
use std::io::Write;
use std::path::Path;

/// Removes the item with the given id and rewrites the file.
///
/// When the id occurs more than once the last occurrence goes. An unknown id
/// is reported on `out` and is not an error.
pub fn run_remove<W: Write>(path: &Path, id: &str, out: &mut W) -> AppResult<()> {
    let mut file = store::open_rw(path)?;
    let mut items = store::read_items(&mut file)?;

    let Some(index) = store::last_position(&items, id) else {
        tracing::debug!(id, searched = items.len(), "no item with id");
        write!(out, "Item with id {id} not found")?;
        return Ok(());
    };

    items.remove(index);
    tracing::debug!(id, index, remaining = items.len(), "removed item");
    store::rewrite(&mut file, &items)
}

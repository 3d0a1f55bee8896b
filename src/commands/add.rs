use crate::AppResult;
use crate::item::Item;
use crate::store;
use std::io::Write;
use std::path::Path;

/// Appends the JSON-encoded `item` to the collection unless its id is taken.
///
/// A duplicate id is reported on `out` and is not an error.
pub fn run_add<W: Write>(path: &Path, item: &str, out: &mut W) -> AppResult<()> {
    let item: Item = serde_json::from_str(item)?;

    let mut file = store::open_rw(path)?;
    let mut items = store::read_items(&mut file)?;

    if store::find_by_id(&items, &item.id).is_some() {
        tracing::debug!(id = %item.id, "duplicate id, nothing added");
        write!(out, "Item with id {} already exists", item.id)?;
        return Ok(());
    }

    tracing::debug!(id = %item.id, existing = items.len(), "adding item");
    items.push(item);
    store::rewrite(&mut file, &items)
}

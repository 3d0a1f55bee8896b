//! Access to the backing file: a single JSON array of [`Item`]s.

use crate::AppResult;
use crate::item::Item;
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

/// Reads the file's raw bytes without decoding them.
pub fn read_raw(path: &Path) -> AppResult<Vec<u8>> {
    Ok(fs::read(path)?)
}

/// Reads and decodes the whole file. The file must exist.
pub fn load(path: &Path) -> AppResult<Vec<Item>> {
    let content = fs::read(path)?;
    decode(&content)
}

/// Opens the file for a read-modify-write cycle, creating it when absent.
pub fn open_rw(path: &Path) -> AppResult<File> {
    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)?;
    Ok(file)
}

/// Reads everything from the current position and decodes it.
pub fn read_items(file: &mut File) -> AppResult<Vec<Item>> {
    let mut content = Vec::new();
    file.read_to_end(&mut content)?;
    decode(&content)
}

/// Replaces the whole file content with the encoded `items`.
pub fn rewrite(file: &mut File, items: &[Item]) -> AppResult<()> {
    let encoded = serde_json::to_vec(items)?;
    file.set_len(0)?;
    file.seek(SeekFrom::Start(0))?;
    file.write_all(&encoded)?;
    tracing::debug!(count = items.len(), bytes = encoded.len(), "rewrote backing file");
    Ok(())
}

/// Empty content is an empty collection.
fn decode(content: &[u8]) -> AppResult<Vec<Item>> {
    if content.is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_slice(content)?)
}

/// First item whose id equals `id`.
pub fn find_by_id<'a>(items: &'a [Item], id: &str) -> Option<&'a Item> {
    items.iter().find(|item| item.id == id)
}

/// Index of the last item whose id equals `id`.
pub fn last_position(items: &[Item], id: &str) -> Option<usize> {
    items.iter().rposition(|item| item.id == id)
}

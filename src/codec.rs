//! Persistence codec: converts between the in-memory inventory and the
//! line-oriented database file.
//!
//! Each record is one line of four whitespace-separated fields:
//!
//! ```text
//! <id> <name> <cost> <category>
//! ```
//!
//! Loading is deliberately permissive: scanning stops silently at the first
//! line that fails to decode, keeping everything parsed up to that point.
//! This mirrors the scan-until-failure behavior the format grew up with;
//! the truncation is logged so it is not invisible.

use crate::store::Inventory;
use crate::types::{Category, Item};
use eyre::{Context, Result};
use log::{info, warn};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Read an inventory from a database file.
///
/// Fails only when the file cannot be opened or read; malformed content
/// truncates the scan instead of erroring. The returned inventory is clean
/// (dirty = false).
pub fn load(path: &Path) -> Result<Inventory> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open '{}' for reading", path.display()))?;
    let reader = BufReader::new(file);

    let mut items = Vec::new();
    let mut seen_ids = HashSet::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read '{}'", path.display()))?;
        match decode_line(&line) {
            Some(item) if !seen_ids.contains(&item.id) => {
                seen_ids.insert(item.id);
                items.push(item);
            }
            _ => {
                warn!(
                    "Stopping load of '{}' at malformed line {}: {:?}",
                    path.display(),
                    index + 1,
                    line
                );
                break;
            }
        }
    }

    info!("Loaded {} item(s) from '{}'", items.len(), path.display());

    // Duplicates were filtered above, so this cannot fail
    Inventory::from_items(items).map_err(|e| eyre::eyre!(e))
}

/// Write the inventory to a database file, one record per line in store
/// order, replacing any previous contents. Clears the dirty flag on success.
pub fn save(inventory: &mut Inventory, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to open '{}' for writing", path.display()))?;
    let mut writer = BufWriter::new(file);

    for item in inventory.items() {
        writeln!(
            writer,
            "{} {} {:.2} {}",
            item.id,
            item.name,
            item.cost,
            item.category.code()
        )
        .with_context(|| format!("Failed to write '{}'", path.display()))?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to write '{}'", path.display()))?;

    info!("Saved {} item(s) to '{}'", inventory.len(), path.display());
    inventory.mark_clean();

    Ok(())
}

/// Decode one record line: exactly four fields of the expected types,
/// passing item validation. Anything else is malformed.
fn decode_line(line: &str) -> Option<Item> {
    let mut fields = line.split_whitespace();

    let id = fields.next()?.parse().ok()?;
    let name = fields.next()?.to_string();
    let cost = fields.next()?.parse().ok()?;
    let category: Category = fields.next()?.parse().ok()?;

    if fields.next().is_some() {
        return None;
    }

    let item = Item {
        id,
        name,
        cost,
        category,
    };
    item.validate().ok()?;
    Some(item)
}

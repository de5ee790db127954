use crate::model::Item;
use std::{error::Error, fs, path::Path};

/// Load the item catalog from a JSON array file.
///
/// The file order is preserved; it is also the display order.
pub fn load_items<P: AsRef<Path>>(path: P) -> Result<Vec<Item>, Box<dyn Error + Send + Sync>> {
    let raw = fs::read_to_string(path.as_ref())?;
    let items: Vec<Item> = serde_json::from_str(&raw)?;
    Ok(items)
}

/// Load the catalog, degrading to an empty list when the file is missing or
/// malformed. Used at the HTTP boundary where a broken catalog must not take
/// the page down.
pub fn load_items_or_empty<P: AsRef<Path>>(path: P) -> Vec<Item> {
    match load_items(path.as_ref()) {
        Ok(items) => items,
        Err(e) => {
            tracing::error!(error = %e, path = %path.as_ref().display(), "Failed to load catalog");
            Vec::new()
        }
    }
}

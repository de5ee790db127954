use crate::model::{Item, Order, OrderItem, generate_order_id};
use crate::selection::Selection;
use chrono::Utc;

#[derive(Debug, thiserror::Error)]
pub enum SlipError {
    #[error("no items selected")]
    EmptySelection,
}

/// Build an order slip from the catalog and the current selection.
///
/// Items are snapshotted (id, name, price) in catalog order and the subtotal
/// is their exact sum; display rounding happens in `format_price` only.
///
/// A fresh `order_id` is minted on every call, so building twice from the
/// same selection yields two slips with equal items but different ids. Each
/// "show slip" action is a new reference.
pub fn build(catalog: &[Item], selection: &Selection) -> Result<Order, SlipError> {
    if selection.is_empty() {
        return Err(SlipError::EmptySelection);
    }

    let items: Vec<OrderItem> = catalog
        .iter()
        .filter(|item| selection.contains(&item.id))
        .map(|item| OrderItem {
            id: item.id.clone(),
            name: item.name.clone(),
            price: item.price,
        })
        .collect();
    let subtotal = items.iter().map(|item| item.price).sum();

    Ok(Order {
        order_id: generate_order_id(),
        items,
        subtotal,
        created_at: Utc::now(),
    })
}

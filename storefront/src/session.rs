use crate::model::{Item, Order};
use crate::selection::Selection;
use crate::slip::{self, SlipError};

/// Page-session controller: owns the catalog snapshot and the selection for
/// one page view, instead of reading selection state from ambient scope.
///
/// Cleared on reload by construction: a new page view gets a new session.
#[derive(Debug, Clone)]
pub struct CheckoutSession {
    catalog: Vec<Item>,
    selection: Selection,
}

impl CheckoutSession {
    pub fn new(catalog: Vec<Item>) -> Self {
        Self {
            catalog,
            selection: Selection::new(),
        }
    }

    pub fn catalog(&self) -> &[Item] {
        &self.catalog
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Forwarded from the UI's per-item checkbox change events.
    pub fn toggle(&mut self, item_id: &str, selected: bool) {
        self.selection.toggle(item_id, selected);
    }

    /// Whether the checkout control should be enabled. The UI boundary keeps
    /// the control disabled while this is false, so `build_slip` is never
    /// reached with an empty selection in normal operation.
    pub fn checkout_enabled(&self) -> bool {
        self.selection.is_non_empty()
    }

    pub fn build_slip(&self) -> Result<Order, SlipError> {
        slip::build(&self.catalog, &self.selection)
    }
}

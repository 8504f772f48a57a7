use std::collections::BTreeMap;

/// Base storage the craft-level driver draws clips from.
pub trait ClipStorage {
    /// Number of items of `item` on hand.
    fn available(&self, item: &str) -> i32;

    /// Removes up to `quantity` items; counts never go below zero.
    fn remove(&mut self, item: &str, quantity: i32);
}

/// Item id → quantity ledger of a base.
///
/// Ordered by id so saves serialize deterministically.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StorageItems {
    items: BTreeMap<String, i32>,
}

impl StorageItems {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` items (non-positive quantities are ignored).
    pub fn add(&mut self, item: impl Into<String>, quantity: i32) {
        if quantity <= 0 {
            return;
        }
        *self.items.entry(item.into()).or_insert(0) += quantity;
    }

    /// Builder-style [`StorageItems::add`].
    #[must_use]
    pub fn with(mut self, item: impl Into<String>, quantity: i32) -> Self {
        self.add(item, quantity);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.items.iter().map(|(id, qty)| (id.as_str(), *qty))
    }
}

impl ClipStorage for StorageItems {
    fn available(&self, item: &str) -> i32 {
        self.items.get(item).copied().unwrap_or(0)
    }

    fn remove(&mut self, item: &str, quantity: i32) {
        if let Some(on_hand) = self.items.get_mut(item) {
            *on_hand = (*on_hand - quantity.max(0)).max(0);
            if *on_hand == 0 {
                self.items.remove(item);
            }
        }
    }
}

//! In-memory item storage

use tokio::sync::RwLock;

use crate::error::{Error, Result};
use crate::types::{seed_items, Item, NewItem};

/// Ordered, append-only item storage shared across requests
#[derive(Debug, Default)]
pub struct ItemStore {
    items: RwLock<Vec<Item>>,
}

impl ItemStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the built-in seed items
    pub fn seeded() -> Self {
        Self::from_items(seed_items())
    }

    pub fn from_items(items: Vec<Item>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }

    /// All items in insertion order
    pub async fn list(&self) -> Vec<Item> {
        self.items.read().await.clone()
    }

    /// First item with the given id
    pub async fn get(&self, id: u64) -> Option<Item> {
        let items = self.items.read().await;
        items.iter().find(|item| item.id == id).cloned()
    }

    /// Assign the next id and append a new item.
    ///
    /// The id is computed under the same write guard as the push, so
    /// concurrent appends never hand out the same id. Fails only when the
    /// highest stored id is already `u64::MAX`.
    pub async fn append(&self, new: NewItem) -> Result<Item> {
        let mut items = self.items.write().await;
        let id = next_id(&items).ok_or(Error::IdsExhausted(u64::MAX))?;
        let item = Item::new(id, new);
        items.push(item.clone());
        Ok(item)
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

/// `max(id) + 1`, or `1` for an empty slice. `None` once `u64::MAX` is taken.
pub fn next_id(items: &[Item]) -> Option<u64> {
    match items.iter().map(|item| item.id).max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}

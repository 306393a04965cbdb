//! In-memory item store: an ordered collection with CRUD operations and a
//! dirty flag tracking unsaved mutations.

use crate::types::{Item, ValidationError};
use std::fmt;

/// Errors that can occur during store operations.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// An item with this id already exists.
    DuplicateId(u32),
    /// No item with this id.
    ItemNotFound(u32),
    /// No item with this name.
    NameNotFound(String),
    /// Validation error.
    Validation(ValidationError),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::DuplicateId(id) => write!(f, "item with ID {} already exists", id),
            StoreError::ItemNotFound(id) => write!(f, "item with ID {} not found", id),
            StoreError::NameNotFound(name) => write!(f, "item with name '{}' not found", name),
            StoreError::Validation(e) => write!(f, "validation error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<ValidationError> for StoreError {
    fn from(e: ValidationError) -> Self {
        StoreError::Validation(e)
    }
}

/// The in-memory inventory.
///
/// Items are kept in a stable session order: new items go to the front,
/// records loaded from disk keep their file order. All failure conditions
/// are checked before any mutation, so a failed operation leaves the
/// inventory untouched.
#[derive(Debug, Default)]
pub struct Inventory {
    items: Vec<Item>,
    dirty: bool,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an inventory from already-validated records, e.g. a decoded
    /// database file. The result starts clean (dirty = false).
    pub fn from_items(items: Vec<Item>) -> Result<Self, StoreError> {
        let mut inventory = Self::new();
        for item in items {
            item.validate()?;
            if inventory.contains(item.id) {
                return Err(StoreError::DuplicateId(item.id));
            }
            inventory.items.push(item);
        }
        Ok(inventory)
    }

    /// Add a new item at the front of the inventory.
    pub fn add(&mut self, item: Item) -> Result<(), StoreError> {
        item.validate()?;
        if self.contains(item.id) {
            return Err(StoreError::DuplicateId(item.id));
        }
        self.items.insert(0, item);
        self.dirty = true;
        Ok(())
    }

    /// Remove the item with the given id, returning it.
    pub fn remove(&mut self, id: u32) -> Result<Item, StoreError> {
        let pos = self.position(id).ok_or(StoreError::ItemNotFound(id))?;
        let item = self.items.remove(pos);
        self.dirty = true;
        Ok(item)
    }

    /// Replace the cost of the item with the given id.
    pub fn set_cost(&mut self, id: u32, new_cost: f64) -> Result<(), StoreError> {
        if new_cost < 0.0 || new_cost.is_nan() {
            return Err(StoreError::Validation(ValidationError::NegativeCost));
        }
        let pos = self.position(id).ok_or(StoreError::ItemNotFound(id))?;
        self.items[pos].cost = new_cost;
        self.dirty = true;
        Ok(())
    }

    /// Look up an item by id.
    pub fn find_by_id(&self, id: u32) -> Result<&Item, StoreError> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .ok_or(StoreError::ItemNotFound(id))
    }

    /// Look up the first item (in store order) whose name matches exactly.
    /// Matching is case-sensitive.
    pub fn find_by_name(&self, name: &str) -> Result<&Item, StoreError> {
        self.items
            .iter()
            .find(|item| item.name == name)
            .ok_or_else(|| StoreError::NameNotFound(name.to_string()))
    }

    /// All items in store order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items in the inventory.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the inventory holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True if the inventory has been mutated since the last load or save.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag, after a successful save.
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn contains(&self, id: u32) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    fn position(&self, id: u32) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}

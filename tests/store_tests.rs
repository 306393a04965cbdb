//! Integration tests for the in-memory inventory.
//!
//! Covers the CRUD operations, the unique-id invariant, store ordering,
//! and the dirty flag.

mod common;

use common::{item, sample_inventory};
use grocer::{Inventory, StoreError};

// =============================================================================
// Add
// =============================================================================

#[test]
fn test_add_distinct_ids_contains_exactly_those_items() {
    let mut inv = Inventory::new();
    for id in [5, 9, 2, 7] {
        inv.add(item(id, &format!("Item{}", id), 1.00, 'N')).unwrap();
    }

    assert_eq!(inv.len(), 4);
    let mut ids: Vec<u32> = inv.items().iter().map(|i| i.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![2, 5, 7, 9]);
}

#[test]
fn test_add_duplicate_id_leaves_store_unchanged() {
    let mut inv = sample_inventory();

    let result = inv.add(item(2, "Cream", 4.00, 'D'));
    assert_eq!(result, Err(StoreError::DuplicateId(2)));

    assert_eq!(inv.len(), 3);
    let existing = inv.find_by_id(2).unwrap();
    assert_eq!(existing.name, "Milk");
    assert_eq!(existing.cost, 2.50);
}

#[test]
fn test_add_inserts_at_front() {
    let mut inv = sample_inventory();
    inv.add(item(4, "Bread", 1.99, 'N')).unwrap();

    assert_eq!(inv.items()[0].id, 4);
    // Loaded records keep their file order behind the new item
    let ids: Vec<u32> = inv.items().iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![4, 1, 2, 3]);
}

// =============================================================================
// Delete
// =============================================================================

#[test]
fn test_delete_then_find_fails() {
    let mut inv = sample_inventory();

    inv.remove(2).unwrap();
    assert_eq!(inv.find_by_id(2), Err(StoreError::ItemNotFound(2)));
    assert_eq!(inv.len(), 2);
}

#[test]
fn test_delete_nonexistent_reports_not_found() {
    let mut inv = sample_inventory();

    assert_eq!(inv.remove(42), Err(StoreError::ItemNotFound(42)));
    assert_eq!(inv.len(), 3);
}

// =============================================================================
// Update cost
// =============================================================================

#[test]
fn test_update_cost_is_exact() {
    let mut inv = sample_inventory();

    inv.set_cost(3, 7.25).unwrap();
    assert_eq!(inv.find_by_id(3).unwrap().cost, 7.25);

    // Other fields untouched
    let updated = inv.find_by_id(3).unwrap();
    assert_eq!(updated.name, "Tuna");
}

#[test]
fn test_update_cost_nonexistent_reports_not_found() {
    let mut inv = sample_inventory();
    assert_eq!(inv.set_cost(42, 1.0), Err(StoreError::ItemNotFound(42)));
}

#[test]
fn test_update_cost_negative_rejected_without_mutation() {
    let mut inv = sample_inventory();

    let result = inv.set_cost(1, -5.00);
    assert!(matches!(result, Err(StoreError::Validation(_))));
    assert_eq!(inv.find_by_id(1).unwrap().cost, 0.99);
    assert!(!inv.is_dirty());
}

// =============================================================================
// Search
// =============================================================================

#[test]
fn test_find_by_name_is_case_sensitive_and_exact() {
    let inv = sample_inventory();

    assert_eq!(inv.find_by_name("Milk").unwrap().id, 2);
    assert!(inv.find_by_name("milk").is_err());
    assert!(inv.find_by_name("Mil").is_err());
    assert!(inv.find_by_name("Milky").is_err());
}

#[test]
fn test_find_by_name_returns_first_in_store_order() {
    let mut inv = sample_inventory();
    // Front-inserted duplicate name shadows the loaded record
    inv.add(item(9, "Milk", 3.10, 'D')).unwrap();

    assert_eq!(inv.find_by_name("Milk").unwrap().id, 9);
}

// =============================================================================
// List
// =============================================================================

#[test]
fn test_list_returns_each_item_exactly_once() {
    let inv = sample_inventory();

    let ids: Vec<u32> = inv.items().iter().map(|i| i.id).collect();
    assert_eq!(ids.len(), 3);
    for id in [1, 2, 3] {
        assert_eq!(ids.iter().filter(|&&i| i == id).count(), 1);
    }
}

#[test]
fn test_list_is_idempotent() {
    let inv = sample_inventory();

    let first: Vec<_> = inv.items().to_vec();
    let second: Vec<_> = inv.items().to_vec();
    assert_eq!(first, second);
    assert_eq!(inv.len(), 3);
}

// =============================================================================
// Dirty flag
// =============================================================================

#[test]
fn test_loaded_inventory_starts_clean() {
    let inv = sample_inventory();
    assert!(!inv.is_dirty());
}

#[test]
fn test_mutations_set_dirty_flag() {
    let mut inv = sample_inventory();

    inv.add(item(4, "Bread", 1.99, 'N')).unwrap();
    assert!(inv.is_dirty());

    inv.mark_clean();
    inv.remove(4).unwrap();
    assert!(inv.is_dirty());

    inv.mark_clean();
    inv.set_cost(1, 1.09).unwrap();
    assert!(inv.is_dirty());
}

#[test]
fn test_failed_operations_leave_flag_clean() {
    let mut inv = sample_inventory();

    let _ = inv.add(item(1, "Clone", 1.00, 'P'));
    let _ = inv.remove(42);
    let _ = inv.set_cost(42, 1.00);

    assert!(!inv.is_dirty());
}

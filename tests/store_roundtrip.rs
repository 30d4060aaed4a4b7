//! File-backed Store Tests
//!
//! Tests for store behavior:
//! - Put then Get on the returned ids yields the returned products
//! - Put assigns missing ids and keeps preset ones
//! - Get of an empty id list is empty; any missing id fails the call
//! - Delete removes exactly the matching files
//! - Clear leaves the listing empty

use std::fs;
use std::sync::atomic::{AtomicU64, Ordering};

use prodstore::product::{IdGenerator, Image, Product, ProductOption, ValidationError};
use prodstore::store::{FileStore, StoreConfig, StoreError};
use tempfile::TempDir;

// =============================================================================
// Test Utilities
// =============================================================================

struct Sequence(AtomicU64);

impl IdGenerator for Sequence {
    fn next_id(&self) -> String {
        format!("{:06}", self.0.fetch_add(1, Ordering::SeqCst))
    }
}

fn create_store() -> (TempDir, FileStore) {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let store = FileStore::new(
        StoreConfig::new(temp.path()),
        Box::new(Sequence(AtomicU64::new(1))),
    );
    (temp, store)
}

fn sample(name: &str) -> Product {
    Product::new(name)
        .with_option(format!("{}-small", name))
        .with_option(format!("{}-large", name))
        .with_image(format!("https://img.example/{}.png", name))
}

fn ids_of(products: &[Product]) -> Vec<String> {
    products.iter().map(|p| p.id.clone()).collect()
}

// =============================================================================
// Round trip
// =============================================================================

#[test]
fn test_put_then_get_returns_identical_products() {
    let (_temp, store) = create_store();

    let written = store
        .put(vec![sample("desk"), sample("chair"), sample("lamp")])
        .unwrap();
    let read = store.get(&ids_of(&written)).unwrap();

    assert_eq!(read, written);
}

#[test]
fn test_get_preserves_requested_order() {
    let (_temp, store) = create_store();
    let written = store.put(vec![sample("a"), sample("b")]).unwrap();

    let reversed: Vec<String> = ids_of(&written).into_iter().rev().collect();
    let read = store.get(&reversed).unwrap();

    assert_eq!(read[0].name, "b");
    assert_eq!(read[1].name, "a");
}

#[test]
fn test_persisted_file_is_named_after_id() {
    let (temp, store) = create_store();
    let written = store.put(vec![sample("desk").with_id("desk-1")]).unwrap();

    let path = temp.path().join("desk-1.json");
    let on_disk: Product = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();

    assert_eq!(on_disk, written[0]);
}

// =============================================================================
// Identifier assignment
// =============================================================================

#[test]
fn test_put_assigns_every_missing_id() {
    let (_temp, store) = create_store();

    let written = store.put(vec![sample("desk")]).unwrap();

    assert!(written[0].is_fully_identified());
    assert_eq!(written[0].id, "000001");
    assert_eq!(written[0].options[0].id, "000002");
    assert_eq!(written[0].options[1].id, "000003");
    assert_eq!(written[0].images[0].id, "000004");
}

#[test]
fn test_put_leaves_preset_ids_untouched() {
    let (_temp, store) = create_store();

    let product = Product {
        name: "desk".into(),
        id: "p-1".into(),
        options: vec![ProductOption {
            sku: "D-1".into(),
            id: "o-1".into(),
        }],
        images: vec![Image {
            url: "https://img.example/d.png".into(),
            id: "i-1".into(),
        }],
    };
    let written = store.put(vec![product.clone()]).unwrap();

    assert_eq!(written[0], product);
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn test_invalid_record_aborts_whole_batch() {
    let (_temp, store) = create_store();

    let result = store.put(vec![sample("ok"), Product::new("").with_option("x")]);

    assert!(matches!(
        result,
        Err(StoreError::Validation(ValidationError::NameRequired))
    ));
    assert!(store.list_all_paths().unwrap().is_empty());
}

// =============================================================================
// Get
// =============================================================================

#[test]
fn test_get_empty_list_succeeds() {
    let (_temp, store) = create_store();
    store.put(vec![sample("desk")]).unwrap();

    assert_eq!(store.get(&[]).unwrap(), Vec::<Product>::new());
}

#[test]
fn test_get_with_missing_id_fails_entire_call() {
    let (_temp, store) = create_store();
    let written = store.put(vec![sample("desk")]).unwrap();

    let mut ids = ids_of(&written);
    ids.push("nope".to_string());

    let err = store.get(&ids).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(ref id) if id == "nope"));
    assert!(err.to_string().contains("nope"));
}

// =============================================================================
// Delete and Clear
// =============================================================================

#[test]
fn test_delete_removes_exactly_matching_files() {
    let (_temp, store) = create_store();
    let written = store
        .put(vec![sample("a"), sample("b"), sample("c")])
        .unwrap();
    let doomed = vec![written[0].id.clone(), written[2].id.clone()];

    let removed = store.delete(&doomed).unwrap();

    assert_eq!(removed, 2);
    assert_eq!(store.list_all_paths().unwrap().len(), 1);
    assert!(matches!(store.get(&doomed), Err(StoreError::NotFound(_))));
    assert_eq!(store.get(&[written[1].id.clone()]).unwrap()[0].name, "b");
}

#[test]
fn test_delete_unknown_id_removes_nothing() {
    let (_temp, store) = create_store();
    store.put(vec![sample("a")]).unwrap();

    assert_eq!(store.delete(&["ghost".to_string()]).unwrap(), 0);
    assert_eq!(store.list_all_paths().unwrap().len(), 1);
}

#[test]
fn test_clear_empties_store() {
    let (temp, store) = create_store();
    store.put(vec![sample("a"), sample("b")]).unwrap();
    fs::write(temp.path().join("README.txt"), b"not a record").unwrap();

    assert_eq!(store.clear().unwrap(), 2);
    assert!(store.list_all_paths().unwrap().is_empty());
    assert!(temp.path().join("README.txt").exists());
}

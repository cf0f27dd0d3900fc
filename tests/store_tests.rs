//! JSON-file store behavior: whole-blob round trips and the error
//! taxonomy for missing, corrupt, and unwritable storage.

use std::fs;

use trove::adapter::store::{JsonFileStore, WISHLIST_KEY};
use trove::error::{Error, StorageError};
use trove::port::WishlistStore;
use trove::testkit::domain::product;

#[tokio::test]
async fn missing_file_loads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());

    let items = store.load().await.unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());

    let items = vec![product(1, "Red Chair"), product(2, "Desk Lamp")];
    store.save(&items).await.unwrap();

    let loaded = store.load().await.unwrap();
    assert_eq!(loaded, items);
}

#[tokio::test]
async fn save_replaces_previous_blob_in_full() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());

    store
        .save(&[product(1, "Red Chair"), product(2, "Desk Lamp")])
        .await
        .unwrap();
    store.save(&[product(3, "Armchair")]).await.unwrap();

    let loaded = store.load().await.unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].title, "Armchair");
}

#[tokio::test]
async fn save_creates_missing_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("deeper").join("still");
    let store = JsonFileStore::new(&nested);

    store.save(&[product(1, "Red Chair")]).await.unwrap();
    assert!(nested.join(WISHLIST_KEY).exists());
}

#[tokio::test]
async fn corrupt_blob_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(WISHLIST_KEY), "definitely not json").unwrap();

    let store = JsonFileStore::new(dir.path());
    let result = store.load().await;
    assert!(matches!(
        result,
        Err(Error::Storage(StorageError::Corrupt(_)))
    ));
}

#[tokio::test]
async fn unreadable_path_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    // A directory where the blob file should be makes the read fail
    // with something other than NotFound.
    fs::create_dir(dir.path().join(WISHLIST_KEY)).unwrap();

    let store = JsonFileStore::new(dir.path());
    let result = store.load().await;
    assert!(matches!(result, Err(Error::Storage(StorageError::Read(_)))));
}

#[test]
fn blob_lives_under_the_fixed_key() {
    let store = JsonFileStore::new("/some/data/dir");
    assert!(store.path().ends_with(WISHLIST_KEY));
}

//! End-to-end CLI tests for the wishlist commands. Catalog commands
//! need the network and are covered by the feature-gated live smoke
//! tests instead.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use trove::adapter::store::WISHLIST_KEY;
use trove::domain::Product;
use trove::testkit::domain::product;

fn seed_wishlist(dir: &Path, items: &[Product]) {
    let blob = serde_json::to_vec(items).expect("serialize fixture");
    fs::write(dir.join(WISHLIST_KEY), blob).expect("seed wishlist file");
}

fn read_wishlist(dir: &Path) -> Vec<Product> {
    let blob = fs::read(dir.join(WISHLIST_KEY)).expect("read wishlist file");
    serde_json::from_slice(&blob).expect("parse wishlist file")
}

fn trove() -> Command {
    Command::cargo_bin("trove").expect("binary built")
}

#[test]
fn wishlist_show_renders_seeded_items() {
    let dir = tempfile::tempdir().unwrap();
    seed_wishlist(dir.path(), &[product(1, "Red Chair"), product(2, "Desk Lamp")]);

    trove()
        .args(["wishlist", "show", "--data-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Red Chair"))
        .stdout(predicate::str::contains("Desk Lamp"))
        .stdout(predicate::str::contains("2 saved"));
}

#[test]
fn wishlist_show_reports_empty_wishlist() {
    let dir = tempfile::tempdir().unwrap();

    trove()
        .args(["wishlist", "show", "--data-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("wishlist is empty"));
}

#[test]
fn wishlist_remove_rewrites_the_stored_blob() {
    let dir = tempfile::tempdir().unwrap();
    seed_wishlist(dir.path(), &[product(1, "Red Chair"), product(2, "Desk Lamp")]);

    trove()
        .args(["wishlist", "remove", "1", "--data-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("removed product 1"));

    let remaining = read_wishlist(dir.path());
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].title, "Desk Lamp");
}

#[test]
fn wishlist_remove_of_missing_id_leaves_items_alone() {
    let dir = tempfile::tempdir().unwrap();
    seed_wishlist(dir.path(), &[product(1, "Red Chair")]);

    trove()
        .args(["wishlist", "remove", "99", "--data-dir"])
        .arg(dir.path())
        .assert()
        .success();

    let remaining = read_wishlist(dir.path());
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].title, "Red Chair");
}

#[test]
fn corrupt_blob_reads_as_empty_by_default() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(WISHLIST_KEY), "definitely not json").unwrap();

    trove()
        .args(["wishlist", "show", "--data-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("wishlist is empty"));
}

#[test]
fn strict_mode_surfaces_corrupt_blob() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(WISHLIST_KEY), "definitely not json").unwrap();

    let config = dir.path().join("trove.toml");
    fs::write(&config, "[wishlist]\nstrict = true\n").unwrap();

    trove()
        .args(["wishlist", "show", "--config"])
        .arg(&config)
        .arg("--data-dir")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid JSON"));
}

#[test]
fn cli_returns_nonzero_on_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("trove.toml");
    fs::write(&config, "[wishlist]\nper_page = 0\n").unwrap();

    trove()
        .args(["wishlist", "show", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("per_page"));
}

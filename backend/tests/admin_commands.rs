//! Integration tests for the `initdb` and `forge` workflows on SQLite.

use std::collections::HashSet;

use example_data::default_dataset;
use rstest::rstest;
use watchlist::domain::ports::{MovieRepository, UserRepository};

mod support;

use support::TestStore;

#[rstest]
#[tokio::test]
async fn initdb_then_forge_stores_sample_rows() {
    let store = TestStore::new().await;
    store.schema_admin().initdb(false).await.expect("initdb");
    let outcome = store.forge().forge(&default_dataset()).await.expect("forge");
    assert_eq!((outcome.users, outcome.movies), (1, 10));

    let users = store.users().all().await.expect("list users");
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name().as_ref(), "Sofia Xia");

    let movies = store.movies().all().await.expect("list movies");
    let pairs: Vec<(String, String)> = movies
        .iter()
        .map(|m| (m.title().to_string(), m.year().to_string()))
        .collect();
    let expected: Vec<(String, String)> = default_dataset()
        .movies()
        .iter()
        .map(|m| (m.title().to_owned(), m.year().to_owned()))
        .collect();
    assert_eq!(pairs, expected);
    assert!(pairs.contains(&("WALL-E".to_owned(), "2008".to_owned())));
}

#[rstest]
#[tokio::test]
async fn forging_twice_duplicates_every_row() {
    let store = TestStore::new().await;
    let forge = store.forge();
    forge.forge(&default_dataset()).await.expect("first forge");
    forge.forge(&default_dataset()).await.expect("second forge");

    let users = store.users().all().await.expect("list users");
    let movies = store.movies().all().await.expect("list movies");
    assert_eq!(users.len(), 2);
    assert_eq!(movies.len(), 20);

    let ids: HashSet<i64> = movies.iter().map(|m| m.id().get()).collect();
    assert_eq!(ids.len(), 20);
}

#[rstest]
#[tokio::test]
async fn forge_creates_missing_schema() {
    let store = TestStore::new().await;
    store.forge().forge(&default_dataset()).await.expect("forge");

    let first = store.movies().first().await.expect("first movie");
    assert_eq!(
        first.map(|m| m.title().to_string()).as_deref(),
        Some("My Neighbor Totoro")
    );
}

#[rstest]
#[tokio::test]
async fn initdb_without_drop_keeps_rows() {
    let store = TestStore::new().await;
    store.forge().forge(&default_dataset()).await.expect("forge");

    let outcome = store.schema_admin().initdb(false).await.expect("initdb");
    assert!(!outcome.dropped);
    assert_eq!(store.movies().all().await.expect("list movies").len(), 10);
}

#[rstest]
#[tokio::test]
async fn initdb_with_drop_empties_both_tables() {
    let store = TestStore::new().await;
    store.forge().forge(&default_dataset()).await.expect("forge");
    store.forge().forge(&default_dataset()).await.expect("forge again");

    let outcome = store.schema_admin().initdb(true).await.expect("initdb --drop");
    assert!(outcome.dropped);
    assert!(store.users().all().await.expect("list users").is_empty());
    assert!(store.movies().all().await.expect("list movies").is_empty());
    assert!(store.users().first().await.expect("first user").is_none());
}

#[rstest]
#[tokio::test]
async fn initdb_with_drop_on_fresh_database_succeeds() {
    let store = TestStore::new().await;
    store.schema_admin().initdb(true).await.expect("initdb --drop");
    store.schema_admin().initdb(false).await.expect("initdb again");
    assert!(store.movies().all().await.expect("list movies").is_empty());
}

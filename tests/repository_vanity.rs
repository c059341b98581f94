//! PostgreSQL repository tests.
//!
//! Require a reachable database in `DATABASE_URL`; run with
//! `cargo test -- --ignored`.

use sqlx::PgPool;
use std::sync::Arc;
use vanity_url::domain::entities::{NewVanityRecord, RedirectKind};
use vanity_url::domain::repositories::VanityRepository;
use vanity_url::infrastructure::persistence::PgVanityRepository;

fn new_record(vanity_url: &str, site: &str, link: &str) -> NewVanityRecord {
    NewVanityRecord {
        vanity_url: vanity_url.to_string(),
        site: site.to_string(),
        link: link.to_string(),
        redirect_kind: RedirectKind::Redirect,
    }
}

#[sqlx::test]
#[ignore = "requires PostgreSQL"]
async fn test_insert_and_find(pool: PgPool) {
    let repo = PgVanityRepository::new(Arc::new(pool));

    let created = repo
        .insert(new_record("/promo", "default", "https://example.com/landing"))
        .await
        .unwrap();
    assert_eq!(created.vanity_url, "/promo");

    let found = repo.find_first("/promo", "default").await.unwrap().unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.link, "https://example.com/landing");
    assert_eq!(found.redirect_kind, RedirectKind::Redirect);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL"]
async fn test_find_scoped_to_site(pool: PgPool) {
    let repo = PgVanityRepository::new(Arc::new(pool));
    repo.insert(new_record("/promo", "default", "https://example.com"))
        .await
        .unwrap();

    assert!(repo.find_first("/promo", "shop").await.unwrap().is_none());
    assert!(repo.find_first("/other", "default").await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires PostgreSQL"]
async fn test_lowest_id_wins(pool: PgPool) {
    let repo = PgVanityRepository::new(Arc::new(pool));
    let first = repo
        .insert(new_record("/dup", "default", "https://first.example.com"))
        .await
        .unwrap();
    repo.insert(new_record("/dup", "default", "https://second.example.com"))
        .await
        .unwrap();

    let found = repo.find_first("/dup", "default").await.unwrap().unwrap();
    assert_eq!(found.id, first.id);
    assert_eq!(repo.count().await.unwrap(), 2);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL"]
async fn test_permanent_kind_round_trips(pool: PgPool) {
    let repo = PgVanityRepository::new(Arc::new(pool));
    let mut record = new_record("/old", "default", "https://example.com/new");
    record.redirect_kind = RedirectKind::Permanent;

    repo.insert(record).await.unwrap();

    let found = repo.find_first("/old", "default").await.unwrap().unwrap();
    assert_eq!(found.redirect_kind, RedirectKind::Permanent);
}

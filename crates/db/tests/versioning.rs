//! Integration tests for version snapshots and the published pointer.
//!
//! Covers the guarantees the publishing pipeline builds on:
//! - Snapshots round-trip byte-for-byte
//! - The pointer flip is ownership-guarded and single-row atomic
//! - The published version cannot be deleted while referenced
//! - History pruning never touches the live version

use assert_matches::assert_matches;
use sqlx::PgPool;

use pagesmith_db::models::version::CreateVersion;
use pagesmith_db::models::website::CreateWebsite;
use pagesmith_db::repositories::{VersionRepo, WebsiteRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_website(name: &str, subdomain: &str) -> CreateWebsite {
    CreateWebsite {
        name: name.to_string(),
        subdomain: subdomain.to_string(),
        owner_user_id: None,
        settings: None,
    }
}

fn tree(heading: &str) -> serde_json::Value {
    serde_json::json!([{
        "id": "home",
        "name": "Home",
        "slug": "/",
        "elements": [
            { "id": "el-1", "type": "heading", "order": 0, "config": { "text": heading } }
        ]
    }])
}

fn new_version(pages: serde_json::Value) -> CreateVersion {
    CreateVersion {
        pages,
        settings: serde_json::json!({}),
        created_by: None,
    }
}

// ---------------------------------------------------------------------------
// Snapshots
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn version_snapshot_round_trips(pool: PgPool) {
    let site = WebsiteRepo::create(&pool, &new_website("Acme", "acme"))
        .await
        .unwrap();

    let pages = tree("Welcome");
    let version = VersionRepo::create(&pool, site.id, &new_version(pages.clone()))
        .await
        .unwrap();

    let fetched = VersionRepo::find_by_id(&pool, version.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.website_id, site.id);
    assert_eq!(fetched.pages, pages);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn version_create_requires_an_existing_website(pool: PgPool) {
    let err = VersionRepo::create(&pool, 999_999, &new_version(tree("x")))
        .await
        .unwrap_err();
    // Foreign key violation.
    let db_err = assert_matches!(err, sqlx::Error::Database(db_err) => db_err);
    assert_eq!(db_err.code().as_deref(), Some("23503"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn version_list_is_newest_first_with_page_counts(pool: PgPool) {
    let site = WebsiteRepo::create(&pool, &new_website("Acme", "acme"))
        .await
        .unwrap();

    let first = VersionRepo::create(&pool, site.id, &new_version(tree("one")))
        .await
        .unwrap();
    let mut two_pages = tree("two").as_array().unwrap().clone();
    two_pages.push(serde_json::json!({
        "id": "about", "name": "About", "slug": "/about", "elements": []
    }));
    let second = VersionRepo::create(
        &pool,
        site.id,
        &new_version(serde_json::Value::Array(two_pages)),
    )
    .await
    .unwrap();

    let summaries = VersionRepo::list_by_website(&pool, site.id).await.unwrap();
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].id, second.id);
    assert_eq!(summaries[0].page_count, 2);
    assert_eq!(summaries[1].id, first.id);
    assert_eq!(summaries[1].page_count, 1);
}

// ---------------------------------------------------------------------------
// Pointer flip
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn pointer_flip_installs_an_owned_version(pool: PgPool) {
    let site = WebsiteRepo::create(&pool, &new_website("Acme", "acme"))
        .await
        .unwrap();
    let version = VersionRepo::create(&pool, site.id, &new_version(tree("v1")))
        .await
        .unwrap();

    let updated = WebsiteRepo::set_published_version(&pool, site.id, version.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.published_version_id, Some(version.id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn pointer_flip_rejects_a_foreign_version(pool: PgPool) {
    let mine = WebsiteRepo::create(&pool, &new_website("Mine", "mine"))
        .await
        .unwrap();
    let theirs = WebsiteRepo::create(&pool, &new_website("Theirs", "theirs"))
        .await
        .unwrap();
    let their_version = VersionRepo::create(&pool, theirs.id, &new_version(tree("x")))
        .await
        .unwrap();

    let result = WebsiteRepo::set_published_version(&pool, mine.id, their_version.id)
        .await
        .unwrap();
    assert!(result.is_none());

    let site = WebsiteRepo::find_by_id(&pool, mine.id).await.unwrap().unwrap();
    assert!(site.published_version_id.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn successive_publishes_leave_both_versions_retrievable(pool: PgPool) {
    let site = WebsiteRepo::create(&pool, &new_website("Acme", "acme"))
        .await
        .unwrap();

    let v1 = VersionRepo::create(&pool, site.id, &new_version(tree("first")))
        .await
        .unwrap();
    WebsiteRepo::set_published_version(&pool, site.id, v1.id)
        .await
        .unwrap();

    let v2 = VersionRepo::create(&pool, site.id, &new_version(tree("second")))
        .await
        .unwrap();
    let updated = WebsiteRepo::set_published_version(&pool, site.id, v2.id)
        .await
        .unwrap()
        .unwrap();

    // The pointer references the later flip; both snapshots survive.
    assert_eq!(updated.published_version_id, Some(v2.id));
    assert!(VersionRepo::find_by_id(&pool, v1.id).await.unwrap().is_some());
    assert!(VersionRepo::find_by_id(&pool, v2.id).await.unwrap().is_some());
}

// ---------------------------------------------------------------------------
// Deletion protection
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn published_version_cannot_be_deleted(pool: PgPool) {
    let site = WebsiteRepo::create(&pool, &new_website("Acme", "acme"))
        .await
        .unwrap();
    let version = VersionRepo::create(&pool, site.id, &new_version(tree("live")))
        .await
        .unwrap();
    WebsiteRepo::set_published_version(&pool, site.id, version.id)
        .await
        .unwrap();

    let err = sqlx::query("DELETE FROM versions WHERE id = $1")
        .bind(version.id)
        .execute(&pool)
        .await
        .unwrap_err();
    // Restricted by fk_websites_published_version.
    let db_err = assert_matches!(err, sqlx::Error::Database(db_err) => db_err);
    assert_eq!(db_err.code().as_deref(), Some("23503"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn pruning_keeps_the_published_and_newest_versions(pool: PgPool) {
    let site = WebsiteRepo::create(&pool, &new_website("Acme", "acme"))
        .await
        .unwrap();

    let mut ids = Vec::new();
    for i in 0..5 {
        let v = VersionRepo::create(&pool, site.id, &new_version(tree(&format!("v{i}"))))
            .await
            .unwrap();
        ids.push(v.id);
    }
    // Publish the oldest, then prune down to the 2 newest.
    WebsiteRepo::set_published_version(&pool, site.id, ids[0])
        .await
        .unwrap();
    let deleted = VersionRepo::delete_unreferenced(&pool, site.id, 2)
        .await
        .unwrap();
    assert_eq!(deleted, 2);

    // Published + 2 newest survive, the middle two are gone.
    assert!(VersionRepo::find_by_id(&pool, ids[0]).await.unwrap().is_some());
    assert!(VersionRepo::find_by_id(&pool, ids[1]).await.unwrap().is_none());
    assert!(VersionRepo::find_by_id(&pool, ids[2]).await.unwrap().is_none());
    assert!(VersionRepo::find_by_id(&pool, ids[3]).await.unwrap().is_some());
    assert!(VersionRepo::find_by_id(&pool, ids[4]).await.unwrap().is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_a_website_cascades_to_its_versions(pool: PgPool) {
    let site = WebsiteRepo::create(&pool, &new_website("Acme", "acme"))
        .await
        .unwrap();
    let version = VersionRepo::create(&pool, site.id, &new_version(tree("live")))
        .await
        .unwrap();
    WebsiteRepo::set_published_version(&pool, site.id, version.id)
        .await
        .unwrap();

    assert!(WebsiteRepo::delete(&pool, site.id).await.unwrap());
    assert!(VersionRepo::find_by_id(&pool, version.id)
        .await
        .unwrap()
        .is_none());
}

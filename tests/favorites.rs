use std::thread::sleep;
use std::time::Duration;

use anyhow::Result;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use emoji_copier_lib::{migrate, repo};

async fn setup_pool() -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    migrate::apply_migrations(&pool).await?;
    migrate::seed_catalog(&pool).await?;
    Ok(pool)
}

#[tokio::test]
async fn add_is_idempotent() -> Result<()> {
    let pool = setup_pool().await?;
    assert!(repo::add_favorite(&pool, 1).await?);
    assert!(repo::add_favorite(&pool, 1).await?);

    let favorites = repo::favorites(&pool).await?;
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].id, 1);
    assert!(favorites[0].is_favorite);
    Ok(())
}

#[tokio::test]
async fn add_unknown_id_is_refused() -> Result<()> {
    let pool = setup_pool().await?;
    assert!(!repo::add_favorite(&pool, 99_999).await?);
    assert!(repo::favorites(&pool).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn remove_without_mark_is_false_and_list_unchanged() -> Result<()> {
    let pool = setup_pool().await?;
    assert!(repo::add_favorite(&pool, 2).await?);

    assert!(!repo::remove_favorite(&pool, 3).await?);
    let favorites = repo::favorites(&pool).await?;
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].id, 2);

    assert!(repo::remove_favorite(&pool, 2).await?);
    assert!(repo::favorites(&pool).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn list_orders_most_recently_favorited_first() -> Result<()> {
    let pool = setup_pool().await?;
    // Millisecond timestamps order the list, so space the writes out.
    for id in [1, 2, 3] {
        assert!(repo::add_favorite(&pool, id).await?);
        sleep(Duration::from_millis(3));
    }
    // Re-adding bumps the mark to most recent.
    assert!(repo::add_favorite(&pool, 1).await?);

    let ids: Vec<i64> = repo::favorites(&pool).await?.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 3, 2]);
    Ok(())
}

#[tokio::test]
async fn is_favorite_is_a_live_view_on_catalog_reads() -> Result<()> {
    let pool = setup_pool().await?;
    assert!(repo::add_favorite(&pool, 11).await?);

    let all = repo::list_by_category(&pool, "").await?;
    let cat = all.iter().find(|e| e.id == 11).expect("seeded cat");
    assert!(cat.is_favorite);

    assert!(repo::remove_favorite(&pool, 11).await?);
    let all = repo::list_by_category(&pool, "").await?;
    let cat = all.iter().find(|e| e.id == 11).expect("seeded cat");
    assert!(!cat.is_favorite);
    Ok(())
}

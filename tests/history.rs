use anyhow::Result;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use emoji_copier_lib::memory::HISTORY_RETENTION_CAP;
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

async fn history_count(pool: &SqlitePool) -> Result<i64> {
    Ok(sqlx::query_scalar("SELECT COUNT(*) FROM history")
        .fetch_one(pool)
        .await?)
}

#[tokio::test]
async fn retention_cap_evicts_oldest_events() -> Result<()> {
    let pool = setup_pool().await?;
    for _ in 0..25 {
        assert!(repo::record_use(&pool, 1).await?);
    }
    assert_eq!(history_count(&pool).await? as usize, HISTORY_RETENTION_CAP);

    // The oldest five rows are the ones that went.
    let min_id: i64 = sqlx::query_scalar("SELECT MIN(id) FROM history")
        .fetch_one(&pool)
        .await?;
    assert_eq!(min_id, 6);
    Ok(())
}

#[tokio::test]
async fn record_unknown_id_is_refused() -> Result<()> {
    let pool = setup_pool().await?;
    assert!(!repo::record_use(&pool, 99_999).await?);
    assert_eq!(history_count(&pool).await?, 0);
    Ok(())
}

#[tokio::test]
async fn recent_dedupes_keeping_most_recent_rank() -> Result<()> {
    let pool = setup_pool().await?;
    for id in [1, 2, 1, 3, 4] {
        assert!(repo::record_use(&pool, id).await?);
    }

    let top3: Vec<i64> = repo::recent(&pool, 3).await?.iter().map(|e| e.id).collect();
    assert_eq!(top3, vec![4, 3, 1]);

    let all: Vec<i64> = repo::recent(&pool, 10).await?.iter().map(|e| e.id).collect();
    assert_eq!(all, vec![4, 3, 1, 2]);
    Ok(())
}

#[tokio::test]
async fn recent_resolves_live_favorite_state() -> Result<()> {
    let pool = setup_pool().await?;
    assert!(repo::record_use(&pool, 7).await?);
    assert!(repo::add_favorite(&pool, 7).await?);

    let recents = repo::recent(&pool, 5).await?;
    assert_eq!(recents.len(), 1);
    assert!(recents[0].is_favorite);
    assert!(!recents[0].keywords.is_empty());
    Ok(())
}

#[tokio::test]
async fn remove_drops_every_event_for_the_id() -> Result<()> {
    let pool = setup_pool().await?;
    for id in [5, 6, 5] {
        assert!(repo::record_use(&pool, id).await?);
    }

    assert!(repo::remove_history(&pool, 5).await?);
    assert!(!repo::remove_history(&pool, 5).await?);
    assert_eq!(history_count(&pool).await?, 1);

    let remaining: Vec<i64> = repo::recent(&pool, 10).await?.iter().map(|e| e.id).collect();
    assert_eq!(remaining, vec![6]);
    Ok(())
}

#[tokio::test]
async fn clear_succeeds_even_when_already_empty() -> Result<()> {
    let pool = setup_pool().await?;
    assert!(repo::clear_history(&pool).await?);

    assert!(repo::record_use(&pool, 1).await?);
    assert!(repo::clear_history(&pool).await?);
    assert_eq!(history_count(&pool).await?, 0);
    Ok(())
}

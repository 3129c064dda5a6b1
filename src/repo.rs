//! SQL implementations of the store operations.
//!
//! Every read attaches `is_favorite` via an EXISTS subquery and aggregates
//! keywords as one comma-joined column, so both read paths deserialize the
//! same way.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::error::{AppError, AppResult};
use crate::memory::{tokenize, HISTORY_RETENTION_CAP};
use crate::model::Emoji;
use crate::time::now_ms;

const EMOJI_COLUMNS: &str = "e.id, e.glyph, e.short_name, e.group_name, e.subgroup, \
     (SELECT GROUP_CONCAT(k.keyword) FROM emoji_keywords ek \
        JOIN keywords k ON k.id = ek.keyword_id \
       WHERE ek.emoji_id = e.id) AS keywords_csv, \
     EXISTS (SELECT 1 FROM favorites f WHERE f.emoji_id = e.id) AS is_favorite";

fn emoji_from_row(row: &SqliteRow) -> AppResult<Emoji> {
    let keywords_csv: Option<String> = row.try_get("keywords_csv").map_err(AppError::from)?;
    Ok(Emoji {
        id: row.try_get("id").map_err(AppError::from)?,
        glyph: row.try_get("glyph").map_err(AppError::from)?,
        short_name: row.try_get("short_name").map_err(AppError::from)?,
        group_name: row.try_get("group_name").map_err(AppError::from)?,
        subgroup: row.try_get("subgroup").map_err(AppError::from)?,
        keywords: keywords_csv
            .map(|csv| {
                csv.split(',')
                    .filter(|k| !k.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default(),
        is_favorite: row
            .try_get::<i64, _>("is_favorite")
            .map(|v| v != 0)
            .map_err(AppError::from)?,
    })
}

fn collect(rows: Vec<SqliteRow>) -> AppResult<Vec<Emoji>> {
    rows.iter().map(emoji_from_row).collect()
}

async fn emoji_exists(pool: &SqlitePool, id: i64) -> AppResult<bool> {
    let hit: Option<i64> = sqlx::query_scalar("SELECT 1 FROM emojis WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(AppError::from)?;
    Ok(hit.is_some())
}

/// Distinct categories in catalog order.
pub async fn categories(pool: &SqlitePool) -> AppResult<Vec<String>> {
    sqlx::query_scalar(
        "SELECT group_name FROM emojis WHERE group_name <> '' \
         GROUP BY group_name ORDER BY MIN(id)",
    )
    .fetch_all(pool)
    .await
    .map_err(AppError::from)
}

/// Empty category lists the whole catalog, name-ordered case-insensitively.
pub async fn list_by_category(pool: &SqlitePool, category: &str) -> AppResult<Vec<Emoji>> {
    let mut sql = format!("SELECT {EMOJI_COLUMNS} FROM emojis e");
    if !category.is_empty() {
        sql.push_str(" WHERE e.group_name = ?");
    }
    sql.push_str(" ORDER BY e.short_name COLLATE NOCASE ASC");

    let mut query = sqlx::query(&sql);
    if !category.is_empty() {
        query = query.bind(category);
    }
    let rows = query.fetch_all(pool).await.map_err(AppError::from)?;
    collect(rows)
}

/// Tokenized substring search: every token must hit the name or a keyword.
pub async fn search(pool: &SqlitePool, query: &str) -> AppResult<Vec<Emoji>> {
    let terms = tokenize(query);
    if terms.is_empty() {
        return Ok(Vec::new());
    }

    let mut sql = format!("SELECT {EMOJI_COLUMNS} FROM emojis e WHERE ");
    let clauses: Vec<&str> = terms
        .iter()
        .map(|_| {
            "(LOWER(e.short_name) LIKE ? OR EXISTS (\
               SELECT 1 FROM emoji_keywords ek \
                 JOIN keywords k ON k.id = ek.keyword_id \
                WHERE ek.emoji_id = e.id AND LOWER(k.keyword) LIKE ?))"
        })
        .collect();
    sql.push_str(&clauses.join(" AND "));
    sql.push_str(" ORDER BY e.short_name COLLATE NOCASE ASC");

    let mut q = sqlx::query(&sql);
    for term in &terms {
        let pattern = format!("%{term}%");
        q = q.bind(pattern.clone()).bind(pattern);
    }
    let rows = q.fetch_all(pool).await.map_err(AppError::from)?;
    collect(rows)
}

/// Most recently favorited first.
pub async fn favorites(pool: &SqlitePool) -> AppResult<Vec<Emoji>> {
    let sql = format!(
        "SELECT {EMOJI_COLUMNS} FROM emojis e \
         JOIN favorites f ON f.emoji_id = e.id \
         ORDER BY f.created_at DESC, e.id ASC"
    );
    let rows = sqlx::query(&sql)
        .fetch_all(pool)
        .await
        .map_err(AppError::from)?;
    collect(rows)
}

/// Idempotent: re-adding replaces the mark and bumps its timestamp.
pub async fn add_favorite(pool: &SqlitePool, id: i64) -> AppResult<bool> {
    if !emoji_exists(pool, id).await? {
        return Ok(false);
    }
    sqlx::query(
        "INSERT INTO favorites (emoji_id, created_at) VALUES (?, ?) \
         ON CONFLICT (emoji_id) DO UPDATE SET created_at = excluded.created_at",
    )
    .bind(id)
    .bind(now_ms())
    .execute(pool)
    .await
    .map_err(AppError::from)?;
    Ok(true)
}

pub async fn remove_favorite(pool: &SqlitePool, id: i64) -> AppResult<bool> {
    let res = sqlx::query("DELETE FROM favorites WHERE emoji_id = ?")
        .bind(id)
        .execute(pool)
        .await
        .map_err(AppError::from)?;
    Ok(res.rows_affected() > 0)
}

/// Appends a usage event, then evicts everything past the retention cap.
pub async fn record_use(pool: &SqlitePool, id: i64) -> AppResult<bool> {
    if !emoji_exists(pool, id).await? {
        return Ok(false);
    }
    sqlx::query("INSERT INTO history (emoji_id, used_at) VALUES (?, ?)")
        .bind(id)
        .bind(now_ms())
        .execute(pool)
        .await
        .map_err(AppError::from)?;
    sqlx::query(
        "DELETE FROM history WHERE id IN (\
           SELECT id FROM history ORDER BY used_at DESC, id DESC LIMIT -1 OFFSET ?)",
    )
    .bind(HISTORY_RETENTION_CAP as i64)
    .execute(pool)
    .await
    .map_err(AppError::from)?;
    Ok(true)
}

/// Deduped by emoji, each id ranked by its most recent use.
pub async fn recent(pool: &SqlitePool, limit: i64) -> AppResult<Vec<Emoji>> {
    let sql = format!(
        "SELECT {EMOJI_COLUMNS}, MAX(h.used_at) AS last_used FROM emojis e \
         JOIN history h ON h.emoji_id = e.id \
         GROUP BY e.id \
         ORDER BY last_used DESC, MAX(h.id) DESC \
         LIMIT ?"
    );
    let rows = sqlx::query(&sql)
        .bind(limit)
        .fetch_all(pool)
        .await
        .map_err(AppError::from)?;
    collect(rows)
}

/// Removes every recorded use of the id, not just the latest event.
pub async fn remove_history(pool: &SqlitePool, id: i64) -> AppResult<bool> {
    let res = sqlx::query("DELETE FROM history WHERE emoji_id = ?")
        .bind(id)
        .execute(pool)
        .await
        .map_err(AppError::from)?;
    Ok(res.rows_affected() > 0)
}

/// Succeeds even when the log is already empty.
pub async fn clear_history(pool: &SqlitePool) -> AppResult<bool> {
    sqlx::query("DELETE FROM history")
        .execute(pool)
        .await
        .map_err(AppError::from)?;
    Ok(true)
}

use sha2::{Digest, Sha256};
use sqlx::{Executor, Row, SqlitePool};
use std::collections::HashMap;

use crate::dataset::SEED_CATALOG;
use crate::time::now_ms;
use tracing::{error, info};

fn preview(sql: &str) -> String {
    let one_line = sql.replace(['\n', '\t'], " ");
    let trimmed = one_line.trim();
    if trimmed.len() > 160 {
        format!("{}…", &trimmed[..160])
    } else {
        trimmed.to_string()
    }
}

static MIGRATIONS: &[(&str, &str)] = &[
    (
        "202608251200_initial.sql",
        include_str!("../migrations/202608251200_initial.sql"),
    ),
    (
        "202608251210_search_indexes.sql",
        include_str!("../migrations/202608251210_search_indexes.sql"),
    ),
];

fn checksum_of(raw_sql: &str) -> (String, String) {
    let cleaned = raw_sql
        .lines()
        .filter(|line| {
            let t = line.trim_start();
            !(t.is_empty() || t.starts_with("--"))
        })
        .collect::<Vec<_>>()
        .join("\n");
    let checksum = format!("{:x}", Sha256::digest(cleaned.as_bytes()));
    (cleaned, checksum)
}

pub async fn apply_migrations(pool: &SqlitePool) -> anyhow::Result<()> {
    pool.execute(
        "CREATE TABLE IF NOT EXISTS schema_migrations (\
           version   TEXT PRIMARY KEY,\
           applied_at INTEGER NOT NULL,\
           checksum TEXT NOT NULL\
         )",
    )
    .await?;

    let rows = sqlx::query("SELECT version, checksum FROM schema_migrations")
        .fetch_all(pool)
        .await?;
    let mut applied: HashMap<String, String> = HashMap::new();
    for r in rows {
        if let (Ok(v), Ok(c)) = (
            r.try_get::<String, _>("version"),
            r.try_get::<String, _>("checksum"),
        ) {
            applied.insert(v, c);
        }
    }

    for (filename, raw_sql) in MIGRATIONS {
        let (cleaned, checksum) = checksum_of(raw_sql);

        if let Some(stored) = applied.get(*filename) {
            if stored != &checksum {
                anyhow::bail!("migration {} edited after application", filename);
            }
            info!(target = "emoji_copier", event = "migration_skip_file", file = %filename);
            continue;
        }

        let mut tx = pool.begin().await?;
        for stmt in cleaned.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            info!(target = "emoji_copier", event = "migration_stmt", file = %filename, sql = %preview(s));
            if let Err(e) = sqlx::query(s).execute(&mut *tx).await {
                error!(target = "emoji_copier", event = "migration_stmt_error", file = %filename, sql = %preview(s), error = %e);
                return Err(e.into());
            }
        }

        sqlx::query(
            "INSERT INTO schema_migrations (version, applied_at, checksum) VALUES (?, ?, ?)",
        )
        .bind(*filename)
        .bind(now_ms())
        .bind(&checksum)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        info!(target = "emoji_copier", event = "migration_file_applied", file = %filename);
    }

    Ok(())
}

/// Insert the built-in catalog into an empty `emojis` table.
///
/// The catalog is seeded once and read-only afterwards; a non-empty table is
/// left untouched so user databases built from a larger dataset keep theirs.
pub async fn seed_catalog(pool: &SqlitePool) -> anyhow::Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM emojis")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        info!(target = "emoji_copier", event = "catalog_seed_skip", rows = count);
        return Ok(());
    }

    let now = now_ms();
    let mut tx = pool.begin().await?;
    for emoji in SEED_CATALOG {
        sqlx::query(
            "INSERT INTO emojis (id, glyph, short_name, group_name, subgroup, created_at) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(emoji.id)
        .bind(emoji.glyph)
        .bind(emoji.short_name)
        .bind(emoji.group_name)
        .bind(emoji.subgroup)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        // The display name doubles as a search keyword.
        let mut keywords: Vec<&str> = emoji.keywords.to_vec();
        if !keywords.contains(&emoji.short_name) {
            keywords.push(emoji.short_name);
        }
        for keyword in keywords {
            sqlx::query("INSERT OR IGNORE INTO keywords (keyword) VALUES (?)")
                .bind(keyword)
                .execute(&mut *tx)
                .await?;
            sqlx::query(
                "INSERT OR IGNORE INTO emoji_keywords (emoji_id, keyword_id) \
                 SELECT ?, id FROM keywords WHERE keyword = ?",
            )
            .bind(emoji.id)
            .bind(keyword)
            .execute(&mut *tx)
            .await?;
        }
    }
    tx.commit().await?;
    info!(
        target = "emoji_copier",
        event = "catalog_seeded",
        rows = SEED_CATALOG.len()
    );
    Ok(())
}

//! Persistence gateway.
//!
//! One facade over two backends: SQLite when it opens and migrates cleanly,
//! otherwise the in-process mirror. The mode is decided once at open and held
//! for the process lifetime; there is no runtime re-probing. In durable mode
//! an individual operation that fails is degraded to the mirror equivalent so
//! no error ever reaches a caller.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use sqlx::SqlitePool;

use crate::error::AppError;
use crate::memory::MemoryStore;
use crate::model::Emoji;
use crate::{db, migrate, repo};

enum Backend {
    Durable(SqlitePool),
    InMemory,
}

pub struct Gateway {
    backend: Backend,
    mirror: Mutex<MemoryStore>,
}

impl Gateway {
    /// Open the durable store, falling back to the mirror when the database
    /// cannot be opened, migrated or seeded. Never fails.
    pub async fn open(db_path: &Path) -> Gateway {
        match Self::try_open_durable(db_path).await {
            Ok(pool) => {
                tracing::info!(target = "emoji_copier", event = "gateway_mode", mode = "durable");
                Gateway {
                    backend: Backend::Durable(pool),
                    mirror: Mutex::new(MemoryStore::from_seed()),
                }
            }
            Err(err) => {
                tracing::warn!(
                    target = "emoji_copier",
                    event = "gateway_fallback",
                    error = %err,
                    path = %db_path.display()
                );
                Gateway::in_memory()
            }
        }
    }

    async fn try_open_durable(db_path: &Path) -> anyhow::Result<SqlitePool> {
        let pool = db::open_sqlite_pool(db_path).await?;
        migrate::apply_migrations(&pool).await?;
        migrate::seed_catalog(&pool).await?;
        Ok(pool)
    }

    /// Wrap an already-migrated pool; used by tests and the maintenance CLI.
    pub fn from_pool(pool: SqlitePool) -> Gateway {
        Gateway {
            backend: Backend::Durable(pool),
            mirror: Mutex::new(MemoryStore::from_seed()),
        }
    }

    pub fn in_memory() -> Gateway {
        Gateway::with_mirror(MemoryStore::from_seed())
    }

    pub fn with_mirror(store: MemoryStore) -> Gateway {
        Gateway {
            backend: Backend::InMemory,
            mirror: Mutex::new(store),
        }
    }

    pub fn is_durable(&self) -> bool {
        matches!(self.backend, Backend::Durable(_))
    }

    fn mirror(&self) -> MutexGuard<'_, MemoryStore> {
        self.mirror.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn degraded(&self, operation: &str, err: &AppError) {
        tracing::warn!(
            target = "emoji_copier",
            event = "op_degraded",
            operation,
            error = %err
        );
    }

    pub async fn categories(&self) -> Vec<String> {
        match &self.backend {
            Backend::Durable(pool) => match repo::categories(pool).await {
                Ok(rows) => rows,
                Err(err) => {
                    self.degraded("categories", &err);
                    self.mirror().categories()
                }
            },
            Backend::InMemory => self.mirror().categories(),
        }
    }

    pub async fn list_by_category(&self, category: &str) -> Vec<Emoji> {
        match &self.backend {
            Backend::Durable(pool) => match repo::list_by_category(pool, category).await {
                Ok(rows) => rows,
                Err(err) => {
                    self.degraded("list_by_category", &err);
                    self.mirror().list_by_category(category)
                }
            },
            Backend::InMemory => self.mirror().list_by_category(category),
        }
    }

    pub async fn search(&self, query: &str) -> Vec<Emoji> {
        match &self.backend {
            Backend::Durable(pool) => match repo::search(pool, query).await {
                Ok(rows) => rows,
                Err(err) => {
                    self.degraded("search", &err);
                    self.mirror().search(query)
                }
            },
            Backend::InMemory => self.mirror().search(query),
        }
    }

    pub async fn favorites(&self) -> Vec<Emoji> {
        match &self.backend {
            Backend::Durable(pool) => match repo::favorites(pool).await {
                Ok(rows) => rows,
                Err(err) => {
                    self.degraded("favorites", &err);
                    self.mirror().favorites()
                }
            },
            Backend::InMemory => self.mirror().favorites(),
        }
    }

    pub async fn add_favorite(&self, id: i64) -> bool {
        match &self.backend {
            Backend::Durable(pool) => match repo::add_favorite(pool, id).await {
                Ok(added) => added,
                Err(err) => {
                    self.degraded("add_favorite", &err);
                    self.mirror().add_favorite(id)
                }
            },
            Backend::InMemory => self.mirror().add_favorite(id),
        }
    }

    pub async fn remove_favorite(&self, id: i64) -> bool {
        match &self.backend {
            Backend::Durable(pool) => match repo::remove_favorite(pool, id).await {
                Ok(removed) => removed,
                Err(err) => {
                    self.degraded("remove_favorite", &err);
                    self.mirror().remove_favorite(id)
                }
            },
            Backend::InMemory => self.mirror().remove_favorite(id),
        }
    }

    pub async fn record_use(&self, id: i64) -> bool {
        match &self.backend {
            Backend::Durable(pool) => match repo::record_use(pool, id).await {
                Ok(recorded) => recorded,
                Err(err) => {
                    self.degraded("record_use", &err);
                    self.mirror().record_use(id)
                }
            },
            Backend::InMemory => self.mirror().record_use(id),
        }
    }

    pub async fn recent(&self, limit: i64) -> Vec<Emoji> {
        let limit = limit.max(0);
        match &self.backend {
            Backend::Durable(pool) => match repo::recent(pool, limit).await {
                Ok(rows) => rows,
                Err(err) => {
                    self.degraded("recent", &err);
                    self.mirror().recent(limit as usize)
                }
            },
            Backend::InMemory => self.mirror().recent(limit as usize),
        }
    }

    pub async fn remove_history(&self, id: i64) -> bool {
        match &self.backend {
            Backend::Durable(pool) => match repo::remove_history(pool, id).await {
                Ok(removed) => removed,
                Err(err) => {
                    self.degraded("remove_history", &err);
                    self.mirror().remove_history(id)
                }
            },
            Backend::InMemory => self.mirror().remove_history(id),
        }
    }

    pub async fn clear_history(&self) -> bool {
        match &self.backend {
            Backend::Durable(pool) => match repo::clear_history(pool).await {
                Ok(cleared) => cleared,
                Err(err) => {
                    self.degraded("clear_history", &err);
                    self.mirror().clear_history()
                }
            },
            Backend::InMemory => self.mirror().clear_history(),
        }
    }
}

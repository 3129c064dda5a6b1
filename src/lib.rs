//! Local emoji catalog with favorites and a capped usage history.
//!
//! The crate ends at the command boundary in [`commands`]; a presentation
//! layer drives those verbs and renders the results. Persistence goes through
//! [`store::Gateway`], which prefers SQLite and silently degrades to an
//! in-process mirror seeded with the built-in dataset.

pub mod commands;
pub mod dataset;
pub mod db;
mod error;
pub mod logging;
pub mod memory;
pub mod migrate;
pub mod model;
pub mod repo;
pub mod store;
pub mod time;
mod util;

pub use error::{AppError, AppResult};
pub use model::{Emoji, HistoryEvent};
pub use store::Gateway;

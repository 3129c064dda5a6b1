//! Command boundary.
//!
//! One async verb per store operation. A verb never surfaces an internal
//! failure: errors and panics are logged and replaced with a safe default
//! (empty list or `false`), so the presentation layer sees best-effort data
//! at worst.

use crate::error::AppError;
use crate::model::Emoji;
use crate::store::Gateway;
use crate::util::dispatch_async_with_fence;

/// Recents limit used when the caller does not supply one.
pub const DEFAULT_RECENT_LIMIT: i64 = 20;

fn command_failed(command: &str, err: &AppError) {
    tracing::error!(
        target = "emoji_copier",
        event = "command_failed",
        command,
        error = %err
    );
}

pub async fn get_categories(gateway: &Gateway) -> Vec<String> {
    dispatch_async_with_fence(|| gateway.categories())
        .await
        .unwrap_or_else(|err| {
            command_failed("get_categories", &err);
            Vec::new()
        })
}

pub async fn get_emojis_by_category(gateway: &Gateway, category: Option<&str>) -> Vec<Emoji> {
    let category = category.unwrap_or_default();
    dispatch_async_with_fence(|| gateway.list_by_category(category))
        .await
        .unwrap_or_else(|err| {
            command_failed("get_emojis_by_category", &err);
            Vec::new()
        })
}

pub async fn search_emojis(gateway: &Gateway, query: &str) -> Vec<Emoji> {
    dispatch_async_with_fence(|| gateway.search(query))
        .await
        .unwrap_or_else(|err| {
            command_failed("search_emojis", &err);
            Vec::new()
        })
}

/// Records a usage event for the copied glyph. The clipboard write itself is
/// the presentation shell's job; this layer only keeps the history honest.
pub async fn copy_emoji(gateway: &Gateway, glyph: &str, id: i64) -> bool {
    dispatch_async_with_fence(|| async move {
        let recorded = gateway.record_use(id).await;
        if recorded {
            tracing::info!(
                target = "emoji_copier",
                event = "emoji_copied",
                id,
                glyph
            );
        }
        recorded
    })
    .await
    .unwrap_or_else(|err| {
        command_failed("copy_emoji", &err);
        false
    })
}

pub async fn get_favorites(gateway: &Gateway) -> Vec<Emoji> {
    dispatch_async_with_fence(|| gateway.favorites())
        .await
        .unwrap_or_else(|err| {
            command_failed("get_favorites", &err);
            Vec::new()
        })
}

pub async fn add_to_favorites(gateway: &Gateway, id: i64) -> bool {
    dispatch_async_with_fence(|| gateway.add_favorite(id))
        .await
        .unwrap_or_else(|err| {
            command_failed("add_to_favorites", &err);
            false
        })
}

pub async fn remove_from_favorites(gateway: &Gateway, id: i64) -> bool {
    dispatch_async_with_fence(|| gateway.remove_favorite(id))
        .await
        .unwrap_or_else(|err| {
            command_failed("remove_from_favorites", &err);
            false
        })
}

pub async fn get_recent_emojis(gateway: &Gateway, limit: Option<i64>) -> Vec<Emoji> {
    let limit = limit.unwrap_or(DEFAULT_RECENT_LIMIT);
    dispatch_async_with_fence(|| gateway.recent(limit))
        .await
        .unwrap_or_else(|err| {
            command_failed("get_recent_emojis", &err);
            Vec::new()
        })
}

pub async fn remove_from_history(gateway: &Gateway, id: i64) -> bool {
    dispatch_async_with_fence(|| gateway.remove_history(id))
        .await
        .unwrap_or_else(|err| {
            command_failed("remove_from_history", &err);
            false
        })
}

pub async fn clear_history(gateway: &Gateway) -> bool {
    dispatch_async_with_fence(|| gateway.clear_history())
        .await
        .unwrap_or_else(|err| {
            command_failed("clear_history", &err);
            false
        })
}

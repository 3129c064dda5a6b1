use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use emoji_copier_lib::{commands, db, logging, Gateway};

#[derive(Parser)]
#[command(name = "emoji-copier", about = "Emoji catalog query and maintenance CLI")]
struct Cli {
    /// Optional explicit DB path (overrides EMOJI_COPIER_DB)
    #[arg(long, value_name = "PATH")]
    db: Option<PathBuf>,

    /// Skip SQLite entirely and run against the built-in dataset
    #[arg(long)]
    in_memory: bool,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// List catalog categories
    Categories,
    /// List emojis, optionally filtered to one category
    List {
        #[arg(long)]
        category: Option<String>,
    },
    /// Search the catalog; all terms must match
    Search { terms: Vec<String> },
    /// Record a usage event and print the glyph (pipe it to a clipboard tool)
    Copy { id: i64 },
    /// List favorites, most recently favorited first
    Favorites,
    /// Mark an emoji as favorite
    Favorite { id: i64 },
    /// Remove an emoji from favorites
    Unfavorite { id: i64 },
    /// Show recently used emojis
    Recent {
        #[arg(long, default_value_t = commands::DEFAULT_RECENT_LIMIT)]
        limit: i64,
    },
    /// Remove one emoji's events from the history
    Forget { id: i64 },
    /// Clear the usage history
    ClearHistory,
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let gateway = if cli.in_memory {
        Gateway::in_memory()
    } else {
        let path = cli.db.unwrap_or_else(db::default_db_path);
        Gateway::open(&path).await
    };

    match cli.cmd {
        Cmd::Categories => print_json(&commands::get_categories(&gateway).await)?,
        Cmd::List { category } => {
            let rows = commands::get_emojis_by_category(&gateway, category.as_deref()).await;
            print_json(&rows)?;
        }
        Cmd::Search { terms } => {
            let rows = commands::search_emojis(&gateway, &terms.join(" ")).await;
            print_json(&rows)?;
        }
        Cmd::Copy { id } => {
            let catalog = commands::get_emojis_by_category(&gateway, None).await;
            let Some(entry) = catalog.into_iter().find(|e| e.id == id) else {
                anyhow::bail!("no emoji with id {id}");
            };
            if !commands::copy_emoji(&gateway, &entry.glyph, id).await {
                anyhow::bail!("failed to record usage for id {id}");
            }
            println!("{}", entry.glyph);
        }
        Cmd::Favorites => print_json(&commands::get_favorites(&gateway).await)?,
        Cmd::Favorite { id } => {
            if !commands::add_to_favorites(&gateway, id).await {
                anyhow::bail!("no emoji with id {id}");
            }
        }
        Cmd::Unfavorite { id } => {
            if !commands::remove_from_favorites(&gateway, id).await {
                anyhow::bail!("id {id} was not favorited");
            }
        }
        Cmd::Recent { limit } => {
            print_json(&commands::get_recent_emojis(&gateway, Some(limit)).await)?
        }
        Cmd::Forget { id } => {
            if !commands::remove_from_history(&gateway, id).await {
                anyhow::bail!("id {id} has no history");
            }
        }
        Cmd::ClearHistory => {
            commands::clear_history(&gateway).await;
        }
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

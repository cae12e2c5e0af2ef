//! # Clipdex CLI
//!
//! The `clipdex` binary records clipboard history and retrieves entries
//! with fuzzy search.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `clipdex init` | Create the SQLite database and run migrations |
//! | `clipdex watch` | Poll the clipboard and record new content |
//! | `clipdex list` | Print all entries in ranking order |
//! | `clipdex search "<query>"` | Fuzzy-search entries, best matches first |
//! | `clipdex get <index>` | Print an entry; `--copy` puts it back on the clipboard |
//! | `clipdex add <content>` | Record content directly (reads stdin when omitted) |
//! | `clipdex delete <index>` | Remove an entry |
//! | `clipdex bump <index>` | Bump an entry's copy count |
//! | `clipdex stats` | Entry count and most-reused entries |

use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use clipdex::clipboard::SystemClipboard;
use clipdex::{config, db, items, migrate, search, stats, watch};

/// Clipdex — a local clipboard-history manager with ranked fuzzy
/// retrieval.
#[derive(Parser)]
#[command(
    name = "clipdex",
    about = "A local clipboard-history manager with ranked fuzzy retrieval",
    version
)]
struct Cli {
    /// Path to configuration file (TOML). Defaults to
    /// `clipdex.toml` in the platform config directory; built-in
    /// defaults apply when no file exists.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Initialize the history database.
    ///
    /// Creates the SQLite database file and runs schema migrations.
    /// Idempotent — running it multiple times is safe.
    Init,

    /// Watch the clipboard and record new content.
    ///
    /// Polls the OS clipboard on the configured interval (default 2 s)
    /// and stores every distinct text it sees. Runs until stopped.
    Watch,

    /// Print all entries, most frequently copied first.
    List,

    /// Fuzzy-search entries.
    ///
    /// Every entry whose text contains the query as a case-insensitive
    /// subsequence matches; results are ranked by match quality
    /// (position, word boundaries, camelCase starts, brevity).
    Search {
        /// The search query. An empty query lists everything.
        query: String,
    },

    /// Print the entry at the given index.
    Get {
        /// 0-based index into the listing order.
        index: usize,

        /// Also write the entry back to the OS clipboard and bump its
        /// copy count.
        #[arg(long)]
        copy: bool,
    },

    /// Record content without going through the clipboard.
    Add {
        /// The content to store. Reads stdin when omitted.
        content: Option<String>,
    },

    /// Delete the entry at the given index.
    Delete {
        /// 0-based index into the listing order.
        index: usize,
    },

    /// Bump the copy count of the entry at the given index.
    ///
    /// Copy counts drive ranking: frequently reused entries surface
    /// above one-off captures.
    Bump {
        /// 0-based index into the listing order.
        index: usize,
    },

    /// Show history statistics.
    Stats,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = config::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Init => {
            let pool = db::connect(&config).await?;
            migrate::run_migrations(&pool).await?;
            println!("Initialized history database at {}", config.db.path.display());
        }
        Commands::Watch => {
            let store = db::open_store(&config).await?;
            let mut clipboard = SystemClipboard::new()?;
            watch::run_watch(&store, &mut clipboard, config.watch.poll_interval_ms).await?;
        }
        Commands::List => {
            let store = db::open_store(&config).await?;
            items::run_list(&store);
        }
        Commands::Search { query } => {
            let store = db::open_store(&config).await?;
            search::run_search(&store, &query)?;
        }
        Commands::Get { index, copy } => {
            let store = db::open_store(&config).await?;
            if copy {
                let mut clipboard = SystemClipboard::new()?;
                items::run_copy(&store, index, &mut clipboard).await?;
            } else {
                items::run_show(&store, index)?;
            }
        }
        Commands::Add { content } => {
            let store = db::open_store(&config).await?;
            let content = match content {
                Some(c) => c,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            items::run_add(&store, &content).await?;
        }
        Commands::Delete { index } => {
            let store = db::open_store(&config).await?;
            items::run_delete(&store, index).await?;
        }
        Commands::Bump { index } => {
            let store = db::open_store(&config).await?;
            items::run_bump(&store, index).await?;
        }
        Commands::Stats => {
            let store = db::open_store(&config).await?;
            stats::run_stats(&store);
        }
    }

    Ok(())
}

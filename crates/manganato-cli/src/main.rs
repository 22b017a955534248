use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use manganato_client::ReqwestFetcher;
use manganato_core::config::{DEFAULT_BASE_URL, DEFAULT_CHAPTER_URL};
use manganato_core::{GenreSort, MangaService, SiteConfig};

#[derive(Parser)]
#[command(name = "manganato", version, about = "Scrape manganato listings as JSON")]
struct Cli {
    /// Site serving the home page, search, and genre listings
    #[arg(long, global = true, env = "MANGANATO_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Site tried first for title detail pages
    #[arg(long, global = true, env = "MANGANATO_CHAPTER_URL", default_value = DEFAULT_CHAPTER_URL)]
    chapter_url: String,

    /// Request timeout in seconds (no timeout if unset)
    #[arg(long, global = true, env = "MANGANATO_FETCH_TIMEOUT_SECS")]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List titles on the home page
    Home,

    /// Show the details and chapter list of one title
    Get {
        /// Title id, e.g. "ax951880"
        id: String,
    },

    /// Search titles by name
    Search {
        /// Search keywords
        query: String,
    },

    /// One page of recently updated titles, with pagination info
    Latest {
        #[arg(allow_negative_numbers = true)]
        page: i64,
    },

    /// One page of the most viewed titles
    Hot {
        #[arg(allow_negative_numbers = true)]
        page: i64,
    },

    /// One page of the newest titles
    Newest {
        #[arg(allow_negative_numbers = true)]
        page: i64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("manganato=info".parse()?))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let site = SiteConfig::new(&cli.base_url, &cli.chapter_url)?;
    let fetcher = match cli.timeout {
        Some(secs) => ReqwestFetcher::with_timeout(Duration::from_secs(secs))?,
        None => ReqwestFetcher::new()?,
    };
    let service = MangaService::new(fetcher, site);

    match cli.command {
        Commands::Home => print_json(&service.home_listing().await?),
        Commands::Get { id } => {
            let details = service
                .manga_by_id(&id)
                .await
                .with_context(|| format!("Failed to fetch manga {id}"))?;
            print_json(&details)
        }
        Commands::Search { query } => print_json(&service.search(&query).await?),
        Commands::Latest { page } => {
            print_json(&service.genre_listing(page, GenreSort::Latest).await?)
        }
        Commands::Hot { page } => {
            print_json(&service.genre_listing(page, GenreSort::TopView).await?.mangas)
        }
        Commands::Newest { page } => {
            print_json(&service.genre_listing(page, GenreSort::Newest).await?.mangas)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

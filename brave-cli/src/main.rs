//! Command-line front end for the Brave Search API client.
//!
//! Prints rendered results to stdout; all diagnostics go to stderr via
//! `tracing` so the output stays pipeable.

use anyhow::{Context, Result};
use brave_client::{Client, Freshness, SafeSearch, SearchOptions};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

mod render;

#[derive(Parser)]
#[command(
    name = "brave",
    version,
    about = "A utility for interacting with the Brave Search API."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Returns search results.
    Search(SearchArgs),
}

#[derive(Args)]
struct GlobalOptions {
    /// Your API token.
    #[arg(
        short,
        long,
        env = "BRAVE_SUBSCRIPTION_TOKEN",
        hide_env_values = true
    )]
    token: String,

    /// API host to target.
    #[arg(long, env = "BRAVE_API_HOST", default_value = brave_client::DEFAULT_HOST)]
    host: Url,
}

#[derive(Args)]
struct SearchArgs {
    #[command(flatten)]
    global: GlobalOptions,

    /// Your search query.
    query: String,

    /// Results per page.
    #[arg(long)]
    count: Option<u32>,

    /// Pagination offset.
    #[arg(long)]
    offset: Option<u32>,

    /// Freshness window: pd, pw, pm, or py.
    #[arg(long)]
    freshness: Option<Freshness>,

    /// Safe-search level: off, moderate, or strict.
    #[arg(long)]
    safesearch: Option<SafeSearch>,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    match cli.command {
        Command::Search(args) => run_search(args).await,
    }
}

async fn run_search(args: SearchArgs) -> Result<()> {
    let client = Client::with_host(args.global.host, args.global.token);
    let options = SearchOptions {
        count: args.count,
        offset: args.offset,
        freshness: args.freshness,
        safesearch: args.safesearch,
        ..Default::default()
    };

    tracing::debug!(host = %client.host(), "dispatching search");
    let resp = client
        .search_with(&args.query, &options)
        .await
        .context("search request failed")?;

    print!("{}", render::render_response(&resp));
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_ansi(false))
        .init();
}

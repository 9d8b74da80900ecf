//! Pokedex - An interactive PokeAPI explorer
//!
//! Binary entry point: parses flags, installs logging, builds the cache and
//! fetcher once, then hands stdin and stdout to the REPL.

use anyhow::Context as _;
use clap::Parser;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::cli::Cli;
use pokedex::{Config, ExpiringCache, Fetcher, HttpTransport, Repl};

/// Main entry point for the Pokedex.
///
/// # Startup Sequence
/// 1. Parse command-line flags
/// 2. Initialize tracing subscriber for logging (stderr, so it never mixes
///    with REPL output)
/// 3. Create the response cache and start its reaper
/// 4. Build the HTTP transport and fetcher
/// 5. Run the REPL until `exit` or end of input
/// 6. Stop the reaper
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Defaults to warnings only, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_cli(&cli).context("invalid configuration")?;
    info!(
        "Configuration loaded: reap_interval={:?}, max_age={:?}, base_url={}, page_size={}",
        config.reap_interval, config.max_age, config.base_url, config.page_size
    );

    let cache = ExpiringCache::with_max_age(config.reap_interval, config.max_age);
    info!("Response cache initialized");

    let transport = HttpTransport::new(Some(config.request_timeout))
        .context("failed to build HTTP client")?;
    let fetcher = Fetcher::new(transport, cache.clone())
        .with_base_url(config.base_url.clone())
        .with_page_size(config.page_size);

    let mut repl = Repl::new(fetcher);
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    repl.run(stdin, &mut stdout).await?;

    cache.shutdown();
    let stats = cache.stats().await;
    info!(
        "Session finished: hits={}, misses={}, reaped={}, hit_rate={:.2}",
        stats.hits,
        stats.misses,
        stats.reaped,
        stats.hit_rate()
    );

    Ok(())
}

//! # News Shells
//!
//! Generates static, SEO-ready HTML shell pages for every JSON article of a
//! multi-language news site. Each shell carries the article's title,
//! description, Open Graph tags, JSON-LD and hreflang alternates, and hands
//! full rendering over to the client-side news helper.
//!
//! ## Usage
//!
//! ```sh
//! news_shells -n ./news
//! ```
//!
//! ## Architecture
//!
//! The run is a single sequential pass:
//! 1. **Locales**: list the locale directories under the news root
//! 2. **Articles**: list and parse `{locale}/*.json` (skipping `index.json`)
//! 3. **Shells**: build one HTML document per article
//! 4. **Output**: write `{locale}/{slug}/index.html`

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod generator;
mod models;
mod outputs;
mod sources;
mod utils;

use cli::Cli;
use config::SiteConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    let start_time = std::time::Instant::now();
    info!("news_shells starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let config = match SiteConfig::from_cli(&args).await {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return Err(e);
        }
    };

    let summary = match generator::generate_all(&config).await {
        Ok(summary) => summary,
        Err(e) => {
            error!(news_root = %config.news_root.display(), error = %e, "Generation aborted");
            return Err(e);
        }
    };

    println!("{}", summary.report(&config.news_root));

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        generated = summary.generated,
        skipped = summary.skipped,
        locales = summary.locales.len(),
        "Execution complete"
    );

    Ok(())
}

//! The generation pass: every locale, every article, one shell each.
//!
//! The full locale set is discovered before any page is built, since every
//! page links to all locales. Locales and articles are then processed one
//! at a time. Bad inputs are skipped and counted; only filesystem write
//! failures abort the run.

use crate::config::SiteConfig;
use crate::outputs::html::write_shell;
use crate::outputs::shell::generate_shell;
use crate::sources::articles::{fetch_articles, index_articles};
use crate::sources::locales::list_locales;
use crate::utils::ensure_writable_dir;
use std::error::Error;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Outcome of one generation run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Number of shells written.
    pub generated: usize,
    /// Article files that were found but produced no shell.
    pub skipped: usize,
    /// Every locale discovered, in processing order.
    pub locales: Vec<String>,
    /// Paths written, in processing order.
    pub written: Vec<PathBuf>,
}

impl GenerationSummary {
    /// The one-line report printed at the end of a run.
    pub fn report(&self, news_root: &Path) -> String {
        if self.locales.is_empty() {
            format!(
                "No languages found under {} - nothing to generate.",
                news_root.display()
            )
        } else {
            format!(
                "Generated {} article shells for languages: {}",
                self.generated,
                self.locales.join(", ")
            )
        }
    }
}

/// Generate shells for every article of every locale under `config.news_root`.
///
/// An absent or empty news root is not an error: the summary simply has no
/// locales.
///
/// # Errors
///
/// Returns an error if the news root cannot be listed or a shell cannot be
/// written. Unreadable locale directories and unreadable or malformed
/// articles are skipped.
#[instrument(level = "info", skip_all, fields(news_root = %config.news_root.display()))]
pub async fn generate_all(config: &SiteConfig) -> Result<GenerationSummary, Box<dyn Error>> {
    let locales = list_locales(&config.news_root).await?;
    let mut summary = GenerationSummary::default();
    if locales.is_empty() {
        info!("No locales found; nothing to generate");
        return Ok(summary);
    }

    ensure_writable_dir(&config.news_root).await?;

    for locale in &locales {
        let locale_dir = config.news_root.join(locale);
        let paths = index_articles(&locale_dir, &config.index_file).await;
        let found = paths.len();
        let articles = fetch_articles(paths).await;

        let mut skipped = found - articles.len();
        let mut generated = 0;
        for article in &articles {
            match generate_shell(config, locale, article, &locales)? {
                Some(shell) => {
                    let path = write_shell(&config.news_root, locale, &shell).await?;
                    summary.written.push(path);
                    generated += 1;
                }
                None => skipped += 1,
            }
        }

        info!(%locale, found, generated, skipped, "Finished locale");
        summary.generated += generated;
        summary.skipped += skipped;
    }

    summary.locales = locales;
    Ok(summary)
}

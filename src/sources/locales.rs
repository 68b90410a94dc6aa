//! Locale discovery.
//!
//! A locale is any immediate subdirectory of the news root. Directory names
//! are taken as-is; there is no check against a list of known languages.

use itertools::Itertools;
use std::error::Error;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info, instrument, warn};

/// List locale identifiers under `news_root`, sorted lexicographically.
///
/// A missing root yields an empty list rather than an error. Entries that
/// are not directories, or whose names are not valid UTF-8, are ignored.
///
/// # Errors
///
/// Returns an error if the root exists but cannot be read.
#[instrument(level = "info", skip_all, fields(news_root = %news_root.display()))]
pub async fn list_locales(news_root: &Path) -> Result<Vec<String>, Box<dyn Error>> {
    let mut entries = match fs::read_dir(news_root).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("News root does not exist");
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let mut locales = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        // Follows symlinks, so a linked locale directory still counts
        let is_dir = fs::metadata(&path)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false);
        if !is_dir {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => locales.push(name),
            Err(raw) => warn!(name = ?raw, "Skipping locale directory with non UTF-8 name"),
        }
    }

    let locales = locales.into_iter().sorted().collect::<Vec<_>>();
    info!(count = locales.len(), "Discovered locales");
    debug!(?locales, "Locales");
    Ok(locales)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as stdfs;

    #[tokio::test]
    async fn test_missing_root_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let locales = list_locales(&tmp.path().join("absent")).await.unwrap();
        assert!(locales.is_empty());
    }

    #[tokio::test]
    async fn test_locales_sorted_and_dirs_only() {
        let tmp = tempfile::tempdir().unwrap();
        for name in ["my", "en", "zh", "de"] {
            stdfs::create_dir(tmp.path().join(name)).unwrap();
        }
        stdfs::write(tmp.path().join("README.json"), "{}").unwrap();

        let locales = list_locales(tmp.path()).await.unwrap();
        assert_eq!(locales, vec!["de", "en", "my", "zh"]);
    }

    #[tokio::test]
    async fn test_empty_root_has_no_locales() {
        let tmp = tempfile::tempdir().unwrap();
        let locales = list_locales(tmp.path()).await.unwrap();
        assert!(locales.is_empty());
    }
}

//! Article enumeration and loading for a single locale directory.
//!
//! Loading is best-effort: a file that cannot be read, is not JSON, or does
//! not hold a usable article object is skipped. The reason is logged at
//! `debug` level only; the generated-article count is the operator's signal.

use crate::models::{ArticleRecord, LoadedArticle};
use crate::utils::truncate_for_log;
use futures::stream::{self, StreamExt};
use itertools::Itertools;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, instrument, warn};

const ARTICLE_EXTENSION: &str = ".json";

/// List article JSON files in `locale_dir`, sorted by path.
///
/// Every `*.json` entry is returned except the one named `index_file`.
/// A directory that is missing or cannot be read yields an empty list, so
/// one bad locale never stops the others.
#[instrument(level = "info", skip_all, fields(locale_dir = %locale_dir.display()))]
pub async fn index_articles(locale_dir: &Path, index_file: &str) -> Vec<PathBuf> {
    let mut entries = match fs::read_dir(locale_dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Vec::new(),
        Err(e) => {
            warn!(error = %e, "Unreadable locale directory; skipping");
            return Vec::new();
        }
    };

    let mut paths = Vec::new();
    loop {
        let entry = match entries.next_entry().await {
            Ok(Some(entry)) => entry,
            Ok(None) => break,
            Err(e) => {
                warn!(error = %e, "Failed while listing locale directory; skipping");
                return Vec::new();
            }
        };
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if name == index_file || !name.ends_with(ARTICLE_EXTENSION) {
            continue;
        }
        paths.push(entry.path());
    }

    let paths = paths.into_iter().sorted().collect::<Vec<_>>();
    info!(count = paths.len(), "Indexed article files");
    paths
}

/// Load all article files in order, dropping the ones that fail to load.
#[instrument(level = "info", skip_all)]
pub async fn fetch_articles(paths: Vec<PathBuf>) -> Vec<LoadedArticle> {
    let total = paths.len();
    let articles: Vec<LoadedArticle> = stream::iter(paths)
        .then(|path| async move { load_article(&path).await })
        .filter_map(std::future::ready)
        .collect()
        .await;

    info!(
        loaded = articles.len(),
        skipped = total - articles.len(),
        "Loaded article records"
    );
    articles
}

/// Read and parse a single article file.
///
/// Returns `None` when the file cannot be read, is not valid JSON, is not a
/// non-empty JSON object, or has a mistyped field.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub async fn load_article(path: &Path) -> Option<LoadedArticle> {
    let stem = path.file_stem()?.to_str()?.to_string();

    let raw = match fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) => {
            debug!(error = %e, "Unreadable article file; skipping");
            return None;
        }
    };

    let value: Value = match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            debug!(
                error = %e,
                preview = %truncate_for_log(&raw, 120),
                "Malformed article JSON; skipping"
            );
            return None;
        }
    };

    match &value {
        Value::Object(map) if !map.is_empty() => {}
        _ => {
            debug!("Article JSON holds no data; skipping");
            return None;
        }
    }

    match serde_json::from_value::<ArticleRecord>(value) {
        Ok(record) => Some(LoadedArticle {
            path: path.to_path_buf(),
            stem,
            record,
        }),
        Err(e) => {
            debug!(error = %e, "Article fields have unexpected types; skipping");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as stdfs;

    fn write(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        stdfs::write(&path, body).unwrap();
        path
    }

    #[tokio::test]
    async fn test_index_excludes_reserved_index_file() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "index.json", "[]");
        write(tmp.path(), "b.json", "{}");
        write(tmp.path(), "a.json", "{}");
        write(tmp.path(), "notes.txt", "ignored");

        let paths = index_articles(tmp.path(), "index.json").await;
        let names: Vec<_> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.json", "b.json"]);
    }

    #[tokio::test]
    async fn test_index_uses_configured_index_name() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "index.json", "{}");
        write(tmp.path(), "listing.json", "{}");

        let paths = index_articles(tmp.path(), "listing.json").await;
        assert_eq!(paths.len(), 1);
        assert!(paths[0].ends_with("index.json"));
    }

    #[tokio::test]
    async fn test_index_missing_dir_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let paths = index_articles(&tmp.path().join("nope"), "index.json").await;
        assert!(paths.is_empty());
    }

    #[tokio::test]
    async fn test_index_unreadable_dir_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        // A file where a directory is expected fails with something other than NotFound
        let not_a_dir = write(tmp.path(), "en", "plain file");
        let paths = index_articles(&not_a_dir, "index.json").await;
        assert!(paths.is_empty());
    }

    #[tokio::test]
    async fn test_load_valid_article() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write(
            tmp.path(),
            "foo.json",
            r#"{"title": "A & B", "summary": "s", "date": "2024-01-01"}"#,
        );

        let article = load_article(&path).await.unwrap();
        assert_eq!(article.stem, "foo");
        assert_eq!(article.slug(), "foo");
        assert_eq!(article.record.title(), "A & B");
    }

    #[tokio::test]
    async fn test_load_skips_malformed_and_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let cases = [
            ("broken.json", "{not json"),
            ("empty.json", "{}"),
            ("null.json", "null"),
            ("list.json", r#"[{"title": "x"}]"#),
            ("typed.json", r#"{"title": ["x"]}"#),
        ];
        for (name, body) in cases {
            let path = write(tmp.path(), name, body);
            assert!(load_article(&path).await.is_none(), "{} should be skipped", name);
        }
    }

    #[tokio::test]
    async fn test_load_missing_file_is_none() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(load_article(&tmp.path().join("gone.json")).await.is_none());
    }

    #[tokio::test]
    async fn test_fetch_articles_keeps_order_and_drops_failures() {
        let tmp = tempfile::tempdir().unwrap();
        let paths = vec![
            write(tmp.path(), "a.json", r#"{"title": "A"}"#),
            write(tmp.path(), "b.json", "garbage"),
            write(tmp.path(), "c.json", r#"{"title": "C"}"#),
        ];

        let articles = fetch_articles(paths).await;
        let stems: Vec<_> = articles.iter().map(|a| a.stem.as_str()).collect();
        assert_eq!(stems, vec!["a", "c"]);
    }
}

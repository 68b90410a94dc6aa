//! Data models for article records read from the news tree.
//!
//! This module defines the structures the generator reads from disk:
//! - [`ArticleRecord`]: one article JSON file (`news/{locale}/{stem}.json`)
//! - [`ArticleImage`]: one entry of an article's `images` array
//! - [`LoadedArticle`]: a parsed record together with where it came from
//!
//! Records are parsed leniently. Every field is optional, and `images` stays
//! raw JSON so that a malformed image list only costs the hero block.

use serde::Deserialize;
use serde_json::Value;
use std::path::PathBuf;

/// An article as published under `news/{locale}/`.
///
/// Only the SEO-relevant fields are modeled. `body` and `body_html` are
/// consumed client-side by the hydration hook and ignored here.
///
/// # JSON Schema
///
/// ```text
/// {slug?, title?, summary?, date?, images?: [{src, alt, caption}], body?, body_html?}
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct ArticleRecord {
    /// URL-safe identifier; the file stem is used when absent or empty.
    #[serde(default)]
    pub slug: Option<String>,
    /// The article headline.
    #[serde(default)]
    pub title: Option<String>,
    /// A short summary, also used for the description meta tag.
    #[serde(default)]
    pub summary: Option<String>,
    /// Free-form publication date, emitted verbatim.
    #[serde(default)]
    pub date: Option<String>,
    /// Raw `images` value. Interpreted by the hero builder only.
    #[serde(default)]
    pub images: Option<Value>,
}

impl ArticleRecord {
    /// The explicit slug, if present and non-empty.
    pub fn slug(&self) -> Option<&str> {
        non_empty(&self.slug)
    }

    /// The title, or `""` when absent.
    pub fn title(&self) -> &str {
        non_empty(&self.title).unwrap_or_default()
    }

    /// The summary, or `""` when absent.
    pub fn summary(&self) -> &str {
        non_empty(&self.summary).unwrap_or_default()
    }

    /// The date string, or `""` when absent.
    pub fn date(&self) -> &str {
        non_empty(&self.date).unwrap_or_default()
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// A single image entry. Only the first one is rendered, as the hero.
#[derive(Debug, Default, Deserialize)]
pub struct ArticleImage {
    #[serde(default)]
    pub src: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub caption: String,
}

/// A successfully parsed article file.
#[derive(Debug)]
pub struct LoadedArticle {
    /// Path of the source JSON file.
    pub path: PathBuf,
    /// File stem; the slug fallback and the hydration article id.
    pub stem: String,
    pub record: ArticleRecord,
}

impl LoadedArticle {
    /// Resolve the output slug: explicit `slug` field, else the file stem.
    pub fn slug(&self) -> &str {
        self.record.slug().unwrap_or(&self.stem)
    }
}

//! Site configuration for the shell generator.
//!
//! Configuration is layered: built-in defaults, then an optional YAML file,
//! then command-line flags (which also pick up environment variables through
//! clap). The result is a resolved [`SiteConfig`] that is passed explicitly to
//! the generator, so tests can point it at any news root.
//!
//! # Example `news_shells.yaml`
//!
//! ```yaml
//! news_root: news
//! site_name: TSD Myanmar
//! base_url: https://example.org
//! index_file: index.json
//! stylesheet: /css/main.css
//! i18n_script: /js/core/i18n.js
//! news_script: /js/core/news.js
//! ```

use crate::cli::Cli;
use serde::Deserialize;
use std::error::Error;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};
use url::Url;

pub const DEFAULT_NEWS_ROOT: &str = "news";
pub const DEFAULT_SITE_NAME: &str = "TSD Myanmar";
pub const DEFAULT_INDEX_FILE: &str = "index.json";
pub const DEFAULT_STYLESHEET: &str = "/css/main.css";
pub const DEFAULT_I18N_SCRIPT: &str = "/js/core/i18n.js";
pub const DEFAULT_NEWS_SCRIPT: &str = "/js/core/news.js";

/// Public URL segment under which article pages are served.
const NEWS_URL_SEGMENT: &str = "news";

/// Placeholder origin used to encode root-relative page paths.
const RELATIVE_ORIGIN: &str = "http://localhost/";

/// Values read from a YAML config file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub news_root: Option<PathBuf>,
    pub site_name: Option<String>,
    pub base_url: Option<String>,
    pub index_file: Option<String>,
    pub stylesheet: Option<String>,
    pub i18n_script: Option<String>,
    pub news_script: Option<String>,
}

impl ConfigFile {
    /// Load and parse a YAML config file.
    #[instrument(level = "info", skip_all, fields(path = %path.display()))]
    pub async fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let raw = tokio::fs::read_to_string(path).await?;
        let parsed: ConfigFile = serde_yaml::from_str(&raw)?;
        info!("Loaded configuration file");
        Ok(parsed)
    }
}

/// Fully resolved generator configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Directory holding one subdirectory per locale.
    pub news_root: PathBuf,
    /// Site name used in `<title>`, `og:site_name` and the hydration script.
    pub site_name: String,
    /// Absolute URL prefix for canonical and alternate links, if any.
    pub base_url: Option<Url>,
    /// Reserved per-locale listing file that is never treated as an article.
    pub index_file: String,
    pub stylesheet: String,
    /// i18n helper loaded before the hydration script.
    pub i18n_script: String,
    /// News-data helper providing `window.tsdNews`.
    pub news_script: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            news_root: PathBuf::from(DEFAULT_NEWS_ROOT),
            site_name: DEFAULT_SITE_NAME.to_string(),
            base_url: None,
            index_file: DEFAULT_INDEX_FILE.to_string(),
            stylesheet: DEFAULT_STYLESHEET.to_string(),
            i18n_script: DEFAULT_I18N_SCRIPT.to_string(),
            news_script: DEFAULT_NEWS_SCRIPT.to_string(),
        }
    }
}

impl SiteConfig {
    /// Resolve configuration from the command line, loading `--config` if given.
    pub async fn from_cli(cli: &Cli) -> Result<Self, Box<dyn Error>> {
        let file = match &cli.config {
            Some(path) => ConfigFile::load(path).await?,
            None => ConfigFile::default(),
        };
        Self::merge(file, cli)
    }

    /// Layer `file` over the defaults, then `cli` over the result.
    pub fn merge(file: ConfigFile, cli: &Cli) -> Result<Self, Box<dyn Error>> {
        let defaults = SiteConfig::default();

        let base_url = match cli.base_url.as_deref().or(file.base_url.as_deref()) {
            Some(raw) => Some(parse_base_url(raw)?),
            None => None,
        };

        let config = SiteConfig {
            news_root: cli
                .news_root
                .clone()
                .or(file.news_root)
                .unwrap_or(defaults.news_root),
            site_name: cli
                .site_name
                .clone()
                .or(file.site_name)
                .unwrap_or(defaults.site_name),
            base_url,
            index_file: file.index_file.unwrap_or(defaults.index_file),
            stylesheet: file.stylesheet.unwrap_or(defaults.stylesheet),
            i18n_script: file.i18n_script.unwrap_or(defaults.i18n_script),
            news_script: file.news_script.unwrap_or(defaults.news_script),
        };
        debug!(?config, "Resolved site configuration");
        Ok(config)
    }

    /// Public URL of an article page.
    ///
    /// Root-relative (`/news/{locale}/{slug}/`) unless a base URL is
    /// configured, in which case the path is appended to it. Locale and slug
    /// are percent-encoded as path segments in both forms.
    pub fn page_url(&self, locale: &str, slug: &str) -> String {
        match &self.base_url {
            Some(base) => with_page_path(base.clone(), locale, slug).to_string(),
            None => match Url::parse(RELATIVE_ORIGIN) {
                Ok(origin) => with_page_path(origin, locale, slug).path().to_string(),
                Err(_) => format!("/{}/{}/{}/", NEWS_URL_SEGMENT, locale, slug),
            },
        }
    }
}

/// Append `news/{locale}/{slug}/` to the path of `url`.
fn with_page_path(mut url: Url, locale: &str, slug: &str) -> Url {
    if let Ok(mut segments) = url.path_segments_mut() {
        segments
            .pop_if_empty()
            .extend([NEWS_URL_SEGMENT, locale, slug, ""]);
    }
    url
}

/// Parse an absolute base URL that page paths can be appended to.
fn parse_base_url(raw: &str) -> Result<Url, Box<dyn Error>> {
    let url = Url::parse(raw)?;
    if url.cannot_be_a_base() {
        return Err(format!("base URL `{}` cannot be used as a base", raw).into());
    }
    Ok(url)
}

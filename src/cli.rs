//! Command-line interface definitions for the news shell generator.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Every option can also be provided through an environment variable, and any
//! option left unset falls back to the config file and then to built-in defaults.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the news shell generator.
///
/// # Examples
///
/// ```sh
/// # Generate shells for ./news with defaults
/// news_shells
///
/// # Explicit root and absolute canonical URLs
/// news_shells -n ./site/news --base-url https://example.org
///
/// # Everything from a config file
/// news_shells -c news_shells.yaml
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Directory containing one subdirectory per locale (default: `news`)
    #[arg(short, long, env = "NEWS_SHELLS_ROOT")]
    pub news_root: Option<PathBuf>,

    /// Optional path to a YAML config file
    #[arg(short, long, env = "NEWS_SHELLS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Site name used in titles and Open Graph tags
    #[arg(short, long, env = "NEWS_SHELLS_SITE_NAME")]
    pub site_name: Option<String>,

    /// Absolute URL prefix for canonical and hreflang links (e.g. https://example.org)
    #[arg(short, long, env = "NEWS_SHELLS_BASE_URL")]
    pub base_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from([
            "news_shells",
            "--news-root",
            "./news",
            "--config",
            "./news_shells.yaml",
            "--site-name",
            "Example",
        ]);

        assert_eq!(cli.news_root, Some(PathBuf::from("./news")));
        assert_eq!(cli.config, Some(PathBuf::from("./news_shells.yaml")));
        assert_eq!(cli.site_name.as_deref(), Some("Example"));
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "news_shells",
            "-n",
            "/tmp/news",
            "-b",
            "https://example.org",
        ]);

        assert_eq!(cli.news_root, Some(PathBuf::from("/tmp/news")));
        assert_eq!(cli.base_url.as_deref(), Some("https://example.org"));
    }
}

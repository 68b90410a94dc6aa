//! Shell page writer.
//!
//! Each shell is written to a path derived only from its locale and slug:
//! ```text
//! news_root/
//! └── {locale}/
//!     └── {slug}/
//!         └── index.html
//! ```
//!
//! Writes overwrite unconditionally. There is no atomic rename or backup;
//! every page can be regenerated from its source JSON.

use crate::outputs::shell::Shell;
use std::error::Error;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, error, instrument};

const SHELL_FILENAME: &str = "index.html";

/// Output path of a shell: `{news_root}/{locale}/{slug}/index.html`.
pub fn shell_path(news_root: &Path, locale: &str, slug: &str) -> PathBuf {
    news_root.join(locale).join(slug).join(SHELL_FILENAME)
}

/// Write a [`Shell`] under `news_root`, creating directories as needed.
///
/// # Returns
///
/// The path written, or an error if directory creation or the write fails.
#[instrument(level = "debug", skip_all, fields(%locale, slug = %shell.slug))]
pub async fn write_shell(
    news_root: &Path,
    locale: &str,
    shell: &Shell,
) -> Result<PathBuf, Box<dyn Error>> {
    let out_file = shell_path(news_root, locale, &shell.slug);
    let out_dir = news_root.join(locale).join(&shell.slug);

    if let Err(e) = fs::create_dir_all(&out_dir).await {
        error!(out_dir = %out_dir.display(), error = %e, "Failed to create shell dir");
        return Err(e.into());
    }

    fs::write(&out_file, &shell.html).await?;
    debug!(path = %out_file.display(), bytes = shell.html.len(), "Wrote article shell");
    Ok(out_file)
}

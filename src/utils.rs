//! Utility functions for escaping, string truncation, and file system checks.
//!
//! This module provides helpers used throughout the generator:
//! - Escaping of JSON text embedded inside `<script>` elements
//! - Character-based truncation for meta descriptions and log previews
//! - Path segment validation for slugs
//! - Output directory writability checks

use std::error::Error;
use std::fmt::Write;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info, instrument};

/// Make serialized JSON safe to inline in a `<script>` element.
///
/// `<`, `>`, `&` and `'` only ever occur inside JSON strings, so rewriting
/// them as `\uXXXX` escapes keeps the document valid JSON while making
/// `</script>` and HTML comment openers impossible. Non-ASCII characters are
/// left as-is.
pub fn escape_script_json(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' | '>' | '&' | '\'' => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            _ => out.push(c),
        }
    }
    out
}

/// Serialize a string as a script-safe JavaScript string literal.
pub fn js_string_literal(s: &str) -> Result<String, serde_json::Error> {
    Ok(escape_script_json(&serde_json::to_string(s)?))
}

/// Keep the first `max` characters (not bytes) of `s`.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut to `max` characters with an ellipsis and the number
/// of dropped bytes appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    let kept = truncate_chars(s, max);
    if kept.len() == s.len() {
        s.to_string()
    } else {
        format!("{}…(+{} bytes)", kept, s.len() - kept.len())
    }
}

/// Whether `segment` can be used as a single directory name under a locale.
///
/// Rejects empty names, `.` and `..`, and anything containing a path
/// separator or NUL, all of which would place output outside
/// `{locale}/{segment}/`.
pub fn is_safe_path_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment != "."
        && segment != ".."
        && !segment.contains(['/', '\\', '\0'])
}

/// Name of the empty file written to prove the output root accepts writes.
const WRITE_CHECK_FILE: &str = ".news_shells_write_check";

/// Ensure a directory exists and accepts new files.
///
/// Creates the directory if needed, then writes and removes an empty marker
/// file. A marker that cannot be removed is logged and otherwise ignored.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the marker file
/// cannot be written (permission denied, read-only filesystem, etc.).
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn ensure_writable_dir(path: &Path) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(path).await?;

    let marker = path.join(WRITE_CHECK_FILE);
    fs::write(&marker, b"").await?;
    if let Err(e) = fs::remove_file(&marker).await {
        debug!(marker = %marker.display(), error = %e, "Could not remove write-check file");
    }

    info!("Output directory is writable");
    Ok(())
}

//! JSON-LD structured data for article pages.
//!
//! Produces a schema.org `Article` object for the page head:
//!
//! ```text
//! {"@context":"https://schema.org","@type":"Article","headline":...,
//!  "datePublished":...,"description":...,
//!  "mainEntityOfPage":{"@type":"WebPage","@id":...}}
//! ```
//!
//! Non-ASCII text is emitted literally. The output is passed through
//! [`escape_script_json`] so it can be inlined in a `<script>` element.

use crate::utils::escape_script_json;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ArticleLd<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    headline: &'a str,
    #[serde(rename = "datePublished")]
    date_published: &'a str,
    description: &'a str,
    #[serde(rename = "mainEntityOfPage")]
    main_entity_of_page: WebPageRef<'a>,
}

#[derive(Debug, Serialize)]
struct WebPageRef<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(rename = "@id")]
    id: &'a str,
}

/// Serialize the `Article` object for one page.
pub fn build_json_ld(
    headline: &str,
    summary: &str,
    date: &str,
    url: &str,
) -> Result<String, serde_json::Error> {
    let ld = ArticleLd {
        context: "https://schema.org",
        kind: "Article",
        headline,
        date_published: date,
        description: summary,
        main_entity_of_page: WebPageRef {
            kind: "WebPage",
            id: url,
        },
    };
    Ok(escape_script_json(&serde_json::to_string(&ld)?))
}

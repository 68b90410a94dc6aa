//! HTML shell construction for a single article.
//!
//! A shell is a complete, indexable HTML document carrying the article's SEO
//! metadata and a first-paint rendering of title, date and summary. The body
//! itself is filled in client-side by the news-data helper
//! (`window.tsdNews.fetchNewsJson`), invoked from a small inline script.
//!
//! # Escaping
//!
//! The document is a maud template, so every interpolated value is escaped.
//! User text goes through [`Text`], which also escapes apostrophes. Only the
//! JSON-LD and the hydration script are inserted with `PreEscaped`; both are
//! built by [`escape_script_json`](crate::utils::escape_script_json).
//!
//! Building a shell does no I/O; see [`super::html`] for writing it out.

use crate::config::SiteConfig;
use crate::models::{ArticleImage, LoadedArticle};
use crate::outputs::jsonld::build_json_ld;
use crate::utils::{is_safe_path_segment, js_string_literal, truncate_chars};
use maud::{DOCTYPE, Markup, PreEscaped, Render, html};
use serde_json::Value;
use std::error::Error;
use tracing::{debug, warn};

/// Maximum number of summary characters in the description meta tag.
pub const META_DESCRIPTION_CHARS: usize = 160;

/// A generated page, keyed by its slug within a locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shell {
    pub slug: String,
    pub html: String,
}

/// Untrusted text for element content or attribute values.
///
/// Renders with maud's escaping plus `'` as `&#x27;`, so no quote
/// character from an article survives unescaped.
pub struct Text<'a>(pub &'a str);

impl Render for Text<'_> {
    fn render_to(&self, buffer: &mut String) {
        let escaped = html! { (self.0) }.into_string();
        buffer.push_str(&escaped.replace('\'', "&#x27;"));
    }
}

/// Build the shell page for one article.
///
/// `locales` must be the full set of discovered locales; one hreflang
/// alternate is emitted for each of them, whether or not that locale has a
/// matching article.
///
/// # Returns
///
/// `Ok(None)` when the resolved slug cannot be used as a directory name.
pub fn generate_shell(
    config: &SiteConfig,
    locale: &str,
    article: &LoadedArticle,
    locales: &[String],
) -> Result<Option<Shell>, Box<dyn Error>> {
    let slug = article.slug();
    if !is_safe_path_segment(slug) {
        warn!(%locale, %slug, path = %article.path.display(), "Unsafe slug; skipping article");
        return Ok(None);
    }

    let record = &article.record;
    let title = record.title();
    let summary = record.summary();
    let date = record.date();
    let meta_desc = truncate_chars(summary, META_DESCRIPTION_CHARS);

    let url = config.page_url(locale, slug);
    let json_ld = build_json_ld(title, summary, date, &url)?;
    let hydration = hydration_script(&article.stem, &config.site_name)?;
    let hero = build_hero(record.images.as_ref());

    let markup = html! {
        (DOCTYPE)
        html lang=(Text(locale)) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width,initial-scale=1";
                title { (Text(title)) " — " (Text(&config.site_name)) }
                meta name="description" content=(Text(meta_desc));
                meta property="og:title" content=(Text(title));
                meta property="og:description" content=(Text(meta_desc));
                meta property="og:type" content="article";
                meta property="og:url" content=(Text(&url));
                meta property="og:site_name" content=(Text(&config.site_name));
                (alternates(config, slug, locales))
                link rel="canonical" href=(Text(&url));
                script type="application/ld+json" { (PreEscaped(&json_ld)) }
                link rel="stylesheet" href=(Text(&config.stylesheet));
            }
            body class="article-page" {
                main class="page" {
                    article id="article-shell" class="article" role="article" {
                        header class="article-header" {
                            div class="article-header-inner" {
                                h1 id="article-title" class="article-title" { (Text(title)) }
                                div class="article-meta" {
                                    time
                                        id="article-date"
                                        class="article-date"
                                        datetime=(Text(date))
                                    {
                                        (Text(date))
                                    }
                                }
                                p id="article-summary" class="article-summary" { (Text(summary)) }
                            }
                        }
                        @if let Some(image) = &hero {
                            (hero_figure(image))
                        }
                        section id="article-body" class="article-content" aria-live="polite" {
                            "Loading article…"
                        }
                    }
                }
                script src=(Text(&config.i18n_script)) {}
                script src=(Text(&config.news_script)) {}
                script { (PreEscaped(&hydration)) }
            }
        }
    };

    Ok(Some(Shell {
        slug: slug.to_string(),
        html: markup.into_string(),
    }))
}

/// One `<link rel="alternate" hreflang>` per known locale.
fn alternates(config: &SiteConfig, slug: &str, locales: &[String]) -> Markup {
    html! {
        @for locale in locales {
            link
                rel="alternate"
                hreflang=(Text(locale))
                href=(Text(&config.page_url(locale, slug)));
        }
    }
}

fn hero_figure(image: &ArticleImage) -> Markup {
    html! {
        figure class="article-hero" {
            img class="hero-image" src=(Text(&image.src)) alt=(Text(&image.alt))
                loading="lazy" decoding="async";
            @if !image.caption.is_empty() {
                figcaption class="hero-caption" { (Text(&image.caption)) }
            }
        }
    }
}

/// The first image, if there is a usable one.
///
/// Any problem with the image data drops the hero instead of the page.
fn build_hero(images: Option<&Value>) -> Option<ArticleImage> {
    match try_build_hero(images) {
        Ok(hero) => hero,
        Err(e) => {
            debug!(error = %e, "Unusable images field; omitting hero");
            None
        }
    }
}

fn try_build_hero(images: Option<&Value>) -> Result<Option<ArticleImage>, Box<dyn Error>> {
    let first = match images {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Array(items)) => match items.first() {
            Some(first) => first,
            None => return Ok(None),
        },
        Some(other) => return Err(format!("expected an array of images, got {}", other).into()),
    };

    let image: ArticleImage = serde_json::from_value(first.clone())?;
    if image.src.is_empty() {
        return Ok(None);
    }
    Ok(Some(image))
}

/// Inline script that hydrates the shell through `window.tsdNews`.
///
/// Prefers `renderArticle` and falls back to `body_html`, then `body`.
/// Every failure is swallowed so the static shell always stays readable.
fn hydration_script(article_id: &str, site_name: &str) -> Result<String, serde_json::Error> {
    Ok(format!(
        r#"
(function(){{
  try{{
    var articleId = {article_id};
    var siteName = {site_name};
    if (window.tsdNews && window.tsdNews.fetchNewsJson){{
      window.tsdNews.fetchNewsJson(articleId).then(function(data){{
        if (!data) return;
        var body = document.getElementById('article-body');
        var title = document.getElementById('article-title');
        var dateEl = document.getElementById('article-date');
        var summaryEl = document.getElementById('article-summary');
        if (data.title) title.textContent = data.title;
        if (data.date) dateEl.textContent = data.date;
        if (data.summary && !summaryEl.textContent) summaryEl.textContent = data.summary;
        if (window.tsdNews && window.tsdNews.renderArticle){{
          try{{ window.tsdNews.renderArticle(data, body); }}
          catch(e){{
            if (data.body_html) body.innerHTML = data.body_html;
            else if (data.body) body.textContent = data.body;
          }}
        }} else {{
          if (data.body_html) body.innerHTML = data.body_html;
          else if (data.body) body.textContent = data.body;
        }}
        try{{ document.title = (data.title ? data.title + ' — ' : '') + siteName; }}catch(e){{}}
      }}).catch(function(){{}});
    }}
  }}catch(e){{}}
}})();
"#,
        article_id = js_string_literal(article_id)?,
        site_name = js_string_literal(site_name)?,
    ))
}

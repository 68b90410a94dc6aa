//! Discovery and loading of article records from the news tree.
//!
//! Like a scraper, reading the tree happens in two phases:
//!
//! 1. **Indexing**: find the locales under the news root, then the article
//!    files inside each locale directory
//! 2. **Fetching**: read and parse each article file, skipping the ones that
//!    cannot be loaded
//!
//! # Input Layout
//!
//! ```text
//! news/
//! ├── en/
//! │   ├── index.json              # reserved listing, never an article
//! │   ├── community-school-opens.json
//! │   └── flood-relief.json
//! └── my/
//!     ├── index.json
//!     └── community-school-opens.json
//! ```
//!
//! # Modules
//!
//! - [`locales`]: lists locale directories under the news root
//! - [`articles`]: enumerates and loads article JSON files for one locale

pub mod articles;
pub mod locales;

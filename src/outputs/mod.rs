//! Output generation for article shell pages.
//!
//! # Submodules
//!
//! - [`shell`]: Builds the HTML shell for one article (pure, no I/O)
//! - [`jsonld`]: Builds the schema.org `Article` structured data
//! - [`html`]: Writes shells to their per-article output paths
//!
//! # Output Structure
//!
//! ```text
//! news/
//! ├── en/
//! │   ├── community-school-opens.json
//! │   └── community-school-opens/
//! │       └── index.html
//! └── my/
//!     ├── community-school-opens.json
//!     └── community-school-opens/
//!         └── index.html
//! ```

pub mod html;
pub mod jsonld;
pub mod shell;

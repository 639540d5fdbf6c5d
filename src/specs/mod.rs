//! # Scraping “specs” module
//!
//! This module hosts the **page-specific scraping specifications**. Each spec
//! focuses on one page family and encodes *where the data lives in the HTML*
//! and *how to extract it*.
//!
//! ## What lives here
//! - **Pure HTML reading** over an already parsed `scraper::Html`.
//! - **Selector choice** (constants in `config::consts`) and required-element
//!   policy: anything a page must have is looked up with `core::html::find_tag`
//!   and fails with `TagNotFound` when absent.
//! - **Light shaping** into small structs (`Article`, `VersionLink`, `IndexEntry`).
//!
//! ## What does **not** live here
//! - **Fetching / caching** – `core::net::Session` and the mode handlers in
//!   `scrape` decide when to GET what.
//! - **Partial-failure policy** – skipping unreachable items is a loop concern
//!   and belongs to `scrape`.
//! - **Output formatting** – see `output`.
//!
//! ## Typical call chain
//! ```text
//! cli → runner::run → scrape::<mode>::collect → Fetch::get_text
//!                                             ↘ specs::<page>::… (parse only)
//!                   → output::control_output
//! ```
//!
//! ## Testing notes
//! Every spec is tested offline against inline HTML snippets shaped like the
//! live pages.
pub mod downloads;
pub mod peps;
pub mod versions;
pub mod whats_new;

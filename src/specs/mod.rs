// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific scraping specifications. Each spec focuses on a single page
//! and encodes *where the ground truth lives in the HTML* and *how to extract
//! it robustly*.
//!
//! ## What lives here
//! - **Pure HTML parsing** of a saved page (`scraper::Html`).
//! - **Section choice & precedence** (which sections are read, in which order,
//!   and which one supplies a gem's fields when it appears in several).
//! - **Checked extraction** using `core::html` accessors, so a layout change
//!   fails with a named precondition and an element path instead of a panic.
//!
//! ## What does **not** live here
//! - **Persistence** of the id registry or the output, handled by `runner`.
//! - **Fetching**. The page is saved by the user beforehand.
//!
//! ## Current specs
//! - `gems` – skill, support and spirit gem tables from `poe2db.tw/us/Gem`.
//!
//! ## Testing notes
//! - Specs are tested **offline** against inline markup and saved fixtures.
pub mod gems;

//! Common utilities for Tabula.
//!
//! This crate provides shared infrastructure used by all Tabula components:
//! - **Warning System** - colored, de-duplicated diagnostics on stderr
//! - **Source Loading** - fetching markup over HTTP or reading it from disk

pub mod net;
pub mod warning;

pub use net::{FetchError, fetch_text, load_source};
pub use warning::{clear_warnings, warn_once};

//! Folio: a personal portfolio site and its contact backend.
//!
//! The library holds the appearance-mode store, the breakpoint observer, the
//! section renderers that consume both, the GitHub repository listing, and
//! the contact relay served over HTTP by the `web` module.

pub mod branding;
pub mod cli;
pub mod config;
pub mod content;
pub mod github;
pub mod page;
pub mod relay;
pub mod sections;
pub mod storage;
pub mod theme;
pub mod viewport;

#[cfg(feature = "web")]
pub mod web;

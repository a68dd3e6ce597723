//! CLI command handlers.
//!
//! `serve` runs the contact API; `render` and `theme` give headless,
//! scriptable access to the page renderer and the saved appearance mode.

pub mod common;
pub mod render;
#[cfg(feature = "web")]
pub mod serve;
pub mod theme;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use render::RenderArgs;
#[cfg(feature = "web")]
pub use serve::ServeArgs;
pub use theme::ThemeArgs;

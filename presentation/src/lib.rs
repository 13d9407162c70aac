//! Presentation layer for interior-studio
//!
//! This crate contains CLI definitions, output formatters, plan export,
//! progress reporters, and the interactive design session.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod session;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use cli::input::{BriefFields, load_photo};
pub use config::{OutputConfig, ReplConfig};
pub use output::console::ConsoleFormatter;
pub use output::export::{ExportSummary, PlanExporter};
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use session::StudioRepl;

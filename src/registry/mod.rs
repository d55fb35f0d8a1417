//! Framework install catalog and rendering.
//!
//! The catalog is embedded at compile time from `catalog/frameworks.yml`,
//! parsed once, and looked up with fuzzy substring matching in declaration
//! order.

pub mod catalog;
pub mod record;
pub mod render;

pub use catalog::FrameworkCatalog;
pub use record::{FrameworkRecord, InstallCommands};
pub use render::{generate_install_commands, list_available_frameworks, OutputFormat};

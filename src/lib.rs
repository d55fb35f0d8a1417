//! prdenv - Environment probing and framework install guidance.
//!
//! prdenv packages two helpers for the PRD-creator tooling: a prober that
//! checks the host for installed development tools, and a generator that
//! prints platform-specific install commands for known frameworks.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`probe`] - Environment probing and report aggregation
//! - [`registry`] - Framework install catalog and rendering
//! - [`shell`] - Shell command execution and platform detection
//! - [`ui`] - Terminal output helpers
//!
//! # Example
//!
//! ```
//! use prdenv::registry::{generate_install_commands, FrameworkCatalog, OutputFormat};
//! use prdenv::shell::PlatformTag;
//!
//! let catalog = FrameworkCatalog::load().unwrap();
//! let guide = generate_install_commands(
//!     &catalog,
//!     "flask",
//!     Some(PlatformTag::Linux),
//!     OutputFormat::Text,
//! );
//! assert!(guide.contains("pip install flask"));
//! ```

pub mod cli;
pub mod error;
pub mod probe;
pub mod registry;
pub mod shell;
pub mod ui;

pub use error::{PrdEnvError, Result};

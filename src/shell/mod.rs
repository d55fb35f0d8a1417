//! Shell command execution and platform detection.

pub mod command;
pub mod platform;

pub use command::{execute, probe, CommandOptions, CommandResult, PROBE_TIMEOUT_SECS};
pub use platform::PlatformTag;

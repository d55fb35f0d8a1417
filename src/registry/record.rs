//! Framework record types.

use crate::shell::PlatformTag;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single framework entry from the embedded catalog.
///
/// Records are immutable for the process lifetime; the catalog is parsed once
/// and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameworkRecord {
    /// Lowercase lookup key (e.g. "flask", "nextjs").
    pub key: String,

    /// Display name (e.g. "Flask", "Next.js").
    pub name: String,

    /// One-line description.
    pub description: String,

    /// Prerequisite tools or runtimes, as display strings.
    pub prerequisites: Vec<String>,

    /// Ordered install commands, flat or keyed by platform.
    pub install_commands: InstallCommands,

    /// Command that verifies the install succeeded.
    pub verify_command: String,
}

/// Install command payload: either one ordered list for every platform, or a
/// mapping from platform to its own list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InstallCommands {
    Flat(Vec<String>),
    PerPlatform(BTreeMap<PlatformTag, Vec<String>>),
}

impl InstallCommands {
    /// Resolve the command list for a platform.
    ///
    /// Flat payloads apply everywhere; per-platform payloads return `None`
    /// when the platform has no entry.
    pub fn for_platform(&self, platform: PlatformTag) -> Option<&[String]> {
        match self {
            InstallCommands::Flat(commands) => Some(commands),
            InstallCommands::PerPlatform(map) => map.get(&platform).map(Vec::as_slice),
        }
    }

    /// Whether the payload differs by platform.
    pub fn is_platform_specific(&self) -> bool {
        matches!(self, InstallCommands::PerPlatform(_))
    }

    /// Platforms a per-platform payload covers (empty for flat payloads).
    pub fn platforms(&self) -> Vec<PlatformTag> {
        match self {
            InstallCommands::Flat(_) => Vec::new(),
            InstallCommands::PerPlatform(map) => map.keys().copied().collect(),
        }
    }
}

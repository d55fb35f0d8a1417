//! Environment report types.
//!
//! Serialized field order and presence follow the report shape the rest of
//! the PRD tooling consumes: optional `path` fields are omitted entirely when
//! a tool is not installed, but serialized as `null` when the tool is present
//! and only its path lookup failed.

use crate::shell::PlatformTag;
use serde::Serialize;

/// Aggregate result of a full environment probe run.
///
/// Constructed fresh on every invocation; never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct EnvironmentReport {
    pub platform: PlatformTag,
    pub python: PythonReport,
    pub nodejs: NodeReport,
    pub java: JavaReport,
    pub databases: DatabaseReport,
    pub git: GitReport,
}

impl EnvironmentReport {
    /// Render the report as indented JSON.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Python runtime status.
#[derive(Debug, Clone, Serialize)]
pub struct PythonReport {
    pub installed: bool,
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub pip_available: bool,
}

/// Node.js runtime status, with its companion npm version.
#[derive(Debug, Clone, Serialize)]
pub struct NodeReport {
    pub installed: bool,
    pub version: Option<String>,
    pub npm_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Option<String>>,
}

/// Java runtime status.
#[derive(Debug, Clone, Serialize)]
pub struct JavaReport {
    pub installed: bool,
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Option<String>>,
}

/// Status of the five probed database binaries.
#[derive(Debug, Clone, Serialize)]
pub struct DatabaseReport {
    pub mysql: DbStatus,
    pub postgresql: DbStatus,
    pub mongodb: DbStatus,
    pub redis: DbStatus,
    pub sqlite3: DbStatus,
}

/// Presence and version of a single database binary.
#[derive(Debug, Clone, Serialize)]
pub struct DbStatus {
    pub installed: bool,
    pub version: Option<String>,
}

/// Git status.
#[derive(Debug, Clone, Serialize)]
pub struct GitReport {
    pub installed: bool,
    pub version: Option<String>,
}

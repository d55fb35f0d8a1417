//! Environment prober.
//!
//! Probes the host for installed development tools (language runtimes,
//! databases, version control) by shelling out with a fixed per-command
//! timeout, and aggregates the results into an [`EnvironmentReport`].

pub mod report;
pub mod tools;

pub use report::{
    DatabaseReport, DbStatus, EnvironmentReport, GitReport, JavaReport, NodeReport, PythonReport,
};
pub use tools::{check_databases, check_git, check_java, check_nodejs, check_python};

//! Check command implementation.
//!
//! The `prdenv check` command probes the host for installed development
//! tools and prints the aggregate report as indented JSON.

use crate::error::Result;
use crate::probe::{
    check_databases, check_git, check_java, check_nodejs, check_python, EnvironmentReport,
};
use crate::shell::PlatformTag;
use crate::ui::Output;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
#[derive(Debug, Default)]
pub struct CheckCommand;

impl CheckCommand {
    /// Create a new check command.
    pub fn new() -> Self {
        Self
    }

    /// Run the full probe suite, emitting one progress line per tool group.
    ///
    /// Probes run strictly one after another in declaration order; a failed
    /// probe degrades to `installed: false` and never aborts the run.
    fn run_probes(&self, platform: PlatformTag, out: &Output) -> EnvironmentReport {
        out.status("Checking Python environment...");
        let python = check_python(platform);

        out.status("Checking Node.js environment...");
        let nodejs = check_nodejs(platform);

        out.status("Checking Java environment...");
        let java = check_java(platform);

        out.status("Checking database environment...");
        let databases = check_databases();

        out.status("Checking Git environment...");
        let git = check_git();

        EnvironmentReport {
            platform,
            python,
            nodejs,
            java,
            databases,
            git,
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, out: &Output) -> Result<CommandResult> {
        let platform = PlatformTag::current();
        tracing::debug!("detected platform: {}", platform);

        out.header(&format!(
            "Detected operating system: {}",
            platform.as_str().to_uppercase()
        ));
        out.status("");

        let report = self.run_probes(platform, out);

        out.status("");
        out.status("Environment report (JSON):");
        out.println(&report.to_pretty_json());

        Ok(CommandResult::success())
    }
}

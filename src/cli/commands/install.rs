//! Install command implementation.
//!
//! The `prdenv install` command looks up a framework in the embedded catalog
//! and prints its install commands, or lists the whole catalog.

use crate::cli::args::{Cli, InstallArgs};
use crate::error::Result;
use crate::registry::{generate_install_commands, list_available_frameworks, FrameworkCatalog};
use crate::ui::Output;
use clap::CommandFactory;

use super::dispatcher::{Command, CommandResult};

/// The install command implementation.
pub struct InstallCommand {
    args: InstallArgs,
}

impl InstallCommand {
    /// Create a new install command.
    pub fn new(args: InstallArgs) -> Self {
        Self { args }
    }
}

impl Command for InstallCommand {
    fn execute(&self, out: &Output) -> Result<CommandResult> {
        let catalog = FrameworkCatalog::load()?;
        tracing::debug!("catalog loaded with {} frameworks", catalog.len());

        if self.args.list {
            out.println(&list_available_frameworks(&catalog));
            return Ok(CommandResult::success());
        }

        if let Some(framework) = &self.args.framework {
            // Lookup misses come back as descriptive text, not errors;
            // printing them still exits zero.
            let rendered = generate_install_commands(
                &catalog,
                framework,
                self.args.platform.resolve(),
                self.args.format.into(),
            );
            out.println(&rendered);
            return Ok(CommandResult::success());
        }

        // Neither --list nor --framework: show the subcommand help.
        let mut cmd = Cli::command();
        if let Some(install) = cmd.find_subcommand_mut("install") {
            install.print_help()?;
        }
        out.println("");
        out.println("Tips:");
        out.println("  - Use --list to see all supported frameworks");
        out.println("  - Use --platform to set the operating system explicitly if auto-detection fails");

        Ok(CommandResult::success())
    }
}

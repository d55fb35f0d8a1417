//! Rendering of install guidance as text or JSON.

use crate::registry::catalog::FrameworkCatalog;
use crate::registry::record::FrameworkRecord;
use crate::shell::PlatformTag;
use serde::Serialize;

/// Output format for install guidance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// JSON shape of a resolved install guide.
#[derive(Debug, Serialize)]
struct InstallGuide<'a> {
    name: &'a str,
    description: &'a str,
    prerequisites: &'a [String],
    install_commands: &'a [String],
    verify_command: &'a str,
    detected_platform: PlatformTag,
}

/// Resolve a framework and render its install commands.
///
/// Lookup misses and platform gaps come back as descriptive strings rather
/// than errors; the caller just prints whatever it gets. When `platform` is
/// `None` the host platform is auto-detected.
pub fn generate_install_commands(
    catalog: &FrameworkCatalog,
    name: &str,
    platform: Option<PlatformTag>,
    format: OutputFormat,
) -> String {
    let Some(record) = catalog.lookup(name) else {
        return format!(
            "Not found: no install information for framework '{}'. Use --list to see supported frameworks.",
            name
        );
    };

    let platform = platform.unwrap_or_else(PlatformTag::current);

    let Some(commands) = record.install_commands.for_platform(platform) else {
        return platform_gap_notice(record, platform);
    };

    match format {
        OutputFormat::Json => render_json(record, platform, commands),
        OutputFormat::Text => render_text(record, platform, commands),
    }
}

/// Render the whole catalog as a text listing, one heading per record.
pub fn list_available_frameworks(catalog: &FrameworkCatalog) -> String {
    let mut output = Vec::new();
    output.push("# Supported frameworks:".to_string());
    output.push(String::new());

    for record in catalog.records() {
        output.push(format!("## {} ({})", record.name, record.key));
        output.push(format!("Description: {}", record.description));
        output.push(format!(
            "Prerequisites: {}",
            record.prerequisites.join(", ")
        ));
        output.push(String::new());
    }

    output.join("\n")
}

fn render_json(record: &FrameworkRecord, platform: PlatformTag, commands: &[String]) -> String {
    let guide = InstallGuide {
        name: &record.name,
        description: &record.description,
        prerequisites: &record.prerequisites,
        install_commands: commands,
        verify_command: &record.verify_command,
        detected_platform: platform,
    };
    serde_json::to_string_pretty(&guide).unwrap_or_else(|_| "{}".to_string())
}

fn render_text(record: &FrameworkRecord, platform: PlatformTag, commands: &[String]) -> String {
    let mut output = Vec::new();
    output.push(format!("# {} installation guide", record.name));
    output.push(format!("# Description: {}", record.description));
    output.push(format!(
        "# Detected OS: {}",
        platform.as_str().to_uppercase()
    ));
    output.push(format!(
        "# Prerequisites: {}",
        record.prerequisites.join(", ")
    ));
    output.push(String::new());
    output.push("# Install commands:".to_string());
    for command in commands {
        output.push(command.clone());
    }
    output.push(String::new());
    output.push("# Verify installation:".to_string());
    output.push(record.verify_command.clone());
    output.push(String::new());
    output.push("# Tips:".to_string());
    output.push("# - If a command fails, retry it with administrator privileges".to_string());
    output.push(
        "# - If the OS is not detected correctly, pass --platform (windows/macos/linux)"
            .to_string(),
    );

    output.join("\n")
}

fn platform_gap_notice(record: &FrameworkRecord, platform: PlatformTag) -> String {
    format!(
        "Warning: no install commands found for platform '{}'\n\n\
         Framework: {}\n\
         Description: {}\n\
         Prerequisites: {}\n\n\
         Please install manually following the framework's documentation.",
        platform,
        record.name,
        record.description,
        record.prerequisites.join(", ")
    )
}

//! Per-tool environment checks.
//!
//! Each check issues one or more shell probes in a fixed fallback order and
//! returns a self-contained report record. No check depends on another's
//! result, and a failed probe always degrades to `installed: false` rather
//! than surfacing an error.

use crate::probe::report::{
    DatabaseReport, DbStatus, GitReport, JavaReport, NodeReport, PythonReport,
};
use crate::shell::{probe, PlatformTag};
use regex::Regex;

/// Check for a Python interpreter.
///
/// Tries `python3` first and falls back to `python`; pip availability is
/// probed the same way. The version string is reduced to the bare version
/// token (`Python 3.11.2` becomes `3.11.2`).
pub fn check_python(platform: PlatformTag) -> PythonReport {
    let (mut ok, mut version) = probe("python3 --version");
    if !ok {
        (ok, version) = probe("python --version");
    }

    if !ok {
        return PythonReport {
            installed: false,
            version: None,
            path: None,
            pip_available: false,
        };
    }

    let pip_available = probe("pip3 --version").0 || probe("pip --version").0;

    let (found, path) = locate("python3", platform);
    let path = if found { path } else { locate("python", platform).1 };

    PythonReport {
        installed: true,
        version: Some(extract_python_version(&version)),
        path: Some(path),
        pip_available,
    }
}

/// Check for Node.js and its companion npm.
pub fn check_nodejs(platform: PlatformTag) -> NodeReport {
    let (ok, version) = probe("node --version");
    if !ok {
        return NodeReport {
            installed: false,
            version: None,
            npm_version: None,
            path: None,
        };
    }

    let (npm_ok, npm_version) = probe("npm --version");
    let (found, path) = locate("node", platform);

    NodeReport {
        installed: true,
        version: Some(version),
        npm_version: npm_ok.then_some(npm_version),
        path: Some(found.then_some(path)),
    }
}

/// Check for a Java runtime.
///
/// `java -version` reports success via its exit code but writes the version
/// text to stderr, so a second probe pipes stderr through `head` to capture
/// the display line.
pub fn check_java(platform: PlatformTag) -> JavaReport {
    let (ok, _) = probe("java -version");
    if !ok {
        return JavaReport {
            installed: false,
            version: None,
            path: None,
        };
    }

    let (line_ok, line) = probe("java -version 2>&1 | head -n 1");
    let version = if line_ok {
        line
    } else {
        "Java (version string unavailable)".to_string()
    };

    let (found, path) = locate("java", platform);

    JavaReport {
        installed: true,
        version: Some(version),
        path: Some(found.then_some(path)),
    }
}

/// Check the five common database binaries.
pub fn check_databases() -> DatabaseReport {
    DatabaseReport {
        mysql: db_status("mysql --version"),
        postgresql: db_status("psql --version"),
        mongodb: db_status("mongod --version"),
        redis: db_status("redis-cli --version"),
        sqlite3: db_status("sqlite3 --version"),
    }
}

/// Check for Git.
pub fn check_git() -> GitReport {
    let (ok, version) = probe("git --version");
    GitReport {
        installed: ok,
        version: ok.then_some(version),
    }
}

fn db_status(command: &str) -> DbStatus {
    let (ok, version) = probe(command);
    DbStatus {
        installed: ok,
        version: ok.then_some(version),
    }
}

/// Resolve a tool's path with the platform-appropriate finder.
///
/// `where` on Windows may print several matches; only the first is kept.
fn locate(tool: &str, platform: PlatformTag) -> (bool, String) {
    let finder = if platform == PlatformTag::Windows {
        "where"
    } else {
        "which"
    };
    let (ok, output) = probe(&format!("{} {}", finder, tool));
    let first = output.lines().next().unwrap_or("").trim().to_string();
    (ok, first)
}

/// Pull the version token out of `python --version` output.
fn extract_python_version(raw: &str) -> String {
    Regex::new(r"(?i)^python\s+(\S+)")
        .ok()
        .and_then(|re| {
            re.captures(raw.trim())
                .map(|caps| caps[1].to_string())
        })
        .unwrap_or_else(|| raw.trim().to_string())
}

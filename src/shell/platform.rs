//! Platform detection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Recognized operating system categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformTag {
    Windows,
    Macos,
    Linux,
    Unknown,
}

impl PlatformTag {
    /// Detect the platform the binary was built for.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            PlatformTag::Windows
        } else if cfg!(target_os = "macos") {
            PlatformTag::Macos
        } else if cfg!(target_os = "linux") {
            PlatformTag::Linux
        } else {
            PlatformTag::Unknown
        }
    }

    /// Classify an OS identifier string.
    ///
    /// Case-insensitive substring match: "windows", "darwin", "linux".
    /// Pure function of the input — anything unrecognized maps to `Unknown`.
    pub fn from_os_name(os_name: &str) -> Self {
        let name = os_name.to_lowercase();
        if name.contains("windows") {
            PlatformTag::Windows
        } else if name.contains("darwin") {
            PlatformTag::Macos
        } else if name.contains("linux") {
            PlatformTag::Linux
        } else {
            PlatformTag::Unknown
        }
    }

    /// Lowercase tag as used in report output and catalog keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformTag::Windows => "windows",
            PlatformTag::Macos => "macos",
            PlatformTag::Linux => "linux",
            PlatformTag::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PlatformTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_returns_valid_tag() {
        let platform = PlatformTag::current();
        assert!(matches!(
            platform,
            PlatformTag::Windows | PlatformTag::Macos | PlatformTag::Linux | PlatformTag::Unknown
        ));
    }

    #[test]
    fn from_os_name_matches_substrings() {
        assert_eq!(PlatformTag::from_os_name("Windows"), PlatformTag::Windows);
        assert_eq!(
            PlatformTag::from_os_name("Windows 10 Pro"),
            PlatformTag::Windows
        );
        assert_eq!(PlatformTag::from_os_name("Darwin"), PlatformTag::Macos);
        assert_eq!(PlatformTag::from_os_name("Linux"), PlatformTag::Linux);
        assert_eq!(
            PlatformTag::from_os_name("linux-gnu 6.1"),
            PlatformTag::Linux
        );
    }

    #[test]
    fn from_os_name_is_case_insensitive() {
        assert_eq!(PlatformTag::from_os_name("WINDOWS"), PlatformTag::Windows);
        assert_eq!(PlatformTag::from_os_name("darwin"), PlatformTag::Macos);
        assert_eq!(PlatformTag::from_os_name("LiNuX"), PlatformTag::Linux);
    }

    #[test]
    fn from_os_name_unrecognized_is_unknown() {
        assert_eq!(PlatformTag::from_os_name("FreeBSD"), PlatformTag::Unknown);
        assert_eq!(PlatformTag::from_os_name("SunOS"), PlatformTag::Unknown);
        assert_eq!(PlatformTag::from_os_name(""), PlatformTag::Unknown);
    }

    #[test]
    fn display_is_lowercase() {
        assert_eq!(PlatformTag::Windows.to_string(), "windows");
        assert_eq!(PlatformTag::Macos.to_string(), "macos");
        assert_eq!(PlatformTag::Linux.to_string(), "linux");
        assert_eq!(PlatformTag::Unknown.to_string(), "unknown");
    }

    #[test]
    fn serializes_as_lowercase_string() {
        assert_eq!(
            serde_json::to_string(&PlatformTag::Macos).unwrap(),
            "\"macos\""
        );
        assert_eq!(
            serde_json::from_str::<PlatformTag>("\"windows\"").unwrap(),
            PlatformTag::Windows
        );
    }
}

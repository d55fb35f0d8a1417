//! Framework catalog embedded at compile time.

use crate::error::{PrdEnvError, Result};
use crate::registry::record::{FrameworkRecord, InstallCommands};
use crate::shell::PlatformTag;
use include_dir::{include_dir, Dir};
use serde::Deserialize;

/// Embedded catalog directory.
static CATALOG_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/catalog");

const CATALOG_FILE: &str = "frameworks.yml";

/// On-disk shape of the catalog file.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    frameworks: Vec<FrameworkRecord>,
}

/// The full set of known framework records, in declaration order.
///
/// Declaration order is load-bearing: fuzzy lookup returns the first match,
/// so the `Vec` representation keeps that deterministic.
#[derive(Debug, Clone)]
pub struct FrameworkCatalog {
    records: Vec<FrameworkRecord>,
}

impl FrameworkCatalog {
    /// Parse and validate the embedded catalog.
    pub fn load() -> Result<Self> {
        let file =
            CATALOG_DIR
                .get_file(CATALOG_FILE)
                .ok_or_else(|| PrdEnvError::CatalogNotFound {
                    path: format!("catalog/{}", CATALOG_FILE),
                })?;

        let content = file
            .contents_utf8()
            .ok_or_else(|| PrdEnvError::CatalogParseError {
                path: format!("catalog/{}", CATALOG_FILE),
                message: "Invalid UTF-8".to_string(),
            })?;

        let parsed: CatalogFile =
            serde_yaml::from_str(content).map_err(|e| PrdEnvError::CatalogParseError {
                path: format!("catalog/{}", CATALOG_FILE),
                message: e.to_string(),
            })?;

        let catalog = Self {
            records: parsed.frameworks,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Build a catalog from records directly (test-only).
    #[cfg(test)]
    pub(crate) fn from_records(records: Vec<FrameworkRecord>) -> Self {
        Self { records }
    }

    /// All records, in declaration order.
    pub fn records(&self) -> &[FrameworkRecord] {
        &self.records
    }

    /// Number of records in the catalog.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Fuzzy lookup of a framework by name.
    ///
    /// The input is normalized (lowercased, `.` and `-` stripped) and matched
    /// by two-way substring containment against each key: the first record
    /// whose key contains the input, or is contained in it, wins. Short keys
    /// can therefore match many inputs; declaration order decides.
    pub fn lookup(&self, name: &str) -> Option<&FrameworkRecord> {
        let needle = normalize(name);
        self.records
            .iter()
            .find(|record| record.key.contains(&needle) || needle.contains(record.key.as_str()))
    }

    /// Check the one referential invariant: every platform key used inside a
    /// per-platform payload must be windows, macos, or linux.
    fn validate(&self) -> Result<()> {
        for record in &self.records {
            if let InstallCommands::PerPlatform(map) = &record.install_commands {
                if map.is_empty() {
                    return Err(PrdEnvError::CatalogValidationError {
                        message: format!("'{}' has an empty platform mapping", record.key),
                    });
                }
                if map.contains_key(&PlatformTag::Unknown) {
                    return Err(PrdEnvError::CatalogValidationError {
                        message: format!(
                            "'{}' maps install commands for the 'unknown' platform",
                            record.key
                        ),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Normalize a framework name for lookup: lowercase, strip `.` and `-`.
fn normalize(name: &str) -> String {
    name.to_lowercase().replace(['.', '-'], "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn load_parses_embedded_catalog() {
        let catalog = FrameworkCatalog::load().unwrap();
        assert_eq!(catalog.len(), 15);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn load_keeps_declaration_order() {
        let catalog = FrameworkCatalog::load().unwrap();
        let keys: Vec<&str> = catalog.records().iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys[0], "flask");
        let nextjs = keys.iter().position(|k| *k == "nextjs").unwrap();
        let react = keys.iter().position(|k| *k == "react").unwrap();
        assert!(nextjs < react);
    }

    #[test]
    fn load_contains_expected_keys() {
        let catalog = FrameworkCatalog::load().unwrap();
        for key in [
            "flask",
            "django",
            "fastapi",
            "streamlit",
            "tkinter",
            "nextjs",
            "react",
            "vue",
            "express",
            "hexo",
            "hugo",
            "jekyll",
            "pandas",
            "matplotlib",
            "electron",
        ] {
            assert!(
                catalog.records().iter().any(|r| r.key == key),
                "missing {}",
                key
            );
        }
    }

    #[test]
    fn platform_keyed_records_cover_all_three_platforms() {
        let catalog = FrameworkCatalog::load().unwrap();
        for key in ["tkinter", "hugo", "jekyll"] {
            let record = catalog.lookup(key).unwrap();
            assert!(record.install_commands.is_platform_specific(), "{}", key);
            for platform in [PlatformTag::Windows, PlatformTag::Macos, PlatformTag::Linux] {
                assert!(
                    record.install_commands.for_platform(platform).is_some(),
                    "{} missing {}",
                    key,
                    platform
                );
            }
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let catalog = FrameworkCatalog::load().unwrap();
        let lower = catalog.lookup("react").unwrap();
        let upper = catalog.lookup("React").unwrap();
        assert_eq!(lower.key, upper.key);
        assert_eq!(lower.key, "react");
    }

    #[test]
    fn lookup_normalizes_dots_and_dashes() {
        let catalog = FrameworkCatalog::load().unwrap();
        assert_eq!(catalog.lookup("Next.js").unwrap().key, "nextjs");
        assert_eq!(catalog.lookup("vue-js").unwrap().key, "vue");
    }

    #[test]
    fn lookup_fuzzy_matches_supersets() {
        let catalog = FrameworkCatalog::load().unwrap();
        // "reactjs" contains the key "react"
        assert_eq!(catalog.lookup("reactjs").unwrap().key, "react");
        // "fast" is contained in the key "fastapi"
        assert_eq!(catalog.lookup("fast").unwrap().key, "fastapi");
    }

    #[test]
    fn lookup_unknown_returns_none() {
        let catalog = FrameworkCatalog::load().unwrap();
        assert!(catalog.lookup("doesnotexist").is_none());
    }

    #[test]
    fn lookup_empty_input_matches_first_record() {
        // Every key contains the empty string, so the first declared record
        // wins. Kept for compatibility with the convenience-matching behavior.
        let catalog = FrameworkCatalog::load().unwrap();
        assert_eq!(catalog.lookup("").unwrap().key, "flask");
    }

    #[test]
    fn validate_rejects_unknown_platform_key() {
        let mut map = BTreeMap::new();
        map.insert(PlatformTag::Unknown, vec!["echo hi".to_string()]);
        let catalog = FrameworkCatalog::from_records(vec![FrameworkRecord {
            key: "bogus".to_string(),
            name: "Bogus".to_string(),
            description: "Broken entry".to_string(),
            prerequisites: vec![],
            install_commands: InstallCommands::PerPlatform(map),
            verify_command: "bogus --version".to_string(),
        }]);

        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("unknown"));
    }

    #[test]
    fn validate_rejects_empty_platform_mapping() {
        let catalog = FrameworkCatalog::from_records(vec![FrameworkRecord {
            key: "bogus".to_string(),
            name: "Bogus".to_string(),
            description: "Broken entry".to_string(),
            prerequisites: vec![],
            install_commands: InstallCommands::PerPlatform(BTreeMap::new()),
            verify_command: "bogus --version".to_string(),
        }]);

        assert!(catalog.validate().is_err());
    }

    #[test]
    fn normalize_strips_separators() {
        assert_eq!(normalize("Next.js"), "nextjs");
        assert_eq!(normalize("VUE-JS"), "vuejs");
        assert_eq!(normalize("flask"), "flask");
    }
}

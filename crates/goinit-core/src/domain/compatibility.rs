//! Compatibility matrix: which frameworks and Go versions are valid for
//! which project type.
//!
//! # Design Rationale
//!
//! All compatibility knowledge lives in one static registry plus the
//! metadata-sourced [`CompatibilityMatrix`]. Lookups are total functions:
//! a project type missing from a metadata-sourced matrix falls back to the
//! single-element `[golly]` sequence, and version queries always return at
//! least the static fallback list. Nothing here can fail.
//!
//! # Adding a New Framework
//!
//! 1. Add a variant to `Framework` in `value_objects.rs`
//! 2. Add it to the relevant [`FRAMEWORK_MATRIX`] rows here
//! 3. That's it — ordering in the row is the presentation order, and the
//!    first element of each row is the recommended default

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Framework, ProjectType};

// ── Static registry (fallback before metadata loads) ─────────────────────────

/// One row of the static framework matrix.
#[derive(Debug, Clone, Copy)]
pub struct TypeFrameworks {
    pub project_type: ProjectType,
    /// Ordered: the first element is the recommended default.
    pub frameworks: &'static [Framework],
}

/// Single source of truth for the built-in framework sets.
///
/// Golly appears first in every row: it is the recommended default for all
/// project types.
pub static FRAMEWORK_MATRIX: &[TypeFrameworks] = &[
    TypeFrameworks {
        project_type: ProjectType::Microservice,
        frameworks: &[
            Framework::Golly,
            Framework::Gin,
            Framework::Echo,
            Framework::Fiber,
            Framework::GoKit,
        ],
    },
    TypeFrameworks {
        project_type: ProjectType::CliApp,
        frameworks: &[
            Framework::Golly,
            Framework::Cobra,
            Framework::Urfave,
            Framework::Kingpin,
        ],
    },
    TypeFrameworks {
        project_type: ProjectType::ApiServer,
        frameworks: &[
            Framework::Golly,
            Framework::Gin,
            Framework::Echo,
            Framework::Fiber,
            Framework::Chi,
        ],
    },
    TypeFrameworks {
        project_type: ProjectType::SimpleProject,
        frameworks: &[Framework::Golly],
    },
];

/// Fallback when a project type has no row at all: a single selectable
/// default rather than an empty menu.
pub const FALLBACK_FRAMEWORK: Framework = Framework::Golly;

/// Go versions offered before the metadata endpoint has been consulted,
/// newest first.
pub static FALLBACK_VERSIONS: &[&str] = &["1.22.0", "1.21.7", "1.20.14"];

// ── Metadata wire type ───────────────────────────────────────────────────────

/// Response shape of the generator service's `GET /api/meta` endpoint.
///
/// The `GET /api/templates` catalog carries the same maps under shorter
/// keys, hence the aliases. Keys are plain strings so that a newer service
/// advertising types or frameworks this client does not know about still
/// deserializes; unknown entries are simply not offered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMetadata {
    /// project type → display label
    #[serde(default, alias = "projectTypes")]
    pub supported_project_types: BTreeMap<String, String>,
    /// version string → enabled flag
    #[serde(default, alias = "goVersions")]
    pub supported_go_versions: BTreeMap<String, bool>,
    /// project type → (framework → enabled flag)
    #[serde(default, alias = "frameworks")]
    pub supported_frameworks: BTreeMap<String, BTreeMap<String, bool>>,
}

// ── Version ordering ─────────────────────────────────────────────────────────

/// A selectable Go version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionOption {
    pub version: String,
    /// Set on the newest entry only.
    pub latest: bool,
}

impl VersionOption {
    /// Label as shown in menus: the newest entry is marked latest-stable.
    pub fn label(&self) -> String {
        if self.latest {
            format!("{} (latest stable)", self.version)
        } else {
            self.version.clone()
        }
    }
}

/// Sort key for a dotted numeric version. Missing components count as 0,
/// non-numeric components as 0, so the ordering is total.
fn version_key(version: &str) -> (u64, u64, u64) {
    let mut parts = version
        .split('.')
        .map(|p| p.trim().parse::<u64>().unwrap_or(0));
    (
        parts.next().unwrap_or(0),
        parts.next().unwrap_or(0),
        parts.next().unwrap_or(0),
    )
}

fn sort_versions_descending(mut versions: Vec<String>) -> Vec<VersionOption> {
    versions.sort_by(|a, b| version_key(b).cmp(&version_key(a)));
    versions
        .into_iter()
        .enumerate()
        .map(|(idx, version)| VersionOption {
            version,
            latest: idx == 0,
        })
        .collect()
}

// ── CompatibilityMatrix ──────────────────────────────────────────────────────

/// The authoritative table of valid frameworks and Go versions per project
/// type. Immutable once built: constructed either from the static fallback
/// or once from the service's metadata endpoint.
#[derive(Debug, Clone)]
pub struct CompatibilityMatrix {
    frameworks: BTreeMap<ProjectType, Vec<Framework>>,
    versions: Vec<VersionOption>,
}

impl CompatibilityMatrix {
    /// The hardcoded matrix used before (or instead of) service metadata.
    pub fn fallback() -> Self {
        let frameworks = FRAMEWORK_MATRIX
            .iter()
            .map(|row| (row.project_type, row.frameworks.to_vec()))
            .collect();
        let versions =
            sort_versions_descending(FALLBACK_VERSIONS.iter().map(|v| v.to_string()).collect());
        Self {
            frameworks,
            versions,
        }
    }

    /// Build the live matrix from service metadata.
    ///
    /// Framework ordering follows the canonical row in [`FRAMEWORK_MATRIX`]
    /// (metadata maps carry no order), filtered to entries the service
    /// flags as enabled. Frameworks the service enables but this row does
    /// not know are appended in name order. Versions flagged `false` are
    /// dropped; the rest are sorted newest-first.
    pub fn from_metadata(meta: &ProjectMetadata) -> Self {
        let mut frameworks = BTreeMap::new();

        for (type_key, flags) in &meta.supported_frameworks {
            let Ok(project_type) = type_key.parse::<ProjectType>() else {
                tracing::debug!(project_type = %type_key, "ignoring unknown project type in metadata");
                continue;
            };

            let enabled = |fw: Framework| flags.get(fw.as_str()).copied().unwrap_or(false);

            let canonical = FRAMEWORK_MATRIX
                .iter()
                .find(|row| row.project_type == project_type)
                .map(|row| row.frameworks)
                .unwrap_or(&[]);

            let mut row: Vec<Framework> = canonical
                .iter()
                .copied()
                .filter(|fw| enabled(*fw))
                .collect();

            // Anything the service enables beyond the canonical row.
            for (name, flag) in flags {
                if !flag {
                    continue;
                }
                if let Ok(fw) = name.parse::<Framework>() {
                    if !row.contains(&fw) {
                        row.push(fw);
                    }
                }
            }

            if !row.is_empty() {
                frameworks.insert(project_type, row);
            }
        }

        let versions = sort_versions_descending(
            meta.supported_go_versions
                .iter()
                .filter(|(_, enabled)| **enabled)
                .map(|(v, _)| v.clone())
                .collect(),
        );
        let versions = if versions.is_empty() {
            // A service advertising no versions is degenerate; keep the UI usable.
            sort_versions_descending(FALLBACK_VERSIONS.iter().map(|v| v.to_string()).collect())
        } else {
            versions
        };

        Self {
            frameworks,
            versions,
        }
    }

    /// The ordered framework sequence for a project type. Total: a type
    /// without a row yields the single-element `[golly]` fallback.
    pub fn frameworks_for(&self, project_type: ProjectType) -> Vec<Framework> {
        self.frameworks
            .get(&project_type)
            .cloned()
            .unwrap_or_else(|| vec![FALLBACK_FRAMEWORK])
    }

    /// The recommended default framework for a project type (first element
    /// of its sequence).
    pub fn recommended_for(&self, project_type: ProjectType) -> Framework {
        self.frameworks_for(project_type)
            .first()
            .copied()
            .unwrap_or(FALLBACK_FRAMEWORK)
    }

    /// Whether `framework` is a member of the project type's sequence.
    pub fn is_compatible(&self, project_type: ProjectType, framework: Framework) -> bool {
        self.frameworks_for(project_type).contains(&framework)
    }

    /// All selectable Go versions, newest first; the first entry carries
    /// the latest-stable flag.
    pub fn versions_for(&self) -> &[VersionOption] {
        &self.versions
    }

    /// The newest selectable version string.
    pub fn latest_version(&self) -> &str {
        // `versions` is never empty: both constructors fall back to the
        // static list.
        &self.versions[0].version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_app_sequence_is_golly_cobra_urfave_kingpin() {
        let matrix = CompatibilityMatrix::fallback();
        assert_eq!(
            matrix.frameworks_for(ProjectType::CliApp),
            vec![
                Framework::Golly,
                Framework::Cobra,
                Framework::Urfave,
                Framework::Kingpin
            ]
        );
    }

    #[test]
    fn golly_is_recommended_for_every_type() {
        let matrix = CompatibilityMatrix::fallback();
        for project_type in ProjectType::ALL {
            assert_eq!(matrix.recommended_for(project_type), Framework::Golly);
        }
    }

    #[test]
    fn simple_project_offers_only_golly() {
        let matrix = CompatibilityMatrix::fallback();
        assert_eq!(
            matrix.frameworks_for(ProjectType::SimpleProject),
            vec![Framework::Golly]
        );
    }

    #[test]
    fn cobra_is_not_compatible_with_microservice() {
        let matrix = CompatibilityMatrix::fallback();
        assert!(matrix.is_compatible(ProjectType::CliApp, Framework::Cobra));
        assert!(!matrix.is_compatible(ProjectType::Microservice, Framework::Cobra));
    }

    #[test]
    fn fallback_versions_sorted_descending_with_latest_flag() {
        let matrix = CompatibilityMatrix::fallback();
        let versions = matrix.versions_for();
        assert_eq!(versions[0].version, "1.22.0");
        assert!(versions[0].latest);
        assert_eq!(versions[1].version, "1.21.7");
        assert!(!versions[1].latest);
        assert_eq!(matrix.latest_version(), "1.22.0");
    }

    #[test]
    fn version_key_treats_missing_components_as_zero() {
        assert_eq!(version_key("1.22"), (1, 22, 0));
        assert_eq!(version_key("1.22.0"), (1, 22, 0));
        // Numeric, not lexicographic: 1.10 > 1.9
        assert!(version_key("1.10") > version_key("1.9"));
    }

    #[test]
    fn version_label_marks_only_the_newest() {
        let sorted = sort_versions_descending(vec![
            "1.21.7".into(),
            "1.23.1".into(),
            "1.22.0".into(),
        ]);
        assert_eq!(sorted[0].label(), "1.23.1 (latest stable)");
        assert_eq!(sorted[1].label(), "1.22.0");
        assert_eq!(sorted[2].label(), "1.21.7");
    }

    fn sample_metadata() -> ProjectMetadata {
        serde_json::from_str(
            r#"{
                "supportedProjectTypes": {"microservice": "Microservice", "cli-app": "CLI App"},
                "supportedGoVersions": {"1.21.7": true, "1.23.12": true, "1.19.0": false},
                "supportedFrameworks": {
                    "cli-app": {"golly": true, "cobra": true, "urfave": false, "kingpin": true},
                    "microservice": {"golly": true, "gin": true, "echo": true, "fiber": false, "gokit": true},
                    "spa": {"golly": true}
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn metadata_matrix_filters_disabled_and_keeps_canonical_order() {
        let matrix = CompatibilityMatrix::from_metadata(&sample_metadata());
        assert_eq!(
            matrix.frameworks_for(ProjectType::CliApp),
            vec![Framework::Golly, Framework::Cobra, Framework::Kingpin]
        );
        assert_eq!(
            matrix.frameworks_for(ProjectType::Microservice),
            vec![
                Framework::Golly,
                Framework::Gin,
                Framework::Echo,
                Framework::GoKit
            ]
        );
    }

    #[test]
    fn metadata_matrix_versions_sorted_and_filtered() {
        let matrix = CompatibilityMatrix::from_metadata(&sample_metadata());
        let versions: Vec<&str> = matrix
            .versions_for()
            .iter()
            .map(|v| v.version.as_str())
            .collect();
        assert_eq!(versions, vec!["1.23.12", "1.21.7"]);
        assert_eq!(matrix.latest_version(), "1.23.12");
    }

    #[test]
    fn type_missing_from_metadata_falls_back_to_golly() {
        let matrix = CompatibilityMatrix::from_metadata(&sample_metadata());
        // api-server has no row in the sample metadata.
        assert_eq!(
            matrix.frameworks_for(ProjectType::ApiServer),
            vec![Framework::Golly]
        );
    }

    #[test]
    fn empty_metadata_still_yields_usable_versions() {
        let matrix = CompatibilityMatrix::from_metadata(&ProjectMetadata::default());
        assert!(!matrix.versions_for().is_empty());
        assert_eq!(matrix.latest_version(), "1.22.0");
    }
}

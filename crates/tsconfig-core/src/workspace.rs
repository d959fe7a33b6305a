//! Monorepo root detection

use std::fmt;
use std::path::Path;

use crate::manifest::PackageManifest;

/// Marker files that identify a monorepo root, in detection priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspaceMarker {
    Lerna,
    PnpmWorkspace,
}

impl WorkspaceMarker {
    /// Checked first to last; the first existing file wins.
    pub const ALL: [WorkspaceMarker; 2] =
        [WorkspaceMarker::Lerna, WorkspaceMarker::PnpmWorkspace];

    pub fn file_name(&self) -> &'static str {
        match self {
            WorkspaceMarker::Lerna => "lerna.json",
            WorkspaceMarker::PnpmWorkspace => "pnpm-workspace.yaml",
        }
    }
}

impl fmt::Display for WorkspaceMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.file_name())
    }
}

/// Whether the working directory is a monorepo root or a leaf package.
///
/// Computed once per run, immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub root: bool,
    /// Marker file that triggered root detection, when the manifest itself
    /// did not declare workspaces.
    pub marker: Option<WorkspaceMarker>,
}

impl Classification {
    pub fn leaf() -> Self {
        Classification {
            root: false,
            marker: None,
        }
    }
}

/// Classify a directory as monorepo root or leaf package.
///
/// A `workspaces` field in the manifest wins outright; otherwise the first
/// marker file found in `WorkspaceMarker::ALL` order decides.
pub fn classify(dir: &Path, manifest: &PackageManifest) -> Classification {
    if manifest.has_workspaces() {
        return Classification {
            root: true,
            marker: None,
        };
    }
    for marker in WorkspaceMarker::ALL {
        if dir.join(marker.file_name()).exists() {
            return Classification {
                root: true,
                marker: Some(marker),
            };
        }
    }
    Classification::leaf()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(body: &str) -> PackageManifest {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_workspaces_field_wins_over_markers() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("lerna.json"), "{}").unwrap();

        let classification = classify(dir.path(), &manifest(r#"{ "workspaces": [] }"#));
        assert!(classification.root);
        assert_eq!(classification.marker, None);
    }

    #[test]
    fn test_lerna_marker_checked_before_pnpm_workspace() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("lerna.json"), "{}").unwrap();
        std::fs::write(dir.path().join("pnpm-workspace.yaml"), "packages: []").unwrap();

        let classification = classify(dir.path(), &manifest("{}"));
        assert!(classification.root);
        assert_eq!(classification.marker, Some(WorkspaceMarker::Lerna));
    }

    #[test]
    fn test_pnpm_workspace_marker_detected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("pnpm-workspace.yaml"), "packages: []").unwrap();

        let classification = classify(dir.path(), &manifest("{}"));
        assert!(classification.root);
        assert_eq!(classification.marker, Some(WorkspaceMarker::PnpmWorkspace));
    }

    #[test]
    fn test_no_signal_classifies_as_leaf() {
        let dir = tempfile::tempdir().unwrap();
        let classification = classify(dir.path(), &manifest(r#"{ "name": "pkg" }"#));
        assert_eq!(classification, Classification::leaf());
    }
}

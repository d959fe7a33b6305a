//! package.json loading and the fields the scaffolder cares about

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ScaffoldError;

/// Manifest file expected in the working directory.
pub const MANIFEST_FILE: &str = "package.json";

/// The `workspaces` field, either the plain glob list or yarn's object form.
///
/// Only its presence matters for classification; the globs themselves are
/// never resolved.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WorkspacesField {
    Globs(Vec<String>),
    Config {
        #[serde(default)]
        packages: Vec<String>,
    },
}

/// Subset of package.json consumed by the scaffolder.
///
/// Unknown fields are ignored; a missing `devDependencies` map is treated as
/// empty rather than an error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    #[serde(default)]
    pub name: Option<String>,

    /// Present on monorepo roots managed through workspaces.
    #[serde(default)]
    pub workspaces: Option<WorkspacesField>,

    #[serde(default)]
    pub dev_dependencies: BTreeMap<String, String>,

    /// Corepack-style manager pin, e.g. `pnpm@9.1.0`.
    #[serde(default)]
    pub package_manager: Option<String>,
}

impl PackageManifest {
    /// Load `<dir>/package.json`. Loaded once per run; read-only afterwards.
    pub fn load(dir: &Path) -> Result<Self, ScaffoldError> {
        let path = dir.join(MANIFEST_FILE);
        if !path.exists() {
            return Err(ScaffoldError::ManifestNotFound(path));
        }
        let content = fs::read_to_string(&path)?;
        serde_json::from_str(&content)
            .map_err(|source| ScaffoldError::ManifestParse { path, source })
    }

    pub fn has_workspaces(&self) -> bool {
        self.workspaces.is_some()
    }

    pub fn has_dev_dependency(&self, name: &str) -> bool {
        self.dev_dependencies.contains_key(name)
    }

    /// Manager name from the `packageManager` pin, without the version suffix.
    pub fn package_manager_name(&self) -> Option<&str> {
        self.package_manager
            .as_deref()
            .and_then(|pin| pin.split('@').next())
            .filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_workspaces_glob_list() {
        let manifest: PackageManifest =
            serde_json::from_str(r#"{ "workspaces": ["packages/*"] }"#).unwrap();
        assert!(manifest.has_workspaces());
    }

    #[test]
    fn test_parses_workspaces_object_form() {
        let manifest: PackageManifest =
            serde_json::from_str(r#"{ "workspaces": { "packages": ["apps/*"] } }"#).unwrap();
        assert!(manifest.has_workspaces());
    }

    #[test]
    fn test_missing_dev_dependencies_is_empty() {
        let manifest: PackageManifest = serde_json::from_str(r#"{ "name": "pkg" }"#).unwrap();
        assert!(!manifest.has_dev_dependency("@akrc/tsconfig"));
    }

    #[test]
    fn test_dev_dependency_lookup() {
        let manifest: PackageManifest = serde_json::from_str(
            r#"{ "devDependencies": { "@akrc/tsconfig": "^1.0.0" } }"#,
        )
        .unwrap();
        assert!(manifest.has_dev_dependency("@akrc/tsconfig"));
        assert!(!manifest.has_dev_dependency("typescript"));
    }

    #[test]
    fn test_package_manager_pin_drops_version() {
        let manifest: PackageManifest =
            serde_json::from_str(r#"{ "packageManager": "pnpm@9.1.0" }"#).unwrap();
        assert_eq!(manifest.package_manager_name(), Some("pnpm"));
    }

    #[test]
    fn test_load_missing_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let err = PackageManifest::load(dir.path()).unwrap_err();
        assert!(matches!(err, ScaffoldError::ManifestNotFound(_)));
    }

    #[test]
    fn test_load_malformed_manifest() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MANIFEST_FILE), "{ not json").unwrap();
        let err = PackageManifest::load(dir.path()).unwrap_err();
        assert!(matches!(err, ScaffoldError::ManifestParse { .. }));
    }
}

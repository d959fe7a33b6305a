//! Package manager detection and the dev-dependency install

use std::fmt;
use std::path::Path;
use std::process::Stdio;

use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;

use crate::error::ScaffoldError;
use crate::manifest::PackageManifest;
use crate::preset::CONFIG_PACKAGE;

/// Supported package managers. Anything else is the unsupported case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Pnpm,
    Yarn,
}

impl PackageManager {
    /// Lockfile detection order. pnpm and yarn lockfiles are unambiguous;
    /// package-lock.json is checked last.
    const DETECTION_ORDER: [PackageManager; 3] = [
        PackageManager::Pnpm,
        PackageManager::Yarn,
        PackageManager::Npm,
    ];

    pub fn binary(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
        }
    }

    pub fn lock_file_name(&self) -> &'static str {
        match self {
            PackageManager::Npm => "package-lock.json",
            PackageManager::Pnpm => "pnpm-lock.yaml",
            PackageManager::Yarn => "yarn.lock",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "npm" => Some(PackageManager::Npm),
            "pnpm" => Some(PackageManager::Pnpm),
            "yarn" => Some(PackageManager::Yarn),
            _ => None,
        }
    }

    /// Detect the active manager: the manifest's `packageManager` pin first,
    /// then lockfile presence. A pin naming an unsupported manager is final;
    /// lockfiles are not consulted behind the project's explicit choice.
    pub fn detect(dir: &Path, manifest: &PackageManifest) -> Option<Self> {
        if let Some(name) = manifest.package_manager_name() {
            return Self::from_name(name);
        }
        Self::DETECTION_ORDER
            .into_iter()
            .find(|manager| dir.join(manager.lock_file_name()).exists())
    }

    /// Arguments for installing the preset package as a dev dependency.
    /// pnpm at a workspace root needs `-w` to target the root manifest.
    pub fn install_args(&self, workspace_root: bool) -> Vec<&'static str> {
        match self {
            PackageManager::Npm => vec!["install", "--save-dev", CONFIG_PACKAGE],
            PackageManager::Pnpm => {
                let mut args = vec!["add", "-D", CONFIG_PACKAGE];
                if workspace_root {
                    args.push("-w");
                }
                args
            }
            PackageManager::Yarn => vec!["add", "-D", CONFIG_PACKAGE],
        }
    }

    /// Run the install in `dir`, streaming the manager's output.
    ///
    /// Blocks until the child exits; a non-zero status is fatal and is not
    /// retried.
    pub async fn install(&self, dir: &Path, workspace_root: bool) -> Result<(), ScaffoldError> {
        let args = self.install_args(workspace_root);
        let command = format!("{} {}", self.binary(), args.join(" "));
        println!();
        println!("{} {}", "Running:".dimmed(), command.yellow());
        println!();

        let mut child = Command::new(self.binary())
            .args(&args)
            .current_dir(dir)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        let stdout = child.stdout.take().expect("Failed to capture stdout");
        let stderr = child.stderr.take().expect("Failed to capture stderr");

        let mut stdout_reader = BufReader::new(stdout).lines();
        let mut stderr_reader = BufReader::new(stderr).lines();

        loop {
            tokio::select! {
                line = stdout_reader.next_line() => {
                    match line {
                        Ok(Some(line)) => println!("  {}", line),
                        Ok(None) => break,
                        Err(e) => {
                            eprintln!("{} {}", "Error reading stdout:".red(), e);
                            break;
                        }
                    }
                }
                line = stderr_reader.next_line() => {
                    match line {
                        Ok(Some(line)) => eprintln!("  {}", line.yellow()),
                        Ok(None) => {}
                        Err(e) => {
                            eprintln!("{} {}", "Error reading stderr:".red(), e);
                        }
                    }
                }
            }
        }

        let status = child.wait().await?;
        println!();
        if status.success() {
            Ok(())
        } else {
            Err(ScaffoldError::InstallFailed { command, status })
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.binary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(body: &str) -> PackageManifest {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_detects_from_each_lockfile() {
        for manager in PackageManager::DETECTION_ORDER {
            let dir = tempfile::tempdir().unwrap();
            std::fs::write(dir.path().join(manager.lock_file_name()), "").unwrap();
            assert_eq!(PackageManager::detect(dir.path(), &manifest("{}")), Some(manager));
        }
    }

    #[test]
    fn test_package_manager_pin_wins_over_lockfile() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("package-lock.json"), "").unwrap();

        let pinned = manifest(r#"{ "packageManager": "yarn@4.0.0" }"#);
        assert_eq!(
            PackageManager::detect(dir.path(), &pinned),
            Some(PackageManager::Yarn)
        );
    }

    #[test]
    fn test_unsupported_pin_is_not_overridden_by_lockfile() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("pnpm-lock.yaml"), "").unwrap();

        let pinned = manifest(r#"{ "packageManager": "bun@1.1.0" }"#);
        assert_eq!(PackageManager::detect(dir.path(), &pinned), None);
    }

    #[test]
    fn test_no_signal_detects_nothing() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(PackageManager::detect(dir.path(), &manifest("{}")), None);
    }

    #[test]
    fn test_pnpm_workspace_root_appends_root_flag() {
        assert_eq!(
            PackageManager::Pnpm.install_args(true),
            vec!["add", "-D", "@akrc/tsconfig", "-w"]
        );
        assert_eq!(
            PackageManager::Pnpm.install_args(false),
            vec!["add", "-D", "@akrc/tsconfig"]
        );
    }

    #[test]
    fn test_npm_and_yarn_ignore_workspace_root() {
        assert_eq!(
            PackageManager::Npm.install_args(true),
            vec!["install", "--save-dev", "@akrc/tsconfig"]
        );
        assert_eq!(
            PackageManager::Yarn.install_args(true),
            vec!["add", "-D", "@akrc/tsconfig"]
        );
    }
}

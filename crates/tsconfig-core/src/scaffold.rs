//! The scaffolding flow, step by step

use std::path::PathBuf;

use crate::error::ScaffoldError;
use crate::manifest::PackageManifest;
use crate::package_manager::PackageManager;
use crate::preset::{self, ProjectType, CONFIG_PACKAGE};
use crate::prompt::UserPrompt;
use crate::workspace;

/// Explicit process context; nothing in the library reads the environment.
#[derive(Debug, Clone)]
pub struct ScaffoldContext {
    pub cwd: PathBuf,
    /// Accept defaults instead of prompting.
    pub yes: bool,
}

impl ScaffoldContext {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        ScaffoldContext {
            cwd: cwd.into(),
            yes: false,
        }
    }
}

/// How a run ended short of an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldOutcome {
    /// Config written at `path`, extending the chosen preset.
    Written {
        path: PathBuf,
        project_type: ProjectType,
    },
    /// User declined to overwrite an existing config. Clean exit, no write.
    Aborted,
}

/// Run the whole flow: manifest, classification, install, prompts, write.
///
/// Steps are strictly sequential. Exactly one config file is produced on the
/// success path, at a location fixed before anything is written; the only
/// non-error early exit is a declined overwrite.
pub async fn run(
    ctx: &ScaffoldContext,
    prompt: &mut impl UserPrompt,
) -> Result<ScaffoldOutcome, ScaffoldError> {
    let manifest = PackageManifest::load(&ctx.cwd)?;

    let classification = workspace::classify(&ctx.cwd, &manifest);
    if let Some(marker) = classification.marker {
        prompt.info(&format!("Detected monorepo root by {}", marker))?;
    }

    if !manifest.has_dev_dependency(CONFIG_PACKAGE) {
        let manager = PackageManager::detect(&ctx.cwd, &manifest)
            .ok_or(ScaffoldError::UnsupportedPackageManager)?;
        prompt.info(&format!("Detected package manager: {}", manager))?;
        manager.install(&ctx.cwd, classification.root).await?;
    }

    let file_name = preset::config_file_name(classification.root);
    let target = ctx.cwd.join(file_name);

    if target.exists() {
        let overwrite = ctx.yes
            || prompt.confirm(
                &format!("{} already exists, do you want to overwrite it?", file_name),
                false,
            )?;
        if !overwrite {
            return Ok(ScaffoldOutcome::Aborted);
        }
    } else {
        prompt.info(&format!("Creating {}...", file_name))?;
    }

    let project_type = if classification.root || ctx.yes {
        ProjectType::Node
    } else {
        prompt.select_project_type(ProjectType::Node)?
    };

    preset::write_config(&target, project_type)?;
    prompt.success(&format!("{} created.", file_name))?;

    Ok(ScaffoldOutcome::Written {
        path: target,
        project_type,
    })
}

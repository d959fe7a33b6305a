//! Shared preset coordinates and the rendered config body

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;

/// npm package holding the shared tsconfig presets.
pub const CONFIG_PACKAGE: &str = "@akrc/tsconfig";

/// Config written at a monorepo root, extended by member packages.
pub const ROOT_CONFIG: &str = "tsconfig.base.json";

/// Config written in a standalone or member package.
pub const LEAF_CONFIG: &str = "tsconfig.json";

/// Preset flavors shipped by the config package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectType {
    Node,
    React,
    Vue,
    Web,
}

impl ProjectType {
    /// Prompt order; `Node` is the default everywhere.
    pub const ALL: [ProjectType; 4] = [
        ProjectType::Node,
        ProjectType::React,
        ProjectType::Vue,
        ProjectType::Web,
    ];

    pub fn preset_name(&self) -> &'static str {
        match self {
            ProjectType::Node => "node",
            ProjectType::React => "react",
            ProjectType::Vue => "vue",
            ProjectType::Web => "web",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.preset_name())
    }
}

/// Target file name is a pure function of the classification.
pub fn config_file_name(root: bool) -> &'static str {
    if root {
        ROOT_CONFIG
    } else {
        LEAF_CONFIG
    }
}

#[derive(Serialize)]
struct ConfigBody {
    extends: String,
}

/// Render the config body: an `extends` onto the chosen preset, 2-space indented.
pub fn render_config(project_type: ProjectType) -> String {
    let body = ConfigBody {
        extends: format!("{}/{}.json", CONFIG_PACKAGE, project_type.preset_name()),
    };
    serde_json::to_string_pretty(&body).expect("config body serializes")
}

/// Write the rendered config, replacing any existing file in a single rename.
pub fn write_config(path: &Path, project_type: ProjectType) -> io::Result<()> {
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, render_config(project_type))?;
    fs::rename(&tmp, path)
}

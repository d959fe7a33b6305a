//! Charm-style CLI prompts using cliclack

use std::io;

use crate::preset::ProjectType;
use crate::prompt::UserPrompt;

/// Terminal prompter used by the CLI binary.
#[derive(Debug, Default)]
pub struct CliPrompt;

impl UserPrompt for CliPrompt {
    fn info(&mut self, message: &str) -> io::Result<()> {
        cliclack::log::info(message)
    }

    fn success(&mut self, message: &str) -> io::Result<()> {
        cliclack::log::success(message)
    }

    fn confirm(&mut self, message: &str, initial: bool) -> io::Result<bool> {
        cliclack::confirm(message).initial_value(initial).interact()
    }

    fn select_project_type(&mut self, initial: ProjectType) -> io::Result<ProjectType> {
        let mut select = cliclack::select("Please select project type").initial_value(initial);
        for project_type in ProjectType::ALL {
            select = select.item(project_type, project_type.preset_name(), "");
        }
        select.interact()
    }
}

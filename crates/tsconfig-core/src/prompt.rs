//! User interaction seam

use std::io;

use crate::preset::ProjectType;

/// Interactive capabilities the scaffolding flow needs from its caller.
///
/// The CLI binary supplies a cliclack-backed implementation; tests supply
/// canned answers so the flow runs without a terminal.
pub trait UserPrompt {
    /// Informational notice.
    fn info(&mut self, message: &str) -> io::Result<()>;

    /// Success notice.
    fn success(&mut self, message: &str) -> io::Result<()>;

    /// Yes/no question; `initial` is the preselected answer.
    fn confirm(&mut self, message: &str, initial: bool) -> io::Result<bool>;

    /// Single select over the preset flavors; `initial` is preselected.
    fn select_project_type(&mut self, initial: ProjectType) -> io::Result<ProjectType>;
}

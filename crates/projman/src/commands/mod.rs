//! CLI command implementations

pub mod create;
pub mod delete;
pub mod describe;
pub mod list;
pub mod types;

use anyhow::Result;
use projman_core::Settings;
use projman_projects::ProjectManager;

/// Build a project manager from the environment.
///
/// Templates are loaded fresh per invocation; the manifest is re-read by
/// each operation that touches it.
fn manager_from_env() -> Result<ProjectManager> {
    let settings = Settings::from_env()?;
    Ok(ProjectManager::from_settings(settings)?)
}

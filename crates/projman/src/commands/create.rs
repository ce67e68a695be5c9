//! `projman create` command handler

use anyhow::Result;

use crate::cli::CreateArgs;
use crate::output;

/// Create a new project from a template
pub fn run(args: CreateArgs) -> Result<()> {
    let manager = super::manager_from_env()?;

    let target = manager.create(&args.name, &args.project_type, args.path.as_deref())?;

    output::success(&format!("Project '{}' created", args.name));
    output::kv("Type", &args.project_type);
    output::kv("Location", target.as_str());

    Ok(())
}

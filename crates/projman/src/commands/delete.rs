//! `projman delete` command handler

use anyhow::Result;

use crate::cli::DeleteArgs;
use crate::output;

/// Delete an existing project.
///
/// Without `--type`, every project with the given name is removed across
/// all type buckets. Directory removal is best-effort; a path already gone
/// from disk is not an error.
pub fn run(args: DeleteArgs) -> Result<()> {
    let manager = super::manager_from_env()?;

    let removed = manager.delete(&args.name, args.project_type.as_deref())?;

    if removed == 0 {
        output::warning(&format!("No projects named '{}' were found", args.name));
    } else {
        output::success(&format!(
            "Deleted {} project(s) named '{}'",
            removed, args.name
        ));
    }

    Ok(())
}

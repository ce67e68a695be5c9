//! `projman describe` command handler

use anyhow::Result;

use crate::cli::DescribeArgs;

/// Pretty print the structure of a project template
pub fn run(args: DescribeArgs) -> Result<()> {
    let manager = super::manager_from_env()?;

    for line in manager.describe(&args.project_type)? {
        println!("{line}");
    }

    Ok(())
}

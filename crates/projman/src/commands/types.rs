//! `projman types` command handler

use anyhow::Result;

use crate::cli::TypesArgs;
use crate::output;

/// List the loaded template types
pub fn run(args: TypesArgs) -> Result<()> {
    let manager = super::manager_from_env()?;

    let types = manager.types();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&types)?);
    } else if types.is_empty() {
        output::info("No project templates are loaded");
    } else {
        println!("{}", types.join("\n"));
    }

    Ok(())
}

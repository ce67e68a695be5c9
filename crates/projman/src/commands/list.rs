//! `projman list` command handler

use anyhow::Result;

use crate::cli::ListArgs;

/// List created projects, optionally restricted to a set of types.
///
/// Names are printed newline-joined; an empty result prints an empty line.
pub fn run(args: ListArgs) -> Result<()> {
    let manager = super::manager_from_env()?;

    let names = manager.list(args.types.as_deref())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&names)?);
    } else {
        println!("{}", names.join("\n"));
    }

    Ok(())
}

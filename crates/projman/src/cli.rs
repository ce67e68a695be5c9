//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};

/// projman - project skeletons from declarative templates
#[derive(Parser, Debug)]
#[command(name = "projman")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new project from a template
    Create(CreateArgs),

    /// List the projects which have been created
    List(ListArgs),

    /// Delete an existing project
    Delete(DeleteArgs),

    /// List the types of projects which may be created
    Types(TypesArgs),

    /// Pretty print the structure of a project template
    Describe(DescribeArgs),
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// New project to create
    pub name: String,

    /// The template type to create the project from
    #[arg(short = 't', long = "type")]
    pub project_type: String,

    /// Base path in which to create the project. If not supplied, the
    /// configured default project path is used
    #[arg(short, long)]
    pub path: Option<Utf8PathBuf>,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Restrict the list to a comma-delimited set of types
    #[arg(short = 't', long = "type")]
    pub types: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Project to delete
    pub name: String,

    /// Restrict the deletion to projects of this type
    #[arg(short = 't', long = "type")]
    pub project_type: Option<String>,
}

#[derive(Args, Debug)]
pub struct TypesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct DescribeArgs {
    /// The template type to describe
    #[arg(short = 't', long = "type")]
    pub project_type: String,
}

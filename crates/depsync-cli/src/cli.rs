//! CLI argument definitions for depsync.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "depsync",
    version,
    about = "Post-install dependency sync for companion packages",
    long_about = "depsync keeps a consuming project's package.json in sync with the \
                  dependencies declared by a companion package, preferring the greater \
                  version specifier for every shared dependency."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Merge a companion package's dependencies into the project and reinstall
    PostInstall {
        /// Path to the companion package's package.json
        #[arg(short, long)]
        source: PathBuf,

        /// Project directory holding the target package.json (defaults to the current directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Write the merged manifest but skip the package-manager runs
        #[arg(long)]
        skip_install: bool,

        /// Also install this package globally after a successful merge
        #[arg(long, value_name = "PACKAGE")]
        install_cli: Option<String>,
    },

    /// Overwrite a manifest's dependencies with a JSON map given on the command line
    SetDeps {
        /// Path to the package.json to rewrite
        manifest: PathBuf,

        /// Dependency map as JSON, e.g. '{"left-pad": "^1.3.0"}'
        deps: String,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}

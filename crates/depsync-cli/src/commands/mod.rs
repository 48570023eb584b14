//! Command dispatch and handler modules.

mod post_install;
mod set_deps;

use miette::Result;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::PostInstall {
            source,
            dir,
            skip_install,
            install_cli,
        } => post_install::exec(
            &source,
            dir.as_deref(),
            skip_install,
            install_cli.as_deref(),
            cli.verbose,
        ),
        Command::SetDeps { manifest, deps } => set_deps::exec(&manifest, &deps),
    }
}

//! CLI subcommand definitions

use clap::Subcommand;

/// Main CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub(crate) enum Commands {
    /// Draw a random creature type and add it to the session history (default)
    Generate,
    /// Interactive loop: answer yes to draw, no to clear history and quit
    Play,
    /// Show the session history, most recent first
    History,
    /// Clear the session history
    Reset,
    /// List the creature types in the catalog
    Catalog,
}

impl Commands {
    /// Whether the command draws from or lists the catalog
    pub(crate) fn needs_catalog(self) -> bool {
        matches!(
            self,
            Commands::Generate | Commands::Play | Commands::Catalog
        )
    }
}

/// Resolve the command to run; no subcommand means `generate`
pub(crate) fn parse_command(cmd: Option<Commands>) -> Commands {
    cmd.unwrap_or(Commands::Generate)
}

//! Shared CLI definitions for waic.
//!
//! Used by the main application and by the build script (manpage).

use clap::{Parser, ValueEnum};

/// Screen shown when the terminal UI starts
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum Screen {
    /// Quick statistics for the match-record sheet
    #[default]
    Home,
    /// Player roster search
    Players,
}

/// Player search method
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum SearchMethodArg {
    /// Free-text search across every column
    Keyword,
    /// Per-column multi-select filters
    Facets,
}

/// Command-line arguments for waic
#[derive(Clone, Parser, Debug, Default)]
#[command(
    name = "waic",
    version,
    about = "Trading card game match records and player lookup",
    long_about = include_str!("../long_about.txt")
)]
pub struct Args {
    /// Screen to open on start (home, players)
    #[arg(long = "screen", value_enum)]
    pub screen: Option<Screen>,

    /// Spreadsheet key of the player sheet for this session (overrides config)
    #[arg(long = "spreadsheet-id", value_name = "KEY")]
    pub spreadsheet_id: Option<String>,

    /// Worksheet (tab) name of the player sheet for this session (overrides config)
    #[arg(long = "worksheet", value_name = "NAME")]
    pub worksheet: Option<String>,

    /// Search method to start the player screen with
    #[arg(long = "search-method", value_enum)]
    pub search_method: Option<SearchMethodArg>,

    /// Path to a service account credential file (overrides config)
    #[arg(long = "credentials", value_name = "PATH")]
    pub credentials: Option<std::path::PathBuf>,

    /// Directory where CSV exports are written (overrides config)
    #[arg(long = "export-dir", value_name = "DIR")]
    pub export_dir: Option<std::path::PathBuf>,

    /// Print the match-record quick statistics and exit
    #[arg(long = "summary", action)]
    pub summary: bool,

    /// Enable debug mode to show operational information
    #[arg(long = "debug", action)]
    pub debug: bool,

    /// Clear all cache data and exit
    #[arg(long = "clear-cache", action)]
    pub clear_cache: bool,

    /// Generate default configuration file at ~/.config/waic/config.toml
    #[arg(long = "generate-config", action)]
    pub generate_config: bool,

    /// Force overwrite existing config file when using --generate-config
    #[arg(long = "force", requires = "generate_config", action)]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_session_override() {
        let args = Args::parse_from([
            "waic",
            "--screen",
            "players",
            "--spreadsheet-id",
            "1AbC",
            "--worksheet",
            "シート2",
        ]);
        assert_eq!(args.screen, Some(Screen::Players));
        assert_eq!(args.spreadsheet_id.as_deref(), Some("1AbC"));
        assert_eq!(args.worksheet.as_deref(), Some("シート2"));
        assert!(!args.summary);
    }

    #[test]
    fn test_force_requires_generate_config() {
        assert!(Args::try_parse_from(["waic", "--force"]).is_err());
        assert!(Args::try_parse_from(["waic", "--generate-config", "--force"]).is_ok());
    }
}

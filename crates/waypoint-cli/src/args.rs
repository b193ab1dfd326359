//! Command-line interface definitions using clap.
//!
//! Argument structs here carry only clap concerns and convert into the core
//! parameter types, so validation stays in `waypoint-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use waypoint_core::{catalog::DEFAULT_MONTHS, GeneratePlan, Id, ListHistory, TimeUnit};

/// Generate week-by-week career roadmaps with a hosted AI model
///
/// Waypoint asks a generative model for a structured plan towards a target
/// role, keeps the last few plans in a local history, and can run as an MCP
/// server for AI assistants.
#[derive(Parser)]
#[command(version, about, name = "waypoint")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/waypoint/waypoint.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// API key for the generation service
    #[arg(long, global = true, env = "WAYPOINT_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Candidate model to try, in order. Repeat to give several; replaces
    /// the default list
    #[arg(long = "model", global = true, value_name = "MODEL")]
    pub models: Vec<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands. Without one, recent plans are listed.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a new career plan
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// List saved plans
    #[command(alias = "h")]
    History(HistoryArgs),
    /// Show a saved plan
    #[command(alias = "s")]
    Show(ShowArgs),
    /// Check that a model answers with the configured credentials
    TestConnection,
    /// List the suggested timeframes
    Timeframes,
    /// List popular careers, optionally for one category
    Suggest(SuggestArgs),
    /// Start the MCP server
    Serve,
}

/// Generate a new career plan
#[derive(ClapArgs)]
pub struct GenerateArgs {
    /// Career role to plan for, e.g. "Data Scientist"
    pub role: String,
    /// Timeframe in months (1-24)
    #[arg(short, long, default_value_t = DEFAULT_MONTHS)]
    pub months: u32,
    /// One plan item per month instead of per week
    #[arg(long)]
    pub monthly: bool,
}

impl From<GenerateArgs> for GeneratePlan {
    fn from(val: GenerateArgs) -> Self {
        GeneratePlan {
            role: val.role,
            months: val.months,
            unit: if val.monthly {
                TimeUnit::Month
            } else {
                TimeUnit::Week
            },
        }
    }
}

/// List saved plans
#[derive(ClapArgs)]
pub struct HistoryArgs {
    /// Show every stored plan instead of the most recent ones
    #[arg(short, long)]
    pub all: bool,
}

impl From<HistoryArgs> for ListHistory {
    fn from(val: HistoryArgs) -> Self {
        ListHistory { all: val.all }
    }
}

/// Show a saved plan
#[derive(ClapArgs)]
pub struct ShowArgs {
    /// ID of the plan, as listed by `history`
    pub id: i64,
}

impl From<ShowArgs> for Id {
    fn from(val: ShowArgs) -> Self {
        Id { id: val.id }
    }
}

/// List popular careers
#[derive(ClapArgs)]
pub struct SuggestArgs {
    /// Category name, e.g. "Technology"
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_generate_args_conversion() {
        let args = Args::try_parse_from([
            "waypoint",
            "generate",
            "Data Scientist",
            "--months",
            "3",
            "--monthly",
            "--model",
            "gemini-pro",
            "--model",
            "gemini-1.5-pro",
        ])
        .unwrap();

        assert_eq!(args.models, vec!["gemini-pro", "gemini-1.5-pro"]);
        let Some(Commands::Generate(generate)) = args.command else {
            panic!("expected generate command");
        };
        let params = GeneratePlan::from(generate);
        assert_eq!(params.role, "Data Scientist");
        assert_eq!(params.months, 3);
        assert_eq!(params.unit, TimeUnit::Month);
    }

    #[test]
    fn test_generate_defaults_to_weekly_six_months() {
        let args = Args::try_parse_from(["waypoint", "g", "Nurse"]).unwrap();
        let Some(Commands::Generate(generate)) = args.command else {
            panic!("expected generate command");
        };
        let params = GeneratePlan::from(generate);
        assert_eq!(params.months, DEFAULT_MONTHS);
        assert_eq!(params.unit, TimeUnit::Week);
    }

    #[test]
    fn test_no_subcommand() {
        let args = Args::try_parse_from(["waypoint", "--no-color"]).unwrap();
        assert!(args.command.is_none());
        assert!(args.no_color);
    }
}

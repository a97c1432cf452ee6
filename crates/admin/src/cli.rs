//! CLI command definitions.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use humanbench_core::storage::KeyStrategy;

/// Seeding and maintenance tooling for the humanbench document store.
#[derive(Debug, Parser)]
#[command(name = "humanbench-admin")]
#[command(version, about = "Seeding and maintenance tooling for humanbench", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: Global,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Silence the command output
    #[clap(long, global = true)]
    pub silent: bool,

    /// Enable verbose output
    #[clap(long, global = true)]
    pub verbose: bool,

    /// Snapshot file of the local backend
    #[clap(long, global = true, value_name = "PATH", env = "HUMANBENCH_DATA_FILE")]
    pub data_file: Option<PathBuf>,
}

impl Global {
    pub fn is_silent(&self) -> bool {
        self.silent
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Default log filter when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "humanbench_admin=debug,humanbench_core=debug"
        } else if self.silent {
            "humanbench_admin=warn"
        } else {
            "humanbench_admin=info"
        }
    }
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Toggle or inspect maintenance mode
    Maintenance(MaintenanceCommand),
    /// Write seed data
    Seed(SeedCommand),
    /// Inspect and prerender page metadata
    Seo(SeoCommand),
}

/// Maintenance-mode commands.
#[derive(Debug, Parser)]
#[command(long_about = "Toggle or inspect the maintenance-mode flag.

While the flag is on, the app shows the maintenance page on every app route.
The landing page stays reachable.

Examples:
  humanbench-admin maintenance enable \"Scheduled maintenance - back in 2 hours\"
  humanbench-admin maintenance disable
  humanbench-admin maintenance status")]
pub struct MaintenanceCommand {
    #[command(subcommand)]
    pub action: Option<MaintenanceAction>,
}

/// Available maintenance actions.
#[derive(Debug, Subcommand)]
pub enum MaintenanceAction {
    /// Enable maintenance mode
    Enable {
        /// Message shown to users
        message: Option<String>,
    },
    /// Disable maintenance mode
    Disable,
    /// Show the current flag
    Status,
}

/// Seed commands.
#[derive(Debug, Parser)]
pub struct SeedCommand {
    #[command(subcommand)]
    pub action: SeedAction,
}

/// Available seed actions.
#[derive(Debug, Subcommand)]
pub enum SeedAction {
    /// Seed the decision-making trials
    #[command(long_about = "Seed the decision-making trials.

Writes 200 trials across 10 categories. Each run adds new documents unless
--idempotent is given, in which case documents are keyed by their content
and a rerun overwrites the previous one.")]
    Trials(BulkSeedArgs),
    /// Seed the personality scale, questions and aggregates
    Personality(BulkSeedArgs),
    /// Seed the rank tiers
    Ranks,
    /// Seed the web settings
    WebSettings,
    /// Count the documents of every seeded collection
    Status,
}

#[derive(Debug, Clone, clap::Args)]
pub struct BulkSeedArgs {
    /// Key documents by content so reruns overwrite instead of duplicating
    #[arg(long)]
    pub idempotent: bool,
}

impl BulkSeedArgs {
    pub fn key_strategy(&self) -> KeyStrategy {
        if self.idempotent {
            KeyStrategy::ContentHash
        } else {
            KeyStrategy::Generated
        }
    }
}

/// SEO commands.
#[derive(Debug, Parser)]
pub struct SeoCommand {
    #[command(subcommand)]
    pub action: SeoAction,
}

/// Available SEO actions.
#[derive(Debug, Subcommand)]
pub enum SeoAction {
    /// List the configured page keys
    Pages,
    /// Print the head HTML of a page
    Render {
        /// Page key, e.g. reactionTime
        page: String,
    },
    /// Print the metadata table as JSON
    Config,
}

/// Outcome of parsing the command line.
#[derive(Debug)]
pub enum Parsed {
    Run(Cli),
    /// A `maintenance` invocation clap rejected; print its usage and exit 0.
    MaintenanceUsage,
}

/// Parses `args`, turning any malformed `maintenance` invocation into
/// [`Parsed::MaintenanceUsage`]. Other errors, help and version requests are
/// returned for clap to report.
pub fn parse_from<I, T>(args: I) -> Result<Parsed, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    match Cli::try_parse_from(&args) {
        Ok(cli) => Ok(Parsed::Run(cli)),
        Err(err)
            if !matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
                && targets_maintenance(&args) =>
        {
            Ok(Parsed::MaintenanceUsage)
        }
        Err(err) => Err(err),
    }
}

/// Whether the first positional argument after the binary name is `maintenance`.
fn targets_maintenance(args: &[OsString]) -> bool {
    let mut rest = args.iter().skip(1);
    while let Some(arg) = rest.next() {
        match arg.to_str() {
            Some("--data-file") => {
                rest.next();
            }
            Some(flag) if flag.starts_with('-') => {}
            Some(command) => return command == "maintenance",
            None => return false,
        }
    }
    false
}

/// Prints the long help of the `maintenance` subcommand.
pub fn print_maintenance_help() -> std::io::Result<()> {
    let mut command = Cli::command();
    match command.find_subcommand_mut("maintenance") {
        Some(subcommand) => subcommand.print_long_help(),
        None => Ok(()),
    }
}

/// How a failed command exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Log the error and exit 0.
    Report,
    /// Log the error and exit 1.
    Fail,
}

impl FailurePolicy {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            FailurePolicy::Report => ExitCode::SUCCESS,
            FailurePolicy::Fail => ExitCode::FAILURE,
        }
    }
}

impl Commands {
    /// Maintenance, personality and web-settings commands never fail the
    /// process; trials, ranks and the rest do.
    pub fn failure_policy(&self) -> FailurePolicy {
        match self {
            Commands::Maintenance(_) => FailurePolicy::Report,
            Commands::Seed(seed) => match seed.action {
                SeedAction::Personality(_) | SeedAction::WebSettings => FailurePolicy::Report,
                SeedAction::Trials(_) | SeedAction::Ranks | SeedAction::Status => {
                    FailurePolicy::Fail
                }
            },
            Commands::Seo(_) => FailurePolicy::Fail,
        }
    }
}

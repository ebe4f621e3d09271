use std::path::{Path, PathBuf};

mod config;
mod list;
mod show;
mod standards;
mod terminal;

use clap::ArgAction;
use list::List;
use pdfa_flavour::{Config, Flavour, Standard};
use show::Show;
use standards::Standards;

/// Parse a flavour from a short id, symbol or `none`.
fn parse_flavour(s: &str) -> Result<Flavour, String> {
    s.parse().map_err(|e| format!("{e}"))
}

/// Parse a PDF/A part number (`2`), name (`PDF/A-2`) or id.
fn parse_standard(s: &str) -> Result<Standard, String> {
    if let Ok(part) = s.trim().parse::<u32>() {
        return Standard::from_part_number(part).ok_or_else(|| format!("No PDF/A part {part}"));
    }
    s.parse().map_err(|e| format!("{e}"))
}

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global=true)]
    verbose: u8,

    /// Path to the configuration file
    #[arg(short, long, default_value = ".flavour.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        self.command
            .unwrap_or_else(|| Command::List(List::default()))
            .run(&self.config)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// List selectable flavours (default)
    List(List),

    /// Show detailed information about a flavour
    Show(Show),

    /// List standard parts and series
    Standards(Standards),

    /// Show or modify configuration settings
    Config(config::Command),
}

impl Command {
    fn run(self, config_path: &Path) -> anyhow::Result<()> {
        match self {
            Self::List(command) => command.run(config_path)?,
            Self::Show(command) => command.run(config_path)?,
            Self::Standards(command) => command.run()?,
            Self::Config(command) => command.run(config_path)?,
        }
        Ok(())
    }
}

/// Output format shared by the listing commands.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

/// Loads the configuration, falling back to defaults when the file is absent.
fn load_config(path: &Path) -> anyhow::Result<Config> {
    Config::load_or_default(path)
        .map_err(|e| anyhow::anyhow!("{e} ({})", path.display()))
}

/// A flavour together with its lookup keys, for machine-readable output.
#[derive(Debug, serde::Serialize)]
struct FlavourEntry {
    id: &'static str,
    symbol: &'static str,
    display: String,
    #[serde(flatten)]
    flavour: Flavour,
}

impl From<Flavour> for FlavourEntry {
    fn from(flavour: Flavour) -> Self {
        Self {
            id: flavour.short_id(),
            symbol: flavour.symbol(),
            display: flavour.to_string(),
            flavour,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn parse_standard_accepts_part_numbers() {
        assert_eq!(parse_standard("2"), Ok(Standard::Iso19005_2));
        assert_eq!(parse_standard("PDF/A-3"), Ok(Standard::Iso19005_3));
        assert!(parse_standard("9").is_err());
    }

    #[test]
    fn parse_flavour_reports_unknown_input() {
        let error = parse_flavour("9z").unwrap_err();
        assert!(error.starts_with("Unknown flavour '9z'"));
    }

    #[test]
    fn flavour_entry_flattens_structured_form() {
        let json = serde_json::to_value(FlavourEntry::from(Flavour::Pdfa2A)).unwrap();
        assert_eq!(json["id"], "2a");
        assert_eq!(json["symbol"], "PDFA_2_A");
        assert_eq!(json["standard"]["partNumber"], 2);
        assert_eq!(json["level"]["code"], "a");
    }

    #[test]
    fn cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["flavour", "-vv", "show", "3u"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Some(Command::Show(_))));

        let cli = Cli::try_parse_from(["flavour", "list", "--standard", "2", "--output", "json"]);
        assert!(cli.is_ok());

        assert!(Cli::try_parse_from(["flavour", "show", "7x"]).is_err());
    }

    #[test]
    fn cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

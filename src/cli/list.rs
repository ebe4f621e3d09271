use std::path::Path;

use clap::Parser;
use pdfa_flavour::{Flavour, Standard};
use tracing::instrument;

use super::{FlavourEntry, OutputFormat, terminal::Colorize};

/// Command arguments for `flavour list`.
#[derive(Debug, Default, Parser)]
#[command(about = "List the flavours offered for selection")]
pub struct List {
    /// Only list flavours of this PDF/A part (e.g. `2` or `PDF/A-2`)
    #[arg(long, value_parser = super::parse_standard)]
    standard: Option<Standard>,

    /// Include flavours excluded by the configuration
    #[arg(long)]
    all: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    output: OutputFormat,
}

impl List {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, config_path: &Path) -> anyhow::Result<()> {
        let config = super::load_config(config_path)?;

        let flavours: Vec<Flavour> = Flavour::ALL
            .into_iter()
            .filter(|&flavour| {
                if self.all {
                    !flavour.is_none()
                } else {
                    config.is_flavour_allowed(flavour)
                }
            })
            .filter(|flavour| self.standard.is_none_or(|s| flavour.standard() == s))
            .collect();
        tracing::debug!(count = flavours.len(), "selected flavours");

        match self.output {
            OutputFormat::Pretty => {
                Self::output_pretty(&flavours, config.default_flavour());
            }
            OutputFormat::Json => {
                let entries: Vec<FlavourEntry> =
                    flavours.into_iter().map(FlavourEntry::from).collect();
                println!("{}", serde_json::to_string_pretty(&entries)?);
            }
        }
        Ok(())
    }

    fn output_pretty(flavours: &[Flavour], default: Flavour) {
        if flavours.is_empty() {
            println!("{}", "No flavours match".dim());
            return;
        }

        let narrow = super::terminal::is_narrow();
        for &flavour in flavours {
            let marker = if flavour == default { "*" } else { " " };
            let id = format!("{:<3}", flavour.short_id());
            if narrow {
                println!("{marker} {} {}", id.info(), flavour.symbol());
            } else {
                println!(
                    "{marker} {} {:<9} {} {}",
                    id.info(),
                    flavour.symbol(),
                    flavour.standard().name(),
                    flavour.level().to_string().dim()
                );
            }
        }
        println!();
        println!("{}", "* default flavour".dim());
    }
}

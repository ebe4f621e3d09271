use clap::Parser;
use pdfa_flavour::{Flavour, Standard, StandardSeries};
use tracing::instrument;

use super::{OutputFormat, terminal::Colorize};

#[derive(Debug, Parser)]
#[command(about = "List the standard parts and series")]
pub struct Standards {
    /// Include the `none` sentinels
    #[arg(long)]
    sentinels: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    output: OutputFormat,
}

#[derive(serde::Serialize)]
struct Listing {
    series: Vec<StandardSeries>,
    standards: Vec<Standard>,
}

impl Standards {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self) -> anyhow::Result<()> {
        let keep = |is_none: bool| self.sentinels || !is_none;
        let listing = Listing {
            series: StandardSeries::ALL
                .into_iter()
                .filter(|s| keep(s.is_none()))
                .collect(),
            standards: Standard::ALL
                .into_iter()
                .filter(|s| keep(s.is_none()))
                .collect(),
        };

        match self.output {
            OutputFormat::Pretty => Self::output_pretty(&listing),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&listing)?),
        }
        Ok(())
    }

    fn output_pretty(listing: &Listing) {
        for &series in &listing.series {
            println!("{}", series.to_string().info());
            for &standard in listing.standards.iter().filter(|s| s.series() == series) {
                let levels: Vec<_> = Flavour::for_standard(standard)
                    .map(|f| f.level().code())
                    .collect();
                println!(
                    "  {:<18} {:<8} {}",
                    standard.id(),
                    standard.name(),
                    standard.description().dim()
                );
                println!("  {:<18} levels: {}", "", levels.join(", "));
            }
        }
    }
}

use std::path::Path;

use clap::Parser;
use pdfa_flavour::Flavour;
use tracing::instrument;

use super::{FlavourEntry, OutputFormat, terminal::Colorize};

#[derive(Debug, Parser)]
#[command(about = "Display detailed information about a flavour")]
pub struct Show {
    /// The flavour to display, by short id (`1b`) or symbol (`PDFA_1_B`).
    ///
    /// Defaults to the configured default flavour.
    #[arg(value_parser = super::parse_flavour)]
    flavour: Option<Flavour>,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    output: OutputFormat,
}

impl Show {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, config_path: &Path) -> anyhow::Result<()> {
        let flavour = match self.flavour {
            Some(flavour) => flavour,
            None => super::load_config(config_path)?.default_flavour(),
        };

        match self.output {
            OutputFormat::Pretty => Self::output_pretty(flavour),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&FlavourEntry::from(flavour))?
                );
            }
        }
        Ok(())
    }

    fn output_pretty(flavour: Flavour) {
        let standard = flavour.standard();
        let series = standard.series();

        println!("# {} ({})", flavour.symbol(), flavour.short_id());
        println!("{flavour}\n");

        println!("{}", "Standard".dim());
        println!("  Id:          {}", standard.id());
        println!("  Name:        {}", standard.name());
        println!("  Part:        {}", standard.part_number());
        println!("  Year:        {}", standard.year());
        println!("  Description: {}", standard.description());
        println!();

        println!("{}", "Series".dim());
        println!("  Name:        {}", series.name());
        println!("  Description: {}", series.description());
        println!();

        println!("{}", "Level".dim());
        println!("  Code:        {}", flavour.level().code());
        println!("  Name:        {}", flavour.level());

        let siblings: Vec<_> = Flavour::for_standard(standard)
            .filter(|&f| f != flavour)
            .map(Flavour::short_id)
            .collect();
        if !siblings.is_empty() {
            println!();
            println!("{} {}", "Other levels:".dim(), siblings.join(", "));
        }
    }
}

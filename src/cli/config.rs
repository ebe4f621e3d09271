use std::path::Path;

use anyhow::Context;
use pdfa_flavour::{Config, Flavour};
use tracing::instrument;

use super::terminal::Colorize;

/// Show or modify the flavour configuration
///
/// The configuration controls which flavour is used when none is named and
/// which flavours are offered for selection. An empty allow list offers every
/// flavour.
#[derive(Debug, clap::Parser)]
pub struct Command {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Debug, clap::Parser)]
enum ConfigCommand {
    /// Show all configuration values
    Show,

    /// Add one or more flavours to the allow list
    Allow {
        /// Flavours to allow (e.g. `2b`, `PDFA_3_U`)
        #[arg(required = true, value_parser = super::parse_flavour)]
        flavours: Vec<Flavour>,
    },

    /// Remove one or more flavours from the allow list
    Disallow {
        /// Flavours to remove
        #[arg(required = true, value_parser = super::parse_flavour)]
        flavours: Vec<Flavour>,
    },

    /// Set the default flavour
    Default {
        /// The flavour to use when none is named
        #[arg(value_parser = super::parse_flavour)]
        flavour: Flavour,
    },
}

impl Command {
    #[instrument(skip(self))]
    pub fn run(self, config_path: &Path) -> anyhow::Result<()> {
        let mut config = super::load_config(config_path)?;

        match self.command {
            ConfigCommand::Show => {
                Self::show_config(&config);
                return Ok(());
            }
            ConfigCommand::Allow { flavours } => {
                for flavour in flavours {
                    if config.allow_flavour(flavour) {
                        println!("{}", format!("Allowed {}", flavour.symbol()).success());
                    } else if flavour.is_none() {
                        println!("{}", "The none flavour cannot be allowed".warning());
                    } else {
                        println!(
                            "{}",
                            format!("{} is already allowed", flavour.symbol()).warning()
                        );
                    }
                }
            }
            ConfigCommand::Disallow { flavours } => {
                for flavour in flavours {
                    if config.disallow_flavour(flavour) {
                        println!("{}", format!("Disallowed {}", flavour.symbol()).success());
                    } else {
                        println!(
                            "{}",
                            format!("{} was not in the allow list", flavour.symbol()).warning()
                        );
                    }
                }
                if config.allowed_flavours().is_empty() {
                    println!("{}", "Allow list is empty: all flavours are offered".dim());
                }
            }
            ConfigCommand::Default { flavour } => {
                if !config.is_flavour_allowed(flavour) {
                    tracing::warn!(
                        flavour = flavour.symbol(),
                        "default flavour is not in the allow list"
                    );
                }
                config.set_default_flavour(flavour);
                println!(
                    "{}",
                    format!("Default flavour: {}", flavour.symbol()).success()
                );
            }
        }

        tracing::info!(path = %config_path.display(), "saving configuration");
        config
            .save(config_path)
            .with_context(|| format!("failed to update {}", config_path.display()))
    }

    fn show_config(config: &Config) {
        println!("Configuration:");
        let default = config.default_flavour();
        println!(
            "  default_flavour: {} ({})",
            default.short_id(),
            default.symbol().dim()
        );
        if config.allowed_flavours().is_empty() {
            println!("  allowed_flavours: {} (all flavours allowed)", "[]".dim());
        } else {
            let ids: Vec<_> = config
                .allowed_flavours()
                .iter()
                .map(|f| f.short_id())
                .collect();
            println!("  allowed_flavours: [{}]", ids.join(", "));
        }
    }
}

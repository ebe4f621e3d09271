//! Configuration for flavour selection.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Flavour, LookupError};

/// Configuration for selecting validation flavours.
///
/// Controls which flavour is used when none is requested and which flavours
/// are offered for selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Versions", into = "Versions")]
pub struct Config {
    /// The flavour used when a caller does not name one.
    default_flavour: Flavour,

    /// The flavours offered for selection.
    ///
    /// If this is empty, every flavour except the sentinel is allowed.
    allowed_flavours: Vec<Flavour>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_flavour: default_flavour(),
            allowed_flavours: Vec::new(),
        }
    }
}

/// Errors that can occur when loading or saving a [`Config`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The config file could not be read.
    #[error("Failed to read config file: {0}")]
    Read(#[source] std::io::Error),

    /// The config file is not valid TOML or names an unknown flavour.
    #[error("Failed to parse config file: {0}")]
    Parse(#[source] toml::de::Error),

    /// The configuration could not be serialized.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[source] toml::ser::Error),

    /// The config file could not be written.
    #[error("Failed to write config file: {0}")]
    Write(#[source] std::io::Error),
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, Error> {
        tracing::debug!(path = %path.display(), "loading configuration");
        let content = std::fs::read_to_string(path).map_err(Error::Read)?;
        toml::from_str(&content).map_err(Error::Parse)
    }

    /// Loads the configuration from `path`, or returns the default if no file
    /// exists there.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> Result<Self, Error> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            Ok(Self::default())
        }
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        let content = toml::to_string_pretty(self).map_err(Error::Serialize)?;
        std::fs::write(path, content).map_err(Error::Write)
    }

    /// Returns the flavour used when none is requested.
    #[must_use]
    pub const fn default_flavour(&self) -> Flavour {
        self.default_flavour
    }

    /// Sets the flavour used when none is requested.
    pub const fn set_default_flavour(&mut self, flavour: Flavour) {
        self.default_flavour = flavour;
    }

    /// Returns the allowed flavours, if configured.
    #[must_use]
    pub fn allowed_flavours(&self) -> &[Flavour] {
        &self.allowed_flavours
    }

    /// Checks if a flavour is offered for selection.
    ///
    /// The sentinel is never allowed. Otherwise, if `allowed_flavours` is
    /// empty, every flavour is allowed.
    #[must_use]
    pub fn is_flavour_allowed(&self, flavour: Flavour) -> bool {
        !flavour.is_none()
            && (self.allowed_flavours.is_empty() || self.allowed_flavours.contains(&flavour))
    }

    /// Returns the flavours offered for selection, in declaration order.
    pub fn selectable_flavours(&self) -> impl Iterator<Item = Flavour> + '_ {
        Flavour::ALL
            .into_iter()
            .filter(|&flavour| self.is_flavour_allowed(flavour))
    }

    /// Adds a flavour to the allowed list.
    ///
    /// Returns `true` if the flavour was added, `false` if it was already
    /// listed or is the sentinel.
    pub fn allow_flavour(&mut self, flavour: Flavour) -> bool {
        if flavour.is_none() || self.allowed_flavours.contains(&flavour) {
            false
        } else {
            self.allowed_flavours.push(flavour);
            self.allowed_flavours.sort_unstable();
            true
        }
    }

    /// Removes a flavour from the allowed list.
    ///
    /// Returns `true` if the flavour was removed, `false` if it wasn't listed.
    pub fn disallow_flavour(&mut self, flavour: Flavour) -> bool {
        if let Some(pos) = self.allowed_flavours.iter().position(|&f| f == flavour) {
            self.allowed_flavours.remove(pos);
            true
        } else {
            false
        }
    }
}

const fn default_flavour() -> Flavour {
    Flavour::Pdfa1B
}

fn default_flavour_id() -> String {
    default_flavour().short_id().to_string()
}

/// The serialized versions of the configuration.
///
/// Flavours are stored by short id (e.g. `"2b"`) so the file stays readable.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_flavour_id")]
        default_flavour: String,

        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        allowed_flavours: Vec<String>,
    },
}

impl TryFrom<Versions> for Config {
    type Error = LookupError;

    fn try_from(versions: Versions) -> Result<Self, Self::Error> {
        match versions {
            Versions::V1 {
                default_flavour,
                allowed_flavours,
            } => {
                let mut config = Self {
                    default_flavour: default_flavour.parse()?,
                    allowed_flavours: Vec::new(),
                };
                for id in allowed_flavours {
                    let flavour: Flavour = id.parse()?;
                    if flavour.is_none() {
                        return Err(LookupError::SentinelNotAllowed);
                    }
                    if !config.allow_flavour(flavour) {
                        tracing::debug!(flavour = flavour.symbol(), "duplicate allowed flavour");
                    }
                }
                Ok(config)
            }
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            default_flavour: config.default_flavour.short_id().to_string(),
            allowed_flavours: config
                .allowed_flavours
                .iter()
                .map(|flavour| flavour.short_id().to_string())
                .collect(),
        }
    }
}

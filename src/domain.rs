//! Domain models for the PDF/A flavour taxonomy.
//!
//! Composition runs one way: a [`Flavour`] pairs a [`Standard`] with a
//! [`Level`], and every [`Standard`] belongs to a [`StandardSeries`].

/// Shared lookup and deserialization errors.
pub mod error;
pub use error::Error as LookupError;

/// Standard series (ISO 19005, ISO 32000).
pub mod series;
pub use series::StandardSeries;

/// Parts of the PDF/A standard.
pub mod standard;
pub use standard::Standard;

/// Conformance levels.
pub mod level;
pub use level::Level;

/// Flavours: the enumerated (standard, level) pairs.
pub mod flavour;
pub use flavour::Flavour;

mod config;
pub use config::{Config, Error as ConfigError};

/// Placeholder text used by every sentinel variant.
const NONE: &str = "none";

/// Reserved numeric id shared by the sentinel series and standard.
const NONE_ID: u32 = 0;

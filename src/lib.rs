//! PDF/A flavour taxonomy
//!
//! A flavour names the edition and conformance level of the PDF/A standard a
//! document claims to satisfy. The set of flavours, standards, levels and
//! standard series is closed: every value is one of the enumerated variants.

pub mod domain;
pub use domain::{Config, ConfigError, Flavour, Level, LookupError, Standard, StandardSeries};

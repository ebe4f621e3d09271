use std::{fmt, sync::LazyLock};

use serde::{Deserialize, Serialize};

use super::{NONE, NONE_ID, error::Error};

const ISO_PREFIX: &str = "ISO ";

/// An ISO standard series.
///
/// Each [`Standard`](super::Standard) is one part of a series. The series
/// name is derived from its numeric id, e.g. `ISO 19005`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "Repr", try_from = "Repr")]
pub enum StandardSeries {
    /// Sentinel for "no series".
    None,
    /// ISO 19005, the PDF/A series.
    Iso19005,
    /// ISO 32000, the baseline PDF series.
    Iso32000,
}

impl StandardSeries {
    /// Every series, in declaration order.
    pub const ALL: [Self; 3] = [Self::None, Self::Iso19005, Self::Iso32000];

    /// Returns the numeric series id.
    #[must_use]
    pub const fn id(self) -> u32 {
        match self {
            Self::None => NONE_ID,
            Self::Iso19005 => 19005,
            Self::Iso32000 => 32000,
        }
    }

    /// Returns the series description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::None => NONE,
            Self::Iso19005 => {
                "Document management -- Electronic document file format for long-term preservation"
            }
            Self::Iso32000 => "Document management -- Portable document format",
        }
    }

    /// Returns the series name, e.g. `ISO 19005`.
    #[must_use]
    pub fn name(self) -> &'static str {
        &DERIVED[self as usize].name
    }

    /// Returns `true` for the sentinel series.
    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }

    /// Looks up a series by its numeric id.
    #[must_use]
    pub fn from_id(id: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|series| series.id() == id)
    }
}

impl fmt::Display for StandardSeries {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&DERIVED[*self as usize].display)
    }
}

/// Strings derived from each series, built once on first use.
struct Derived {
    name: String,
    display: String,
}

impl Derived {
    fn new(series: StandardSeries) -> Self {
        let name = format!("{ISO_PREFIX}{}", series.id());
        let display = format!("{name} {}", series.description());
        Self { name, display }
    }
}

static DERIVED: LazyLock<[Derived; StandardSeries::ALL.len()]> =
    LazyLock::new(|| StandardSeries::ALL.map(Derived::new));

/// Structured form of a series.
#[derive(Debug, Serialize, Deserialize)]
struct Repr {
    id: u32,
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
}

impl From<StandardSeries> for Repr {
    fn from(series: StandardSeries) -> Self {
        Self {
            id: series.id(),
            name: series.name().to_string(),
            description: series.description().to_string(),
        }
    }
}

impl TryFrom<Repr> for StandardSeries {
    type Error = Error;

    fn try_from(repr: Repr) -> Result<Self, Self::Error> {
        let series = Self::from_id(repr.id).ok_or(Error::UnknownSeries(repr.id))?;
        Error::check_derived("series name", series.name(), &repr.name)?;
        Error::check_derived("series description", series.description(), &repr.description)?;
        Ok(series)
    }
}

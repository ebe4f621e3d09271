use std::{fmt, str::FromStr, sync::LazyLock};

use serde::{Deserialize, Serialize};

use super::{Level, NONE, Standard, error::Error};

/// A PDF/A flavour: one part of the standard at one conformance level.
///
/// Only the enumerated pairs exist. Use [`Flavour::from_parts`] to find the
/// flavour for a standard and level; there is no way to build a pair that is
/// not listed here.
///
/// ```
/// use pdfa_flavour::{Flavour, Level, Standard};
///
/// let flavour: Flavour = "1b".parse().unwrap();
/// assert_eq!(flavour, Flavour::Pdfa1B);
/// assert_eq!(flavour.standard(), Standard::Iso19005_1);
/// assert_eq!(flavour.level(), Level::B);
/// assert_eq!(Flavour::from_parts(Standard::Iso19005_1, Level::U), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "Repr", try_from = "Repr")]
pub enum Flavour {
    /// Sentinel for "no flavour".
    None,
    /// PDF/A-1 level A.
    Pdfa1A,
    /// PDF/A-1 level B.
    Pdfa1B,
    /// PDF/A-2 level A.
    Pdfa2A,
    /// PDF/A-2 level B.
    Pdfa2B,
    /// PDF/A-3 level A.
    Pdfa3A,
    /// PDF/A-3 level B.
    Pdfa3B,
    /// PDF/A-3 level U.
    Pdfa3U,
}

impl Flavour {
    /// Every flavour, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::None,
        Self::Pdfa1A,
        Self::Pdfa1B,
        Self::Pdfa2A,
        Self::Pdfa2B,
        Self::Pdfa3A,
        Self::Pdfa3B,
        Self::Pdfa3U,
    ];

    /// Returns the standard part this flavour conforms to.
    #[must_use]
    pub const fn standard(self) -> Standard {
        match self {
            Self::None => Standard::None,
            Self::Pdfa1A | Self::Pdfa1B => Standard::Iso19005_1,
            Self::Pdfa2A | Self::Pdfa2B => Standard::Iso19005_2,
            Self::Pdfa3A | Self::Pdfa3B | Self::Pdfa3U => Standard::Iso19005_3,
        }
    }

    /// Returns the conformance level of this flavour.
    #[must_use]
    pub const fn level(self) -> Level {
        match self {
            Self::None => Level::None,
            Self::Pdfa1A | Self::Pdfa2A | Self::Pdfa3A => Level::A,
            Self::Pdfa1B | Self::Pdfa2B | Self::Pdfa3B => Level::B,
            Self::Pdfa3U => Level::U,
        }
    }

    /// Returns the stable symbolic name, e.g. `PDFA_1_B`.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Pdfa1A => "PDFA_1_A",
            Self::Pdfa1B => "PDFA_1_B",
            Self::Pdfa2A => "PDFA_2_A",
            Self::Pdfa2B => "PDFA_2_B",
            Self::Pdfa3A => "PDFA_3_A",
            Self::Pdfa3B => "PDFA_3_B",
            Self::Pdfa3U => "PDFA_3_U",
        }
    }

    /// Returns the compact id: part number followed by level code (`1b`),
    /// or `0` for the sentinel.
    #[must_use]
    pub fn short_id(self) -> &'static str {
        &DERIVED[self as usize].short_id
    }

    /// Returns `true` for the sentinel flavour.
    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }

    /// Finds the flavour pairing `standard` with `level`, if one is
    /// enumerated.
    #[must_use]
    pub fn from_parts(standard: Standard, level: Level) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|flavour| flavour.standard() == standard && flavour.level() == level)
    }

    /// Returns the flavours defined for one standard part.
    pub fn for_standard(standard: Standard) -> impl Iterator<Item = Self> {
        Self::ALL
            .into_iter()
            .filter(move |flavour| flavour.standard() == standard)
    }
}

impl fmt::Display for Flavour {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&DERIVED[*self as usize].display)
    }
}

impl FromStr for Flavour {
    type Err = Error;

    /// Parses a flavour from its short id (`1b`), its symbol (`PDFA_1_B`) or
    /// `none`.
    ///
    /// Matching ignores case, whitespace and the separators `-`, `_` and `/`,
    /// so `pdfa-1b`, `PDF/A-1B` and `PDFA_1_B` are all accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | '/') && !c.is_whitespace())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let key = normalised.strip_prefix("pdfa").unwrap_or(&normalised);

        if key == NONE {
            return Ok(Self::None);
        }
        Self::ALL
            .into_iter()
            .find(|flavour| flavour.short_id() == key)
            .ok_or_else(|| {
                tracing::debug!(input = s, "no flavour matches input");
                Error::UnknownFlavour(s.to_string())
            })
    }
}

/// Strings derived from each flavour, built once on first use.
struct Derived {
    short_id: String,
    display: String,
}

impl Derived {
    fn new(flavour: Flavour) -> Self {
        let short_id = if flavour.is_none() {
            flavour.standard().part_number().to_string()
        } else {
            format!(
                "{}{}",
                flavour.standard().part_number(),
                flavour.level().code()
            )
        };
        let display = format!("{} {}", flavour.standard(), flavour.level());
        Self { short_id, display }
    }
}

static DERIVED: LazyLock<[Derived; Flavour::ALL.len()]> =
    LazyLock::new(|| Flavour::ALL.map(Derived::new));

#[derive(Debug, Serialize, Deserialize)]
struct Repr {
    standard: Standard,
    level: Level,
}

impl From<Flavour> for Repr {
    fn from(flavour: Flavour) -> Self {
        Self {
            standard: flavour.standard(),
            level: flavour.level(),
        }
    }
}

impl TryFrom<Repr> for Flavour {
    type Error = Error;

    fn try_from(repr: Repr) -> Result<Self, Self::Error> {
        Self::from_parts(repr.standard, repr.level).ok_or(Error::UnsupportedCombination {
            standard: repr.standard,
            level: repr.level,
        })
    }
}

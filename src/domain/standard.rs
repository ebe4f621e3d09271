use std::{fmt, str::FromStr, sync::LazyLock};

use serde::{Deserialize, Serialize};

use super::{NONE, NONE_ID, StandardSeries, error::Error};

const PDFA_PREFIX: &str = "PDF/A-";

/// One part of a standard series, published in a given year.
///
/// The id and name are derived from the series, part number and year:
///
/// ```
/// use pdfa_flavour::Standard;
///
/// let standard = Standard::Iso19005_2;
/// assert_eq!(standard.id(), "ISO 19005-2:2011");
/// assert_eq!(standard.name(), "PDF/A-2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "Repr", try_from = "Repr")]
pub enum Standard {
    /// Sentinel for "no standard".
    None,
    /// ISO 19005-1, PDF/A-1.
    Iso19005_1,
    /// ISO 19005-2, PDF/A-2.
    Iso19005_2,
    /// ISO 19005-3, PDF/A-3.
    Iso19005_3,
}

impl Standard {
    /// Every standard, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::None,
        Self::Iso19005_1,
        Self::Iso19005_2,
        Self::Iso19005_3,
    ];

    /// Returns the series this standard is a part of.
    #[must_use]
    pub const fn series(self) -> StandardSeries {
        match self {
            Self::None => StandardSeries::None,
            Self::Iso19005_1 | Self::Iso19005_2 | Self::Iso19005_3 => StandardSeries::Iso19005,
        }
    }

    /// Returns the part number within the series.
    #[must_use]
    pub const fn part_number(self) -> u32 {
        match self {
            Self::None => NONE_ID,
            Self::Iso19005_1 => 1,
            Self::Iso19005_2 => 2,
            Self::Iso19005_3 => 3,
        }
    }

    /// Returns the publication year of this part.
    #[must_use]
    pub const fn year(self) -> &'static str {
        match self {
            Self::None => NONE,
            Self::Iso19005_1 => "2005",
            Self::Iso19005_2 => "2011",
            Self::Iso19005_3 => "2012",
        }
    }

    /// Returns the description of this part.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::None => NONE,
            Self::Iso19005_1 => "Part 1: Use of PDF 1.4 (PDF/A-1)",
            Self::Iso19005_2 => "Part 2: Use of ISO 32000-1 (PDF/A-2)",
            Self::Iso19005_3 => {
                "Part 3: Use of ISO 32000-1 with support for embedded files (PDF/A-3)"
            }
        }
    }

    /// Returns the standard id, e.g. `ISO 19005-1:2005`.
    #[must_use]
    pub fn id(self) -> &'static str {
        &DERIVED[self as usize].id
    }

    /// Returns the short name, e.g. `PDF/A-1`.
    #[must_use]
    pub fn name(self) -> &'static str {
        &DERIVED[self as usize].name
    }

    /// Returns `true` for the sentinel standard.
    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }

    /// Looks up a PDF/A part by number.
    ///
    /// Only parts of ISO 19005 are matched; the sentinel is never returned.
    #[must_use]
    pub fn from_part_number(part_number: u32) -> Option<Self> {
        Self::ALL
            .into_iter()
            .filter(|standard| standard.series() == StandardSeries::Iso19005)
            .find(|standard| standard.part_number() == part_number)
    }
}

impl fmt::Display for Standard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&DERIVED[*self as usize].display)
    }
}

impl FromStr for Standard {
    type Err = Error;

    /// Parses a standard from its id (`ISO 19005-2:2011`), its name
    /// (`PDF/A-2`) or `none`, ignoring case.
    ///
    /// The sentinel is only reachable through the `none` keyword; its
    /// placeholder id and name are not accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(NONE) {
            return Ok(Self::None);
        }
        Self::ALL
            .into_iter()
            .filter(|standard| !standard.is_none())
            .find(|standard| {
                standard.id().eq_ignore_ascii_case(s) || standard.name().eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| {
                tracing::debug!(input = s, "no standard matches input");
                Error::UnknownStandard(s.to_string())
            })
    }
}

/// Strings derived from each standard, built once on first use.
struct Derived {
    id: String,
    name: String,
    display: String,
}

impl Derived {
    fn new(standard: Standard) -> Self {
        let series = standard.series();
        let id = format!(
            "{}-{}:{}",
            series.name(),
            standard.part_number(),
            standard.year()
        );
        let name = format!("{PDFA_PREFIX}{}", standard.part_number());
        let display = format!(
            "{id} {} -- {} {name}",
            series.description(),
            standard.description()
        );
        Self { id, name, display }
    }
}

static DERIVED: LazyLock<[Derived; Standard::ALL.len()]> =
    LazyLock::new(|| Standard::ALL.map(Derived::new));

/// Structured form of a standard.
///
/// `partNumber` and `year` identify the member; the remaining fields are
/// derived and only checked for consistency when present.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Repr {
    #[serde(default)]
    id: String,
    part_number: u32,
    year: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
}

impl From<Standard> for Repr {
    fn from(standard: Standard) -> Self {
        Self {
            id: standard.id().to_string(),
            part_number: standard.part_number(),
            year: standard.year().to_string(),
            name: standard.name().to_string(),
            description: standard.description().to_string(),
        }
    }
}

impl TryFrom<Repr> for Standard {
    type Error = Error;

    fn try_from(repr: Repr) -> Result<Self, Self::Error> {
        let standard = Self::ALL
            .into_iter()
            .find(|standard| {
                standard.part_number() == repr.part_number && standard.year() == repr.year
            })
            .ok_or_else(|| {
                Error::UnknownStandard(format!("part {}, year {}", repr.part_number, repr.year))
            })?;
        Error::check_derived("standard id", standard.id(), &repr.id)?;
        Error::check_derived("standard name", standard.name(), &repr.name)?;
        Error::check_derived(
            "standard description",
            standard.description(),
            &repr.description,
        )?;
        Ok(standard)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use test_case::test_case;

    use super::*;

    #[test_case(Standard::None, "ISO 0-0:none"; "none")]
    #[test_case(Standard::Iso19005_1, "ISO 19005-1:2005"; "part 1")]
    #[test_case(Standard::Iso19005_2, "ISO 19005-2:2011"; "part 2")]
    #[test_case(Standard::Iso19005_3, "ISO 19005-3:2012"; "part 3")]
    fn id(standard: Standard, expected: &str) {
        assert_eq!(standard.id(), expected);
    }

    #[test]
    fn id_is_derived_from_series_part_and_year() {
        for standard in Standard::ALL {
            let expected = format!(
                "{}-{}:{}",
                standard.series().name(),
                standard.part_number(),
                standard.year()
            );
            assert_eq!(standard.id(), expected);
            assert_eq!(standard.id().trim(), standard.id());
        }
    }

    #[test]
    fn name_is_prefixed_part_number() {
        for standard in Standard::ALL {
            assert_eq!(
                standard.name(),
                format!("PDF/A-{}", standard.part_number())
            );
        }
        assert_eq!(Standard::Iso19005_2.name(), "PDF/A-2");
    }

    #[test]
    fn display_format() {
        assert_eq!(
            Standard::Iso19005_1.to_string(),
            "ISO 19005-1:2005 Document management -- Electronic document file format for \
             long-term preservation -- Part 1: Use of PDF 1.4 (PDF/A-1) PDF/A-1"
        );
        assert_eq!(
            Standard::None.to_string(),
            "ISO 0-0:none none -- none PDF/A-0"
        );
    }

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = Standard::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids.len(), Standard::ALL.len());
    }

    #[test]
    fn series_and_part_identify_the_standard() {
        let keys: HashSet<_> = Standard::ALL
            .iter()
            .map(|s| (s.series(), s.part_number()))
            .collect();
        assert_eq!(keys.len(), Standard::ALL.len());
    }

    #[test]
    fn getters_are_idempotent() {
        for standard in Standard::ALL {
            assert_eq!(standard.id(), standard.id());
            assert_eq!(standard.name(), standard.name());
            assert_eq!(standard.to_string(), standard.to_string());
        }
    }

    #[test_case(1, Some(Standard::Iso19005_1))]
    #[test_case(2, Some(Standard::Iso19005_2))]
    #[test_case(3, Some(Standard::Iso19005_3))]
    #[test_case(0, None; "sentinel part is not a pdfa part")]
    #[test_case(4, None)]
    fn from_part_number(part: u32, expected: Option<Standard>) {
        assert_eq!(Standard::from_part_number(part), expected);
    }

    #[test_case("ISO 19005-2:2011", Standard::Iso19005_2; "id")]
    #[test_case("iso 19005-3:2012", Standard::Iso19005_3; "lowercase id")]
    #[test_case("PDF/A-1", Standard::Iso19005_1; "name")]
    #[test_case(" pdf/a-2 ", Standard::Iso19005_2; "padded lowercase name")]
    #[test_case("none", Standard::None; "sentinel")]
    fn parse(input: &str, expected: Standard) {
        assert_eq!(input.parse::<Standard>().unwrap(), expected);
    }

    #[test_case("PDF/A-4"; "unknown part")]
    #[test_case("PDF/A-0"; "sentinel name")]
    #[test_case("ISO 0-0:none"; "sentinel id")]
    fn parse_unknown(input: &str) {
        assert_eq!(
            input.parse::<Standard>(),
            Err(Error::UnknownStandard(input.to_string()))
        );
    }

    #[test]
    fn parse_and_part_number_agree_on_the_sentinel() {
        assert_eq!(Standard::from_part_number(0), None);
        assert!("PDF/A-0".parse::<Standard>().is_err());
        for standard in Standard::ALL.into_iter().filter(|s| !s.is_none()) {
            assert_eq!(
                standard.name().parse::<Standard>().ok(),
                Standard::from_part_number(standard.part_number())
            );
        }
    }

    #[test]
    fn serializes_properties() {
        let json = serde_json::to_value(Standard::Iso19005_3).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "ISO 19005-3:2012",
                "partNumber": 3,
                "year": "2012",
                "name": "PDF/A-3",
                "description": "Part 3: Use of ISO 32000-1 with support for embedded files (PDF/A-3)",
            })
        );
    }

    #[test]
    fn deserializes_from_part_and_year() {
        let standard: Standard =
            serde_json::from_str(r#"{"partNumber": 2, "year": "2011"}"#).unwrap();
        assert_eq!(standard, Standard::Iso19005_2);
    }

    #[test]
    fn deserialize_rejects_wrong_year() {
        let result = serde_json::from_str::<Standard>(r#"{"partNumber": 2, "year": "2020"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn deserialize_rejects_inconsistent_id() {
        let result = serde_json::from_str::<Standard>(
            r#"{"partNumber": 2, "year": "2011", "id": "ISO 19005-3:2012"}"#,
        );
        assert!(result.is_err());
    }
}

use std::{fmt, str::FromStr, sync::LazyLock};

use serde::{Deserialize, Serialize};

use super::{NONE, error::Error};

const LEVEL_PREFIX: &str = "level ";

/// A PDF/A conformance level.
///
/// Displays as its full name, e.g. `level b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "Repr", try_from = "Repr")]
pub enum Level {
    /// Sentinel for "no level".
    None,
    /// Level A (accessible).
    A,
    /// Level B (basic).
    B,
    /// Level U (unicode).
    U,
}

impl Level {
    /// Every level, in declaration order.
    pub const ALL: [Self; 4] = [Self::None, Self::A, Self::B, Self::U];

    /// Returns the level code: `a`, `b`, `u`, or `none` for the sentinel.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::None => NONE,
            Self::A => "a",
            Self::B => "b",
            Self::U => "u",
        }
    }

    /// Returns the full name, e.g. `level a`.
    #[must_use]
    pub fn full_name(self) -> &'static str {
        &FULL_NAMES[self as usize]
    }

    /// Returns `true` for the sentinel level.
    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }

    /// Looks up a level by code, ignoring case.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.code().eq_ignore_ascii_case(code))
    }
}

static FULL_NAMES: LazyLock<[String; Level::ALL.len()]> =
    LazyLock::new(|| Level::ALL.map(|level| format!("{LEVEL_PREFIX}{}", level.code())));

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.full_name())
    }
}

impl FromStr for Level {
    type Err = Error;

    /// Accepts a bare code (`b`) or a full name (`level b`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let code = trimmed
            .get(..LEVEL_PREFIX.len())
            .filter(|prefix| prefix.eq_ignore_ascii_case(LEVEL_PREFIX))
            .map_or(trimmed, |_| trimmed[LEVEL_PREFIX.len()..].trim_start());
        Self::from_code(code).ok_or_else(|| {
            tracing::debug!(input = s, "no level matches input");
            Error::UnknownLevel(s.to_string())
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Repr {
    code: String,
}

impl From<Level> for Repr {
    fn from(level: Level) -> Self {
        Self {
            code: level.code().to_string(),
        }
    }
}

impl TryFrom<Repr> for Level {
    type Error = Error;

    fn try_from(repr: Repr) -> Result<Self, Self::Error> {
        Self::from_code(&repr.code).ok_or(Error::UnknownLevel(repr.code))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use test_case::test_case;

    use super::*;

    #[test_case(Level::None, "level none")]
    #[test_case(Level::A, "level a")]
    #[test_case(Level::B, "level b")]
    #[test_case(Level::U, "level u")]
    fn display(level: Level, expected: &str) {
        assert_eq!(level.to_string(), expected);
        assert_eq!(level.full_name(), expected);
    }

    #[test]
    fn codes_are_unique() {
        let codes: HashSet<_> = Level::ALL.iter().map(|l| l.code()).collect();
        assert_eq!(codes.len(), Level::ALL.len());
    }

    #[test]
    fn code_identifies_level() {
        for level in Level::ALL {
            assert_eq!(Level::from_code(level.code()), Some(level));
        }
    }

    #[test_case("a", Level::A; "code")]
    #[test_case("B", Level::B; "uppercase code")]
    #[test_case(" u ", Level::U; "padded code")]
    #[test_case("level a", Level::A; "full name")]
    #[test_case("Level B", Level::B; "capitalised full name")]
    #[test_case("level  b", Level::B; "full name with extra space")]
    #[test_case(" LEVEL \tu ", Level::U; "padded full name")]
    #[test_case("none", Level::None; "sentinel")]
    fn parse(input: &str, expected: Level) {
        assert_eq!(input.parse::<Level>().unwrap(), expected);
    }

    #[test_case("c"; "unknown code")]
    #[test_case(""; "empty")]
    #[test_case("level"; "prefix only")]
    #[test_case("level z"; "unknown full name")]
    fn parse_unknown(input: &str) {
        assert_eq!(
            input.parse::<Level>(),
            Err(Error::UnknownLevel(input.to_string()))
        );
    }

    #[test]
    fn serializes_code() {
        assert_eq!(
            serde_json::to_value(Level::U).unwrap(),
            serde_json::json!({ "code": "u" })
        );
    }

    #[test]
    fn deserializes_code() {
        let level: Level = serde_json::from_str(r#"{"code": "b"}"#).unwrap();
        assert_eq!(level, Level::B);
        assert!(serde_json::from_str::<Level>(r#"{"code": "x"}"#).is_err());
    }
}

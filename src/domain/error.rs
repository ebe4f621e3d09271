use super::{Level, Standard};

/// Errors raised when a value cannot be resolved to a member of the closed
/// taxonomy.
///
/// None of the taxonomy types can be constructed outside their enumerated
/// variants, so these errors only arise at the edges: parsing user input and
/// deserializing structured data.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// The input does not name any flavour.
    #[error("Unknown flavour '{0}': expected a short id (e.g. '1b'), a symbol (e.g. 'PDFA_1_B') or 'none'")]
    UnknownFlavour(String),

    /// The input does not name any standard part.
    #[error("Unknown standard '{0}'")]
    UnknownStandard(String),

    /// The input is not a conformance level code.
    #[error("Unknown conformance level '{0}': expected one of 'a', 'b', 'u' or 'none'")]
    UnknownLevel(String),

    /// No standard series uses this id.
    #[error("Unknown standard series id {0}")]
    UnknownSeries(u32),

    /// The standard and level are both valid, but no flavour pairs them.
    #[error("No flavour combines {} with {}", .standard.name(), .level)]
    UnsupportedCombination {
        /// The requested standard.
        standard: Standard,
        /// The requested level.
        level: Level,
    },

    /// The `none` flavour was listed where only real flavours are accepted.
    #[error("The 'none' flavour cannot be listed in allowed_flavours")]
    SentinelNotAllowed,

    /// A derived field in structured input disagrees with the member it
    /// resolved to.
    #[error("Inconsistent {field}: expected '{expected}', found '{found}'")]
    Mismatch {
        /// Name of the offending field.
        field: &'static str,
        /// Value derived from the resolved member.
        expected: String,
        /// Value present in the input.
        found: String,
    },
}

impl Error {
    /// Checks an optional derived field from structured input.
    ///
    /// Derived fields are informational when reading; an empty value is
    /// accepted, anything else must match exactly.
    pub(crate) fn check_derived(
        field: &'static str,
        expected: &str,
        found: &str,
    ) -> Result<(), Self> {
        if found.is_empty() || found == expected {
            Ok(())
        } else {
            Err(Self::Mismatch {
                field,
                expected: expected.to_string(),
                found: found.to_string(),
            })
        }
    }
}

//! Identifier type
//!
//! An [`Identifier`] is a UUID rendered in canonical 8-4-4-4-12 hyphenated
//! hexadecimal form. Test fixtures declare identifiers as strings, so parsing
//! is strict: only the 36-character hyphenated form is accepted.

use crate::error::{StagehandError, StagehandResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Length of the canonical hyphenated textual form
pub const IDENTIFIER_TEXT_LEN: usize = 36;

/// Byte offsets of the group separators in the canonical form
const HYPHEN_POSITIONS: [usize; 4] = [8, 13, 18, 23];

/// Universally unique identifier in canonical hyphenated form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Identifier(Uuid);

impl Identifier {
    /// Create a new random Identifier using UUID v4
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }

    /// The all-zero identifier
    pub const fn nil() -> Self {
        Self(Uuid::nil())
    }

    /// Parse the canonical hyphenated form
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdentifier` for anything other than 36 characters of
    /// hex digits grouped 8-4-4-4-12. Braced, URN and simple (unhyphenated)
    /// forms are rejected.
    pub fn parse(s: &str) -> StagehandResult<Self> {
        if s.len() != IDENTIFIER_TEXT_LEN {
            return Err(StagehandError::invalid_identifier(
                s,
                format!("expected {} characters, got {}", IDENTIFIER_TEXT_LEN, s.len()),
            ));
        }

        for (i, b) in s.bytes().enumerate() {
            let ok = if HYPHEN_POSITIONS.contains(&i) {
                b == b'-'
            } else {
                b.is_ascii_hexdigit()
            };
            if !ok {
                return Err(StagehandError::invalid_identifier(
                    s,
                    format!("unexpected character at position {}", i),
                ));
            }
        }

        Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| StagehandError::invalid_identifier(s, e.to_string()))
    }

    /// True for the all-zero identifier
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    /// Borrow the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for Identifier {
    fn default() -> Self {
        Self::nil()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for Identifier {
    type Err = StagehandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Uuid> for Identifier {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<Identifier> for Uuid {
    fn from(id: Identifier) -> Self {
        id.0
    }
}

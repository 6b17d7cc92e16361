//! Typed IDs for type-safe entity references.
//!
//! Using typed IDs prevents accidentally passing a `ResourceId` where a
//! `ProjectId` is expected. Each ID wraps a sequence number and renders as a
//! prefixed, zero-padded string such as `RES-001` or `ALLOC-042`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from parsing a prefixed ID string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    /// The string does not carry the expected collection prefix.
    #[error("Expected ID with prefix {expected}, got: {got}")]
    WrongPrefix {
        /// The prefix the target ID type requires.
        expected: &'static str,
        /// The string that was parsed.
        got: String,
    },

    /// The suffix after the prefix is not a valid sequence number.
    #[error("Invalid ID sequence number: {0}")]
    InvalidSequence(String),
}

/// Macro to generate typed ID wrappers.
macro_rules! prefixed_id {
    ($name:ident, $prefix:literal, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(into = "String", try_from = "String")]
        pub struct $name(u32);

        impl $name {
            /// Collection prefix rendered before the sequence number.
            pub const PREFIX: &'static str = $prefix;

            /// Creates an ID from a sequence number.
            #[must_use]
            pub const fn from_seq(seq: u32) -> Self {
                Self(seq)
            }

            /// Returns the sequence number behind this ID.
            #[must_use]
            pub const fn seq(self) -> u32 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}-{:03}", Self::PREFIX, self.0)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.to_string()
            }
        }

        impl std::str::FromStr for $name {
            type Err = IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let suffix = s
                    .strip_prefix(Self::PREFIX)
                    .and_then(|rest| rest.strip_prefix('-'))
                    .ok_or_else(|| IdError::WrongPrefix {
                        expected: Self::PREFIX,
                        got: s.to_string(),
                    })?;
                let seq = suffix
                    .parse::<u32>()
                    .map_err(|_| IdError::InvalidSequence(s.to_string()))?;
                Ok(Self(seq))
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                s.parse()
            }
        }
    };
}

prefixed_id!(ResourceId, "RES", "Unique identifier for a resource.");
prefixed_id!(ProjectId, "PROJ", "Unique identifier for a project.");
prefixed_id!(AllocationId, "ALLOC", "Unique identifier for an allocation.");

/// Monotonic sequence for minting collection IDs.
///
/// The counter only moves forward. IDs stay unique even when the collection
/// shrinks below a previous high-water mark and grows again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    next: u32,
}

impl IdSequence {
    /// Creates a sequence that mints `1` first.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    /// Creates a sequence that resumes after already-minted IDs.
    #[must_use]
    pub const fn starting_at(next: u32) -> Self {
        Self { next }
    }

    /// Mints the next sequence number and advances the counter.
    pub const fn mint(&mut self) -> u32 {
        let seq = self.next;
        self.next += 1;
        seq
    }

    /// Returns the number the next call to [`mint`](Self::mint) yields.
    #[must_use]
    pub const fn peek(&self) -> u32 {
        self.next
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

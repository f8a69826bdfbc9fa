//! Numeric message identifiers.
//!
//! LEF messages live in the 1000-3999 range and DEF messages in 5000-8999,
//! following the numbering used by the classic readers. The reporter treats
//! ids as opaque; ranges only matter for the uncounted-error window in
//! [`DiagnosticConfig`](crate::DiagnosticConfig).

use std::fmt;

/// Identifier of one kind of message, e.g. `1008` for "invalid characters".
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MessageId(u32);

impl MessageId {
    #[inline]
    pub const fn new(id: u32) -> Self {
        MessageId(id)
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for MessageId {
    fn from(id: u32) -> Self {
        MessageId(id)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//! Record identifier newtype
//!
//! Identifiers are issued by the loader, one per record, from a single
//! counter shared by every record kind.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sequential record identifier
///
/// # Examples
///
/// ```
/// use medroster::domain::ids::RecordId;
///
/// let id = RecordId::new(7);
/// assert_eq!(id.get(), 7);
/// assert_eq!(id.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    /// Wraps a raw identifier value
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier value
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The identifier issued right after this one, `None` past `u64::MAX`
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

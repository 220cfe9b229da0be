//! Dense state identifiers for the enumeration-ordered board tables.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Index of a board within an enumeration-ordered state table.
///
/// Ids are dense and 0-based, assigned purely by position in the table they
/// index. The full space and the canonical space each have their own id
/// assignment; a `StateId` is only meaningful together with the table it
/// was issued for.
///
/// # Examples
///
/// ```
/// use ttt_atlas::StateId;
///
/// let id = StateId::new(42);
/// assert_eq!(id.index(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StateId(usize);

impl StateId {
    /// Create a new state identifier.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the underlying table index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for StateId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl From<StateId> for usize {
    fn from(id: StateId) -> Self {
        id.0
    }
}

//! Author entity.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identity of one author.
///
/// Distinct from `BookId` at the type level, so a book handle can never be
/// stored in a contract's author slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(Uuid);

impl AuthorId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Rebuilds a handle from a raw UUID.
    ///
    /// The result is only meaningful for the store that issued the UUID;
    /// repositories reject handles they do not know.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Display for AuthorId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A writer who may sign any number of contracts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
}

impl Author {
    /// Creates an author with a freshly generated id.
    ///
    /// Crate-private: authors come into existence by being registered in a
    /// repository, never as free-floating values.
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            id: AuthorId::generate(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Author;

    #[test]
    fn same_name_yields_distinct_identity() {
        let first = Author::new("Ann");
        let second = Author::new("Ann");

        assert_eq!(first.name, second.name);
        assert_ne!(first.id, second.id);
        assert_ne!(first, second);
    }
}

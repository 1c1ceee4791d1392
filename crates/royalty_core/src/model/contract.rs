//! Contract join entity.
//!
//! # Responsibility
//! - Link exactly one author to exactly one book with a date and royalties.
//! - Describe single-field reassignments as `ContractChange` values.
//!
//! # Invariants
//! - `author` and `book` always name entities registered in the owning
//!   repository; the repository checks this before any write.
//! - `date` is free text and `royalties` may be negative or zero.
//! - Fields are private: the only writers are repository code paths that
//!   validate first.

use crate::model::author::AuthorId;
use crate::model::book::BookId;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identity of one contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractId(Uuid);

impl ContractId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Display for ContractId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rejected contract field assignment.
///
/// Date and royalties are typed (`String`, `i64`) so they cannot be
/// rejected; only entity references need a runtime check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractValidationError {
    UnknownAuthor(AuthorId),
    UnknownBook(BookId),
}

impl Display for ContractValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownAuthor(id) => {
                write!(f, "author must be a registered Author, got unknown id {id}")
            }
            Self::UnknownBook(id) => {
                write!(f, "book must be a registered Book, got unknown id {id}")
            }
        }
    }
}

impl Error for ContractValidationError {}

/// One independent field reassignment on an existing contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractChange {
    Author(AuthorId),
    Book(BookId),
    Date(String),
    Royalties(i64),
}

impl ContractChange {
    /// Field name used in log events and error context.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Author(_) => "author",
            Self::Book(_) => "book",
            Self::Date(_) => "date",
            Self::Royalties(_) => "royalties",
        }
    }
}

/// Agreement between one author and one book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    id: ContractId,
    author: AuthorId,
    book: BookId,
    /// Caller-defined text; compared verbatim by date queries.
    date: String,
    royalties: i64,
}

impl Contract {
    /// Builds an unregistered contract value.
    ///
    /// Callers must have validated `author` and `book` against the store
    /// this contract is about to be appended to.
    pub(crate) fn new(author: AuthorId, book: BookId, date: String, royalties: i64) -> Self {
        Self {
            id: ContractId::generate(),
            author,
            book,
            date,
            royalties,
        }
    }

    pub fn id(&self) -> ContractId {
        self.id
    }

    pub fn author(&self) -> AuthorId {
        self.author
    }

    pub fn book(&self) -> BookId {
        self.book
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn royalties(&self) -> i64 {
        self.royalties
    }

    /// Writes one already-validated change.
    pub(crate) fn apply(&mut self, change: ContractChange) {
        match change {
            ContractChange::Author(author) => self.author = author,
            ContractChange::Book(book) => self.book = book,
            ContractChange::Date(date) => self.date = date,
            ContractChange::Royalties(royalties) => self.royalties = royalties,
        }
    }
}

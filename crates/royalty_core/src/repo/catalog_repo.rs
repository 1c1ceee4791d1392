//! Catalog repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Register authors, books and contracts in creation order.
//! - Validate contract references on construction and on every reassignment.
//! - Provide scan-based relationship queries with identity de-duplication.
//!
//! # Invariants
//! - A failed contract write leaves every registry exactly as it was.
//! - Derived author/book lists never contain the same id twice and keep the
//!   order of first occurrence.

use crate::model::author::{Author, AuthorId};
use crate::model::book::{Book, BookId};
use crate::model::contract::{Contract, ContractChange, ContractId, ContractValidationError};
use log::debug;
use std::collections::{HashMap, HashSet};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Error for catalog writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(ContractValidationError),
    NotFound(ContractId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "contract not found: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<ContractValidationError> for RepoError {
    fn from(value: ContractValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Store interface for the author/book/contract graph.
///
/// Implementors provide registries, lookups and the three primitive scans;
/// de-duplicated relationship lists and totals are derived from those.
pub trait CatalogRepository {
    /// Registers a new author. Never fails.
    fn create_author(&mut self, name: &str) -> AuthorId;
    /// Registers a new book. Never fails.
    fn create_book(&mut self, title: &str) -> BookId;
    /// Validates references, then appends a new contract.
    fn create_contract(
        &mut self,
        author: AuthorId,
        book: BookId,
        date: &str,
        royalties: i64,
    ) -> RepoResult<ContractId>;
    /// Validates and applies one field reassignment.
    fn update_contract(&mut self, id: ContractId, change: ContractChange) -> RepoResult<()>;

    fn get_author(&self, id: AuthorId) -> Option<&Author>;
    fn get_book(&self, id: BookId) -> Option<&Book>;
    fn get_contract(&self, id: ContractId) -> Option<&Contract>;

    /// All authors in creation order.
    fn authors(&self) -> &[Author];
    /// All books in creation order.
    fn books(&self) -> &[Book];
    /// All contracts in creation order.
    fn contracts(&self) -> &[Contract];

    /// Contracts whose author is `author`, in registry order.
    fn contracts_for_author(&self, author: AuthorId) -> Vec<&Contract> {
        self.contracts()
            .iter()
            .filter(|contract| contract.author() == author)
            .collect()
    }

    /// Contracts whose book is `book`, in registry order.
    fn contracts_for_book(&self, book: BookId) -> Vec<&Contract> {
        self.contracts()
            .iter()
            .filter(|contract| contract.book() == book)
            .collect()
    }

    /// Contracts whose date equals `date` exactly (case-sensitive).
    fn contracts_by_date(&self, date: &str) -> Vec<&Contract> {
        self.contracts()
            .iter()
            .filter(|contract| contract.date() == date)
            .collect()
    }

    /// Distinct books `author` has contracts for, by first contract.
    fn books_for_author(&self, author: AuthorId) -> Vec<&Book> {
        let mut seen = HashSet::new();
        self.contracts_for_author(author)
            .into_iter()
            .map(Contract::book)
            .filter(|book| seen.insert(*book))
            .filter_map(|book| self.get_book(book))
            .collect()
    }

    /// Distinct authors holding contracts for `book`, by first contract.
    fn authors_for_book(&self, book: BookId) -> Vec<&Author> {
        let mut seen = HashSet::new();
        self.contracts_for_book(book)
            .into_iter()
            .map(Contract::author)
            .filter(|author| seen.insert(*author))
            .filter_map(|author| self.get_author(author))
            .collect()
    }

    /// Sum of royalties over the author's contracts; 0 when there are none.
    fn total_royalties_for_author(&self, author: AuthorId) -> i128 {
        self.contracts_for_author(author)
            .into_iter()
            .map(|contract| i128::from(contract.royalties()))
            .sum()
    }
}

/// Process-local catalog kept entirely in memory.
///
/// Not synchronized; wrap it in a lock to share it across threads.
#[derive(Debug, Default)]
pub struct InMemoryCatalogRepository {
    authors: Vec<Author>,
    books: Vec<Book>,
    contracts: Vec<Contract>,
    author_index: HashMap<AuthorId, usize>,
    book_index: HashMap<BookId, usize>,
    contract_index: HashMap<ContractId, usize>,
}

impl InMemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_author(&self, author: AuthorId) -> Result<(), ContractValidationError> {
        if self.author_index.contains_key(&author) {
            Ok(())
        } else {
            Err(ContractValidationError::UnknownAuthor(author))
        }
    }

    fn ensure_book(&self, book: BookId) -> Result<(), ContractValidationError> {
        if self.book_index.contains_key(&book) {
            Ok(())
        } else {
            Err(ContractValidationError::UnknownBook(book))
        }
    }

    fn validate_change(&self, change: &ContractChange) -> Result<(), ContractValidationError> {
        match change {
            ContractChange::Author(author) => self.ensure_author(*author),
            ContractChange::Book(book) => self.ensure_book(*book),
            ContractChange::Date(_) | ContractChange::Royalties(_) => Ok(()),
        }
    }
}

impl CatalogRepository for InMemoryCatalogRepository {
    fn create_author(&mut self, name: &str) -> AuthorId {
        let author = Author::new(name);
        let id = author.id;
        self.author_index.insert(id, self.authors.len());
        self.authors.push(author);
        debug!(
            "event=author_register module=repo status=ok registry_len={}",
            self.authors.len()
        );
        id
    }

    fn create_book(&mut self, title: &str) -> BookId {
        let book = Book::new(title);
        let id = book.id;
        self.book_index.insert(id, self.books.len());
        self.books.push(book);
        debug!(
            "event=book_register module=repo status=ok registry_len={}",
            self.books.len()
        );
        id
    }

    fn create_contract(
        &mut self,
        author: AuthorId,
        book: BookId,
        date: &str,
        royalties: i64,
    ) -> RepoResult<ContractId> {
        self.ensure_author(author)?;
        self.ensure_book(book)?;

        let contract = Contract::new(author, book, date.to_string(), royalties);
        let id = contract.id();
        self.contract_index.insert(id, self.contracts.len());
        self.contracts.push(contract);
        debug!(
            "event=contract_register module=repo status=ok registry_len={}",
            self.contracts.len()
        );
        Ok(id)
    }

    fn update_contract(&mut self, id: ContractId, change: ContractChange) -> RepoResult<()> {
        let index = *self
            .contract_index
            .get(&id)
            .ok_or(RepoError::NotFound(id))?;
        self.validate_change(&change)?;

        let contract = self
            .contracts
            .get_mut(index)
            .ok_or(RepoError::NotFound(id))?;
        contract.apply(change);
        Ok(())
    }

    fn get_author(&self, id: AuthorId) -> Option<&Author> {
        self.author_index
            .get(&id)
            .and_then(|index| self.authors.get(*index))
    }

    fn get_book(&self, id: BookId) -> Option<&Book> {
        self.book_index
            .get(&id)
            .and_then(|index| self.books.get(*index))
    }

    fn get_contract(&self, id: ContractId) -> Option<&Contract> {
        self.contract_index
            .get(&id)
            .and_then(|index| self.contracts.get(*index))
    }

    fn authors(&self) -> &[Author] {
        &self.authors
    }

    fn books(&self) -> &[Book] {
        &self.books
    }

    fn contracts(&self) -> &[Contract] {
        &self.contracts
    }
}

#[cfg(test)]
mod tests {
    use super::{CatalogRepository, InMemoryCatalogRepository};
    use crate::model::contract::ContractChange;

    #[test]
    fn indexes_track_registry_positions() {
        let mut repo = InMemoryCatalogRepository::new();
        let first = repo.create_author("first");
        let second = repo.create_author("second");

        assert_eq!(repo.author_index[&first], 0);
        assert_eq!(repo.author_index[&second], 1);
        assert_eq!(repo.get_author(second).map(|a| a.name.as_str()), Some("second"));
    }

    #[test]
    fn validate_change_ignores_untyped_fields() {
        let repo = InMemoryCatalogRepository::new();
        assert!(repo
            .validate_change(&ContractChange::Date("whenever".to_string()))
            .is_ok());
        assert!(repo.validate_change(&ContractChange::Royalties(i64::MIN)).is_ok());
    }
}

//! Catalog use-case service.
//!
//! # Responsibility
//! - Provide the author, book and contract entry points callers use.
//! - Delegate storage and validation to a `CatalogRepository`.
//!
//! # Invariants
//! - Service APIs never bypass repository validation.
//! - Errors are logged and returned unchanged; nothing is retried.

use crate::model::author::{Author, AuthorId};
use crate::model::book::{Book, BookId};
use crate::model::contract::{Contract, ContractChange, ContractId};
use crate::repo::catalog_repo::{CatalogRepository, RepoResult};
use log::{info, warn};

/// Use-case service wrapper for the author/book/contract graph.
pub struct CatalogService<R: CatalogRepository> {
    repo: R,
}

impl<R: CatalogRepository> CatalogService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Read access to the underlying registries.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn into_repo(self) -> R {
        self.repo
    }

    // ---- author -------------------------------------------------------

    /// Registers an author and returns its stable id.
    pub fn add_author(&mut self, name: &str) -> AuthorId {
        let id = self.repo.create_author(name);
        info!("event=author_create module=service status=ok author_id={id}");
        id
    }

    /// Contracts signed by `author`, oldest first.
    pub fn author_contracts(&self, author: AuthorId) -> Vec<&Contract> {
        self.repo.contracts_for_author(author)
    }

    /// Distinct books `author` is contracted for, in order of first contract.
    pub fn author_books(&self, author: AuthorId) -> Vec<&Book> {
        self.repo.books_for_author(author)
    }

    /// Creates a contract binding `author` to `book`.
    ///
    /// # Contract
    /// - Same validation as `create_contract`.
    /// - On error no contract is registered.
    pub fn sign_contract(
        &mut self,
        author: AuthorId,
        book: BookId,
        date: &str,
        royalties: i64,
    ) -> RepoResult<ContractId> {
        self.create_contract(author, book, date, royalties)
    }

    /// Sum of royalties across the author's contracts (0 when none).
    pub fn author_total_royalties(&self, author: AuthorId) -> i128 {
        self.repo.total_royalties_for_author(author)
    }

    // ---- book ---------------------------------------------------------

    /// Registers a book and returns its stable id.
    pub fn add_book(&mut self, title: &str) -> BookId {
        let id = self.repo.create_book(title);
        info!("event=book_create module=service status=ok book_id={id}");
        id
    }

    pub fn book_contracts(&self, book: BookId) -> Vec<&Contract> {
        self.repo.contracts_for_book(book)
    }

    /// Distinct authors contracted for `book`, in order of first contract.
    pub fn book_authors(&self, book: BookId) -> Vec<&Author> {
        self.repo.authors_for_book(book)
    }

    // ---- contract -----------------------------------------------------

    /// Validates and registers a new contract.
    ///
    /// # Errors
    /// - `RepoError::Validation` when `author` or `book` is not registered.
    pub fn create_contract(
        &mut self,
        author: AuthorId,
        book: BookId,
        date: &str,
        royalties: i64,
    ) -> RepoResult<ContractId> {
        match self.repo.create_contract(author, book, date, royalties) {
            Ok(id) => {
                info!(
                    "event=contract_create module=service status=ok contract_id={id} author_id={author} book_id={book}"
                );
                Ok(id)
            }
            Err(err) => {
                warn!("event=contract_create module=service status=error error={err}");
                Err(err)
            }
        }
    }

    pub fn set_contract_author(&mut self, id: ContractId, author: AuthorId) -> RepoResult<()> {
        self.update_contract(id, ContractChange::Author(author))
    }

    pub fn set_contract_book(&mut self, id: ContractId, book: BookId) -> RepoResult<()> {
        self.update_contract(id, ContractChange::Book(book))
    }

    pub fn set_contract_date(&mut self, id: ContractId, date: &str) -> RepoResult<()> {
        self.update_contract(id, ContractChange::Date(date.to_string()))
    }

    pub fn set_contract_royalties(&mut self, id: ContractId, royalties: i64) -> RepoResult<()> {
        self.update_contract(id, ContractChange::Royalties(royalties))
    }

    /// Contracts dated exactly `date`, in creation order.
    pub fn contracts_by_date(&self, date: &str) -> Vec<&Contract> {
        self.repo.contracts_by_date(date)
    }

    fn update_contract(&mut self, id: ContractId, change: ContractChange) -> RepoResult<()> {
        let field = change.field();
        match self.repo.update_contract(id, change) {
            Ok(()) => {
                info!(
                    "event=contract_update module=service status=ok contract_id={id} field={field}"
                );
                Ok(())
            }
            Err(err) => {
                warn!(
                    "event=contract_update module=service status=error contract_id={id} field={field} error={err}"
                );
                Err(err)
            }
        }
    }
}

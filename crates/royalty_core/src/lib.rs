//! Core domain logic for author/book royalty contracts.
//!
//! Authors and books are registered independently in a `CatalogRepository`;
//! contracts join them and carry a date and royalty amount. Relationship
//! queries are computed on demand by scanning the contract registry.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig};
pub use model::author::{Author, AuthorId};
pub use model::book::{Book, BookId};
pub use model::contract::{Contract, ContractChange, ContractId, ContractValidationError};
pub use repo::catalog_repo::{CatalogRepository, InMemoryCatalogRepository, RepoError, RepoResult};
pub use service::catalog_service::CatalogService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

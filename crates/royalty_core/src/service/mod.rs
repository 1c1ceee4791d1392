//! Core use-case services.
//!
//! # Responsibility
//! - Expose per-entity operations (author, book, contract) over a repository.
//! - Emit structured log events for every mutation.

pub mod catalog_service;

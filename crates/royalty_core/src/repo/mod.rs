//! Repository layer: the explicit store for authors, books and contracts.
//!
//! # Responsibility
//! - Own the creation-ordered registries of every entity kind.
//! - Answer relationship queries by scanning the contract registry.
//!
//! # Invariants
//! - Registries are append-only; nothing is ever removed.
//! - Contract writes validate every entity reference before mutating.
//! - Query results follow registry (creation) order.

pub mod catalog_repo;

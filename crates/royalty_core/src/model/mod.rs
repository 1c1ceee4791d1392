//! Domain model for the author/book contract graph.
//!
//! # Responsibility
//! - Define the two leaf entities (`Author`, `Book`) and the join entity
//!   (`Contract`) that links them.
//! - Give every entity a typed surrogate id so identity never depends on
//!   names or titles.
//!
//! # Invariants
//! - Ids are generated once at creation and never reused.
//! - A `Contract` only ever refers to entities by id; it never owns them.

pub mod author;
pub mod book;
pub mod contract;

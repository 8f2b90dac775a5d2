//! Repository trait definitions for the domain layer.
//!
//! Traits define the data access contract; concrete implementations live in
//! `crate::infrastructure::persistence`, and mock implementations are
//! auto-generated via `mockall` for unit tests.

pub mod link_repository;

pub use link_repository::LinkRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;

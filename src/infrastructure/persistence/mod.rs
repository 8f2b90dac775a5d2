//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using sqlx with
//! runtime-checked, parameterized queries.

pub mod pg_link_repository;

pub use pg_link_repository::PgLinkRepository;

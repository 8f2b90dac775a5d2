//! Infrastructure layer for external integrations.
//!
//! Implements the interfaces defined by the domain layer, currently a single
//! PostgreSQL persistence backend.

pub mod persistence;

//! Core domain entities.
//!
//! Entities are plain data structures without business logic. Creation input
//! is modeled as a separate struct ([`NewLink`]) so store-owned fields never
//! appear on the write path.

pub mod link;

pub use link::{Link, NewLink};

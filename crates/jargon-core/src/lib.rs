//! Core types and trait definitions for the Jargon glossary.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it.

pub mod entry;
pub mod error;
pub mod hash;
pub mod store;
pub mod tag;

pub use entry::Entry;
pub use error::{Error, Result};
pub use tag::Tag;

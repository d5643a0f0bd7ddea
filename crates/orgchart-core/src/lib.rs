//! Core types, store traits, and services for the org-chart directory.
//!
//! This crate is deliberately free of HTTP and database dependencies. Storage
//! backends implement the traits in [`store`]; the HTTP layer drives the
//! services in [`directory`], [`payroll`], and [`reporting`].

pub mod compensation;
pub mod directory;
pub mod employee;
pub mod error;
pub mod payroll;
pub mod reporting;
pub mod store;

pub use error::{Error, ErrorKind, Result};

#[cfg(test)]
mod tests;

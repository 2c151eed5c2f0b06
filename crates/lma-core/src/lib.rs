//! OpenAPI 3.0 / 3.1 document for the library management API, built from a
//! small set of domain models by naming convention.

pub mod config;
pub mod descriptor;
pub mod dialect;
pub mod document;
pub mod error;
pub mod fragments;
pub mod models;
pub mod naming;
pub mod operations;
pub mod paths;
pub mod refs;
pub mod validate;

pub use dialect::SpecVersion;
pub use document::{DocumentAssembler, Generator, generate};

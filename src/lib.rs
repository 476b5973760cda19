//! Core library for the roster-reconcile command line application.
//!
//! The library exposes the reconciliation stages that power the command-line
//! interface as well as the tests. CSV and output-file adapters live under
//! [`io`], the record representation in [`model`], the matching and
//! de-duplication rules in [`reconcile`], and the end-to-end run in
//! [`pipeline`].

pub mod error;
pub mod io;
pub mod model;
pub mod pipeline;
pub mod reconcile;

pub use error::{Result, ToolError};

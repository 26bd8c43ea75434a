//! Readiness reporter for top PyPI projects.
//!
//! One invocation classifies every project of a static top-projects
//! dataset against one target Python version and prints a single JSON
//! report to stdout. No state survives between runs: metadata is fetched
//! fresh, the report is rebuilt from scratch, and batch runs over several
//! interpreter versions are just that many independent invocations, not
//! shared state.
//!
//! The pipeline is fetch → classify → aggregate:
//!
//! - [`dataset`] loads the rank-ordered project list;
//! - [`runner`] drives the bounded-concurrency fetch/classify loop using
//!   `ready_pypi`;
//! - [`report`] shapes the order-preserving JSON output.

pub mod cli;
pub mod dataset;
pub mod report;
pub mod runner;

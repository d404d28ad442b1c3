//! Weighted frequency histograms over tabular or free-text input.
//!
//! The pipeline runs strictly forward: aggregate the input stream into a
//! key-to-count map, rank the entries by `(count, key)`, plan the column
//! layout for the target terminal width, derive the graph scale, and render
//! one line per entry. Everything is a pure function of a
//! [`HistogramConfig`] plus an input stream; there is no process-wide state.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod fields;
pub mod histogram;
pub mod layout;
pub mod rank;
pub mod render;
pub mod scale;
pub mod snippet;

pub use aggregate::{Aggregation, SkippedRecord};
pub use config::{GraphMode, HistogramConfig, HistogramConfigBuilder};
pub use error::{HistError, Result, WeightError};
pub use histogram::{print_report, run, Report};
pub use rank::Entry;

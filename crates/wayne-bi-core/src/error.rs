//! Error types for the BI core crate

use std::path::PathBuf;
use thiserror::Error;

/// Failure while loading one of the five source datasets.
///
/// Any variant is fatal at startup: the store is all-or-nothing and the
/// service must not come up partially loaded.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read `{name}` dataset from {path}: {source}")]
    Read {
        name: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse `{name}` dataset: {source}")]
    Parse {
        name: &'static str,
        source: csv::Error,
    },
}

/// Failure while computing a report.
///
/// Typed loading removes the missing-column/type-mismatch class of runtime
/// failures, so the remaining representable case is a table with no rows
/// where a reference value must be derived from the data.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("`{0}` dataset has no rows; cannot derive report")]
    EmptyTable(&'static str),
}

//! Application state for the BI API

use std::path::Path;

use wayne_bi_core::{DatasetError, DatasetStore, ReportService};

pub struct AppState {
    pub service: ReportService,
}

impl AppState {
    /// Load the five datasets and build the report service. Any load
    /// failure aborts startup; the API never serves a partial store.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let store = DatasetStore::load(data_dir)?;
        Ok(Self {
            service: ReportService::new(store),
        })
    }
}

//! Core crate for the Wayne Enterprises BI dashboard: the dataset store and
//! the six report builders behind the HTTP API.
//!
//! Everything here is synchronous and pure: datasets are loaded once, never
//! mutated, and every report is recomputed from scratch on each call.

pub mod datasets;
pub mod error;
pub mod reports;

pub use datasets::DatasetStore;
pub use error::{DatasetError, ReportError};
pub use reports::{
    ExecutiveSummary, FinancialOverview, HrAnalytics, RdStatus, SecurityMetrics,
    SupplyChainPerformance,
};

/// Façade over the six report builders.
///
/// Owns the loaded store; safe to share behind an `Arc` since nothing here
/// mutates after construction.
pub struct ReportService {
    store: DatasetStore,
}

impl ReportService {
    pub fn new(store: DatasetStore) -> Self {
        Self { store }
    }

    pub fn executive_summary(&self) -> Result<ExecutiveSummary, ReportError> {
        reports::executive::build(&self.store)
    }

    pub fn financial_overview(&self) -> Result<FinancialOverview, ReportError> {
        reports::financial::build(&self.store)
    }

    pub fn security_metrics(&self) -> Result<SecurityMetrics, ReportError> {
        reports::security::build(&self.store)
    }

    pub fn rd_status(&self) -> Result<RdStatus, ReportError> {
        reports::rd::build(&self.store)
    }

    pub fn supply_chain_performance(&self) -> Result<SupplyChainPerformance, ReportError> {
        reports::supply_chain::build(&self.store)
    }

    pub fn hr_analytics(&self) -> Result<HrAnalytics, ReportError> {
        reports::hr::build(&self.store)
    }
}

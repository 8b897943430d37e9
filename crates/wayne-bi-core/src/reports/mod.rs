//! Report builders: one module per dashboard report.
//!
//! Each builder is a pure pass over the loaded tables — group keys come from
//! the data itself, and every call rebuilds the report from scratch.

pub mod executive;
pub mod financial;
pub mod hr;
pub mod rd;
pub mod security;
pub mod supply_chain;

pub use executive::ExecutiveSummary;
pub use financial::FinancialOverview;
pub use hr::HrAnalytics;
pub use rd::RdStatus;
pub use security::SecurityMetrics;
pub use supply_chain::SupplyChainPerformance;

use chrono::{Datelike, NaiveDate};

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Mean of an iterator of values; 0 for an empty iterator rather than NaN.
pub(crate) fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for v in values {
        sum += v;
        count += 1;
    }
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Distinct keys in first-appearance order.
pub(crate) fn distinct<'a>(keys: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen: Vec<&str> = Vec::new();
    for key in keys {
        if !seen.contains(&key) {
            seen.push(key);
        }
    }
    seen
}

/// Calendar-month bucket key; ordered chronologically.
pub(crate) fn month_key(date: NaiveDate) -> (i32, u32) {
    (date.year(), date.month())
}

pub(crate) fn month_label((year, month): (i32, u32)) -> String {
    format!("{year:04}-{month:02}")
}

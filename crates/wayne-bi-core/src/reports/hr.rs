//! HR analytics: retention, satisfaction trends, diversity and training per
//! department.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{distinct, mean, month_key, month_label, round1, round2};
use crate::datasets::DatasetStore;
use crate::error::ReportError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetentionEntry {
    pub department: String,
    pub retention_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySatisfaction {
    pub month: String,
    pub satisfaction: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SatisfactionTrend {
    pub department: String,
    pub data: Vec<MonthlySatisfaction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiversityEntry {
    pub department: String,
    pub diversity_index: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingEntry {
    pub department: String,
    pub avg_training_hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HrAnalytics {
    pub retention_rates: Vec<RetentionEntry>,
    pub satisfaction_trends: Vec<SatisfactionTrend>,
    pub diversity_metrics: Vec<DiversityEntry>,
    pub training_data: Vec<TrainingEntry>,
}

pub fn build(store: &DatasetStore) -> Result<HrAnalytics, ReportError> {
    let rows = store.hr();
    let departments = distinct(rows.iter().map(|r| r.department.as_str()));

    let mut retention_rates = Vec::with_capacity(departments.len());
    let mut satisfaction_trends = Vec::with_capacity(departments.len());
    let mut diversity_metrics = Vec::with_capacity(departments.len());
    let mut training_data = Vec::with_capacity(departments.len());

    for &department in &departments {
        let dept_rows = || rows.iter().filter(move |r| r.department == department);

        retention_rates.push(RetentionEntry {
            department: department.to_string(),
            retention_rate: round1(mean(dept_rows().map(|r| r.retention_rate_pct))),
        });

        // Monthly mean satisfaction, months ascending.
        let mut by_month: BTreeMap<(i32, u32), Vec<f64>> = BTreeMap::new();
        for r in dept_rows() {
            by_month
                .entry(month_key(r.date))
                .or_default()
                .push(r.employee_satisfaction_score);
        }
        let data = by_month
            .into_iter()
            .map(|(month, scores)| MonthlySatisfaction {
                month: month_label(month),
                satisfaction: round1(mean(scores.into_iter())),
            })
            .collect();
        satisfaction_trends.push(SatisfactionTrend {
            department: department.to_string(),
            data,
        });

        // Diversity index keeps two decimals, finer than the other
        // percentage fields.
        diversity_metrics.push(DiversityEntry {
            department: department.to_string(),
            diversity_index: round2(mean(dept_rows().map(|r| r.diversity_index))),
        });

        training_data.push(TrainingEntry {
            department: department.to_string(),
            avg_training_hours: round1(mean(dept_rows().map(|r| r.training_hours_annual))),
        });
    }

    Ok(HrAnalytics {
        retention_rates,
        satisfaction_trends,
        diversity_metrics,
        training_data,
    })
}

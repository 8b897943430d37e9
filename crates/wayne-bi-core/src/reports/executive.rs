//! Executive summary: headline metrics for the most recent year in the data.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{mean, round1};
use crate::datasets::{DatasetStore, FinancialRecord};
use crate::error::ReportError;

/// Flat headline record for the executive dashboard tile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutiveSummary {
    pub total_revenue: f64,
    pub revenue_growth: f64,
    pub profit_margin: f64,
    pub total_employees: i64,
    pub active_projects: i64,
    pub high_potential_projects: i64,
    pub avg_response_time: f64,
    pub security_incidents: i64,
    pub employee_retention: f64,
    pub employee_satisfaction: f64,
}

pub fn build(store: &DatasetStore) -> Result<ExecutiveSummary, ReportError> {
    let financial = store.financial();

    // Reference year is the latest year present; without one there is
    // nothing to summarize.
    let target_year = financial
        .iter()
        .map(|r| r.year)
        .max()
        .ok_or(ReportError::EmptyTable("financial"))?;

    // Collapse the target year to one row per quarter, keeping the last
    // occurrence in source order.
    let mut latest_per_quarter: Vec<&FinancialRecord> = Vec::new();
    for record in financial.iter().filter(|r| r.year == target_year) {
        match latest_per_quarter
            .iter_mut()
            .find(|slot| slot.quarter == record.quarter)
        {
            Some(slot) => *slot = record,
            None => latest_per_quarter.push(record),
        }
    }

    let total_revenue: f64 = latest_per_quarter.iter().map(|r| r.revenue_m).sum();
    let total_profit: f64 = latest_per_quarter.iter().map(|r| r.net_profit_m).sum();
    let profit_margin = if total_revenue > 0.0 {
        total_profit / total_revenue * 100.0
    } else {
        0.0
    };

    let q4_revenue = |year: i32| -> f64 {
        financial
            .iter()
            .filter(|r| r.year == year && r.quarter == "Q4")
            .map(|r| r.revenue_m)
            .sum()
    };
    let q4_target = q4_revenue(target_year);
    let q4_prior = q4_revenue(target_year - 1);
    let revenue_growth = if q4_prior > 0.0 {
        (q4_target - q4_prior) / q4_prior * 100.0
    } else {
        0.0
    };

    let total_employees = financial
        .iter()
        .filter(|r| r.year == target_year)
        .last()
        .map(|r| r.employee_count)
        .unwrap_or(0);

    // Security and HR metrics look at the back half of the target year.
    let cutoff = NaiveDate::from_ymd_opt(target_year, 6, 1).expect("June 1 is a valid date");

    let recent_security: Vec<_> = store
        .security()
        .iter()
        .filter(|r| r.date >= cutoff)
        .collect();
    let avg_response_time = mean(recent_security.iter().map(|r| r.response_time_minutes));
    let security_incidents: i64 = recent_security.iter().map(|r| r.security_incidents).sum();

    let rd = store.rd();
    let active_projects = rd.iter().filter(|r| r.status == "Active").count() as i64;
    let high_potential_projects = rd
        .iter()
        .filter(|r| {
            matches!(
                r.commercialization_potential.as_str(),
                "High" | "Very High"
            )
        })
        .count() as i64;

    let recent_hr: Vec<_> = store.hr().iter().filter(|r| r.date >= cutoff).collect();
    let employee_retention = mean(recent_hr.iter().map(|r| r.retention_rate_pct));
    let employee_satisfaction = mean(recent_hr.iter().map(|r| r.employee_satisfaction_score));

    Ok(ExecutiveSummary {
        total_revenue: round1(total_revenue),
        revenue_growth: round1(revenue_growth),
        profit_margin: round1(profit_margin),
        total_employees,
        active_projects,
        high_potential_projects,
        avg_response_time: round1(avg_response_time),
        security_incidents,
        employee_retention: round1(employee_retention),
        employee_satisfaction: round1(employee_satisfaction),
    })
}

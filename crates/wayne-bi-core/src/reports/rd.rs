//! R&D portfolio status: status mix, budget utilization, commercialization
//! potential and timeline adherence.

use serde::{Deserialize, Serialize};

use super::{distinct, mean, round1};
use crate::datasets::DatasetStore;
use crate::error::ReportError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetAnalysisEntry {
    pub division: String,
    pub allocated: f64,
    pub spent: f64,
    pub utilization: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PotentialCount {
    pub potential: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineAdherenceEntry {
    pub division: String,
    pub adherence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RdStatus {
    pub project_status: Vec<StatusCount>,
    pub budget_analysis: Vec<BudgetAnalysisEntry>,
    pub commercialization_potential: Vec<PotentialCount>,
    pub timeline_adherence: Vec<TimelineAdherenceEntry>,
}

/// Count occurrences of each distinct value, most frequent first; ties keep
/// first-appearance order (stable sort over a single counting pass).
fn frequency_counts<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, i64)> {
    let mut counts: Vec<(String, i64)> = Vec::new();
    for value in values {
        match counts.iter_mut().find(|(v, _)| v.as_str() == value) {
            Some((_, n)) => *n += 1,
            None => counts.push((value.to_string(), 1)),
        }
    }
    counts.sort_by_key(|&(_, n)| std::cmp::Reverse(n));
    counts
}

pub fn build(store: &DatasetStore) -> Result<RdStatus, ReportError> {
    let rows = store.rd();

    let project_status = frequency_counts(rows.iter().map(|r| r.status.as_str()))
        .into_iter()
        .map(|(status, count)| StatusCount { status, count })
        .collect();

    let divisions = distinct(rows.iter().map(|r| r.division.as_str()));
    let mut budget_analysis = Vec::with_capacity(divisions.len());
    let mut timeline_adherence = Vec::with_capacity(divisions.len());
    for &division in &divisions {
        let mut allocated = 0.0;
        let mut spent = 0.0;
        for r in rows.iter().filter(|r| r.division == division) {
            allocated += r.budget_allocated_m;
            spent += r.budget_spent_m;
        }
        let utilization = if allocated > 0.0 {
            round1(spent / allocated * 100.0)
        } else {
            0.0
        };
        budget_analysis.push(BudgetAnalysisEntry {
            division: division.to_string(),
            allocated,
            spent,
            utilization,
        });

        let adherence = mean(
            rows.iter()
                .filter(|r| r.division == division)
                .map(|r| r.timeline_adherence_pct),
        );
        timeline_adherence.push(TimelineAdherenceEntry {
            division: division.to_string(),
            adherence: round1(adherence),
        });
    }

    let commercialization_potential =
        frequency_counts(rows.iter().map(|r| r.commercialization_potential.as_str()))
            .into_iter()
            .map(|(potential, count)| PotentialCount { potential, count })
            .collect();

    Ok(RdStatus {
        project_status,
        budget_analysis,
        commercialization_potential,
        timeline_adherence,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::testutil::{rd_row, store_with};
    use pretty_assertions::assert_eq;

    #[test]
    fn status_counts_come_out_most_frequent_first() {
        let store = store_with(
            vec![],
            vec![],
            vec![
                rd_row("A", "Completed", "High", 1.0, 1.0, 90.0),
                rd_row("A", "Active", "High", 1.0, 1.0, 90.0),
                rd_row("A", "Active", "High", 1.0, 1.0, 90.0),
                rd_row("B", "Completed", "High", 1.0, 1.0, 90.0),
                rd_row("B", "Active", "High", 1.0, 1.0, 90.0),
            ],
            vec![],
            vec![],
        );

        let status = build(&store).unwrap().project_status;
        assert_eq!(
            status,
            vec![
                StatusCount {
                    status: "Active".to_string(),
                    count: 3
                },
                StatusCount {
                    status: "Completed".to_string(),
                    count: 2
                },
            ]
        );
    }

    #[test]
    fn tied_counts_keep_first_appearance_order() {
        let store = store_with(
            vec![],
            vec![],
            vec![
                rd_row("A", "On Hold", "Medium", 1.0, 1.0, 90.0),
                rd_row("A", "Active", "Medium", 1.0, 1.0, 90.0),
            ],
            vec![],
            vec![],
        );

        let status = build(&store).unwrap().project_status;
        assert_eq!(status[0].status, "On Hold");
        assert_eq!(status[1].status, "Active");
    }

    #[test]
    fn budget_utilization_per_division() {
        let store = store_with(
            vec![],
            vec![],
            vec![
                rd_row("A", "Active", "High", 40.0, 25.0, 90.0),
                rd_row("A", "Active", "High", 10.0, 15.0, 90.0),
                rd_row("B", "Active", "High", 20.0, 5.0, 90.0),
            ],
            vec![],
            vec![],
        );

        let budget = build(&store).unwrap().budget_analysis;
        assert_eq!(budget[0].allocated, 50.0);
        assert_eq!(budget[0].spent, 40.0);
        assert_eq!(budget[0].utilization, 80.0);
        assert_eq!(budget[1].utilization, 25.0);
    }

    #[test]
    fn zero_allocation_yields_zero_utilization() {
        let store = store_with(
            vec![],
            vec![],
            vec![rd_row("A", "Active", "High", 0.0, 5.0, 90.0)],
            vec![],
            vec![],
        );

        let budget = build(&store).unwrap().budget_analysis;
        assert_eq!(budget[0].utilization, 0.0);
    }

    #[test]
    fn timeline_adherence_is_the_division_mean() {
        let store = store_with(
            vec![],
            vec![],
            vec![
                rd_row("A", "Active", "High", 1.0, 1.0, 88.0),
                rd_row("A", "Active", "High", 1.0, 1.0, 94.0),
            ],
            vec![],
            vec![],
        );

        let adherence = build(&store).unwrap().timeline_adherence;
        assert_eq!(adherence[0].adherence, 91.0);
    }

    #[test]
    fn empty_portfolio_yields_empty_collections() {
        let store = store_with(vec![], vec![], vec![], vec![], vec![]);
        let report = build(&store).unwrap();
        assert!(report.project_status.is_empty());
        assert!(report.budget_analysis.is_empty());
        assert!(report.commercialization_potential.is_empty());
        assert!(report.timeline_adherence.is_empty());
    }
}

//! Security metrics: per-district incident trends, response times and the
//! latest safety posture.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{distinct, mean, month_key, month_label, round1};
use crate::datasets::DatasetStore;
use crate::error::ReportError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyIncidents {
    pub month: String,
    pub incidents: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistrictIncidentTrend {
    pub district: String,
    pub data: Vec<MonthlyIncidents>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseTimeEntry {
    pub district: String,
    pub avg_response_time: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyScoreEntry {
    pub district: String,
    pub safety_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechDeploymentEntry {
    pub district: String,
    pub deployments: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityMetrics {
    pub incident_trends: Vec<DistrictIncidentTrend>,
    pub response_times: Vec<ResponseTimeEntry>,
    pub safety_scores: Vec<SafetyScoreEntry>,
    pub tech_deployments: Vec<TechDeploymentEntry>,
}

pub fn build(store: &DatasetStore) -> Result<SecurityMetrics, ReportError> {
    let rows = store.security();
    let districts = distinct(rows.iter().map(|r| r.district.as_str()));

    let mut incident_trends = Vec::with_capacity(districts.len());
    let mut response_times = Vec::with_capacity(districts.len());
    let mut safety_scores = Vec::with_capacity(districts.len());
    let mut tech_deployments = Vec::with_capacity(districts.len());

    for &district in &districts {
        let mut by_month: BTreeMap<(i32, u32), i64> = BTreeMap::new();
        for r in rows.iter().filter(|r| r.district == district) {
            *by_month.entry(month_key(r.date)).or_insert(0) += r.security_incidents;
        }
        let data = by_month
            .into_iter()
            .map(|(month, incidents)| MonthlyIncidents {
                month: month_label(month),
                incidents,
            })
            .collect();
        incident_trends.push(DistrictIncidentTrend {
            district: district.to_string(),
            data,
        });

        let avg = mean(
            rows.iter()
                .filter(|r| r.district == district)
                .map(|r| r.response_time_minutes),
        );
        response_times.push(ResponseTimeEntry {
            district: district.to_string(),
            avg_response_time: round1(avg),
        });

        // Last row in source order, deliberately not max-by-date: the feed
        // appends newest observations at the end.
        if let Some(last) = rows.iter().filter(|r| r.district == district).last() {
            safety_scores.push(SafetyScoreEntry {
                district: district.to_string(),
                safety_score: last.public_safety_score,
            });
            tech_deployments.push(TechDeploymentEntry {
                district: district.to_string(),
                deployments: last.wayne_tech_deployments,
            });
        }
    }

    Ok(SecurityMetrics {
        incident_trends,
        response_times,
        safety_scores,
        tech_deployments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::testutil::{security_row, store_with};
    use pretty_assertions::assert_eq;

    #[test]
    fn incidents_sum_within_calendar_months() {
        let store = store_with(
            vec![],
            vec![
                security_row("2024-02-03", "Downtown", 4, 5.0),
                security_row("2024-01-10", "Downtown", 3, 5.0),
                security_row("2024-02-20", "Downtown", 6, 5.0),
            ],
            vec![],
            vec![],
            vec![],
        );

        let metrics = build(&store).unwrap();
        assert_eq!(
            metrics.incident_trends[0].data,
            vec![
                MonthlyIncidents {
                    month: "2024-01".to_string(),
                    incidents: 3
                },
                MonthlyIncidents {
                    month: "2024-02".to_string(),
                    incidents: 10
                },
            ]
        );
    }

    #[test]
    fn response_time_is_mean_over_all_district_rows() {
        let store = store_with(
            vec![],
            vec![
                security_row("2024-01-01", "Downtown", 1, 4.0),
                security_row("2024-02-01", "Downtown", 1, 6.0),
                security_row("2024-01-01", "The Narrows", 1, 9.0),
            ],
            vec![],
            vec![],
            vec![],
        );

        let metrics = build(&store).unwrap();
        assert_eq!(metrics.response_times[0].avg_response_time, 5.0);
        assert_eq!(metrics.response_times[1].avg_response_time, 9.0);
    }

    #[test]
    fn latest_scores_follow_source_order_not_dates() {
        // Second row is older by date but later in the file; it must win.
        let mut newer = security_row("2024-06-01", "Downtown", 1, 4.0);
        newer.public_safety_score = 8.0;
        newer.wayne_tech_deployments = 5;
        let mut older_but_last = security_row("2024-01-01", "Downtown", 1, 4.0);
        older_but_last.public_safety_score = 6.5;
        older_but_last.wayne_tech_deployments = 2;

        let store = store_with(vec![], vec![newer, older_but_last], vec![], vec![], vec![]);

        let metrics = build(&store).unwrap();
        assert_eq!(metrics.safety_scores[0].safety_score, 6.5);
        assert_eq!(metrics.tech_deployments[0].deployments, 2);
    }

    #[test]
    fn districts_keep_first_appearance_order() {
        let store = store_with(
            vec![],
            vec![
                security_row("2024-01-01", "The Narrows", 1, 4.0),
                security_row("2024-01-01", "Downtown", 1, 4.0),
                security_row("2024-02-01", "The Narrows", 1, 4.0),
            ],
            vec![],
            vec![],
            vec![],
        );

        let metrics = build(&store).unwrap();
        let order: Vec<&str> = metrics
            .incident_trends
            .iter()
            .map(|t| t.district.as_str())
            .collect();
        assert_eq!(order, vec!["The Narrows", "Downtown"]);
    }
}

//! Supply chain performance: production trends, quality, disruptions and
//! sustainability ratings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{distinct, mean, month_key, month_label, round1};
use crate::datasets::DatasetStore;
use crate::error::ReportError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyVolume {
    pub month: String,
    pub volume: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityTrend {
    pub facility: String,
    pub data: Vec<MonthlyVolume>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityScoreEntry {
    pub product_line: String,
    pub quality_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisruptionEntry {
    pub facility: String,
    pub disruptions: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SustainabilityEntry {
    pub facility: String,
    pub product_line: String,
    pub rating: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplyChainPerformance {
    pub production_trends: Vec<FacilityTrend>,
    pub quality_scores: Vec<QualityScoreEntry>,
    pub disruption_analysis: Vec<DisruptionEntry>,
    pub sustainability_ratings: Vec<SustainabilityEntry>,
}

pub fn build(store: &DatasetStore) -> Result<SupplyChainPerformance, ReportError> {
    let rows = store.supply_chain();
    let facilities = distinct(rows.iter().map(|r| r.facility_location.as_str()));

    let mut production_trends = Vec::with_capacity(facilities.len());
    let mut disruption_analysis = Vec::with_capacity(facilities.len());
    for &facility in &facilities {
        let mut by_month: BTreeMap<(i32, u32), i64> = BTreeMap::new();
        let mut disruptions = 0i64;
        for r in rows.iter().filter(|r| r.facility_location == facility) {
            *by_month.entry(month_key(r.date)).or_insert(0) += r.monthly_production_volume;
            disruptions += r.supply_chain_disruptions;
        }
        let data = by_month
            .into_iter()
            .map(|(month, volume)| MonthlyVolume {
                month: month_label(month),
                volume,
            })
            .collect();
        production_trends.push(FacilityTrend {
            facility: facility.to_string(),
            data,
        });
        disruption_analysis.push(DisruptionEntry {
            facility: facility.to_string(),
            disruptions,
        });
    }

    let product_lines = distinct(rows.iter().map(|r| r.product_line.as_str()));
    let mut quality_scores = Vec::with_capacity(product_lines.len());
    for &product_line in &product_lines {
        let avg = mean(
            rows.iter()
                .filter(|r| r.product_line == product_line)
                .map(|r| r.quality_score_pct),
        );
        quality_scores.push(QualityScoreEntry {
            product_line: product_line.to_string(),
            quality_score: round1(avg),
        });
    }

    // Latest rating per (facility, product line) pair, by source order.
    let mut pairs: Vec<(&str, &str)> = Vec::new();
    for r in rows {
        let pair = (r.facility_location.as_str(), r.product_line.as_str());
        if !pairs.contains(&pair) {
            pairs.push(pair);
        }
    }
    let mut sustainability_ratings = Vec::with_capacity(pairs.len());
    for (facility, product_line) in pairs {
        let last = rows
            .iter()
            .filter(|r| r.facility_location == facility && r.product_line == product_line)
            .last();
        if let Some(r) = last {
            sustainability_ratings.push(SustainabilityEntry {
                facility: facility.to_string(),
                product_line: product_line.to_string(),
                rating: r.sustainability_rating.clone(),
            });
        }
    }

    Ok(SupplyChainPerformance {
        production_trends,
        quality_scores,
        disruption_analysis,
        sustainability_ratings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::testutil::{store_with, supply_row};
    use pretty_assertions::assert_eq;

    #[test]
    fn production_volume_sums_within_months() {
        let store = store_with(
            vec![],
            vec![],
            vec![],
            vec![
                supply_row("2024-01-05", "Gotham Plant", "Defense", 100, 98.0, 0, "A"),
                supply_row("2024-01-20", "Gotham Plant", "Defense", 50, 98.0, 0, "A"),
                supply_row("2024-02-05", "Gotham Plant", "Defense", 70, 98.0, 0, "A"),
            ],
            vec![],
        );

        let report = build(&store).unwrap();
        assert_eq!(
            report.production_trends[0].data,
            vec![
                MonthlyVolume {
                    month: "2024-01".to_string(),
                    volume: 150
                },
                MonthlyVolume {
                    month: "2024-02".to_string(),
                    volume: 70
                },
            ]
        );
    }

    #[test]
    fn quality_score_is_mean_per_product_line() {
        let store = store_with(
            vec![],
            vec![],
            vec![],
            vec![
                supply_row("2024-01-01", "Gotham Plant", "Defense", 1, 97.0, 0, "A"),
                supply_row("2024-02-01", "Metropolis Plant", "Defense", 1, 99.0, 0, "A"),
                supply_row("2024-01-01", "Gotham Plant", "Consumer", 1, 90.0, 0, "B"),
            ],
            vec![],
        );

        let report = build(&store).unwrap();
        assert_eq!(report.quality_scores[0].product_line, "Defense");
        assert_eq!(report.quality_scores[0].quality_score, 98.0);
        assert_eq!(report.quality_scores[1].quality_score, 90.0);
    }

    #[test]
    fn disruptions_sum_per_facility() {
        let store = store_with(
            vec![],
            vec![],
            vec![],
            vec![
                supply_row("2024-01-01", "Gotham Plant", "Defense", 1, 97.0, 2, "A"),
                supply_row("2024-02-01", "Gotham Plant", "Defense", 1, 97.0, 3, "A"),
            ],
            vec![],
        );

        let report = build(&store).unwrap();
        assert_eq!(report.disruption_analysis[0].disruptions, 5);
    }

    #[test]
    fn sustainability_rating_takes_last_row_per_pair_in_source_order() {
        // Later row carries an older date; file order must still win.
        let store = store_with(
            vec![],
            vec![],
            vec![],
            vec![
                supply_row("2024-06-01", "Gotham Plant", "Defense", 1, 97.0, 0, "A"),
                supply_row("2024-01-01", "Gotham Plant", "Defense", 1, 97.0, 0, "B+"),
                supply_row("2024-03-01", "Gotham Plant", "Consumer", 1, 97.0, 0, "A-"),
            ],
            vec![],
        );

        let report = build(&store).unwrap();
        assert_eq!(
            report.sustainability_ratings,
            vec![
                SustainabilityEntry {
                    facility: "Gotham Plant".to_string(),
                    product_line: "Defense".to_string(),
                    rating: "B+".to_string()
                },
                SustainabilityEntry {
                    facility: "Gotham Plant".to_string(),
                    product_line: "Consumer".to_string(),
                    rating: "A-".to_string()
                },
            ]
        );
    }
}

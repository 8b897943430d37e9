//! Financial overview: divisional revenue trends, margins, R&D investment
//! and market share.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{distinct, round1};
use crate::datasets::DatasetStore;
use crate::error::ReportError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub period: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DivisionTrend {
    pub division: String,
    pub data: Vec<TrendPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitMargin {
    pub division: String,
    pub margin: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RdInvestmentTrend {
    pub period: String,
    pub investment: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketShareEntry {
    pub division: String,
    pub share: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialOverview {
    pub revenue_trends: Vec<DivisionTrend>,
    pub profit_margins: Vec<ProfitMargin>,
    pub rd_investment_trends: Vec<RdInvestmentTrend>,
    pub market_share: Vec<MarketShareEntry>,
}

pub fn build(store: &DatasetStore) -> Result<FinancialOverview, ReportError> {
    let rows = store.financial();
    let divisions = distinct(rows.iter().map(|r| r.division.as_str()));

    // Revenue summed by (Year, Quarter) per division; BTreeMap iteration
    // gives chronological period order (Q1 < Q2 < Q3 < Q4 lexicographically).
    let mut revenue_trends = Vec::with_capacity(divisions.len());
    for &division in &divisions {
        let mut by_period: BTreeMap<(i32, &str), f64> = BTreeMap::new();
        for r in rows.iter().filter(|r| r.division == division) {
            *by_period.entry((r.year, r.quarter.as_str())).or_insert(0.0) += r.revenue_m;
        }
        let data = by_period
            .into_iter()
            .map(|((year, quarter), value)| TrendPoint {
                period: format!("{year}-{quarter}"),
                value,
            })
            .collect();
        revenue_trends.push(DivisionTrend {
            division: division.to_string(),
            data,
        });
    }

    let mut profit_margins = Vec::with_capacity(divisions.len());
    for &division in &divisions {
        let mut total_revenue = 0.0;
        let mut total_profit = 0.0;
        for r in rows.iter().filter(|r| r.division == division) {
            total_revenue += r.revenue_m;
            total_profit += r.net_profit_m;
        }
        let margin = if total_revenue > 0.0 {
            round1(total_profit / total_revenue * 100.0)
        } else {
            0.0
        };
        profit_margins.push(ProfitMargin {
            division: division.to_string(),
            margin,
        });
    }

    let mut rd_by_period: BTreeMap<(i32, &str), f64> = BTreeMap::new();
    for r in rows {
        *rd_by_period
            .entry((r.year, r.quarter.as_str()))
            .or_insert(0.0) += r.rd_investment_m;
    }
    let rd_investment_trends = rd_by_period
        .into_iter()
        .map(|((year, quarter), investment)| RdInvestmentTrend {
            period: format!("{year}-{quarter}"),
            investment,
        })
        .collect();

    // Last non-missing share per division in source order; a division is
    // omitted only when it never reported one.
    let mut market_share = Vec::new();
    for &division in &divisions {
        let share = rows
            .iter()
            .rev()
            .filter(|r| r.division == division)
            .find_map(|r| r.market_share_pct);
        if let Some(share) = share {
            market_share.push(MarketShareEntry {
                division: division.to_string(),
                share,
            });
        }
    }

    Ok(FinancialOverview {
        revenue_trends,
        profit_margins,
        rd_investment_trends,
        market_share,
    })
}

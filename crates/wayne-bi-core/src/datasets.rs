//! Dataset store: the five source tables, loaded once and immutable after.

use std::fs::File;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;

use crate::error::DatasetError;

/// One quarterly row of divisional financials.
#[derive(Debug, Clone, Deserialize)]
pub struct FinancialRecord {
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Quarter")]
    pub quarter: String,
    #[serde(rename = "Division")]
    pub division: String,
    #[serde(rename = "Revenue_M")]
    pub revenue_m: f64,
    #[serde(rename = "Net_Profit_M")]
    pub net_profit_m: f64,
    #[serde(rename = "RD_Investment_M")]
    pub rd_investment_m: f64,
    #[serde(rename = "Market_Share_Pct")]
    pub market_share_pct: Option<f64>,
    #[serde(rename = "Employee_Count")]
    pub employee_count: i64,
}

/// One dated security-operations row per district.
#[derive(Debug, Clone, Deserialize)]
pub struct SecurityRecord {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "District")]
    pub district: String,
    #[serde(rename = "Security_Incidents")]
    pub security_incidents: i64,
    #[serde(rename = "Response_Time_Minutes")]
    pub response_time_minutes: f64,
    #[serde(rename = "Public_Safety_Score")]
    pub public_safety_score: f64,
    #[serde(rename = "Wayne_Tech_Deployments")]
    pub wayne_tech_deployments: i64,
}

/// One R&D portfolio project.
#[derive(Debug, Clone, Deserialize)]
pub struct RdRecord {
    #[serde(rename = "Project_ID")]
    pub project_id: String,
    #[serde(rename = "Project_Name")]
    pub project_name: String,
    #[serde(rename = "Division")]
    pub division: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Start_Date")]
    pub start_date: NaiveDate,
    #[serde(rename = "Budget_Allocated_M")]
    pub budget_allocated_m: f64,
    #[serde(rename = "Budget_Spent_M")]
    pub budget_spent_m: f64,
    #[serde(rename = "Commercialization_Potential")]
    pub commercialization_potential: String,
    #[serde(rename = "Timeline_Adherence_Pct")]
    pub timeline_adherence_pct: f64,
}

/// One dated supply-chain row per facility and product line.
#[derive(Debug, Clone, Deserialize)]
pub struct SupplyChainRecord {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Facility_Location")]
    pub facility_location: String,
    #[serde(rename = "Product_Line")]
    pub product_line: String,
    #[serde(rename = "Monthly_Production_Volume")]
    pub monthly_production_volume: i64,
    #[serde(rename = "Quality_Score_Pct")]
    pub quality_score_pct: f64,
    #[serde(rename = "Supply_Chain_Disruptions")]
    pub supply_chain_disruptions: i64,
    #[serde(rename = "Sustainability_Rating")]
    pub sustainability_rating: String,
}

/// One dated HR row per department.
#[derive(Debug, Clone, Deserialize)]
pub struct HrRecord {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Department")]
    pub department: String,
    #[serde(rename = "Retention_Rate_Pct")]
    pub retention_rate_pct: f64,
    #[serde(rename = "Employee_Satisfaction_Score")]
    pub employee_satisfaction_score: f64,
    #[serde(rename = "Diversity_Index")]
    pub diversity_index: f64,
    #[serde(rename = "Training_Hours_Annual")]
    pub training_hours_annual: f64,
}

const FINANCIAL_FILE: &str = "wayne_financial_data.csv";
const SECURITY_FILE: &str = "wayne_security_data.csv";
const RD_FILE: &str = "wayne_rd_portfolio.csv";
const SUPPLY_CHAIN_FILE: &str = "wayne_supply_chain.csv";
const HR_FILE: &str = "wayne_hr_analytics.csv";

/// In-memory holder of the five loaded tables.
///
/// Constructed once at process start; rows keep their source file order,
/// which several "most recent" selections depend on.
#[derive(Debug)]
pub struct DatasetStore {
    financial: Vec<FinancialRecord>,
    security: Vec<SecurityRecord>,
    rd: Vec<RdRecord>,
    supply_chain: Vec<SupplyChainRecord>,
    hr: Vec<HrRecord>,
}

impl DatasetStore {
    /// Load all five datasets from `dir`, failing fast on the first
    /// missing file or malformed row.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let dir = dir.as_ref();

        let financial: Vec<FinancialRecord> = load_table(dir, "financial", FINANCIAL_FILE)?;
        let security: Vec<SecurityRecord> = load_table(dir, "security", SECURITY_FILE)?;
        let rd: Vec<RdRecord> = load_table(dir, "rd", RD_FILE)?;
        let supply_chain: Vec<SupplyChainRecord> =
            load_table(dir, "supply_chain", SUPPLY_CHAIN_FILE)?;
        let hr: Vec<HrRecord> = load_table(dir, "hr", HR_FILE)?;

        Ok(Self {
            financial,
            security,
            rd,
            supply_chain,
            hr,
        })
    }

    pub fn financial(&self) -> &[FinancialRecord] {
        &self.financial
    }

    pub fn security(&self) -> &[SecurityRecord] {
        &self.security
    }

    pub fn rd(&self) -> &[RdRecord] {
        &self.rd
    }

    pub fn supply_chain(&self) -> &[SupplyChainRecord] {
        &self.supply_chain
    }

    pub fn hr(&self) -> &[HrRecord] {
        &self.hr
    }
}

fn load_table<T: for<'de> Deserialize<'de>>(
    dir: &Path,
    name: &'static str,
    file_name: &str,
) -> Result<Vec<T>, DatasetError> {
    let path = dir.join(file_name);
    let file = File::open(&path).map_err(|source| DatasetError::Read {
        name,
        path: path.clone(),
        source,
    })?;

    let mut reader = csv::Reader::from_reader(file);
    let rows = reader
        .deserialize()
        .collect::<Result<Vec<T>, csv::Error>>()
        .map_err(|source| DatasetError::Parse { name, source })?;

    info!("Loaded {} data: {} records", name, rows.len());
    Ok(rows)
}

use serde::Serialize;

use super::types::YearRecord;

/// Headline view of a projection: whether retirement income falls short and by how much.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    pub on_track: bool,
    pub shortfall_years: u32,
    pub first_shortfall_age: Option<u32>,
    pub total_shortfall: f64,
    pub fund_at_retirement: Option<f64>,
    pub terminal_fund: f64,
}

impl ProjectionSummary {
    pub fn from_records(records: &[YearRecord], retirement_age: u32) -> Self {
        let short: Vec<&YearRecord> = records
            .iter()
            .filter(|r| r.age >= retirement_age && r.shortfall > 0.0)
            .collect();

        Self {
            on_track: short.is_empty(),
            shortfall_years: short.len() as u32,
            first_shortfall_age: short.first().map(|r| r.age),
            total_shortfall: short.iter().map(|r| r.shortfall).sum(),
            fund_at_retirement: records
                .iter()
                .find(|r| r.age == retirement_age)
                .map(|r| r.total_fund),
            terminal_fund: records.last().map(|r| r.total_fund).unwrap_or(0.0),
        }
    }
}

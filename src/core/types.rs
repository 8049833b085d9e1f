use serde::Serialize;

use super::tax::TaxBand;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    Accumulation,
    DecumulationCapitalOnly,
    DecumulationIncomeFromCapital,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaxFreeCashOption {
    None,
    Full,
    Partial,
    Ufpls,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Fixed planning constants that are not chosen per scenario.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assumptions {
    /// Inflation used only to carry today's state pension forward to state pension age.
    pub state_pension_inflation_rate: f64,
    pub annual_management_charge: f64,
    pub state_pension_age: u32,
    pub state_pension_income_now: f64,
    /// Share of an uncrystallised amount that may be taken tax-free.
    pub tax_free_component: f64,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            state_pension_inflation_rate: 0.02,
            annual_management_charge: 0.01,
            state_pension_age: 65,
            state_pension_income_now: 10_600.20,
            tax_free_component: 0.25,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProjectionInput {
    pub current_age: u32,
    pub retirement_age: u32,
    pub initial_fund: f64,
    pub monthly_contribution: f64,
    pub monthly_employer_contribution: f64,
    pub investment_growth_rate: f64,
    pub salary_growth_rate: f64,
    pub inflation_rate: f64,
    pub target_income: f64,
    pub annual_retirement_income: f64,
    pub include_state_pension: bool,
    pub include_db_pension: bool,
    pub db_pension_income: f64,
    pub db_pension_age: u32,
    pub income_start_age: u32,
    pub income_end_age: u32,
    pub tax_free_cash_option: TaxFreeCashOption,
    pub partial_tax_free_cash_amount: f64,
    pub ufpls_amount: f64,
    pub strategy: Strategy,
    pub immediate_capital_goal: f64,
    pub existing_tfc_withdrawals: f64,
    pub max_age: u32,
    pub tax_bands: Vec<TaxBand>,
    pub assumptions: Assumptions,
}

impl ProjectionInput {
    pub fn annual_contribution(&self) -> f64 {
        (self.monthly_contribution + self.monthly_employer_contribution) * 12.0
    }

    pub fn in_income_window(&self, age: u32) -> bool {
        (self.income_start_age..=self.income_end_age).contains(&age)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearRecord {
    pub age: u32,
    pub uncrystallised_fund: f64,
    pub crystallised_fund: f64,
    pub total_fund: f64,
    pub gross_income: f64,
    pub tax_paid: f64,
    pub net_income: f64,
    pub shortfall: f64,
    /// Part of `gross_income` that was not subject to income tax.
    pub tax_free_income: f64,
    /// Tax-free cash released by crystallising at retirement; paid out but not counted as income.
    pub tax_free_lump_sum: f64,
}

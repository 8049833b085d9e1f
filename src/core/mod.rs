mod engine;
mod fund;
mod life_expectancy;
mod pension_income;
mod standards;
mod strategy;
mod summary;
mod tax;
mod types;

pub use engine::run_projection;
pub use fund::{FundState, UfplsPayment};
pub use life_expectancy::{
    ConfidenceLevel, FALLBACK_AGE, LifeExpectancy, age_at_confidence_level, life_expectancy,
    lookup as lookup_life_expectancy,
};
pub use pension_income::{PensionIncomeProjector, state_pension_at_entitlement};
pub use standards::{Household, LivingStandard, StandardTarget, all_targets};
pub use strategy::CapitalWithdrawal;
pub use summary::ProjectionSummary;
pub use tax::{TaxBand, TaxBandError, TaxRegion, income_tax, validate_bands};
pub use types::{Assumptions, Gender, ProjectionInput, Strategy, TaxFreeCashOption, YearRecord};

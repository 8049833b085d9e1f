use tracing::debug;

use super::fund::FundState;
use super::types::Strategy;

/// Income released by the one-off capital check at the first projected age.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CapitalWithdrawal {
    pub gross: f64,
    pub tax_free: f64,
}

impl Strategy {
    /// Retirement age actually used by the projection. Drawing income from capital with a
    /// year or less to go means retiring now.
    pub fn effective_retirement_age(self, current_age: u32, retirement_age: u32) -> u32 {
        match self {
            Strategy::DecumulationIncomeFromCapital if retirement_age <= current_age + 1 => {
                current_age
            }
            Strategy::Accumulation
            | Strategy::DecumulationCapitalOnly
            | Strategy::DecumulationIncomeFromCapital => retirement_age,
        }
    }

    pub fn contributes_before_retirement(self) -> bool {
        matches!(self, Strategy::Accumulation)
    }

    pub fn applies_retirement_tax_free_cash(self) -> bool {
        matches!(self, Strategy::Accumulation)
    }

    /// Meets `goal` from the fund at the first projected age.
    ///
    /// Capital-only takes the goal from the uncrystallised pool as taxable income. Income from
    /// capital takes it as tax-free cash, limited by the remaining tax-free allowance, and
    /// crystallises alongside it.
    pub fn first_year_withdrawal(
        self,
        goal: f64,
        fund: &mut FundState,
        max_tax_free_cash_available: &mut f64,
    ) -> CapitalWithdrawal {
        if goal <= 0.0 {
            return CapitalWithdrawal::default();
        }

        match self {
            Strategy::Accumulation => CapitalWithdrawal::default(),
            Strategy::DecumulationCapitalOnly => {
                let gross = fund.draw_taxable_capital(goal);
                debug!(goal, gross, "taxable capital withdrawal");
                CapitalWithdrawal {
                    gross,
                    tax_free: 0.0,
                }
            }
            Strategy::DecumulationIncomeFromCapital => {
                let withdrawal = goal
                    .min(*max_tax_free_cash_available)
                    .min(fund.uncrystallised);
                fund.crystallise(withdrawal);
                *max_tax_free_cash_available = (*max_tax_free_cash_available - withdrawal).max(0.0);
                debug!(
                    goal,
                    withdrawal,
                    remaining_allowance = *max_tax_free_cash_available,
                    "tax-free capital withdrawal"
                );
                CapitalWithdrawal {
                    gross: withdrawal,
                    tax_free: withdrawal,
                }
            }
        }
    }
}

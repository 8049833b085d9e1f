use super::types::{Assumptions, ProjectionInput};

/// Passive pension income for any simulated age, recomputed in closed form each year.
#[derive(Debug, Clone, Copy)]
pub struct PensionIncomeProjector {
    state_pension_age: u32,
    state_pension_at_entitlement: f64,
    include_state_pension: bool,
    include_db_pension: bool,
    db_pension_income: f64,
    db_pension_age: u32,
    inflation_rate: f64,
}

impl PensionIncomeProjector {
    pub fn new(input: &ProjectionInput) -> Self {
        Self {
            state_pension_age: input.assumptions.state_pension_age,
            state_pension_at_entitlement: state_pension_at_entitlement(
                &input.assumptions,
                input.current_age,
            ),
            include_state_pension: input.include_state_pension,
            include_db_pension: input.include_db_pension,
            db_pension_income: input.db_pension_income,
            db_pension_age: input.db_pension_age,
            inflation_rate: input.inflation_rate,
        }
    }

    pub fn state_pension(&self, age: u32) -> f64 {
        if !self.include_state_pension || age < self.state_pension_age {
            return 0.0;
        }
        self.state_pension_at_entitlement
            * escalation(self.inflation_rate, age - self.state_pension_age)
    }

    pub fn db_pension(&self, age: u32) -> f64 {
        if !self.include_db_pension || age < self.db_pension_age {
            return 0.0;
        }
        self.db_pension_income * escalation(self.inflation_rate, age - self.db_pension_age)
    }

    pub fn passive_income(&self, age: u32) -> f64 {
        self.state_pension(age) + self.db_pension(age)
    }
}

/// Today's state pension carried forward to state pension age.
///
/// Compounds at the assumption-level inflation rate, not the scenario rate that applies after
/// entitlement. The two probably ought to agree but currently do not.
pub fn state_pension_at_entitlement(assumptions: &Assumptions, current_age: u32) -> f64 {
    if current_age >= assumptions.state_pension_age {
        return assumptions.state_pension_income_now;
    }
    assumptions.state_pension_income_now
        * escalation(
            assumptions.state_pension_inflation_rate,
            assumptions.state_pension_age - current_age,
        )
}

pub(crate) fn escalation(rate: f64, years: u32) -> f64 {
    (1.0 + rate).powi(years as i32)
}

use tracing::{debug, trace};

use super::fund::FundState;
use super::pension_income::{PensionIncomeProjector, escalation};
use super::tax::income_tax;
use super::types::{ProjectionInput, TaxFreeCashOption, YearRecord};

/// Values carried from one simulated age to the next.
#[derive(Debug, Clone, Copy)]
struct RunningState {
    annual_contribution: f64,
    annual_retirement_income_adjusted: f64,
    max_tax_free_cash_available: f64,
}

impl RunningState {
    fn new(input: &ProjectionInput) -> Self {
        let allowance = input.initial_fund * input.assumptions.tax_free_component
            - input.existing_tfc_withdrawals;
        Self {
            annual_contribution: input.annual_contribution(),
            annual_retirement_income_adjusted: input.annual_retirement_income,
            max_tax_free_cash_available: allowance.max(0.0),
        }
    }
}

/// Income paid out during one simulated age.
#[derive(Debug, Clone, Copy, Default)]
struct YearFlows {
    gross_income: f64,
    tax_free_income: f64,
    tax_free_lump_sum: f64,
}

impl YearFlows {
    fn add_taxable(&mut self, amount: f64) {
        self.gross_income += amount;
    }

    fn add_tax_free(&mut self, amount: f64) {
        self.gross_income += amount;
        self.tax_free_income += amount;
    }
}

/// Projects the fund and retirement income for every age from `current_age` to `max_age`
/// inclusive. Pure: identical input always yields identical records.
pub fn run_projection(input: &ProjectionInput) -> Vec<YearRecord> {
    if input.max_age < input.current_age {
        return Vec::new();
    }

    let retirement_age = input
        .strategy
        .effective_retirement_age(input.current_age, input.retirement_age);
    let pensions = PensionIncomeProjector::new(input);
    let mut fund = FundState::new(input.initial_fund);
    let mut state = RunningState::new(input);

    debug!(
        current_age = input.current_age,
        retirement_age,
        max_age = input.max_age,
        strategy = ?input.strategy,
        "starting projection"
    );

    let mut records = Vec::with_capacity((input.max_age - input.current_age + 1) as usize);
    for age in input.current_age..=input.max_age {
        let record = project_year(input, age, retirement_age, &pensions, &mut fund, &mut state);
        trace!(
            age,
            total_fund = record.total_fund,
            net_income = record.net_income,
            shortfall = record.shortfall,
            "projected year"
        );
        records.push(record);
    }
    records
}

fn project_year(
    input: &ProjectionInput,
    age: u32,
    retirement_age: u32,
    pensions: &PensionIncomeProjector,
    fund: &mut FundState,
    state: &mut RunningState,
) -> YearRecord {
    let assumptions = &input.assumptions;
    fund.apply_growth(
        input.investment_growth_rate,
        assumptions.annual_management_charge,
        input.inflation_rate,
    );

    let mut flows = YearFlows::default();
    let retired = age >= retirement_age;

    if !retired && input.strategy.contributes_before_retirement() {
        fund.contribute(state.annual_contribution);
        state.annual_contribution *= 1.0 + input.salary_growth_rate;
    }

    if age == input.current_age {
        let capital = input.strategy.first_year_withdrawal(
            input.immediate_capital_goal,
            fund,
            &mut state.max_tax_free_cash_available,
        );
        flows.add_taxable(capital.gross - capital.tax_free);
        flows.add_tax_free(capital.tax_free);
    }

    if retired {
        apply_retirement_year(input, age, retirement_age, pensions, fund, state, &mut flows);
    }

    let tax_paid = income_tax(flows.gross_income - flows.tax_free_income, &input.tax_bands);
    let net_income = flows.gross_income - tax_paid;
    let shortfall = if retired {
        (input.target_income - net_income).max(0.0)
    } else {
        0.0
    };

    YearRecord {
        age,
        uncrystallised_fund: fund.uncrystallised,
        crystallised_fund: fund.crystallised,
        total_fund: fund.total(),
        gross_income: flows.gross_income,
        tax_paid,
        net_income,
        shortfall,
        tax_free_income: flows.tax_free_income,
        tax_free_lump_sum: flows.tax_free_lump_sum,
    }
}

fn apply_retirement_year(
    input: &ProjectionInput,
    age: u32,
    retirement_age: u32,
    pensions: &PensionIncomeProjector,
    fund: &mut FundState,
    state: &mut RunningState,
    flows: &mut YearFlows,
) {
    let at_retirement = age == retirement_age;
    if at_retirement {
        state.annual_retirement_income_adjusted = input.annual_retirement_income;
    } else {
        state.annual_retirement_income_adjusted *= 1.0 + input.inflation_rate;
    }

    // Regular income is judged against pension and lump-sum income only; a first-year
    // capital withdrawal sits outside it.
    let mut regular = YearFlows::default();
    let mut took_ufpls = false;
    if at_retirement && input.strategy.applies_retirement_tax_free_cash() {
        took_ufpls = apply_tax_free_cash_option(input, age, fund, &mut regular);
    }

    if !took_ufpls {
        regular.add_taxable(pensions.passive_income(age));
    }

    if input.in_income_window(age) {
        draw_regular_income(input, age, retirement_age, fund, state, &mut regular);
    }

    flows.gross_income += regular.gross_income;
    flows.tax_free_income += regular.tax_free_income;
    flows.tax_free_lump_sum += regular.tax_free_lump_sum;
}

/// Applies the chosen tax-free cash option at retirement. Returns whether a UFPLS was paid.
fn apply_tax_free_cash_option(
    input: &ProjectionInput,
    age: u32,
    fund: &mut FundState,
    flows: &mut YearFlows,
) -> bool {
    let component = input.assumptions.tax_free_component;
    match input.tax_free_cash_option {
        TaxFreeCashOption::None => false,
        TaxFreeCashOption::Full => {
            let cash = fund.take_full_tax_free_cash(component);
            flows.tax_free_lump_sum += cash;
            debug!(age, cash, crystallised = fund.crystallised, "full tax-free cash");
            false
        }
        TaxFreeCashOption::Partial => {
            let cash =
                fund.take_partial_tax_free_cash(input.partial_tax_free_cash_amount, component);
            flows.tax_free_lump_sum += cash;
            debug!(
                age,
                requested = input.partial_tax_free_cash_amount,
                cash,
                "partial tax-free cash"
            );
            false
        }
        TaxFreeCashOption::Ufpls => {
            let payment = fund.take_ufpls(input.ufpls_amount, component);
            flows.add_tax_free(payment.tax_free);
            flows.add_taxable(payment.taxable);
            debug!(
                age,
                tax_free = payment.tax_free,
                taxable = payment.taxable,
                "uncrystallised funds pension lump sum"
            );
            true
        }
    }
}

/// Tops income up towards the inflation-adjusted target, tax-free from the uncrystallised pool
/// while any remains, otherwise taxable from the crystallised pool.
fn draw_regular_income(
    input: &ProjectionInput,
    age: u32,
    retirement_age: u32,
    fund: &mut FundState,
    state: &RunningState,
    flows: &mut YearFlows,
) {
    let remaining = (state.annual_retirement_income_adjusted - flows.gross_income).max(0.0);
    let needed = remaining * escalation(input.inflation_rate, age.saturating_sub(retirement_age));

    if fund.uncrystallised > 0.0 && remaining > 0.0 {
        let withdrawal = fund.draw_tax_free(needed);
        flows.add_tax_free(withdrawal);
    } else if fund.crystallised > 0.0 {
        let withdrawal = fund.draw_crystallised(needed);
        flows.add_taxable(withdrawal);
    }
}

use axum::{
    Router,
    extract::{Json, Query},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use clap::{ArgAction, Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

use crate::core::{
    Assumptions, ConfidenceLevel, Gender, Household, LivingStandard, ProjectionInput,
    ProjectionSummary, Strategy, TaxBand, TaxFreeCashOption, TaxRegion, YearRecord,
    age_at_confidence_level, all_targets, life_expectancy, lookup_life_expectancy,
    run_projection, validate_bands,
};

mod error;

pub use error::InputError;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliStrategy {
    Accumulation,
    DecumulationCapitalOnly,
    DecumulationIncomeFromCapital,
}

impl From<CliStrategy> for Strategy {
    fn from(value: CliStrategy) -> Self {
        match value {
            CliStrategy::Accumulation => Strategy::Accumulation,
            CliStrategy::DecumulationCapitalOnly => Strategy::DecumulationCapitalOnly,
            CliStrategy::DecumulationIncomeFromCapital => Strategy::DecumulationIncomeFromCapital,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliTaxFreeCashOption {
    None,
    Full,
    Partial,
    Ufpls,
}

impl From<CliTaxFreeCashOption> for TaxFreeCashOption {
    fn from(value: CliTaxFreeCashOption) -> Self {
        match value {
            CliTaxFreeCashOption::None => TaxFreeCashOption::None,
            CliTaxFreeCashOption::Full => TaxFreeCashOption::Full,
            CliTaxFreeCashOption::Partial => TaxFreeCashOption::Partial,
            CliTaxFreeCashOption::Ufpls => TaxFreeCashOption::Ufpls,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliGender {
    Male,
    Female,
}

impl From<CliGender> for Gender {
    fn from(value: CliGender) -> Self {
        match value {
            CliGender::Male => Gender::Male,
            CliGender::Female => Gender::Female,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliTaxRegion {
    England,
    Scotland,
}

impl From<CliTaxRegion> for TaxRegion {
    fn from(value: CliTaxRegion) -> Self {
        match value {
            CliTaxRegion::England => TaxRegion::England,
            CliTaxRegion::Scotland => TaxRegion::Scotland,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliLivingStandard {
    Minimum,
    Moderate,
    Comfortable,
}

impl From<CliLivingStandard> for LivingStandard {
    fn from(value: CliLivingStandard) -> Self {
        match value {
            CliLivingStandard::Minimum => LivingStandard::Minimum,
            CliLivingStandard::Moderate => LivingStandard::Moderate,
            CliLivingStandard::Comfortable => LivingStandard::Comfortable,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliHousehold {
    Single,
    Couple,
}

impl From<CliHousehold> for Household {
    fn from(value: CliHousehold) -> Self {
        match value {
            CliHousehold::Single => Household::Single,
            CliHousehold::Couple => Household::Couple,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum ApiStrategy {
    Accumulation,
    #[serde(
        alias = "decumulationCapitalOnly",
        alias = "capital-only",
        alias = "capitalOnly"
    )]
    DecumulationCapitalOnly,
    #[serde(
        alias = "decumulationIncomeFromCapital",
        alias = "income-from-capital",
        alias = "incomeFromCapital"
    )]
    DecumulationIncomeFromCapital,
}

impl From<ApiStrategy> for CliStrategy {
    fn from(value: ApiStrategy) -> Self {
        match value {
            ApiStrategy::Accumulation => CliStrategy::Accumulation,
            ApiStrategy::DecumulationCapitalOnly => CliStrategy::DecumulationCapitalOnly,
            ApiStrategy::DecumulationIncomeFromCapital => {
                CliStrategy::DecumulationIncomeFromCapital
            }
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum ApiTaxFreeCashOption {
    #[serde(alias = "no")]
    None,
    Full,
    Partial,
    #[serde(alias = "UFPLS")]
    Ufpls,
}

impl From<ApiTaxFreeCashOption> for CliTaxFreeCashOption {
    fn from(value: ApiTaxFreeCashOption) -> Self {
        match value {
            ApiTaxFreeCashOption::None => CliTaxFreeCashOption::None,
            ApiTaxFreeCashOption::Full => CliTaxFreeCashOption::Full,
            ApiTaxFreeCashOption::Partial => CliTaxFreeCashOption::Partial,
            ApiTaxFreeCashOption::Ufpls => CliTaxFreeCashOption::Ufpls,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ApiGender {
    #[serde(alias = "Male", alias = "m")]
    Male,
    #[serde(alias = "Female", alias = "f")]
    Female,
}

impl From<ApiGender> for CliGender {
    fn from(value: ApiGender) -> Self {
        match value {
            ApiGender::Male => CliGender::Male,
            ApiGender::Female => CliGender::Female,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ApiTaxRegion {
    #[serde(alias = "England", alias = "rest-of-uk")]
    England,
    #[serde(alias = "Scotland")]
    Scotland,
}

impl From<ApiTaxRegion> for CliTaxRegion {
    fn from(value: ApiTaxRegion) -> Self {
        match value {
            ApiTaxRegion::England => CliTaxRegion::England,
            ApiTaxRegion::Scotland => CliTaxRegion::Scotland,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ApiLivingStandard {
    Minimum,
    Moderate,
    Comfortable,
}

impl From<ApiLivingStandard> for CliLivingStandard {
    fn from(value: ApiLivingStandard) -> Self {
        match value {
            ApiLivingStandard::Minimum => CliLivingStandard::Minimum,
            ApiLivingStandard::Moderate => CliLivingStandard::Moderate,
            ApiLivingStandard::Comfortable => CliLivingStandard::Comfortable,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ApiHousehold {
    Single,
    Couple,
}

impl From<ApiHousehold> for CliHousehold {
    fn from(value: ApiHousehold) -> Self {
        match value {
            ApiHousehold::Single => CliHousehold::Single,
            ApiHousehold::Couple => CliHousehold::Couple,
        }
    }
}

/// Tax band as sent over the API: rate in percent, `null` threshold for the open top band.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
struct ApiTaxBand {
    threshold: Option<f64>,
    rate: f64,
}

impl From<ApiTaxBand> for TaxBand {
    fn from(value: ApiTaxBand) -> Self {
        TaxBand::new(
            value.threshold.unwrap_or(f64::INFINITY),
            value.rate / 100.0,
        )
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ProjectPayload {
    current_age: Option<u32>,
    retirement_age: Option<u32>,
    max_age: Option<u32>,
    gender: Option<ApiGender>,
    strategy: Option<ApiStrategy>,

    initial_fund: Option<f64>,
    monthly_contribution: Option<f64>,
    monthly_employer_contribution: Option<f64>,
    investment_growth_rate: Option<f64>,
    salary_growth_rate: Option<f64>,
    inflation_rate: Option<f64>,

    target_income: Option<f64>,
    essential_expenditure: Option<f64>,
    discretionary_expenditure: Option<f64>,
    living_standard: Option<ApiLivingStandard>,
    household: Option<ApiHousehold>,
    london: Option<bool>,
    annual_retirement_income: Option<f64>,
    income_start_age: Option<u32>,
    income_end_age: Option<u32>,

    include_state_pension: Option<bool>,
    include_db_pension: Option<bool>,
    db_pension_income: Option<f64>,
    db_pension_age: Option<u32>,

    tax_free_cash_option: Option<ApiTaxFreeCashOption>,
    partial_tax_free_cash_amount: Option<f64>,
    ufpls_amount: Option<f64>,
    immediate_capital_goal: Option<f64>,
    existing_tfc_withdrawals: Option<f64>,

    tax_region: Option<ApiTaxRegion>,
    tax_bands: Option<Vec<ApiTaxBand>>,

    state_pension_age: Option<u32>,
    state_pension_income: Option<f64>,
    state_pension_inflation_rate: Option<f64>,
    annual_management_charge: Option<f64>,
    tax_free_component: Option<f64>,
}

#[derive(Parser, Debug)]
#[command(
    name = "drawdown",
    about = "UK defined-contribution pension projection (accumulation and drawdown, tax-free cash, income tax)"
)]
struct Cli {
    #[arg(long, help = "Age today, between 55 and 100")]
    current_age: u32,
    #[arg(long)]
    retirement_age: u32,
    #[arg(
        long,
        help = "Last projected age; defaults to the age with a one-in-four chance of being reached"
    )]
    max_age: Option<u32>,
    #[arg(long, value_enum, default_value_t = CliGender::Male)]
    gender: CliGender,
    #[arg(long, value_enum, default_value_t = CliStrategy::Accumulation)]
    strategy: CliStrategy,

    #[arg(long, help = "Uncrystallised pension pot today")]
    initial_fund: f64,
    #[arg(long, default_value_t = 0.0)]
    monthly_contribution: f64,
    #[arg(long, default_value_t = 0.0)]
    monthly_employer_contribution: f64,
    #[arg(
        long,
        default_value_t = 5.0,
        help = "Expected annual investment growth in percent"
    )]
    investment_growth_rate: f64,
    #[arg(
        long,
        default_value_t = 0.0,
        help = "Annual growth of contributions in percent"
    )]
    salary_growth_rate: f64,
    #[arg(
        long,
        default_value_t = 2.0,
        help = "Expected annual inflation in percent"
    )]
    inflation_rate: f64,

    #[arg(long, help = "Annual income target in today's money")]
    target_income: Option<f64>,
    #[arg(
        long,
        help = "Essential annual spending; with discretionary spending, replaces --target-income"
    )]
    essential_expenditure: Option<f64>,
    #[arg(long)]
    discretionary_expenditure: Option<f64>,
    #[arg(
        long,
        value_enum,
        default_value_t = CliLivingStandard::Moderate,
        help = "Living standard used for the target when no income or spending is given"
    )]
    living_standard: CliLivingStandard,
    #[arg(long, value_enum, default_value_t = CliHousehold::Single)]
    household: CliHousehold,
    #[arg(long)]
    london: bool,
    #[arg(
        long,
        help = "Income drawn from the pension each year; defaults to the target income"
    )]
    annual_retirement_income: Option<f64>,
    #[arg(long, help = "First age of regular drawdown; defaults to --retirement-age")]
    income_start_age: Option<u32>,
    #[arg(long, help = "Last age of regular drawdown; defaults to the last projected age")]
    income_end_age: Option<u32>,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    include_state_pension: bool,
    #[arg(long)]
    include_db_pension: bool,
    #[arg(long, default_value_t = 0.0, help = "Defined benefit pension in today's money")]
    db_pension_income: f64,
    #[arg(long, help = "Age the DB pension starts; defaults to --retirement-age")]
    db_pension_age: Option<u32>,

    #[arg(long, value_enum, default_value_t = CliTaxFreeCashOption::None)]
    tax_free_cash_option: CliTaxFreeCashOption,
    #[arg(long, default_value_t = 0.0)]
    partial_tax_free_cash_amount: f64,
    #[arg(long, default_value_t = 0.0)]
    ufpls_amount: f64,
    #[arg(
        long,
        default_value_t = 0.0,
        help = "One-off withdrawal at the current age (decumulation strategies only)"
    )]
    immediate_capital_goal: f64,
    #[arg(long, default_value_t = 0.0, help = "Tax-free cash already taken")]
    existing_tfc_withdrawals: f64,

    #[arg(long, value_enum, default_value_t = CliTaxRegion::England)]
    tax_region: CliTaxRegion,
    #[arg(skip)]
    tax_bands: Option<Vec<TaxBand>>,

    #[arg(long, default_value_t = 65)]
    state_pension_age: u32,
    #[arg(
        long,
        default_value_t = 10_600.20,
        help = "Annual state pension in today's money"
    )]
    state_pension_income: f64,
    #[arg(
        long,
        default_value_t = 2.0,
        help = "Inflation used to carry the state pension to state pension age, in percent"
    )]
    state_pension_inflation_rate: f64,
    #[arg(long, default_value_t = 1.0, help = "Annual management charge in percent")]
    annual_management_charge: f64,
    #[arg(
        long,
        default_value_t = 25.0,
        help = "Tax-free share of uncrystallised funds in percent"
    )]
    tax_free_component: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    strategy: Strategy,
    retirement_age: u32,
    max_age: u32,
    target_income: f64,
    tax_free_cash_option: TaxFreeCashOption,
    summary: ProjectionSummary,
    years: Vec<YearRecord>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct LifeExpectancyQuery {
    gender: Option<ApiGender>,
    current_age: Option<u32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LifeExpectancyResponse {
    gender: Gender,
    current_age: u32,
    average: u32,
    one_in_four: u32,
    one_in_ten: u32,
    from_table: bool,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

/// Upper bound on any age a projection may run to.
const MAX_PROJECTION_AGE: u32 = 120;

/// Upper bound, in percent, for growth, inflation and charge rates.
const MAX_ANNUAL_RATE: f64 = 10.0;

fn build_inputs(cli: Cli) -> Result<ProjectionInput, InputError> {
    if !(55..=100).contains(&cli.current_age) {
        return Err(InputError::invalid("--current-age", "between 55 and 100"));
    }

    if cli.retirement_age > 100 {
        return Err(InputError::invalid("--retirement-age", "<= 100"));
    }

    let strategy = Strategy::from(cli.strategy);
    match strategy {
        Strategy::Accumulation if cli.retirement_age <= cli.current_age => {
            return Err(InputError::invalid(
                "--retirement-age",
                "> --current-age when accumulating",
            ));
        }
        Strategy::DecumulationCapitalOnly | Strategy::DecumulationIncomeFromCapital
            if cli.retirement_age < cli.current_age =>
        {
            return Err(InputError::invalid(
                "--retirement-age",
                ">= --current-age when drawing down",
            ));
        }
        _ => {}
    }

    for (flag, amount) in [
        ("--initial-fund", cli.initial_fund),
        ("--monthly-contribution", cli.monthly_contribution),
        (
            "--monthly-employer-contribution",
            cli.monthly_employer_contribution,
        ),
        ("--db-pension-income", cli.db_pension_income),
        (
            "--partial-tax-free-cash-amount",
            cli.partial_tax_free_cash_amount,
        ),
        ("--ufpls-amount", cli.ufpls_amount),
        ("--immediate-capital-goal", cli.immediate_capital_goal),
        ("--existing-tfc-withdrawals", cli.existing_tfc_withdrawals),
        ("--state-pension-income", cli.state_pension_income),
    ] {
        if !amount.is_finite() || amount < 0.0 {
            return Err(InputError::invalid(flag, ">= 0"));
        }
    }

    for (flag, amount) in [
        ("--target-income", cli.target_income),
        ("--essential-expenditure", cli.essential_expenditure),
        ("--discretionary-expenditure", cli.discretionary_expenditure),
        ("--annual-retirement-income", cli.annual_retirement_income),
    ] {
        if amount.is_some_and(|v| !v.is_finite() || v < 0.0) {
            return Err(InputError::invalid(flag, ">= 0"));
        }
    }

    // Keeps the yearly growth factor 1 + growth - charge - inflation positive.
    for (flag, rate) in [
        ("--investment-growth-rate", cli.investment_growth_rate),
        ("--salary-growth-rate", cli.salary_growth_rate),
        ("--inflation-rate", cli.inflation_rate),
        (
            "--state-pension-inflation-rate",
            cli.state_pension_inflation_rate,
        ),
        ("--annual-management-charge", cli.annual_management_charge),
    ] {
        if !(0.0..=MAX_ANNUAL_RATE).contains(&rate) {
            return Err(InputError::invalid(
                flag,
                format!("between 0 and {MAX_ANNUAL_RATE}"),
            ));
        }
    }

    if !(0.0..=100.0).contains(&cli.tax_free_component) {
        return Err(InputError::invalid(
            "--tax-free-component",
            "between 0 and 100",
        ));
    }

    for (flag, age) in [
        ("--max-age", cli.max_age),
        ("--income-start-age", cli.income_start_age),
        ("--income-end-age", cli.income_end_age),
        ("--db-pension-age", cli.db_pension_age),
        ("--state-pension-age", Some(cli.state_pension_age)),
    ] {
        if age.is_some_and(|a| a > MAX_PROJECTION_AGE) {
            return Err(InputError::invalid(
                flag,
                format!("<= {MAX_PROJECTION_AGE}"),
            ));
        }
    }

    let gender = Gender::from(cli.gender);
    let max_age = cli
        .max_age
        .unwrap_or_else(|| age_at_confidence_level(gender, cli.current_age));
    if max_age < cli.current_age {
        return Err(InputError::invalid("--max-age", ">= --current-age"));
    }

    let income_start_age = cli.income_start_age.unwrap_or(cli.retirement_age);
    if income_start_age < cli.retirement_age {
        return Err(InputError::invalid(
            "--income-start-age",
            ">= --retirement-age",
        ));
    }

    let income_end_age = cli
        .income_end_age
        .unwrap_or_else(|| max_age.max(income_start_age));
    if income_end_age < income_start_age {
        return Err(InputError::invalid(
            "--income-end-age",
            ">= --income-start-age",
        ));
    }

    let db_pension_age = cli.db_pension_age.unwrap_or(cli.retirement_age);
    if cli.include_db_pension && db_pension_age < cli.retirement_age {
        return Err(InputError::invalid("--db-pension-age", ">= --retirement-age"));
    }

    let (monthly_contribution, monthly_employer_contribution) =
        if strategy.contributes_before_retirement() {
            (cli.monthly_contribution, cli.monthly_employer_contribution)
        } else {
            (0.0, 0.0)
        };

    let tax_free_cash_option = if strategy.applies_retirement_tax_free_cash() {
        TaxFreeCashOption::from(cli.tax_free_cash_option)
    } else {
        TaxFreeCashOption::None
    };
    match tax_free_cash_option {
        TaxFreeCashOption::Partial if cli.partial_tax_free_cash_amount <= 0.0 => {
            return Err(InputError::invalid(
                "--partial-tax-free-cash-amount",
                "> 0 when --tax-free-cash-option=partial",
            ));
        }
        TaxFreeCashOption::Ufpls if cli.ufpls_amount <= 0.0 => {
            return Err(InputError::invalid(
                "--ufpls-amount",
                "> 0 when --tax-free-cash-option=ufpls",
            ));
        }
        _ => {}
    }

    let immediate_capital_goal = match strategy {
        Strategy::Accumulation => 0.0,
        Strategy::DecumulationCapitalOnly | Strategy::DecumulationIncomeFromCapital => {
            cli.immediate_capital_goal
        }
    };

    let target_income = resolve_target_income(&cli);
    let annual_retirement_income = cli.annual_retirement_income.unwrap_or(target_income);

    let tax_bands = cli
        .tax_bands
        .unwrap_or_else(|| TaxRegion::from(cli.tax_region).bands());
    validate_bands(&tax_bands)?;

    Ok(ProjectionInput {
        current_age: cli.current_age,
        retirement_age: cli.retirement_age,
        initial_fund: cli.initial_fund,
        monthly_contribution,
        monthly_employer_contribution,
        investment_growth_rate: cli.investment_growth_rate / 100.0,
        salary_growth_rate: cli.salary_growth_rate / 100.0,
        inflation_rate: cli.inflation_rate / 100.0,
        target_income,
        annual_retirement_income,
        include_state_pension: cli.include_state_pension,
        include_db_pension: cli.include_db_pension,
        db_pension_income: cli.db_pension_income,
        db_pension_age,
        income_start_age,
        income_end_age,
        tax_free_cash_option,
        partial_tax_free_cash_amount: cli.partial_tax_free_cash_amount,
        ufpls_amount: cli.ufpls_amount,
        strategy,
        immediate_capital_goal,
        existing_tfc_withdrawals: cli.existing_tfc_withdrawals,
        max_age,
        tax_bands,
        assumptions: Assumptions {
            state_pension_inflation_rate: cli.state_pension_inflation_rate / 100.0,
            annual_management_charge: cli.annual_management_charge / 100.0,
            state_pension_age: cli.state_pension_age,
            state_pension_income_now: cli.state_pension_income,
            tax_free_component: cli.tax_free_component / 100.0,
        },
    })
}

/// Explicit target first, then the sum of stated spending, then the living-standard table.
fn resolve_target_income(cli: &Cli) -> f64 {
    if let Some(target) = cli.target_income {
        return target;
    }
    match (cli.essential_expenditure, cli.discretionary_expenditure) {
        (None, None) => LivingStandard::from(cli.living_standard)
            .target_income(cli.household.into(), cli.london),
        (essential, discretionary) => essential.unwrap_or(0.0) + discretionary.unwrap_or(0.0),
    }
}

fn build_project_response(inputs: &ProjectionInput) -> ProjectResponse {
    let retirement_age = inputs
        .strategy
        .effective_retirement_age(inputs.current_age, inputs.retirement_age);
    let years = run_projection(inputs);
    let summary = ProjectionSummary::from_records(&years, retirement_age);

    ProjectResponse {
        strategy: inputs.strategy,
        retirement_age,
        max_age: inputs.max_age,
        target_income: inputs.target_income,
        tax_free_cash_option: inputs.tax_free_cash_option,
        summary,
        years,
    }
}

/// Parses `project` command-line flags and runs one projection. Exits on malformed flags the
/// same way any clap binary does.
pub fn run_cli_projection<I, T>(args: I) -> Result<ProjectResponse, InputError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let inputs = build_inputs(Cli::parse_from(args))?;
    Ok(build_project_response(&inputs))
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = Router::new()
        .route(
            "/api/project",
            get(project_get_handler).post(project_post_handler),
        )
        .route("/api/life-expectancy", get(life_expectancy_handler))
        .route("/api/living-standards", get(living_standards_handler))
        .fallback(not_found_handler);

    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "pension projection API listening");

    axum::serve(listener, app).await
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn project_get_handler(Query(payload): Query<ProjectPayload>) -> Response {
    project_handler_impl(payload).await
}

async fn project_post_handler(Json(payload): Json<ProjectPayload>) -> Response {
    project_handler_impl(payload).await
}

async fn project_handler_impl(payload: ProjectPayload) -> Response {
    let inputs = match api_request_from_payload(payload) {
        Ok(inputs) => inputs,
        Err(err) => return error_response(StatusCode::BAD_REQUEST, &err.to_string()),
    };

    let response = build_project_response(&inputs);
    info!(
        strategy = ?response.strategy,
        retirement_age = response.retirement_age,
        max_age = response.max_age,
        on_track = response.summary.on_track,
        "projection served"
    );
    json_response(StatusCode::OK, response)
}

async fn life_expectancy_handler(Query(query): Query<LifeExpectancyQuery>) -> Response {
    match life_expectancy_response(query) {
        Ok(body) => json_response(StatusCode::OK, body),
        Err(err) => error_response(StatusCode::BAD_REQUEST, &err.to_string()),
    }
}

async fn living_standards_handler() -> Response {
    json_response(StatusCode::OK, all_targets())
}

fn life_expectancy_response(
    query: LifeExpectancyQuery,
) -> Result<LifeExpectancyResponse, InputError> {
    let gender = Gender::from(CliGender::from(
        query.gender.ok_or(InputError::Missing("gender"))?,
    ));
    let current_age = query
        .current_age
        .ok_or(InputError::Missing("currentAge"))?;

    Ok(LifeExpectancyResponse {
        gender,
        current_age,
        average: life_expectancy(gender, current_age, ConfidenceLevel::Average),
        one_in_four: life_expectancy(gender, current_age, ConfidenceLevel::OneInFour),
        one_in_ten: life_expectancy(gender, current_age, ConfidenceLevel::OneInTen),
        from_table: lookup_life_expectancy(gender, current_age).is_some(),
    })
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

#[cfg(test)]
fn api_request_from_json(json: &str) -> Result<ProjectionInput, String> {
    let payload = serde_json::from_str::<ProjectPayload>(json)
        .map_err(|e| format!("Invalid API JSON payload: {e}"))?;
    api_request_from_payload(payload).map_err(|e| e.to_string())
}

fn api_request_from_payload(payload: ProjectPayload) -> Result<ProjectionInput, InputError> {
    let mut cli = default_cli_for_api();

    if let Some(v) = payload.current_age {
        cli.current_age = v;
    }
    if let Some(v) = payload.retirement_age {
        cli.retirement_age = v;
    }
    if payload.max_age.is_some() {
        cli.max_age = payload.max_age;
    }
    if let Some(v) = payload.gender {
        cli.gender = v.into();
    }
    if let Some(v) = payload.strategy {
        cli.strategy = v.into();
    }

    if let Some(v) = payload.initial_fund {
        cli.initial_fund = v;
    }
    if let Some(v) = payload.monthly_contribution {
        cli.monthly_contribution = v;
    }
    if let Some(v) = payload.monthly_employer_contribution {
        cli.monthly_employer_contribution = v;
    }
    if let Some(v) = payload.investment_growth_rate {
        cli.investment_growth_rate = v;
    }
    if let Some(v) = payload.salary_growth_rate {
        cli.salary_growth_rate = v;
    }
    if let Some(v) = payload.inflation_rate {
        cli.inflation_rate = v;
    }

    if payload.target_income.is_some() {
        cli.target_income = payload.target_income;
    }
    if payload.essential_expenditure.is_some() {
        cli.essential_expenditure = payload.essential_expenditure;
    }
    if payload.discretionary_expenditure.is_some() {
        cli.discretionary_expenditure = payload.discretionary_expenditure;
    }
    if let Some(v) = payload.living_standard {
        cli.living_standard = v.into();
    }
    if let Some(v) = payload.household {
        cli.household = v.into();
    }
    if let Some(v) = payload.london {
        cli.london = v;
    }
    if payload.annual_retirement_income.is_some() {
        cli.annual_retirement_income = payload.annual_retirement_income;
    }
    if payload.income_start_age.is_some() {
        cli.income_start_age = payload.income_start_age;
    }
    if payload.income_end_age.is_some() {
        cli.income_end_age = payload.income_end_age;
    }

    if let Some(v) = payload.include_state_pension {
        cli.include_state_pension = v;
    }
    if let Some(v) = payload.include_db_pension {
        cli.include_db_pension = v;
    }
    if let Some(v) = payload.db_pension_income {
        cli.db_pension_income = v;
    }
    if payload.db_pension_age.is_some() {
        cli.db_pension_age = payload.db_pension_age;
    }

    if let Some(v) = payload.tax_free_cash_option {
        cli.tax_free_cash_option = v.into();
    }
    if let Some(v) = payload.partial_tax_free_cash_amount {
        cli.partial_tax_free_cash_amount = v;
    }
    if let Some(v) = payload.ufpls_amount {
        cli.ufpls_amount = v;
    }
    if let Some(v) = payload.immediate_capital_goal {
        cli.immediate_capital_goal = v;
    }
    if let Some(v) = payload.existing_tfc_withdrawals {
        cli.existing_tfc_withdrawals = v;
    }

    if let Some(v) = payload.tax_region {
        cli.tax_region = v.into();
    }
    if let Some(bands) = payload.tax_bands {
        cli.tax_bands = Some(bands.into_iter().map(TaxBand::from).collect());
    }

    if let Some(v) = payload.state_pension_age {
        cli.state_pension_age = v;
    }
    if let Some(v) = payload.state_pension_income {
        cli.state_pension_income = v;
    }
    if let Some(v) = payload.state_pension_inflation_rate {
        cli.state_pension_inflation_rate = v;
    }
    if let Some(v) = payload.annual_management_charge {
        cli.annual_management_charge = v;
    }
    if let Some(v) = payload.tax_free_component {
        cli.tax_free_component = v;
    }

    build_inputs(cli)
}

fn default_cli_for_api() -> Cli {
    Cli {
        current_age: 55,
        retirement_age: 65,
        max_age: None,
        gender: CliGender::Male,
        strategy: CliStrategy::Accumulation,
        initial_fund: 100_000.0,
        monthly_contribution: 500.0,
        monthly_employer_contribution: 250.0,
        investment_growth_rate: 5.0,
        salary_growth_rate: 0.0,
        inflation_rate: 2.0,
        target_income: None,
        essential_expenditure: None,
        discretionary_expenditure: None,
        living_standard: CliLivingStandard::Moderate,
        household: CliHousehold::Single,
        london: false,
        annual_retirement_income: None,
        income_start_age: None,
        income_end_age: None,
        include_state_pension: true,
        include_db_pension: false,
        db_pension_income: 0.0,
        db_pension_age: None,
        tax_free_cash_option: CliTaxFreeCashOption::None,
        partial_tax_free_cash_amount: 0.0,
        ufpls_amount: 0.0,
        immediate_capital_goal: 0.0,
        existing_tfc_withdrawals: 0.0,
        tax_region: CliTaxRegion::England,
        tax_bands: None,
        state_pension_age: 65,
        state_pension_income: 10_600.20,
        state_pension_inflation_rate: 2.0,
        annual_management_charge: 1.0,
        tax_free_component: 25.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TaxBandError;

    const EPS: f64 = 1e-6;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn sample_cli() -> Cli {
        default_cli_for_api()
    }

    #[test]
    fn api_defaults_match_cli_defaults() {
        let parsed = Cli::parse_from([
            "drawdown",
            "--current-age",
            "55",
            "--retirement-age",
            "65",
            "--initial-fund",
            "100000",
            "--monthly-contribution",
            "500",
            "--monthly-employer-contribution",
            "250",
        ]);
        let from_flags = build_inputs(parsed).expect("valid inputs");
        let from_api = build_inputs(sample_cli()).expect("valid inputs");

        assert_eq!(from_flags.max_age, from_api.max_age);
        assert_approx(from_flags.target_income, from_api.target_income);
        assert_eq!(from_flags.assumptions, from_api.assumptions);
        assert_eq!(from_flags.include_state_pension, from_api.include_state_pension);
        assert_eq!(from_flags.tax_bands, from_api.tax_bands);
    }

    #[test]
    fn cli_parses_explicit_false_for_state_pension() {
        let cli = Cli::parse_from([
            "drawdown",
            "--current-age",
            "60",
            "--retirement-age",
            "61",
            "--initial-fund",
            "1",
            "--include-state-pension",
            "false",
            "--strategy",
            "decumulation-capital-only",
        ]);
        assert!(!cli.include_state_pension);
        assert_eq!(cli.strategy, CliStrategy::DecumulationCapitalOnly);
    }

    #[test]
    fn build_inputs_converts_percentages_and_assumptions() {
        let mut cli = sample_cli();
        cli.investment_growth_rate = 6.0;
        cli.salary_growth_rate = 3.0;
        cli.inflation_rate = 2.5;
        cli.annual_management_charge = 0.75;
        cli.tax_free_component = 20.0;

        let inputs = build_inputs(cli).expect("valid inputs");
        assert_approx(inputs.investment_growth_rate, 0.06);
        assert_approx(inputs.salary_growth_rate, 0.03);
        assert_approx(inputs.inflation_rate, 0.025);
        assert_approx(inputs.assumptions.annual_management_charge, 0.0075);
        assert_approx(inputs.assumptions.tax_free_component, 0.20);
        assert_approx(inputs.assumptions.state_pension_income_now, 10_600.20);
    }

    #[test]
    fn build_inputs_rejects_current_age_outside_range() {
        let mut cli = sample_cli();
        cli.current_age = 54;
        let err = build_inputs(cli).expect_err("must reject age below 55");
        assert!(err.to_string().contains("--current-age"));

        let mut cli = sample_cli();
        cli.current_age = 101;
        assert!(build_inputs(cli).is_err());
    }

    #[test]
    fn build_inputs_requires_future_retirement_when_accumulating() {
        let mut cli = sample_cli();
        cli.current_age = 60;
        cli.retirement_age = 60;
        let err = build_inputs(cli).expect_err("must reject immediate retirement");
        assert!(err.to_string().contains("--retirement-age"));
    }

    #[test]
    fn build_inputs_allows_immediate_retirement_when_drawing_down() {
        let mut cli = sample_cli();
        cli.current_age = 60;
        cli.retirement_age = 60;
        cli.strategy = CliStrategy::DecumulationCapitalOnly;
        assert!(build_inputs(cli).is_ok());

        let mut cli = sample_cli();
        cli.current_age = 60;
        cli.retirement_age = 59;
        cli.strategy = CliStrategy::DecumulationCapitalOnly;
        let err = build_inputs(cli).expect_err("must reject past retirement");
        assert!(err.to_string().contains("--retirement-age"));
    }

    #[test]
    fn build_inputs_rejects_negative_money_and_out_of_range_rates() {
        let mut cli = sample_cli();
        cli.initial_fund = -1.0;
        let err = build_inputs(cli).expect_err("must reject negative fund");
        assert!(err.to_string().contains("--initial-fund"));

        let mut cli = sample_cli();
        cli.inflation_rate = 101.0;
        let err = build_inputs(cli).expect_err("must reject inflation above 10%");
        assert!(err.to_string().contains("--inflation-rate"));

        let mut cli = sample_cli();
        cli.target_income = Some(f64::NAN);
        let err = build_inputs(cli).expect_err("must reject NaN target");
        assert!(err.to_string().contains("--target-income"));
    }

    #[test]
    fn build_inputs_caps_rates_so_the_fund_cannot_shrink_below_zero() {
        let mut cli = sample_cli();
        cli.inflation_rate = 60.0;
        cli.annual_management_charge = 50.0;
        let err = build_inputs(cli).expect_err("must reject runaway charges");
        assert!(err.to_string().contains("--inflation-rate"));

        let mut cli = sample_cli();
        cli.annual_management_charge = 10.5;
        let err = build_inputs(cli).expect_err("must reject charge above 10%");
        assert!(err.to_string().contains("--annual-management-charge"));

        let mut cli = sample_cli();
        cli.investment_growth_rate = 0.0;
        cli.inflation_rate = 10.0;
        cli.annual_management_charge = 10.0;
        cli.initial_fund = 50_000.0;
        let inputs = build_inputs(cli).expect("worst allowed rates are valid");
        let records = run_projection(&inputs);
        assert!(records.iter().all(|r| r.uncrystallised_fund >= 0.0));
        assert!(records.iter().all(|r| r.crystallised_fund >= 0.0));
    }

    #[test]
    fn build_inputs_rejects_ages_beyond_projection_ceiling() {
        let err = api_request_from_json(r#"{"maxAge": 4000000000}"#)
            .expect_err("must reject unbounded max age");
        assert!(err.contains("--max-age"));

        let mut cli = sample_cli();
        cli.max_age = Some(121);
        let err = build_inputs(cli).expect_err("must reject max age above 120");
        assert!(err.to_string().contains("--max-age"));

        let mut cli = sample_cli();
        cli.income_end_age = Some(500);
        let err = build_inputs(cli).expect_err("must reject income end age above 120");
        assert!(err.to_string().contains("--income-end-age"));

        let mut cli = sample_cli();
        cli.db_pension_age = Some(1_000);
        let err = build_inputs(cli).expect_err("must reject DB pension age above 120");
        assert!(err.to_string().contains("--db-pension-age"));

        let mut cli = sample_cli();
        cli.state_pension_age = 200;
        let err = build_inputs(cli).expect_err("must reject state pension age above 120");
        assert!(err.to_string().contains("--state-pension-age"));

        let mut cli = sample_cli();
        cli.max_age = Some(120);
        let inputs = build_inputs(cli).expect("ceiling itself is allowed");
        assert_eq!(run_projection(&inputs).len(), (120 - 55 + 1) as usize);
    }

    #[test]
    fn build_inputs_rejects_income_window_before_retirement_or_inverted() {
        let mut cli = sample_cli();
        cli.income_start_age = Some(64);
        let err = build_inputs(cli).expect_err("must reject early income start");
        assert!(err.to_string().contains("--income-start-age"));

        let mut cli = sample_cli();
        cli.income_start_age = Some(70);
        cli.income_end_age = Some(69);
        let err = build_inputs(cli).expect_err("must reject inverted window");
        assert!(err.to_string().contains("--income-end-age"));
    }

    #[test]
    fn build_inputs_rejects_db_pension_before_retirement_only_when_included() {
        let mut cli = sample_cli();
        cli.db_pension_age = Some(60);
        assert!(build_inputs(cli).is_ok());

        let mut cli = sample_cli();
        cli.include_db_pension = true;
        cli.db_pension_income = 5_000.0;
        cli.db_pension_age = Some(60);
        let err = build_inputs(cli).expect_err("must reject early DB pension");
        assert!(err.to_string().contains("--db-pension-age"));
    }

    #[test]
    fn build_inputs_defaults_windows_and_max_age_from_life_expectancy() {
        let inputs = build_inputs(sample_cli()).expect("valid inputs");
        assert_eq!(inputs.max_age, 92);
        assert_eq!(inputs.income_start_age, 65);
        assert_eq!(inputs.income_end_age, 92);
        assert_eq!(inputs.db_pension_age, 65);

        let mut cli = sample_cli();
        cli.max_age = Some(85);
        let inputs = build_inputs(cli).expect("valid inputs");
        assert_eq!(inputs.max_age, 85);
        assert_eq!(inputs.income_end_age, 85);
    }

    #[test]
    fn build_inputs_resolves_target_income_in_priority_order() {
        let inputs = build_inputs(sample_cli()).expect("valid inputs");
        assert_approx(inputs.target_income, 31_300.0);
        assert_approx(inputs.annual_retirement_income, 31_300.0);

        let mut cli = sample_cli();
        cli.living_standard = CliLivingStandard::Comfortable;
        cli.household = CliHousehold::Couple;
        cli.london = true;
        let inputs = build_inputs(cli).expect("valid inputs");
        assert_approx(inputs.target_income, 60_000.0);

        let mut cli = sample_cli();
        cli.essential_expenditure = Some(18_000.0);
        cli.discretionary_expenditure = Some(7_000.0);
        let inputs = build_inputs(cli).expect("valid inputs");
        assert_approx(inputs.target_income, 25_000.0);

        let mut cli = sample_cli();
        cli.target_income = Some(40_000.0);
        cli.essential_expenditure = Some(18_000.0);
        cli.annual_retirement_income = Some(20_000.0);
        let inputs = build_inputs(cli).expect("valid inputs");
        assert_approx(inputs.target_income, 40_000.0);
        assert_approx(inputs.annual_retirement_income, 20_000.0);
    }

    #[test]
    fn build_inputs_strips_accumulation_only_fields_when_drawing_down() {
        let mut cli = sample_cli();
        cli.strategy = CliStrategy::DecumulationIncomeFromCapital;
        cli.tax_free_cash_option = CliTaxFreeCashOption::Full;
        cli.immediate_capital_goal = 10_000.0;

        let inputs = build_inputs(cli).expect("valid inputs");
        assert_eq!(inputs.monthly_contribution, 0.0);
        assert_eq!(inputs.monthly_employer_contribution, 0.0);
        assert_eq!(inputs.tax_free_cash_option, TaxFreeCashOption::None);
        assert_approx(inputs.immediate_capital_goal, 10_000.0);
    }

    #[test]
    fn build_inputs_drops_immediate_goal_when_accumulating() {
        let mut cli = sample_cli();
        cli.immediate_capital_goal = 10_000.0;
        let inputs = build_inputs(cli).expect("valid inputs");
        assert_eq!(inputs.immediate_capital_goal, 0.0);
        assert_approx(inputs.annual_contribution(), 9_000.0);
    }

    #[test]
    fn build_inputs_requires_amounts_for_partial_and_ufpls() {
        let mut cli = sample_cli();
        cli.tax_free_cash_option = CliTaxFreeCashOption::Partial;
        let err = build_inputs(cli).expect_err("must require partial amount");
        assert!(err.to_string().contains("--partial-tax-free-cash-amount"));

        let mut cli = sample_cli();
        cli.tax_free_cash_option = CliTaxFreeCashOption::Ufpls;
        let err = build_inputs(cli).expect_err("must require UFPLS amount");
        assert!(err.to_string().contains("--ufpls-amount"));
    }

    #[test]
    fn build_inputs_uses_region_bands_unless_overridden() {
        let mut cli = sample_cli();
        cli.tax_region = CliTaxRegion::Scotland;
        let inputs = build_inputs(cli).expect("valid inputs");
        assert_eq!(inputs.tax_bands, TaxRegion::Scotland.bands());

        let mut cli = sample_cli();
        cli.tax_bands = Some(vec![TaxBand::new(10_000.0, 0.0), TaxBand::new(5_000.0, 0.2)]);
        let err = build_inputs(cli).expect_err("must reject descending bands");
        assert!(matches!(
            err,
            InputError::TaxBands(TaxBandError::NotAscending { index: 1, .. })
        ));
    }

    #[test]
    fn api_request_from_json_parses_web_keys() {
        let json = r#"{
          "currentAge": 60,
          "retirementAge": 67,
          "maxAge": 95,
          "gender": "female",
          "strategy": "accumulation",
          "initialFund": 250000,
          "monthlyContribution": 800,
          "monthlyEmployerContribution": 400,
          "investmentGrowthRate": 4,
          "inflationRate": 3,
          "targetIncome": 30000,
          "includeDbPension": true,
          "dbPensionIncome": 6000,
          "dbPensionAge": 67,
          "taxFreeCashOption": "ufpls",
          "ufplsAmount": 40000,
          "taxRegion": "scotland",
          "statePensionAge": 67
        }"#;
        let inputs = api_request_from_json(json).expect("json should parse");

        assert_eq!(inputs.current_age, 60);
        assert_eq!(inputs.retirement_age, 67);
        assert_eq!(inputs.max_age, 95);
        assert_eq!(inputs.strategy, Strategy::Accumulation);
        assert_approx(inputs.initial_fund, 250_000.0);
        assert_approx(inputs.annual_contribution(), 14_400.0);
        assert_approx(inputs.investment_growth_rate, 0.04);
        assert_approx(inputs.inflation_rate, 0.03);
        assert_approx(inputs.target_income, 30_000.0);
        assert!(inputs.include_db_pension);
        assert_eq!(inputs.db_pension_age, 67);
        assert_eq!(inputs.tax_free_cash_option, TaxFreeCashOption::Ufpls);
        assert_approx(inputs.ufpls_amount, 40_000.0);
        assert_eq!(inputs.tax_bands, TaxRegion::Scotland.bands());
        assert_eq!(inputs.assumptions.state_pension_age, 67);
    }

    #[test]
    fn api_request_from_json_accepts_strategy_aliases_and_custom_bands() {
        let json = r#"{
          "currentAge": 62,
          "retirementAge": 62,
          "strategy": "incomeFromCapital",
          "immediateCapitalGoal": 10000,
          "taxBands": [
            {"threshold": 10000, "rate": 0},
            {"threshold": null, "rate": 25}
          ]
        }"#;
        let inputs = api_request_from_json(json).expect("json should parse");
        assert_eq!(inputs.strategy, Strategy::DecumulationIncomeFromCapital);

        let inputs = api_request_from_json(r#"{"retirementAge": 55, "strategy": "capitalOnly"}"#)
            .expect("camelCase alias should parse");
        assert_eq!(inputs.strategy, Strategy::DecumulationCapitalOnly);

        let inputs = api_request_from_json(json).expect("json should parse");
        assert_eq!(
            inputs.tax_bands,
            vec![
                TaxBand::new(10_000.0, 0.0),
                TaxBand::new(f64::INFINITY, 0.25)
            ]
        );
    }

    #[test]
    fn api_request_from_json_reports_validation_errors() {
        let err = api_request_from_json(r#"{"currentAge": 40}"#).expect_err("too young");
        assert!(err.contains("--current-age"));

        let err = api_request_from_json(r#"{"strategy": "bogus"}"#).expect_err("bad enum");
        assert!(err.starts_with("Invalid API JSON payload"));

        let err = api_request_from_json(r#"{"taxBands": [{"threshold": 50000, "rate": 20}]}"#)
            .expect_err("bounded top band");
        assert!(err.contains("--tax-bands"));
    }

    #[test]
    fn project_response_serialization_contains_expected_fields() {
        let inputs = build_inputs(sample_cli()).expect("valid inputs");
        let response = build_project_response(&inputs);
        assert_eq!(response.years.len(), (92 - 55 + 1) as usize);
        assert_eq!(response.retirement_age, 65);

        let json = serde_json::to_string(&response).expect("response should serialize");
        assert!(json.contains("\"strategy\":\"accumulation\""));
        assert!(json.contains("\"retirementAge\":65"));
        assert!(json.contains("\"maxAge\":92"));
        assert!(json.contains("\"summary\""));
        assert!(json.contains("\"onTrack\""));
        assert!(json.contains("\"years\""));
        assert!(json.contains("\"uncrystallisedFund\""));
        assert!(json.contains("\"taxFreeLumpSum\""));
    }

    #[test]
    fn project_response_reports_effective_retirement_age() {
        let mut cli = sample_cli();
        cli.current_age = 60;
        cli.retirement_age = 61;
        cli.strategy = CliStrategy::DecumulationIncomeFromCapital;
        cli.immediate_capital_goal = 10_000.0;

        let inputs = build_inputs(cli).expect("valid inputs");
        let response = build_project_response(&inputs);
        assert_eq!(response.retirement_age, 60);
        assert_eq!(response.years[0].age, 60);
        assert!(response.years[0].tax_free_income >= 10_000.0 - EPS);
    }

    #[test]
    fn life_expectancy_response_reads_all_confidence_levels() {
        let body = life_expectancy_response(LifeExpectancyQuery {
            gender: Some(ApiGender::Male),
            current_age: Some(70),
        })
        .expect("valid query");
        assert_eq!(body.average, 86);
        assert_eq!(body.one_in_ten, 96);
        assert!(body.one_in_four >= body.average && body.one_in_four <= body.one_in_ten);
        assert!(body.from_table);

        let body = life_expectancy_response(LifeExpectancyQuery {
            gender: Some(ApiGender::Female),
            current_age: Some(30),
        })
        .expect("valid query");
        assert_eq!(body.one_in_four, 90);
        assert!(!body.from_table);
    }

    #[test]
    fn life_expectancy_response_requires_both_keys() {
        let err = life_expectancy_response(LifeExpectancyQuery {
            gender: None,
            current_age: Some(70),
        })
        .expect_err("gender missing");
        assert_eq!(err, InputError::Missing("gender"));

        let err = life_expectancy_response(LifeExpectancyQuery {
            gender: Some(ApiGender::Male),
            current_age: None,
        })
        .expect_err("age missing");
        assert!(err.to_string().contains("currentAge"));
    }
}

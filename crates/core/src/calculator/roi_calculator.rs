//! Investment return calculations.
//!
//! Every function here is pure: identical inputs give bit-identical outputs.
//! Ratios with a zero denominator come back as `None` instead of an error.

use log::debug;
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use super::calculator_model::{CashFlow, InvestmentResult, InvestmentScenario};
use crate::constants::MONTHS_PER_YEAR;
use crate::errors::{CalculatorError, Result};

/// Monthly payment on a fully amortizing fixed-rate loan.
///
/// # Arguments
///
/// * `loan_amount` - Principal borrowed. Non-positive principals cost nothing.
/// * `annual_rate_pct` - Nominal annual rate in percent (4.5 means 4.5%).
/// * `term_years` - Amortization horizon; zero is rejected.
///
/// `(1 + r)^n` grows fast. Rates above
/// [`crate::constants::MAX_INTEREST_RATE_PCT`], which scenarios reject up
/// front, or very long terms can leave `Decimal` range and return
/// `CalculatorError::Overflow`.
pub fn compute_monthly_mortgage_payment(
    loan_amount: Decimal,
    annual_rate_pct: Decimal,
    term_years: u32,
) -> Result<Decimal> {
    if term_years == 0 {
        return Err(CalculatorError::InvalidInput(
            "loan term must be at least one year".to_string(),
        )
        .into());
    }
    if loan_amount <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }

    let months = Decimal::from(term_years) * Decimal::from(MONTHS_PER_YEAR);
    let monthly_rate = annual_rate_pct / dec!(100) / Decimal::from(MONTHS_PER_YEAR);

    // (r * (1+r)^n) / ((1+r)^n - 1) is 0/0 at r = 0
    if monthly_rate.is_zero() {
        return Ok(loan_amount / months);
    }

    let overflow = || CalculatorError::Overflow("mortgage payment".to_string());
    let growth = (Decimal::ONE + monthly_rate)
        .checked_powu(u64::from(term_years) * u64::from(MONTHS_PER_YEAR))
        .ok_or_else(overflow)?;
    let numerator = loan_amount
        .checked_mul(monthly_rate)
        .and_then(|v| v.checked_mul(growth))
        .ok_or_else(overflow)?;
    let payment = numerator
        .checked_div(growth - Decimal::ONE)
        .ok_or_else(overflow)?;

    Ok(payment)
}

/// Signed monthly and annual cash flow after operating expenses and mortgage.
///
/// Negative values are a legitimate outcome (the property loses money).
pub fn compute_cash_flow(scenario: &InvestmentScenario) -> Result<CashFlow> {
    let mortgage = compute_monthly_mortgage_payment(
        scenario.effective_loan_amount(),
        scenario.interest_rate,
        scenario.loan_term_years,
    )?;
    cash_flow_from_parts(
        scenario.monthly_rental_income,
        scenario.total_monthly_expenses()?,
        mortgage,
    )
}

fn cash_flow_from_parts(rent: Decimal, expenses: Decimal, mortgage: Decimal) -> Result<CashFlow> {
    let overflow = || CalculatorError::Overflow("cash flow".to_string());
    let monthly_cash_flow = rent
        .checked_sub(expenses)
        .and_then(|v| v.checked_sub(mortgage))
        .ok_or_else(overflow)?;
    let annual_cash_flow = monthly_cash_flow
        .checked_mul(Decimal::from(MONTHS_PER_YEAR))
        .ok_or_else(overflow)?;
    Ok(CashFlow {
        monthly_cash_flow,
        annual_cash_flow,
    })
}

/// Annual cash flow as a percentage of the cash invested.
///
/// Returns `None` when nothing was invested.
pub fn compute_cash_on_cash_return(
    annual_cash_flow: Decimal,
    down_payment: Decimal,
) -> Option<Decimal> {
    if down_payment.is_zero() {
        return None;
    }
    annual_cash_flow
        .checked_div(down_payment)
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
}

/// Capitalization rate: annual net operating income over property value.
///
/// NOI excludes debt service, so financing terms never affect the result.
/// Returns `None` for a zero property value, or when NOI is out of range.
pub fn compute_cap_rate(scenario: &InvestmentScenario) -> Option<Decimal> {
    if scenario.property_value.is_zero() {
        return None;
    }
    let months = Decimal::from(MONTHS_PER_YEAR);
    let annual_rent = scenario.monthly_rental_income.checked_mul(months)?;
    let annual_expenses = scenario.monthly_expenses.total()?.checked_mul(months)?;
    annual_rent
        .checked_sub(annual_expenses)?
        .checked_div(scenario.property_value)
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
}

/// Months of cash flow needed to recover the down payment.
///
/// Returns `None` when cash flow is zero or negative: the down payment is
/// never recovered from operations.
pub fn compute_break_even_months(
    down_payment: Decimal,
    monthly_cash_flow: Decimal,
) -> Option<Decimal> {
    if monthly_cash_flow <= Decimal::ZERO {
        return None;
    }
    down_payment.checked_div(monthly_cash_flow)
}

/// Recomputes every metric for `scenario` in one pass.
pub fn calculate_investment(scenario: &InvestmentScenario) -> Result<InvestmentResult> {
    let loan_amount = scenario.effective_loan_amount();
    let total_monthly_expenses = scenario.total_monthly_expenses()?;
    let monthly_mortgage_payment = compute_monthly_mortgage_payment(
        loan_amount,
        scenario.interest_rate,
        scenario.loan_term_years,
    )?;
    let cash_flow = cash_flow_from_parts(
        scenario.monthly_rental_income,
        total_monthly_expenses,
        monthly_mortgage_payment,
    )?;

    let result = InvestmentResult {
        loan_amount,
        total_monthly_expenses,
        monthly_mortgage_payment,
        monthly_cash_flow: cash_flow.monthly_cash_flow,
        annual_cash_flow: cash_flow.annual_cash_flow,
        cash_on_cash_return_pct: compute_cash_on_cash_return(
            cash_flow.annual_cash_flow,
            scenario.down_payment,
        ),
        cap_rate_pct: compute_cap_rate(scenario),
        break_even_months: compute_break_even_months(
            scenario.down_payment,
            cash_flow.monthly_cash_flow,
        ),
    };

    debug!(
        "Investment recalculated: payment={}, monthly_cash_flow={}, cap_rate={:?}",
        result.monthly_mortgage_payment, result.monthly_cash_flow, result.cap_rate_pct
    );

    Ok(result)
}

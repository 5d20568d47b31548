//! Property-based integration tests for the investment calculator.
//!
//! These tests verify that universal properties hold across all valid inputs,
//! using the `proptest` crate for random test case generation.

use homestead_core::calculator::{
    calculate_investment, compute_break_even_months, compute_cap_rate,
    compute_monthly_mortgage_payment, InvestmentScenario, MonthlyExpenses, ScenarioSession,
    ScenarioUpdate,
};
use homestead_core::events::MockDomainEventSink;
use homestead_core::utils::DisplayFormatter;
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::sync::Arc;

// =============================================================================
// Generators
// =============================================================================

/// Whole-currency amounts keep `Decimal` arithmetic free of input rounding.
fn arb_amount(max: u64) -> impl Strategy<Value = Decimal> {
    (0u64..=max).prop_map(Decimal::from)
}

/// Annual rates from 0.01% to 15.00%, in basis points.
fn arb_positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..=1500).prop_map(|bps| Decimal::new(bps, 2))
}

fn arb_term() -> impl Strategy<Value = u32> {
    1u32..=40
}

fn arb_expenses() -> impl Strategy<Value = MonthlyExpenses> {
    (
        arb_amount(2_000),
        arb_amount(500),
        arb_amount(1_000),
        arb_amount(500),
        arb_amount(1_000),
        arb_amount(500),
    )
        .prop_map(
            |(property_tax, insurance, maintenance, utilities, property_management, other)| {
                MonthlyExpenses {
                    property_tax,
                    insurance,
                    maintenance,
                    utilities,
                    property_management,
                    other,
                }
            },
        )
}

/// Generates a valid scenario with a derived loan amount.
fn arb_scenario() -> impl Strategy<Value = InvestmentScenario> {
    (
        10_000u64..=5_000_000,
        0u32..=100,
        prop_oneof![Just(Decimal::ZERO), arb_positive_rate()],
        arb_term(),
        arb_amount(20_000),
        arb_expenses(),
    )
        .prop_map(
            |(value, down_pct, interest_rate, loan_term_years, rent, monthly_expenses)| {
                let property_value = Decimal::from(value);
                InvestmentScenario {
                    property_value,
                    down_payment: property_value * Decimal::from(down_pct) / Decimal::from(100),
                    loan_amount: None,
                    interest_rate,
                    loan_term_years,
                    monthly_rental_income: rent,
                    monthly_expenses,
                }
            },
        )
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// With interest, the payment is positive, smaller than the principal,
    /// and the total repaid exceeds the principal.
    #[test]
    fn prop_interest_bearing_payment_is_bounded(
        loan in 1_000u64..=5_000_000,
        rate in arb_positive_rate(),
        term in arb_term(),
    ) {
        let loan = Decimal::from(loan);
        let payment = compute_monthly_mortgage_payment(loan, rate, term).unwrap();
        let months = Decimal::from(term * 12);

        prop_assert!(payment > Decimal::ZERO);
        prop_assert!(payment < loan);
        prop_assert!(payment * months > loan);
    }

    /// Zero-interest loans repay in equal principal-only instalments.
    #[test]
    fn prop_zero_rate_is_exact_division(
        loan in 1u64..=5_000_000,
        term in arb_term(),
    ) {
        let loan = Decimal::from(loan);
        let payment = compute_monthly_mortgage_payment(loan, Decimal::ZERO, term).unwrap();
        prop_assert_eq!(payment, loan / Decimal::from(term * 12));
    }

    /// Cap rate ignores financing: changing rate or term never moves it.
    #[test]
    fn prop_cap_rate_independent_of_financing(
        scenario in arb_scenario(),
        other_rate in arb_positive_rate(),
        other_term in arb_term(),
    ) {
        let refinanced = InvestmentScenario {
            interest_rate: other_rate,
            loan_term_years: other_term,
            ..scenario.clone()
        };
        prop_assert_eq!(compute_cap_rate(&scenario), compute_cap_rate(&refinanced));
    }

    /// Break-even is reported exactly when cash flow is positive.
    #[test]
    fn prop_break_even_only_for_positive_cash_flow(scenario in arb_scenario()) {
        let result = calculate_investment(&scenario).unwrap();
        let positive = result.monthly_cash_flow > Decimal::ZERO;

        prop_assert_eq!(result.break_even_months.is_some(), positive);
        if let Some(months) = result.break_even_months {
            prop_assert!(months >= Decimal::ZERO);
            prop_assert_eq!(
                Some(months),
                compute_break_even_months(scenario.down_payment, result.monthly_cash_flow)
            );
        }
    }

    /// Cash-on-cash return is undefined exactly when nothing was put down.
    #[test]
    fn prop_cash_on_cash_defined_iff_down_payment(scenario in arb_scenario()) {
        let result = calculate_investment(&scenario).unwrap();
        prop_assert_eq!(
            result.cash_on_cash_return_pct.is_none(),
            scenario.down_payment.is_zero()
        );
    }

    /// Recomputing the same scenario gives identical results.
    #[test]
    fn prop_calculation_is_idempotent(scenario in arb_scenario()) {
        let first = calculate_investment(&scenario).unwrap();
        let second = calculate_investment(&scenario).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Formatted ratios are either a number with a percent sign or "N/A".
    #[test]
    fn prop_formatted_ratios_never_leak_non_numbers(scenario in arb_scenario()) {
        let result = calculate_investment(&scenario).unwrap();
        let fmt = DisplayFormatter::default();

        for text in [
            fmt.percent(result.cash_on_cash_return_pct),
            fmt.percent(result.cap_rate_pct),
            fmt.months(result.break_even_months),
        ] {
            let lower = text.to_lowercase();
            prop_assert!(!lower.contains("nan"));
            prop_assert!(!lower.contains("inf"));
        }
    }

    /// A rejected edit leaves the session exactly as it was.
    #[test]
    fn prop_rejected_update_preserves_session(scenario in arb_scenario()) {
        let sink = MockDomainEventSink::new();
        let mut session = ScenarioSession::with_scenario(scenario, Arc::new(sink.clone())).unwrap();
        let before = session.result().clone();

        prop_assert!(session.apply(ScenarioUpdate::LoanTermYears(0)).is_err());
        prop_assert_eq!(session.result(), &before);
        prop_assert_eq!(sink.len(), 1);
    }
}

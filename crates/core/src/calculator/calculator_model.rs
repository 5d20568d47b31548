//! Investment calculator domain models.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::constants::MAX_INTEREST_RATE_PCT;
use crate::errors::{invalid_input, CalculatorError, Result};

/// Named monthly operating expense categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExpenseCategory {
    PropertyTax,
    Insurance,
    Maintenance,
    Utilities,
    PropertyManagement,
    Other,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 6] = [
        ExpenseCategory::PropertyTax,
        ExpenseCategory::Insurance,
        ExpenseCategory::Maintenance,
        ExpenseCategory::Utilities,
        ExpenseCategory::PropertyManagement,
        ExpenseCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::PropertyTax => "propertyTax",
            ExpenseCategory::Insurance => "insurance",
            ExpenseCategory::Maintenance => "maintenance",
            ExpenseCategory::Utilities => "utilities",
            ExpenseCategory::PropertyManagement => "propertyManagement",
            ExpenseCategory::Other => "other",
        }
    }
}

/// Monthly operating expenses, one amount per category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyExpenses {
    #[serde(default)]
    pub property_tax: Decimal,
    #[serde(default)]
    pub insurance: Decimal,
    #[serde(default)]
    pub maintenance: Decimal,
    #[serde(default)]
    pub utilities: Decimal,
    #[serde(default)]
    pub property_management: Decimal,
    #[serde(default)]
    pub other: Decimal,
}

impl MonthlyExpenses {
    pub fn get(&self, category: ExpenseCategory) -> Decimal {
        match category {
            ExpenseCategory::PropertyTax => self.property_tax,
            ExpenseCategory::Insurance => self.insurance,
            ExpenseCategory::Maintenance => self.maintenance,
            ExpenseCategory::Utilities => self.utilities,
            ExpenseCategory::PropertyManagement => self.property_management,
            ExpenseCategory::Other => self.other,
        }
    }

    pub fn set(&mut self, category: ExpenseCategory, amount: Decimal) {
        let slot = match category {
            ExpenseCategory::PropertyTax => &mut self.property_tax,
            ExpenseCategory::Insurance => &mut self.insurance,
            ExpenseCategory::Maintenance => &mut self.maintenance,
            ExpenseCategory::Utilities => &mut self.utilities,
            ExpenseCategory::PropertyManagement => &mut self.property_management,
            ExpenseCategory::Other => &mut self.other,
        };
        *slot = amount;
    }

    /// Iterates `(category, amount)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (ExpenseCategory, Decimal)> + '_ {
        ExpenseCategory::ALL
            .iter()
            .map(move |category| (*category, self.get(*category)))
    }

    /// Sum of all categories, or `None` if it does not fit in a `Decimal`.
    pub fn total(&self) -> Option<Decimal> {
        self.iter()
            .try_fold(Decimal::ZERO, |total, (_, amount)| total.checked_add(amount))
    }
}

/// Inputs to the investment return calculator.
///
/// `loan_amount` is normally derived as `property_value - down_payment`; set it
/// to `Some(..)` to model financing that does not follow the down payment
/// (for example `Some(0)` for an all-cash purchase).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentScenario {
    pub property_value: Decimal,
    pub down_payment: Decimal,
    #[serde(default)]
    pub loan_amount: Option<Decimal>,
    /// Annual nominal rate, in percent.
    pub interest_rate: Decimal,
    pub loan_term_years: u32,
    pub monthly_rental_income: Decimal,
    #[serde(default)]
    pub monthly_expenses: MonthlyExpenses,
}

impl Default for InvestmentScenario {
    /// Seed values shown when the calculator first loads.
    fn default() -> Self {
        Self {
            property_value: dec!(350000),
            down_payment: dec!(70000),
            loan_amount: None,
            interest_rate: dec!(4.5),
            loan_term_years: 30,
            monthly_rental_income: dec!(2500),
            monthly_expenses: MonthlyExpenses {
                property_tax: dec!(300),
                insurance: dec!(100),
                maintenance: dec!(200),
                utilities: dec!(100),
                property_management: dec!(200),
                other: dec!(50),
            },
        }
    }
}

impl InvestmentScenario {
    /// Loan principal, either supplied or derived from the down payment.
    pub fn effective_loan_amount(&self) -> Decimal {
        self.loan_amount
            .unwrap_or(self.property_value - self.down_payment)
    }

    pub fn total_monthly_expenses(&self) -> Result<Decimal> {
        self.monthly_expenses
            .total()
            .ok_or_else(|| CalculatorError::Overflow("total monthly expenses".to_string()).into())
    }

    /// Validates the scenario the way the input form does.
    pub fn validate(&self) -> Result<()> {
        if self.property_value <= Decimal::ZERO {
            return Err(invalid_input("Property value must be greater than zero"));
        }
        if self.down_payment < Decimal::ZERO {
            return Err(invalid_input("Down payment cannot be negative"));
        }
        if self.down_payment > self.property_value {
            return Err(invalid_input(
                "Down payment cannot exceed the property value",
            ));
        }
        if matches!(self.loan_amount, Some(amount) if amount < Decimal::ZERO) {
            return Err(invalid_input("Loan amount cannot be negative"));
        }
        if self.interest_rate < Decimal::ZERO {
            return Err(invalid_input("Interest rate cannot be negative"));
        }
        if self.interest_rate > Decimal::from(MAX_INTEREST_RATE_PCT) {
            return Err(invalid_input(format!(
                "Interest rate cannot exceed {}%",
                MAX_INTEREST_RATE_PCT
            )));
        }
        if self.loan_term_years == 0 {
            return Err(invalid_input("Loan term must be at least one year"));
        }
        if self.monthly_rental_income < Decimal::ZERO {
            return Err(invalid_input("Rental income cannot be negative"));
        }
        if let Some((category, _)) = self
            .monthly_expenses
            .iter()
            .find(|(_, amount)| *amount < Decimal::ZERO)
        {
            return Err(invalid_input(format!(
                "Expense '{}' cannot be negative",
                category.as_str()
            )));
        }
        Ok(())
    }
}

/// Monthly and annual cash flow after expenses and debt service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlow {
    pub monthly_cash_flow: Decimal,
    pub annual_cash_flow: Decimal,
}

/// Metrics derived from an [`InvestmentScenario`].
///
/// Ratio fields are `None` when their denominator is zero (or, for break-even,
/// when cash flow is not positive); display code must render that as "not
/// applicable" rather than as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentResult {
    pub loan_amount: Decimal,
    pub total_monthly_expenses: Decimal,
    pub monthly_mortgage_payment: Decimal,
    pub monthly_cash_flow: Decimal,
    pub annual_cash_flow: Decimal,
    pub cash_on_cash_return_pct: Option<Decimal>,
    pub cap_rate_pct: Option<Decimal>,
    pub break_even_months: Option<Decimal>,
}

/// A single-field edit applied to a [`super::ScenarioSession`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum ScenarioUpdate {
    PropertyValue(Decimal),
    DownPayment(Decimal),
    /// Down payment as a percentage of the current property value.
    DownPaymentPercent(Decimal),
    LoanAmount(Option<Decimal>),
    InterestRate(Decimal),
    LoanTermYears(u32),
    MonthlyRentalIncome(Decimal),
    Expense(ExpenseCategory, Decimal),
}

impl ScenarioUpdate {
    /// Applies the edit to `scenario` in place.
    ///
    /// Only a percentage down payment can fail, when the product overflows.
    pub fn apply_to(&self, scenario: &mut InvestmentScenario) -> Result<()> {
        match self {
            ScenarioUpdate::PropertyValue(value) => scenario.property_value = *value,
            ScenarioUpdate::DownPayment(value) => scenario.down_payment = *value,
            ScenarioUpdate::DownPaymentPercent(pct) => {
                scenario.down_payment = scenario
                    .property_value
                    .checked_mul(*pct)
                    .map(|amount| amount / dec!(100))
                    .ok_or_else(|| CalculatorError::Overflow("down payment".to_string()))?
            }
            ScenarioUpdate::LoanAmount(value) => scenario.loan_amount = *value,
            ScenarioUpdate::InterestRate(value) => scenario.interest_rate = *value,
            ScenarioUpdate::LoanTermYears(years) => scenario.loan_term_years = *years,
            ScenarioUpdate::MonthlyRentalIncome(value) => {
                scenario.monthly_rental_income = *value
            }
            ScenarioUpdate::Expense(category, amount) => {
                scenario.monthly_expenses.set(*category, *amount)
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scenario_is_valid_and_matches_seed() {
        let scenario = InvestmentScenario::default();
        assert!(scenario.validate().is_ok());
        assert_eq!(scenario.total_monthly_expenses().unwrap(), dec!(950));
        assert_eq!(scenario.effective_loan_amount(), dec!(280000));
    }

    #[test]
    fn test_supplied_loan_amount_overrides_derivation() {
        let scenario = InvestmentScenario {
            loan_amount: Some(Decimal::ZERO),
            ..InvestmentScenario::default()
        };
        assert_eq!(scenario.effective_loan_amount(), Decimal::ZERO);
    }

    #[test]
    fn test_validate_rejects_down_payment_above_value() {
        let scenario = InvestmentScenario {
            down_payment: dec!(400000),
            ..InvestmentScenario::default()
        };
        let err = scenario.validate().unwrap_err();
        assert!(err.to_string().contains("Down payment"));
    }

    #[test]
    fn test_validate_rejects_negative_expense() {
        let mut scenario = InvestmentScenario::default();
        scenario
            .monthly_expenses
            .set(ExpenseCategory::Utilities, dec!(-1));
        let err = scenario.validate().unwrap_err();
        assert!(err.to_string().contains("utilities"));
    }

    #[test]
    fn test_validate_rejects_zero_term() {
        let scenario = InvestmentScenario {
            loan_term_years: 0,
            ..InvestmentScenario::default()
        };
        assert!(scenario.validate().is_err());
    }

    #[test]
    fn test_expenses_set_and_get_each_category() {
        let mut expenses = MonthlyExpenses::default();
        for (i, category) in ExpenseCategory::ALL.iter().enumerate() {
            expenses.set(*category, Decimal::from(i + 1));
        }
        for (i, category) in ExpenseCategory::ALL.iter().enumerate() {
            assert_eq!(expenses.get(*category), Decimal::from(i + 1));
        }
        assert_eq!(expenses.total(), Some(dec!(21)));
    }

    #[test]
    fn test_down_payment_percent_uses_current_value() {
        let mut scenario = InvestmentScenario::default();
        ScenarioUpdate::DownPaymentPercent(dec!(25))
            .apply_to(&mut scenario)
            .unwrap();
        assert_eq!(scenario.down_payment, dec!(87500));
    }

    #[test]
    fn test_scenario_deserializes_from_camel_case() {
        let json = r#"{
            "propertyValue": 200000,
            "downPayment": 40000,
            "interestRate": 5,
            "loanTermYears": 15,
            "monthlyRentalIncome": 1800,
            "monthlyExpenses": { "propertyTax": 150, "insurance": 60 }
        }"#;
        let scenario: InvestmentScenario = serde_json::from_str(json).unwrap();
        assert_eq!(scenario.loan_amount, None);
        assert_eq!(scenario.total_monthly_expenses().unwrap(), dec!(210));
        assert_eq!(scenario.loan_term_years, 15);
    }

    #[test]
    fn test_validate_caps_interest_rate() {
        let at_cap = InvestmentScenario {
            interest_rate: dec!(100),
            ..InvestmentScenario::default()
        };
        assert!(at_cap.validate().is_ok());

        let above = InvestmentScenario {
            interest_rate: dec!(250),
            ..InvestmentScenario::default()
        };
        let err = above.validate().unwrap_err();
        assert!(matches!(err, crate::Error::Validation(_)));
        assert!(err.to_string().contains("100%"));
    }

    #[test]
    fn test_expense_total_overflow_is_none() {
        let expenses = MonthlyExpenses {
            property_tax: Decimal::MAX,
            insurance: dec!(1),
            ..MonthlyExpenses::default()
        };
        assert_eq!(expenses.total(), None);

        let scenario = InvestmentScenario {
            monthly_expenses: expenses,
            ..InvestmentScenario::default()
        };
        assert!(matches!(
            scenario.total_monthly_expenses(),
            Err(crate::Error::Calculation(CalculatorError::Overflow(_)))
        ));
    }

    #[test]
    fn test_down_payment_percent_overflow_leaves_scenario_untouched() {
        let mut scenario = InvestmentScenario {
            property_value: Decimal::MAX,
            ..InvestmentScenario::default()
        };
        let result = ScenarioUpdate::DownPaymentPercent(dec!(50)).apply_to(&mut scenario);

        assert!(matches!(
            result,
            Err(crate::Error::Calculation(CalculatorError::Overflow(_)))
        ));
        assert_eq!(scenario.down_payment, dec!(70000));
    }
}

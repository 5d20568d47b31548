//! Display formatting for money, percentages and month counts.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::constants::{DISPLAY_DECIMAL_PRECISION, NOT_APPLICABLE_LABEL};

/// Formats calculator output for people.
///
/// `None` ratios render as [`NOT_APPLICABLE_LABEL`], never as a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayFormatter {
    pub currency_symbol: String,
    pub decimals: u32,
}

impl Default for DisplayFormatter {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
            decimals: DISPLAY_DECIMAL_PRECISION,
        }
    }
}

impl DisplayFormatter {
    pub fn new(currency_symbol: impl Into<String>, decimals: u32) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
            decimals,
        }
    }

    /// `-₹1,234.50` style: sign first, then symbol, grouped thousands.
    pub fn currency(&self, amount: Decimal) -> String {
        let rounded = self.round(amount);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        format!(
            "{}{}{}",
            sign,
            self.currency_symbol,
            group_thousands(&self.fixed(rounded.abs()))
        )
    }

    pub fn percent(&self, value: Option<Decimal>) -> String {
        match value {
            Some(pct) => {
                let rounded = self.round(pct);
                let text = self.fixed(rounded.abs());
                if rounded.is_sign_negative() && !rounded.is_zero() {
                    format!("-{}%", text)
                } else {
                    format!("{}%", text)
                }
            }
            None => NOT_APPLICABLE_LABEL.to_string(),
        }
    }

    /// Break-even months, rounded up to the month in which the down payment
    /// is fully recovered.
    pub fn months(&self, value: Option<Decimal>) -> String {
        match value {
            Some(months) => {
                let whole = months.ceil();
                if whole == Decimal::ONE {
                    "1 month".to_string()
                } else {
                    format!("{} months", whole.normalize())
                }
            }
            None => NOT_APPLICABLE_LABEL.to_string(),
        }
    }

    fn round(&self, value: Decimal) -> Decimal {
        value.round_dp_with_strategy(self.decimals, RoundingStrategy::MidpointAwayFromZero)
    }

    fn fixed(&self, value: Decimal) -> String {
        format!("{:.*}", self.decimals as usize, value)
    }
}

fn group_thousands(number: &str) -> String {
    let (integer, fraction) = match number.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (number, None),
    };

    let digits: Vec<char> = integer.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit);
    }

    match fraction {
        Some(fraction) => format!("{}.{}", grouped, fraction),
        None => grouped,
    }
}

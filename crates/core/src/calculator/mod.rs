//! Investment return calculator - scenario models, pure calculations, and
//! the reactive session that keeps results in sync with edits.

mod calculator_model;
mod calculator_session;
pub mod roi_calculator;

pub use calculator_model::{
    CashFlow, ExpenseCategory, InvestmentResult, InvestmentScenario, MonthlyExpenses,
    ScenarioUpdate,
};
pub use calculator_session::ScenarioSession;
pub use roi_calculator::*;

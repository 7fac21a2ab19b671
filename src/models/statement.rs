use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

#[derive(Clone, Copy, Debug, Deserialize, Display, EnumIter, Eq, PartialEq, Serialize)]
pub enum StatementKind {
    #[strum(serialize = "Balance Sheet")]
    BalanceSheet,
    #[strum(serialize = "Income Statement")]
    IncomeStatement,
    #[strum(serialize = "Cash Flow Statement")]
    CashFlow,
}

#[derive(Clone, Debug, Deserialize, Getters, PartialEq, Serialize, new)]
pub struct LineItem {
    name: String,
    values: Vec<Option<f64>>,
}

/// A reporting table: one row per line item, one column per period.
#[derive(Clone, Debug, Deserialize, Getters, PartialEq, Serialize, new)]
pub struct FinancialStatement {
    kind: StatementKind,
    periods: Vec<String>,
    line_items: Vec<LineItem>,
}

impl FinancialStatement {
    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }
}

#[derive(Clone, Debug, Deserialize, Getters, PartialEq, Serialize, new)]
pub struct Statements {
    balance_sheet: FinancialStatement,
    income_statement: FinancialStatement,
    cash_flow: FinancialStatement,
}

impl Statements {
    pub fn get(&self, kind: StatementKind) -> &FinancialStatement {
        match kind {
            StatementKind::BalanceSheet => &self.balance_sheet,
            StatementKind::IncomeStatement => &self.income_statement,
            StatementKind::CashFlow => &self.cash_flow,
        }
    }
}

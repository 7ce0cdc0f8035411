//! Per-month inputs supplied by the presentation layer.

use serde::{Deserialize, Serialize};

use crate::common::Amounted;

/// An ad hoc expense scoped to a single forecast month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OptionalExpense {
    pub description: String,
    pub amount: f64,
}

impl OptionalExpense {
    pub fn new(description: impl Into<String>, amount: f64) -> Self {
        Self {
            description: description.into(),
            amount,
        }
    }

    /// Only described, positive expenses contribute to month totals.
    pub fn is_counted(&self) -> bool {
        !self.description.trim().is_empty() && self.amount > 0.0
    }
}

impl Amounted for OptionalExpense {
    fn amount(&self) -> f64 {
        self.amount
    }
}

/// Income and optional expenses for one forecast month, already coerced to numbers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyInput {
    pub label: String,
    #[serde(default)]
    pub income: f64,
    #[serde(default)]
    pub optional_expenses: Vec<OptionalExpense>,
}

impl MonthlyInput {
    pub fn new(label: impl Into<String>, income: f64) -> Self {
        Self {
            label: label.into(),
            income,
            optional_expenses: Vec::new(),
        }
    }

    pub fn with_expense(mut self, description: impl Into<String>, amount: f64) -> Self {
        self.optional_expenses
            .push(OptionalExpense::new(description, amount));
        self
    }

    pub fn counted_expenses(&self) -> impl Iterator<Item = &OptionalExpense> {
        self.optional_expenses.iter().filter(|item| item.is_counted())
    }

    pub fn optional_total(&self) -> f64 {
        crate::common::total_of(self.counted_expenses())
    }
}

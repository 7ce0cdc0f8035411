//! Forecast outputs: per-month snapshots, aggregate summary, affordability verdict.

use serde::{Deserialize, Serialize};

use crate::{input::OptionalExpense, plan::Project};

/// Running-balance view of a single forecast month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthSnapshot {
    pub label: String,
    pub start_balance: f64,
    pub income: f64,
    pub core_expenses: f64,
    /// Counted optional expenses, kept for per-item breakdowns.
    #[serde(default)]
    pub optional_expenses: Vec<OptionalExpense>,
    pub total_expenses: f64,
    pub end_balance: f64,
}

impl MonthSnapshot {
    pub fn is_negative(&self) -> bool {
        self.end_balance < 0.0
    }
}

/// The month holding the minimum end balance.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LowestBalance {
    pub value: f64,
    pub label: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub net_flow: f64,
    pub lowest_balance: LowestBalance,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ForecastResult {
    pub snapshots: Vec<MonthSnapshot>,
    pub summary: Summary,
}

impl ForecastResult {
    pub fn final_balance(&self) -> Option<f64> {
        self.snapshots.last().map(|snapshot| snapshot.end_balance)
    }
}

/// First month at which the project fits above the safety balance, if any.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AffordabilityResult {
    pub affordable_at_month: Option<String>,
}

impl AffordabilityResult {
    pub fn at(label: impl Into<String>) -> Self {
        Self {
            affordable_at_month: Some(label.into()),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            affordable_at_month: None,
        }
    }

    pub fn is_affordable(&self) -> bool {
        self.affordable_at_month.is_some()
    }
}

/// Forecast plus the affordability verdict when a project is configured.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ForecastReport {
    pub forecast: ForecastResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<Project>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affordability: Option<AffordabilityResult>,
    /// Floor the affordability verdict was checked against.
    #[serde(default)]
    pub safety_balance: f64,
}

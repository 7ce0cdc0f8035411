//! Run-wide forecast settings and the optional one-time project.

use serde::{Deserialize, Serialize};

/// A one-time purchase the user wants to afford within the horizon.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub name: String,
    pub total_cost: f64,
}

impl Project {
    pub fn new(name: impl Into<String>, total_cost: f64) -> Self {
        Self {
            name: name.into(),
            total_cost,
        }
    }
}

/// Immutable inputs shared by every month of a forecast run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ForecastConfig {
    #[serde(default)]
    pub starting_balance: f64,
    #[serde(default)]
    pub core_monthly_budget: f64,
    /// Balance that must remain after paying for the project.
    #[serde(default)]
    pub safety_balance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<Project>,
}

impl ForecastConfig {
    pub fn new(starting_balance: f64, core_monthly_budget: f64) -> Self {
        Self {
            starting_balance,
            core_monthly_budget,
            ..Self::default()
        }
    }

    pub fn with_safety_balance(mut self, safety_balance: f64) -> Self {
        self.safety_balance = safety_balance;
        self
    }

    pub fn with_project(mut self, project: Project) -> Self {
        self.project = Some(project);
        self
    }
}

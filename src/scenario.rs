//! Scenario documents: the raw form values a user fills in, stored as JSON.
//!
//! Numeric fields are kept exactly as entered. They accept JSON numbers or
//! strings, and are coerced to numbers only when the scenario is turned into
//! engine inputs.

use cashflow_core::{time::Clock, ExpenseDraft, HorizonService, InputService, MonthDraft};
use cashflow_domain::{ForecastConfig, MonthlyInput};
use serde::{de::Deserializer, Deserialize, Serialize};

use crate::errors::CashflowError;

/// A numeric form field before coercion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RawAmount(pub String);

impl RawAmount {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn value(&self) -> f64 {
        InputService::coerce_amount(&self.0)
    }
}

impl<'de> Deserialize<'de> for RawAmount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::Number(number) => number.to_string(),
            serde_json::Value::String(text) => text,
            _ => String::new(),
        };
        Ok(Self(raw))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub amount: RawAmount,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthEntry {
    #[serde(default)]
    pub income: RawAmount,
    #[serde(default)]
    pub expenses: Vec<ExpenseEntry>,
}

impl MonthEntry {
    fn to_draft(&self) -> MonthDraft {
        MonthDraft {
            income: self.income.0.clone(),
            expenses: self
                .expenses
                .iter()
                .map(|item| ExpenseDraft {
                    description: item.description.clone(),
                    amount: item.amount.0.clone(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub total_cost: RawAmount,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// First forecast month as `YYYY-MM`; the current month when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_month: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizon_months: Option<usize>,
    #[serde(default)]
    pub current_balance: RawAmount,
    #[serde(default)]
    pub core_budget: RawAmount,
    #[serde(default)]
    pub safety_balance: RawAmount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectEntry>,
    #[serde(default)]
    pub months: Vec<MonthEntry>,
}

impl Scenario {
    /// Blank scenario with one empty month per horizon month, starting this month.
    pub fn template(clock: &dyn Clock, horizon: usize) -> Result<Self, CashflowError> {
        let horizon = HorizonService::validate(horizon)?;
        Ok(Self {
            start_month: Some(clock.today().format("%Y-%m").to_string()),
            horizon_months: Some(horizon),
            months: vec![MonthEntry::default(); horizon],
            ..Self::default()
        })
    }

    /// Horizon precedence: explicit `horizon_months`, then the number of month entries,
    /// then `default_horizon`.
    pub fn horizon(&self, default_horizon: usize) -> Result<usize, CashflowError> {
        let horizon = match (self.horizon_months, self.months.len()) {
            (Some(horizon), _) => horizon,
            (None, 0) => default_horizon,
            (None, count) => count,
        };
        Ok(HorizonService::validate(horizon)?)
    }

    pub fn labels(
        &self,
        clock: &dyn Clock,
        default_horizon: usize,
    ) -> Result<Vec<String>, CashflowError> {
        let horizon = self.horizon(default_horizon)?;
        let labels = match &self.start_month {
            Some(raw) => HorizonService::labels(HorizonService::parse_month(raw)?, horizon)?,
            None => HorizonService::labels_from_clock(clock, horizon)?,
        };
        Ok(labels)
    }

    /// Coerces every raw field and validates the project, producing engine inputs.
    pub fn to_inputs(
        &self,
        clock: &dyn Clock,
        default_horizon: usize,
    ) -> Result<(ForecastConfig, Vec<MonthlyInput>), CashflowError> {
        let labels = self.labels(clock, default_horizon)?;
        let drafts: Vec<MonthDraft> = self.months.iter().map(MonthEntry::to_draft).collect();
        let months = InputService::build_months(&labels, &drafts);

        let project = self
            .project
            .as_ref()
            .map(|entry| InputService::validate_project(&entry.name, &entry.total_cost.0))
            .transpose()?;

        let config = ForecastConfig {
            starting_balance: self.current_balance.value(),
            core_monthly_budget: self.core_budget.value(),
            safety_balance: self.safety_balance.value(),
            project,
        };
        Ok((config, months))
    }
}

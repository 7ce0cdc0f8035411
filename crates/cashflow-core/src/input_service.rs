//! Turns raw form values into the numeric inputs the engine expects.

use cashflow_domain::{MonthlyInput, OptionalExpense, Project};

use crate::CoreError;

const DEFAULT_PROJECT_NAME: &str = "Project";

/// Raw, unvalidated expense row as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub description: String,
    pub amount: String,
}

/// Raw, unvalidated month card as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthDraft {
    pub income: String,
    pub expenses: Vec<ExpenseDraft>,
}

pub struct InputService;

impl InputService {
    /// Reads the leading decimal number in `raw`. Blank, unparsable or
    /// non-finite input collapses to zero.
    pub fn coerce_amount(raw: &str) -> f64 {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return 0.0;
        }
        let value = numeric_prefix(trimmed)
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite());
        match value {
            Some(value) => value,
            None => {
                tracing::warn!(raw = trimmed, "non-numeric amount treated as zero");
                0.0
            }
        }
    }

    pub fn coerce_month(label: impl Into<String>, draft: &MonthDraft) -> MonthlyInput {
        MonthlyInput {
            label: label.into(),
            income: Self::coerce_amount(&draft.income),
            optional_expenses: draft
                .expenses
                .iter()
                .map(|item| {
                    OptionalExpense::new(item.description.trim(), Self::coerce_amount(&item.amount))
                })
                .collect(),
        }
    }

    /// Pairs every label with its draft; labels without a draft get an empty month.
    pub fn build_months(labels: &[String], drafts: &[MonthDraft]) -> Vec<MonthlyInput> {
        if drafts.len() > labels.len() {
            tracing::warn!(
                extra = drafts.len() - labels.len(),
                "month drafts beyond the horizon ignored"
            );
        }
        let empty = MonthDraft::default();
        labels
            .iter()
            .enumerate()
            .map(|(idx, label)| {
                Self::coerce_month(label.clone(), drafts.get(idx).unwrap_or(&empty))
            })
            .collect()
    }

    /// Builds a project from form values, rejecting non-positive costs.
    pub fn validate_project(name: &str, raw_cost: &str) -> Result<Project, CoreError> {
        let total_cost = Self::coerce_amount(raw_cost);
        if total_cost <= 0.0 {
            return Err(CoreError::InvalidProject(format!(
                "total cost must be greater than zero (got `{}`)",
                raw_cost.trim()
            )));
        }
        let name = match name.trim() {
            "" => DEFAULT_PROJECT_NAME,
            trimmed => trimmed,
        };
        Ok(Project::new(name, total_cost))
    }
}

/// Longest prefix shaped like `[+-]digits[.digits][(e|E)[+-]digits]`.
fn numeric_prefix(raw: &str) -> &str {
    let bytes = raw.as_bytes();
    let mut idx = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        idx += 1;
    }
    let mut has_digits = false;
    while idx < bytes.len() && bytes[idx].is_ascii_digit() {
        idx += 1;
        has_digits = true;
    }
    if idx < bytes.len() && bytes[idx] == b'.' {
        idx += 1;
        while idx < bytes.len() && bytes[idx].is_ascii_digit() {
            idx += 1;
            has_digits = true;
        }
    }
    if !has_digits {
        return "";
    }
    let mut end = idx;
    if idx < bytes.len() && matches!(bytes[idx], b'e' | b'E') {
        let mut exp = idx + 1;
        if exp < bytes.len() && matches!(bytes[exp], b'+' | b'-') {
            exp += 1;
        }
        let digits_start = exp;
        while exp < bytes.len() && bytes[exp].is_ascii_digit() {
            exp += 1;
        }
        if exp > digits_start {
            end = exp;
        }
    }
    &raw[..end]
}

//! Running-balance projection over an ordered list of monthly inputs.

use cashflow_domain::{
    ForecastConfig, ForecastReport, ForecastResult, LowestBalance, MonthSnapshot, MonthlyInput,
    Summary,
};

use crate::affordability_service::AffordabilityService;

pub struct ForecastService;

impl ForecastService {
    /// Folds `months` left to right, chaining each month's end balance into the next start.
    pub fn compute(config: &ForecastConfig, months: &[MonthlyInput]) -> ForecastResult {
        let mut running_balance = config.starting_balance;
        let mut snapshots = Vec::with_capacity(months.len());

        for month in months {
            let optional_expenses: Vec<_> = month.counted_expenses().cloned().collect();
            let total_expenses = config.core_monthly_budget + month.optional_total();
            let end_balance = running_balance + month.income - total_expenses;

            snapshots.push(MonthSnapshot {
                label: month.label.clone(),
                start_balance: running_balance,
                income: month.income,
                core_expenses: config.core_monthly_budget,
                optional_expenses,
                total_expenses,
                end_balance,
            });
            running_balance = end_balance;
        }

        let summary = Self::summarize(&snapshots);
        tracing::debug!(
            months = snapshots.len(),
            net_flow = summary.net_flow,
            lowest = summary.lowest_balance.value,
            "forecast computed"
        );
        ForecastResult { snapshots, summary }
    }

    /// Aggregates totals and the lowest end balance (earliest month wins ties).
    pub fn summarize(snapshots: &[MonthSnapshot]) -> Summary {
        let total_income: f64 = snapshots.iter().map(|s| s.income).sum();
        let total_expenses: f64 = snapshots.iter().map(|s| s.total_expenses).sum();

        let lowest_balance = snapshots
            .iter()
            .fold(None::<&MonthSnapshot>, |lowest, snapshot| match lowest {
                Some(current) if snapshot.end_balance >= current.end_balance => Some(current),
                _ => Some(snapshot),
            })
            .map(|snapshot| LowestBalance {
                value: snapshot.end_balance,
                label: snapshot.label.clone(),
            })
            .unwrap_or_default();

        Summary {
            total_income,
            total_expenses,
            net_flow: total_income - total_expenses,
            lowest_balance,
        }
    }

    /// Runs the forecast and, when a project is configured, the affordability scan.
    pub fn report(config: &ForecastConfig, months: &[MonthlyInput]) -> ForecastReport {
        let forecast = Self::compute(config, months);
        let affordability = config.project.as_ref().map(|project| {
            AffordabilityService::check(&forecast.snapshots, project, config.safety_balance)
        });
        ForecastReport {
            forecast,
            project: config.project.clone(),
            affordability,
            safety_balance: config.safety_balance,
        }
    }
}

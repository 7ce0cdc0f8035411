use cashflow_domain::{AffordabilityResult, MonthSnapshot, Project};

pub struct AffordabilityService;

impl AffordabilityService {
    /// Returns the first month whose end balance covers the project and still
    /// leaves `safety_balance`. Later months with larger surpluses never win.
    pub fn check(
        snapshots: &[MonthSnapshot],
        project: &Project,
        safety_balance: f64,
    ) -> AffordabilityResult {
        let verdict = Self::first_affordable(snapshots, project, safety_balance)
            .map(|snapshot| AffordabilityResult::at(snapshot.label.clone()))
            .unwrap_or_else(AffordabilityResult::unreachable);

        tracing::debug!(
            project = %project.name,
            cost = project.total_cost,
            affordable_at = ?verdict.affordable_at_month,
            "affordability checked"
        );
        verdict
    }

    /// Snapshot of the month [`check`](Self::check) reports, if any.
    pub fn first_affordable<'a>(
        snapshots: &'a [MonthSnapshot],
        project: &Project,
        safety_balance: f64,
    ) -> Option<&'a MonthSnapshot> {
        snapshots
            .iter()
            .find(|snapshot| snapshot.end_balance - project.total_cost >= safety_balance)
    }

    /// Balance left above the safety floor after paying for the project in `snapshot`'s month.
    pub fn surplus(snapshot: &MonthSnapshot, project: &Project, safety_balance: f64) -> f64 {
        snapshot.end_balance - project.total_cost - safety_balance
    }
}

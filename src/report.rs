//! Plain-text rendering of forecast results: month table, summary dashboard,
//! and the project verdict.

use cashflow_core::{format::CurrencyFormatter, AffordabilityService};
use cashflow_domain::{ForecastReport, MonthSnapshot, Project, Summary};
use colored::Colorize;

const HEADERS: [&str; 5] = [
    "Month",
    "Start Balance",
    "Income (+)",
    "Total Expenses (-)",
    "End Balance",
];
const COLUMN_GAP: &str = "  ";

pub struct ReportRenderer<'a> {
    formatter: &'a dyn CurrencyFormatter,
    currency: String,
    use_color: bool,
}

impl<'a> ReportRenderer<'a> {
    pub fn new(formatter: &'a dyn CurrencyFormatter, currency: impl Into<String>) -> Self {
        Self {
            formatter,
            currency: currency.into(),
            use_color: false,
        }
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    fn money(&self, amount: f64) -> String {
        self.formatter.format_amount(amount, &self.currency)
    }

    /// Highlights a padded cell when the amount is below zero.
    fn balance_cell(&self, cell: String, amount: f64) -> String {
        if self.use_color && amount < 0.0 {
            cell.bright_red().to_string()
        } else {
            cell
        }
    }

    /// One row per month, followed by the counted optional expenses of that month.
    pub fn render_table(&self, snapshots: &[MonthSnapshot]) -> String {
        if snapshots.is_empty() {
            return String::new();
        }
        let rows: Vec<[String; 5]> = snapshots
            .iter()
            .map(|snapshot| {
                [
                    snapshot.label.clone(),
                    self.money(snapshot.start_balance),
                    self.money(snapshot.income),
                    self.money(snapshot.total_expenses),
                    self.money(snapshot.end_balance),
                ]
            })
            .collect();

        let mut widths = HEADERS.map(|header| header.chars().count());
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let header = HEADERS
            .iter()
            .zip(widths)
            .map(|(header, width)| pad(header, width, false))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP);
        let rule = "-".repeat(header.chars().count());
        let header = if self.use_color {
            header.bold().to_string()
        } else {
            header
        };

        let mut lines = vec![header, rule];
        for (snapshot, row) in snapshots.iter().zip(&rows) {
            let cells: Vec<String> = row
                .iter()
                .zip(widths)
                .enumerate()
                .map(|(idx, (cell, width))| {
                    let padded = pad(cell, width, idx > 0);
                    match idx {
                        1 => self.balance_cell(padded, snapshot.start_balance),
                        4 => self.balance_cell(padded, snapshot.end_balance),
                        _ => padded,
                    }
                })
                .collect();
            lines.push(cells.join(COLUMN_GAP).trim_end().to_string());
            for expense in &snapshot.optional_expenses {
                lines.push(format!(
                    "    - {}: {}",
                    expense.description,
                    self.money(expense.amount)
                ));
            }
        }
        lines.join("\n")
    }

    pub fn render_summary(&self, summary: &Summary) -> String {
        let flow_marker = if summary.net_flow >= 0.0 {
            "positive"
        } else {
            "negative"
        };
        let lowest = if summary.lowest_balance.label.is_empty() {
            self.money(summary.lowest_balance.value)
        } else {
            format!(
                "{} in {}",
                self.money(summary.lowest_balance.value),
                summary.lowest_balance.label
            )
        };
        let net_flow = format!("{} ({})", self.money(summary.net_flow), flow_marker);
        let net_flow = match (self.use_color, summary.net_flow >= 0.0) {
            (false, _) => net_flow,
            (true, true) => net_flow.bright_green().to_string(),
            (true, false) => net_flow.bright_red().to_string(),
        };
        [
            format!("Total Income:    {}", self.money(summary.total_income)),
            format!("Total Expenses:  {}", self.money(summary.total_expenses)),
            format!("Net Flow:        {}", net_flow),
            format!("Lowest Balance:  {}", lowest),
        ]
        .join("\n")
    }

    /// Verdict line for `project`, naming the first month that clears `safety_balance`.
    pub fn render_affordability(
        &self,
        project: &Project,
        snapshots: &[MonthSnapshot],
        safety_balance: f64,
    ) -> String {
        let subject = format!("Project '{}' ({})", project.name, self.money(project.total_cost));
        match AffordabilityService::first_affordable(snapshots, project, safety_balance) {
            Some(snapshot) => format!(
                "{} is affordable in {}, leaving {} above the safety balance of {}.",
                subject,
                snapshot.label,
                self.money(AffordabilityService::surplus(snapshot, project, safety_balance)),
                self.money(safety_balance)
            ),
            None => format!(
                "{} is not affordable within the forecast horizon while keeping {}.",
                subject,
                self.money(safety_balance)
            ),
        }
    }

    /// Table, summary and (when a project is set) the verdict, separated by blank lines.
    pub fn render_report(&self, report: &ForecastReport) -> String {
        let mut sections = Vec::new();
        let table = self.render_table(&report.forecast.snapshots);
        if !table.is_empty() {
            sections.push(table);
        }
        sections.push(self.render_summary(&report.forecast.summary));
        if let Some(project) = &report.project {
            sections.push(self.render_affordability(
                project,
                &report.forecast.snapshots,
                report.safety_balance,
            ));
        }
        sections.join("\n\n")
    }
}

fn pad(cell: &str, width: usize, right_align: bool) -> String {
    if right_align {
        format!("{:>width$}", cell, width = width)
    } else {
        format!("{:<width$}", cell, width = width)
    }
}

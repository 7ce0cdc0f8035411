use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::{
    affordability_service::AffordabilityService,
    forecast_service::ForecastService,
    horizon_service::{HorizonService, MAX_HORIZON_MONTHS},
    input_service::{ExpenseDraft, InputService, MonthDraft},
    series::BalanceSeries,
    time::Clock,
    CoreError,
};
use cashflow_domain::{ForecastConfig, MonthSnapshot, MonthlyInput, Project};

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

fn snapshot(label: &str, end_balance: f64) -> MonthSnapshot {
    MonthSnapshot {
        label: label.into(),
        start_balance: 0.0,
        income: 0.0,
        core_expenses: 0.0,
        optional_expenses: Vec::new(),
        total_expenses: 0.0,
        end_balance,
    }
}

fn varied_months() -> Vec<MonthlyInput> {
    vec![
        MonthlyInput::new("January 2025", 3200.0).with_expense("Flights", 900.0),
        MonthlyInput::new("February 2025", 0.0),
        MonthlyInput::new("March 2025", 4100.0)
            .with_expense("Dentist", 240.0)
            .with_expense("", 1000.0),
        MonthlyInput::new("April 2025", 2500.0).with_expense("Insurance", 610.25),
    ]
}

#[test]
fn forecast_matches_two_month_example() {
    let config = ForecastConfig::new(1000.0, 500.0);
    let months = vec![
        MonthlyInput::new("June 2025", 800.0),
        MonthlyInput::new("July 2025", 800.0).with_expense("Gym", 200.0),
    ];

    let result = ForecastService::compute(&config, &months);

    assert_eq!(result.snapshots.len(), 2);
    assert_eq!(result.snapshots[0].end_balance, 1300.0);
    assert_eq!(result.snapshots[1].start_balance, 1300.0);
    assert_eq!(result.snapshots[1].total_expenses, 700.0);
    assert_eq!(result.snapshots[1].end_balance, 1400.0);
    assert_eq!(result.summary.total_income, 1600.0);
    assert_eq!(result.summary.total_expenses, 1200.0);
    assert_eq!(result.summary.net_flow, 400.0);
    assert_eq!(result.summary.lowest_balance.value, 1300.0);
    assert_eq!(result.summary.lowest_balance.label, "June 2025");
}

#[test]
fn snapshots_chain_running_balance() {
    let config = ForecastConfig::new(-150.0, 2100.0);
    let result = ForecastService::compute(&config, &varied_months());

    assert_eq!(result.snapshots[0].start_balance, config.starting_balance);
    for pair in result.snapshots.windows(2) {
        assert_eq!(pair[1].start_balance, pair[0].end_balance);
    }
}

#[test]
fn final_balance_conserves_totals() {
    let config = ForecastConfig::new(2750.0, 1800.0);
    let result = ForecastService::compute(&config, &varied_months());

    let expected =
        config.starting_balance + result.summary.total_income - result.summary.total_expenses;
    let last = result.final_balance().expect("non-empty forecast");
    assert!((last - expected).abs() < 1e-9);
}

#[test]
fn engine_runs_past_the_cli_horizon() {
    let config = ForecastConfig::new(500.0, 1250.0);
    let months: Vec<MonthlyInput> = (0..60)
        .map(|idx| {
            let month = MonthlyInput::new(format!("Month {}", idx + 1), 1000.0 + idx as f64 * 25.0);
            if idx % 7 == 0 {
                month.with_expense("Travel", 300.0)
            } else {
                month
            }
        })
        .collect();
    assert!(months.len() > MAX_HORIZON_MONTHS);

    let result = ForecastService::compute(&config, &months);

    assert_eq!(result.snapshots.len(), 60);
    assert_eq!(result.snapshots[0].start_balance, config.starting_balance);
    for pair in result.snapshots.windows(2) {
        assert_eq!(pair[1].start_balance, pair[0].end_balance);
    }
    let expected =
        config.starting_balance + result.summary.total_income - result.summary.total_expenses;
    let last = result.final_balance().expect("non-empty forecast");
    assert!((last - expected).abs() < 1e-6);
    assert_eq!(result.snapshots[59].label, "Month 60");
}

#[test]
fn empty_forecast_yields_zero_summary() {
    let config = ForecastConfig::new(5000.0, 1200.0);
    let result = ForecastService::compute(&config, &[]);

    assert!(result.snapshots.is_empty());
    assert_eq!(result.summary.total_income, 0.0);
    assert_eq!(result.summary.total_expenses, 0.0);
    assert_eq!(result.summary.net_flow, 0.0);
    assert_eq!(result.summary.lowest_balance.value, 0.0);
    assert_eq!(result.summary.lowest_balance.label, "");
    assert!(result.final_balance().is_none());
}

#[test]
fn lowest_balance_prefers_earliest_month_on_tie() {
    // May and July both end at 400.
    let config = ForecastConfig::new(500.0, 600.0);
    let months = vec![
        MonthlyInput::new("May 2025", 500.0),
        MonthlyInput::new("June 2025", 700.0),
        MonthlyInput::new("July 2025", 500.0),
    ];

    let result = ForecastService::compute(&config, &months);

    assert_eq!(result.snapshots[0].end_balance, 400.0);
    assert_eq!(result.snapshots[2].end_balance, 400.0);
    assert_eq!(result.summary.lowest_balance.label, "May 2025");
}

#[test]
fn uncounted_expenses_are_dropped_from_snapshots() {
    let config = ForecastConfig::new(0.0, 100.0);
    let months = vec![MonthlyInput::new("August 2025", 1000.0)
        .with_expense("Concert", 80.0)
        .with_expense("  ", 500.0)
        .with_expense("Refund", -40.0)];

    let result = ForecastService::compute(&config, &months);
    let month = &result.snapshots[0];

    assert_eq!(month.optional_expenses.len(), 1);
    assert_eq!(month.optional_expenses[0].description, "Concert");
    assert_eq!(month.core_expenses, 100.0);
    assert_eq!(month.total_expenses, 180.0);
    assert_eq!(month.end_balance, 820.0);
}

#[test]
fn repeated_runs_are_identical() {
    let config = ForecastConfig::new(1234.5, 987.0).with_project(Project::new("Bike", 900.0));
    let months = varied_months();

    assert_eq!(
        ForecastService::report(&config, &months),
        ForecastService::report(&config, &months)
    );
}

#[test]
fn affordability_picks_first_month_clearing_safety_balance() {
    let snapshots = vec![
        snapshot("Jan", 300.0),
        snapshot("Feb", 1300.0),
        snapshot("Mar", 1400.0),
    ];
    let project = Project::new("Sofa", 1000.0);

    let result = AffordabilityService::check(&snapshots, &project, 100.0);

    assert_eq!(result.affordable_at_month.as_deref(), Some("Feb"));
}

#[test]
fn affordability_reports_unreachable_goal() {
    let snapshots = vec![
        snapshot("Jan", 300.0),
        snapshot("Feb", 1300.0),
        snapshot("Mar", 1400.0),
    ];
    let project = Project::new("Car", 5000.0);

    let result = AffordabilityService::check(&snapshots, &project, 0.0);

    assert!(result.affordable_at_month.is_none());
    assert!(AffordabilityService::check(&[], &project, 0.0)
        .affordable_at_month
        .is_none());
}

#[test]
fn affordability_accepts_exact_safety_margin() {
    let snapshots = vec![snapshot("Jan", 1100.0)];
    let project = Project::new("Sofa", 1000.0);

    let result = AffordabilityService::check(&snapshots, &project, 100.0);

    assert_eq!(result.affordable_at_month.as_deref(), Some("Jan"));
    assert_eq!(AffordabilityService::surplus(&snapshots[0], &project, 100.0), 0.0);
}

#[test]
fn affordability_is_monotonic_in_cost_and_safety() {
    let snapshots: Vec<_> = [200.0, -50.0, 900.0, 1500.0, 1100.0, 2600.0]
        .iter()
        .enumerate()
        .map(|(idx, end)| snapshot(&format!("M{idx}"), *end))
        .collect();
    let position = |label: Option<String>| {
        label.and_then(|label| snapshots.iter().position(|s| s.label == label))
    };

    for cost in [100.0, 400.0, 800.0, 1200.0, 2000.0] {
        for safety in [0.0, 150.0, 600.0] {
            let base = AffordabilityService::check(&snapshots, &Project::new("Goal", cost), safety);
            let Some(base_month) = position(base.affordable_at_month) else {
                continue;
            };
            let cheaper =
                AffordabilityService::check(&snapshots, &Project::new("Goal", cost - 50.0), safety);
            let looser =
                AffordabilityService::check(&snapshots, &Project::new("Goal", cost), safety / 2.0);
            for relaxed in [cheaper, looser] {
                let month = position(relaxed.affordable_at_month).expect("still affordable");
                assert!(month <= base_month);
            }
        }
    }
}

#[test]
fn report_skips_affordability_without_project() {
    let config = ForecastConfig::new(1000.0, 500.0);
    let report = ForecastService::report(&config, &varied_months());

    assert!(report.project.is_none());
    assert!(report.affordability.is_none());
}

#[test]
fn report_checks_configured_project_against_safety_balance() {
    let config = ForecastConfig::new(1000.0, 500.0)
        .with_safety_balance(100.0)
        .with_project(Project::new("Sofa", 1000.0));
    let months = vec![
        MonthlyInput::new("Jan", 300.0).with_expense("Repairs", 500.0),
        MonthlyInput::new("Feb", 1500.0),
        MonthlyInput::new("Mar", 600.0),
    ];

    let report = ForecastService::report(&config, &months);
    let ends: Vec<f64> = report
        .forecast
        .snapshots
        .iter()
        .map(|s| s.end_balance)
        .collect();

    assert_eq!(ends, vec![300.0, 1300.0, 1400.0]);
    let verdict = report.affordability.expect("project configured");
    assert_eq!(verdict.affordable_at_month.as_deref(), Some("Feb"));
}

#[test]
fn coerce_amount_reads_leading_number() {
    assert_eq!(InputService::coerce_amount("  12.5 "), 12.5);
    assert_eq!(InputService::coerce_amount("12abc"), 12.0);
    assert_eq!(InputService::coerce_amount("-40"), -40.0);
    assert_eq!(InputService::coerce_amount(".5"), 0.5);
    assert_eq!(InputService::coerce_amount("1e3"), 1000.0);
    assert_eq!(InputService::coerce_amount("2e"), 2.0);
    assert_eq!(InputService::coerce_amount(""), 0.0);
    assert_eq!(InputService::coerce_amount("abc"), 0.0);
    assert_eq!(InputService::coerce_amount("NaN"), 0.0);
    assert_eq!(InputService::coerce_amount("-"), 0.0);
    assert_eq!(InputService::coerce_amount("1e400"), 0.0);
}

#[test]
fn build_months_pads_missing_drafts() {
    let labels = vec!["January 2026".to_string(), "February 2026".to_string()];
    let drafts = vec![MonthDraft {
        income: "3500".into(),
        expenses: vec![ExpenseDraft {
            description: " Rent deposit ".into(),
            amount: "900.75".into(),
        }],
    }];

    let months = InputService::build_months(&labels, &drafts);

    assert_eq!(months.len(), 2);
    assert_eq!(months[0].income, 3500.0);
    assert_eq!(months[0].optional_expenses[0].description, "Rent deposit");
    assert_eq!(months[0].optional_expenses[0].amount, 900.75);
    assert_eq!(months[1].label, "February 2026");
    assert_eq!(months[1].income, 0.0);
    assert!(months[1].optional_expenses.is_empty());
}

#[test]
fn validate_project_rejects_non_positive_cost() {
    assert!(matches!(
        InputService::validate_project("Boat", "0"),
        Err(CoreError::InvalidProject(_))
    ));
    assert!(matches!(
        InputService::validate_project("Boat", "not a number"),
        Err(CoreError::InvalidProject(_))
    ));

    let project = InputService::validate_project("  ", "2500").expect("valid project");
    assert_eq!(project.name, "Project");
    assert_eq!(project.total_cost, 2500.0);
}

#[test]
fn horizon_labels_roll_over_year_end() {
    let start = NaiveDate::from_ymd_opt(2025, 11, 20).unwrap();
    let labels = HorizonService::labels(start, 4).expect("labels");

    assert_eq!(
        labels,
        vec!["November 2025", "December 2025", "January 2026", "February 2026"]
    );
}

#[test]
fn horizon_rejects_out_of_range_lengths() {
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

    assert_eq!(HorizonService::labels(start, 0), Err(CoreError::InvalidHorizon(0)));
    assert_eq!(
        HorizonService::validate(MAX_HORIZON_MONTHS + 1),
        Err(CoreError::InvalidHorizon(25))
    );
    assert_eq!(
        HorizonService::labels(start, MAX_HORIZON_MONTHS).map(|labels| labels.len()),
        Ok(24)
    );
}

#[test]
fn horizon_labels_follow_clock() {
    let clock = FixedClock(Utc.with_ymd_and_hms(2024, 12, 3, 9, 30, 0).unwrap());
    let labels = HorizonService::labels_from_clock(&clock, 2).expect("labels");

    assert_eq!(labels, vec!["December 2024", "January 2025"]);
}

#[test]
fn parse_month_accepts_year_month_only() {
    assert_eq!(
        HorizonService::parse_month("2025-03"),
        Ok(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())
    );
    assert!(matches!(
        HorizonService::parse_month("March"),
        Err(CoreError::InvalidMonth(_))
    ));
}

#[test]
fn balance_series_marks_negative_months() {
    let snapshots = vec![snapshot("May 2025", 120.0), snapshot("June 2025", -30.0)];
    let series = BalanceSeries::from_snapshots(&snapshots);

    assert_eq!(series.labels, vec!["May", "June"]);
    assert_eq!(series.values, vec![120.0, -30.0]);
    assert_eq!(series.negative, vec![false, true]);
    assert_eq!(series.len(), 2);
}

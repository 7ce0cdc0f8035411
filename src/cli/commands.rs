use std::path::Path;

use cashflow_config::{Config, ConfigManager};
use cashflow_core::{time::SystemClock, BalanceSeries, ForecastService};
use cashflow_domain::ForecastReport;
use serde::Serialize;

use crate::{
    cli::{output, usage_text, Command},
    currency::{
        abbreviate_thousands, CurrencyCode, FormatOptions, LocaleConfig, LocaleCurrencyFormatter,
    },
    errors::CashflowError,
    report::ReportRenderer,
    scenario::Scenario,
    utils::{build_info, persistence},
};

/// JSON shape printed by `forecast --json`.
#[derive(Debug, Serialize)]
pub struct ForecastOutput<'a> {
    #[serde(flatten)]
    pub report: &'a ForecastReport,
    pub chart: BalanceSeries,
    pub axis_labels: Vec<String>,
}

pub fn execute(command: Command) -> Result<(), CashflowError> {
    match command {
        Command::Version => {
            println!("{}", build_info::current().summary());
            return Ok(());
        }
        Command::Help => {
            println!("{}", usage_text());
            return Ok(());
        }
        _ => {}
    }

    let manager = ConfigManager::from_env()?;
    let config = manager.load()?;
    output::set_preferences(output::OutputPreferences::detect(&config));

    match command {
        Command::Forecast { path, json } => forecast(&path, json, &config),
        Command::Template { months } => template(months, &config),
        Command::ConfigShow => {
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
        Command::ConfigSet { key, value } => {
            manager.update(&key, &value)?;
            tracing::info!(%key, %value, "configuration updated");
            output::success(format!("Set {key} = {value}"));
            Ok(())
        }
        Command::Version | Command::Help => Ok(()),
    }
}

fn formatter_for(config: &Config) -> LocaleCurrencyFormatter {
    let options = FormatOptions {
        screen_reader_mode: config.accessibility.plain_output,
        ..FormatOptions::default()
    };
    LocaleCurrencyFormatter::new(LocaleConfig::for_tag(&config.locale), options)
}

fn forecast(path: &Path, json: bool, config: &Config) -> Result<(), CashflowError> {
    let scenario = persistence::load_scenario_from_file(path)?;
    let (forecast_config, months) =
        scenario.to_inputs(&SystemClock, config.default_horizon_months)?;
    let report = ForecastService::report(&forecast_config, &months);
    tracing::info!(
        path = %path.display(),
        months = months.len(),
        project = forecast_config.project.is_some(),
        "forecast generated"
    );

    if json {
        let chart = BalanceSeries::from_snapshots(&report.forecast.snapshots);
        let code = CurrencyCode::new(config.currency.as_str());
        let axis_labels = chart
            .values
            .iter()
            .map(|value| abbreviate_thousands(*value, &code))
            .collect();
        let payload = ForecastOutput {
            report: &report,
            chart,
            axis_labels,
        };
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    let formatter = formatter_for(config);
    let renderer = ReportRenderer::new(&formatter, config.currency.as_str())
        .with_color(output::preferences().use_color);
    output::section("Cash-Flow Forecast");
    println!("{}", renderer.render_report(&report));
    if report.forecast.snapshots.iter().any(|snapshot| snapshot.is_negative()) {
        output::warning("The balance drops below zero during the forecast.");
    }
    Ok(())
}

fn template(months: Option<usize>, config: &Config) -> Result<(), CashflowError> {
    let horizon = months.unwrap_or(config.default_horizon_months);
    let scenario = Scenario::template(&SystemClock, horizon)?;
    println!("{}", serde_json::to_string_pretty(&scenario)?);
    Ok(())
}

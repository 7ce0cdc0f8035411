use std::{fs, path::Path};

use crate::{errors::CashflowError, scenario::Scenario};

/// Writes the scenario to disk atomically by staging to a temporary file.
pub fn save_scenario_to_file(scenario: &Scenario, path: &Path) -> Result<(), CashflowError> {
    let tmp = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(scenario)?;
    fs::write(&tmp, json)?;
    fs::rename(tmp, path)?;
    Ok(())
}

/// Loads a scenario from disk, returning structured errors on failure.
pub fn load_scenario_from_file(path: &Path) -> Result<Scenario, CashflowError> {
    let data = fs::read_to_string(path)?;
    let scenario: Scenario = serde_json::from_str(&data)?;
    tracing::debug!(path = %path.display(), months = scenario.months.len(), "scenario loaded");
    Ok(scenario)
}

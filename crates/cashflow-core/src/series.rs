use cashflow_domain::MonthSnapshot;
use serde::{Deserialize, Serialize};

use crate::horizon_service::HorizonService;

/// Parallel vectors describing the end-balance line chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BalanceSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub negative: Vec<bool>,
}

impl BalanceSeries {
    pub fn from_snapshots(snapshots: &[MonthSnapshot]) -> Self {
        let mut series = Self::default();
        for snapshot in snapshots {
            series
                .labels
                .push(HorizonService::short_label(&snapshot.label).to_string());
            series.values.push(snapshot.end_balance);
            series.negative.push(snapshot.is_negative());
        }
        series
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

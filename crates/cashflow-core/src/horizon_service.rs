//! Forecast horizon bounds and month labels.

use chrono::{Datelike, NaiveDate};

use crate::{time::Clock, CoreError};

pub const MIN_HORIZON_MONTHS: usize = 1;
pub const MAX_HORIZON_MONTHS: usize = 24;
pub const DEFAULT_HORIZON_MONTHS: usize = 12;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub struct HorizonService;

impl HorizonService {
    pub fn validate(months: usize) -> Result<usize, CoreError> {
        if (MIN_HORIZON_MONTHS..=MAX_HORIZON_MONTHS).contains(&months) {
            Ok(months)
        } else {
            Err(CoreError::InvalidHorizon(months))
        }
    }

    /// Labels such as `"November 2025"` for `months` consecutive months from `start`.
    pub fn labels(start: NaiveDate, months: usize) -> Result<Vec<String>, CoreError> {
        let months = Self::validate(months)?;
        let first = start.month0() as usize;
        Ok((0..months)
            .map(|offset| {
                let index = first + offset;
                let year = start.year() + (index / 12) as i32;
                format!("{} {}", MONTH_NAMES[index % 12], year)
            })
            .collect())
    }

    pub fn labels_from_clock(clock: &dyn Clock, months: usize) -> Result<Vec<String>, CoreError> {
        Self::labels(clock.today(), months)
    }

    /// Parses a `YYYY-MM` month into the first day of that month.
    pub fn parse_month(raw: &str) -> Result<NaiveDate, CoreError> {
        let trimmed = raw.trim();
        NaiveDate::parse_from_str(&format!("{trimmed}-01"), "%Y-%m-%d")
            .map_err(|_| CoreError::InvalidMonth(format!("`{trimmed}` is not in YYYY-MM form")))
    }

    /// Month name without the year, used for compact chart axes.
    pub fn short_label(label: &str) -> &str {
        label.split_whitespace().next().unwrap_or("")
    }
}

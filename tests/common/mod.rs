#![allow(dead_code)]

use cashflow_core::time::Clock;
use chrono::{DateTime, TimeZone, Utc};

/// Clock pinned to a fixed instant so month labels are predictable.
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn at(year: i32, month: u32, day: u32) -> Self {
        Self(
            Utc.with_ymd_and_hms(year, month, day, 12, 0, 0)
                .single()
                .expect("valid timestamp"),
        )
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Two-month scenario: 1000 start, 500 core budget, a 200 gym expense in month two.
pub const TWO_MONTH_SCENARIO: &str = r#"{
    "start_month": "2025-06",
    "current_balance": 1000,
    "core_budget": "500",
    "months": [
        { "income": 800 },
        { "income": "800", "expenses": [{ "description": "Gym", "amount": 200 }] }
    ]
}"#;

/// Three months ending at 300, 1300 and 1400 with a 1000 project and 100 safety balance.
pub const PROJECT_SCENARIO: &str = r#"{
    "start_month": "2025-01",
    "current_balance": "1000",
    "core_budget": "500",
    "safety_balance": "100",
    "project": { "name": "Sofa", "total_cost": "1000" },
    "months": [
        { "income": "300", "expenses": [{ "description": "Repairs", "amount": "500" }] },
        { "income": "1500" },
        { "income": "600" }
    ]
}"#;

#![doc(test(attr(deny(warnings))))]

//! Cashflow turns a starting balance, a monthly core budget and per-month
//! income and expenses into a running-balance forecast, and checks when a
//! one-time project becomes affordable.
//!
//! The pure engine lives in `cashflow-core`; this crate adds scenario files,
//! currency formatting, text reports and the `cashflow_cli` front end.

pub mod cli;
pub mod currency;
pub mod errors;
pub mod report;
pub mod scenario;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Cashflow tracing initialized.");
    });
}

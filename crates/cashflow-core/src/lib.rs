//! cashflow-core
//!
//! Forecast engine, affordability checks and the input helpers around them.
//! Depends on cashflow-domain. No CLI, no terminal I/O, no direct storage interactions.

pub mod affordability_service;
pub mod error;
pub mod forecast_service;
pub mod format;
pub mod horizon_service;
pub mod input_service;
pub mod series;
pub mod time;

pub use affordability_service::*;
pub use error::CoreError;
pub use forecast_service::*;
pub use horizon_service::*;
pub use input_service::*;
pub use series::*;

#[cfg(test)]
mod tests;

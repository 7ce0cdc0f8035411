//! cashflow-domain
//!
//! Pure forecast models (monthly inputs, forecast settings, snapshots, summaries).
//! No I/O, no CLI, no storage. Only data types and their small invariants.

pub mod common;
pub mod forecast;
pub mod input;
pub mod plan;

pub use common::*;
pub use forecast::*;
pub use input::*;
pub use plan::*;

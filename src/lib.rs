//! Demand forecasting and replenishment sizing for a product catalog.
//!
//! Monthly demand is rebuilt from the sales ledger for the 24 months before
//! a target month, projected with a simple moving average, padded with a
//! variability-based safety stock and netted against stock on hand.

pub mod error;
pub mod io;
pub mod logging;
pub mod model;
pub mod planning;
pub mod strategy;

pub use error::{PlanError, Result};
pub use model::catalog::{LineItem, Product, Supplier, Transaction};
pub use model::period::{LookbackWindow, Navigation, Period};
pub use model::plan::{PlanRow, PlanSummary};
pub use planning::config::PlanConfig;
pub use planning::engine::{compute_purchase_plan, PlanInputs, PurchasePlanner};

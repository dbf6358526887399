// src/strategy/traits.rs

use std::fmt::Debug;

/// Projects next-period demand from a monthly demand history.
///
/// Implementations are stateless so the same planner can be reused across
/// queries; `Send + Sync` keeps per-product work movable to worker threads.
pub trait DemandForecaster: Debug + Send + Sync {
    /// Returns the unrounded forecast for the period after `history`.
    ///
    /// # Arguments
    /// * `history` - Monthly demand, oldest first.
    /// * `window` - Number of most recent months to consider.
    fn forecast(&self, history: &[u64], window: u32) -> f64;
}

/// Sizes the buffer kept on top of the forecast.
pub trait BufferPolicy: Debug + Send + Sync {
    /// Returns a whole-unit safety stock for `history` (oldest first).
    fn safety_stock(&self, history: &[u64]) -> u64;
}

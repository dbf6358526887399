// src/strategy/implementations.rs

use crate::strategy::optimization::{safety_stock, service_level_z};
use crate::strategy::traits::{BufferPolicy, DemandForecaster};

/// Window used when a product does not specify one.
pub const DEFAULT_FORECAST_WINDOW: u32 = 4;

/// Cycle service level behind the default safety stock.
pub const DEFAULT_SERVICE_LEVEL: f64 = 0.95;

// =========================================================================
// 1. Simple Moving Average
// =========================================================================

/// Averages the last `N` months of demand.
///
/// If the history is shorter than `N` every available month is used, and an
/// empty history forecasts 0.
#[derive(Debug, Clone)]
pub struct SimpleMovingAverage {
    default_window: u32,
}

impl SimpleMovingAverage {
    pub fn new(default_window: u32) -> Self {
        Self {
            default_window: if default_window == 0 {
                DEFAULT_FORECAST_WINDOW
            } else {
                default_window
            },
        }
    }
}

impl Default for SimpleMovingAverage {
    fn default() -> Self {
        Self::new(DEFAULT_FORECAST_WINDOW)
    }
}

impl DemandForecaster for SimpleMovingAverage {
    fn forecast(&self, history: &[u64], window: u32) -> f64 {
        let window = if window == 0 {
            self.default_window
        } else {
            window
        };
        let n = (window as usize).min(history.len());
        if n == 0 {
            return 0.0;
        }

        let recent = &history[history.len() - n..];
        recent.iter().map(|&d| d as f64).sum::<f64>() / n as f64
    }
}

// =========================================================================
// 2. Variability Buffer
// =========================================================================

/// Safety stock proportional to the sample standard deviation of demand.
///
/// Formula: SafetyStock = ceil(Z * StdDev)
#[derive(Debug, Clone)]
pub struct VariabilityBuffer {
    z: f64,
}

impl VariabilityBuffer {
    /// Uses a fixed multiplier. Negative values are treated as 0.
    pub fn new(z: f64) -> Self {
        Self { z: z.max(0.0) }
    }

    /// Derives the multiplier from a target cycle service level (e.g. 0.95).
    pub fn with_service_level(service_level: f64) -> Self {
        Self::new(service_level_z(service_level))
    }

    pub fn z(&self) -> f64 {
        self.z
    }
}

impl Default for VariabilityBuffer {
    fn default() -> Self {
        Self::with_service_level(DEFAULT_SERVICE_LEVEL)
    }
}

impl BufferPolicy for VariabilityBuffer {
    fn safety_stock(&self, history: &[u64]) -> u64 {
        safety_stock(history, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn averages_last_n_months() {
        let sma = SimpleMovingAverage::default();
        let history = [0, 0, 5, 10, 12, 8];
        assert_eq!(sma.forecast(&history, 3), 10.0);
        assert_eq!(sma.forecast(&history, 4), 8.75);
    }

    #[test]
    fn short_history_uses_everything_available() {
        let sma = SimpleMovingAverage::default();
        assert_eq!(sma.forecast(&[6, 9], 4), 7.5);
        assert_eq!(sma.forecast(&[], 4), 0.0);
    }

    #[test]
    fn zero_window_falls_back_to_default() {
        let sma = SimpleMovingAverage::new(2);
        assert_eq!(sma.forecast(&[1, 2, 3, 5], 0), 4.0);
        assert_eq!(SimpleMovingAverage::new(0).forecast(&[1, 1, 1, 9], 0), 3.0);
    }

    #[test]
    fn buffer_scales_with_multiplier() {
        let history = [0, 20, 0, 20];
        let low = VariabilityBuffer::new(1.0).safety_stock(&history);
        let high = VariabilityBuffer::new(2.0).safety_stock(&history);
        assert!(high > low);
        assert_eq!(VariabilityBuffer::new(-1.0).safety_stock(&history), 0);
    }

    #[test]
    fn default_buffer_targets_95_percent() {
        assert!((VariabilityBuffer::default().z() - 1.645).abs() < 1e-2);
    }
}

// src/model/demand.rs

use crate::model::period::Period;
use serde::{Deserialize, Serialize};

/// Demand observed for one product in one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyDemand {
    pub period: Period,
    pub demand: u64,
    /// False when the month had no qualifying transaction and was zero-filled.
    pub observed: bool,
}

/// A contiguous, chronologically ordered monthly demand history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandSeries {
    pub months: Vec<MonthlyDemand>,
    /// Number of months backed by at least one real transaction.
    pub data_months: usize,
}

impl DemandSeries {
    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Raw demand values, oldest first.
    pub fn demands(&self) -> Vec<u64> {
        self.months.iter().map(|m| m.demand).collect()
    }

    pub fn total(&self) -> u64 {
        self.months.iter().map(|m| m.demand).sum()
    }
}

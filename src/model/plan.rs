// src/model/plan.rs

use crate::model::catalog::{Product, Supplier};
use serde::{Deserialize, Serialize};

/// One recommendation line of a purchase plan. Rebuilt on every query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRow {
    pub product: Product,
    pub supplier: Option<Supplier>,
    /// Next-period demand, rounded up to whole units.
    pub forecast: u64,
    pub safety_stock: u64,
    pub order_quantity: u64,
    pub data_months: usize,
    /// Too few observed months for the forecast to be trusted.
    pub low_confidence: bool,
}

impl PlanRow {
    pub fn needs_reorder(&self) -> bool {
        self.order_quantity > 0
    }

    pub fn supplier_name(&self) -> Option<&str> {
        self.supplier.as_ref().map(|s| s.name.as_str())
    }
}

/// Headline figures for a computed plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSummary {
    pub rows: usize,
    pub reorder_rows: usize,
    pub total_order_quantity: u64,
    pub low_confidence_rows: usize,
}

impl PlanSummary {
    pub fn from_rows(rows: &[PlanRow]) -> Self {
        rows.iter().fold(Self::default(), |mut acc, row| {
            acc.rows += 1;
            if row.needs_reorder() {
                acc.reorder_rows += 1;
            }
            acc.total_order_quantity += row.order_quantity;
            if row.low_confidence {
                acc.low_confidence_rows += 1;
            }
            acc
        })
    }
}

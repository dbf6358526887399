// src/io/demand.rs

//! Synthetic catalog and ledger for trying the planner without real data.

use crate::error::{PlanError, Result};
use crate::model::catalog::{Product, Supplier, Transaction};
use crate::model::period::LookbackWindow;
use chrono::Datelike;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// A small catalog covering steady, volatile and sparse sellers.
pub fn demo_catalog() -> (Vec<Product>, Vec<Supplier>) {
    let suppliers = vec![
        Supplier::new("s1", "Sumber Makmur"),
        Supplier::new("s2", "Tani Jaya"),
    ];
    let products = vec![
        Product::new("p1", "Beras Premium", "karung", 40)
            .with_best_n(3)
            .with_supplier("s1"),
        Product::new("p2", "Minyak Goreng", "liter", 120).with_supplier("s2"),
        Product::new("p3", "Gula Pasir", "kg", 15).with_supplier("s1"),
        Product::new("p4", "Kopi Bubuk", "pack", 5).with_best_n(6),
    ];
    (products, suppliers)
}

/// Mean and standard deviation of monthly demand for each demo product.
const DEMO_PROFILES: [(&str, f64, f64); 4] = [
    ("p1", 60.0, 5.0),
    ("p2", 90.0, 35.0),
    ("p3", 25.0, 8.0),
    ("p4", 4.0, 6.0),
];

/// Generates a ledger with one normally distributed sale per product per
/// month of `window`, dated the 15th.
///
/// Samples are rounded and months that come out at or below zero are left
/// without a transaction, which keeps sparse products sparse.
pub fn generate_normal_ledger<R: Rng>(
    window: &LookbackWindow,
    rng: &mut R,
) -> Result<Vec<Transaction>> {
    let mut ledger = Vec::new();

    for (product_id, mean, std_dev) in DEMO_PROFILES {
        let normal = Normal::new(mean, std_dev)
            .map_err(|e| PlanError::Config(format!("demand profile for {product_id}: {e}")))?;

        for period in window.months() {
            let Some(date) = period
                .first_day()
                .and_then(|d| d.with_day0(14))
                .and_then(|d| d.and_hms_opt(12, 0, 0))
            else {
                continue;
            };

            let quantity = normal.sample(rng).round();
            if quantity < 1.0 {
                continue;
            }

            ledger.push(
                Transaction::new(format!("{product_id}-{}", period.short_label()), date)
                    .with_item(product_id, quantity as u32),
            );
        }
    }

    Ok(ledger)
}

// src/planning/ranker.rs

use crate::model::catalog::Supplier;
use crate::model::plan::PlanRow;
use std::collections::HashMap;

/// Joins suppliers, applies the search filter and orders rows by
/// recommended order quantity, largest first.
///
/// The sort is stable: rows with equal quantities keep their input order.
pub fn rank_plan(rows: Vec<PlanRow>, suppliers: &[Supplier], query: &str) -> Vec<PlanRow> {
    let mut rows = attach_suppliers(rows, suppliers);

    if !query.trim().is_empty() {
        let needle = query.to_lowercase();
        rows.retain(|row| matches_query(row, &needle));
    }

    rows.sort_by(|a, b| b.order_quantity.cmp(&a.order_quantity));
    rows
}

/// Resolves each row's `supplier_id`. Unknown ids leave the supplier empty;
/// with duplicate ids the first supplier listed wins.
pub fn attach_suppliers(mut rows: Vec<PlanRow>, suppliers: &[Supplier]) -> Vec<PlanRow> {
    let mut by_id: HashMap<&str, &Supplier> = HashMap::with_capacity(suppliers.len());
    for supplier in suppliers {
        by_id.entry(supplier.id.as_str()).or_insert(supplier);
    }

    for row in &mut rows {
        row.supplier = row
            .product
            .supplier_id
            .as_deref()
            .and_then(|id| by_id.get(id))
            .map(|s| (*s).clone());
    }
    rows
}

/// `needle` must already be lowercase.
fn matches_query(row: &PlanRow, needle: &str) -> bool {
    row.product.name.to_lowercase().contains(needle)
        || row
            .supplier_name()
            .is_some_and(|name| name.to_lowercase().contains(needle))
        || row.product.unit.to_lowercase().contains(needle)
}

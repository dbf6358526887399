// src/io/reporting.rs

use crate::error::Result;
use crate::model::plan::PlanRow;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Flat CSV shape of a plan row.
#[derive(Debug, Serialize)]
struct PlanRecord<'a> {
    product_id: &'a str,
    name: &'a str,
    unit: &'a str,
    supplier: &'a str,
    current_stock: u64,
    forecast: u64,
    safety_stock: u64,
    order_quantity: u64,
    data_months: usize,
    low_confidence: bool,
}

impl<'a> From<&'a PlanRow> for PlanRecord<'a> {
    fn from(row: &'a PlanRow) -> Self {
        Self {
            product_id: &row.product.id,
            name: &row.product.name,
            unit: &row.product.unit,
            supplier: row.supplier_name().unwrap_or(""),
            current_stock: row.product.current_stock,
            forecast: row.forecast,
            safety_stock: row.safety_stock,
            order_quantity: row.order_quantity,
            data_months: row.data_months,
            low_confidence: row.low_confidence,
        }
    }
}

/// Writes the ranked plan to a CSV file, keeping row order.
///
/// # Arguments
/// * `file_path` - Destination (e.g. "out/plan_2025_03.csv").
/// * `rows` - Rows as returned by the planner.
pub fn write_plan(file_path: impl AsRef<Path>, rows: &[PlanRow]) -> Result<()> {
    let path = file_path.as_ref();
    write_plan_to(csv::Writer::from_path(path)?, rows)?;

    info!(rows = rows.len(), path = %path.display(), "exported purchase plan");
    Ok(())
}

pub fn write_plan_to<W: Write>(mut wtr: csv::Writer<W>, rows: &[PlanRow]) -> Result<()> {
    for row in rows {
        wtr.serialize(PlanRecord::from(row))?;
    }
    wtr.flush()?;
    Ok(())
}

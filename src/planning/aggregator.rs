// src/planning/aggregator.rs

use crate::model::catalog::Transaction;
use crate::model::demand::{DemandSeries, MonthlyDemand};
use crate::model::period::{LookbackWindow, Period};

/// Buckets one product's sales into a monthly series covering `window`.
///
/// A transaction counts when its date falls inside the window (inclusive of
/// the first and last day) and it carries at least one line for
/// `product_id`. Months without such a transaction are zero-filled, so the
/// series always has `window.len()` entries.
pub fn aggregate_monthly(
    transactions: &[Transaction],
    product_id: &str,
    window: &LookbackWindow,
) -> DemandSeries {
    let mut months: Vec<MonthlyDemand> = window
        .months()
        .map(|period| MonthlyDemand {
            period,
            demand: 0,
            observed: false,
        })
        .collect();

    for transaction in transactions {
        let Some(index) = window.index_of(Period::of_date(&transaction.date)) else {
            continue;
        };
        let Some(quantity) = transaction.quantity_of(product_id) else {
            continue;
        };

        let bucket = &mut months[index];
        bucket.demand += quantity;
        bucket.observed = true;
    }

    let data_months = months.iter().filter(|m| m.observed).count();
    DemandSeries {
        months,
        data_months,
    }
}

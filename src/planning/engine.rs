// src/planning/engine.rs

use crate::model::catalog::{Product, Supplier, Transaction};
use crate::model::period::{LookbackWindow, Period};
use crate::model::plan::PlanRow;
use crate::planning::aggregator::aggregate_monthly;
use crate::planning::config::{PlanConfig, LOOKBACK_MONTHS};
use crate::planning::ranker::rank_plan;
use crate::strategy::implementations::{SimpleMovingAverage, VariabilityBuffer};
use crate::strategy::optimization::{ceil_units, order_quantity};
use crate::strategy::traits::{BufferPolicy, DemandForecaster};
use tracing::{debug, info};

/// Read-only snapshots handed over by the catalog and ledger owners.
#[derive(Debug, Clone, Copy)]
pub struct PlanInputs<'a> {
    pub products: &'a [Product],
    pub transactions: &'a [Transaction],
    pub suppliers: &'a [Supplier],
}

/// Turns catalog + ledger snapshots into a ranked purchase plan.
///
/// Holds no state between queries; every call recomputes from its inputs.
#[derive(Debug)]
pub struct PurchasePlanner {
    config: PlanConfig,
    forecaster: Box<dyn DemandForecaster>,
    buffer: Box<dyn BufferPolicy>,
}

impl PurchasePlanner {
    /// Moving-average forecaster and variability buffer sized from `config`.
    pub fn new(config: PlanConfig) -> Self {
        let forecaster = Box::new(SimpleMovingAverage::new(config.default_forecast_window));
        let buffer = Box::new(VariabilityBuffer::new(config.safety_z()));
        Self::with_models(config, forecaster, buffer)
    }

    pub fn with_models(
        config: PlanConfig,
        forecaster: Box<dyn DemandForecaster>,
        buffer: Box<dyn BufferPolicy>,
    ) -> Self {
        Self {
            config,
            forecaster,
            buffer,
        }
    }

    pub fn config(&self) -> &PlanConfig {
        &self.config
    }

    /// History window used for a target month.
    pub fn window_for(&self, target: Period) -> LookbackWindow {
        target.lookback(LOOKBACK_MONTHS)
    }

    /// Computes the unranked row for one product. Supplier is left empty.
    pub fn plan_product(
        &self,
        product: &Product,
        transactions: &[Transaction],
        window: &LookbackWindow,
    ) -> PlanRow {
        let series = aggregate_monthly(transactions, &product.id, window);
        let history = series.demands();

        let window_len = product.forecast_window(self.config.default_forecast_window);
        let forecast = ceil_units(self.forecaster.forecast(&history, window_len));
        let safety_stock = self.buffer.safety_stock(&history);
        let order_quantity = order_quantity(forecast, safety_stock, product.current_stock);

        debug!(
            product = %product.id,
            window = window_len,
            data_months = series.data_months,
            forecast,
            safety_stock,
            order_quantity,
            "planned product"
        );

        PlanRow {
            product: product.clone(),
            supplier: None,
            forecast,
            safety_stock,
            order_quantity,
            data_months: series.data_months,
            low_confidence: series.data_months < self.config.min_confident_months,
        }
    }

    /// Plans every product for `target`, then joins suppliers, filters by
    /// `query` and sorts by order quantity descending.
    pub fn compute_plan(&self, inputs: &PlanInputs<'_>, target: Period, query: &str) -> Vec<PlanRow> {
        let window = self.window_for(target);

        let rows: Vec<PlanRow> = inputs
            .products
            .iter()
            .map(|product| self.plan_product(product, inputs.transactions, &window))
            .collect();

        let ranked = rank_plan(rows, inputs.suppliers, query);

        info!(
            period = %target,
            window = %window.label(),
            products = inputs.products.len(),
            transactions = inputs.transactions.len(),
            rows = ranked.len(),
            "computed purchase plan"
        );
        ranked
    }
}

impl Default for PurchasePlanner {
    fn default() -> Self {
        Self::new(PlanConfig::default())
    }
}

/// Plan for `target_month` (zero-based, 0 = January) of `target_year` with
/// the default configuration.
pub fn compute_purchase_plan(
    products: &[Product],
    transactions: &[Transaction],
    suppliers: &[Supplier],
    target_month: u32,
    target_year: i32,
    search_query: &str,
) -> Vec<PlanRow> {
    let inputs = PlanInputs {
        products,
        transactions,
        suppliers,
    };
    PurchasePlanner::default().compute_plan(
        &inputs,
        Period::new(target_year, target_month),
        search_query,
    )
}

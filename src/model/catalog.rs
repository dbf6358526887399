// src/model/catalog.rs

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

/// A stocked item as supplied by the catalog. Read-only to the planner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub unit: String,
    pub current_stock: u64,
    /// Moving-average window length; `None` or 0 means "use the default".
    /// Unreadable values (negative, fractional, text) load as `None`.
    #[serde(default, deserialize_with = "lenient_window")]
    pub best_n: Option<u32>,
    #[serde(default)]
    pub supplier_id: Option<String>,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        unit: impl Into<String>,
        current_stock: u64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit: unit.into(),
            current_stock,
            best_n: None,
            supplier_id: None,
        }
    }

    pub fn with_best_n(mut self, best_n: u32) -> Self {
        self.best_n = Some(best_n);
        self
    }

    pub fn with_supplier(mut self, supplier_id: impl Into<String>) -> Self {
        self.supplier_id = Some(supplier_id.into());
        self
    }

    /// Effective forecast window, falling back to `default` for missing or zero values.
    pub fn forecast_window(&self, default: u32) -> u32 {
        match self.best_n {
            Some(n) if n > 0 => n,
            _ => default,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawWindow {
    Int(i64),
    Float(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

fn lenient_window<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawWindow>::deserialize(deserializer)?;
    let value = match raw {
        Some(RawWindow::Int(n)) => Some(n),
        Some(RawWindow::Float(f)) if f.fract() == 0.0 => Some(f as i64),
        Some(RawWindow::Text(text)) => text.trim().parse::<i64>().ok(),
        _ => None,
    };
    Ok(value
        .filter(|&n| n > 0)
        .and_then(|n| u32::try_from(n).ok()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: String,
    pub name: String,
}

impl Supplier {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: String,
    pub quantity: u32,
}

/// A historical sale from the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub date: NaiveDateTime,
    pub items: Vec<LineItem>,
}

impl Transaction {
    pub fn new(id: impl Into<String>, date: NaiveDateTime) -> Self {
        Self {
            id: id.into(),
            date,
            items: Vec::new(),
        }
    }

    pub fn with_item(mut self, product_id: impl Into<String>, quantity: u32) -> Self {
        self.items.push(LineItem {
            product_id: product_id.into(),
            quantity,
        });
        self
    }

    /// Total quantity of `product_id` on this transaction, or `None` when
    /// the product does not appear at all.
    pub fn quantity_of(&self, product_id: &str) -> Option<u64> {
        self.items
            .iter()
            .filter(|item| item.product_id == product_id)
            .fold(None, |acc, item| {
                Some(acc.unwrap_or(0) + item.quantity as u64)
            })
    }
}

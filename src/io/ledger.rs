// src/io/ledger.rs

use crate::error::{PlanError, Result};
use crate::model::catalog::{LineItem, Product, Supplier, Transaction};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// One ledger line: a single product line of a transaction.
#[derive(Debug, Deserialize)]
struct LedgerRecord {
    transaction_id: String,
    date: String,
    product_id: String,
    quantity: u32,
}

/// Reads the product catalog.
///
/// Columns: `id,name,unit,current_stock,best_n,supplier_id`
/// (`best_n` and `supplier_id` may be empty).
pub fn load_products(file_path: impl AsRef<Path>) -> Result<Vec<Product>> {
    read_products(csv::Reader::from_path(file_path)?)
}

pub fn read_products<R: Read>(mut rdr: csv::Reader<R>) -> Result<Vec<Product>> {
    let products = rdr.deserialize().collect::<std::result::Result<Vec<Product>, _>>()?;
    Ok(products)
}

/// Reads suppliers. Columns: `id,name`
pub fn load_suppliers(file_path: impl AsRef<Path>) -> Result<Vec<Supplier>> {
    read_suppliers(csv::Reader::from_path(file_path)?)
}

pub fn read_suppliers<R: Read>(mut rdr: csv::Reader<R>) -> Result<Vec<Supplier>> {
    let suppliers = rdr.deserialize().collect::<std::result::Result<Vec<Supplier>, _>>()?;
    Ok(suppliers)
}

/// Reads the sales ledger.
///
/// Columns: `transaction_id,date,product_id,quantity`. Rows sharing a
/// `transaction_id` are merged into one transaction (the first row's date
/// wins); transactions keep the order in which they first appear.
pub fn load_transactions(file_path: impl AsRef<Path>) -> Result<Vec<Transaction>> {
    read_transactions(csv::Reader::from_path(file_path)?)
}

pub fn read_transactions<R: Read>(mut rdr: csv::Reader<R>) -> Result<Vec<Transaction>> {
    let mut transactions: Vec<Transaction> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for (index, record) in rdr.deserialize::<LedgerRecord>().enumerate() {
        let record = record?;
        let item = LineItem {
            product_id: record.product_id,
            quantity: record.quantity,
        };

        if let Some(&pos) = positions.get(&record.transaction_id) {
            transactions[pos].items.push(item);
            continue;
        }

        // Header is line 1.
        let date = parse_timestamp(&record.date).ok_or_else(|| PlanError::InvalidDate {
            line: index + 2,
            value: record.date.clone(),
        })?;

        positions.insert(record.transaction_id.clone(), transactions.len());
        transactions.push(Transaction {
            id: record.transaction_id,
            date,
            items: vec![item],
        });
    }

    Ok(transactions)
}

/// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS` and `YYYY-MM-DD HH:MM:SS`.
/// Bare dates are taken as midnight.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader(data: &str) -> csv::Reader<&[u8]> {
        csv::Reader::from_reader(data.as_bytes())
    }

    #[test]
    fn products_with_optional_columns() {
        let data = "id,name,unit,current_stock,best_n,supplier_id\n\
                    p1,Rice,kg,12,3,s1\n\
                    p2,Salt,pack,0,,\n";
        let products = read_products(reader(data)).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].best_n, Some(3));
        assert_eq!(products[0].supplier_id.as_deref(), Some("s1"));
        assert_eq!(products[1].best_n, None);
        assert_eq!(products[1].supplier_id, None);
    }

    #[test]
    fn unreadable_best_n_falls_back_to_default() {
        let data = "id,name,unit,current_stock,best_n,supplier_id\n\
                    p1,Rice,kg,12,-1,s1\n\
                    p2,Salt,pack,3,abc,\n\
                    p3,Oil,liter,0,2.5,\n\
                    p4,Tea,box,1,0,\n\
                    p5,Jam,jar,1,true,\n\
                    p6,Milk,box,1,6.0,\n";
        let products = read_products(reader(data)).unwrap();
        assert_eq!(products.len(), 6);
        for product in &products[..5] {
            assert_eq!(product.best_n, None, "{}", product.id);
            assert_eq!(product.forecast_window(4), 4);
        }
        assert_eq!(products[5].best_n, Some(6));
        assert_eq!(products[0].supplier_id.as_deref(), Some("s1"));
    }

    #[test]
    fn ledger_rows_group_into_transactions() {
        let data = "transaction_id,date,product_id,quantity\n\
                    t1,2024-03-05,p1,2\n\
                    t2,2024-03-06T14:30:00,p2,1\n\
                    t1,2024-03-05,p2,4\n";
        let txs = read_transactions(reader(data)).unwrap();
        assert_eq!(txs.len(), 2);
        assert_eq!(txs[0].id, "t1");
        assert_eq!(txs[0].items.len(), 2);
        assert_eq!(txs[0].quantity_of("p2"), Some(4));
        assert_eq!(txs[1].date, parse_timestamp("2024-03-06 14:30:00").unwrap());
    }

    #[test]
    fn bad_date_reports_line() {
        let data = "transaction_id,date,product_id,quantity\n\
                    t1,2024-03-05,p1,2\n\
                    t2,05/03/2024,p1,2\n";
        match read_transactions(reader(data)) {
            Err(PlanError::InvalidDate { line, value }) => {
                assert_eq!(line, 3);
                assert_eq!(value, "05/03/2024");
            }
            other => panic!("expected invalid date, got {other:?}"),
        }
    }

    #[test]
    fn negative_quantity_is_rejected() {
        let data = "transaction_id,date,product_id,quantity\n\
                    t1,2024-03-05,p1,-2\n";
        assert!(matches!(read_transactions(reader(data)), Err(PlanError::Csv(_))));
    }
}

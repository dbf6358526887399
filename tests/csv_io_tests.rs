//! CSV adapter tests: load catalog + ledger from disk, plan, export.

use purchase_plan::io::{ledger, reporting};
use purchase_plan::{Period, PlanInputs, PurchasePlanner};
use std::fs;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_plan_from_csv_files() {
    let dir = TempDir::new().unwrap();
    let products = write(
        &dir,
        "products.csv",
        "id,name,unit,current_stock,best_n,supplier_id\n\
         p1,Beras,karung,5,3,s1\n\
         p2,Gula,kg,100,,\n",
    );
    let suppliers = write(&dir, "suppliers.csv", "id,name\ns1,Sumber Makmur\n");
    let transactions = write(
        &dir,
        "ledger.csv",
        "transaction_id,date,product_id,quantity\n\
         t1,2025-01-10,p1,10\n\
         t2,2025-02-11T08:00:00,p1,12\n\
         t2,2025-02-11T08:00:00,p2,3\n\
         t3,2025-03-31 23:59:59,p1,8\n\
         t4,2025-04-01,p1,500\n",
    );

    let products = ledger::load_products(&products).unwrap();
    let suppliers = ledger::load_suppliers(&suppliers).unwrap();
    let transactions = ledger::load_transactions(&transactions).unwrap();
    assert_eq!(transactions.len(), 4);

    let inputs = PlanInputs {
        products: &products,
        transactions: &transactions,
        suppliers: &suppliers,
    };
    let rows = PurchasePlanner::default().compute_plan(&inputs, Period::new(2025, 3), "");

    assert_eq!(rows[0].product.id, "p1");
    assert_eq!(rows[0].forecast, 10);
    assert_eq!(rows[0].data_months, 3);
    assert_eq!(rows[0].supplier_name(), Some("Sumber Makmur"));
    assert_eq!(rows[1].order_quantity, 0);

    let out = dir.path().join("plan.csv");
    reporting::write_plan(&out, &rows).unwrap();
    let text = fs::read_to_string(&out).unwrap();
    assert_eq!(text.lines().count(), 3);
    assert!(text.lines().nth(1).unwrap().starts_with("p1,Beras,karung,Sumber Makmur,5,10,"));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    assert!(ledger::load_products(dir.path().join("absent.csv")).is_err());
}

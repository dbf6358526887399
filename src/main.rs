use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use purchase_plan::io::{demand, ledger, reporting};
use purchase_plan::{logging, Navigation, Period, PlanConfig, PlanInputs, PlanSummary, PurchasePlanner};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "purchase-plan",
    about = "Recommend reorder quantities from 24 months of sales history",
    after_help = "Examples:\n  purchase-plan --demo\n  purchase-plan --products products.csv --transactions ledger.csv --month 3 --year 2025"
)]
struct Cli {
    #[arg(long, required_unless_present = "demo", help = "Product catalog CSV")]
    products: Option<PathBuf>,
    #[arg(long, help = "Supplier CSV")]
    suppliers: Option<PathBuf>,
    #[arg(long, required_unless_present = "demo", help = "Sales ledger CSV")]
    transactions: Option<PathBuf>,
    #[arg(long, help = "Use a generated catalog and ledger")]
    demo: bool,
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12), help = "Target month, 1-12 (default: next month)")]
    month: Option<u32>,
    #[arg(long, help = "Target year (default: year of next month)")]
    year: Option<i32>,
    #[arg(long, conflicts_with = "next", help = "Step the target one month back")]
    previous: bool,
    #[arg(long, help = "Step the target one month forward")]
    next: bool,
    #[arg(long, default_value = "", help = "Case-insensitive filter on name, supplier or unit")]
    search: String,
    #[arg(long, help = "TOML file overriding planning parameters")]
    config: Option<PathBuf>,
    #[arg(long, default_value = "purchase_plan.csv", help = "Where to write the plan")]
    output: PathBuf,
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    // 1. CONFIGURATION
    let config = match &cli.config {
        Some(path) => PlanConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => PlanConfig::default(),
    };

    // 2. TARGET PERIOD
    let target = resolve_target(&cli);
    let planner = PurchasePlanner::new(config);
    let window = planner.window_for(target);
    println!("=== Purchase Plan: {} ===", target);
    println!("History: {} ({} months)", window.label(), window.len());

    // 3. INPUTS
    let (products, suppliers, transactions) = if cli.demo {
        let (products, suppliers) = demand::demo_catalog();
        let transactions = demand::generate_normal_ledger(&window, &mut rand::thread_rng())?;
        (products, suppliers, transactions)
    } else {
        load_inputs(&cli)?
    };

    // 4. PLAN
    let inputs = PlanInputs {
        products: &products,
        transactions: &transactions,
        suppliers: &suppliers,
    };
    let rows = planner.compute_plan(&inputs, target, &cli.search);

    // 5. REPORT
    println!(
        "\n{:<24} {:>8} {:>9} {:>7} {:>7} {:>7}",
        "Product", "Unit", "Forecast", "Safety", "Stock", "Order"
    );
    for row in &rows {
        let warning = if row.low_confidence {
            format!("  (only {} months of data)", row.data_months)
        } else {
            String::new()
        };
        println!(
            "{:<24} {:>8} {:>9} {:>7} {:>7} {:>7}{}",
            row.product.name,
            row.product.unit,
            row.forecast,
            row.safety_stock,
            row.product.current_stock,
            row.order_quantity,
            warning
        );
    }
    if rows.is_empty() {
        if cli.search.trim().is_empty() {
            println!("No products in catalog.");
        } else {
            println!("No products match {:?}.", cli.search);
        }
    }

    let summary = PlanSummary::from_rows(&rows);
    println!(
        "\n{} of {} products need reordering ({} units total, {} low-confidence).",
        summary.reorder_rows, summary.rows, summary.total_order_quantity, summary.low_confidence_rows
    );

    reporting::write_plan(&cli.output, &rows)
        .with_context(|| format!("writing plan to {}", cli.output.display()))?;
    println!("Plan written to {}", cli.output.display());
    Ok(())
}

fn resolve_target(cli: &Cli) -> Period {
    let default = Period::following(Local::now().date_naive());
    let mut target = match (cli.month, cli.year) {
        (None, None) => default,
        (month, year) => default.navigate(Navigation::Set {
            month: month.map(|m| m - 1).unwrap_or(default.month()),
            year: year.unwrap_or(default.year()),
        }),
    };

    if cli.previous {
        target = target.navigate(Navigation::Previous);
    } else if cli.next {
        target = target.navigate(Navigation::Next);
    }
    target
}

type Inputs = (
    Vec<purchase_plan::Product>,
    Vec<purchase_plan::Supplier>,
    Vec<purchase_plan::Transaction>,
);

fn load_inputs(cli: &Cli) -> Result<Inputs> {
    let products_path = cli.products.as_ref().context("--products is required")?;
    let ledger_path = cli.transactions.as_ref().context("--transactions is required")?;

    let products = ledger::load_products(products_path)
        .with_context(|| format!("reading products from {}", products_path.display()))?;
    let suppliers = match &cli.suppliers {
        Some(path) => ledger::load_suppliers(path)
            .with_context(|| format!("reading suppliers from {}", path.display()))?,
        None => Vec::new(),
    };
    let transactions = ledger::load_transactions(ledger_path)
        .with_context(|| format!("reading ledger from {}", ledger_path.display()))?;

    Ok((products, suppliers, transactions))
}

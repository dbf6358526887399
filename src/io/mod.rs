pub mod demand;
pub mod ledger;
pub mod reporting;

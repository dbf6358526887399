pub mod catalog;
pub mod demand;
pub mod period;
pub mod plan;

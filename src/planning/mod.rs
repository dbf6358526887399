pub mod aggregator;
pub mod config;
pub mod engine;
pub mod ranker;

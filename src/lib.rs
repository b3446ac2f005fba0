pub mod chart;
pub mod config;
pub mod errors;
pub mod report;
pub mod results;
pub mod runner;
pub mod stats;
pub mod types;

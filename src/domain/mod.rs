pub mod client;
pub mod metric;
pub mod types;

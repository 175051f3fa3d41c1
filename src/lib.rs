pub mod aggregator;
pub mod error;
pub mod group_key;
pub mod metric;
pub mod pipeline;
pub mod reporter;
pub mod source;

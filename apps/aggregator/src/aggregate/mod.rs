//! Cumulative aggregation of per-record facts into the entity collections.

pub mod aggregator;
pub mod industry;
pub mod salary_stats;

pub use aggregator::Aggregator;

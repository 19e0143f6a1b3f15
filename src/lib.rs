//! Row-by-row iteration versus grouped aggregation, timed side by side.
//! Run Criterion benchmarks with `cargo bench` to inspect reports under `target/criterion`.

pub mod bench_utils;
pub mod candidates;
pub mod comparator;
pub mod config;
pub mod dataset;
pub mod errors;
pub mod groupby;
pub mod logging;

pub use crate::comparator::{Candidate, Measurement, TimingSummary, measure_performance};
pub use crate::dataset::{Column, Dataset, Row, Value};
pub use crate::errors::AggBenchError;
pub use crate::groupby::{Agg, GroupBy, GroupedFrame};

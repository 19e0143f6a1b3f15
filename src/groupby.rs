//! Grouped aggregation over a categorical key column.
//!
//! Rows are factorized once into integer group codes (groups ordered by key,
//! as pandas does with `sort=True`); each requested aggregate then walks its
//! value column a single time, accumulating into per-code slots.

use std::collections::BTreeMap;

use ahash::AHashMap;

use crate::{AggBenchError, dataset::Dataset};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Agg {
    Sum,
    Mean,
    Count,
    /// Percentage (0-100) of values strictly greater than zero.
    PositiveShare,
}

impl Agg {
    pub fn name(&self) -> &'static str {
        match self {
            Agg::Sum => "sum",
            Agg::Mean => "mean",
            Agg::Count => "count",
            Agg::PositiveShare => "positive_share",
        }
    }
}

#[derive(Debug)]
pub struct GroupBy<'a> {
    dataset: &'a Dataset,
    keys: Vec<String>,
    codes: Vec<usize>,
    sizes: Vec<usize>,
}

impl<'a> GroupBy<'a> {
    pub fn new(dataset: &'a Dataset, key: &str) -> Result<Self, AggBenchError> {
        let labels = dataset.categories(key)?;
        let mut first_seen: AHashMap<&str, usize> = AHashMap::new();
        let mut raw_codes = Vec::with_capacity(labels.len());
        for label in labels {
            let next = first_seen.len();
            raw_codes.push(*first_seen.entry(label.as_str()).or_insert(next));
        }

        let mut ordered: Vec<(&str, usize)> = first_seen.into_iter().collect();
        ordered.sort_unstable_by(|a, b| a.0.cmp(b.0));
        let mut remap = vec![0usize; ordered.len()];
        for (sorted_idx, (_, raw)) in ordered.iter().enumerate() {
            remap[*raw] = sorted_idx;
        }

        let mut sizes = vec![0usize; ordered.len()];
        let codes: Vec<usize> = raw_codes
            .into_iter()
            .map(|raw| {
                let code = remap[raw];
                sizes[code] += 1;
                code
            })
            .collect();
        let keys = ordered.into_iter().map(|(k, _)| k.to_string()).collect();
        Ok(Self {
            dataset,
            keys,
            codes,
            sizes,
        })
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn group_count(&self) -> usize {
        self.keys.len()
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    pub fn agg(&self, plan: &[(&str, &[Agg])]) -> Result<GroupedFrame, AggBenchError> {
        let mut cells = BTreeMap::new();
        for (column, aggs) in plan {
            let values = self.dataset.numeric(column)?;
            let mut sums = vec![0.0f64; self.group_count()];
            let mut positives = vec![0usize; self.group_count()];
            for (code, value) in self.codes.iter().zip(&values) {
                sums[*code] += *value;
                if *value > 0.0 {
                    positives[*code] += 1;
                }
            }
            for agg in aggs.iter() {
                let out: Vec<f64> = (0..self.group_count())
                    .map(|code| {
                        let size = self.sizes[code] as f64;
                        match agg {
                            Agg::Sum => sums[code],
                            Agg::Mean => sums[code] / size,
                            Agg::Count => size,
                            Agg::PositiveShare => positives[code] as f64 / size * 100.0,
                        }
                    })
                    .collect();
                cells.insert((column.to_string(), *agg), out);
            }
        }
        Ok(GroupedFrame {
            keys: self.keys.clone(),
            cells,
        })
    }
}

/// Result of [`GroupBy::agg`]: one row per group, one cell column per
/// `(column, aggregate)` pair.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupedFrame {
    keys: Vec<String>,
    cells: BTreeMap<(String, Agg), Vec<f64>>,
}

impl GroupedFrame {
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn get(&self, key: &str, column: &str, agg: Agg) -> Option<f64> {
        let row = self.keys.iter().position(|k| k == key)?;
        self.cells
            .get(&(column.to_string(), agg))
            .map(|values| values[row])
    }

    /// Rounds every cell to `decimals` places, ties to even.
    pub fn round(mut self, decimals: u32) -> Self {
        let scale = 10f64.powi(decimals as i32);
        for values in self.cells.values_mut() {
            for value in values.iter_mut() {
                *value = (*value * scale).round_ties_even() / scale;
            }
        }
        self
    }
}

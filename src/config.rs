use std::env;

use crate::{
    bench_utils::{BetDatasetConfig, DEFAULT_ROWS, DEFAULT_SEED},
    comparator::DEFAULT_REPETITIONS,
};

const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Clone, Debug, PartialEq)]
pub struct CompareConfig {
    pub rows: usize,
    pub categories: Vec<String>,
    pub repetitions: usize,
    pub seed: u64,
    pub log_filter: String,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            categories: vec!["Sports Betting".to_string()],
            repetitions: DEFAULT_REPETITIONS,
            seed: DEFAULT_SEED,
            log_filter: default_log_filter(),
        }
    }
}

impl CompareConfig {
    /// Parses `args` as passed to `main`, so `args[0]` is skipped.
    pub fn from_args(args: &[&str]) -> Result<Self, String> {
        let mut config = Self::default();
        let mut iter = args.iter().skip(1);
        while let Some(arg) = iter.next() {
            match *arg {
                "--rows" => {
                    config.rows = parse_number("--rows", iter.next())?;
                }
                "--repetitions" | "--runs" => {
                    config.repetitions = parse_number("--repetitions", iter.next())?;
                }
                "--seed" => {
                    config.seed = parse_number("--seed", iter.next())?;
                }
                "--categories" => {
                    let raw = iter
                        .next()
                        .ok_or_else(|| "--categories requires a value".to_string())?;
                    config.categories = raw
                        .split(',')
                        .map(str::trim)
                        .filter(|c| !c.is_empty())
                        .map(str::to_string)
                        .collect();
                    if config.categories.is_empty() {
                        return Err("--categories requires at least one name".to_string());
                    }
                }
                "--log" => {
                    config.log_filter = iter
                        .next()
                        .ok_or_else(|| "--log requires a value".to_string())?
                        .to_string();
                }
                other if other.starts_with('-') => {
                    return Err(format!("unknown flag {other}"));
                }
                other => {
                    return Err(format!("unexpected argument {other}"));
                }
            }
        }
        Ok(config)
    }

    pub fn dataset(&self) -> BetDatasetConfig {
        BetDatasetConfig {
            rows: self.rows,
            categories: self.categories.clone(),
            seed: self.seed,
            ..BetDatasetConfig::default()
        }
    }

    pub fn help() -> &'static str {
        "Usage: aggbench [--rows N] [--repetitions N] [--categories A,B] [--seed N] [--log FILTER]\n"
    }
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: Option<&&str>) -> Result<T, String> {
    let raw = value.ok_or_else(|| format!("{flag} requires a value"))?;
    raw.parse()
        .map_err(|_| format!("{flag} expects a non-negative integer, got {raw}"))
}

fn default_log_filter() -> String {
    env::var("AGGBENCH_LOG")
        .or_else(|_| env::var("RUST_LOG"))
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string())
}

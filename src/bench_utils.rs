use rand::{Rng, SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, LogNormal};

use crate::{
    AggBenchError,
    candidates::{BET_AMOUNT, GAME_TYPE, WIN_LOSS, WINNINGS},
    dataset::{Column, Dataset},
};

pub const DEFAULT_ROWS: usize = 1_000_000;
pub const DEFAULT_SEED: u64 = 0xB37A;
const LOG_MEAN: f64 = 3.0;
const LOG_SIGMA: f64 = 1.0;

#[derive(Clone, Debug, PartialEq)]
pub struct BetDatasetConfig {
    pub rows: usize,
    pub categories: Vec<String>,
    pub seed: u64,
    pub win_probability: f64,
}

impl Default for BetDatasetConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            categories: vec!["Sports Betting".to_string()],
            seed: DEFAULT_SEED,
            win_probability: 0.45,
        }
    }
}

/// Builds the `game_type`, `bet_amount`, `win_loss`, `winnings` table.
/// The same config always yields the same rows.
pub fn generate_bets(config: &BetDatasetConfig) -> Result<Dataset, AggBenchError> {
    if config.categories.is_empty() {
        return Err(AggBenchError::invalid_input(
            "at least one category is required",
        ));
    }
    if !(0.0..=1.0).contains(&config.win_probability) {
        return Err(AggBenchError::invalid_input(format!(
            "win probability {} outside [0, 1]",
            config.win_probability
        )));
    }
    let amounts = LogNormal::new(LOG_MEAN, LOG_SIGMA)
        .map_err(|e| AggBenchError::invalid_input(e.to_string()))?;
    let mut rng = StdRng::seed_from_u64(config.seed);

    let mut game_type = Vec::with_capacity(config.rows);
    let mut bet_amount = Vec::with_capacity(config.rows);
    let mut win_loss = Vec::with_capacity(config.rows);
    for _ in 0..config.rows {
        let pick = rng.gen_range(0..config.categories.len());
        game_type.push(config.categories[pick].clone());
        bet_amount.push(amounts.sample(&mut rng));
        win_loss.push(if rng.gen_bool(config.win_probability) {
            1
        } else {
            -1
        });
    }

    let mut dataset = Dataset::new()
        .with_column(GAME_TYPE, Column::Categorical(game_type))?
        .with_column(BET_AMOUNT, Column::Float(bet_amount))?
        .with_column(WIN_LOSS, Column::Int(win_loss))?;
    dataset.derive_float(WINNINGS, BET_AMOUNT, WIN_LOSS, |amount, sign| amount * sign)?;
    Ok(dataset)
}

//! The two aggregation strategies the driver compares.
//!
//! Both reduce the betting table to per-`game_type` totals. They are meant to
//! agree on the figures; only their running time is compared.

use std::collections::BTreeMap;

use crate::{
    AggBenchError,
    dataset::Dataset,
    groupby::{Agg, GroupBy, GroupedFrame},
};

pub const GAME_TYPE: &str = "game_type";
pub const BET_AMOUNT: &str = "bet_amount";
pub const WIN_LOSS: &str = "win_loss";
pub const WINNINGS: &str = "winnings";

const BET_AGGS: &[Agg] = &[Agg::Sum, Agg::Mean];
const WINNINGS_AGGS: &[Agg] = &[Agg::Sum];
const WIN_LOSS_AGGS: &[Agg] = &[Agg::PositiveShare];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RowStats {
    pub total_bets: f64,
    pub total_winnings: f64,
    pub win_count: u64,
    pub count: u64,
}

impl RowStats {
    pub fn mean_bet(&self) -> f64 {
        self.total_bets / self.count as f64
    }

    pub fn win_share(&self) -> f64 {
        self.win_count as f64 / self.count as f64 * 100.0
    }
}

/// Row-at-a-time: looks every cell up by column name and updates a map
/// keyed by category.
pub fn iterrows_stats(dataset: Dataset) -> Result<BTreeMap<String, RowStats>, AggBenchError> {
    let mut stats: BTreeMap<String, RowStats> = BTreeMap::new();
    for row in dataset.rows() {
        let game_type = row.get_str(GAME_TYPE)?;
        let entry = stats.entry(game_type.to_string()).or_default();
        entry.total_bets += row.get_f64(BET_AMOUNT)?;
        entry.total_winnings += row.get_f64(WINNINGS)?;
        if row.get(WIN_LOSS)?.is_positive() {
            entry.win_count += 1;
        }
        entry.count += 1;
    }
    Ok(stats)
}

/// Single grouped aggregation, rounded to two decimals.
pub fn grouped_stats(dataset: Dataset) -> Result<GroupedFrame, AggBenchError> {
    let frame = GroupBy::new(&dataset, GAME_TYPE)?.agg(&[
        (BET_AMOUNT, BET_AGGS),
        (WINNINGS, WINNINGS_AGGS),
        (WIN_LOSS, WIN_LOSS_AGGS),
    ])?;
    Ok(frame.round(2))
}

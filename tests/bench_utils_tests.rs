use aggbench::{
    AggBenchError,
    bench_utils::{BetDatasetConfig, generate_bets},
};

fn config(rows: usize, seed: u64) -> BetDatasetConfig {
    BetDatasetConfig {
        rows,
        categories: vec!["Poker".into(), "Slots".into()],
        seed,
        ..BetDatasetConfig::default()
    }
}

#[test]
fn test_generated_columns_and_shape() {
    let ds = generate_bets(&config(500, 1)).expect("data");
    assert_eq!(ds.shape(), (500, 4));
    let names: Vec<&str> = ds.column_names().collect();
    assert_eq!(names, vec!["game_type", "bet_amount", "win_loss", "winnings"]);
}

#[test]
fn test_generation_is_deterministic_per_seed() {
    let a = generate_bets(&config(300, 7)).expect("a");
    let b = generate_bets(&config(300, 7)).expect("b");
    let c = generate_bets(&config(300, 8)).expect("c");
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_value_ranges() {
    let ds = generate_bets(&config(1_000, 3)).expect("data");
    let amounts = ds.floats("bet_amount").expect("amounts");
    let outcomes = ds.ints("win_loss").expect("outcomes");
    let winnings = ds.floats("winnings").expect("winnings");
    assert!(amounts.iter().all(|a| *a > 0.0));
    assert!(outcomes.iter().all(|o| *o == 1 || *o == -1));
    for ((amount, outcome), won) in amounts.iter().zip(outcomes).zip(winnings) {
        assert_eq!(*won, amount * *outcome as f64);
    }
    let labels = ds.categories("game_type").expect("labels");
    assert!(labels.iter().all(|l| l == "Poker" || l == "Slots"));
}

#[test]
fn test_invalid_configs_are_rejected() {
    let mut empty = config(10, 1);
    empty.categories.clear();
    assert!(matches!(
        generate_bets(&empty),
        Err(AggBenchError::InvalidInput(_))
    ));
    let mut odd = config(10, 1);
    odd.win_probability = 1.5;
    assert!(matches!(generate_bets(&odd), Err(AggBenchError::InvalidInput(_))));
}

#[test]
fn test_zero_rows_yield_empty_table() {
    let ds = generate_bets(&config(0, 1)).expect("data");
    assert_eq!(ds.shape(), (0, 4));
}

use std::{env, hint::black_box, io, process};

use aggbench::{
    AggBenchError, Candidate,
    bench_utils::generate_bets,
    candidates::{grouped_stats, iterrows_stats},
    config::CompareConfig,
    logging, measure_performance,
};
use tracing::{error, info};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        print!("{}", CompareConfig::help());
        return;
    }
    let arg_refs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
    let config = match CompareConfig::from_args(&arg_refs) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("error: {err}");
            eprint!("{}", CompareConfig::help());
            process::exit(2);
        }
    };
    logging::init(&config.log_filter);

    if let Err(err) = run(&config) {
        error!(%err, "comparison aborted");
        eprintln!("comparison failed: {err}");
        process::exit(1);
    }
}

fn run(config: &CompareConfig) -> Result<(), AggBenchError> {
    info!(rows = config.rows, seed = config.seed, "generating dataset");
    let dataset = generate_bets(&config.dataset())?;
    let iterrows = Candidate::new("iterrows version", |ds| {
        black_box(iterrows_stats(ds)?);
        Ok(())
    });
    let grouped = Candidate::new("Alternative version", |ds| {
        black_box(grouped_stats(ds)?);
        Ok(())
    });
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let measurement =
        measure_performance(iterrows, grouped, &dataset, config.repetitions, &mut out)?;
    match serde_json::to_string(&measurement) {
        Ok(json) => info!(measurement = %json, "comparison recorded"),
        Err(err) => error!(%err, "measurement not serializable"),
    }
    Ok(())
}

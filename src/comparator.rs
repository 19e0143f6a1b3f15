//! Times two candidate functions over independent copies of one dataset.
//!
//! The report written to `out` is exactly four lines: the dataset shape,
//! each candidate's mean time, and the speedup factor (first mean divided by
//! second mean). Progress goes to `tracing`, never to `out`.

use std::{io::Write, time::Instant};

use serde::Serialize;
use tracing::{debug, info};

use crate::{AggBenchError, dataset::Dataset};

pub const DEFAULT_REPETITIONS: usize = 1;

pub struct Candidate<F> {
    label: String,
    func: F,
}

impl<F> Candidate<F>
where
    F: FnMut(Dataset) -> Result<(), AggBenchError>,
{
    pub fn new(label: impl Into<String>, func: F) -> Self {
        Self {
            label: label.into(),
            func,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Runs the candidate `repetitions` times, each on a fresh clone of
    /// `dataset`, and returns the per-run wall-clock seconds.
    fn time_runs(
        &mut self,
        dataset: &Dataset,
        repetitions: usize,
    ) -> Result<TimingSummary, AggBenchError> {
        info!(candidate = %self.label, repetitions, "timing candidate");
        let mut samples = Vec::with_capacity(repetitions);
        for run in 0..repetitions {
            let copy = dataset.clone();
            let start = Instant::now();
            (self.func)(copy)?;
            let elapsed = start.elapsed().as_secs_f64();
            debug!(candidate = %self.label, run, elapsed, "sample recorded");
            samples.push(elapsed);
        }
        let mean_secs = mean_secs(&samples)?;
        Ok(TimingSummary {
            label: self.label.clone(),
            samples,
            mean_secs,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TimingSummary {
    pub label: String,
    pub samples: Vec<f64>,
    pub mean_secs: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Measurement {
    pub shape: (usize, usize),
    pub first: TimingSummary,
    pub second: TimingSummary,
    pub speedup: f64,
}

pub fn mean_secs(samples: &[f64]) -> Result<f64, AggBenchError> {
    if samples.is_empty() {
        return Err(AggBenchError::NoRepetitions);
    }
    Ok(samples.iter().sum::<f64>() / samples.len() as f64)
}

pub fn speedup(first: &TimingSummary, second: &TimingSummary) -> Result<f64, AggBenchError> {
    if second.mean_secs == 0.0 {
        return Err(AggBenchError::ZeroDuration(second.label.clone()));
    }
    Ok(first.mean_secs / second.mean_secs)
}

pub fn measure_performance<F, G, W>(
    mut first: Candidate<F>,
    mut second: Candidate<G>,
    dataset: &Dataset,
    repetitions: usize,
    out: &mut W,
) -> Result<Measurement, AggBenchError>
where
    F: FnMut(Dataset) -> Result<(), AggBenchError>,
    G: FnMut(Dataset) -> Result<(), AggBenchError>,
    W: Write,
{
    if repetitions == 0 {
        return Err(AggBenchError::NoRepetitions);
    }
    let shape = dataset.shape();
    writeln!(out, "Dataset shape: {shape:?}")?;

    let first = first.time_runs(dataset, repetitions)?;
    let second = second.time_runs(dataset, repetitions)?;
    let speedup = speedup(&first, &second)?;

    writeln!(
        out,
        "{} average time: {:.4} seconds",
        first.label, first.mean_secs
    )?;
    writeln!(
        out,
        "{} average time: {:.4} seconds",
        second.label, second.mean_secs
    )?;
    writeln!(out, "Speedup factor: {speedup:.2}x")?;
    info!(speedup, "comparison finished");

    Ok(Measurement {
        shape,
        first,
        second,
        speedup,
    })
}

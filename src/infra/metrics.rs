// ============================================================
// Layer 6 - Metrics Logger
// ============================================================
// Records one row per forward pass to a CSV file.
//
// Metrics recorded per run:
//   - run:       1-based index of the row in this file
//   - mode:      train or eval
//   - mean, std: of every output element
//   - min, max:  of every output element
//   - mean_gate: average gate value over all repetitions
//
// Output file: checkpoints/metrics.csv
//
//   run,mode,mean,std,min,max,mean_gate
//   1,eval,0.412300,0.381200,-0.912000,1.774000,0.503100
//
// A mean_gate drifting toward 0 means the stack is mostly carrying
// its input through; toward 1 means it mostly replaces it.

use anyhow::{Context, Result};
use std::{
    fs::{self, OpenOptions},
    io::{BufRead, BufReader, Write},
    path::{Path, PathBuf},
};
use serde::{Deserialize, Serialize};

use crate::domain::ForwardMode;

const HEADER: &str = "run,mode,mean,std,min,max,mean_gate";

/// Population statistics over a flat list of output values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutputSummary {
    pub mean: f64,
    pub std:  f64,
    pub min:  f64,
    pub max:  f64,
}

impl OutputSummary {
    /// Returns None for an empty slice.
    pub fn from_values(values: &[f32]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let n    = values.len() as f64;
        let mean = values.iter().map(|&v| v as f64).sum::<f64>() / n;
        let var  = values.iter().map(|&v| (v as f64 - mean).powi(2)).sum::<f64>() / n;
        let min  = values.iter().fold(f64::INFINITY,     |m, &v| m.min(v as f64));
        let max  = values.iter().fold(f64::NEG_INFINITY, |m, &v| m.max(v as f64));
        Some(Self { mean, std: var.sqrt(), min, max })
    }
}

/// One row of the metrics CSV
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyMetrics {
    pub mode:      ForwardMode,
    pub summary:   OutputSummary,
    pub mean_gate: f64,
}

impl ApplyMetrics {
    pub fn new(mode: ForwardMode, summary: OutputSummary, gate_means: &[f32]) -> Self {
        let mean_gate = if gate_means.is_empty() {
            f64::NAN
        } else {
            gate_means.iter().map(|&g| g as f64).sum::<f64>() / gate_means.len() as f64
        };
        Self { mode, summary, mean_gate }
    }
}

/// Appends forward-pass metrics to a CSV file.
pub struct MetricsLogger {
    csv_path: PathBuf,
}

impl MetricsLogger {
    /// Writes the CSV header if the file doesn't exist yet.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let csv_path = dir.join("metrics.csv");

        if !csv_path.exists() {
            let mut f = fs::File::create(&csv_path)
                .with_context(|| format!("Cannot create '{}'", csv_path.display()))?;
            writeln!(f, "{HEADER}")?;
            tracing::debug!("Created metrics CSV: '{}'", csv_path.display());
        }

        Ok(Self { csv_path })
    }

    /// Number of data rows already in the file
    pub fn rows(&self) -> Result<usize> {
        let f = fs::File::open(&self.csv_path)?;
        let lines = BufReader::new(f).lines().count();
        Ok(lines.saturating_sub(1))
    }

    /// Append one row; returns its run index.
    pub fn log(&self, m: &ApplyMetrics) -> Result<usize> {
        let run = self.rows()? + 1;

        let mut f = OpenOptions::new()
            .append(true)
            .open(&self.csv_path)?;

        writeln!(
            f,
            "{},{},{:.6},{:.6},{:.6},{:.6},{:.6}",
            run,
            m.mode,
            m.summary.mean,
            m.summary.std,
            m.summary.min,
            m.summary.max,
            m.mean_gate,
        )?;

        tracing::debug!(
            "Logged run {} metrics: mode={}, mean={:.4}, mean_gate={:.4}",
            run, m.mode, m.summary.mean, m.mean_gate,
        );

        Ok(run)
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }
}

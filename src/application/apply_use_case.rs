// ============================================================
// Layer 2 - ApplyUseCase
// ============================================================
// Restores a highway checkpoint once, then runs any number of
// forward passes on synthetic batches:
//
//   Step 1: Load config + weights          (Layer 6 - infra)
//   Step 2: Build the input batch          (Layer 4 - data)
//   Step 3: Traced forward pass            (Layer 5 - ml)
//   Step 4: Summarise and log metrics      (Layer 6 - infra)

use anyhow::{Context, Result};
use burn::prelude::*;
use serde::{Deserialize, Serialize};

use crate::data::SyntheticBatch;
use crate::domain::ForwardMode;
use crate::infra::{
    checkpoint::CheckpointManager,
    metrics::{ApplyMetrics, MetricsLogger, OutputSummary},
};
use crate::ml::highway::{Highway, HighwayConfig};

/// One forward pass request
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ApplyRequest {
    pub batch_size: usize,
    pub seq_len:    usize,
    pub seed:       u64,
    pub mode:       ForwardMode,
}

/// Result of one forward pass
#[derive(Debug, Clone)]
pub struct ApplyReport {
    pub run:          usize,
    pub output_shape: [usize; 3],
    pub summary:      OutputSummary,
    /// Mean gate value of each repetition, in order
    pub gate_means:   Vec<f32>,
}

pub struct ApplyUseCase<B: Backend> {
    model:   Highway<B>,
    device:  B::Device,
    metrics: MetricsLogger,
}

impl<B: Backend> ApplyUseCase<B> {
    pub fn new(checkpoint_dir: &str, device: B::Device) -> Result<Self> {
        let ckpt    = CheckpointManager::open(checkpoint_dir)?;
        let model   = ckpt.restore::<B>(&device)?;
        let metrics = MetricsLogger::new(checkpoint_dir)?;
        tracing::info!(
            "Highway loaded: {} layers, hidden_dim={}",
            model.num_layers(), model.hidden_dim,
        );
        Ok(Self { model, device, metrics })
    }

    pub fn config(&self) -> HighwayConfig {
        self.model.config()
    }

    pub fn num_params(&self) -> usize {
        self.model.num_params()
    }

    pub fn run(&self, req: &ApplyRequest) -> Result<ApplyReport> {
        let batch = SyntheticBatch::new(req.batch_size, req.seq_len, self.model.hidden_dim, req.seed);
        let input = batch.to_tensor::<B>(&self.device);
        tracing::debug!("Input batch {:?} (seed {})", batch.dims(), req.seed);

        let trace = self.model.forward_traced(input, req.mode)?;

        let gate_means   = trace.mean_gates();
        let output_shape = trace.output.dims();
        let values: Vec<f32> = trace
            .output
            .into_data()
            .to_vec::<f32>()
            .map_err(|e| anyhow::anyhow!("Cannot read output tensor: {e:?}"))?;
        let summary = OutputSummary::from_values(&values)
            .context("Forward pass produced an empty tensor")?;

        let run = self.metrics.log(&ApplyMetrics::new(req.mode, summary, &gate_means))?;

        Ok(ApplyReport { run, output_shape, summary, gate_means })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;
    use crate::application::init_use_case::{InitConfig, InitUseCase};

    fn prepared_dir(name: &str, dropout: f64) -> String {
        let dir = std::env::temp_dir()
            .join(format!("highway-nn-apply-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        let dir = dir.to_string_lossy().into_owned();

        let cfg = InitConfig {
            checkpoint_dir: dir.clone(),
            hidden_dim:     6,
            num_layers:     3,
            dropout,
            ..InitConfig::default()
        };
        InitUseCase::<NdArray>::new(cfg, Default::default()).execute().unwrap();
        dir
    }

    fn request(mode: ForwardMode) -> ApplyRequest {
        ApplyRequest { batch_size: 2, seq_len: 5, seed: 3, mode }
    }

    #[test]
    fn test_reports_shape_and_gates() {
        let dir = prepared_dir("shape", 0.5);
        let use_case = ApplyUseCase::<NdArray>::new(&dir, Default::default()).unwrap();

        let report = use_case.run(&request(ForwardMode::Eval)).unwrap();

        assert_eq!(report.output_shape, [2, 5, 6]);
        assert_eq!(report.gate_means.len(), 3);
        assert!(report.gate_means.iter().all(|&g| g > 0.0 && g < 1.0));
        assert!(report.summary.min <= report.summary.mean);
        assert!(report.summary.mean <= report.summary.max);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_eval_runs_repeat_exactly_and_are_logged() {
        let dir = prepared_dir("repeat", 0.5);
        let use_case = ApplyUseCase::<NdArray>::new(&dir, Default::default()).unwrap();

        let a = use_case.run(&request(ForwardMode::Eval)).unwrap();
        let b = use_case.run(&request(ForwardMode::Eval)).unwrap();

        assert_eq!(a.summary, b.summary);
        assert_eq!((a.run, b.run), (1, 2));
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_restored_config_matches_init() {
        let dir = prepared_dir("config", 0.25);
        let use_case = ApplyUseCase::<NdArray>::new(&dir, Default::default()).unwrap();

        let cfg = use_case.config();
        assert_eq!((cfg.hidden_dim, cfg.num_layers), (6, 3));
        assert_eq!(cfg.dropout, 0.25);
        assert_eq!(use_case.num_params(), 2 * 3 * (6 * 6 + 6));
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_checkpoint_is_an_error() {
        let dir = std::env::temp_dir()
            .join(format!("highway-nn-apply-none-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        let result = ApplyUseCase::<NdArray>::new(&dir.to_string_lossy(), Default::default());
        assert!(result.is_err());
        assert!(!dir.exists());
    }
}

// ============================================================
// Layer 2 - InitUseCase
// ============================================================
// Steps:
//   1. Validate and build the HighwayConfig      (Layer 5 - ml)
//   2. Initialise parameters on the device       (Layer 5 - ml)
//   3. Save config JSON and weights              (Layer 6 - infra)

use anyhow::{Context, Result};
use burn::prelude::*;
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

use crate::domain::HighwayVariant;
use crate::infra::checkpoint::CheckpointManager;
use crate::ml::highway::HighwayConfig;

/// Everything needed to create a new checkpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitConfig {
    pub checkpoint_dir: String,
    pub hidden_dim:     usize,
    pub num_layers:     usize,
    pub dropout:        f64,
    pub variant:        HighwayVariant,
}

impl Default for InitConfig {
    fn default() -> Self {
        Self {
            checkpoint_dir: "checkpoints".to_string(),
            hidden_dim:     64,
            num_layers:     2,
            dropout:        0.5,
            variant:        HighwayVariant::Standard,
        }
    }
}

impl InitConfig {
    pub fn highway(&self) -> HighwayConfig {
        HighwayConfig::new(self.hidden_dim)
            .with_num_layers(self.num_layers)
            .with_dropout(self.dropout)
            .with_variant(self.variant)
    }
}

/// What `init` produced
#[derive(Debug, Clone, PartialEq)]
pub struct InitReport {
    pub num_params: usize,
}

pub struct InitUseCase<B: Backend> {
    config:  InitConfig,
    device:  B::Device,
    _marker: PhantomData<B>,
}

impl<B: Backend> InitUseCase<B> {
    pub fn new(config: InitConfig, device: B::Device) -> Self {
        Self { config, device, _marker: PhantomData }
    }

    pub fn execute(&self) -> Result<InitReport> {
        let cfg     = &self.config;
        let highway = cfg.highway();

        let model = highway
            .init::<B>(&self.device)
            .context("Cannot build highway layer")?;
        let num_params = model.num_params();
        tracing::info!(
            "Initialised highway: {} layers, hidden_dim={}, {} parameters",
            cfg.num_layers, cfg.hidden_dim, num_params,
        );

        let ckpt = CheckpointManager::new(&cfg.checkpoint_dir)?;
        ckpt.save_config(&highway)?;
        ckpt.save_model(&model)?;
        tracing::info!("Checkpoint written to '{}'", ckpt.dir().display());

        Ok(InitReport { num_params })
    }
}

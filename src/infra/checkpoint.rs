// ============================================================
// Layer 6 - Checkpoint Manager
// ============================================================
// Saves and restores highway weights using Burn's CompactRecorder.
//
// Files in a checkpoint directory:
//   checkpoints/
//     highway.mpk.gz        ← all transform/gate parameters
//     highway_config.json   ← hidden_dim, num_layers, dropout, variant
//
// The config is needed first: a model with the same architecture
// has to exist before its record can be loaded into it. The loaded
// record is checked against that model (map counts, weight and
// bias shapes) before it is applied, so a mismatched config is an
// error here rather than a panic inside burn.
//
// Reference: Burn Book §5 (Records and Checkpointing)

use anyhow::{Context, Result};
use std::{fs, path::{Path, PathBuf}};
use burn::{
    nn::LinearRecord,
    prelude::*,
    record::{CompactRecorder, Recorder},
};

use crate::ml::highway::{Highway, HighwayConfig, HighwayRecord};

const MODEL_FILE:  &str = "highway";
const CONFIG_FILE: &str = "highway_config.json";

/// Manages saving and loading of highway checkpoints.
pub struct CheckpointManager {
    dir: PathBuf,
}

impl CheckpointManager {
    /// Create a new CheckpointManager, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Cannot create checkpoint dir '{}'", dir.display()))?;
        Ok(Self { dir })
    }

    /// Open an existing checkpoint directory without creating it.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        if !dir.is_dir() {
            anyhow::bail!(
                "Checkpoint dir '{}' does not exist. Have you run 'init' first?",
                dir.display()
            );
        }
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write all parameters to {dir}/highway.mpk.gz
    pub fn save_model<B: Backend>(&self, model: &Highway<B>) -> Result<()> {
        // Recorder adds the extension
        let path = self.dir.join(MODEL_FILE);

        CompactRecorder::new()
            .record(model.clone().into_record(), path.clone())
            .with_context(|| {
                format!("Failed to save checkpoint to '{}'", path.display())
            })?;

        tracing::debug!("Saved highway weights to '{}'", path.display());
        Ok(())
    }

    /// Restore parameters into `model`, which must have been built
    /// from the same HighwayConfig as the saved one.
    pub fn load_model<B: Backend>(
        &self,
        model:  Highway<B>,
        device: &B::Device,
    ) -> Result<Highway<B>> {
        let path = self.dir.join(MODEL_FILE);

        let record: HighwayRecord<B> = CompactRecorder::new()
            .load(path.clone(), device)
            .with_context(|| {
                format!("Cannot load checkpoint '{}'. Have you run 'init' first?",
                    path.display())
            })?;

        check_record(&record, &model).with_context(|| {
            format!(
                "Checkpoint '{}' does not match a highway with {} layers and hidden_dim={}",
                path.display(), model.num_layers(), model.hidden_dim,
            )
        })?;

        Ok(model.load_record(record))
    }

    pub fn save_config(&self, cfg: &HighwayConfig) -> Result<()> {
        let path = self.dir.join(CONFIG_FILE);
        let json = serde_json::to_string_pretty(cfg)?;

        fs::write(&path, json)
            .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

        tracing::debug!("Saved highway config to '{}'", path.display());
        Ok(())
    }

    pub fn load_config(&self) -> Result<HighwayConfig> {
        let path = self.dir.join(CONFIG_FILE);

        let json = fs::read_to_string(&path)
            .with_context(|| {
                format!(
                    "Cannot read config from '{}'. \
                     Make sure you have run 'init' first.",
                    path.display()
                )
            })?;

        serde_json::from_str(&json)
            .with_context(|| format!("Malformed config in '{}'", path.display()))
    }

    /// Rebuild the layer from the saved config and load its weights.
    pub fn restore<B: Backend>(&self, device: &B::Device) -> Result<Highway<B>> {
        let cfg   = self.load_config()?;
        let model = cfg.init::<B>(device)?;
        self.load_model(model, device)
    }
}

/// Compare a loaded record with the model it is about to be loaded into.
fn check_record<B: Backend>(record: &HighwayRecord<B>, model: &Highway<B>) -> Result<()> {
    let layers = model.num_layers();
    for (name, maps) in [("transform", &record.transforms), ("gate", &record.gates)] {
        if maps.len() != layers {
            anyhow::bail!("record has {} {name} maps, expected {layers}", maps.len());
        }
        for (i, map) in maps.iter().enumerate() {
            check_linear(map, model.hidden_dim)
                .with_context(|| format!("{name} map {i}"))?;
        }
    }
    Ok(())
}

fn check_linear<B: Backend>(map: &LinearRecord<B>, hidden_dim: usize) -> Result<()> {
    let weight = map.weight.val().dims();
    if weight != [hidden_dim, hidden_dim] {
        anyhow::bail!("weight is {weight:?}, expected [{hidden_dim}, {hidden_dim}]");
    }
    match &map.bias {
        Some(bias) if bias.val().dims() != [hidden_dim] => {
            anyhow::bail!("bias is {:?}, expected [{hidden_dim}]", bias.val().dims())
        }
        Some(_) => Ok(()),
        None => anyhow::bail!("bias is missing"),
    }
}

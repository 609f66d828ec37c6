// ============================================================
// Layer 1 - CLI Commands and Arguments
// ============================================================
// Three subcommands: `init`, `apply` and `inspect`.
// clap's derive macros generate --help, error messages for
// missing args, and string -> usize/f64 conversion.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand, ValueEnum};

use highway_nn::application::apply_use_case::ApplyRequest;
use highway_nn::application::init_use_case::InitConfig;
use highway_nn::domain::{ForwardMode, HighwayVariant};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a highway layer with fresh parameters and save it
    Init(InitArgs),

    /// Run one forward pass of a saved layer on a synthetic batch
    Apply(ApplyArgs),

    /// Print the saved configuration and parameter count
    Inspect(InspectArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum ModeArg {
    Train,
    Eval,
}

impl From<ModeArg> for ForwardMode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::Train => ForwardMode::Train,
            ModeArg::Eval  => ForwardMode::Eval,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum VariantArg {
    /// Dedicated gate map for every repetition
    Standard,
    /// Legacy blend kept for comparison runs
    Reference,
}

impl From<VariantArg> for HighwayVariant {
    fn from(v: VariantArg) -> Self {
        match v {
            VariantArg::Standard  => HighwayVariant::Standard,
            VariantArg::Reference => HighwayVariant::Reference,
        }
    }
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write the config and weights into
    #[arg(long, default_value = "checkpoints")]
    pub checkpoint_dir: String,

    /// Width of the feature vectors the layer transforms
    #[arg(long, default_value_t = 64)]
    pub hidden_dim: usize,

    /// Number of stacked highway repetitions (at least 1)
    #[arg(long, default_value_t = 2)]
    pub num_layers: usize,

    /// Dropout probability between repetitions, in [0, 1)
    #[arg(long, default_value_t = 0.5)]
    pub dropout: f64,

    #[arg(long, value_enum, default_value_t = VariantArg::Standard)]
    pub variant: VariantArg,
}

/// Convert CLI InitArgs into the application-layer InitConfig.
impl From<InitArgs> for InitConfig {
    fn from(a: InitArgs) -> Self {
        InitConfig {
            checkpoint_dir: a.checkpoint_dir,
            hidden_dim:     a.hidden_dim,
            num_layers:     a.num_layers,
            dropout:        a.dropout,
            variant:        a.variant.into(),
        }
    }
}

#[derive(Args, Debug)]
pub struct ApplyArgs {
    #[arg(long, default_value = "checkpoints")]
    pub checkpoint_dir: String,

    #[arg(long, default_value_t = 4)]
    pub batch_size: usize,

    #[arg(long, default_value_t = 16)]
    pub seq_len: usize,

    /// Seed for the synthetic input batch
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// `train` enables dropout between repetitions
    #[arg(long, value_enum, default_value_t = ModeArg::Eval)]
    pub mode: ModeArg,

    /// Number of forward passes to run on the same batch
    #[arg(long, default_value_t = 1)]
    pub repeat: usize,
}

impl From<&ApplyArgs> for ApplyRequest {
    fn from(a: &ApplyArgs) -> Self {
        ApplyRequest {
            batch_size: a.batch_size,
            seq_len:    a.seq_len,
            seed:       a.seed,
            mode:       a.mode.into(),
        }
    }
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    #[arg(long, default_value = "checkpoints")]
    pub checkpoint_dir: String,
}

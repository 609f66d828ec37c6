// ============================================================
// Layer 1 - CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and hands off to Layer 2.
// This is the only layer that prints to stdout.
//
//   1. `init`    - create a checkpoint with fresh parameters
//   2. `apply`   - forward a synthetic batch through it
//   3. `inspect` - show what a checkpoint contains
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{ApplyArgs, Commands, InitArgs, InspectArgs};

use highway_nn::application::{
    apply_use_case::{ApplyRequest, ApplyUseCase},
    init_use_case::InitUseCase,
};
use highway_nn::infra::checkpoint::CheckpointManager;
use highway_nn::ml::backend::{app_device, AppBackend};
use burn::module::Module;

#[derive(Parser, Debug)]
#[command(
    name = "highway",
    version,
    about = "Build, inspect and apply a gated highway layer."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Init(args)    => run_init(args),
            Commands::Apply(args)   => run_apply(args),
            Commands::Inspect(args) => run_inspect(args),
        }
    }
}

fn run_init(args: InitArgs) -> Result<()> {
    tracing::info!("Creating highway checkpoint in: {}", args.checkpoint_dir);

    let dir    = args.checkpoint_dir.clone();
    let report = InitUseCase::<AppBackend>::new(args.into(), app_device()).execute()?;

    println!("Initialised {} parameters. Checkpoint saved to '{}'.", report.num_params, dir);
    Ok(())
}

fn run_apply(args: ApplyArgs) -> Result<()> {
    let use_case = ApplyUseCase::<AppBackend>::new(&args.checkpoint_dir, app_device())?;
    let request  = ApplyRequest::from(&args);

    for _ in 0..args.repeat.max(1) {
        let report = use_case.run(&request)?;
        let s      = report.summary;

        println!(
            "Run {:>3} | mode={} | shape={:?} | mean={:.4} std={:.4} min={:.4} max={:.4}",
            report.run, request.mode, report.output_shape, s.mean, s.std, s.min, s.max,
        );
        for (i, g) in report.gate_means.iter().enumerate() {
            println!("        layer {:>2} | mean gate={:.4}", i, g);
        }
    }
    Ok(())
}

fn run_inspect(args: InspectArgs) -> Result<()> {
    // Read-only: neither the directory nor a metrics file is created
    let ckpt  = CheckpointManager::open(&args.checkpoint_dir)?;
    let model = ckpt.restore::<AppBackend>(&app_device())?;
    let cfg   = model.config();

    println!("hidden_dim: {}", cfg.hidden_dim);
    println!("num_layers: {}", cfg.num_layers);
    println!("dropout:    {}", cfg.dropout);
    println!("variant:    {}", cfg.variant);
    println!("parameters: {}", model.num_params());
    Ok(())
}

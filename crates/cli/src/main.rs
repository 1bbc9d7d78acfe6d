use std::path::PathBuf;
use std::process;

use clap::Parser;

use framefx_core::effects::infrastructure::effect_factory::{create_effect, EffectKind};
use framefx_core::pipeline::pipeline_logger::StdoutPipelineLogger;
use framefx_core::pipeline::process_video_use_case::{ProcessVideoUseCase, ProgressFn};
use framefx_core::shared::constants::{
    DEFAULT_BLUR_RADIUS, DEFAULT_SNAPSHOT_LIMIT, FRAMES_PER_BATCH,
};
use framefx_core::video::infrastructure::ffmpeg_reader::FfmpegReader;
use framefx_core::video::infrastructure::ffmpeg_writer::FfmpegWriter;
use framefx_core::video::infrastructure::snapshot_writer::SnapshotWriter;

/// Batched pixel effects for video files.
#[derive(Parser)]
#[command(name = "framefx")]
struct Cli {
    /// Input video file.
    input: PathBuf,

    /// Output video file.
    output: PathBuf,

    /// Effect to apply: bw, sepia, blur or saturation.
    effect: String,

    /// Effect parameters: blur takes an optional radius (default 5),
    /// saturation takes three gains in [0, 2].
    params: Vec<f32>,

    /// Frames accumulated before each effect-and-encode pass.
    #[arg(long, default_value_t = FRAMES_PER_BATCH)]
    batch_size: usize,

    /// Save the first processed frames as PPM files into this directory.
    #[arg(long)]
    snapshot_dir: Option<PathBuf>,

    /// How many snapshot frames to save.
    #[arg(long, default_value_t = DEFAULT_SNAPSHOT_LIMIT)]
    snapshot_limit: usize,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;
    let kind = parse_effect(&cli.effect, &cli.params)?;

    let effect = create_effect(kind);
    let snapshots = cli
        .snapshot_dir
        .as_ref()
        .map(|dir| SnapshotWriter::new(dir, cli.snapshot_limit));

    let progress: ProgressFn = Box::new(|current, total| {
        if total > 0 {
            eprint!("\rProcessing frame {current}/{total}");
        } else {
            eprint!("\rProcessing frame {current}");
        }
    });

    let mut use_case = ProcessVideoUseCase::new(
        Box::new(FfmpegReader::new()),
        Box::new(FfmpegWriter::new()),
        effect,
        cli.batch_size,
        snapshots,
        Some(progress),
        Box::new(StdoutPipelineLogger::new()),
    );

    let report = use_case.execute(&cli.input, &cli.output)?;
    eprintln!();

    if report.frames_skipped > 0 {
        log::warn!("{} malformed frames skipped", report.frames_skipped);
    }
    log::info!(
        "Output written to {} ({} frames in {} batches)",
        cli.output.display(),
        report.frames_out,
        report.batches
    );
    Ok(())
}

fn parse_effect(effect: &str, params: &[f32]) -> Result<EffectKind, Box<dyn std::error::Error>> {
    match effect {
        "bw" => Ok(EffectKind::Grayscale),
        "sepia" => Ok(EffectKind::Sepia),
        "blur" => {
            let radius = match params.first() {
                Some(&r) => r as i32,
                None => DEFAULT_BLUR_RADIUS,
            };
            Ok(EffectKind::Blur { radius })
        }
        "saturation" => match params {
            [r, g, b] => {
                for (name, gain) in [("red", *r), ("green", *g), ("blue", *b)] {
                    if !(0.0..=2.0).contains(&gain) {
                        return Err(
                            format!("{name} gain must be in [0, 2], got {gain}").into()
                        );
                    }
                }
                Ok(EffectKind::Saturation {
                    r: *r,
                    g: *g,
                    b: *b,
                })
            }
            _ => Err("saturation requires three gains: <red> <green> <blue>".into()),
        },
        other => Err(format!(
            "unrecognized effect '{other}'; expected bw, sepia, blur or saturation"
        )
        .into()),
    }
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }
    if cli.batch_size == 0 {
        return Err("Batch size must be at least 1".into());
    }
    Ok(())
}

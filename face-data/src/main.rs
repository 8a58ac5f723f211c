use anyhow::{ensure, Context, Result};
use face_data::{config::Config, preview, scan, Phase};
use rand::Rng;
use std::{env, path::PathBuf, sync::Arc};
use structopt::StructOpt;
use tracing::info;
use tracing_subscriber::{filter::LevelFilter, prelude::*, EnvFilter};

#[derive(Debug, Clone, StructOpt)]
/// Inspect face landmark datasets
struct Args {
    #[structopt(long, default_value = "face-data.json5")]
    /// configuration file
    pub config_file: PathBuf,
    #[structopt(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Clone, StructOpt)]
enum Command {
    /// Print a preprocessed sample as JSON
    Inspect {
        #[structopt(long, default_value = "train")]
        phase: Phase,
        #[structopt(long)]
        index: usize,
    },
    /// Save the face crop with its landmarks drawn on it
    Preview {
        #[structopt(long, default_value = "train")]
        phase: Phase,
        /// sample index, picked randomly if not set
        #[structopt(long)]
        index: Option<usize>,
        #[structopt(long, default_value = "preview.png")]
        output: PathBuf,
        /// half side length of landmark markers in pixels
        #[structopt(long, default_value = "1")]
        radius: u32,
    },
    /// Load every sample and report failures
    Check {
        #[structopt(long, default_value = "train")]
        phase: Phase,
    },
}

#[tokio::main]
pub async fn main() -> Result<()> {
    // setup tracing
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true).compact();
    let filter_layer = {
        let filter = EnvFilter::from_default_env();
        if env::var("RUST_LOG").is_err() {
            filter.add_directive(LevelFilter::INFO.into())
        } else {
            filter
        }
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();

    // parse arguments
    let Args { config_file, cmd } = Args::from_args();
    let config = Config::open_or_default(&config_file)
        .with_context(|| format!("failed to load config file '{}'", config_file.display()))?;

    match cmd {
        Command::Inspect { phase, index } => {
            let dataset = face_data::load_data(&phase, &config)?;
            let record = dataset.record(index)?;
            let sample = dataset.get(index)?;

            let output = serde_json::json!({
                "phase": phase.name(),
                "index": index,
                "image_path": record.image_path,
                "rect": record.rect,
                "image_shape": sample.image.shape(),
                "landmarks": sample.landmarks.to_vec(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Command::Preview {
            phase,
            index,
            output,
            radius,
        } => {
            let dataset = face_data::load_data(&phase, &config)?;
            ensure!(!dataset.is_empty(), "the dataset of phase '{}' is empty", phase);

            let index = index.unwrap_or_else(|| rand::thread_rng().gen_range(0..dataset.len()));
            let sample = dataset.get(index)?;
            let canvas = preview::draw_landmarks(&sample, radius)?;
            canvas
                .save(&output)
                .with_context(|| format!("failed to save image '{}'", output.display()))?;
            info!("saved preview of sample {} to '{}'", index, output.display());
        }
        Command::Check { phase } => {
            let dataset = Arc::new(face_data::load_data(&phase, &config)?);
            let report = scan::scan_dataset(dataset).await;
            println!("{}", serde_json::to_string_pretty(&report)?);
            ensure!(
                report.num_failures == 0,
                "{} of {} samples failed",
                report.num_failures,
                report.num_samples
            );
        }
    }

    Ok(())
}

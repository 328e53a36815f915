//! Shotboard segmentation binary.
//!
//! Usage: `shotboard <input.txt> [output.txt]`
//!
//! Reads a transcript file, runs the segmentation pipeline against the
//! configured annotation service, and writes `index.content` shot lines
//! to the output file (or stdout). A run that failed partway still
//! writes the shots accumulated before the failure.

use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use shotboard_annotator::AnnotatorClient;
use shotboard_models::render_shot_list;
use shotboard_pipeline::{run_segmentation, PipelineConfig, PipelineResult};

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing with colored output for dev, JSON for production
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let env_filter = EnvFilter::from_default_env()
        .add_directive("shotboard_pipeline=info".parse().unwrap())
        .add_directive("shotboard_annotator=info".parse().unwrap());

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_ansi(true)
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(env_filter)
            .init();
    }

    let args: Vec<String> = std::env::args().collect();
    let input_path = match args.get(1) {
        Some(path) => path.clone(),
        None => {
            error!("Usage: shotboard <input.txt> [output.txt]");
            std::process::exit(2);
        }
    };
    let output_path = args.get(2).cloned();

    if let Err(e) = run(&input_path, output_path.as_deref()).await {
        error!("Run failed: {}", e);
        std::process::exit(1);
    }
}

async fn run(input_path: &str, output_path: Option<&str>) -> PipelineResult<()> {
    let raw_text = tokio::fs::read_to_string(input_path).await?;

    let client = AnnotatorClient::from_env()?;
    let config = PipelineConfig::from_env();
    info!("Pipeline config: {:?}", config);

    let outcome = run_segmentation(&client, &config, &raw_text).await;

    let rendered = render_shot_list(&outcome.shots);
    match output_path {
        Some(path) => {
            tokio::fs::write(path, &rendered).await?;
            info!("Wrote {} shots to {}", outcome.shots.len(), path);
        }
        None => {
            print!("{}", rendered);
        }
    }

    info!("Compliance: {}", outcome.report);
    if let Some(failure) = &outcome.failure {
        warn!(
            "Run incomplete ({}/{} chunks): {}",
            outcome.chunks_processed, outcome.chunks_total, failure
        );
    }

    Ok(())
}

// src/main.rs
mod extractors;
mod generator;
mod sanitize;
mod storage;
mod utils;

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use generator::models::BiomarkerPanel;
use generator::{client, prompt};
use storage::StorageManager;
use utils::AppError;

/// Command Line Interface for the medical insight report extractor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to an already-generated markdown report to parse directly
    /// (skips the generator call)
    #[arg(short, long, conflicts_with = "panel")]
    input: Option<PathBuf>,

    /// Path to a biomarker panel JSON file; missing fields use the
    /// reference defaults. Requires GEMINI_API_KEY in the environment.
    #[arg(short, long)]
    panel: Option<PathBuf>,

    /// Generator model identifier
    #[arg(long, default_value = client::DEFAULT_MODEL)]
    model: String,

    /// Output directory for the parsed document and its metadata.
    /// When omitted, the document is printed to stdout.
    #[arg(short, long)]
    output_dir: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting processing for args: {:?}", args);

    // 3. Obtain the report text: local file, or panel -> prompt -> generator
    let (report_text, patient_id) = match (&args.input, &args.panel) {
        (Some(path), _) => {
            tracing::info!("Reading report text from {}", path.display());
            let text = fs::read_to_string(path)?;
            let id = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "report".to_string());
            (text, id)
        }
        (None, Some(path)) => {
            let panel_json = fs::read_to_string(path)?;
            let panel: BiomarkerPanel = serde_json::from_str(&panel_json)
                .map_err(|e| AppError::Config(format!("Invalid panel JSON: {}", e)))?;
            let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| {
                AppError::Config(
                    "GEMINI_API_KEY not found. Please set it in your environment.".to_string(),
                )
            })?;

            let prompt = prompt::build_prompt(&panel);
            tracing::info!("Generating report for panel: {}", panel.id);
            let text = client::generate_report(&api_key, &args.model, &prompt).await?;
            tracing::info!("Generator returned {} bytes", text.len());
            (text, panel.id)
        }
        (None, None) => {
            return Err(AppError::Config(
                "Either --input <report.md> or --panel <panel.json> is required".to_string(),
            ));
        }
    };

    // 4. Parse + sanitize (infallible: missing sections become defaults)
    let document = extractors::parse(&report_text);
    tracing::info!(
        "Parsed report: {} systems, {} table rows",
        document.system_analysis.len(),
        document.biomarker_table.len()
    );

    // 5. Emit the document
    match &args.output_dir {
        Some(dir) => {
            let storage = StorageManager::new(dir)?;
            let report_path = storage.save_report(&document, &patient_id)?;
            tracing::info!("Saved report document to: {}", report_path.display());
            let meta_path = storage.save_report_metadata(&document, &patient_id)?;
            tracing::info!("Saved report metadata to: {}", meta_path.display());
        }
        None => {
            let json = serde_json::to_string_pretty(&document)
                .map_err(|e| AppError::Processing(e.to_string()))?;
            println!("{}", json);
        }
    }

    Ok(())
}

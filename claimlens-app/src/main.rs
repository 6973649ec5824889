use anyhow::{Context, Result};
use clap::Parser;
use claimlens_common::observability::{LogConfig, init_logging};
use claimlens_config::{ClaimlensConfig, ClaimlensConfigLoader};
use claimlens_llm::ensure_llm_ready;
use claimlens_pipeline::Pipeline;
use claimlens_search::{SearchClient, TavilyApi};
use std::path::{Path, PathBuf};
use std::sync::Arc;

mod view;

/// Verify factual claims in a PDF against live web data.
#[derive(Debug, Parser)]
#[command(name = "claimlens", version)]
struct Cli {
    /// Path to the PDF document to fact-check
    pdf: PathBuf,

    /// Workspace configuration file
    #[arg(long, env = "CLAIMLENS_CONFIG", default_value = "claimlens.yaml")]
    config: PathBuf,

    /// Mirror log events to stderr
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1) Load config (env wins over the file)
    let cfg = load_config(&cli.config)?;

    init_logging(LogConfig {
        emit_stderr: cli.verbose,
        ..LogConfig::default()
    })?;

    // 2) Build the injected clients
    let llm = ensure_llm_ready(&cfg.llm)?;
    if !llm.health_check().await.unwrap_or(false) {
        tracing::warn!(
            model = llm.model_name(),
            "model backend health check failed, continuing anyway"
        );
    }
    let search: Arc<dyn SearchClient> = Arc::new(TavilyApi::new(cfg.search.api_key.clone())?);

    // 3) Run the pipeline over the document
    let bytes = std::fs::read(&cli.pdf)
        .with_context(|| format!("failed to read {}", cli.pdf.display()))?;
    tracing::info!(path = %cli.pdf.display(), bytes = bytes.len(), "processing document");

    let pipeline = Pipeline::new(llm, search);
    let report = pipeline.check_document(&bytes).await?;

    view::render(&report);
    Ok(())
}

fn load_config(path: &Path) -> Result<ClaimlensConfig> {
    let loader = ClaimlensConfigLoader::new();
    let loader = if path.exists() {
        loader.with_file(path)
    } else {
        loader
    };
    loader.load().context(
        "configuration is incomplete; provide claimlens.yaml or CLAIMLENS__-prefixed environment variables",
    )
}

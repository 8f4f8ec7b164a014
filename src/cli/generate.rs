//! `mdforge generate`

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use mdforge_core::Config;
use mdforge_core::domain::GenerationRequest;
use tokio_util::sync::CancellationToken;

use crate::app::build_generation_use_case;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// JSON file holding `{ templateContent, projectInfo }`
    #[arg(short, long)]
    pub input: PathBuf,

    /// Write the Markdown here instead of printing it
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Read and validate a generation request file
pub fn read_request(path: &Path) -> anyhow::Result<GenerationRequest> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let request: GenerationRequest = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid generation request in {}", path.display()))?;

    if request.template_content.trim().is_empty() {
        anyhow::bail!("Missing required fields: templateContent or projectInfo");
    }
    request
        .project_info
        .validate()
        .context("Invalid project information")?;

    Ok(request)
}

/// Run one generation. Ctrl+C cancels the in-flight attempt.
pub async fn run_generate(args: &GenerateArgs, config: &Config) -> anyhow::Result<()> {
    let request = read_request(&args.input)?;
    let use_case = build_generation_use_case(&config.llm)?;

    let cancel = CancellationToken::new();
    let on_ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_ctrl_c.cancel();
        }
    });

    let markdown = use_case.execute(&request, &cancel).await?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &markdown)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "README written");
        }
        None => println!("{}", markdown),
    }
    Ok(())
}

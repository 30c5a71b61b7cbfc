// SPDX-License-Identifier: AGPL-3.0-only
// Minimal bootstrap; inference and blending live in the library crates.
use anyhow::{Context, Result};
use async_trait::async_trait;
use aura::{AffectConfig, AffectPipeline, MetricSample};
use clap::{Parser, ValueEnum};
use muse::{
    spawn_blend_worker, BlendMode, PromptManager, PromptSink, PublishError, StylePalette,
    WeightedPrompt,
};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

#[derive(Parser, Debug, Clone)]
#[command(name = "neurosona", about = "Affect inference and prompt blending runtime")]
struct Cli {
    /// Pipeline configuration: metric ranges, axis weights, partition.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Style palette for composite prompt synthesis.
    #[arg(long)]
    styles: Option<PathBuf>,

    /// Always-on background prompt.
    #[arg(long, default_value = "quiet dreamcore")]
    base_prompt: String,

    #[arg(long, default_value_t = 0.8)]
    base_weight: f64,

    #[arg(long, value_enum, default_value_t = BlendModeArg::Composite)]
    blend_mode: BlendModeArg,

    /// Depth of the bounded blend queue; samples beyond it are dropped.
    #[arg(long, default_value_t = 8)]
    queue_capacity: usize,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum BlendModeArg {
    Simple,
    Composite,
}

impl From<BlendModeArg> for BlendMode {
    fn from(arg: BlendModeArg) -> Self {
        match arg {
            BlendModeArg::Simple => BlendMode::Simple,
            BlendModeArg::Composite => BlendMode::Composite,
        }
    }
}

/// Sink that reports each published blend on the log stream. Stands in
/// for a generative backend connection in headless runs.
struct LogSink;

#[async_trait]
impl PromptSink for LogSink {
    async fn send_weighted_prompts(
        &self,
        prompts: &[WeightedPrompt],
    ) -> std::result::Result<(), PublishError> {
        for prompt in prompts {
            info!(weight = prompt.weight, text = %prompt.text, "weighted prompt");
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AffectConfig::load_from_file(path)
            .with_context(|| format!("loading affect configuration from {}", path.display()))?,
        None => AffectConfig::load_or_default(),
    };
    let pipeline =
        AffectPipeline::from_config(&config).context("affect configuration rejected")?;

    let palette = match &cli.styles {
        Some(path) => StylePalette::load_from_file(path)
            .with_context(|| format!("loading style palette from {}", path.display()))?,
        None => StylePalette::load_or_default(),
    };

    let manager = Arc::new(PromptManager::new(
        &cli.base_prompt,
        cli.base_weight,
        palette,
        cli.blend_mode.into(),
    )?);
    let sink: Arc<dyn PromptSink> = Arc::new(LogSink);
    let (handle, worker) = spawn_blend_worker(manager, sink, cli.queue_capacity);

    info!("neurosona starting, reading keyed samples from stdin");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let keyed: HashMap<String, f64> = match serde_json::from_str(line) {
            Ok(values) => values,
            Err(e) => {
                warn!(error = %e, "skipping malformed sample line");
                continue;
            }
        };
        let sample = match MetricSample::from_keyed(&keyed) {
            Ok(sample) => sample,
            Err(e) => {
                warn!(error = %e, "skipping invalid sample");
                continue;
            }
        };
        let reading = pipeline.process(&sample);
        info!(
            label = %reading.label,
            intensity = reading.intensity,
            valence = reading.valence,
            arousal = reading.arousal,
            "classified sample"
        );
        handle.submit(reading);
    }

    // Stdin closed; let queued readings drain before exiting.
    drop(handle);
    worker.await?;
    info!("neurosona shutting down");
    Ok(())
}

//! RoughCut command line binary.
//!
//! Analyzes a narration script into a keyword timeline, resolves each
//! keyword against Pixabay, and writes the assembled cut manifest.

mod manifest;
mod progress;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use rcut_engine::{GenerationRun, Generator, GeneratorConfig};
use rcut_models::{RoughCut, TargetFit, Timeline, VideoFormat};
use rcut_script::ScriptAnalyzer;
use rcut_stock::{PixabayClient, PixabayConfig, StockProvider};

/// Turn a narration script into a stock-footage rough cut.
#[derive(Parser, Debug)]
#[command(name = "roughcut", version, about)]
struct Cli {
    /// Narration script text
    #[arg(long, conflicts_with = "file")]
    text: Option<String>,

    /// Read the narration script from a file
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Target cut duration in seconds
    #[arg(long, default_value_t = 30)]
    duration: u32,

    /// Allowed deviation from the target duration in seconds
    #[arg(long, default_value_t = 5)]
    tolerance: u32,

    /// Output format: portrait or landscape
    #[arg(long, default_value = "portrait")]
    format: VideoFormat,

    /// Where to write the cut manifest
    #[arg(long, default_value = "roughcut.json")]
    output: PathBuf,

    /// Pixabay API key (defaults to the PIXABAY_API_KEY env var)
    #[arg(long)]
    api_key: Option<String>,

    /// Fixed seed for candidate picking
    #[arg(long)]
    seed: Option<u64>,

    /// Print the timeline plan without fetching footage
    #[arg(long)]
    plan_only: bool,
}

impl Cli {
    fn read_script(&self) -> anyhow::Result<String> {
        match (&self.text, &self.file) {
            (Some(text), _) => Ok(text.clone()),
            (None, Some(path)) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read script from {}", path.display())),
            (None, None) => anyhow::bail!("Provide a script with --text or --file"),
        }
    }

    fn stock_config(&self) -> PixabayConfig {
        let config = PixabayConfig::from_env();
        match self.api_key.clone() {
            Some(key) => config.with_api_key(key),
            None => config,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let script = cli.read_script()?;

    let analyzer = ScriptAnalyzer::new()?;
    let timeline = analyzer.build_timeline(&script);
    print_plan(&analyzer, &timeline, &script, cli.duration, cli.tolerance);

    if timeline.is_empty() {
        println!("No keywords could be extracted, nothing to generate.");
        std::process::exit(1);
    }
    if cli.plan_only {
        return Ok(());
    }

    let provider: Arc<dyn StockProvider> = Arc::new(PixabayClient::new(cli.stock_config())?);
    let generator = Arc::new(Generator::with_config(
        provider,
        GeneratorConfig {
            rng_seed: cli.seed,
            ..GeneratorConfig::default()
        },
    ));

    let renderer = tokio::spawn(progress::render_events(generator.subscribe()));

    let cut = match generator.generate(&timeline, cli.format).await {
        Ok(cut) => {
            renderer.await.ok();
            cut
        }
        Err(e) => {
            renderer.await.ok();
            report_partial(&generator.run_state());
            error!("Generation failed: {}", e);
            std::process::exit(1);
        }
    };

    manifest::write_manifest(&cli.output, &cut)?;
    print_summary(&cut, &cli.output);

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("rcut_cli=info,rcut_engine=warn,rcut_stock=warn"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_ansi(true)
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(env_filter)
        .init();
}

fn print_plan(
    analyzer: &ScriptAnalyzer,
    timeline: &Timeline,
    script: &str,
    target: u32,
    tolerance: u32,
) {
    println!(
        "Script: {} chars, ~{}s narration",
        script.chars().count(),
        analyzer.estimated_narration_secs(script)
    );

    if timeline.is_empty() {
        return;
    }

    println!();
    println!("Timeline plan:");
    for (i, entry) in timeline.entries().iter().enumerate() {
        println!(
            "  {:>2}. {:<20} {:>3}s",
            i + 1,
            entry.keyword,
            entry.duration_secs
        );
    }

    let fit = match timeline.target_fit(target, tolerance) {
        TargetFit::Under => "under target",
        TargetFit::Within => "within target",
        TargetFit::Over => "over target",
    };
    println!(
        "Total {}s against a {}s target (+/-{}s): {}",
        timeline.total_duration(),
        target,
        tolerance,
        fit
    );
    println!();
}

fn report_partial(run: &GenerationRun) {
    if run.resolved.is_empty() {
        return;
    }
    eprintln!("{} clips resolved before the failure:", run.resolved.len());
    for asset in &run.resolved {
        eprintln!("  {:<20} {}", asset.keyword, asset.source_url);
    }
}

fn print_summary(cut: &RoughCut, output: &Path) {
    println!();
    println!(
        "Rough cut: {} clips, {}s allocated, {} format",
        cut.asset_count(),
        cut.total_allocated_secs(),
        cut.format
    );
    for asset in &cut.assets {
        println!(
            "  {:<20} {:>3}s  {}",
            asset.keyword, asset.allocated_secs, asset.source_url
        );
    }
    if let Some(primary) = cut.primary() {
        println!("Primary clip: {}", primary.source_url);
    }
    println!("Manifest written to {}", output.display());
}

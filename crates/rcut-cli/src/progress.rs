//! Terminal progress rendering for generation runs.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::broadcast;

use rcut_engine::GenerationEvent;

fn stage_bar() -> ProgressBar {
    let bar = ProgressBar::new(100);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {msg:<12} [{bar:40.cyan/blue}] {pos:>3}%")
            .unwrap()
            .progress_chars("█▉▊▋▌▍▎▏ "),
    );
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

/// Render run events to the terminal until the run finishes.
pub async fn render_events(mut events: broadcast::Receiver<GenerationEvent>) {
    let bar = stage_bar();
    loop {
        match events.recv().await {
            Ok(GenerationEvent::StageChanged { stage }) => {
                bar.set_message(stage.to_string());
                bar.set_position(0);
            }
            Ok(GenerationEvent::Progress { value, .. }) => {
                bar.set_position(value as u64);
            }
            Ok(GenerationEvent::AssetResolved {
                keyword,
                resolved,
                expected,
                ..
            }) => {
                bar.println(format!("  [{resolved}/{expected}] {keyword}"));
            }
            Ok(GenerationEvent::KeywordSkipped { keyword, .. }) => {
                bar.println(format!("  no footage for '{keyword}', skipped"));
            }
            Ok(GenerationEvent::Log { .. }) => {}
            Ok(GenerationEvent::Done { asset_count }) => {
                bar.finish_and_clear();
                println!("✓ Rough cut generated with {asset_count} clips");
                break;
            }
            Ok(GenerationEvent::Failed { stage, message }) => {
                bar.finish_and_clear();
                eprintln!("✗ Generation failed during {stage}: {message}");
                break;
            }
            Err(broadcast::error::RecvError::Lagged(_)) => continue,
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}

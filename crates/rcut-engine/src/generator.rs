//! Generation orchestrator.
//!
//! Resolves each timeline entry to a stock asset, strictly in timeline
//! order, then assembles the results into a [`RoughCut`]. Progress is
//! reported through run state snapshots and a broadcast event channel.

use std::sync::{Arc, Mutex};

use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use rcut_models::{KeywordEntry, ResolvedAsset, RoughCut, Timeline, VideoFormat};
use rcut_stock::StockProvider;

use crate::error::{EngineError, EngineResult};
use crate::events::GenerationEvent;
use crate::picker::CandidatePicker;
use crate::run::{GenerationRun, RunStage};

/// Synthetic progress ticks for the placeholder composition stages.
const STAGE_TICKS: [u8; 4] = [25, 50, 75, 100];

/// Generator configuration.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of top-ranked candidates to pick between per keyword
    pub pick_top_n: usize,
    /// Fixed seed for candidate picking (random when unset)
    pub rng_seed: Option<u64>,
    /// Capacity of the event broadcast channel
    pub event_capacity: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            pick_top_n: 3,
            rng_seed: None,
            event_capacity: 64,
        }
    }
}

/// Orchestrates generation runs over a timeline.
///
/// At most one run is active at a time. A run operates on a snapshot of
/// the timeline taken when [`Generator::generate`] is called, so later
/// edits to the live timeline never affect it.
pub struct Generator {
    provider: Arc<dyn StockProvider>,
    config: GeneratorConfig,
    run: Mutex<GenerationRun>,
    picker: Mutex<CandidatePicker>,
    events: broadcast::Sender<GenerationEvent>,
}

impl Generator {
    /// Create a generator with default configuration.
    pub fn new(provider: Arc<dyn StockProvider>) -> Self {
        Self::with_config(provider, GeneratorConfig::default())
    }

    /// Create a generator with explicit configuration.
    pub fn with_config(provider: Arc<dyn StockProvider>, config: GeneratorConfig) -> Self {
        let picker = match config.rng_seed {
            Some(seed) => CandidatePicker::seeded(seed),
            None => CandidatePicker::new(),
        };
        let (events, _) = broadcast::channel(config.event_capacity);

        Self {
            provider,
            config,
            run: Mutex::new(GenerationRun::idle()),
            picker: Mutex::new(picker),
            events,
        }
    }

    /// Subscribe to progress events for current and future runs.
    pub fn subscribe(&self) -> broadcast::Receiver<GenerationEvent> {
        self.events.subscribe()
    }

    /// Snapshot of the current run state.
    pub fn run_state(&self) -> GenerationRun {
        self.run.lock().unwrap().clone()
    }

    /// Reset a finished run back to idle.
    ///
    /// Rejected while a run is active.
    pub fn reset(&self) -> EngineResult<()> {
        let mut run = self.run.lock().unwrap();
        if run.is_active() {
            return Err(EngineError::RunActive);
        }
        *run = GenerationRun::idle();
        Ok(())
    }

    /// Generate a rough cut from the timeline.
    ///
    /// Entries are resolved sequentially in timeline order. Keywords
    /// with no candidates are skipped. A provider error fails the run;
    /// assets resolved before the error stay inspectable through
    /// [`Generator::run_state`].
    pub async fn generate(
        &self,
        timeline: &Timeline,
        format: VideoFormat,
    ) -> EngineResult<RoughCut> {
        if timeline.is_empty() {
            return Err(EngineError::EmptyTimeline);
        }

        // Frozen snapshot of the entries this run will resolve.
        let entries: Vec<KeywordEntry> = timeline.entries().to_vec();

        self.begin_run(entries.len())?;
        info!(entries = entries.len(), format = %format, "Starting generation run");
        self.emit(GenerationEvent::stage_changed(RunStage::Fetching));
        self.emit(GenerationEvent::log(format!(
            "Searching stock footage for {} keywords",
            entries.len()
        )));

        let assets = match self.fetch_assets(&entries, format).await {
            Ok(assets) => assets,
            Err(e) => {
                let message = e.to_string();
                let stage = {
                    let mut run = self.run.lock().unwrap();
                    let stage = run.stage;
                    run.fail(message.clone());
                    stage
                };
                warn!(stage = %stage, error = %message, "Generation run failed");
                self.emit(GenerationEvent::failed(stage, message));
                return Err(e);
            }
        };

        self.advance_placeholder_stage(RunStage::Processing).await;
        self.advance_placeholder_stage(RunStage::Finalizing).await;

        let cut = RoughCut::new(format, assets);
        self.run.lock().unwrap().complete();
        self.emit(GenerationEvent::done(cut.asset_count()));
        info!(assets = cut.asset_count(), "Generation run complete");

        Ok(cut)
    }

    /// Claim the run slot, replacing any finished run with a fresh one.
    fn begin_run(&self, entry_count: usize) -> EngineResult<()> {
        let mut run = self.run.lock().unwrap();
        if run.is_active() {
            return Err(EngineError::RunActive);
        }
        *run = GenerationRun::start(entry_count);
        Ok(())
    }

    /// Resolve each entry against the stock provider.
    async fn fetch_assets(
        &self,
        entries: &[KeywordEntry],
        format: VideoFormat,
    ) -> EngineResult<Vec<ResolvedAsset>> {
        let entry_count = entries.len();
        let mut assets = Vec::with_capacity(entry_count);

        for (i, entry) in entries.iter().enumerate() {
            debug!(keyword = %entry.keyword, "Searching stock footage");
            let candidates = self.provider.search(&entry.keyword).await?;

            let picked = {
                let mut picker = self.picker.lock().unwrap();
                picker.pick(&candidates, self.config.pick_top_n).cloned()
            };

            let progress = (((i + 1) * 100) / entry_count) as u8;

            match picked {
                Some(candidate) => {
                    let asset = ResolvedAsset {
                        entry_id: entry.id.clone(),
                        keyword: entry.keyword.clone(),
                        source_url: candidate.preview_url,
                        native_duration_secs: candidate.native_duration_secs,
                        allocated_secs: entry.duration_secs,
                        render_aspect: format.aspect(),
                    };

                    let (resolved, expected) = {
                        let mut run = self.run.lock().unwrap();
                        run.record_asset(asset.clone());
                        run.set_progress(progress);
                        (run.resolved.len(), run.expected_assets)
                    };

                    debug!(
                        keyword = %entry.keyword,
                        candidates = candidates.len(),
                        "Resolved stock asset"
                    );
                    self.emit(GenerationEvent::asset_resolved(
                        entry.id.clone(),
                        entry.keyword.clone(),
                        resolved,
                        expected,
                    ));
                    assets.push(asset);
                }
                None => {
                    warn!(keyword = %entry.keyword, "No stock footage found, skipping");
                    {
                        let mut run = self.run.lock().unwrap();
                        run.record_skip();
                        run.set_progress(progress);
                    }
                    self.emit(GenerationEvent::keyword_skipped(
                        entry.id.clone(),
                        entry.keyword.clone(),
                    ));
                }
            }

            self.emit(GenerationEvent::progress(RunStage::Fetching, progress));
        }

        Ok(assets)
    }

    /// Drive a placeholder composition stage to 100%.
    ///
    /// No media work happens in these stages yet; they advance through
    /// synthetic ticks so subscribers observe the full stage sequence.
    async fn advance_placeholder_stage(&self, stage: RunStage) {
        self.run.lock().unwrap().enter_stage(stage);
        self.emit(GenerationEvent::stage_changed(stage));

        for tick in STAGE_TICKS {
            tokio::task::yield_now().await;
            self.run.lock().unwrap().set_progress(tick);
            self.emit(GenerationEvent::progress(stage, tick));
        }
    }

    fn emit(&self, event: GenerationEvent) {
        let _ = self.events.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.pick_top_n, 3);
        assert_eq!(config.event_capacity, 64);
        assert!(config.rng_seed.is_none());
    }
}

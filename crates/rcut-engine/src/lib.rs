//! Generation engine for RoughCut.
//!
//! Drives a keyword timeline through stock-footage search and assembles
//! the results into a rough cut. The engine owns the run state machine,
//! emits progress events over a broadcast channel, and guarantees at
//! most one active run at a time.

pub mod error;
pub mod events;
pub mod generator;
pub mod picker;
pub mod run;

pub use error::{EngineError, EngineResult};
pub use events::GenerationEvent;
pub use generator::{Generator, GeneratorConfig};
pub use picker::CandidatePicker;
pub use run::{GenerationRun, RunFailure, RunId, RunStage};

pub mod osc;

use thiserror::Error;

use crate::events::EffectEvent;

pub use osc::OscEngine;

/// Errors from the feedback engine boundary. None of these are fatal to the
/// process; every submission failure is logged and dropped, and the next
/// trigger retries the full start/compile/play sequence.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("device reports no haptic capability")]
    HardwareUnsupported,

    #[error("failed to start engine: {0}")]
    StartFailure(String),

    #[error("failed to compile pattern: {0}")]
    CompileFailure(String),

    #[error("failed to play pattern: {0}")]
    PlaybackFailure(String),

    #[error("transport error: {0}")]
    Transport(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineStatus {
    Stopped,
    Running,
    Unsupported,
    Error,
}

impl EngineStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EngineStatus::Stopped => "stopped",
            EngineStatus::Running => "running",
            EngineStatus::Unsupported => "unsupported",
            EngineStatus::Error => "error",
        }
    }
}

/// A compiled, playable unit. Opaque to callers; only the engine that
/// produced it knows how to play it.
#[derive(Debug, Clone)]
pub struct Pattern {
    pub(crate) messages: Vec<rosc::OscMessage>,
}

impl Pattern {
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// The three operations the playback driver requires of the external
/// haptic/audio engine.
pub trait FeedbackEngine {
    /// Initialize or resume the engine. Idempotent; calling it while
    /// already running is a cheap no-op.
    fn start(&mut self) -> Result<(), EngineError>;

    /// Validate and compile an event list. An empty list compiles to an
    /// empty pattern rather than failing.
    fn compile(&self, events: &[EffectEvent]) -> Result<Pattern, EngineError>;

    /// Begin playback at the given relative offset in seconds. Playing an
    /// empty pattern is a no-op.
    fn play(&mut self, pattern: &Pattern, start_time: f32) -> Result<(), EngineError>;

    fn status(&self) -> EngineStatus;
}

/// Engine that accepts everything and plays nothing. Used when the engine
/// is disabled in config, and by tests.
pub struct NullEngine {
    started: bool,
}

impl NullEngine {
    pub fn new() -> Self {
        Self { started: false }
    }
}

impl Default for NullEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedbackEngine for NullEngine {
    fn start(&mut self) -> Result<(), EngineError> {
        self.started = true;
        Ok(())
    }

    fn compile(&self, events: &[EffectEvent]) -> Result<Pattern, EngineError> {
        osc::validate_events(events)?;
        Ok(Pattern { messages: Vec::new() })
    }

    fn play(&mut self, _pattern: &Pattern, _start_time: f32) -> Result<(), EngineError> {
        log::debug!("null engine: playback discarded");
        Ok(())
    }

    fn status(&self) -> EngineStatus {
        if self.started {
            EngineStatus::Running
        } else {
            EngineStatus::Stopped
        }
    }
}

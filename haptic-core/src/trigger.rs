use std::time::{Duration, Instant};

use crate::engine::{EngineError, FeedbackEngine};
use crate::events::build_events;
use crate::state::HapticSettings;

/// Default quiescence window between the last settings mutation and
/// playback.
pub const DEFAULT_QUIESCENCE: Duration = Duration::from_millis(50);

/// Debounce state machine: idle, or pending with an armed deadline.
///
/// Every mutation (re)arms the deadline; `poll` fires once when the
/// deadline passes with no intervening mutation, then returns to idle.
/// Driven by the UI event loop with explicit `Instant`s, so the contract
/// is testable without sleeping.
#[derive(Debug)]
pub struct PlaybackTrigger {
    quiescence: Duration,
    deadline: Option<Instant>,
}

impl PlaybackTrigger {
    pub fn new(quiescence: Duration) -> Self {
        Self {
            quiescence,
            deadline: None,
        }
    }

    /// A settings mutation happened: open (or restart) the quiescence
    /// window. Only the last mutation in a burst counts.
    pub fn record_change(&mut self, now: Instant) {
        self.deadline = Some(now + self.quiescence);
    }

    /// Returns `true` exactly once per armed window, when the deadline has
    /// passed. Transitions back to idle on firing.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}

impl Default for PlaybackTrigger {
    fn default() -> Self {
        Self::new(DEFAULT_QUIESCENCE)
    }
}

/// Runs the start -> translate -> compile -> play sequence against the
/// engine when the trigger fires. All failures are logged and swallowed;
/// the next firing retries from the top. `HardwareUnsupported` latches and
/// disables playback for the rest of the session.
pub struct PlaybackDriver {
    hardware_unsupported: bool,
}

impl PlaybackDriver {
    pub fn new() -> Self {
        Self {
            hardware_unsupported: false,
        }
    }

    pub fn hardware_unsupported(&self) -> bool {
        self.hardware_unsupported
    }

    pub fn submit(
        &mut self,
        engine: &mut dyn FeedbackEngine,
        settings: &HapticSettings,
        has_haptics: bool,
        has_audio: bool,
    ) {
        if self.hardware_unsupported {
            return;
        }

        let events = build_events(settings, has_haptics, has_audio);
        if events.is_empty() {
            // Both families disabled: nothing to play, leave the engine alone.
            return;
        }

        if let Err(e) = engine.start() {
            match e {
                EngineError::HardwareUnsupported => {
                    log::error!("haptic playback disabled: {}", e);
                    self.hardware_unsupported = true;
                }
                e => log::warn!("engine start failed, dropping submission: {}", e),
            }
            return;
        }

        let pattern = match engine.compile(&events) {
            Ok(pattern) => pattern,
            Err(e) => {
                log::warn!("pattern compile failed, dropping submission: {}", e);
                return;
            }
        };

        if let Err(e) = engine.play(&pattern, 0.0) {
            log::warn!("playback failed: {}", e);
        }
    }
}

impl Default for PlaybackDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{EngineStatus, NullEngine, Pattern};
    use crate::events::EffectEvent;

    #[test]
    fn test_idle_never_fires() {
        let mut trigger = PlaybackTrigger::default();
        let now = Instant::now();
        assert!(!trigger.poll(now));
        assert!(!trigger.poll(now + Duration::from_secs(10)));
    }

    #[test]
    fn test_fires_after_quiescence() {
        let mut trigger = PlaybackTrigger::new(Duration::from_millis(50));
        let t0 = Instant::now();

        trigger.record_change(t0);
        assert!(trigger.is_pending());
        assert!(!trigger.poll(t0 + Duration::from_millis(49)));
        assert!(trigger.poll(t0 + Duration::from_millis(50)));
        assert!(!trigger.is_pending());
    }

    #[test]
    fn test_burst_collapses_to_single_firing() {
        let mut trigger = PlaybackTrigger::new(Duration::from_millis(50));
        let t0 = Instant::now();

        // Five mutations inside the window; only the last one counts.
        for i in 0..5 {
            trigger.record_change(t0 + Duration::from_millis(i * 10));
        }

        assert!(!trigger.poll(t0 + Duration::from_millis(60)));
        assert!(trigger.poll(t0 + Duration::from_millis(90)));
        // Fired once; stays idle until the next change.
        assert!(!trigger.poll(t0 + Duration::from_millis(200)));
    }

    #[test]
    fn test_rearm_after_firing() {
        let mut trigger = PlaybackTrigger::new(Duration::from_millis(50));
        let t0 = Instant::now();

        trigger.record_change(t0);
        assert!(trigger.poll(t0 + Duration::from_millis(50)));

        trigger.record_change(t0 + Duration::from_millis(100));
        assert!(trigger.poll(t0 + Duration::from_millis(150)));
    }

    /// Engine whose every phase can be scripted to fail, recording calls.
    struct ScriptedEngine {
        start_result: Option<EngineError>,
        compile_fails: bool,
        play_fails: bool,
        starts: usize,
        compiles: std::cell::Cell<usize>,
        plays: usize,
    }

    impl ScriptedEngine {
        fn ok() -> Self {
            Self {
                start_result: None,
                compile_fails: false,
                play_fails: false,
                starts: 0,
                compiles: std::cell::Cell::new(0),
                plays: 0,
            }
        }
    }

    impl FeedbackEngine for ScriptedEngine {
        fn start(&mut self) -> Result<(), EngineError> {
            self.starts += 1;
            match self.start_result.take() {
                Some(e) => Err(e),
                None => Ok(()),
            }
        }

        fn compile(&self, events: &[EffectEvent]) -> Result<Pattern, EngineError> {
            self.compiles.set(self.compiles.get() + 1);
            if self.compile_fails {
                return Err(EngineError::CompileFailure("scripted".to_string()));
            }
            let _ = events;
            Ok(Pattern {
                messages: vec![rosc::OscMessage {
                    addr: "/pattern/haptic".to_string(),
                    args: vec![],
                }],
            })
        }

        fn play(&mut self, _pattern: &Pattern, _start_time: f32) -> Result<(), EngineError> {
            self.plays += 1;
            if self.play_fails {
                return Err(EngineError::PlaybackFailure("scripted".to_string()));
            }
            Ok(())
        }

        fn status(&self) -> EngineStatus {
            EngineStatus::Running
        }
    }

    #[test]
    fn test_submit_runs_full_sequence() {
        let mut driver = PlaybackDriver::new();
        let mut engine = ScriptedEngine::ok();

        driver.submit(&mut engine, &HapticSettings::default(), true, false);

        assert_eq!(engine.starts, 1);
        assert_eq!(engine.compiles.get(), 1);
        assert_eq!(engine.plays, 1);
    }

    #[test]
    fn test_submit_skips_engine_when_nothing_enabled() {
        let mut driver = PlaybackDriver::new();
        let mut engine = ScriptedEngine::ok();

        driver.submit(&mut engine, &HapticSettings::default(), false, false);

        assert_eq!(engine.starts, 0);
        assert_eq!(engine.compiles.get(), 0);
        assert_eq!(engine.plays, 0);
    }

    #[test]
    fn test_start_failure_is_transient() {
        let mut driver = PlaybackDriver::new();
        let mut engine = ScriptedEngine::ok();
        engine.start_result = Some(EngineError::StartFailure("busy".to_string()));

        driver.submit(&mut engine, &HapticSettings::default(), true, false);
        assert_eq!(engine.plays, 0);

        // Next firing retries the whole sequence and succeeds.
        driver.submit(&mut engine, &HapticSettings::default(), true, false);
        assert_eq!(engine.starts, 2);
        assert_eq!(engine.plays, 1);
    }

    #[test]
    fn test_hardware_unsupported_latches() {
        let mut driver = PlaybackDriver::new();
        let mut engine = ScriptedEngine::ok();
        engine.start_result = Some(EngineError::HardwareUnsupported);

        driver.submit(&mut engine, &HapticSettings::default(), true, false);
        assert!(driver.hardware_unsupported());

        driver.submit(&mut engine, &HapticSettings::default(), true, false);
        assert_eq!(engine.starts, 1, "no retry after capability failure");
    }

    #[test]
    fn test_compile_failure_drops_submission() {
        let mut driver = PlaybackDriver::new();
        let mut engine = ScriptedEngine::ok();
        engine.compile_fails = true;

        driver.submit(&mut engine, &HapticSettings::default(), true, false);
        assert_eq!(engine.plays, 0);
        assert!(!driver.hardware_unsupported());
    }

    #[test]
    fn test_play_failure_does_not_poison_driver() {
        let mut driver = PlaybackDriver::new();
        let mut engine = ScriptedEngine::ok();
        engine.play_fails = true;

        driver.submit(&mut engine, &HapticSettings::default(), true, false);
        engine.play_fails = false;
        driver.submit(&mut engine, &HapticSettings::default(), true, false);
        assert_eq!(engine.plays, 2);
    }

    #[test]
    fn test_driver_works_with_null_engine() {
        let mut driver = PlaybackDriver::new();
        let mut engine = NullEngine::new();
        driver.submit(&mut engine, &HapticSettings::default(), true, true);
        assert_eq!(engine.status(), EngineStatus::Running);
    }
}

mod panes;
mod setup;
mod ui;

use std::time::{Duration, Instant};

use haptic_core::config::Config;
use haptic_core::dispatch;
use haptic_core::engine::{FeedbackEngine, NullEngine, OscEngine};
use haptic_core::state::{SettingsChange, SettingsStore};
use haptic_core::trigger::{PlaybackDriver, PlaybackTrigger};

use panes::PlaygroundPane;
use ui::{AppEvent, KeyCode, RatatuiBackend};

fn main() -> std::io::Result<()> {
    let mut backend = RatatuiBackend::new()?;
    backend.start()?;

    let result = run(&mut backend);

    backend.stop()?;
    result
}

fn run(backend: &mut RatatuiBackend) -> std::io::Result<()> {
    let config = Config::load();
    setup::init_logging(&config);

    let mut store = SettingsStore::new();
    let changes = store.subscribe();

    let mut engine: Box<dyn FeedbackEngine> = if config.engine_enabled {
        Box::new(OscEngine::new(&config.engine_addr))
    } else {
        Box::new(NullEngine::new())
    };
    setup::auto_start_engine(engine.as_mut());

    let mut trigger = PlaybackTrigger::new(Duration::from_millis(config.debounce_ms));
    let mut driver = PlaybackDriver::new();
    let mut pending: Option<SettingsChange> = None;

    let mut pane = PlaygroundPane::new(&store);
    let mut last_render_time = Instant::now();
    let mut needs_render = true;

    loop {
        if let Some(app_event) = backend.poll_event(Duration::from_millis(2)) {
            match app_event {
                AppEvent::Key(event) => {
                    // Global quit, any pane state
                    let quit_key = matches!(event.key, KeyCode::Char('q'))
                        || (event.ctrl && event.key == KeyCode::Char('c'));
                    let action = if quit_key {
                        haptic_core::action::Action::Quit
                    } else {
                        pane.handle_key(&event, &store)
                    };

                    let result = dispatch::dispatch_action(&action, &mut store);
                    if result.quit {
                        break;
                    }
                    pane.sync_from(&store);
                    needs_render = true;
                }
                AppEvent::Resize => {
                    needs_render = true;
                }
            }
        }

        // Collapse the change burst; only the last snapshot matters.
        let now = Instant::now();
        let mut latest = None;
        while let Ok(change) = changes.try_recv() {
            latest = Some(change);
        }
        if let Some(change) = latest {
            pending = Some(change);
            trigger.record_change(now);
        }

        if trigger.poll(now) {
            if let Some(change) = pending.take() {
                driver.submit(
                    engine.as_mut(),
                    &change.settings,
                    change.has_haptics,
                    change.has_audio,
                );
                // Engine status may have moved; refresh the header.
                needs_render = true;
            }
        }

        // Render at ~60fps when something changed
        let now_render = Instant::now();
        if needs_render && now_render.duration_since(last_render_time).as_millis() >= 16 {
            last_render_time = now_render;
            needs_render = false;
            let status = if driver.hardware_unsupported() {
                haptic_core::engine::EngineStatus::Unsupported
            } else {
                engine.status()
            };
            backend.draw(|frame| {
                let area = frame.area();
                pane.render(area, frame.buffer_mut(), &store, status);
            })?;
        }
    }

    Ok(())
}

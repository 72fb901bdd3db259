use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Widget};

use haptic_core::action::Action;
use haptic_core::engine::EngineStatus;
use haptic_core::state::{ParamId, SettingsStore};

use crate::ui::theme::PlaygroundTheme;
use crate::ui::widgets::{CheckboxWidget, SliderWidget};
use crate::ui::{InputEvent, KeyCode};

/// One focusable row in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Row {
    HapticsToggle,
    AudioToggle,
    Param(ParamId),
}

/// Sidebar order: Haptics section, Audio section, then the shared
/// envelope under "Other".
const ROWS: [Row; 12] = [
    Row::HapticsToggle,
    Row::Param(ParamId::HapticIntensity),
    Row::Param(ParamId::HapticSharpness),
    Row::AudioToggle,
    Row::Param(ParamId::AudioVolume),
    Row::Param(ParamId::AudioPitch),
    Row::Param(ParamId::AudioPan),
    Row::Param(ParamId::AudioBrightness),
    Row::Param(ParamId::AttackTime),
    Row::Param(ParamId::DecayTime),
    Row::Param(ParamId::ReleaseTime),
    Row::Param(ParamId::Sustained),
];

const SLIDER_STEP: f32 = 0.01;

fn is_haptic_family(param: ParamId) -> bool {
    matches!(param, ParamId::HapticIntensity | ParamId::HapticSharpness)
}

fn is_audio_family(param: ParamId) -> bool {
    matches!(
        param,
        ParamId::AudioVolume | ParamId::AudioPitch | ParamId::AudioPan | ParamId::AudioBrightness
    )
}

/// The one pane of the app: a sidebar of two feature toggles and ten
/// labeled sliders. Rows of a disabled family are dimmed and skipped by
/// focus navigation; envelope rows stay active regardless.
pub struct PlaygroundPane {
    sliders: Vec<(ParamId, SliderWidget)>,
    haptics_toggle: CheckboxWidget,
    audio_toggle: CheckboxWidget,
    focus: usize,
}

impl PlaygroundPane {
    pub fn new(store: &SettingsStore) -> Self {
        let sliders = ParamId::ALL
            .iter()
            .map(|&param| {
                let (min, max) = param.range();
                let mut slider = SliderWidget::new(min, max, SLIDER_STEP);
                slider.set_value(store.settings().get(param));
                (param, slider)
            })
            .collect();

        let mut pane = Self {
            sliders,
            haptics_toggle: CheckboxWidget::new("Enabled"),
            audio_toggle: CheckboxWidget::new("Enabled"),
            focus: 0,
        };
        pane.sync_from(store);
        pane.apply_focus();
        pane
    }

    /// Pull widget state from the store snapshot. Called after every
    /// dispatch so widgets never drift from the model.
    pub fn sync_from(&mut self, store: &SettingsStore) {
        let settings = store.settings();
        for (param, slider) in &mut self.sliders {
            slider.set_value(settings.get(*param));
        }
        self.haptics_toggle.set_checked(store.has_haptics());
        self.audio_toggle.set_checked(store.has_audio());

        // Focus may sit on a row whose family just got disabled.
        if !self.row_enabled(ROWS[self.focus], store) {
            self.move_focus(1, store);
        }
    }

    fn row_enabled(&self, row: Row, store: &SettingsStore) -> bool {
        match row {
            Row::HapticsToggle | Row::AudioToggle => true,
            Row::Param(param) => {
                if is_haptic_family(param) {
                    store.has_haptics()
                } else if is_audio_family(param) {
                    store.has_audio()
                } else {
                    true
                }
            }
        }
    }

    fn move_focus(&mut self, dir: isize, store: &SettingsStore) {
        let len = ROWS.len() as isize;
        let mut idx = self.focus as isize;
        for _ in 0..ROWS.len() {
            idx = (idx + dir).rem_euclid(len);
            if self.row_enabled(ROWS[idx as usize], store) {
                self.focus = idx as usize;
                break;
            }
        }
        self.apply_focus();
    }

    fn apply_focus(&mut self) {
        let focused = ROWS[self.focus];
        self.haptics_toggle
            .set_focused(focused == Row::HapticsToggle);
        self.audio_toggle.set_focused(focused == Row::AudioToggle);
        for (param, slider) in &mut self.sliders {
            slider.set_focused(focused == Row::Param(*param));
        }
    }

    fn slider_mut(&mut self, param: ParamId) -> &mut SliderWidget {
        self.sliders
            .iter_mut()
            .find(|(p, _)| *p == param)
            .map(|(_, s)| s)
            .expect("slider exists for every ParamId")
    }

    pub fn handle_key(&mut self, event: &InputEvent, store: &SettingsStore) -> Action {
        match event.key {
            KeyCode::Up => {
                self.move_focus(-1, store);
                return Action::None;
            }
            KeyCode::Down | KeyCode::Tab => {
                self.move_focus(1, store);
                return Action::None;
            }
            _ => {}
        }

        match ROWS[self.focus] {
            Row::HapticsToggle => {
                if self.haptics_toggle.handle_input(event) {
                    Action::ToggleHaptics
                } else {
                    Action::None
                }
            }
            Row::AudioToggle => {
                if self.audio_toggle.handle_input(event) {
                    Action::ToggleAudio
                } else {
                    Action::None
                }
            }
            Row::Param(param) => {
                let slider = self.slider_mut(param);
                if slider.handle_input(event) {
                    let value = slider.value();
                    Action::SetParam(param, value)
                } else {
                    Action::None
                }
            }
        }
    }

    pub fn render(
        &mut self,
        area: Rect,
        buf: &mut Buffer,
        store: &SettingsStore,
        status: EngineStatus,
    ) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Haptic Playground ")
            .border_style(PlaygroundTheme::border_style())
            .title_style(PlaygroundTheme::section_style());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 20 || inner.height < 4 {
            return;
        }

        let x = inner.x + 1;
        let width = inner.width.saturating_sub(2);
        let mut y = inner.y;

        // Engine status header
        let status_style = match status {
            EngineStatus::Running => PlaygroundTheme::status_style(),
            _ => PlaygroundTheme::status_error_style(),
        };
        buf.set_string(x, y, format!("engine: {}", status.as_str()), status_style);
        y += 2;

        for row in ROWS.iter() {
            if y >= inner.bottom() {
                break;
            }

            match row {
                Row::HapticsToggle => {
                    y += self.render_section_header(buf, x, y, width, "Haptics");
                    if y >= inner.bottom() {
                        break;
                    }
                    y += self.haptics_toggle.render_buf(buf, x, y, width);
                }
                Row::AudioToggle => {
                    y += self.render_section_header(buf, x, y, width, "Audio");
                    if y >= inner.bottom() {
                        break;
                    }
                    y += self.audio_toggle.render_buf(buf, x, y, width);
                }
                Row::Param(param) => {
                    // Envelope section starts at attack time
                    if *param == ParamId::AttackTime {
                        y += self.render_section_header(buf, x, y, width, "Other");
                        if y >= inner.bottom() {
                            break;
                        }
                    }

                    let enabled = self.row_enabled(*row, store);
                    let value = store.settings().get(*param);
                    let label = format!("{}: {:.2}", param.label(), value);
                    let label_style = if enabled {
                        PlaygroundTheme::label_style()
                    } else {
                        PlaygroundTheme::disabled_style()
                    };
                    buf.set_string(x, y, label, label_style);
                    y += 1;
                    if y >= inner.bottom() {
                        break;
                    }

                    let slider = self.slider_mut(*param);
                    y += slider.render_buf(buf, x, y, width);
                }
            }
        }
    }

    fn render_section_header(
        &self,
        buf: &mut Buffer,
        x: u16,
        y: u16,
        _width: u16,
        title: &str,
    ) -> u16 {
        buf.set_string(x, y, title, PlaygroundTheme::section_style());
        1
    }
}

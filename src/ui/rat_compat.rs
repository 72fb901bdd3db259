use crossterm::event::{Event, KeyCode as CtKey, KeyEvent, KeyModifiers};
use rat_event::Outcome;

use crate::ui::input::{InputEvent, KeyCode};

/// Rebuild a crossterm event for rat-widget's event handlers.
pub fn to_crossterm_key_event(event: &InputEvent) -> Event {
    let code = match event.key {
        KeyCode::Char(c) => CtKey::Char(c),
        KeyCode::Up => CtKey::Up,
        KeyCode::Down => CtKey::Down,
        KeyCode::Left => CtKey::Left,
        KeyCode::Right => CtKey::Right,
        KeyCode::Home => CtKey::Home,
        KeyCode::End => CtKey::End,
        KeyCode::Enter => CtKey::Enter,
        KeyCode::Esc => CtKey::Esc,
        KeyCode::Tab => CtKey::Tab,
        KeyCode::BackTab => CtKey::BackTab,
        KeyCode::Other => CtKey::Null,
    };

    let mut modifiers = KeyModifiers::empty();
    if event.ctrl {
        modifiers |= KeyModifiers::CONTROL;
    }
    if event.shift {
        modifiers |= KeyModifiers::SHIFT;
    }

    Event::Key(KeyEvent::new(code, modifiers))
}

pub fn outcome_consumed(outcome: Outcome) -> bool {
    !matches!(outcome, Outcome::Continue)
}

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::{Frame, Terminal};

use crate::ui::input::{AppEvent, InputEvent};

/// Owns the terminal: raw mode, alternate screen, event polling, frames.
pub struct RatatuiBackend {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl RatatuiBackend {
    pub fn new() -> io::Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }

    pub fn start(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        self.terminal.clear()?;
        Ok(())
    }

    pub fn stop(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Poll for the next input event, waiting at most `timeout`.
    pub fn poll_event(&mut self, timeout: Duration) -> Option<AppEvent> {
        if !event::poll(timeout).unwrap_or(false) {
            return None;
        }
        match event::read() {
            Ok(Event::Key(key)) if key.kind != event::KeyEventKind::Release => {
                Some(AppEvent::Key(InputEvent::from_crossterm(&key)))
            }
            Ok(Event::Resize(_, _)) => Some(AppEvent::Resize),
            _ => None,
        }
    }

    pub fn draw<F>(&mut self, render: F) -> io::Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(render)?;
        Ok(())
    }
}

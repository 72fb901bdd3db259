use ratatui::style::{Color, Modifier, Style};

/// Central style table for the playground UI.
pub struct PlaygroundTheme;

impl PlaygroundTheme {
    pub fn border_style() -> Style {
        Style::default().fg(Color::Rgb(100, 180, 255))
    }

    pub fn section_style() -> Style {
        Style::default()
            .fg(Color::Rgb(100, 180, 255))
            .add_modifier(Modifier::BOLD)
    }

    pub fn label_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn disabled_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn status_style() -> Style {
        Style::default().fg(Color::Rgb(140, 200, 140))
    }

    pub fn status_error_style() -> Style {
        Style::default().fg(Color::Rgb(220, 120, 120))
    }

    pub fn slider_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn slider_focus_style() -> Style {
        Style::default().fg(Color::Rgb(100, 180, 255))
    }

    pub fn slider_knob_style() -> Style {
        Style::default()
            .fg(Color::Rgb(255, 200, 100))
            .add_modifier(Modifier::BOLD)
    }

    pub fn checkbox_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn checkbox_focus_style() -> Style {
        Style::default().fg(Color::Rgb(100, 180, 255))
    }
}

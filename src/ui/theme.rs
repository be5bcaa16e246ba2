use crate::models::Theme;
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub option: Color,
    pub selected: Color,
    pub progress_current: Color,
    pub progress_done: Color,
    pub progress_pending: Color,
    pub correct: Color,
    pub incorrect: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                background: Color::Black,
                text: Color::White,
                muted: Color::Gray,
                accent: Color::Cyan,
                option: Color::DarkGray,
                selected: Color::Blue,
                progress_current: Color::Green,
                progress_done: Color::Gray,
                progress_pending: Color::DarkGray,
                correct: Color::Green,
                incorrect: Color::Red,
            },
            Theme::Light => Self {
                background: Color::White,
                text: Color::Black,
                muted: Color::DarkGray,
                accent: Color::Blue,
                option: Color::Gray,
                selected: Color::Blue,
                progress_current: Color::Green,
                progress_done: Color::DarkGray,
                progress_pending: Color::Gray,
                correct: Color::Green,
                incorrect: Color::Red,
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn key(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title(&self) -> Style {
        self.key()
    }
}

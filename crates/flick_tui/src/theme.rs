//! Flick theme
//!
//! Terminal rendition of the card UI: the terminal owns the background, so
//! everything here is a foreground style over it.

use ratatui::style::{Color, Modifier, Style};

/// Flick-specific styles
pub struct FlickColors;

impl FlickColors {
    pub fn title() -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn text_primary() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn text_muted() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn rating() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn watch_action() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selection() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn gauge() -> Style {
        Style::default().fg(Color::Cyan).bg(Color::Black)
    }

    pub fn notice_border() -> Style {
        Style::default().fg(Color::Green)
    }
}

/// Layout tokens for the Flick UI
pub struct FlickTokens;

impl FlickTokens {
    /// Bordered title bar.
    pub const HEADER_HEIGHT: u16 = 3;
    /// Bordered rating gauge and language selector row.
    pub const CONTROLS_HEIGHT: u16 = 3;
    /// One bordered card: title, rating, poster reference, watch caption.
    pub const CARD_HEIGHT: u16 = 6;
    /// Key binding line at the bottom.
    pub const FOOTER_HEIGHT: u16 = 1;
    /// Width of the language selector column.
    pub const LANGUAGE_WIDTH: u16 = 28;
    pub const NOTICE_WIDTH: u16 = 50;
    pub const NOTICE_HEIGHT: u16 = 6;
}

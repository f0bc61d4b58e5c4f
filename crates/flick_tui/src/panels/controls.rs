//! The filter controls row: rating gauge on the left, language selector on
//! the right.

use flick_i18n::MessageKey;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::{Block, Gauge, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::theme::{FlickColors, FlickTokens};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let [gauge_area, language_area] = Layout::horizontal([
        Constraint::Min(20),
        Constraint::Length(FlickTokens::LANGUAGE_WIDTH),
    ])
    .areas(area);

    // The control keeps its position inside 0-10, so the ratio is always
    // a valid gauge input.
    let gauge = Gauge::default()
        .block(Block::bordered().title(app.translator.text(MessageKey::MinRating)))
        .gauge_style(FlickColors::gauge())
        .ratio(app.threshold() / 10.0)
        .label(app.threshold_label());
    frame.render_widget(gauge, gauge_area);

    let language = Paragraph::new(selected_language_line(app)).style(FlickColors::text_primary());
    frame.render_widget(
        language.block(Block::bordered().title(app.translator.text(MessageKey::LanguageLabel))),
        language_area,
    );
}

/// What the selector shows: `Français (fr)` for a shipped language, or the
/// raw code of an unrecognized selection.
fn selected_language_line(app: &App) -> String {
    match app.translator.language() {
        Some(lang) => format!("{} ({})", lang.native_name(), lang.code()),
        None => app.translator.language_code().to_string(),
    }
}

//! Top-level frame layout and render dispatch.

use flick_i18n::MessageKey;
use ratatui::layout::{Constraint, Layout};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::panels;
use crate::theme::{FlickColors, FlickTokens};

/// Draw one full frame: header, controls, card list, footer, and the
/// blocking watch notice on top when one is active.
pub fn draw(frame: &mut Frame, app: &App) {
    let [header, controls, list, footer] = Layout::vertical([
        Constraint::Length(FlickTokens::HEADER_HEIGHT),
        Constraint::Length(FlickTokens::CONTROLS_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(FlickTokens::FOOTER_HEIGHT),
    ])
    .areas(frame.area());

    let title = Line::from(vec![
        Span::styled("Flick", FlickColors::title()),
        Span::raw("  "),
        Span::styled(
            app.translator.text(MessageKey::AppTitle),
            FlickColors::text_primary(),
        ),
    ]);
    frame.render_widget(Paragraph::new(title).block(Block::bordered()), header);

    panels::controls::render(app, frame, controls);
    panels::movie_list::render(app, frame, list);

    let hint = Paragraph::new(app.translator.text(MessageKey::FooterHint))
        .style(FlickColors::text_muted());
    frame.render_widget(hint, footer);

    if app.notice.is_some() {
        panels::watch_modal::render(app, frame);
    }
}

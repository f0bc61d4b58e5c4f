//! The blocking watch notice.

use flick_i18n::MessageKey;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;
use crate::theme::{FlickColors, FlickTokens};

pub fn render(app: &App, frame: &mut Frame) {
    let Some(notice) = app.notice.as_deref() else {
        return;
    };

    let area = centered(
        frame.area(),
        FlickTokens::NOTICE_WIDTH,
        FlickTokens::NOTICE_HEIGHT,
    );
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::styled(notice.to_string(), FlickColors::text_primary()),
        Line::raw(""),
        Line::styled(
            app.translator.text(MessageKey::DismissHint).to_string(),
            FlickColors::text_muted(),
        ),
    ];
    let body = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::bordered()
            .border_style(FlickColors::notice_border())
            .title(app.translator.text(MessageKey::Watch)),
    );
    frame.render_widget(body, area);
}

fn centered(frame_area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(frame_area.width);
    let height = height.min(frame_area.height);
    let x = frame_area.x + (frame_area.width - width) / 2;
    let y = frame_area.y + (frame_area.height - height) / 2;
    Rect::new(x, y, width, height)
}

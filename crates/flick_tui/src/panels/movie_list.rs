//! The card list: one bordered card per visible movie.

use flick_core::Movie;
use flick_i18n::MessageKey;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Modifier;
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::theme::{FlickColors, FlickTokens};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let movies = app.browse.visible();
    if movies.is_empty() {
        let empty = Paragraph::new(app.translator.text(MessageKey::NoResults))
            .style(FlickColors::text_muted())
            .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    // Stateless windowing: keep the selected card on screen.
    let per_screen = (area.height / FlickTokens::CARD_HEIGHT).max(1) as usize;
    let offset = (app.selected + 1).saturating_sub(per_screen);

    let mut y = area.y;
    for (idx, movie) in movies.iter().enumerate().skip(offset).take(per_screen) {
        let card = Rect::new(area.x, y, area.width, FlickTokens::CARD_HEIGHT)
            .intersection(area);
        if card.height == 0 {
            break;
        }
        render_card(app, frame, card, idx, movie);
        y += FlickTokens::CARD_HEIGHT;
    }
}

fn render_card(app: &App, frame: &mut Frame, area: Rect, idx: usize, movie: &Movie) {
    let selected = idx == app.selected;
    let border = if selected {
        FlickColors::selection()
    } else {
        FlickColors::text_muted()
    };
    let watch = if selected {
        FlickColors::watch_action()
    } else {
        FlickColors::text_muted()
    };

    let lines = vec![
        Line::styled(
            movie.title.clone(),
            FlickColors::text_primary().add_modifier(Modifier::BOLD),
        ),
        Line::styled(movie.rating_label(), FlickColors::rating()),
        Line::styled(movie.poster_url.clone(), FlickColors::text_muted()),
        Line::styled(
            format!("[ {} ]", app.translator.text(MessageKey::Watch)),
            watch,
        ),
    ];
    let card = Paragraph::new(lines).block(Block::bordered().border_style(border));
    frame.render_widget(card, area);
}

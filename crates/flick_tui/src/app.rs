//! Application state and event loop.

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use flick_core::{BrowseState, CatalogProvider, WatchHandler, WatchOutcome};
use flick_i18n::{args, MessageKey, Translator};
use ratatui::DefaultTerminal;

use crate::ui;

/// Threshold control bounds, in tenths of a rating point. Mirrors a
/// 0-10 slider with a 0.1 step.
const MAX_TENTHS: u16 = 100;

/// Application state
///
/// Owns the injected catalog and watch seams plus everything the panels
/// read. State is threaded explicitly; nothing lives in a global.
pub struct App {
    provider: Box<dyn CatalogProvider>,
    watch_handler: Box<dyn WatchHandler>,
    /// Rating filter and its cached result.
    pub browse: BrowseState,
    /// Translates every fixed UI string.
    pub translator: Translator,
    /// Selection index into the visible list.
    pub selected: usize,
    /// Blocking watch notice; input is swallowed while this is shown.
    pub notice: Option<String>,
    /// Threshold control position, in tenths.
    tenths: u16,
    should_quit: bool,
}

impl App {
    pub fn new(
        provider: Box<dyn CatalogProvider>,
        watch_handler: Box<dyn WatchHandler>,
        language: &str,
        min_rating: f64,
    ) -> Self {
        let mut translator = Translator::default();
        translator.set_language(language);

        let mut app = Self {
            provider,
            watch_handler,
            browse: BrowseState::new(),
            translator,
            selected: 0,
            notice: None,
            tenths: rating_to_tenths(min_rating),
            should_quit: false,
        };
        app.refilter();
        app
    }

    /// The control's threshold as the filter sees it.
    pub fn threshold(&self) -> f64 {
        f64::from(self.tenths) / 10.0
    }

    /// The control's threshold as the gauge shows it: always one decimal,
    /// free of float noise (`8.7`, `10.0`).
    pub fn threshold_label(&self) -> String {
        format!("{}.{}", self.tenths / 10, self.tenths % 10)
    }

    pub fn raise_threshold(&mut self) {
        if self.tenths < MAX_TENTHS {
            self.tenths += 1;
            self.refilter();
        }
    }

    pub fn lower_threshold(&mut self) {
        if self.tenths > 0 {
            self.tenths -= 1;
            self.refilter();
        }
    }

    /// Switch to the next language. The cached filtered list is reused;
    /// only the strings change on the next draw.
    pub fn cycle_language(&mut self) {
        self.translator.cycle_language();
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.browse.visible().len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Activate the watch action for the selected card.
    pub fn watch_selected(&mut self) {
        let Some(movie) = self.browse.visible().get(self.selected).cloned() else {
            return;
        };
        match self.watch_handler.watch(&movie) {
            WatchOutcome::Handled => {}
            WatchOutcome::Stub { id } => {
                // The notice always names the id. A degraded translation
                // falls back to the bare key name, which has no {id} slot,
                // so the id is appended outside the template there.
                let body = match self.translator.language() {
                    Some(_) => self
                        .translator
                        .format(MessageKey::WatchRedirect, &args! { id: id.get() }),
                    None => format!(
                        "{}: {}",
                        self.translator.text(MessageKey::WatchRedirect),
                        id
                    ),
                };
                self.notice = Some(body);
            }
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // The conventional interrupt quits no matter what is on screen.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // The notice is modal: nothing else reacts until it is dismissed.
        if self.notice.is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                self.dismiss_notice();
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Left | KeyCode::Char('h') => self.lower_threshold(),
            KeyCode::Right | KeyCode::Char('l') => self.raise_threshold(),
            KeyCode::Tab => self.cycle_language(),
            KeyCode::Enter => self.watch_selected(),
            _ => {}
        }
    }

    fn refilter(&mut self) {
        let threshold = self.threshold();
        self.browse.apply_filter(self.provider.as_ref(), threshold);
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let len = self.browse.visible().len();
        self.selected = match len {
            0 => 0,
            _ => self.selected.min(len - 1),
        };
    }
}

/// Map a startup rating onto the control's tenths scale.
///
/// The control owns its 0-10 range, so out-of-range startup values are
/// clamped here rather than handed to the filter raw.
fn rating_to_tenths(rating: f64) -> u16 {
    let tenths = (rating * 10.0).round();
    if tenths.is_nan() {
        return 0;
    }
    tenths.clamp(0.0, f64::from(MAX_TENTHS)) as u16
}

/// Run the application event loop.
pub fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, &app))?;
        if let Event::Key(key) = event::read()? {
            app.on_key(key);
        }
    }
    Ok(())
}

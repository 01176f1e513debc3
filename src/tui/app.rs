//! Main TUI application.
//!
//! Handles:
//! - Terminal setup and teardown
//! - Layout of the single prediction screen
//! - Translating key events into forecast service calls

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};

use crate::adapters::{ChaChaAmountSource, ClockIdSource, JsonCatalogProvider, MockCatalogProvider};
use crate::application::{ForecastService, Selection};
use crate::config::AppConfig;
use crate::ports::CatalogProvider;

use super::ui::{
    chart::render_chart,
    form::{cycle_type, push_date_char, render_form, FormField, FormState},
    history::render_history,
    render_footer, render_header,
};

/// Service wired with the production adapters.
pub type AppService = ForecastService<ChaChaAmountSource, ClockIdSource>;

/// Main application state
pub struct App {
    /// Owner of form fields, catalog, ledger and chart
    service: AppService,

    /// Focus, highlight and messages
    form_state: FormState,

    /// Whether the app should quit
    should_quit: bool,
}

impl App {
    /// Create the application from configuration.
    ///
    /// # Errors
    /// Returns error if the catalog source cannot be loaded.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let provider: Box<dyn CatalogProvider> = match &config.catalog_path {
            Some(path) => Box::new(JsonCatalogProvider::from_path(path)?),
            None => Box::new(MockCatalogProvider::new()),
        };

        let amounts = match config.seed {
            Some(seed) => {
                tracing::info!("Using seeded amount source");
                ChaChaAmountSource::from_seed(seed)
            }
            None => ChaChaAmountSource::from_entropy(),
        };

        let service = ForecastService::load(
            provider.as_ref(),
            amounts,
            ClockIdSource::new(),
            config.submit_policy,
        )?;

        Ok(Self::with_service(service))
    }

    /// Create application with an injected service.
    #[must_use]
    pub fn with_service(service: AppService) -> Self {
        Self {
            service,
            form_state: FormState::default(),
            should_quit: false,
        }
    }

    /// Run the main application loop.
    ///
    /// # Errors
    /// Returns error if terminal operations fail.
    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn main_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code, key.modifiers);
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn draw(&mut self, f: &mut Frame) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),      // Header
                Constraint::Min(20),        // Form + chart
                Constraint::Percentage(35), // History
                Constraint::Length(3),      // Footer
            ])
            .split(f.area());

        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(rows[1]);

        render_header(f, rows[0]);
        render_chart(f, top[1], self.service.chart());
        self.form_state.history_rows = render_history(
            f,
            rows[2],
            self.service.ledger().records(),
            self.form_state.history_offset,
        );
        render_footer(f, rows[3]);
        // Drawn last so the suggestion dropdown overlays its neighbours.
        render_form(
            f,
            top[0],
            &self.form_state,
            self.service.fields(),
            self.service.suggestions(),
        );
    }

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        if key == KeyCode::Esc
            || (modifiers.contains(KeyModifiers::CONTROL)
                && matches!(key, KeyCode::Char('q') | KeyCode::Char('c')))
        {
            self.should_quit = true;
            return;
        }

        let suggesting = self.form_state.focus == FormField::MedicationName
            && !self.service.suggestions().is_empty();

        match key {
            KeyCode::Tab => self.form_state.next_field(),
            KeyCode::BackTab => self.form_state.prev_field(),
            KeyCode::Down if suggesting => {
                self.form_state
                    .highlight_next(self.service.suggestions().len());
            }
            KeyCode::Up if suggesting => {
                self.form_state
                    .highlight_prev(self.service.suggestions().len());
            }
            KeyCode::Down => self.form_state.next_field(),
            KeyCode::Up => self.form_state.prev_field(),
            KeyCode::Enter if suggesting => self.select_highlighted(),
            KeyCode::Enter => self.submit(),
            KeyCode::Left | KeyCode::Right if self.form_state.focus == FormField::MedicationType => {
                let next = cycle_type(
                    &self.service.fields().medication_type,
                    key == KeyCode::Right,
                );
                self.service.set_medication_type(next);
                self.form_state.error_message = None;
            }
            KeyCode::PageDown => self.form_state.history_page_down(self.service.ledger().len()),
            KeyCode::PageUp => self.form_state.history_page_up(),
            KeyCode::Home => self.form_state.history_home(),
            KeyCode::End => self.form_state.history_end(self.service.ledger().len()),
            KeyCode::Char(c) => self.input_char(c),
            KeyCode::Backspace => self.delete_char(),
            KeyCode::Delete => self.clear_field(),
            _ => {}
        }
    }

    fn input_char(&mut self, c: char) {
        match self.form_state.focus {
            FormField::PredictionDate => {
                if let Some(next) = push_date_char(&self.service.fields().prediction_date, c) {
                    self.service.set_prediction_date(next);
                    self.form_state.error_message = None;
                }
            }
            FormField::MedicationName => {
                let mut name = self.service.fields().medication_name.clone();
                name.push(c);
                self.update_name(name);
            }
            FormField::MedicationType | FormField::Submit => {}
        }
    }

    fn delete_char(&mut self) {
        match self.form_state.focus {
            FormField::PredictionDate => {
                let mut date = self.service.fields().prediction_date.clone();
                date.pop();
                self.service.set_prediction_date(date);
            }
            FormField::MedicationName => {
                let mut name = self.service.fields().medication_name.clone();
                name.pop();
                self.update_name(name);
            }
            FormField::MedicationType => self.service.set_medication_type(""),
            FormField::Submit => {}
        }
    }

    fn clear_field(&mut self) {
        match self.form_state.focus {
            FormField::PredictionDate => self.service.set_prediction_date(""),
            FormField::MedicationName => self.update_name(String::new()),
            FormField::MedicationType => self.service.set_medication_type(""),
            FormField::Submit => {}
        }
    }

    fn update_name(&mut self, name: String) {
        self.service.input_medication_name(name);
        self.form_state.reset_highlight();
        self.form_state.error_message = None;
    }

    fn select_highlighted(&mut self) {
        let Some(entry) = self
            .service
            .suggestions()
            .get(self.form_state.highlighted)
            .cloned()
        else {
            return;
        };

        if let Selection::Unresolved = self.service.select_medication(&entry.name) {
            self.form_state.error_message =
                Some(format!("'{}' has no catalog type; type unchanged", entry.name));
        } else {
            self.form_state.error_message = None;
        }
        self.form_state.reset_highlight();
        self.form_state.next_field();
    }

    fn submit(&mut self) {
        match self.service.submit() {
            Ok(record) => {
                self.form_state.error_message = None;
                self.form_state.history_home();
                self.form_state.status_message = Some(format!(
                    "Predicted {} units of {} for {}",
                    record.predicted_amount, record.medication_name, record.prediction_date
                ));
            }
            Err(e) => {
                self.form_state.status_message = None;
                self.form_state.error_message = Some(e.to_string());
            }
        }
    }
}

//! Prediction input form with the medication-name suggestion dropdown.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::domain::{MedicationCatalogEntry, PredictionFields, MEDICATION_TYPES};
use crate::tui::styles::PharmacyTheme;

/// Longest accepted date input (`YYYY-MM-DD`).
const DATE_INPUT_LEN: usize = 10;

/// Suggestions shown at once before the list scrolls.
const DROPDOWN_ROWS: u16 = 6;

/// Placeholder shown when no type is selected.
const TYPE_PLACEHOLDER: &str = "Select a type";

/// Focusable form elements, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    PredictionDate,
    MedicationName,
    MedicationType,
    Submit,
}

impl FormField {
    const ORDER: [FormField; 4] = [
        FormField::PredictionDate,
        FormField::MedicationName,
        FormField::MedicationType,
        FormField::Submit,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        let i = self.index();
        if i == 0 {
            Self::ORDER[Self::ORDER.len() - 1]
        } else {
            Self::ORDER[i - 1]
        }
    }
}

/// UI-only form state. Field values live in the forecast service.
#[derive(Debug, Clone)]
pub struct FormState {
    pub focus: FormField,
    /// Index of the highlighted suggestion
    pub highlighted: usize,
    pub error_message: Option<String>,
    pub status_message: Option<String>,
    /// First history row shown in the table
    pub history_offset: usize,
    /// History rows that fit in the table, as of the last draw
    pub history_rows: usize,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            focus: FormField::PredictionDate,
            highlighted: 0,
            error_message: None,
            status_message: None,
            history_offset: 0,
            history_rows: 0,
        }
    }
}

impl FormState {
    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_field(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Move the suggestion highlight down, wrapping around.
    pub fn highlight_next(&mut self, count: usize) {
        if count > 0 {
            self.highlighted = (self.highlighted + 1) % count;
        }
    }

    /// Move the suggestion highlight up, wrapping around.
    pub fn highlight_prev(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        self.highlighted = if self.highlighted == 0 {
            count - 1
        } else {
            self.highlighted - 1
        };
    }

    pub fn reset_highlight(&mut self) {
        self.highlighted = 0;
    }

    fn last_history_offset(&self, len: usize) -> usize {
        len.saturating_sub(self.history_rows.max(1))
    }

    /// Scroll the history table down by one page.
    pub fn history_page_down(&mut self, len: usize) {
        let step = self.history_rows.max(1);
        self.history_offset = (self.history_offset + step).min(self.last_history_offset(len));
    }

    /// Scroll the history table up by one page.
    pub fn history_page_up(&mut self) {
        self.history_offset = self.history_offset.saturating_sub(self.history_rows.max(1));
    }

    pub fn history_home(&mut self) {
        self.history_offset = 0;
    }

    pub fn history_end(&mut self, len: usize) {
        self.history_offset = self.last_history_offset(len);
    }
}

/// Append `c` to a date input if it keeps the `YYYY-MM-DD` shape plausible.
#[must_use]
pub fn push_date_char(value: &str, c: char) -> Option<String> {
    if !(c.is_ascii_digit() || c == '-') || value.len() >= DATE_INPUT_LEN {
        return None;
    }
    let mut next = value.to_string();
    next.push(c);
    Some(next)
}

/// Step through the type options (placeholder first, then the fixed list).
///
/// A value outside the list, such as a catalog-only type, restarts from the
/// placeholder.
#[must_use]
pub fn cycle_type(current: &str, forward: bool) -> String {
    let options: Vec<&str> = std::iter::once("")
        .chain(MEDICATION_TYPES.iter().copied())
        .collect();
    let len = options.len();
    let next = match options.iter().position(|o| *o == current) {
        Some(i) if forward => (i + 1) % len,
        Some(i) => (i + len - 1) % len,
        None if forward => 1,
        None => len - 1,
    };
    options[next].to_string()
}

/// Render the prediction form.
pub fn render_form(
    f: &mut Frame,
    area: Rect,
    state: &FormState,
    fields: &PredictionFields,
    suggestions: &[MedicationCatalogEntry],
) {
    let block = Block::default()
        .title(Span::styled(" New Prediction ", PharmacyTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(PharmacyTheme::border());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Current date
            Constraint::Length(3), // Prediction date
            Constraint::Length(3), // Medication name
            Constraint::Length(3), // Medication type
            Constraint::Length(3), // Submit
            Constraint::Min(0),    // Messages
        ])
        .split(inner);

    render_readonly(f, chunks[0], "Current Date", &fields.current_date);
    render_input(
        f,
        chunks[1],
        "Prediction Date",
        &fields.prediction_date,
        "YYYY-MM-DD",
        state.focus == FormField::PredictionDate,
    );
    render_input(
        f,
        chunks[2],
        "Medication Name",
        &fields.medication_name,
        "Search medication...",
        state.focus == FormField::MedicationName,
    );
    render_type_select(
        f,
        chunks[3],
        &fields.medication_type,
        state.focus == FormField::MedicationType,
    );
    render_submit(f, chunks[4], state.focus == FormField::Submit);
    render_messages(f, chunks[5], state);

    if state.focus == FormField::MedicationName && !suggestions.is_empty() {
        let below = chunks[2];
        let height = u16::try_from(suggestions.len())
            .unwrap_or(u16::MAX)
            .min(DROPDOWN_ROWS)
            + 2;
        let dropdown = Rect {
            x: below.x,
            y: below.y + below.height,
            width: below.width,
            height,
        }
        .intersection(f.area());
        render_suggestions(f, dropdown, suggestions, state.highlighted);
    }
}

fn field_block(label: &str, focused: bool) -> Block<'static> {
    let (border, title) = if focused {
        (PharmacyTheme::border_focused(), PharmacyTheme::focused())
    } else {
        (PharmacyTheme::border(), PharmacyTheme::text_secondary())
    };
    Block::default()
        .title(Span::styled(format!(" {label} "), title))
        .borders(Borders::ALL)
        .border_style(border)
}

fn render_readonly(f: &mut Frame, area: Rect, label: &str, value: &str) {
    let content = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(value.to_string(), PharmacyTheme::readonly()),
    ]))
    .block(field_block(label, false));
    f.render_widget(content, area);
}

fn render_input(
    f: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    hint: &'static str,
    focused: bool,
) {
    let value_display = if value.is_empty() {
        Span::styled(hint, PharmacyTheme::text_muted())
    } else {
        Span::styled(value.to_string(), PharmacyTheme::text())
    };

    let content = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        value_display,
        if focused {
            Span::styled("▌", PharmacyTheme::cursor())
        } else {
            Span::raw("")
        },
    ]))
    .block(field_block(label, focused));
    f.render_widget(content, area);
}

fn render_type_select(f: &mut Frame, area: Rect, value: &str, focused: bool) {
    let value_display = if value.is_empty() {
        Span::styled(TYPE_PLACEHOLDER, PharmacyTheme::text_muted())
    } else {
        Span::styled(value.to_string(), PharmacyTheme::text())
    };

    let mut spans = vec![Span::raw(" ")];
    if focused {
        spans.push(Span::styled("◀ ", PharmacyTheme::key_hint()));
    }
    spans.push(value_display);
    if focused {
        spans.push(Span::styled(" ▶", PharmacyTheme::key_hint()));
    }

    let content = Paragraph::new(Line::from(spans)).block(field_block("Medication Type", focused));
    f.render_widget(content, area);
}

fn render_submit(f: &mut Frame, area: Rect, focused: bool) {
    let style = if focused {
        PharmacyTheme::selected()
    } else {
        PharmacyTheme::focused()
    };
    let button = Paragraph::new(Line::from(Span::styled("  Predict  ", style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(if focused {
                    PharmacyTheme::border_focused()
                } else {
                    PharmacyTheme::border()
                }),
        );
    f.render_widget(button, area);
}

fn render_messages(f: &mut Frame, area: Rect, state: &FormState) {
    let line = if let Some(err) = &state.error_message {
        Line::from(vec![
            Span::styled("! ", PharmacyTheme::danger()),
            Span::styled(err.clone(), PharmacyTheme::danger()),
        ])
    } else if let Some(status) = &state.status_message {
        Line::from(Span::styled(status.clone(), PharmacyTheme::success()))
    } else {
        return;
    };

    f.render_widget(Paragraph::new(line).wrap(Wrap { trim: true }), area);
}

fn render_suggestions(
    f: &mut Frame,
    area: Rect,
    suggestions: &[MedicationCatalogEntry],
    highlighted: usize,
) {
    let items: Vec<ListItem> = suggestions
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(entry.name.clone(), PharmacyTheme::text()),
                Span::styled(format!("  {}", entry.medication_type), PharmacyTheme::text_muted()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(PharmacyTheme::border_focused()),
        )
        .highlight_style(PharmacyTheme::selected());

    let mut list_state = ListState::default().with_selected(Some(highlighted.min(suggestions.len() - 1)));

    f.render_widget(Clear, area);
    f.render_stateful_widget(list, area, &mut list_state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_field_navigation_wraps() {
        let mut state = FormState::default();
        assert_eq!(state.focus, FormField::PredictionDate);

        state.next_field();
        assert_eq!(state.focus, FormField::MedicationName);
        state.next_field();
        state.next_field();
        assert_eq!(state.focus, FormField::Submit);
        state.next_field();
        assert_eq!(state.focus, FormField::PredictionDate);

        state.prev_field();
        assert_eq!(state.focus, FormField::Submit);
    }

    #[test]
    fn test_highlight_wraps() {
        let mut state = FormState::default();
        state.highlight_prev(3);
        assert_eq!(state.highlighted, 2);
        state.highlight_next(3);
        assert_eq!(state.highlighted, 0);

        state.highlight_next(0);
        assert_eq!(state.highlighted, 0);
    }

    #[test]
    fn test_push_date_char() {
        assert_eq!(push_date_char("2024", '-'), Some("2024-".to_string()));
        assert_eq!(push_date_char("2024", 'x'), None);
        assert_eq!(push_date_char("2024-01-01", '1'), None);
    }

    #[test]
    fn test_cycle_type() {
        assert_eq!(cycle_type("", true), "Analgésico");
        assert_eq!(cycle_type("", false), "Anticonvulsivo");
        assert_eq!(cycle_type("Anticonvulsivo", true), "");
        assert_eq!(cycle_type("Antiinflamatorio", false), "Analgésico");
        // Catalog-only type restarts from the list
        assert_eq!(cycle_type("Antiácido", true), "Analgésico");
    }

    #[test]
    fn test_history_paging_stays_in_bounds() {
        let mut state = FormState {
            history_rows: 10,
            ..FormState::default()
        };

        state.history_page_down(32);
        assert_eq!(state.history_offset, 10);
        state.history_page_down(32);
        state.history_page_down(32);
        assert_eq!(state.history_offset, 22);

        state.history_page_up();
        assert_eq!(state.history_offset, 12);
        state.history_home();
        assert_eq!(state.history_offset, 0);
        state.history_end(32);
        assert_eq!(state.history_offset, 22);

        // A ledger that fits never scrolls
        state.history_home();
        state.history_page_down(4);
        assert_eq!(state.history_offset, 0);
    }

    #[test]
    fn test_dropdown_with_huge_suggestion_list() {
        let suggestions: Vec<MedicationCatalogEntry> = (0..=usize::from(u16::MAX))
            .map(|i| MedicationCatalogEntry::new(i.to_string(), format!("Generic {i}"), "Antiviral"))
            .collect();
        let state = FormState {
            focus: FormField::MedicationName,
            ..FormState::default()
        };

        let mut terminal = Terminal::new(TestBackend::new(60, 40)).expect("Test terminal");
        terminal
            .draw(|f| {
                let area = f.area();
                render_form(f, area, &state, &PredictionFields::default(), &suggestions);
            })
            .expect("Should draw");

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content.iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Generic 0"));
        assert!(text.contains("Generic 5"));
    }
}

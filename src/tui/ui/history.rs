//! Prediction history table, newest first.

use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::domain::PredictionRecord;
use crate::tui::styles::PharmacyTheme;

const COLUMNS: [&str; 5] = [
    "Medication",
    "Type",
    "Current Date",
    "Prediction Date",
    "Predicted Amount",
];

/// Borders plus the header row.
const CHROME_ROWS: u16 = 3;

/// Render the ledger as a table starting at row `offset`.
///
/// Returns how many records fit in `area`. The offset is clamped so the last
/// page is always full.
pub fn render_history(
    f: &mut Frame,
    area: Rect,
    records: &[PredictionRecord],
    offset: usize,
) -> usize {
    let visible = usize::from(area.height.saturating_sub(CHROME_ROWS));

    let block = Block::default()
        .title(Span::styled(
            format!(" Prediction History ({}) ", records.len()),
            PharmacyTheme::subtitle(),
        ))
        .borders(Borders::ALL)
        .border_style(PharmacyTheme::border());

    if records.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No predictions recorded yet.",
            PharmacyTheme::text_muted(),
        )))
        .block(block);
        f.render_widget(empty, area);
        return visible;
    }

    let header = Row::new(COLUMNS).style(PharmacyTheme::header());

    let rows = records.iter().map(|record| {
        Row::new(vec![
            Cell::from(record.medication_name.clone()),
            Cell::from(record.medication_type.clone()),
            Cell::from(record.current_date.clone()),
            Cell::from(record.prediction_date.clone()),
            Cell::from(record.predicted_amount.to_string()),
        ])
        .style(PharmacyTheme::text())
    });

    let widths = [
        Constraint::Percentage(22),
        Constraint::Percentage(20),
        Constraint::Percentage(18),
        Constraint::Percentage(18),
        Constraint::Percentage(22),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(1);

    let offset = offset.min(records.len().saturating_sub(visible.max(1)));
    let mut state = TableState::default().with_offset(offset);
    f.render_stateful_widget(table, area, &mut state);

    visible
}

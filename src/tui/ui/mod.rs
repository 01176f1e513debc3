//! UI module: View components for the TUI.

pub mod chart;
pub mod form;
pub mod history;

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::styles::PharmacyTheme;

pub fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", PharmacyTheme::text()),
        Span::styled("Medication Predictions", PharmacyTheme::title()),
        Span::styled(" │ ", PharmacyTheme::text_muted()),
        Span::styled("Stock forecast log", PharmacyTheme::text_secondary()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(PharmacyTheme::border()),
    );

    f.render_widget(header, area);
}

pub fn render_footer(f: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(vec![
            Span::styled("[Tab/↑↓] ", PharmacyTheme::key_hint()),
            Span::styled("Navigate ", PharmacyTheme::key_desc()),
            Span::styled("[←→] ", PharmacyTheme::key_hint()),
            Span::styled("Type ", PharmacyTheme::key_desc()),
            Span::styled("[Enter] ", PharmacyTheme::key_hint()),
            Span::styled("Select/Predict ", PharmacyTheme::key_desc()),
            Span::styled("[PgUp/PgDn] ", PharmacyTheme::key_hint()),
            Span::styled("History ", PharmacyTheme::key_desc()),
            Span::styled("[Del] ", PharmacyTheme::key_hint()),
            Span::styled("Clear ", PharmacyTheme::key_desc()),
            Span::styled("[Esc] ", PharmacyTheme::key_hint()),
            Span::styled("Quit", PharmacyTheme::key_desc()),
        ]),
        Line::from(Span::styled(
            "Predicted amounts are simulated and are not a real stock forecast.",
            PharmacyTheme::text_muted(),
        )),
    ];

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(PharmacyTheme::border());

    f.render_widget(Paragraph::new(text).block(block).wrap(Wrap { trim: true }), area);
}

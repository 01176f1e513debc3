//! Stock forecast chart for the latest prediction.

use ratatui::{
    layout::{Alignment, Rect},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::domain::ChartSeries;
use crate::tui::styles::PharmacyTheme;

/// Headroom above the highest point so the line never touches the border.
const Y_HEADROOM: f64 = 1.2;

/// Render the two-point chart, or a placeholder before any prediction.
pub fn render_chart(f: &mut Frame, area: Rect, series: Option<&ChartSeries>) {
    let Some(series) = series else {
        let block = Block::default()
            .title(Span::styled(" Stock Forecast ", PharmacyTheme::subtitle()))
            .borders(Borders::ALL)
            .border_style(PharmacyTheme::border());
        let placeholder = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Make a prediction to see the chart",
                PharmacyTheme::text_muted(),
            )),
        ])
        .alignment(Alignment::Center)
        .block(block);
        f.render_widget(placeholder, area);
        return;
    };

    let [start, end] = &series.points;
    let data = [
        (0.0, f64::from(start.quantity)),
        (1.0, f64::from(end.quantity)),
    ];
    let y_max = (f64::from(series.max_quantity()) * Y_HEADROOM).ceil();

    let block = Block::default()
        .title(Line::from(vec![
            Span::styled(" Stock Forecast ", PharmacyTheme::subtitle()),
            Span::styled(
                format!("{} → {} units ", start.quantity, end.quantity),
                PharmacyTheme::info(),
            ),
        ]))
        .borders(Borders::ALL)
        .border_style(PharmacyTheme::border());

    let dataset = Dataset::default()
        .name(series.title)
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(PharmacyTheme::chart_line())
        .data(&data);

    let x_axis = Axis::default()
        .style(PharmacyTheme::text_secondary())
        .bounds([0.0, 1.0])
        .labels(vec![
            Span::raw(start.label.clone()),
            Span::raw(end.label.clone()),
        ]);

    let y_axis = Axis::default()
        .title(Span::styled("Units", PharmacyTheme::text_secondary()))
        .style(PharmacyTheme::text_secondary())
        .bounds([0.0, y_max])
        .labels(vec![
            Span::raw("0"),
            Span::raw(format!("{:.0}", y_max / 2.0)),
            Span::raw(format!("{y_max:.0}")),
        ]);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(x_axis)
        .y_axis(y_axis);

    f.render_widget(chart, area);
}

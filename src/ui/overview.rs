//! Overview screen: what the backend stores, per exchange.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table},
    Frame,
};

use super::connection_label;
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_STORED};
use crate::app::App;
use crate::domain::{FieldKind, MaskedCredentialStatus};

/// Table cell for one field of one exchange.
fn field_cell(status: Option<&MaskedCredentialStatus>, kind: FieldKind) -> String {
    match status {
        Some(s) if s.has(kind) => s.masked(kind).unwrap_or("stored").to_string(),
        _ => "-".to_string(),
    }
}

pub fn render_overview_screen(frame: &mut Frame, area: Rect, app: &App) {
    let [summary_area, table_area] =
        Layout::vertical([Constraint::Length(4), Constraint::Min(3)]).areas(area);

    let (connection, color) = connection_label(app.state.connected);
    let refreshed = app
        .state
        .last_refresh
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "never".to_string());
    let configured = app.state.form.exchanges().len();
    let with_keys = app
        .state
        .form
        .exchanges()
        .iter()
        .filter(|e| app.state.statuses.get(*e).is_some_and(|s| s.stored_count() > 0))
        .count();

    let summary = vec![
        Line::from(vec![
            Span::styled("Backend   ", Style::default().fg(COLOR_DIM)),
            Span::styled(connection, Style::default().fg(color)),
            Span::styled(format!("  {}", app.backend().base_url()), Style::default().fg(COLOR_DIM)),
        ]),
        Line::from(vec![
            Span::styled("Refreshed ", Style::default().fg(COLOR_DIM)),
            Span::raw(refreshed),
        ]),
        Line::from(vec![
            Span::styled("Stored    ", Style::default().fg(COLOR_DIM)),
            Span::styled(
                format!("{}/{} exchanges", with_keys, configured),
                Style::default().fg(COLOR_STORED),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(summary), summary_area);

    let header = Row::new(
        std::iter::once("Exchange")
            .chain(FieldKind::ALL.iter().map(|k| k.label()))
            .collect::<Vec<_>>(),
    )
    .style(Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD));

    let rows = app.state.form.exchanges().iter().map(|exchange| {
        let status = app.state.statuses.get(exchange);
        let mut cells = vec![exchange.to_uppercase()];
        cells.extend(FieldKind::ALL.iter().map(|k| field_cell(status, *k)));
        Row::new(cells)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(" Stored credentials ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(COLOR_BORDER)),
    );
    frame.render_widget(table, table_area);
}

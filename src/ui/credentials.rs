//! Credential form screen.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::components::{
    render_input_field, render_status_indicator, InputFieldConfig, StatusIndicatorType,
};
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_INPUT_BG, COLOR_STORED};
use crate::app::App;
use crate::domain::{FieldKey, FieldKind};

/// Rows per exchange block: borders plus one row per field kind
const EXCHANGE_BLOCK_HEIGHT: u16 = FieldKind::ALL.len() as u16 + 2;

const MAX_STATUS_LINES: u16 = 8;

/// First exchange to draw so that `focused` stays visible.
pub fn visible_window(total: usize, capacity: usize, focused: usize) -> std::ops::Range<usize> {
    if capacity == 0 || total == 0 {
        return 0..0;
    }
    if total <= capacity {
        return 0..total;
    }
    let start = focused.saturating_sub(capacity - 1).min(total - capacity);
    start..start + capacity
}

pub fn render_credentials_screen(frame: &mut Frame, area: Rect, app: &App) {
    let indicator = StatusIndicatorType::from_status(
        app.state.status(),
        app.state.lifecycle.is_busy(),
        (app.tick_count / 8) as usize,
    );
    let status_lines = render_status_indicator(&indicator);
    let status_height = (status_lines.len() as u16).clamp(1, MAX_STATUS_LINES) + 2;

    let [form_area, status_area] =
        Layout::vertical([Constraint::Min(EXCHANGE_BLOCK_HEIGHT), Constraint::Length(status_height)])
            .areas(area);

    render_form(frame, form_area, app);

    let title = format!(" Status · {} ", app.state.lifecycle.label());
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(COLOR_DIM)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(
        Paragraph::new(status_lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        status_area,
    );
}

fn render_form(frame: &mut Frame, area: Rect, app: &App) {
    let exchanges = app.state.form.exchanges();
    let focused = app.focused_key();
    let focused_exchange = focused
        .as_ref()
        .and_then(|k| exchanges.iter().position(|e| *e == k.exchange))
        .unwrap_or(0);

    let capacity = (area.height / EXCHANGE_BLOCK_HEIGHT) as usize;
    let window = visible_window(exchanges.len(), capacity, focused_exchange);

    let mut y = area.y;
    for exchange in &exchanges[window] {
        let block_area = Rect {
            x: area.x,
            y,
            width: area.width,
            height: EXCHANGE_BLOCK_HEIGHT,
        };
        render_exchange_block(frame, block_area, app, exchange, focused.as_ref());
        y += EXCHANGE_BLOCK_HEIGHT;
    }
}

fn render_exchange_block(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    exchange: &str,
    focused: Option<&FieldKey>,
) {
    let has_focus = focused.is_some_and(|k| k.exchange == exchange);
    let stored = app
        .state
        .statuses
        .get(exchange)
        .map(|s| s.stored_count())
        .unwrap_or(0);

    let mut title = vec![Span::styled(
        format!(" {} ", exchange.to_uppercase()),
        Style::default()
            .fg(if has_focus { COLOR_ACCENT } else { COLOR_DIM })
            .add_modifier(Modifier::BOLD),
    )];
    if stored > 0 {
        title.push(Span::styled(
            format!("🔒 {}/{} stored ", stored, FieldKind::ALL.len()),
            Style::default().fg(COLOR_STORED),
        ));
    }

    let block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if has_focus { COLOR_ACCENT } else { COLOR_BORDER }))
        .style(Style::default().bg(COLOR_INPUT_BG));

    let lines: Vec<Line> = FieldKind::ALL
        .into_iter()
        .filter_map(|kind| {
            let key = FieldKey::new(exchange, kind);
            let field = app.state.form.field(&key)?;
            let config = InputFieldConfig::new(kind.label(), &field.value)
                .focused(focused == Some(&key))
                .password(kind != FieldKind::ApiKey)
                .placeholder(&field.placeholder)
                .credentialed(field.credentialed);
            Some(render_input_field(&config))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_window_fits_everything() {
        assert_eq!(visible_window(3, 5, 2), 0..3);
    }

    #[test]
    fn test_visible_window_follows_focus() {
        assert_eq!(visible_window(6, 2, 0), 0..2);
        assert_eq!(visible_window(6, 2, 3), 2..4);
        assert_eq!(visible_window(6, 2, 5), 4..6);
    }

    #[test]
    fn test_visible_window_without_room() {
        assert_eq!(visible_window(6, 0, 3), 0..0);
    }
}

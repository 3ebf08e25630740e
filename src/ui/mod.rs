//! UI rendering for arbkeys
//!
//! The screen is a pure projection of [`App`]: header with screen tabs and
//! connection state, the active screen, key hints, and the delete
//! confirmation dialog on top when one is pending.

pub mod components;
mod credentials;
mod overview;
pub mod theme;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Screen};
use components::{render_dialog_frame, render_tab_selector, DialogFrameConfig, TabItem};
use theme::{COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_PENDING, COLOR_SUCCESS};

pub use credentials::render_credentials_screen;
pub use overview::render_overview_screen;

/// Render the whole UI
pub fn render(frame: &mut Frame, app: &App) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, header, app);
    match app.screen {
        Screen::Credentials => render_credentials_screen(frame, body, app),
        Screen::Overview => render_overview_screen(frame, body, app),
    }
    render_key_hints(frame, footer, app);

    if let Some(pending) = &app.state.pending_delete {
        render_confirm_dialog(frame, frame.area(), &pending.prompt());
    }
}

/// Label and color for the backend connection state.
pub fn connection_label(connected: Option<bool>) -> (&'static str, ratatui::style::Color) {
    match connected {
        Some(true) => ("● Connected", COLOR_SUCCESS),
        Some(false) => ("● Disconnected", COLOR_ERROR),
        None => ("○ Connecting...", COLOR_PENDING),
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [left, right] =
        Layout::horizontal([Constraint::Min(20), Constraint::Length(28)]).areas(inner);

    let tabs = [
        TabItem::new(Screen::Credentials.title(), "F1"),
        TabItem::new(Screen::Overview.title(), "F2"),
    ];
    let selected = match app.screen {
        Screen::Credentials => 0,
        Screen::Overview => 1,
    };
    let mut title = vec![Span::styled(
        "ARBKEYS",
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
    )];
    title.extend(render_tab_selector(&tabs, selected).spans);
    frame.render_widget(Paragraph::new(Line::from(title)), left);

    let (label, color) = connection_label(app.state.connected);
    let right_lines = vec![
        Line::from(Span::styled(label, Style::default().fg(color))),
        Line::from(Span::styled(
            app.backend().base_url().to_string(),
            Style::default().fg(COLOR_DIM),
        )),
    ];
    frame.render_widget(
        Paragraph::new(right_lines).alignment(ratatui::layout::Alignment::Right),
        right,
    );
}

fn render_key_hints(frame: &mut Frame, area: Rect, app: &App) {
    let hints = if app.state.pending_delete.is_some() {
        "y/Enter confirm · n/Esc cancel"
    } else {
        match app.screen {
            Screen::Credentials => {
                "Tab/↑↓ move · Ctrl+S save · Ctrl+D delete · Ctrl+R refresh · F2 overview · Ctrl+Q quit"
            }
            Screen::Overview => "Ctrl+R refresh · F1 credentials · Ctrl+Q quit",
        }
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(hints, Style::default().fg(COLOR_DIM)))),
        area,
    );
}

fn render_confirm_dialog(frame: &mut Frame, area: Rect, prompt: &str) {
    let config = DialogFrameConfig::new("Confirm delete", 4);
    let inner = render_dialog_frame(frame, area, &config);

    let lines = vec![
        Line::from(Span::styled(
            prompt.to_string(),
            Style::default().fg(COLOR_ERROR).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[y] Delete    [n] Cancel",
            Style::default().fg(COLOR_DIM),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

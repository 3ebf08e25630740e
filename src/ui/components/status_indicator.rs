//! Status Indicator Component
//!
//! Renders the operation status region: a spinner while a request is in
//! flight, otherwise the message colored by its kind.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::domain::{OperationStatus, StatusKind};
use crate::ui::theme::{COLOR_DIM, COLOR_ERROR, COLOR_INFO, COLOR_PENDING, COLOR_SUCCESS};

/// Spinner animation frames
const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Status indicator types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusIndicatorType {
    /// Request in flight
    Spinner { message: String, frame: usize },
    Success { message: String },
    Error { message: String },
    Info { message: String },
    /// Nothing to show
    Empty,
}

impl StatusIndicatorType {
    /// Pick the indicator for a status. `busy` turns an info status into a
    /// spinner.
    pub fn from_status(status: &OperationStatus, busy: bool, frame: usize) -> Self {
        let message = status.message.clone();
        match status.kind {
            StatusKind::None if message.is_empty() => Self::Empty,
            StatusKind::Info | StatusKind::None if busy => Self::Spinner { message, frame },
            StatusKind::Info | StatusKind::None => Self::Info { message },
            StatusKind::Success => Self::Success { message },
            StatusKind::Error => Self::Error { message },
        }
    }
}

/// Get the current spinner character based on frame
pub fn get_spinner_char(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// Render a status indicator, one line per message line
pub fn render_status_indicator(indicator: &StatusIndicatorType) -> Vec<Line<'static>> {
    let (prefix, message, style) = match indicator {
        StatusIndicatorType::Empty => {
            return vec![Line::from(Span::styled(
                "Ready",
                Style::default().fg(COLOR_DIM),
            ))]
        }
        StatusIndicatorType::Spinner { message, frame } => (
            Some(format!("{} ", get_spinner_char(*frame))),
            message,
            Style::default().fg(COLOR_PENDING).add_modifier(Modifier::BOLD),
        ),
        StatusIndicatorType::Success { message } => {
            (None, message, Style::default().fg(COLOR_SUCCESS))
        }
        StatusIndicatorType::Error { message } => (None, message, Style::default().fg(COLOR_ERROR)),
        StatusIndicatorType::Info { message } => (None, message, Style::default().fg(COLOR_INFO)),
    };

    message
        .lines()
        .enumerate()
        .map(|(i, text)| {
            let mut spans = Vec::new();
            if i == 0 {
                if let Some(prefix) = &prefix {
                    spans.push(Span::styled(prefix.clone(), style));
                }
            }
            spans.push(Span::styled(text.to_string(), style));
            Line::from(spans)
        })
        .collect()
}

//! Dialog Frame Component
//!
//! A centered dialog with rounded borders. Clears whatever is underneath.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use crate::ui::theme::{COLOR_BORDER, COLOR_DIALOG_BG, COLOR_HEADER};

/// Terminals narrower than this get a near full-width dialog
const NARROW_WIDTH: u16 = 60;

/// Configuration for rendering a dialog frame
#[derive(Debug, Clone)]
pub struct DialogFrameConfig<'a> {
    /// Title displayed in the border
    pub title: &'a str,
    /// Content height (not including borders)
    pub content_height: u16,
    pub min_width: u16,
    pub max_width: u16,
}

impl<'a> DialogFrameConfig<'a> {
    pub fn new(title: &'a str, content_height: u16) -> Self {
        Self {
            title,
            content_height,
            min_width: 30,
            max_width: 64,
        }
    }

    pub fn min_width(mut self, width: u16) -> Self {
        self.min_width = width;
        self
    }

    pub fn max_width(mut self, width: u16) -> Self {
        self.max_width = width;
        self
    }
}

/// Outer rectangle of the dialog, centered in `area`.
pub fn dialog_area(area: Rect, config: &DialogFrameConfig) -> Rect {
    let available = area.width.saturating_sub(4);
    let width = if area.width < NARROW_WIDTH {
        available.min(config.max_width)
    } else {
        (area.width / 2)
            .clamp(config.min_width, config.max_width)
            .min(available)
    };
    let height = (config.content_height + 2).min(area.height);

    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

/// Render a dialog frame and return the inner content area
pub fn render_dialog_frame(frame: &mut Frame, area: Rect, config: &DialogFrameConfig) -> Rect {
    let outer = dialog_area(area, config);
    frame.render_widget(Clear, outer);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", config.title),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .style(Style::default().bg(COLOR_DIALOG_BG));

    let inner = block.inner(outer);
    frame.render_widget(block, outer);
    inner
}

// ============================================================================
// Tests
// ============================================================================

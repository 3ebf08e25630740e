//! Tab Selector Component
//!
//! Screen tabs for the header. The selected tab gets a `▶` marker; every tab
//! shows the function key that selects it.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM};

/// A single tab item in the selector
#[derive(Debug, Clone)]
pub struct TabItem<'a> {
    pub label: &'a str,
    /// Key that selects the tab, e.g. "F1"
    pub key_hint: &'a str,
}

impl<'a> TabItem<'a> {
    pub fn new(label: &'a str, key_hint: &'a str) -> Self {
        Self { label, key_hint }
    }
}

/// Render a horizontal tab selector
pub fn render_tab_selector(items: &[TabItem<'_>], selected: usize) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = vec![Span::raw("  ")];

    for (idx, item) in items.iter().enumerate() {
        if idx == selected {
            spans.push(Span::styled(
                "▶ ",
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                item.label.to_string(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(item.label.to_string(), Style::default().fg(COLOR_DIM)));
        }
        spans.push(Span::styled(
            format!(" [{}]", item.key_hint),
            Style::default().fg(COLOR_DIM),
        ));

        if idx + 1 < items.len() {
            spans.push(Span::raw("    "));
        }
    }

    Line::from(spans)
}

// ============================================================================
// Tests
// ============================================================================

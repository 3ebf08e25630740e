//! Input Field Component
//!
//! A single-row credential input: label, value or placeholder, and a marker
//! when the backend already stores a secret for the field.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::ui::theme::{COLOR_DIM, COLOR_STORED};

/// Bullet used to mask secret input
const MASK_CHAR: char = '\u{2022}';

/// Block cursor shown in the focused field
const CURSOR: char = '\u{2588}';

/// Configuration for rendering an input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    /// Label in front of the value
    pub label: &'a str,
    /// Raw value typed by the operator
    pub value: &'a str,
    /// Whether the input is currently focused
    pub focused: bool,
    /// Whether to mask the value
    pub is_password: bool,
    /// Shown while the value is empty
    pub placeholder: Option<&'a str>,
    /// The backend holds a stored secret for this field
    pub credentialed: bool,
    /// Width reserved for the label column
    pub label_width: usize,
}

impl<'a> InputFieldConfig<'a> {
    /// Create a new input field configuration
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            is_password: false,
            placeholder: None,
            credentialed: false,
            label_width: 12,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn password(mut self, is_password: bool) -> Self {
        self.is_password = is_password;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn credentialed(mut self, credentialed: bool) -> Self {
        self.credentialed = credentialed;
        self
    }

    pub fn label_width(mut self, width: usize) -> Self {
        self.label_width = width;
        self
    }

    /// Text shown in the value column, before the cursor.
    ///
    /// Masked values show one bullet per character so the raw secret never
    /// reaches the screen.
    pub fn display_value(&self) -> String {
        if self.value.is_empty() {
            return self.placeholder.unwrap_or_default().to_string();
        }
        if self.is_password {
            MASK_CHAR.to_string().repeat(self.value.chars().count())
        } else {
            self.value.to_string()
        }
    }
}

/// Render an input field as one line
pub fn render_input_field(config: &InputFieldConfig) -> Line<'static> {
    let marker = if config.focused { "▶ " } else { "  " };
    let label_style = if config.focused {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_DIM)
    };

    let pad = config.label_width.saturating_sub(config.label.width());
    let mut spans = vec![
        Span::styled(marker, Style::default().fg(Color::White)),
        Span::styled(format!("{}{} ", config.label, " ".repeat(pad)), label_style),
    ];

    let showing_placeholder = config.value.is_empty();
    let value_style = match (showing_placeholder, config.credentialed, config.focused) {
        (true, true, _) => Style::default().fg(COLOR_STORED),
        (true, false, _) => Style::default().fg(COLOR_DIM),
        (false, _, true) => Style::default().fg(Color::White),
        (false, _, false) => Style::default().fg(Color::Gray),
    };
    spans.push(Span::styled(config.display_value(), value_style));

    if config.focused {
        spans.push(Span::styled(CURSOR.to_string(), Style::default().fg(Color::White)));
    }

    Line::from(spans)
}

// ============================================================================
// Tests
// ============================================================================

//! Color theme constants for the arbkeys UI
//!
//! Minimal dark palette.

use ratatui::style::Color;

// ============================================================================
// Base
// ============================================================================

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Focused border and selected tab
pub const COLOR_ACCENT: Color = Color::White;

/// Header text
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Background for input areas
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);

/// Background for dialog boxes
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);

// ============================================================================
// Status
// ============================================================================

pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117); // green #04B575

pub const COLOR_ERROR: Color = Color::Red;

pub const COLOR_INFO: Color = Color::Rgb(0, 122, 204); // blue #007ACC

/// Busy spinner
pub const COLOR_PENDING: Color = Color::Yellow;

/// Marker on fields the backend holds a secret for
pub const COLOR_STORED: Color = Color::Cyan;

//! Reusable UI Components
//!
//! - `TabSelector` - screen tabs in the header
//! - `InputField` - one credential input row with masking and stored marker
//! - `StatusIndicator` - the operation status region
//! - `DialogFrame` - centered dialog overlay with rounded borders

mod dialog_frame;
mod input_field;
mod status_indicator;
mod tab_selector;

pub use dialog_frame::{dialog_area, render_dialog_frame, DialogFrameConfig};
pub use input_field::{render_input_field, InputFieldConfig};
pub use status_indicator::{render_status_indicator, StatusIndicatorType};
pub use tab_selector::{render_tab_selector, TabItem};

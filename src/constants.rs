//! Sizing, color, and styling constants for the picker window.

/// Side of the square hue/saturation field
pub const FIELD_SIZE: f32 = 240.0;

/// Width of the vertical value strip
pub const STRIP_WIDTH: f32 = 20.0;

/// Arrow marker size beside the value strip
pub const STRIP_MARKER: f64 = 5.0;

/// Crosshair arm length on the hue/saturation field
pub const CROSSHAIR_ARM: f64 = 7.0;

/// Raster resolution of the hue/saturation field image
pub const FIELD_RASTER_SIZE: u32 = 256;

/// Swatch height under the selection surface
pub const SWATCH_HEIGHT: f32 = 32.0;

/// Border radius for the swatch and inputs
pub const RADIUS: f32 = 4.0;

/// Gap between picker elements
pub const GAP: f32 = 8.0;

/// Padding around the whole picker
pub const PADDING: f32 = 12.0;

/// Text input width
pub const INPUT_WIDTH: f32 = 100.0;

/// Width reserved for field labels ("Unreal R:")
pub const LABEL_WIDTH: f32 = 64.0;

/// Input font size
pub const INPUT_FONT: f32 = 12.0;

/// Label font size
pub const LABEL_FONT: f32 = 12.0;

/// Vertical space around group separators
pub const SEPARATOR_MARGIN: f32 = 6.0;

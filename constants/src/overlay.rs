/// Copy panel layout in logical pixels.
pub const PANEL_PADDING: f32 = 40.0;
pub const COLUMN_MAX_WIDTH: f32 = 672.0;
pub const COLUMN_GAP: f32 = 32.0;
pub const TRAILING_SPACER_HEIGHT: f32 = 384.0;

pub const TITLE_FONT_SIZE: f32 = 36.0;
pub const LEAD_FONT_SIZE: f32 = 18.0;
pub const BODY_FONT_SIZE: f32 = 16.0;

/// White panel at half opacity.
pub const PANEL_BACKGROUND_ALPHA: f32 = 0.5;

/// Pixels scrolled per mouse-wheel line.
pub const SCROLL_LINE_HEIGHT: f32 = 21.0;

/// Distance from the top edge to the top of the tick labels, in ruler pixels.
pub const LABEL_TOP: f64 = 28.0;

/// Font size of tick labels at zoom 1.0.
pub const LABEL_FONT_SIZE: f32 = 11.0;

/// Font size of the unit caption at zoom 1.0.
pub const CAPTION_FONT_SIZE: f32 = 14.0;

/// Font size of the brand text at zoom 1.0.
pub const BRAND_FONT_SIZE: f32 = 24.0;

/// Radius of the zero mark knob at zoom 1.0.
pub const KNOB_RADIUS: f32 = 6.0;

/// Gap between the settings panel and the bottom of the screen.
pub const PANEL_MARGIN: f32 = 24.0;

/// Width of the info popover.
pub const INFO_WIDTH: f32 = 256.0;

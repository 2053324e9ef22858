//! Color constants for the ruler body and UI elements.

use eframe::egui::Color32;

// Ruler body
pub const WOOD: Color32 = Color32::from_rgb(205, 150, 90);
pub const WOOD_HIGHLIGHT: Color32 = Color32::from_rgba_premultiplied(40, 40, 40, 40);
pub const WOOD_BORDER: Color32 = Color32::from_rgb(93, 46, 12);
pub const WOOD_ACTIVE_SHADOW: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 90);
pub const WOOD_SHADOW: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 50);

// Markings
pub const TICK: Color32 = Color32::from_rgb(43, 26, 14);
pub const TICK_LABEL: Color32 = Color32::from_rgb(43, 26, 14);
pub const UNIT_CAPTION: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 102);
pub const BRAND: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 26);

// Zero mark knob and rotate handle
pub const KNOB: Color32 = Color32::from_rgb(184, 134, 11);
pub const KNOB_STROKE: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 77);
pub const KNOB_DOT: Color32 = Color32::from_rgb(220, 38, 38);
pub const ROTATE_HANDLE: Color32 = Color32::from_rgba_premultiplied(60, 30, 8, 110);

// Settings panel accents
pub const ACCENT: Color32 = Color32::from_rgb(146, 64, 14);

// Sample layout shown behind the ruler in windowed mode
pub const BACKDROP_GRID: Color32 = Color32::from_rgb(148, 163, 184);
pub const BACKDROP_CARD: Color32 = Color32::from_rgb(248, 250, 252);
pub const BACKDROP_TEXT: Color32 = Color32::from_rgb(148, 163, 184);

//! Painting of the ruler body, its markings and handles.

use crate::colors;
use crate::constants::{BRAND_FONT_SIZE, CAPTION_FONT_SIZE, KNOB_RADIUS, LABEL_FONT_SIZE, LABEL_TOP};
use eframe::egui;
use std::sync::Arc;
use vintage_ruler::transform::{RULER_HEIGHT, ROTATE_HANDLE_INSET, ROTATE_HANDLE_SIZE};
use vintage_ruler::{Placement, Position, RulerConfig, Tick, unit_caption};

pub fn to_pos2(position: Position) -> egui::Pos2 {
    egui::pos2(position.x as f32, position.y as f32)
}

pub fn from_pos2(pos: egui::Pos2) -> Position {
    Position::new(f64::from(pos.x), f64::from(pos.y))
}

/// Converts a ruler-local rectangle into a screen-space quad.
fn local_quad(placement: &Placement, min: Position, max: Position) -> Vec<egui::Pos2> {
    [
        Position::new(min.x, min.y),
        Position::new(max.x, min.y),
        Position::new(max.x, max.y),
        Position::new(min.x, max.y),
    ]
    .into_iter()
    .map(|corner| to_pos2(placement.to_screen(corner)))
    .collect()
}

/// Places a galley so that its top-left corner sits on `local`, rotated with
/// the ruler.
fn local_text(
    placement: &Placement,
    local: Position,
    galley: Arc<egui::Galley>,
    color: egui::Color32,
) -> egui::Shape {
    let pos = to_pos2(placement.to_screen(local));
    egui::epaint::TextShape::new(pos, galley, color)
        .with_angle(placement.rotation.to_radians() as f32)
        .into()
}

fn font(size: f32, zoom: f64) -> egui::FontId {
    egui::FontId::proportional(size * zoom as f32)
}

/// Draws the whole ruler: body, ticks, labels, caption, knob and handle.
pub fn draw_ruler(
    painter: &egui::Painter,
    config: &RulerConfig,
    placement: &Placement,
    ticks: &[Tick],
    active: bool,
) {
    let zoom = config.zoom as f32;
    let length = config.length;

    // Shadow, offset down-right in screen space regardless of rotation
    let shadow_offset = (if active { 10.0 } else { 5.0 }) * zoom;
    let shadow_color = if active {
        colors::WOOD_ACTIVE_SHADOW
    } else {
        colors::WOOD_SHADOW
    };
    let shadow: Vec<_> = placement
        .body_corners(length)
        .into_iter()
        .map(|corner| to_pos2(corner) + egui::vec2(shadow_offset, shadow_offset))
        .collect();
    painter.add(egui::Shape::convex_polygon(
        shadow,
        shadow_color,
        egui::Stroke::NONE,
    ));

    let body: Vec<_> = placement
        .body_corners(length)
        .into_iter()
        .map(to_pos2)
        .collect();
    painter.add(egui::Shape::convex_polygon(
        body,
        colors::WOOD,
        egui::Stroke::new(2.0 * zoom, colors::WOOD_BORDER),
    ));

    // Grain highlight on the upper half
    painter.add(egui::Shape::convex_polygon(
        local_quad(
            placement,
            Position::new(0.0, 0.0),
            Position::new(length, RULER_HEIGHT / 2.0),
        ),
        colors::WOOD_HIGHLIGHT,
        egui::Stroke::NONE,
    ));

    draw_brand(painter, config, placement);
    draw_ticks(painter, config, placement, ticks);
    draw_caption(painter, config, placement);
    draw_rotate_handle(painter, config, placement);
    draw_zero_knob(painter, placement, zoom);
}

fn draw_ticks(painter: &egui::Painter, config: &RulerConfig, placement: &Placement, ticks: &[Tick]) {
    let stroke = egui::Stroke::new((config.zoom as f32).max(1.0), colors::TICK);
    let label_font = font(LABEL_FONT_SIZE, config.zoom);

    for tick in ticks {
        let top = placement.to_screen(Position::new(tick.offset_pixels, 0.0));
        let bottom = placement.to_screen(Position::new(tick.offset_pixels, tick.weight.mark_length()));
        painter.line_segment([to_pos2(top), to_pos2(bottom)], stroke);

        let Some(text) = tick.label_text() else {
            continue;
        };

        let galley = painter.layout_no_wrap(text, label_font.clone(), colors::TICK_LABEL);
        // centered on the tick, in unzoomed ruler units
        let half_width = f64::from(galley.size().x) / 2.0 / config.zoom;
        let anchor = Position::new(tick.offset_pixels - half_width, LABEL_TOP);
        painter.add(local_text(placement, anchor, galley, colors::TICK_LABEL));
    }
}

fn draw_caption(painter: &egui::Painter, config: &RulerConfig, placement: &Placement) {
    let galley = painter.layout_no_wrap(
        unit_caption(config),
        egui::FontId::new(
            CAPTION_FONT_SIZE * config.zoom as f32,
            egui::FontFamily::Proportional,
        ),
        colors::UNIT_CAPTION,
    );
    let size = galley.size();
    let anchor = Position::new(
        config.length - 40.0 - f64::from(size.x) / config.zoom,
        RULER_HEIGHT - 8.0 - f64::from(size.y) / config.zoom,
    );
    painter.add(local_text(placement, anchor, galley, colors::UNIT_CAPTION));
}

fn draw_brand(painter: &egui::Painter, config: &RulerConfig, placement: &Placement) {
    let galley = painter.layout_no_wrap(
        "CRAFTSMAN".to_owned(),
        font(BRAND_FONT_SIZE, config.zoom),
        colors::BRAND,
    );
    let size = galley.size();
    let anchor = Position::new(
        (config.length - f64::from(size.x) / config.zoom) / 2.0,
        (RULER_HEIGHT - f64::from(size.y) / config.zoom) / 2.0,
    );
    painter.add(local_text(placement, anchor, galley, colors::BRAND));
}

fn draw_rotate_handle(painter: &egui::Painter, config: &RulerConfig, placement: &Placement) {
    let max = Position::new(
        config.length - ROTATE_HANDLE_INSET,
        RULER_HEIGHT - ROTATE_HANDLE_INSET,
    );
    let min = Position::new(max.x - ROTATE_HANDLE_SIZE, max.y - ROTATE_HANDLE_SIZE);
    painter.add(egui::Shape::convex_polygon(
        local_quad(placement, min, max),
        colors::ROTATE_HANDLE,
        egui::Stroke::new(1.0, colors::WOOD_BORDER),
    ));

    let center = placement.to_screen(Position::new(
        (min.x + max.x) / 2.0,
        (min.y + max.y) / 2.0,
    ));
    painter.circle_stroke(
        to_pos2(center),
        ROTATE_HANDLE_SIZE as f32 * 0.25 * config.zoom as f32,
        egui::Stroke::new(1.5, colors::WOOD),
    );
}

fn draw_zero_knob(painter: &egui::Painter, placement: &Placement, zoom: f32) {
    let center = to_pos2(placement.origin);
    painter.circle(
        center,
        KNOB_RADIUS * zoom,
        colors::KNOB,
        egui::Stroke::new(1.0, colors::KNOB_STROKE),
    );
    painter.circle_filled(center, KNOB_RADIUS * zoom / 2.0, colors::KNOB_DOT);
}

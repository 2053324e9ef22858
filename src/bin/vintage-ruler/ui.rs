//! UI and input handling for the Vintage Ruler application.

use crate::RulerApp;
use crate::colors;
use crate::constants::{INFO_WIDTH, PANEL_MARGIN};
use crate::hotkey::HOTKEY_LABEL;
use crate::ruler::{draw_ruler, from_pos2};
use eframe::egui;
use std::time::Duration;
use vintage_ruler::config::{
    DPI_MAX, DPI_MIN, LENGTH_MAX, LENGTH_MIN, LENGTH_STEP, ZOOM_MAX, ZOOM_MIN, ZOOM_STEP,
};
use vintage_ruler::{
    HitRegion, Interaction, Placement, PointerContext, Unit, WheelDirection, generate_ticks,
    should_ignore_mouse,
};

/// How often the global cursor is polled while the window is click-through.
const POINTER_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Whether `pos` is over one of the floating controls (panel, header, toasts).
fn over_controls(ctx: &egui::Context, pos: egui::Pos2) -> bool {
    ctx.layer_id_at(pos)
        .is_some_and(|layer| layer.order != egui::Order::Background)
}

impl RulerApp {
    /// Handles keyboard shortcuts for zoom, rotation and reset.
    pub fn handle_keyboard_input(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }

        let mut quit = false;
        ctx.input(|i| {
            if i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals) {
                self.config.zoom_by_wheel(WheelDirection::In);
            }
            if i.key_pressed(egui::Key::Minus) {
                self.config.zoom_by_wheel(WheelDirection::Out);
            }
            if i.key_pressed(egui::Key::R) && i.modifiers.is_none() {
                self.config.rotate_quarter();
            }
            if i.key_pressed(egui::Key::Num0) {
                self.config.reset_view();
            }
            if i.key_pressed(egui::Key::Escape) {
                quit = true;
            }
        });

        if quit && self.host.can_quit() {
            self.host.quit_app(ctx);
        }
    }

    /// Runs the drag/rotate/zoom gestures and paints the ruler.
    pub fn show_ruler(&mut self, ctx: &egui::Context) {
        let (pressed, released, pointer, wheel_deltas) = ctx.input(|i| {
            let wheel_deltas: Vec<f32> = i
                .events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::MouseWheel { delta, .. } => Some(delta.y),
                    _ => None,
                })
                .collect();
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.latest_pos(),
                wheel_deltas,
            )
        });

        let placement = Placement::from_config(&self.config, self.position);
        let hover = pointer
            .filter(|pos| !over_controls(ctx, *pos))
            .map(|pos| placement.hit_test(self.config.length, from_pos2(pos)))
            .unwrap_or(HitRegion::Outside);

        if pressed && let Some(pos) = pointer {
            let started = self.interaction.pointer_down(
                hover,
                from_pos2(pos),
                self.position,
                self.config.rotation,
            );
            if started {
                log::debug!("Gesture started: {:?}", self.interaction);
            }
        }

        // Moves are tracked everywhere on the window until release
        if let Some(pos) = pointer
            && let Some(update) = self.interaction.pointer_move(from_pos2(pos), self.position)
        {
            update.apply(&mut self.config, &mut self.position);
        }

        if released && self.interaction.is_active() {
            log::debug!("Gesture ended at {:?}", self.position);
            self.interaction.pointer_up();
        }

        // one zoom step per wheel event, however many arrive in a frame
        if hover != HitRegion::Outside && self.interaction.accepts_wheel() {
            self.config.zoom_by_wheel_events(wheel_deltas);
        }

        ctx.set_cursor_icon(match (self.interaction, hover) {
            (Interaction::Dragging(_), _) => egui::CursorIcon::Grabbing,
            (Interaction::Rotating(_), _) => egui::CursorIcon::AllScroll,
            (Interaction::Idle, HitRegion::RotateHandle) => egui::CursorIcon::Crosshair,
            (Interaction::Idle, HitRegion::Body) => egui::CursorIcon::Grab,
            (Interaction::Idle, HitRegion::Outside) => egui::CursorIcon::Default,
        });

        // Gestures above may have moved the ruler; paint the current state
        let placement = Placement::from_config(&self.config, self.position);
        let ticks = generate_ticks(&self.config);
        // above the backdrop, below the floating controls
        let painter =
            ctx.layer_painter(egui::LayerId::new(egui::Order::Middle, egui::Id::new("ruler")));
        draw_ruler(
            &painter,
            &self.config,
            &placement,
            &ticks,
            self.interaction.is_active(),
        );
    }

    /// Makes the window click-through whenever the pointer is not over the
    /// ruler or a control.
    pub fn update_mouse_passthrough(&mut self, ctx: &egui::Context) {
        // A click-through window gets no cursor events, so egui's pointer goes
        // stale; the host's global cursor stays current.
        let polled = self.host.global_pointer(ctx);
        let pointer = polled.or_else(|| ctx.input(|i| i.pointer.latest_pos()));

        let placement = Placement::from_config(&self.config, self.position);
        let context = pointer.map(|pos| {
            let on_controls = over_controls(ctx, pos);
            PointerContext {
                over_ruler: !on_controls
                    && placement.hit_test(self.config.length, from_pos2(pos)) != HitRegion::Outside,
                over_controls: on_controls,
                gesture_active: self.interaction.is_active(),
            }
        });

        let Some(ignore) = should_ignore_mouse(self.visible, context) else {
            return;
        };
        self.host.set_ignore_mouse_events(ctx, ignore);

        // keep frames coming so the poll notices the pointer coming back
        if ignore && polled.is_some() {
            ctx.request_repaint_after(POINTER_POLL_INTERVAL);
        }
    }

    /// Renders the floating settings panel at the bottom of the screen.
    pub fn show_settings_panel(&mut self, ctx: &egui::Context) {
        egui::Area::new(egui::Id::new("settings_panel"))
            .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -PANEL_MARGIN))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style())
                    .fill(ui.style().visuals.window_fill.gamma_multiply(0.95))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| self.show_settings_content(ui, ctx));
                    });
            });
    }

    fn show_settings_content(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        // Units section
        ui.vertical(|ui| {
            ui.small("UNITS");
            ui.horizontal(|ui| {
                for unit in Unit::ALL {
                    let label = unit.symbol().to_uppercase();
                    if ui.selectable_label(self.config.unit == unit, label).clicked() {
                        self.config.set_unit(unit);
                    }
                }
            });
        });

        ui.separator();

        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.small("ZOOM");
                ui.colored_label(
                    colors::ACCENT,
                    format!("{:.0}%", self.config.zoom * 100.0),
                );
            });
            let mut zoom = self.config.zoom;
            let slider = egui::Slider::new(&mut zoom, ZOOM_MIN..=ZOOM_MAX)
                .step_by(ZOOM_STEP)
                .show_value(false);
            if ui.add(slider).changed() {
                self.config.set_zoom(zoom);
            }
        });

        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.small("DPI");
                ui.colored_label(colors::ACCENT, format!("{}", self.config.dpi));
            });
            let mut dpi = self.config.dpi;
            let slider = egui::Slider::new(&mut dpi, DPI_MIN..=DPI_MAX)
                .step_by(1.0)
                .integer()
                .show_value(false);
            if ui.add(slider).changed() {
                self.config.set_dpi(dpi);
            }
        });

        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.small("LENGTH");
                ui.colored_label(colors::ACCENT, format!("{}", self.config.length));
            });
            let mut length = self.config.length;
            let slider = egui::Slider::new(&mut length, LENGTH_MIN..=LENGTH_MAX)
                .step_by(LENGTH_STEP)
                .show_value(false);
            if ui.add(slider).changed() {
                self.config.set_length(length);
            }
        });

        ui.separator();

        if ui.button("⟳ 90°").on_hover_text("Rotate 90° (R)").clicked() {
            self.config.rotate_quarter();
        }
        if ui
            .button("Reset")
            .on_hover_text("Reset zoom and rotation (0)")
            .clicked()
        {
            self.config.reset_view();
        }
        if self.host.can_quit()
            && ui
                .button("⏻")
                .on_hover_text("Quit Application (Esc)")
                .clicked()
        {
            self.host.quit_app(ctx);
        }
    }

    /// Renders the title badge and the info toggle along the top edge.
    pub fn show_header(&mut self, ctx: &egui::Context) {
        egui::Area::new(egui::Id::new("title_badge"))
            .anchor(egui::Align2::LEFT_TOP, egui::vec2(16.0, 16.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.strong("Vintage Ruler");
                    ui.small("PRO MEASURING TOOL");
                });
            });

        egui::Area::new(egui::Id::new("info_toggle"))
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-16.0, 16.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    if ui.selectable_label(self.show_info, "ℹ").clicked() {
                        self.show_info = !self.show_info;
                    }
                });
            });

        if !self.show_info {
            return;
        }

        egui::Area::new(egui::Id::new("info_popover"))
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-16.0, 64.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_width(INFO_WIDTH);
                    ui.strong("How to use");
                    ui.label("• Drag the ruler body to move it.");
                    ui.label("• Scroll over the ruler to zoom in/out.");
                    ui.label("• Drag the corner knob to rotate freely.");
                    ui.label("• Use the panel to change units and zoom.");
                    ui.label("• Adjust DPI for physical accuracy.");
                    ui.label(format!("• {HOTKEY_LABEL} shows or hides the ruler."));
                });
            });
    }

    /// Renders the sample layout behind the ruler.
    pub fn show_backdrop(&self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let rect = ui.max_rect();
            let painter = ui.painter();

            let columns = 12;
            let rows = 4;
            let gap = 16.0;
            let cell = egui::vec2(
                (rect.width() - gap * (columns + 1) as f32) / columns as f32,
                128.0,
            );
            for index in 0..columns * rows {
                let column = index % columns;
                let row = index / columns;
                let min = rect.min
                    + egui::vec2(
                        gap + column as f32 * (cell.x + gap),
                        gap + row as f32 * (cell.y + gap),
                    );
                let cell_rect = egui::Rect::from_min_size(min, cell);
                painter.rect_stroke(
                    cell_rect,
                    4.0,
                    egui::Stroke::new(1.0, colors::BACKDROP_GRID.gamma_multiply(0.3)),
                    egui::StrokeKind::Inside,
                );
                painter.text(
                    cell_rect.center(),
                    egui::Align2::CENTER_CENTER,
                    format!("{}", index + 1),
                    egui::FontId::proportional(12.0),
                    colors::BACKDROP_TEXT.gamma_multiply(0.3),
                );
            }

            let card = egui::Rect::from_center_size(rect.center(), egui::vec2(400.0, 300.0));
            painter.rect_filled(card, 12.0, colors::BACKDROP_CARD);
            painter.rect_stroke(
                card,
                12.0,
                egui::Stroke::new(4.0, colors::BACKDROP_GRID),
                egui::StrokeKind::Inside,
            );
            painter.text(
                card.center(),
                egui::Align2::CENTER_BOTTOM,
                "Measure This Area",
                egui::FontId::proportional(24.0),
                colors::BACKDROP_TEXT,
            );
            painter.text(
                card.center() + egui::vec2(0.0, 12.0),
                egui::Align2::CENTER_TOP,
                "Drag the vintage ruler over this box to check its dimensions.",
                egui::FontId::proportional(13.0),
                colors::BACKDROP_TEXT,
            );

            if !self.visible {
                painter.text(
                    rect.center_bottom() - egui::vec2(0.0, PANEL_MARGIN),
                    egui::Align2::CENTER_BOTTOM,
                    format!("Ruler hidden. Press {HOTKEY_LABEL} to show it."),
                    egui::FontId::proportional(13.0),
                    colors::BACKDROP_TEXT,
                );
            }
        });
    }
}

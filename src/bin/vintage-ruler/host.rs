//! Host strategies: how the ruler window behaves on the desktop.
//!
//! One implementation is chosen at startup from `--mode` and kept for the
//! lifetime of the app.

use crate::ruler::{from_pos2, to_pos2};
use clap::ValueEnum;
use device_query::{DeviceQuery, DeviceState};
use eframe::egui;
use vintage_ruler::{Position, screen_to_window};

/// Which host the app runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HostMode {
    /// Transparent, frameless, always-on-top window over the whole screen.
    Overlay,
    /// Ordinary window with a sample layout to measure.
    Windowed,
}

impl HostMode {
    pub fn into_bridge(self) -> Box<dyn HostBridge> {
        match self {
            HostMode::Overlay => Box::new(OverlayHost::new()),
            HostMode::Windowed => Box::new(WindowedHost),
        }
    }
}

/// Side effects that differ between hosts.
pub trait HostBridge {
    /// Window settings used when the native window is created.
    fn viewport(&self) -> egui::ViewportBuilder;

    /// Background clear color of the window.
    fn clear_color(&self, visuals: &egui::Visuals) -> [f32; 4];

    /// Whether the sample layout is drawn behind the ruler.
    fn shows_backdrop(&self) -> bool;

    /// Pointer position from outside the window's own event stream, in
    /// window-local points.
    ///
    /// Hosts that can make the window click-through must provide this, since
    /// such a window stops receiving cursor events.
    fn global_pointer(&self, ctx: &egui::Context) -> Option<egui::Pos2>;

    /// Makes empty parts of the window click-through (or not).
    fn set_ignore_mouse_events(&mut self, ctx: &egui::Context, ignore: bool);

    /// Called after the ruler has been shown or hidden.
    fn visibility_changed(&mut self, ctx: &egui::Context, visible: bool);

    /// Whether the settings panel offers a quit button.
    fn can_quit(&self) -> bool;

    fn quit_app(&self, ctx: &egui::Context);
}

/// Full-screen transparent overlay.
pub struct OverlayHost {
    ignoring_mouse: bool,
    device_state: DeviceState,
}

impl OverlayHost {
    pub fn new() -> Self {
        Self {
            ignoring_mouse: false,
            device_state: DeviceState::new(),
        }
    }
}

impl HostBridge for OverlayHost {
    fn viewport(&self) -> egui::ViewportBuilder {
        egui::ViewportBuilder::default()
            .with_title("Vintage Ruler")
            .with_transparent(true)
            .with_decorations(false)
            .with_resizable(false)
            .with_taskbar(false)
            .with_maximized(true)
            .with_window_level(egui::WindowLevel::AlwaysOnTop)
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        egui::Rgba::TRANSPARENT.to_array()
    }

    fn shows_backdrop(&self) -> bool {
        false
    }

    fn global_pointer(&self, ctx: &egui::Context) -> Option<egui::Pos2> {
        let (x, y) = self.device_state.get_mouse().coords;
        let (inner_rect, pixels_per_point) =
            ctx.input(|i| (i.viewport().inner_rect, i.pixels_per_point()));
        let window_origin = from_pos2(inner_rect?.min);

        // macOS reports the cursor in points already
        let scale = if cfg!(target_os = "macos") {
            1.0
        } else {
            f64::from(pixels_per_point)
        };

        let local = screen_to_window(
            Position::new(f64::from(x), f64::from(y)),
            window_origin,
            scale,
        );
        Some(to_pos2(local))
    }

    fn set_ignore_mouse_events(&mut self, ctx: &egui::Context, ignore: bool) {
        if self.ignoring_mouse == ignore {
            return;
        }
        log::debug!("Mouse passthrough: {ignore}");
        self.ignoring_mouse = ignore;
        ctx.send_viewport_cmd(egui::ViewportCommand::MousePassthrough(ignore));
    }

    fn visibility_changed(&mut self, ctx: &egui::Context, visible: bool) {
        // a hidden ruler leaves nothing to click; a shown one must take input again
        self.set_ignore_mouse_events(ctx, !visible);
        if visible {
            ctx.send_viewport_cmd(egui::ViewportCommand::WindowLevel(
                egui::WindowLevel::AlwaysOnTop,
            ));
            ctx.send_viewport_cmd(egui::ViewportCommand::Focus);
        }
    }

    fn can_quit(&self) -> bool {
        true
    }

    fn quit_app(&self, ctx: &egui::Context) {
        log::info!("Quit requested");
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }
}

/// Plain window, used for trying the ruler out.
pub struct WindowedHost;

impl HostBridge for WindowedHost {
    fn viewport(&self) -> egui::ViewportBuilder {
        egui::ViewportBuilder::default()
            .with_title("Vintage Ruler")
            .with_inner_size([1280.0, 720.0])
    }

    fn clear_color(&self, visuals: &egui::Visuals) -> [f32; 4] {
        visuals.panel_fill.to_normalized_gamma_f32()
    }

    fn shows_backdrop(&self) -> bool {
        true
    }

    fn global_pointer(&self, _ctx: &egui::Context) -> Option<egui::Pos2> {
        None
    }

    fn set_ignore_mouse_events(&mut self, _ctx: &egui::Context, _ignore: bool) {}

    fn visibility_changed(&mut self, _ctx: &egui::Context, _visible: bool) {}

    fn can_quit(&self) -> bool {
        false
    }

    fn quit_app(&self, _ctx: &egui::Context) {}
}

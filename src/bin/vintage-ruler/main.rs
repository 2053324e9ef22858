#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod colors;
mod constants;
mod host;
mod hotkey;
mod ruler;
mod ui;

use clap::{Parser, ValueEnum};
use eframe::egui;
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};
use host::{HostBridge, HostMode};
use hotkey::VisibilityHotkey;
use std::path::PathBuf;
use vintage_ruler::{ConfigError, Interaction, Position, RulerConfig, StartupConfig, Unit};

#[derive(Parser, Debug)]
#[command(version, about = "On-screen ruler for measuring anything on your display")]
struct Cli {
    /// How the ruler window is hosted.
    #[arg(long, value_enum, default_value_t = HostMode::Overlay)]
    mode: HostMode,

    /// Startup configuration file (RON). Defaults to the user config directory.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Unit to start with.
    #[arg(long, value_enum)]
    unit: Option<UnitArg>,

    /// DPI calibration to start with.
    #[arg(long)]
    dpi: Option<f64>,

    /// Ruler length in pixels to start with.
    #[arg(long)]
    length: Option<f64>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum UnitArg {
    Px,
    In,
    Cm,
    Mm,
}

impl From<UnitArg> for Unit {
    fn from(arg: UnitArg) -> Self {
        match arg {
            UnitArg::Px => Unit::Pixels,
            UnitArg::In => Unit::Inches,
            UnitArg::Cm => Unit::Centimeters,
            UnitArg::Mm => Unit::Millimeters,
        }
    }
}

impl Cli {
    /// Startup config with command line overrides applied on top.
    fn startup_config(&self) -> (StartupConfig, Option<ConfigError>) {
        let (mut startup, error) = match StartupConfig::discover(self.config.as_deref()) {
            Ok(startup) => (startup, None),
            Err(err) => {
                log::error!("{err}");
                (StartupConfig::default(), Some(err))
            }
        };

        if let Some(unit) = self.unit {
            startup.ruler.set_unit(unit.into());
        }
        if let Some(dpi) = self.dpi {
            startup.ruler.set_dpi(dpi);
        }
        if let Some(length) = self.length {
            startup.ruler.set_length(length);
        }

        (startup, error)
    }
}

/// Main application state for the Vintage Ruler.
pub struct RulerApp {
    config: RulerConfig,
    position: Position,
    interaction: Interaction,
    visible: bool,
    show_info: bool,
    host: Box<dyn HostBridge>,
    hotkey: Option<VisibilityHotkey>,
    toasts: Toasts,
}

impl RulerApp {
    fn new(
        cc: &eframe::CreationContext<'_>,
        host: Box<dyn HostBridge>,
        startup: StartupConfig,
        config_error: Option<ConfigError>,
    ) -> Self {
        let mut toasts = Toasts::new()
            .anchor(egui::Align2::RIGHT_TOP, (-10.0, 10.0))
            .direction(egui::Direction::TopDown);

        if let Some(err) = config_error {
            toasts.add(Toast {
                kind: ToastKind::Error,
                text: format!("{err}. Using defaults.").into(),
                options: ToastOptions::default().duration_in_seconds(10.0),
                ..Default::default()
            });
        }

        let hotkey = VisibilityHotkey::new(cc.egui_ctx.clone());
        if hotkey.is_none() {
            log::info!("Visibility hotkey not available - ruler stays visible");
        }

        Self {
            config: startup.ruler,
            position: startup.position,
            interaction: Interaction::Idle,
            visible: true,
            show_info: false,
            host,
            hotkey,
            toasts,
        }
    }

    /// Shows or hides the ruler and its controls.
    fn set_visible(&mut self, ctx: &egui::Context, visible: bool) {
        self.visible = visible;
        if !visible {
            // a hidden ruler cannot finish a gesture
            self.interaction.reset();
        }
        log::info!("Ruler {}", if visible { "shown" } else { "hidden" });
        self.host.visibility_changed(ctx, visible);
    }

    /// Applies hotkey presses received since the last frame.
    fn poll_hotkey(&mut self, ctx: &egui::Context) {
        let presses = self.hotkey.as_ref().map_or(0, VisibilityHotkey::poll);
        if presses % 2 == 1 {
            self.set_visible(ctx, !self.visible);
        }
    }
}

impl eframe::App for RulerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_hotkey(ctx);

        if self.host.shows_backdrop() {
            self.show_backdrop(ctx);
        }

        if self.visible {
            self.handle_keyboard_input(ctx);
            self.show_header(ctx);
            self.show_settings_panel(ctx);
            self.show_ruler(ctx);
            self.update_mouse_passthrough(ctx);
        }

        // Show toasts
        self.toasts.show(ctx);
    }

    fn clear_color(&self, visuals: &egui::Visuals) -> [f32; 4] {
        self.host.clear_color(visuals)
    }
}

fn main() -> eframe::Result {
    env_logger::init();

    let cli = Cli::parse();
    let (startup, config_error) = cli.startup_config();
    let host = cli.mode.into_bridge();
    log::info!("Starting in {:?} mode", cli.mode);

    let options = eframe::NativeOptions {
        viewport: host.viewport(),
        ..Default::default()
    };

    eframe::run_native(
        "Vintage Ruler",
        options,
        Box::new(|cc| Ok(Box::new(RulerApp::new(cc, host, startup, config_error)))),
    )
}

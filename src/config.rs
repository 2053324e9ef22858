//! Ruler configuration, the zero-mark position, and the startup config file.

use crate::error::ConfigError;
use crate::transform::{self, WheelDirection};
use crate::units::Unit;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const ZOOM_MIN: f64 = 0.5;
pub const ZOOM_MAX: f64 = 4.0;
pub const ZOOM_STEP: f64 = 0.1;

pub const DPI_MIN: f64 = 72.0;
pub const DPI_MAX: f64 = 200.0;

pub const LENGTH_MIN: f64 = 200.0;
pub const LENGTH_MAX: f64 = 2000.0;
pub const LENGTH_STEP: f64 = 50.0;

/// Orientation of the ruler body before any freehand rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Axis the ruler is closest to at the given rotation.
    pub fn from_rotation(rotation_deg: f64) -> Self {
        let quarter = (rotation_deg.rem_euclid(360.0) / 90.0).round() as i64;
        if quarter % 2 == 0 {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// Screen position of the ruler's zero mark, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Everything that drives tick layout and placement of the ruler.
///
/// `length` is always in pixels whatever `unit` is displayed. `zoom` and
/// `rotation` are applied on top of the tick layout and never change it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulerConfig {
    pub unit: Unit,
    pub dpi: f64,
    pub orientation: Orientation,
    pub length: f64,
    pub zoom: f64,
    pub rotation: f64,
}

impl Default for RulerConfig {
    fn default() -> Self {
        Self {
            unit: Unit::Pixels,
            dpi: 96.0,
            orientation: Orientation::Horizontal,
            length: 800.0,
            zoom: 1.0,
            rotation: 0.0,
        }
    }
}

impl RulerConfig {
    pub fn set_unit(&mut self, unit: Unit) {
        self.unit = unit;
    }

    /// Sets the DPI calibration, clamped and rounded to a whole number.
    pub fn set_dpi(&mut self, dpi: f64) {
        self.dpi = dpi.round().clamp(DPI_MIN, DPI_MAX);
    }

    /// Sets the ruler length, snapped to the slider step.
    pub fn set_length(&mut self, length: f64) {
        let snapped = (length / LENGTH_STEP).round() * LENGTH_STEP;
        self.length = snapped.clamp(LENGTH_MIN, LENGTH_MAX);
    }

    /// Sets the zoom, clamped and rounded to one decimal place.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = (zoom.clamp(ZOOM_MIN, ZOOM_MAX) * 10.0).round() / 10.0;
    }

    /// Sets the rotation, normalized into `[0, 360)`.
    pub fn set_rotation(&mut self, rotation: f64) {
        self.rotation = transform::normalize_degrees(rotation);
    }

    /// Applies one discrete wheel step to the zoom.
    pub fn zoom_by_wheel(&mut self, direction: WheelDirection) {
        self.zoom = transform::apply_zoom_delta(self.zoom, direction);
    }

    /// Applies every wheel event received in one frame.
    pub fn zoom_by_wheel_events<I>(&mut self, deltas: I)
    where
        I: IntoIterator<Item = f32>,
    {
        self.zoom = transform::apply_wheel_events(self.zoom, deltas);
    }

    /// Quick-rotate control: turns the ruler by 90 degrees.
    pub fn rotate_quarter(&mut self) {
        self.rotation = transform::rotate_step(self.rotation);
        self.orientation = Orientation::from_rotation(self.rotation);
    }

    /// Resets the visual transform (zoom 1.0, rotation 0).
    pub fn reset_view(&mut self) {
        self.zoom = 1.0;
        self.rotation = 0.0;
        self.orientation = Orientation::Horizontal;
    }

    /// Brings every field back into its documented range.
    ///
    /// Used on values coming from outside the settings controls, such as the
    /// startup file and command line flags.
    pub fn clamped(mut self) -> Self {
        self.set_dpi(self.dpi);
        self.set_length(self.length);
        self.set_zoom(self.zoom);
        self.set_rotation(self.rotation);
        self
    }
}

/// Read-only startup configuration, loaded from a RON file.
///
/// ```ron
/// (
///     ruler: (unit: millimeters, dpi: 110.0, length: 1200.0),
///     position: (x: 40.0, y: 80.0),
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartupConfig {
    pub ruler: RulerConfig,
    pub position: Position,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            ruler: RulerConfig::default(),
            position: Position::new(100.0, 200.0),
        }
    }
}

impl StartupConfig {
    /// Parses a startup configuration; missing fields keep their defaults.
    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        let config: StartupConfig = ron::from_str(source)?;
        Ok(Self {
            ruler: config.ruler.clamped(),
            position: config.position,
        })
    }

    /// Loads the startup configuration from `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron_str(&source)
    }

    /// Default location of the startup file (`<config dir>/vintage-ruler/config.ron`).
    pub fn default_path() -> Option<PathBuf> {
        Some(dirs::config_dir()?.join("vintage-ruler").join("config.ron"))
    }

    /// Loads from an explicit path, or from the default path when it exists.
    ///
    /// Returns the defaults when no file is found.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => {
                log::info!("Loading startup config from {}", path.display());
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }
}

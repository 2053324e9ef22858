//! Measurement and transform engine for the vintage ruler overlay.
//!
//! The library is free of any UI dependency: it turns a [`RulerConfig`] into
//! tick geometry and maps pointer gestures onto position, zoom and rotation.
//! The desktop binary draws the result with egui, and the `ruler-host` binary
//! speaks the extension messaging protocol.

pub mod config;
pub mod error;
pub mod messaging;
pub mod passthrough;
pub mod ticks;
pub mod transform;
pub mod units;

pub use config::{Orientation, Position, RulerConfig, StartupConfig};
pub use error::{ConfigError, MessagingError};
pub use passthrough::{PointerContext, screen_to_window, should_ignore_mouse};
pub use ticks::{Tick, TickWeight, generate_ticks, unit_caption};
pub use transform::{
    DragAnchor, HitRegion, Interaction, Placement, RotateAnchor, WheelDirection,
    apply_wheel_events, apply_zoom_delta, begin_drag, begin_rotate, compose_placement,
    rotate_step, update_drag, update_rotate,
};
pub use units::{Unit, pixels_per_unit, tick_step};

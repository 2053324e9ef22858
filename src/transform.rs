//! Gesture-to-transform mapping and placement of the ruler in screen space.
//!
//! All angles are in degrees and screen coordinates grow rightwards and
//! downwards, so a positive rotation turns the ruler clockwise on screen.

use crate::config::{Position, RulerConfig, ZOOM_MAX, ZOOM_MIN, ZOOM_STEP};

/// Height of the ruler body in ruler-local pixels.
pub const RULER_HEIGHT: f64 = 80.0;

/// Side of the square rotate handle in the bottom-right corner.
pub const ROTATE_HANDLE_SIZE: f64 = 24.0;

/// Gap between the rotate handle and the ruler edges.
pub const ROTATE_HANDLE_INSET: f64 = 4.0;

/// Normalizes an angle into `[0, 360)`.
pub fn normalize_degrees(angle_deg: f64) -> f64 {
    let wrapped = angle_deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Rotates a 2D point by the given angle (in degrees).
pub fn rotate_point(x: f64, y: f64, angle_deg: f64) -> (f64, f64) {
    if angle_deg == 0.0 {
        return (x, y);
    }
    let angle_rad = angle_deg.to_radians();
    let (sin, cos) = angle_rad.sin_cos();
    (x * cos - y * sin, x * sin + y * cos)
}

/// Angle of `pointer` as seen from `origin`, in degrees.
fn pointer_angle(pointer: Position, origin: Position) -> f64 {
    (pointer.y - origin.y).atan2(pointer.x - origin.x).to_degrees()
}

/// Offset between the pointer and the zero mark at the start of a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragAnchor {
    pub dx: f64,
    pub dy: f64,
}

/// Pointer angle and ruler rotation captured at the start of a rotate gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotateAnchor {
    pub start_angle_deg: f64,
    pub start_rotation: f64,
}

pub fn begin_drag(pointer: Position, current: Position) -> DragAnchor {
    DragAnchor {
        dx: pointer.x - current.x,
        dy: pointer.y - current.y,
    }
}

/// New zero-mark position for the pointer. Not clamped to the screen.
pub fn update_drag(pointer: Position, anchor: DragAnchor) -> Position {
    Position::new(pointer.x - anchor.dx, pointer.y - anchor.dy)
}

pub fn begin_rotate(pointer: Position, origin: Position, current_rotation: f64) -> RotateAnchor {
    RotateAnchor {
        start_angle_deg: pointer_angle(pointer, origin),
        start_rotation: current_rotation,
    }
}

/// New rotation for the pointer, always in `[0, 360)`.
pub fn update_rotate(pointer: Position, origin: Position, anchor: RotateAnchor) -> f64 {
    let delta = pointer_angle(pointer, origin) - anchor.start_angle_deg;
    normalize_degrees(anchor.start_rotation + delta)
}

/// Direction of a single discrete wheel event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDirection {
    In,
    Out,
}

impl WheelDirection {
    /// Maps a scroll delta to a zoom direction. Only the sign matters.
    ///
    /// Positive deltas (scrolling up in egui) zoom in. Returns `None` for a
    /// zero delta.
    pub fn from_scroll_delta(delta: f32) -> Option<Self> {
        if delta > 0.0 {
            Some(WheelDirection::In)
        } else if delta < 0.0 {
            Some(WheelDirection::Out)
        } else {
            None
        }
    }
}

/// Steps the zoom by one wheel notch.
///
/// The result is clamped to the zoom range and rounded to one decimal so that
/// long runs of steps never accumulate float drift.
pub fn apply_zoom_delta(current_zoom: f64, direction: WheelDirection) -> f64 {
    let delta = match direction {
        WheelDirection::In => ZOOM_STEP,
        WheelDirection::Out => -ZOOM_STEP,
    };
    let zoom = (current_zoom + delta).clamp(ZOOM_MIN, ZOOM_MAX);
    (zoom * 10.0).round() / 10.0
}

/// Applies one zoom step per wheel event, in delivery order.
///
/// Several notches arriving in the same frame each count. Zero deltas are
/// skipped.
pub fn apply_wheel_events<I>(current_zoom: f64, deltas: I) -> f64
where
    I: IntoIterator<Item = f32>,
{
    deltas
        .into_iter()
        .filter_map(WheelDirection::from_scroll_delta)
        .fold(current_zoom, apply_zoom_delta)
}

/// Quick-rotate: one quarter turn clockwise.
pub fn rotate_step(current_rotation: f64) -> f64 {
    normalize_degrees(current_rotation + 90.0)
}

/// Where the ruler sits on screen: `translate(origin) . scale(zoom) . rotate(rotation)`.
///
/// The pivot is the zero mark, so zooming and rotating never move it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub origin: Position,
    pub zoom: f64,
    pub rotation: f64,
}

pub fn compose_placement(position: Position, zoom: f64, rotation: f64) -> Placement {
    Placement {
        origin: position,
        zoom,
        rotation,
    }
}

impl Placement {
    pub fn from_config(config: &RulerConfig, position: Position) -> Self {
        compose_placement(position, config.zoom, config.rotation)
    }

    /// Maps a ruler-local point to screen coordinates.
    pub fn to_screen(&self, local: Position) -> Position {
        let (x, y) = rotate_point(local.x * self.zoom, local.y * self.zoom, self.rotation);
        Position::new(self.origin.x + x, self.origin.y + y)
    }

    /// Maps a screen point back into ruler-local coordinates.
    pub fn to_local(&self, screen: Position) -> Position {
        let (x, y) = rotate_point(
            screen.x - self.origin.x,
            screen.y - self.origin.y,
            -self.rotation,
        );
        Position::new(x / self.zoom, y / self.zoom)
    }

    /// Screen-space corners of the ruler body, clockwise from the zero mark.
    pub fn body_corners(&self, length: f64) -> [Position; 4] {
        [
            self.to_screen(Position::new(0.0, 0.0)),
            self.to_screen(Position::new(length, 0.0)),
            self.to_screen(Position::new(length, RULER_HEIGHT)),
            self.to_screen(Position::new(0.0, RULER_HEIGHT)),
        ]
    }

    /// Classifies a screen point against the ruler body.
    pub fn hit_test(&self, length: f64, screen: Position) -> HitRegion {
        let local = self.to_local(screen);
        if local.x < 0.0 || local.x > length || local.y < 0.0 || local.y > RULER_HEIGHT {
            return HitRegion::Outside;
        }

        let handle_max_x = length - ROTATE_HANDLE_INSET;
        let handle_max_y = RULER_HEIGHT - ROTATE_HANDLE_INSET;
        let in_handle = local.x >= handle_max_x - ROTATE_HANDLE_SIZE
            && local.x <= handle_max_x
            && local.y >= handle_max_y - ROTATE_HANDLE_SIZE
            && local.y <= handle_max_y;

        if in_handle {
            HitRegion::RotateHandle
        } else {
            HitRegion::Body
        }
    }
}

/// Part of the ruler under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitRegion {
    Outside,
    Body,
    RotateHandle,
}

/// Change produced by a pointer move during a gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureUpdate {
    Move(Position),
    Rotate(f64),
}

impl GestureUpdate {
    pub fn apply(self, config: &mut RulerConfig, position: &mut Position) {
        match self {
            GestureUpdate::Move(new_position) => *position = new_position,
            GestureUpdate::Rotate(rotation) => config.rotation = rotation,
        }
    }
}

/// Current pointer interaction. Dragging and rotating exclude each other.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    Dragging(DragAnchor),
    Rotating(RotateAnchor),
}

impl Interaction {
    /// Starts a gesture for a pointer press. Presses while a gesture is
    /// running, or outside the ruler, are ignored.
    ///
    /// Returns `true` when a gesture started.
    pub fn pointer_down(
        &mut self,
        region: HitRegion,
        pointer: Position,
        position: Position,
        rotation: f64,
    ) -> bool {
        if self.is_active() {
            return false;
        }

        *self = match region {
            HitRegion::Outside => return false,
            HitRegion::Body => Interaction::Dragging(begin_drag(pointer, position)),
            HitRegion::RotateHandle => {
                Interaction::Rotating(begin_rotate(pointer, position, rotation))
            }
        };
        true
    }

    /// Maps a pointer move onto the owned transform parameter.
    pub fn pointer_move(&self, pointer: Position, position: Position) -> Option<GestureUpdate> {
        match *self {
            Interaction::Idle => None,
            Interaction::Dragging(anchor) => Some(GestureUpdate::Move(update_drag(pointer, anchor))),
            Interaction::Rotating(anchor) => {
                Some(GestureUpdate::Rotate(update_rotate(pointer, position, anchor)))
            }
        }
    }

    /// Ends any gesture, wherever the pointer was released.
    pub fn pointer_up(&mut self) {
        *self = Interaction::Idle;
    }

    /// Forces the idle state, e.g. when the view owning the gesture goes away.
    pub fn reset(&mut self) {
        *self = Interaction::Idle;
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, Interaction::Idle)
    }

    /// Whether a wheel event may change the zoom in this mode.
    ///
    /// This is the state machine's explicit wheel decision: every mode accepts
    /// it, and the exhaustive match makes a new mode decide for itself.
    ///
    /// Zoom only writes `zoom`, while dragging writes the position and rotating
    /// writes the rotation. The pivot is the zero mark, so a zoom in the
    /// middle of either gesture leaves its anchors valid.
    pub fn accepts_wheel(&self) -> bool {
        match self {
            Interaction::Idle | Interaction::Dragging(_) | Interaction::Rotating(_) => true,
        }
    }
}

//! Click-through decision for the overlay window.
//!
//! A click-through window receives no cursor events, so while it is in that
//! state the pointer has to come from a global cursor query instead. That
//! position is in physical screen pixels and is converted here into the
//! window's logical coordinates.

use crate::config::Position;

/// Where the pointer currently is relative to the ruler and its controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerContext {
    pub over_ruler: bool,
    pub over_controls: bool,
    pub gesture_active: bool,
}

impl PointerContext {
    pub fn over_ui(&self) -> bool {
        self.over_ruler || self.over_controls || self.gesture_active
    }
}

/// Whether the window should let mouse input fall through to what is below.
///
/// `pointer` is `None` when no position is known at all; the current state is
/// then kept, which is what `None` as a result means.
pub fn should_ignore_mouse(visible: bool, pointer: Option<PointerContext>) -> Option<bool> {
    if !visible {
        return Some(true);
    }
    pointer.map(|context| !context.over_ui())
}

/// Converts a global cursor position in physical pixels into window-local
/// logical points.
///
/// `window_origin` is the top-left corner of the window's inner area in
/// logical points, as the windowing layer reports it.
pub fn screen_to_window(
    cursor_pixels: Position,
    window_origin: Position,
    pixels_per_point: f64,
) -> Position {
    let scale = if pixels_per_point > 0.0 {
        pixels_per_point
    } else {
        1.0
    };
    Position::new(
        cursor_pixels.x / scale - window_origin.x,
        cursor_pixels.y / scale - window_origin.y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const OFF_UI: PointerContext = PointerContext {
        over_ruler: false,
        over_controls: false,
        gesture_active: false,
    };

    #[test]
    fn pointer_off_ruler_lets_clicks_through() {
        assert_eq!(should_ignore_mouse(true, Some(OFF_UI)), Some(true));
    }

    #[test]
    fn pointer_returning_to_ruler_takes_input_back() {
        // first frame: pointer somewhere on the desktop
        assert_eq!(should_ignore_mouse(true, Some(OFF_UI)), Some(true));

        // a later polled position lands on the ruler body
        let back = PointerContext {
            over_ruler: true,
            ..OFF_UI
        };
        assert_eq!(should_ignore_mouse(true, Some(back)), Some(false));
    }

    #[test]
    fn controls_and_active_gestures_keep_input() {
        let on_panel = PointerContext {
            over_controls: true,
            ..OFF_UI
        };
        assert_eq!(should_ignore_mouse(true, Some(on_panel)), Some(false));

        // a fast drag can leave the body behind the pointer
        let dragging = PointerContext {
            gesture_active: true,
            ..OFF_UI
        };
        assert_eq!(should_ignore_mouse(true, Some(dragging)), Some(false));
    }

    #[test]
    fn hidden_ruler_always_passes_through() {
        let on_ruler = PointerContext {
            over_ruler: true,
            ..OFF_UI
        };
        assert_eq!(should_ignore_mouse(false, Some(on_ruler)), Some(true));
        assert_eq!(should_ignore_mouse(false, None), Some(true));
    }

    #[test]
    fn unknown_pointer_keeps_current_state() {
        assert_eq!(should_ignore_mouse(true, None), None);
    }

    #[test]
    fn global_cursor_maps_into_window_points() {
        let local = screen_to_window(Position::new(300.0, 500.0), Position::new(0.0, 0.0), 1.0);
        assert_eq!(local, Position::new(300.0, 500.0));

        // HiDPI: physical pixels are halved, then the window offset removed
        let local = screen_to_window(Position::new(600.0, 1000.0), Position::new(100.0, 50.0), 2.0);
        assert_eq!(local, Position::new(200.0, 450.0));
    }

    #[test]
    fn bogus_scale_falls_back_to_one() {
        let local = screen_to_window(Position::new(40.0, 60.0), Position::new(10.0, 10.0), 0.0);
        assert_eq!(local, Position::new(30.0, 50.0));
    }
}

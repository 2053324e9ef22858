/// Lifecycle of the injected overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No overlay root has been created yet.
    #[default]
    Uninitialized,
    Hidden,
    Visible,
}

/// The one overlay owned by a content responder.
///
/// The overlay root is created once, on first show, and afterwards only
/// flips between hidden and visible.
#[derive(Debug, Default)]
pub struct OverlaySession {
    state: SessionState,
}

impl OverlaySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == SessionState::Visible
    }

    /// Creates the overlay root. Returns `false` if it already exists.
    pub fn create(&mut self) -> bool {
        if self.state != SessionState::Uninitialized {
            return false;
        }
        log::debug!("Creating overlay root");
        self.state = SessionState::Hidden;
        true
    }

    pub fn show(&mut self) {
        self.create();
        self.state = SessionState::Visible;
    }

    /// Hides the overlay. Does nothing before it was ever created.
    pub fn hide(&mut self) {
        if self.state == SessionState::Visible {
            self.state = SessionState::Hidden;
        }
    }

    /// Flips visibility, creating the overlay on first use.
    pub fn toggle(&mut self) -> SessionState {
        if self.is_visible() {
            self.hide();
        } else {
            self.show();
        }
        log::info!("Overlay is now {:?}", self.state);
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_toggle_creates_and_shows() {
        let mut session = OverlaySession::new();
        assert_eq!(session.state(), SessionState::Uninitialized);

        assert_eq!(session.toggle(), SessionState::Visible);
        assert_eq!(session.toggle(), SessionState::Hidden);
        assert_eq!(session.toggle(), SessionState::Visible);
    }

    #[test]
    fn create_happens_once() {
        let mut session = OverlaySession::new();
        assert!(session.create());
        assert!(!session.create());
        assert_eq!(session.state(), SessionState::Hidden);

        session.show();
        assert!(!session.create());
        assert!(session.is_visible());
    }

    #[test]
    fn hide_before_create_is_a_no_op() {
        let mut session = OverlaySession::new();
        session.hide();
        assert_eq!(session.state(), SessionState::Uninitialized);
    }
}

use super::codec::{read_frame, write_message};
use super::protocol::{Request, Response};
use super::session::OverlaySession;
use crate::error::MessagingError;
use tokio::io::{AsyncRead, AsyncWrite};

/// Content side of the protocol: answers requests and owns the overlay session.
#[derive(Debug, Default)]
pub struct ContentResponder {
    session: OverlaySession,
}

impl ContentResponder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &OverlaySession {
        &self.session
    }

    pub fn handle(&mut self, request: Request) -> Response {
        match request {
            Request::Ping => Response::Pong,
            Request::ToggleRuler => {
                self.session.toggle();
                Response::Success
            }
        }
    }

    /// Answers frames from `reader` until the other side closes it.
    ///
    /// Frames that do not decode to a known request get an error response and
    /// the loop keeps going.
    pub async fn serve<R, W>(&mut self, reader: &mut R, writer: &mut W) -> Result<(), MessagingError>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        while let Some(payload) = read_frame(reader).await? {
            let response = match serde_json::from_slice::<Request>(&payload) {
                Ok(request) => {
                    log::debug!("Message received: {request:?}");
                    self.handle(request)
                }
                Err(err) => {
                    log::warn!("Rejecting malformed request: {err}");
                    Response::Error {
                        message: err.to_string(),
                    }
                }
            };
            write_message(writer, &response).await?;
        }

        log::debug!("Dispatcher closed the channel");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messaging::SessionState;

    #[test]
    fn ping_does_not_touch_session() {
        let mut responder = ContentResponder::new();
        assert_eq!(responder.handle(Request::Ping), Response::Pong);
        assert_eq!(responder.session().state(), SessionState::Uninitialized);
    }

    #[test]
    fn toggle_flips_visibility() {
        let mut responder = ContentResponder::new();
        assert_eq!(responder.handle(Request::ToggleRuler), Response::Success);
        assert!(responder.session().is_visible());
        assert_eq!(responder.handle(Request::ToggleRuler), Response::Success);
        assert_eq!(responder.session().state(), SessionState::Hidden);
    }
}

use super::protocol::{Request, Response};
use crate::error::MessagingError;

/// Something the dispatcher can talk to: a tab, a child process, a pipe.
#[allow(async_fn_in_trait)]
pub trait ContentTarget {
    /// Sends one request and waits for its response.
    async fn send(&mut self, request: Request) -> Result<Response, MessagingError>;

    /// Attaches a fresh content responder to the target.
    async fn inject(&mut self) -> Result<(), MessagingError>;
}

/// Background side of the protocol.
#[derive(Debug)]
pub struct Dispatcher<T> {
    target: T,
}

impl<T: ContentTarget> Dispatcher<T> {
    pub fn new(target: T) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn into_target(self) -> T {
        self.target
    }

    /// Toggles the overlay, injecting the responder first if it does not
    /// answer a ping.
    ///
    /// Failures are logged and otherwise swallowed: the action is triggered by
    /// hand and is simply retried by the user. Returns the responder's answer
    /// on success.
    pub async fn toggle_ruler(&mut self) -> Option<Response> {
        if let Err(err) = self.ensure_responder().await {
            log::error!("Failed to inject content responder: {err}");
            return None;
        }

        match self.target.send(Request::ToggleRuler).await {
            Ok(response) => {
                log::info!("Response from content responder: {response:?}");
                Some(response)
            }
            Err(err) => {
                log::error!("Error sending toggle-ruler: {err}");
                None
            }
        }
    }

    async fn ensure_responder(&mut self) -> Result<(), MessagingError> {
        match self.target.send(Request::Ping).await {
            Ok(Response::Pong) => return Ok(()),
            Ok(other) => log::warn!("Unexpected ping response: {other:?}"),
            Err(err) => log::debug!("Ping failed, injecting responder: {err}"),
        }
        self.target.inject().await
    }
}

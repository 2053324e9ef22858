use tokio::io::{DuplexStream, duplex, split};
use tokio::task::JoinHandle;
use vintage_ruler::MessagingError;
use vintage_ruler::messaging::{
    ContentResponder, ContentTarget, Dispatcher, Request, Response, SessionState, read_message,
    write_frame, write_message,
};

/// In-memory target whose responder runs on a tokio task.
#[derive(Default)]
struct DuplexTarget {
    stream: Option<DuplexStream>,
    responder: Option<JoinHandle<ContentResponder>>,
    injections: usize,
    sent: Vec<Request>,
    refuse_injection: bool,
}

impl DuplexTarget {
    /// Closes the channel and returns the responder once it has drained.
    async fn shutdown(&mut self) -> ContentResponder {
        self.stream = None;
        self.responder
            .take()
            .expect("responder was injected")
            .await
            .expect("responder task panicked")
    }
}

impl ContentTarget for DuplexTarget {
    async fn send(&mut self, request: Request) -> Result<Response, MessagingError> {
        self.sent.push(request);
        let stream = self.stream.as_mut().ok_or(MessagingError::NotConnected)?;
        write_message(stream, &request).await?;
        read_message(stream).await?.ok_or(MessagingError::Closed)
    }

    async fn inject(&mut self) -> Result<(), MessagingError> {
        if self.refuse_injection {
            return Err(std::io::Error::other("tab is not injectable").into());
        }

        let (client, server) = duplex(4096);
        self.responder = Some(tokio::spawn(async move {
            let (mut reader, mut writer) = split(server);
            let mut responder = ContentResponder::new();
            responder
                .serve(&mut reader, &mut writer)
                .await
                .expect("serve loop failed");
            responder
        }));
        self.stream = Some(client);
        self.injections += 1;
        Ok(())
    }
}

#[tokio::test]
async fn first_toggle_injects_then_retries() {
    let mut dispatcher = Dispatcher::new(DuplexTarget::default());

    assert_eq!(dispatcher.toggle_ruler().await, Some(Response::Success));
    assert_eq!(dispatcher.target().injections, 1);
    assert_eq!(
        dispatcher.target().sent,
        vec![Request::Ping, Request::ToggleRuler]
    );
}

#[tokio::test]
async fn live_responder_is_not_injected_again() {
    let mut dispatcher = Dispatcher::new(DuplexTarget::default());

    dispatcher.toggle_ruler().await;
    dispatcher.toggle_ruler().await;
    assert_eq!(dispatcher.target().injections, 1);

    let mut target = dispatcher.into_target();
    let responder = target.shutdown().await;
    assert_eq!(responder.session().state(), SessionState::Hidden);
}

#[tokio::test]
async fn failed_injection_is_silent() {
    let mut dispatcher = Dispatcher::new(DuplexTarget {
        refuse_injection: true,
        ..DuplexTarget::default()
    });

    assert_eq!(dispatcher.toggle_ruler().await, None);
    // never retried toggle-ruler without a responder
    assert_eq!(dispatcher.target().sent, vec![Request::Ping]);
}

#[tokio::test]
async fn malformed_request_gets_error_and_loop_continues() {
    let (mut client, server) = duplex(4096);
    let handle = tokio::spawn(async move {
        let (mut reader, mut writer) = split(server);
        let mut responder = ContentResponder::new();
        responder.serve(&mut reader, &mut writer).await.unwrap();
        responder
    });

    write_frame(&mut client, br#"{"action":"measure"}"#)
        .await
        .unwrap();
    let response: Response = read_message(&mut client).await.unwrap().unwrap();
    assert!(matches!(response, Response::Error { .. }));

    write_message(&mut client, &Request::ToggleRuler)
        .await
        .unwrap();
    let response: Response = read_message(&mut client).await.unwrap().unwrap();
    assert_eq!(response, Response::Success);

    drop(client);
    let responder = handle.await.unwrap();
    assert!(responder.session().is_visible());
}

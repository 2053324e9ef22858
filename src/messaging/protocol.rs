use serde::{Deserialize, Serialize};

/// Request sent by the background dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum Request {
    /// Liveness check; answered with [`Response::Pong`].
    Ping,
    /// Flips overlay visibility; answered with [`Response::Success`].
    ToggleRuler,
}

/// Response sent back by the content responder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Response {
    Pong,
    Success,
    Error { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_use_action_field() {
        assert_eq!(
            serde_json::to_string(&Request::Ping).unwrap(),
            r#"{"action":"ping"}"#
        );
        assert_eq!(
            serde_json::to_string(&Request::ToggleRuler).unwrap(),
            r#"{"action":"toggle-ruler"}"#
        );

        let parsed: Request = serde_json::from_str(r#"{"action":"toggle-ruler"}"#).unwrap();
        assert_eq!(parsed, Request::ToggleRuler);
    }

    #[test]
    fn responses_use_status_field() {
        assert_eq!(
            serde_json::to_string(&Response::Pong).unwrap(),
            r#"{"status":"pong"}"#
        );
        assert_eq!(
            serde_json::to_string(&Response::Success).unwrap(),
            r#"{"status":"success"}"#
        );
    }

    #[test]
    fn unknown_action_is_rejected() {
        assert!(serde_json::from_str::<Request>(r#"{"action":"measure"}"#).is_err());
    }
}

//! Extension messaging: the `ping` / `toggle-ruler` protocol spoken between the
//! background dispatcher and the overlay's content responder.
//!
//! Messages travel as native-messaging frames: a 4-byte native-endian length
//! followed by that many bytes of UTF-8 JSON.

mod codec;
mod dispatcher;
mod protocol;
mod responder;
mod session;

pub use codec::{MAX_FRAME_LEN, read_frame, read_message, write_frame, write_message};
pub use dispatcher::{ContentTarget, Dispatcher};
pub use protocol::{Request, Response};
pub use responder::ContentResponder;
pub use session::{OverlaySession, SessionState};

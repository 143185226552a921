//! Wire message types for the feed
//!
//! Two layers: the Socket.IO envelope (`envelope`) and the typed payloads it
//! carries (`update`).

pub mod envelope;
pub mod update;

pub use envelope::{Envelope, UpdateKind, decode, encode};
pub use update::{Update, decode_update, unmarshal};

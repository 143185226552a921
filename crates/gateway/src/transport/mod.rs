//! Transport abstraction layer
//!
//! The update loop only needs a source of complete frames. `FrameSource` is
//! that seam: the WebSocket client implements it for the live feed and the
//! channel transport implements it for tests and replays.

pub mod channel;
pub mod websocket;

pub use channel::{ChannelTransport, FrameSender};
pub use websocket::WsTransport;

use crate::error::TransportError;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::watch;

/// Cloneable handle that closes a transport from another task.
///
/// A read pending in `next_frame` wakes up and returns
/// [`TransportError::Closed`].
#[derive(Clone)]
pub struct CloseHandle {
    tx: Arc<watch::Sender<bool>>,
}

impl CloseHandle {
    pub(crate) fn new() -> (Self, watch::Receiver<bool>) {
        let (tx, rx) = watch::channel(false);
        (Self { tx: Arc::new(tx) }, rx)
    }

    pub fn close(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_closed(&self) -> bool {
        *self.tx.borrow()
    }
}

/// A connected, full-duplex channel that yields complete frames
#[async_trait]
pub trait FrameSource: Send {
    /// Wait for the next frame.
    ///
    /// Returns [`TransportError::Closed`] once the connection has ended;
    /// every later call returns it too.
    async fn next_frame(&mut self) -> Result<Vec<u8>, TransportError>;

    /// Close the connection. Closing twice is not an error.
    async fn close(&mut self) -> Result<(), TransportError>;

    /// Handle for closing this transport while a read is pending
    fn close_handle(&self) -> CloseHandle;
}

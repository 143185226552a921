//! Tokio channel-based transport for in-process use
//!
//! Stands in for the socket in tests and replays: frames (or injected
//! errors) pushed through a `FrameSender` come out of `next_frame` in order.

use crate::error::TransportError;
use crate::transport::{CloseHandle, FrameSource};
use async_trait::async_trait;
use tokio::sync::{mpsc, watch};

type Item = Result<Vec<u8>, TransportError>;

/// Sending half of a channel transport
#[derive(Clone)]
pub struct FrameSender {
    tx: mpsc::Sender<Item>,
}

impl FrameSender {
    /// Queue a raw frame
    pub async fn send(&self, frame: impl Into<Vec<u8>>) -> Result<(), TransportError> {
        self.tx
            .send(Ok(frame.into()))
            .await
            .map_err(|_| TransportError::Closed)
    }

    /// Queue a text frame
    pub async fn send_text(&self, text: &str) -> Result<(), TransportError> {
        self.send(text.as_bytes()).await
    }

    /// Make the receiving side fail with the given error on its next read
    pub async fn fail(&self, error: TransportError) -> Result<(), TransportError> {
        self.tx
            .send(Err(error))
            .await
            .map_err(|_| TransportError::Closed)
    }
}

/// Receiving half of a channel transport.
///
/// Reports [`TransportError::Closed`] once every `FrameSender` has been
/// dropped and the queue is drained, or after `close`. Frames still queued
/// when the close handle fires are discarded.
pub struct ChannelTransport {
    rx: mpsc::Receiver<Item>,
    handle: CloseHandle,
    shutdown: watch::Receiver<bool>,
    closed: bool,
}

impl ChannelTransport {
    /// Create a sender/transport pair with the given queue capacity
    pub fn pair(capacity: usize) -> (FrameSender, Self) {
        let (tx, rx) = mpsc::channel(capacity);
        let (handle, shutdown) = CloseHandle::new();
        let transport = Self {
            rx,
            handle,
            shutdown,
            closed: false,
        };
        (FrameSender { tx }, transport)
    }

    fn mark_closed(&mut self) {
        self.closed = true;
        self.rx.close();
    }
}

#[async_trait]
impl FrameSource for ChannelTransport {
    async fn next_frame(&mut self) -> Result<Vec<u8>, TransportError> {
        if self.closed {
            return Err(TransportError::Closed);
        }
        if *self.shutdown.borrow() {
            self.mark_closed();
            return Err(TransportError::Closed);
        }

        let next = tokio::select! {
            item = self.rx.recv() => Some(item),
            _ = self.shutdown.changed() => None,
        };

        match next {
            Some(Some(item)) => item,
            Some(None) => {
                self.closed = true;
                Err(TransportError::Closed)
            }
            None => {
                self.mark_closed();
                Err(TransportError::Closed)
            }
        }
    }

    async fn close(&mut self) -> Result<(), TransportError> {
        self.handle.close();
        self.mark_closed();
        Ok(())
    }

    fn close_handle(&self) -> CloseHandle {
        self.handle.clone()
    }
}

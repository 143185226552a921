//! Error types for the gateway crate

use thiserror::Error;

use crate::messages::UpdateKind;

/// Frame decoding errors. Both are recoverable: the frame is skipped.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Envelope did not match any known update shape
    #[error("Unrecognized frame")]
    UnrecognizedFrame,

    /// Envelope matched but the JSON payload did not
    #[error("Failed to parse {kind} payload: {source}")]
    Parse {
        kind: UpdateKind,
        #[source]
        source: serde_json::Error,
    },
}

/// Transport-level errors
#[derive(Error, Debug)]
pub enum TransportError {
    /// Connection terminated, either by the peer or by a local close
    #[error("Transport closed")]
    Closed,

    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("Send failed: {0}")]
    Send(String),
}

impl TransportError {
    /// Whether this error means the connection has ended normally
    pub fn is_closed(&self) -> bool {
        use tokio_tungstenite::tungstenite::Error as WsError;

        matches!(
            self,
            TransportError::Closed
                | TransportError::WebSocket(WsError::ConnectionClosed | WsError::AlreadyClosed)
        )
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid feed URL: {0}")]
    InvalidUrl(String),

    #[error("No session cookie configured")]
    MissingCookie,
}

/// Errors that stop the client: a bad configuration or a failed transport.
///
/// Decode errors never get here; the update loop logs and skips them.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

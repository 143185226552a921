use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Connection settings for the feed client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Socket.IO WebSocket endpoint
    #[serde(default = "default_url")]
    pub url: String,
    /// Session cookie sent with the handshake, as a raw `Cookie` header value
    #[serde(default)]
    pub cookie: String,
    /// Engine.IO ping interval in milliseconds; 0 disables pings
    #[serde(default = "default_heartbeat_interval")]
    pub heartbeat_interval_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            url: default_url(),
            cookie: String::new(),
            heartbeat_interval_ms: default_heartbeat_interval(),
        }
    }
}

impl ClientConfig {
    pub fn heartbeat_interval(&self) -> Option<Duration> {
        (self.heartbeat_interval_ms > 0).then(|| Duration::from_millis(self.heartbeat_interval_ms))
    }
}

fn default_url() -> String {
    "wss://blaseball.com/socket.io/?EIO=3&transport=websocket".to_string()
}

fn default_heartbeat_interval() -> u64 {
    25_000
}

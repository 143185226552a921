//! WebSocket transport for the live feed
//!
//! Connects to the Socket.IO endpoint with the session cookie and yields text
//! frames unchanged. Engine.IO keeps the session alive with client pings
//! (packet `2`), sent here from a background task on a fixed interval.

use async_trait::async_trait;
use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::handshake::client::Response as HandshakeResponse;
use tokio_tungstenite::tungstenite::http::{HeaderValue, header::COOKIE};
use tokio_tungstenite::tungstenite::{self, Message};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

use crate::config::ClientConfig;
use crate::error::TransportError;
use crate::transport::{CloseHandle, FrameSource};

/// Engine.IO ping packet
const PING_PACKET: &str = "2";

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;
type WsSink = SplitSink<WsStream, Message>;

/// WebSocket client for the Blaseball feed
pub struct WsTransport {
    read: SplitStream<WsStream>,
    write: Arc<Mutex<WsSink>>,
    handle: CloseHandle,
    shutdown: watch::Receiver<bool>,
    heartbeat: Option<JoinHandle<()>>,
    closed: bool,
}

impl WsTransport {
    /// Open the socket, sending the configured session cookie
    pub async fn connect(config: &ClientConfig) -> Result<Self, TransportError> {
        let mut request = config.url.as_str().into_client_request()?;
        if !config.cookie.is_empty() {
            let cookie = HeaderValue::from_str(&config.cookie)
                .map_err(|e| TransportError::Connection(format!("Invalid cookie header: {}", e)))?;
            request.headers_mut().insert(COOKIE, cookie);
        }

        let (stream, response) = match connect_async(request).await {
            Ok(connected) => connected,
            Err(tungstenite::Error::Http(response)) => {
                let reason = rejection_reason(&response);
                log::error!("Handshake rejected: {}", reason);
                return Err(TransportError::Connection(format!(
                    "handshake rejected: {}",
                    reason
                )));
            }
            Err(e) => return Err(e.into()),
        };
        log::info!("Connected to {} (HTTP {})", config.url, response.status());

        let (write, read) = stream.split();
        let write = Arc::new(Mutex::new(write));
        let (handle, shutdown) = CloseHandle::new();

        let heartbeat = config.heartbeat_interval().map(|period| {
            log::debug!("Sending Engine.IO pings every {:?}", period);
            spawn_heartbeat(Arc::clone(&write), shutdown.clone(), period)
        });

        Ok(Self {
            read,
            write,
            handle,
            shutdown,
            heartbeat,
            closed: false,
        })
    }

    fn mark_closed(&mut self) {
        self.closed = true;
        if let Some(heartbeat) = self.heartbeat.take() {
            heartbeat.abort();
        }
    }

    /// Best-effort close frame; the peer may already be gone
    async fn send_close_frame(&self) {
        let mut write = self.write.lock().await;
        if let Err(e) = write.send(Message::Close(None)).await {
            log::debug!("Close frame not sent: {}", e);
        }
    }
}

#[async_trait]
impl FrameSource for WsTransport {
    async fn next_frame(&mut self) -> Result<Vec<u8>, TransportError> {
        loop {
            if self.closed {
                return Err(TransportError::Closed);
            }
            if *self.shutdown.borrow() {
                self.mark_closed();
                self.send_close_frame().await;
                return Err(TransportError::Closed);
            }

            let next = tokio::select! {
                msg = self.read.next() => Some(msg),
                _ = self.shutdown.changed() => None,
            };
            let Some(msg) = next else { continue };

            match msg {
                Some(Ok(Message::Text(text))) => return Ok(text.as_str().as_bytes().to_vec()),
                Some(Ok(Message::Binary(data))) => {
                    log::debug!("Ignoring binary frame ({} bytes)", data.len());
                }
                Some(Ok(Message::Close(frame))) => {
                    log::info!("Server closed the connection: {:?}", frame);
                    self.mark_closed();
                    return Err(TransportError::Closed);
                }
                // Ping/pong replies are handled by tungstenite
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    self.mark_closed();
                    let err = TransportError::from(e);
                    return if err.is_closed() {
                        Err(TransportError::Closed)
                    } else {
                        Err(err)
                    };
                }
                None => {
                    log::info!("WebSocket stream ended");
                    self.mark_closed();
                    return Err(TransportError::Closed);
                }
            }
        }
    }

    async fn close(&mut self) -> Result<(), TransportError> {
        self.handle.close();
        if !self.closed {
            self.mark_closed();
            self.send_close_frame().await;
        }
        Ok(())
    }

    fn close_handle(&self) -> CloseHandle {
        self.handle.clone()
    }
}

impl Drop for WsTransport {
    fn drop(&mut self) {
        if let Some(heartbeat) = self.heartbeat.take() {
            heartbeat.abort();
        }
    }
}

/// Status line plus the response body, which says why the cookie was refused
fn rejection_reason(response: &HandshakeResponse) -> String {
    match response.body().as_deref().filter(|body| !body.is_empty()) {
        Some(body) => format!(
            "HTTP {}: {}",
            response.status(),
            String::from_utf8_lossy(body).trim()
        ),
        None => format!("HTTP {}", response.status()),
    }
}

fn spawn_heartbeat(
    write: Arc<Mutex<WsSink>>,
    mut shutdown: watch::Receiver<bool>,
    period: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        // First tick completes immediately
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let mut sink = write.lock().await;
                    if let Err(e) = sink.send(Message::Text(PING_PACKET.into())).await {
                        log::debug!("Heartbeat stopped: {}", e);
                        break;
                    }
                    log::trace!("Sent Engine.IO ping");
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }
    })
}

//! Blaseball Gateway
//!
//! Feed layer for the Blaseball client. Provides:
//! - Envelope decoding and payload unmarshaling for Socket.IO event frames
//! - Transport abstraction (WebSocket client, tokio channels for tests)
//! - The update loop that routes decoded updates to the entity store or an
//!   observer
//!
//! ## Architecture
//!
//! ```text
//! blaseball.com (Socket.IO over WebSocket)
//!         │ 42["leagueDataUpdate",{...}]
//!         │ 42["gameDataUpdate",{...}]
//!    ┌────▼────┐
//!    │Transport│  FrameSource: WsTransport / ChannelTransport
//!    └────┬────┘
//!    ┌────▼────┐
//!    │Envelope │  decode: 42[ + event name + , ... ]
//!    └────┬────┘
//!    ┌────▼────┐
//!    │Unmarshal│  Update::League | Update::Game
//!    └────┬────┘
//!    ┌────┴─────────────┐
//!    ▼                  ▼
//! EntityStore      GameObserver
//! ```

pub mod config;
pub mod error;
pub mod messages;
pub mod transport;
pub mod update_loop;

// Re-export commonly used types
pub use config::{
    COOKIE_ENV, ClientConfig, URL_ENV, load_config, load_config_from_str, load_default_config,
};
pub use error::{ConfigError, DecodeError, GatewayError, TransportError};
pub use messages::{Envelope, Update, UpdateKind, decode, decode_update, encode, unmarshal};
pub use transport::{ChannelTransport, CloseHandle, FrameSender, FrameSource, WsTransport};
pub use update_loop::{GameObserver, LoopState, LoopStats, Step, UpdateLoop};

//! Blaseball Runner - feed client process
//!
//! Wires the gateway and the entity store into a running client:
//!
//! - **CLI**: argument parsing for the `blaseball` binary
//! - **Client**: configuration resolution, connection, update loop task
//! - **Presenter**: log output for game updates and store contents
//!
//! ## Architecture
//!
//! ```text
//!   main ── signal ──► CloseHandle
//!    │                     │ close
//!    ▼                     ▼
//! FeedClient ──spawn──► UpdateLoop ◄── WsTransport
//!    │                     │
//!    │ store()             ├──► EntityStore (merge)
//!    ▼                     └──► GameSummaryLogger
//! EntityStore readers
//! ```

pub mod cli;
pub mod client;
pub mod presenter;

pub use cli::{CliArgs, CliError, Command, USAGE, parse_args};
pub use client::{ClientError, FeedClient, resolve_config, resolve_config_with};
pub use presenter::{GameSummaryLogger, log_store_summary, summary_line};

//! Client configuration
//!
//! JSON file with an embedded default; the URL and session cookie can be
//! overridden from the environment or the command line.

mod loader;
mod types;

pub use loader::{COOKIE_ENV, URL_ENV, load_config, load_config_from_str, load_default_config};
pub use types::ClientConfig;

//! Feed client - ties transport, store and update loop together
//!
//! The update loop runs on its own tokio task because it blocks on socket
//! reads indefinitely. The store is shared with the caller through an `Arc`.

use blaseball_gateway::{
    ClientConfig, CloseHandle, ConfigError, FrameSource, GameObserver, GatewayError, LoopStats,
    TransportError, UpdateLoop, WsTransport, load_config, load_default_config,
};
use blaseball_store::EntityStore;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;

use crate::cli::CliArgs;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("Update loop task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Build the effective configuration.
///
/// Precedence: command line > environment > config file > embedded default.
pub fn resolve_config(args: &CliArgs) -> Result<ClientConfig, ConfigError> {
    let mut config = base_config(args)?;
    config.apply_env();
    finish_config(config, args)
}

/// `resolve_config` with the environment values passed in
pub fn resolve_config_with(
    args: &CliArgs,
    env_url: Option<String>,
    env_cookie: Option<String>,
) -> Result<ClientConfig, ConfigError> {
    let mut config = base_config(args)?;
    config.apply_overrides(env_url, env_cookie);
    finish_config(config, args)
}

fn base_config(args: &CliArgs) -> Result<ClientConfig, ConfigError> {
    match &args.config_path {
        Some(path) => {
            log::info!("Loading configuration from: {}", path);
            load_config(path)
        }
        None => load_default_config(),
    }
}

fn finish_config(mut config: ClientConfig, args: &CliArgs) -> Result<ClientConfig, ConfigError> {
    config.apply_overrides(args.url.clone(), args.cookie.clone());
    config.validate()?;
    Ok(config)
}

/// A running feed: the update loop task plus the shared store
pub struct FeedClient {
    store: Arc<EntityStore>,
    close: CloseHandle,
    task: JoinHandle<Result<LoopStats, TransportError>>,
}

impl FeedClient {
    /// Connect to the live feed and start the update loop.
    ///
    /// The configuration is validated first; nothing is dialled without a
    /// ws/wss URL and a session cookie.
    pub async fn connect<O>(config: &ClientConfig, observer: O) -> Result<Self, ClientError>
    where
        O: GameObserver + 'static,
    {
        config.validate().map_err(GatewayError::from)?;

        log::info!("Connecting to {}", config.url);
        let transport = WsTransport::connect(config)
            .await
            .map_err(GatewayError::from)?;

        Ok(Self::spawn(transport, observer))
    }

    /// Start the update loop over an already connected transport
    pub fn spawn<T, O>(transport: T, observer: O) -> Self
    where
        T: FrameSource + 'static,
        O: GameObserver + 'static,
    {
        let store = Arc::new(EntityStore::new());
        let close = transport.close_handle();
        let update_loop = UpdateLoop::new(transport, Arc::clone(&store), observer);
        let task = tokio::spawn(update_loop.run());

        Self { store, close, task }
    }

    /// Shared handle to the entity store
    pub fn store(&self) -> Arc<EntityStore> {
        Arc::clone(&self.store)
    }

    /// Handle that closes the transport from another task
    pub fn close_handle(&self) -> CloseHandle {
        self.close.clone()
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the update loop to end
    pub async fn join(self) -> Result<LoopStats, ClientError> {
        let stats = self.task.await?.map_err(GatewayError::from)?;
        Ok(stats)
    }

    /// Close the transport and wait for the loop to stop
    pub async fn shutdown(self) -> Result<LoopStats, ClientError> {
        self.close.close();
        self.join().await
    }
}

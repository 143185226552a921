use blaseball_runner::{
    Command, FeedClient, GameSummaryLogger, USAGE, log_store_summary, parse_args, resolve_config,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("blaseball=info"))
        .init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(Command::Run(args)) => args,
        Ok(Command::Help) => {
            eprintln!("{}", USAGE);
            return Ok(());
        }
        Err(e) => {
            eprintln!("Error: {}\n", e);
            eprintln!("{}", USAGE);
            std::process::exit(1);
        }
    };

    let config = resolve_config(&args)?;
    let client = FeedClient::connect(&config, GameSummaryLogger::default()).await?;
    log::info!("Connected!");

    let store = client.store();
    let close = client.close_handle();
    tokio::spawn(async move {
        match shutdown_signal().await {
            Ok(()) => log::info!("Shutdown signal received, closing connection"),
            Err(e) => log::error!("Failed to listen for shutdown signal: {}", e),
        }
        close.close();
    });

    let result = client.join().await;
    log_store_summary(&store);

    let stats = result?;
    log::info!(
        "Update loop finished: {} frames, {} league updates, {} game updates, {} skipped",
        stats.frames,
        stats.league_updates,
        stats.game_updates,
        stats.unrecognized + stats.parse_failures
    );
    Ok(())
}

#[cfg(unix)]
async fn shutdown_signal() -> std::io::Result<()> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut terminate = signal(SignalKind::terminate())?;
    tokio::select! {
        result = tokio::signal::ctrl_c() => result,
        _ = terminate.recv() => Ok(()),
    }
}

#[cfg(not(unix))]
async fn shutdown_signal() -> std::io::Result<()> {
    tokio::signal::ctrl_c().await
}

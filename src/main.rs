use clap::Parser;
use dadjoke_relay::core::ConfigProvider;
use dadjoke_relay::utils::error::ErrorSeverity;
use dadjoke_relay::utils::{logger, validation::Validate};
use dadjoke_relay::{build_router, AppState, CliConfig, JokeClient, RelayError, TomlConfig};

fn exit_with(e: &RelayError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Could not listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

async fn run<C: ConfigProvider + Validate>(config: C) -> dadjoke_relay::Result<()> {
    config.validate()?;

    let client = JokeClient::new(&config)?;
    tracing::info!("Relaying jokes from {}", client.endpoint());

    let router = build_router(AppState::new(client));
    let listener = tokio::net::TcpListener::bind(config.bind_address()?).await?;

    dadjoke_relay::server::serve(listener, router, shutdown_signal()).await
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // a config file replaces the server and upstream flags
    let file_config = match cli.config.as_deref().map(TomlConfig::from_file).transpose() {
        Ok(file_config) => file_config,
        Err(e) => {
            logger::init_logger(cli.verbose, cli.json_logs, None);
            exit_with(&e);
        }
    };

    let (verbose, json_logs, level) = match &file_config {
        Some(toml) => (
            cli.verbose || toml.logging.verbose,
            cli.json_logs || toml.logging.json,
            toml.logging.level.clone(),
        ),
        None => (cli.verbose, cli.json_logs, None),
    };
    logger::init_logger(verbose, json_logs, level.as_deref());

    tracing::info!("Starting dadjoke-relay");
    if verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let result = match file_config {
        Some(toml) => run(toml).await,
        None => run(cli).await,
    };

    if let Err(e) = result {
        exit_with(&e);
    }

    Ok(())
}

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tokio::signal;
use tokio::sync::watch;
use tracing::info;

use bracketeer::adapter::{BinanceClient, DiscordClient};
use bracketeer::app::{SymbolResolver, TradeExecutor};
use bracketeer::config::Config;
use bracketeer::domain::{BracketRates, Resolution};
use bracketeer::error::{ConfigError, Error};
use bracketeer::operator;
use bracketeer::port::MessageSource;

#[derive(Parser)]
#[command(name = "bracketeer", about = "Market buy with an automatic OCO protective bracket")]
struct Args {
    /// Path to the configuration file.
    #[arg(long, default_value = "bracketeer.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    let config = match Config::load(&args.config) {
        Ok(config) => config,
        Err(Error::Config(ConfigError::Created { path })) => {
            eprintln!("{path} was missing and has been created. Edit it and restart.");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    config.init_logging();
    operator::banner();

    let exchange = BinanceClient::from_config(&config.exchange);
    let discord = DiscordClient::from_config(&config.discord);
    if discord.is_none() {
        info!("No discord token configured; channel polling disabled");
    }
    operator::logged_in();

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        let _ = signal::ctrl_c().await;
        info!("Shutdown signal received");
        let _ = shutdown_tx.send(true);
    });

    let rates = BracketRates {
        take_profit: config.take_profit_rate,
        stop_loss: config.stop_loss_rate,
        trigger: config.limit_price_rate,
    };
    let executor = TradeExecutor::new(&exchange, config.quantity, rates, &config.quote_asset);
    let resolver = SymbolResolver::new(
        discord.as_ref().map(|d| d as &dyn MessageSource),
        Duration::from_millis(config.discord.poll_interval_ms),
    );

    run(&executor, &resolver, shutdown_rx).await;
    info!("bracketeer stopped");

    // A cancelled prompt leaves a blocking stdin read alive; exit instead
    // of waiting on it through runtime shutdown.
    std::process::exit(0);
}

/// The driver loop: one input line, one resolution, one order cycle.
async fn run(
    executor: &TradeExecutor<'_>,
    resolver: &SymbolResolver<'_>,
    mut shutdown: watch::Receiver<bool>,
) {
    loop {
        operator::prompt();

        let line = tokio::select! {
            line = tokio::task::spawn_blocking(operator::read_line) => {
                match line {
                    Ok(Some(line)) => line,
                    _ => break,
                }
            }
            _ = shutdown.changed() => break,
        };

        let resolution = match resolver.resolve(&line, &mut shutdown).await {
            Ok(resolution) => resolution,
            Err(e) => {
                eprintln!("Could not resolve a symbol: {e}");
                continue;
            }
        };

        let ticker = match resolution {
            Resolution::Ticker(ticker) => ticker,
            Resolution::Quit => break,
        };

        let outcome = executor.execute(&ticker).await;
        operator::report(&outcome);
    }
}

use anyhow::{Context, Result};
use chatbox::{
    api::PredictClient,
    cli::Cli,
    config::{get_config, initialize_config, set_config},
    logging::init_logger,
    repl::run_repl,
    ui::run_ui,
};
use clap::Parser;
use dotenv::dotenv;
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();

    let mut config =
        initialize_config(cli.config.as_deref()).context("failed to load configuration")?;
    cli.apply(&mut config);
    set_config(config).context("invalid command-line override")?;
    let config = get_config();

    let log_dir = config.resolved_log_dir()?;
    let _logger = init_logger(&config.log_level, &log_dir)?;
    info!(
        "starting chatbox v{} ({} mode)",
        env!("CARGO_PKG_VERSION"),
        if cli.repl { "repl" } else { "tui" }
    );

    let client = PredictClient::from_config(&config)?;
    if cli.repl {
        run_repl(&config, client).await?;
    } else {
        run_ui(config, client).await?;
    }

    info!("chatbox exited");
    Ok(())
}

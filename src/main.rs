//! Menu Roulette CLI entry point.

use clap::Parser;

use menu_roulette::cli::{commands, handle_error, Cli, Commands};
use menu_roulette::infrastructure::config::ConfigLoader;
use menu_roulette::infrastructure::logging::LoggerImpl;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match ConfigLoader::load() {
        Ok(config) => config,
        Err(err) => handle_error(err, cli.json),
    };

    let _logger = match LoggerImpl::init(&config.logging) {
        Ok(logger) => logger,
        Err(err) => handle_error(err, cli.json),
    };

    let result = match cli.command {
        Commands::Init(args) => commands::init::execute(args, cli.json).await,
        Commands::Recommend(args) => commands::recommend::execute(args, &config, cli.json).await,
        Commands::Interactive(args) => {
            commands::interactive::execute(args, &config, cli.json).await
        }
        Commands::Menu(args) => commands::menu::execute(&args, cli.json),
    };

    if let Err(err) = result {
        handle_error(err, cli.json);
    }
}

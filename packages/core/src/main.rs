use clap::Parser;
use dotenvy::dotenv;

use creator_revenue::cli::Cli;
use creator_revenue::config::Config;
use creator_revenue::error::AppError;
use creator_revenue::logging::init_logging;

fn main() {
    dotenv().ok();
    init_logging();

    let cli = Cli::parse();

    let config = Config::from_env()
        .map_err(AppError::Config)
        .and_then(|config| cli.resolve_config(config))
        .unwrap_or_else(|err| {
            tracing::error!("{}", err);
            std::process::exit(1);
        });

    tracing::debug!("Estimating with config: {:?}", config);

    match cli.run(&config) {
        Ok(output) => println!("{}", output),
        Err(err) => {
            tracing::error!("{}", err);
            std::process::exit(1);
        }
    }
}

use clap::Parser;
use gym_manager::utils::logger;
use gym_manager::{CliConfig, Menu};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting gym-manager");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let mut menu = Menu::new(&config)?;
    menu.run()?;

    Ok(())
}

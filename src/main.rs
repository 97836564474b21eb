use clap::Parser;

use usuario_api::cli::{
    Cli, execute_command, init_logger_from_settings, load_and_merge_config, should_start_server,
};
use usuario_api::server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = load_and_merge_config(&cli)?;
    init_logger_from_settings(&settings)?;

    execute_command(&cli, settings.clone()).await?;

    if should_start_server(&cli) {
        Server::new(settings).run().await?;
    }

    Ok(())
}

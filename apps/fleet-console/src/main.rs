use std::io::Write;
use std::sync::Arc;

use clap::Parser;
use fleet_console::telemetry::{TelemetryConfig, init_telemetry};
use fleet_console::{Cli, Command, Console, ConsoleConfig, Flow};
use fleet_core::ports::SessionStore;
use fleet_core::router::RouteContext;
use fleet_core::routes::app_router;
use fleet_infra::{FileSessionStore, HttpInventoryApi};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();
    init_telemetry(&TelemetryConfig::from_env());

    let config = ConsoleConfig::from_env();
    tracing::info!(api_url = %config.api_url, session_file = %config.session_file.display(), "Starting console");

    let session: Arc<dyn SessionStore> = Arc::new(FileSessionStore::new(&config.session_file));
    let api = HttpInventoryApi::new(config.http(), session.clone())?;
    let mut console = Console::new(app_router(RouteContext::new(Arc::new(api), session)));

    if let Flow::Continue(output) = console.execute(Command::Open(cli.start_href())).await {
        println!("{output}");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("\n> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        };

        match console.execute(command).await {
            Flow::Continue(output) => println!("{output}"),
            Flow::Quit => break,
        }
    }

    Ok(())
}

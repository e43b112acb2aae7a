use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::signal;

mod controller;
mod events;
mod io;
mod logging;
mod output;
mod settings;
mod state;
mod status;


use self::controller::AppController;
use self::io::InputSource;
use self::state::AppState;

/// Look up Chinese characters and emit practice worksheets as JSON
#[derive(Parser, Debug)]
#[command(name = "hanzi", version)]
struct Cli {
    /// Characters to generate worksheets for; reads one per line from stdin when omitted
    characters: Vec<String>,

    /// JSON config file (defaults to ./hanzi.json when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pretty-print worksheets
    #[arg(long)]
    pretty: bool,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logging::init(cli.json_logs)?;

    let config = settings::load_config(cli.config.as_deref())?;
    let resolver = hanzi_lang_chinese::build_resolver(&config)?;
    let state = Arc::new(AppState::new(config, resolver));

    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(InputSource::from_args(cli.characters), cli.pretty);

    let shutdown = signal::ctrl_c();
    tokio::pin!(shutdown);
    let mut stopping = false;

    loop {
        tokio::select! {
            result = &mut shutdown, if !stopping => {
                stopping = true;
                if let Err(e) = result {
                    tracing::error!("failed to listen for ctrl+c: {e}");
                }
                tracing::info!("Shutdown requested");
                controller.shutdown();
            }
            joined = tasks.join_next() => match joined {
                Some(Ok(Ok(()))) => {}
                Some(Ok(Err(e))) => {
                    tracing::error!("task exited: {e}");
                    tasks.abort_all();
                }
                Some(Err(e)) if e.is_cancelled() => {}
                Some(Err(e)) => {
                    tracing::error!("task panicked: {e}");
                    tasks.abort_all();
                }
                None => break,
            }
        }
    }

    Ok(())
}

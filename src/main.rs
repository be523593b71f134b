use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use docqa::client::http::HttpBackend;
use docqa::config::Config;
use docqa::console::{Command, ConsoleView, HELP};
use docqa::service::dispatch;

// The view is `RefCell`-backed; actions run one at a time on this thread.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (development convenience)
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries the chat.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "docqa=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    info!("Using question-answering backend at {}", config.api_base());

    let backend = HttpBackend::new(config)?;
    let view = ConsoleView::new();

    println!("{HELP}");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match Command::parse(&line) {
            Command::Action(action) => dispatch(&backend, &view, action).await,
            Command::History => view.print_history(),
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
            Command::Unknown(name) => println!("Unknown command '/{name}'. Type /help."),
        }
    }

    Ok(())
}

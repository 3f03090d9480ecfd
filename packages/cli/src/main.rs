use anyhow::Result;
use clap::Parser;
use crossterm::{execute, terminal};
use tracing_subscriber::EnvFilter;

use copydeck_client::ClientConfig;
use copydeck_tui::App;

#[derive(Parser)]
#[command(name = "copydeck", about = "AI content operations console", version)]
struct Args {
    /// Base URL of the content API, overriding COPYDECK_API_URL
    #[arg(long)]
    api_url: Option<String>,

    /// Refresh interval for the content library, in seconds
    #[arg(long, default_value_t = 30)]
    refresh_interval: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they do not corrupt the TUI; enable with RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = ClientConfig::from_env();
    if let Some(api_url) = args.api_url {
        config.base_url = api_url;
    }
    config.validate()?;

    let mut app = App::new(&config, args.refresh_interval)?;

    // Setup terminal
    terminal::enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let result = app.run(&mut terminal).await;

    // Always restore the terminal, even if the app errored
    let cleanup = (|| -> Result<()> {
        terminal::disable_raw_mode()?;
        execute!(terminal.backend_mut(), terminal::LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    })();

    if let Err(cleanup_error) = cleanup {
        eprintln!("Terminal cleanup error: {}", cleanup_error);
    }

    result
}

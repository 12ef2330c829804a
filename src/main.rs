use std::io::stdout;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use vidscout::api::ApiClient;
use vidscout::app::App;
use vidscout::autocomplete::spawn_worker;
use vidscout::config::{Overrides, load_config};
use vidscout::error::VidscoutError;
use vidscout::logging;

/// Search the video intelligence API with live suggestions
#[derive(Parser, Debug)]
#[command(name = "vidscout", version, about)]
struct Args {
    /// Text to start the search input with
    query: Option<String>,

    /// Config file (default: ~/.config/vidscout/config.toml)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// API base URL, e.g. https://api.example.com/api
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Bearer token for the API
    #[arg(long, env = "VIDSCOUT_API_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Quiet interval before fetching suggestions
    #[arg(long, value_name = "MS")]
    debounce_ms: Option<u64>,

    /// Keep the console open after a search instead of printing the term and exiting
    #[arg(long)]
    stay: bool,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    if let Some(path) = &args.log_file {
        logging::init(path)?;
    }

    let mut config = load_config(args.config.as_deref())?;
    config.apply_overrides(&Overrides {
        api_url: args.api_url,
        token: args.token,
        debounce_ms: args.debounce_ms,
    });

    // Fail on a bad URL before taking over the terminal
    let client = ApiClient::new(&config.api)
        .map_err(|e| VidscoutError::from_client(&config.api.base_url, e))?;
    let worker = spawn_worker(Arc::new(client))?;

    let mut app = App::new(&config, worker, args.stay);
    if let Some(query) = &args.query {
        app.set_initial_query(query);
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    if let Err(e) = execute!(stdout(), EnableMouseCapture, EnableBracketedPaste) {
        ratatui::restore();
        return Err(e.into());
    }

    let result = run(terminal, &mut app);

    // Restore terminal before printing anything
    if let Err(e) = execute!(stdout(), DisableBracketedPaste, DisableMouseCapture) {
        log::warn!("Failed to disable mouse capture: {}", e);
    }
    ratatui::restore();

    if let Ok(Some(term)) = &result {
        println!("{}", term);
    }

    // Waits (bounded) for the committed term to be recorded
    app.shutdown();
    result.map(|_| ())
}

/// Main event loop. Returns the committed term, if any.
fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<Option<String>> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(app.poll_timeout())? {
            app.handle_event(event::read()?);
        }
        app.tick();

        if app.should_quit() {
            break;
        }
    }

    log::info!("Exiting");
    Ok(app.take_output())
}

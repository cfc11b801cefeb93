use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::{
    fs,
    path::PathBuf,
    time::{Duration, Instant},
};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

/// JARVIS-themed portfolio in the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <temp dir>/foliotui-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Section to open at, by anchor (e.g. "#about" or "contact")
    #[arg(short, long)]
    section: Option<String>,
}

mod handlers;
mod terminal;
mod ui;
mod utils;

use foliotui::config::Config;
use foliotui::model::{Focus, Model, Viewport};
use foliotui::relay::EmailRelayClient;
use foliotui::services::{spawn_relay_service, RelayCredentials, RelayRequest, RelayResponse};
use foliotui::Section;
use ui::hit::HitMap;

/// Upper bound on how long the loop sleeps; keeps continuous animations smooth
const FRAME_INTERVAL: Duration = Duration::from_millis(50);

pub struct App {
    pub model: Model,
    relay_tx: mpsc::UnboundedSender<RelayRequest>,
    relay_rx: mpsc::UnboundedReceiver<RelayResponse>,
    /// Clickable regions from the last frame
    pub hit_map: HitMap,
    /// Relay ids are still the placeholders; submissions will fail
    pub placeholder_relay: bool,
}

impl App {
    fn new(config: &Config, viewport: Viewport, now: Instant) -> Result<Self> {
        let client = EmailRelayClient::new(
            config.relay.endpoint.clone(),
            Duration::from_secs(config.relay.timeout_secs),
        )?;
        let (relay_tx, relay_rx) =
            spawn_relay_service(client, RelayCredentials::from(&config.relay));

        Ok(Self {
            model: Model::new(config.phrases(), viewport, now)?,
            relay_tx,
            relay_rx,
            hit_map: HitMap::default(),
            placeholder_relay: config.uses_placeholder_relay(),
        })
    }

    /// Perform the action of a focusable control
    pub fn activate(&mut self, focus: Focus, now: Instant) {
        self.model.ui.focus = Some(focus);
        match focus {
            Focus::ThemeToggle => self.model.toggle_theme(),
            Focus::CallToAction => {
                self.model.scroll_to(Section::Contact, now);
            }
            Focus::Reactor => self.model.reactor.activate(now),
            Focus::Field(_) => {}
            Focus::Submit => self.submit_contact(now),
        }
    }

    /// Validate the form and hand the submission to the relay worker
    pub fn submit_contact(&mut self, now: Instant) {
        let Some((submission_id, payload)) = self.model.submit_contact(now) else {
            return;
        };
        tracing::debug!(submission_id, "dispatching contact message");
        if let Err(e) = self.relay_tx.send(RelayRequest::Send {
            submission_id,
            payload,
        }) {
            tracing::error!("relay service unavailable: {}", e);
            self.model
                .contact
                .apply_outcome(Err(anyhow::anyhow!("relay service unavailable")), now);
        }
    }
}

fn get_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    // If CLI argument provided, it must exist
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        } else {
            anyhow::bail!("Config file not found at specified path: {}", path);
        }
    }

    // Try ~/.config/foliotui/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("foliotui").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    // No config: run with placeholder relay ids
    Ok(None)
}

fn load_config(cli_path: Option<String>) -> Result<Config> {
    match get_config_path(cli_path)? {
        Some(path) => {
            tracing::info!("Loading config from: {:?}", path);
            let source = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Config::from_yaml(&source)
        }
        None => {
            tracing::info!("No config file found, using placeholder relay ids");
            Ok(Config::default())
        }
    }
}

/// Install the file logger. The guard must live as long as logging should.
fn init_logging() -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let path = utils::get_debug_log_path();
    let dir = path
        .parent()
        .map(PathBuf::from)
        .unwrap_or_else(std::env::temp_dir);
    let appender = tracing_appender::rolling::never(dir, utils::DEBUG_LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("foliotui=debug,warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;
    Ok(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    let _log_guard = if args.debug {
        let guard = init_logging()?;
        tracing::info!("Debug mode enabled");
        Some(guard)
    } else {
        None
    };

    let config = load_config(args.config)?;

    let (width, height) = crossterm::terminal::size()?;
    let now = Instant::now();
    let mut app = App::new(&config, Viewport { width, height }, now)?;
    if let Some(anchor) = args.section {
        app.model.jump_to_anchor(&anchor, now)?;
    }

    terminal::install_panic_hook();
    let mut session = terminal::TerminalSession::enter()?;

    app.model.mount(Instant::now());
    let result = run_app(&mut session.terminal, &mut app).await;
    app.model.teardown();

    // Restore the terminal before any error is printed
    drop(session);
    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        let now = Instant::now();
        app.model.tick(now);

        // Always render (Elm Architecture approach)
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        if app.model.ui.should_quit {
            break;
        }

        // Process relay responses (non-blocking)
        while let Ok(response) = app.relay_rx.try_recv() {
            handlers::handle_relay_response(app, response, Instant::now());
        }

        // Sleep until the next timer is due, or one frame at most
        let timeout = app
            .model
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .map_or(FRAME_INTERVAL, |until| until.min(FRAME_INTERVAL));

        if event::poll(timeout)? {
            let now = Instant::now();
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handlers::handle_key(app, key, now);
                }
                Event::Mouse(mouse) => handlers::handle_mouse(app, mouse, now),
                Event::Resize(width, height) => app.model.interaction.resized(width, height),
                _ => {}
            }
        }
    }

    Ok(())
}

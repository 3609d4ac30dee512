use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{fs::File, io, sync::Arc, time::Duration};
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use repobrowse::api::RepoClient;
use repobrowse::config::{find_config_path, Config};
use repobrowse::logic::view::{view, BrowserView};
use repobrowse::{Effect, Model, Msg};

mod app;
mod handlers;
mod services;
mod ui;
mod utils;

use app::UiState;
use services::api::{ApiRequest, ApiResponse};
use services::events::{Envelope, HostBus};
use ui::icons::{IconRenderer, IconTheme};

/// Repository file browser
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <tmp>/repobrowse-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (hjkl, ^D/U, ^F/B, gg/G)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Folder to start in instead of the home folder
    #[arg(short, long)]
    path: Option<String>,
}

pub struct App {
    pub model: Model,
    /// View model for the current `model`, rebuilt after every dispatch
    pub view: BrowserView,
    pub ui: UiState,
    pub icon_renderer: IconRenderer,
    client: RepoClient,
    open_command: Option<String>,
    bus: HostBus,
    api_tx: mpsc::UnboundedSender<ApiRequest>,
    api_rx: mpsc::UnboundedReceiver<ApiResponse>,
    event_rx: mpsc::UnboundedReceiver<Envelope>,
}

impl App {
    fn new(config: Config) -> Result<Self> {
        let client = RepoClient::new(
            config.base_url.clone(),
            config.username.clone(),
            config.password.clone(),
        )?;

        let (api_tx, api_rx) = services::api::spawn_api_service(client.clone());

        let bus = HostBus::new();
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        services::events::spawn_event_forwarder(&bus, event_tx);
        services::events::spawn_signal_listener(bus.clone());

        let model = Model::new(config.browser_context());
        let view = view(&model);

        Ok(Self {
            model,
            view,
            ui: UiState::new(config.vim_mode),
            icon_renderer: IconRenderer::new(IconTheme::default()),
            client,
            open_command: config.open_command,
            bus,
            api_tx,
            api_rx,
            event_rx,
        })
    }
}

fn init_logging() -> Result<()> {
    let path = utils::get_debug_log_path();
    let file = File::create(&path).with_context(|| format!("Failed to create {:?}", path))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("repobrowse=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // stdout belongs to the terminal UI, so logs only go to a file
    if args.debug {
        init_logging()?;
        info!("Debug mode enabled");
    }

    let config_path = find_config_path(args.config)?;
    info!("Loading config from: {:?}", config_path);

    let mut config = Config::load(&config_path)?;
    if args.vim {
        config.vim_mode = true;
    }
    let fetch_hidden_setting = config.show_hidden_files.is_none();

    let mut app = App::new(config)?;
    if fetch_hidden_setting {
        // Not configured: follow the user setting once it arrives
        app.run_effect(Effect::FetchShowHiddenSetting);
    }
    app.dispatch(Msg::Redraw {
        initial_path: args.path,
    });

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        app.ui.dismiss_expired_toast();

        if app.ui.should_quit {
            break;
        }

        // Process API responses (non-blocking)
        while let Ok(response) = app.api_rx.try_recv() {
            handlers::handle_api_response(app, response);
        }

        while let Ok(envelope) = app.event_rx.try_recv() {
            handlers::handle_host_event(app, envelope);
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handlers::handle_key(app, key);
                }
            }
        }
    }

    Ok(())
}

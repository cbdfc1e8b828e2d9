use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    Terminal,
};

use gatewatch_client::GatewayClient;
use gatewatch_tui::app::{App, View};
use gatewatch_tui::config::Settings;
use gatewatch_tui::fetch::Fetcher;
use gatewatch_tui::{events, ui};

#[derive(Parser, Debug)]
#[command(name = "gatewatch")]
#[command(about = "Terminal dashboard for Zabbix-compatible monitoring gateways")]
struct Args {
    /// Gateway base URL (e.g. http://tin.eurisco:8080)
    #[arg(short, long)]
    endpoint: Option<String>,

    /// API path convention: "v1" (versioned) or "flat" (legacy)
    #[arg(long)]
    api: Option<String>,

    /// Auto-refresh interval for list panels, in seconds
    #[arg(short, long)]
    refresh: Option<u64>,

    /// Maximum items shown per list panel
    #[arg(short, long)]
    limit: Option<usize>,

    /// Maximum hosts shown in the hosts panel
    #[arg(long)]
    host_limit: Option<usize>,

    /// Disable the per-panel refresh timers (fetch on demand only)
    #[arg(long)]
    no_auto_refresh: bool,

    /// Path to a TOML config file (GATEWATCH_* env vars also apply)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// WebSocket URL for the live update feed
    #[cfg(feature = "live")]
    #[arg(long)]
    live: Option<String>,

    /// Append diagnostics to this file (honors RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    // Defaults, then config file/env, then CLI flags.
    let mut settings = Settings::load(args.config.as_deref())?;
    if let Some(endpoint) = args.endpoint {
        settings.endpoint = endpoint;
    }
    if let Some(api) = args.api {
        settings.api = api;
    }
    if let Some(refresh) = args.refresh {
        settings.refresh_secs = refresh;
    }
    if let Some(limit) = args.limit {
        settings.list_limit = limit;
    }
    if let Some(host_limit) = args.host_limit {
        settings.host_limit = host_limit;
    }
    if args.no_auto_refresh {
        settings.auto_refresh = false;
    }
    #[cfg(feature = "live")]
    if let Some(live) = args.live {
        settings.live_url = Some(live);
    }

    // The TUI runs synchronously on the main thread; fetches and the
    // live listener run on this runtime.
    let runtime = tokio::runtime::Runtime::new()?;

    let client = GatewayClient::builder()
        .endpoint(&settings.endpoint)
        .style(settings.api_style())
        .build();
    let (fetcher, updates) = Fetcher::new(client, runtime.handle().clone());
    let mut app = App::new(fetcher, updates, &settings);

    #[cfg(feature = "live")]
    let live_task = settings.live_url.clone().map(|url| {
        let (rx, task) = gatewatch_tui::live::spawn_listener(url.clone(), runtime.handle());
        app.attach_live(url, rx);
        task
    });

    // Initial fetch for every panel
    app.refresh_all();

    let result = run_tui(&mut app);

    #[cfg(feature = "live")]
    if let Some(task) = live_task {
        task.abort();
    }

    result
}

/// Set up file logging; the terminal belongs to the TUI.
fn init_logging(path: &std::path::Path) -> Result<()> {
    use tracing_subscriber::EnvFilter;

    let file = std::fs::OpenOptions::new().create(true).append(true).open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Run the TUI with the prepared app state
fn run_tui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    let result = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Minimum terminal size for usable display
    const MIN_WIDTH: u16 = 60;
    const MIN_HEIGHT: u16 = 12;

    while app.running {
        // Draw UI
        terminal.draw(|frame| {
            let area = frame.area();

            if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
                let msg = format!(
                    "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
                    area.width, area.height, MIN_WIDTH, MIN_HEIGHT
                );
                let paragraph = ratatui::widgets::Paragraph::new(msg)
                    .alignment(ratatui::layout::Alignment::Center)
                    .style(ratatui::style::Style::default().fg(ratatui::style::Color::Yellow));
                frame.render_widget(paragraph, area);
                return;
            }

            let chunks = Layout::vertical([
                Constraint::Length(1), // Header bar
                Constraint::Length(1), // Tabs
                Constraint::Min(8),    // Content
                Constraint::Length(1), // Status bar
            ])
            .split(area);

            ui::common::render_header(frame, app, chunks[0]);
            ui::common::render_tabs(frame, app, chunks[1]);

            match app.view {
                View::Events => ui::events::render(frame, app, chunks[2]),
                View::Problems => ui::problems::render(frame, app, chunks[2]),
                View::Triggers => ui::triggers::render(frame, app, chunks[2]),
                View::Hosts => ui::hosts::render(frame, app, chunks[2]),
                View::Health => ui::health::render(frame, app, chunks[2]),
                View::Live => ui::live::render(frame, app, chunks[2]),
            }

            ui::common::render_status_bar(frame, app, chunks[3]);

            if app.filter_editor.is_some() {
                ui::filter::render_overlay(frame, app, area);
            }

            if app.show_help {
                ui::common::render_help(frame, app, area);
            }
        })?;

        // Poll for events with a short timeout
        if let Some(event) = events::poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Mouse(mouse) => events::handle_mouse_event(app, mouse),
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }

        // Apply completed fetches/live events and fire due timers
        app.tick();
    }

    Ok(())
}

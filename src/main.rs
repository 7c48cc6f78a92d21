use rollcall::adapters::ReqwestHttpClient;
use rollcall::app::{App, AppMessage};
use rollcall::cli::{parse_args, run_cli_command};
use rollcall::client::AdminClient;
use rollcall::config::Config;
use rollcall::input::{CommandRegistry, InputContext};
use rollcall::logging;
use rollcall::traits::Renderer;
use rollcall::ui;
use rollcall::view_state::DashboardView;

use color_eyre::Result;
use crossterm::{
    cursor::Show,
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Path the logout tab navigates to; the dashboard exits instead.
const LOGOUT_PATH: &str = "/logout";

#[tokio::main]
async fn main() -> Result<()> {
    let Some(options) = run_cli_command(parse_args(std::env::args()))? else {
        return Ok(());
    };

    color_eyre::install()?;

    let mut config = Config::from_env();
    if let Some(url) = options.base_url {
        config = config.with_base_url(url);
    }
    let log_path = logging::init(&config)?;
    info!(
        version = rollcall::cli::VERSION,
        base_url = %config.base_url,
        log = ?log_path,
        "starting rollcall"
    );

    let http = ReqwestHttpClient::with_timeout(config.timeout)?;
    let provider = Arc::new(AdminClient::with_http(config.base_url.clone(), http));
    let (message_tx, message_rx) = mpsc::unbounded_channel();
    let mut app = App::new(provider, DashboardView::new(), message_tx);

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    app.start();
    let result = run_app(&mut terminal, &mut app, message_rx, &config).await;

    restore_terminal(&mut terminal)?;
    info!("rollcall exited");
    result
}

/// Setup panic hook to restore terminal on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
        original_hook(panic_info);
    }));
}

/// Restore terminal to normal mode
fn restore_terminal<B: ratatui::backend::Backend + io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App<DashboardView>,
    mut message_rx: mpsc::UnboundedReceiver<AppMessage>,
    config: &Config,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let registry = CommandRegistry::new();
    let mut event_stream = EventStream::new();
    let mut needs_redraw = true;

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::render(f, app.renderer()))?;
            needs_redraw = false;
        }

        tokio::select! {
            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        let context = InputContext::from_view(app.renderer());
                        if let Some(cmd) = registry.dispatch(key, &context) {
                            app.execute_command(cmd);
                        }
                        needs_redraw = true;
                    }
                    Some(Ok(Event::Resize(_, _))) => needs_redraw = true,
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        warn!(error = %e, "terminal event error");
                    }
                    // Input closed; nothing left to drive the dashboard
                    None => app.quit(),
                }
            }

            Some(msg) = message_rx.recv() => {
                app.handle_message(msg);
                needs_redraw = true;
            }
        }

        if let Some(path) = app.renderer_mut().take_navigation() {
            follow_navigation(app, config, &path);
            needs_redraw = true;
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

/// Leaves the dashboard for `path`: logout quits, anything else opens in
/// the browser.
fn follow_navigation(app: &mut App<DashboardView>, config: &Config, path: &str) {
    if path == LOGOUT_PATH {
        info!("logging out");
        app.quit();
        return;
    }

    let url = config.url_for(path);
    info!(%url, "opening in browser");
    if let Err(e) = open::that(&url) {
        warn!(%url, error = %e, "failed to open browser");
        app.renderer_mut()
            .alert(&format!("Could not open {} in a browser.", url));
    }
}

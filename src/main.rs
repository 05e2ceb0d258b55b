use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{
    DisableBracketedPaste, DisableFocusChange, DisableMouseCapture, EnableBracketedPaste,
    EnableFocusChange, EnableMouseCapture,
};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::path::PathBuf;
use std::time::Duration;

use tickahead::config::{self, Config, ConfigResult};
use tickahead::provider::{
    CatalogSearchProvider, FallbackSearchProvider, HttpSearchProvider, SearchError,
    SearchProvider,
};
use tickahead::{App, TickaheadError};

/// Search-as-you-type ticker lookup
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Search-as-you-type ticker lookup with debounced, race-safe suggestions"
)]
struct Args {
    /// Initial text in the ticker field
    #[arg(long, default_value = "")]
    initial: String,

    /// Search API base URL (overrides config)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Answer from the built-in catalog of popular stocks, no network
    #[arg(long)]
    offline: bool,

    /// Run a single lookup, print the candidates as JSON and exit
    #[arg(long, value_name = "TEXT")]
    query: Option<String>,

    /// Config file to use instead of ~/.config/tickahead/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Quiet period after the last keystroke, in milliseconds (overrides config)
    #[arg(long, value_name = "MS")]
    debounce_ms: Option<u64>,
}

/// The search backend picked from flags and config
enum Backend {
    Offline(CatalogSearchProvider),
    Online(HttpSearchProvider),
    OnlineWithFallback(FallbackSearchProvider<HttpSearchProvider, CatalogSearchProvider>),
}

fn main() -> Result<()> {
    // Writes to /tmp/tickahead-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/tickahead-debug.log")
            .expect("Failed to open /tmp/tickahead-debug.log");

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== TICKAHEAD DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    let args = Args::parse();

    let ConfigResult {
        config: mut cfg,
        warning,
    } = load_config(&args)?;
    apply_overrides(&mut cfg, &args);

    let backend = select_backend(&cfg, args.offline)?;

    if let Some(query) = &args.query {
        return run_headless(backend, query, cfg.search.timeout());
    }

    let mut app = match backend {
        Backend::Offline(provider) => App::new(&cfg, provider, &args.initial),
        Backend::Online(provider) => App::new(&cfg, provider, &args.initial),
        Backend::OnlineWithFallback(provider) => App::new(&cfg, provider, &args.initial),
    };
    app.warning = warning;

    let terminal = init_terminal()?;
    let result = run(terminal, app);

    restore_terminal()?;
    let app = result?;

    // Output after terminal restore to prevent corruption
    handle_output(&app)?;

    #[cfg(debug_assertions)]
    log::debug!("=== TICKAHEAD DEBUG SESSION ENDED ===");

    Ok(())
}

fn load_config(args: &Args) -> Result<ConfigResult, TickaheadError> {
    match &args.config {
        Some(path) if !path.exists() => Err(TickaheadError::Config(path.clone())),
        Some(path) => Ok(config::load_config_from(path)),
        None => Ok(config::load_config()),
    }
}

/// Command line flags win over the config file
fn apply_overrides(cfg: &mut Config, args: &Args) {
    if let Some(url) = &args.api_url {
        cfg.search.base_url = url.clone();
    }
    if let Some(debounce_ms) = args.debounce_ms {
        cfg.typeahead.debounce_ms = debounce_ms;
    }
}

fn select_backend(cfg: &Config, offline: bool) -> Result<Backend, TickaheadError> {
    if offline {
        return Ok(Backend::Offline(CatalogSearchProvider::popular()));
    }

    let http = HttpSearchProvider::new(&cfg.search.base_url, cfg.search.timeout())?;
    log::debug!("Searching via {}", http.endpoint());

    if cfg.search.offline_fallback {
        Ok(Backend::OnlineWithFallback(FallbackSearchProvider::new(
            http,
            CatalogSearchProvider::popular(),
        )))
    } else {
        Ok(Backend::Online(http))
    }
}

/// One lookup without the UI; prints the candidates as JSON
fn run_headless(backend: Backend, query: &str, timeout: Duration) -> Result<()> {
    // Same rule as the typeahead: only the empty string skips the provider
    if query.is_empty() {
        println!("[]");
        return Ok(());
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(TickaheadError::Io)?;

    let outcome = runtime.block_on(async {
        match backend {
            Backend::Offline(provider) => search_with_timeout(&provider, query, timeout).await,
            Backend::Online(provider) => search_with_timeout(&provider, query, timeout).await,
            Backend::OnlineWithFallback(provider) => {
                search_with_timeout(&provider, query, timeout).await
            }
        }
    });

    let candidates = outcome.map_err(TickaheadError::Search)?;
    println!("{}", serde_json::to_string_pretty(&candidates)?);
    Ok(())
}

async fn search_with_timeout<P: SearchProvider>(
    provider: &P,
    query: &str,
    timeout: Duration,
) -> Result<Vec<tickahead::Candidate>, SearchError> {
    match tokio::time::timeout(timeout, provider.search(query.to_string())).await {
        Ok(outcome) => outcome,
        Err(_) => Err(SearchError::Timeout),
    }
}

/// Initialize terminal with raw mode, alternate screen, mouse and focus reporting
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(
            stdout(),
            DisableFocusChange,
            DisableMouseCapture,
            DisableBracketedPaste,
            LeaveAlternateScreen
        );
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    match execute!(
        stdout(),
        EnterAlternateScreen,
        EnableBracketedPaste,
        EnableMouseCapture,
        EnableFocusChange
    ) {
        Ok(_) => {}
        Err(e) => {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = restore_terminal();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(
        stdout(),
        DisableFocusChange,
        DisableMouseCapture,
        DisableBracketedPaste,
        LeaveAlternateScreen
    );
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<App> {
    loop {
        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    app.shutdown();
    Ok(app)
}

/// Print the committed candidate after the terminal is restored
fn handle_output(app: &App) -> Result<()> {
    if !app.accepted {
        return Ok(());
    }

    if let Some(candidate) = app.committed() {
        println!("{}", serde_json::to_string(candidate)?);
    }

    Ok(())
}

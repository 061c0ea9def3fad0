use std::io;
use std::time::Duration;

use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use clause_assistant::config::AppConfig;
use clause_assistant::core::analysis::{ClauseTemplate, SampleAnalyzer};
use clause_assistant::core::chat::CannedReply;
use clause_assistant::core::logging;
use clause_assistant::core::session::Session;
use clause_assistant::tui::app::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Config comes first so the log directory can be overridden.
    let loaded = AppConfig::load();
    let config = match &loaded {
        Ok(Some(config)) => config.clone(),
        Ok(None) | Err(_) => AppConfig::default(),
    };

    let _log_guard = logging::init_tui(&config.log_dir());
    log::info!("{} v{} starting", clause_assistant::NAME, clause_assistant::VERSION);
    match loaded {
        Ok(Some(_)) => log::info!("Loaded config from {}", AppConfig::config_path().display()),
        Ok(None) => log::info!("No config file, using defaults"),
        Err(e) => log::warn!("{e}; using defaults"),
    }

    let analyzer = load_analyzer(&config)?;
    let session = Session::new(Box::new(analyzer), Box::new(CannedReply))
        .with_switch_policy(config.session.on_document_switch);
    let mut app = AppState::new(session, config.layout);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(config.tui.tick_rate_ms.max(1));
    let result = app.run(&mut terminal, tick_rate).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        log::error!("Event loop failed: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    log::info!("Shutting down");
    Ok(())
}

/// Custom template when configured and valid, bundled sample otherwise.
fn load_analyzer(config: &AppConfig) -> Result<SampleAnalyzer, Box<dyn std::error::Error>> {
    if let Some(path) = &config.analysis.template_path {
        match ClauseTemplate::from_path(path) {
            Ok(template) => return Ok(SampleAnalyzer::new(template)),
            Err(e) => log::warn!("{e}; falling back to the bundled template"),
        }
    }
    Ok(SampleAnalyzer::bundled()?)
}

//! Main application module.
//!
//! This module contains the main `App` struct that owns the terminal and
//! drives the [`Session`] from terminal events.

use crate::api::{DemoSource, MatchSource, OddsSource, PolymarketClient, VlrClient};
use crate::config::{Config, FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
use crate::error::Result;
use crate::events::EventHandler;
use crate::session::Session;
use crate::sync::TerminalWindow;
use crate::ui::Ui;

use crossterm::{
    event::{DisableFocusChange, EnableFocusChange},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use tracing::{info, warn};

/// The main application.
pub struct App {
    /// Terminal.
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Event handler.
    event_handler: EventHandler,
    /// Data engine.
    session: Session,
    /// Configuration.
    config: Config,
}

impl App {
    /// Create a new application.
    pub fn new(config: Config) -> Result<Self> {
        let (matches, odds) = sources(&config)?;

        let preferences: Box<dyn PreferenceStore> =
            match FilePreferenceStore::from_default_location() {
                Ok(store) => Box::new(store),
                Err(e) => {
                    warn!(error = %e, "no preference directory, theme will not be saved");
                    Box::new(MemoryPreferenceStore::default())
                }
            };

        let mut session = Session::new(&config.ui, matches, odds, preferences);
        let window = TerminalWindow::new(session.dispatcher());
        if config.ui.auto_hide {
            session.install_visibility_guard(Arc::new(window.clone()));
        }

        let event_handler = EventHandler::new(&config.keybindings, window, config.ui.tick_rate())?;

        // Set up terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            event_handler,
            session,
            config,
        })
    }

    /// Run the application event loop.
    pub async fn run(&mut self) -> Result<()> {
        self.session.start();

        loop {
            self.event_handler
                .set_hidden(self.session.store().app.hidden);

            // Render UI
            let store = self.session.store();
            let config = &self.config;
            self.terminal.draw(|frame| {
                Ui::render(frame, store, config);
            })?;

            tokio::select! {
                // Handle terminal events
                result = self.event_handler.next() => {
                    if let Some(action) = result? {
                        self.session.handle_action(action);
                    }
                }

                // Handle actions from background tasks
                Some(action) = self.session.next_action() => {
                    self.session.handle_action(action);
                }
            }

            if self.session.store().app.should_quit {
                break;
            }
        }

        self.session.shutdown();
        Ok(())
    }
}

/// Pick the match and odds sources for this run.
fn sources(config: &Config) -> Result<(Arc<dyn MatchSource>, Arc<dyn OddsSource>)> {
    if config.api.demo_mode {
        info!("running with demo data");
        let demo = Arc::new(DemoSource::new());
        let matches: Arc<dyn MatchSource> = demo.clone();
        let odds: Arc<dyn OddsSource> = demo;
        return Ok((matches, odds));
    }

    let matches: Arc<dyn MatchSource> = Arc::new(VlrClient::new(&config.api)?);
    let odds: Arc<dyn OddsSource> = Arc::new(PolymarketClient::new(&config.api)?);
    Ok((matches, odds))
}

impl Drop for App {
    fn drop(&mut self) {
        // Restore terminal state
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            DisableFocusChange,
            LeaveAlternateScreen
        );
        let _ = self.terminal.show_cursor();
    }
}

mod bmi;
mod config;
mod logging;
mod mask;
mod ui;

use std::io;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing::{info, warn};

use crate::config::Config;
use crate::ui::{App, render};

fn main() -> io::Result<()> {
    // A broken config file should not keep the calculator from starting
    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    logging::init_tracing(&config.log_level);
    if let Some(e) = config_error {
        warn!(error = %e, "using default config");
    }
    info!(unit = %config.default_unit, "starting bmi-calc");

    let mut app = App::new(config.default_unit);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("bmi-calc exited");
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && ui::handle_key_event(app, key.code) {
                break;
            }
        }
    }
    Ok(())
}

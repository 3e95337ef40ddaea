//! netbar — a menu-bar style network throughput monitor for the terminal.
//!
//! A one-line status bar shows the current download/upload rates; a
//! drop-down panel (press 'm') lists the last 20 one-second samples.
//! Three update modes govern when sampling happens:
//!   - paused: no sampling at all
//!   - continuous: a background tick samples every second, drop-down
//!     open or not
//!   - on-demand: sampling runs only while the drop-down is open, from
//!     a fresh trace each time
//!
//! Keybindings: m menu, p/c/o mode, t theme, q quit.

#![allow(dead_code)]

mod app;
mod color_scheme;
mod config;
mod input;
mod net;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use app::App;
use config::Config;
use net::counters::SysinfoCounters;
use net::monitor::Monitor;

fn main() -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the app
    let result = run_app(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Main application loop
fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    let cfg = Config::load();
    let mut app = App::new(&cfg);
    let mut counters = SysinfoCounters::new();
    let mut monitor = Monitor::new();

    // Apply the persisted mode; its entry actions arm the timers.
    monitor.set_mode(cfg.mode, Instant::now(), &mut counters);

    loop {
        // Draw
        terminal.draw(|f| ui::draw(f, &app, &monitor))?;

        // Check if we should quit before waiting for events
        if app.should_quit {
            monitor.shutdown();
            return Ok(());
        }

        // Handle events with short timeout for responsiveness
        let timeout = Duration::from_millis(50);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    // crossterm can fire Press and Release; only handle Press
                    if key.kind == KeyEventKind::Press {
                        input::handle_key(&mut app, &mut monitor, &mut counters, key);
                    }
                }
                Event::Mouse(mouse) => {
                    input::handle_mouse(&mut app, &mut monitor, &mut counters, mouse);
                }
                Event::Resize(_, _) => {
                    // Terminal resize - will be handled on next draw
                }
                _ => {}
            }
        }

        // Fire any sampling/display ticks that came due
        monitor.poll(Instant::now(), &mut counters);
    }
}

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::app::App;
use crate::config::Config;
use crate::net::counters::CounterSource;
use crate::net::monitor::{Mode, Monitor};

/// Handle a single key input event.
pub fn handle_key(app: &mut App, monitor: &mut Monitor, source: &mut dyn CounterSource, key: KeyEvent) {
    match key.code {
        // ── Quit ──
        KeyCode::F(10) | KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }

        // ── Drop-down toggle ──
        KeyCode::Char('m') | KeyCode::Enter | KeyCode::Char(' ') => {
            toggle_menu(app, monitor, source);
        }
        KeyCode::Esc => {
            if app.menu_open {
                close_menu(app, monitor);
            }
        }

        // ── Mode selection ──
        KeyCode::Char('p') | KeyCode::Char('1') => select_mode(app, monitor, source, Mode::Paused),
        KeyCode::Char('c') | KeyCode::Char('2') => {
            select_mode(app, monitor, source, Mode::Continuous)
        }
        KeyCode::Char('o') | KeyCode::Char('3') => select_mode(app, monitor, source, Mode::OnDemand),

        // ── Color scheme ──
        KeyCode::Char('t') => {
            app.cycle_color_scheme();
            save_config(app, monitor);
        }

        _ => {}
    }
}

/// Handle a mouse event: clicking the status line toggles the drop-down.
pub fn handle_mouse(
    app: &mut App,
    monitor: &mut Monitor,
    source: &mut dyn CounterSource,
    mouse: MouseEvent,
) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        if mouse.row == 0 {
            toggle_menu(app, monitor, source);
        }
    }
}

fn toggle_menu(app: &mut App, monitor: &mut Monitor, source: &mut dyn CounterSource) {
    if app.menu_open {
        close_menu(app, monitor);
    } else {
        app.menu_open = true;
        monitor.menu_opened(Instant::now(), source);
    }
}

fn close_menu(app: &mut App, monitor: &mut Monitor) {
    app.menu_open = false;
    monitor.menu_closed();
}

/// Apply a mode selection. A native menu dismisses when an item is
/// clicked, so an open drop-down closes before the transition runs.
fn select_mode(app: &mut App, monitor: &mut Monitor, source: &mut dyn CounterSource, mode: Mode) {
    if app.menu_open {
        close_menu(app, monitor);
    }
    monitor.set_mode(mode, Instant::now(), source);
    save_config(app, monitor);
}

/// Persist the current selection; a failed write only costs the saved
/// state for next launch.
fn save_config(app: &App, monitor: &Monitor) {
    let _ = Config {
        mode: monitor.mode(),
        color_scheme_id: app.color_scheme_id,
    }
    .save();
}

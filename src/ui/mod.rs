pub mod footer;
pub mod menu;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use crate::app::App;
use crate::net::monitor::Monitor;

/// Render the complete UI
pub fn draw(f: &mut Frame, app: &App, monitor: &Monitor) {
    let size = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // status bar
            Constraint::Min(0),    // body (drop-down overlays here)
            Constraint::Length(1), // footer key bar
        ])
        .split(size);

    status_bar::draw_status_bar(f, app, monitor, chunks[0]);
    footer::draw_footer(f, app, chunks[2]);

    if app.menu_open {
        menu::draw_menu(f, app, monitor, chunks[1]);
    }
}

use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::net::history::HISTORY_CAPACITY;
use crate::net::monitor::{Mode, Monitor};
use crate::net::rate::EMPTY_ROW;

const MENU_WIDTH: u16 = 42;

/// Draw the drop-down panel: rolling history newest-first, then the
/// mode items with the current one marked.
pub fn draw_menu(f: &mut Frame, app: &App, monitor: &Monitor, area: Rect) {
    let cs = &app.color_scheme;

    // Rows + separator + 3 mode items + hint + borders
    let inner_height = HISTORY_CAPACITY as u16 + 1 + 3 + 1;
    let menu_area = anchored_rect(area, MENU_WIDTH, inner_height + 2);
    f.render_widget(Clear, menu_area);

    let mut lines: Vec<Line> = Vec::new();

    for row in monitor.history_rows(HISTORY_CAPACITY) {
        let style = if row == EMPTY_ROW {
            Style::default().fg(cs.menu_empty_row)
        } else {
            Style::default().fg(cs.menu_row)
        };
        lines.push(Line::from(Span::styled(format!("  {}", row), style)));
    }

    lines.push(Line::from(Span::styled(
        "─".repeat(MENU_WIDTH.saturating_sub(2) as usize),
        Style::default().fg(cs.menu_border),
    )));

    for (key, mode) in [('p', Mode::Paused), ('c', Mode::Continuous), ('o', Mode::OnDemand)] {
        let is_current = monitor.mode() == mode;
        let marker = if is_current { "●" } else { " " };
        let label = format!("  {} {} {}", marker, key, mode.label());
        let style = if is_current {
            cs.mode_current_style()
        } else {
            Style::default().fg(cs.menu_row)
        };
        lines.push(Line::from(Span::styled(label, style)));
    }

    lines.push(Line::from(Span::styled(
        " m Close  t Theme  q Quit ",
        Style::default().fg(cs.menu_hint),
    )));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Traffic — last 20s ")
            .title_alignment(Alignment::Center)
            .title_style(Style::default().fg(cs.menu_title))
            .border_style(Style::default().fg(cs.menu_border)),
    );

    f.render_widget(paragraph, menu_area);
}

/// Anchor the drop-down under the status bar, clamped to the frame.
fn anchored_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    Rect {
        x,
        y: area.y,
        width,
        height,
    }
}

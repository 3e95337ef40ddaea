use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::net::monitor::Monitor;

/// Draw the one-line status bar: centered throughput title, current
/// mode tag on the right.
pub fn draw_status_bar(f: &mut Frame, app: &App, monitor: &Monitor, area: Rect) {
    let cs = &app.color_scheme;

    // Full-width background first
    let bg_fill = " ".repeat(area.width as usize);
    f.render_widget(
        Paragraph::new(bg_fill).style(Style::default().bg(cs.bar_bg)),
        area,
    );

    let title = monitor.current_title();
    let mode_tag = format!("[{}] ", monitor.mode().label());

    // Center the title by display width; the arrows and no-break fill
    // are not one byte per column.
    let title_width = UnicodeWidthStr::width(title);
    let left_pad = (area.width as usize).saturating_sub(title_width) / 2;

    let line = Line::from(vec![
        Span::raw(" ".repeat(left_pad)),
        Span::styled(
            title.to_string(),
            Style::default()
                .fg(cs.bar_title)
                .bg(cs.bar_bg)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);

    // Mode tag, right-aligned over the same row
    let tag_width = mode_tag.len() as u16;
    if area.width > tag_width {
        let tag_area = Rect {
            x: area.x + area.width - tag_width,
            y: area.y,
            width: tag_width,
            height: 1,
        };
        f.render_widget(
            Paragraph::new(mode_tag).style(Style::default().fg(cs.bar_mode_tag).bg(cs.bar_bg)),
            tag_area,
        );
    }
}

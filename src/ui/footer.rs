use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;

/// Key definitions: (key_label, description)
const KEYS: &[(&str, &str)] = &[
    ("m", "Menu  "),
    ("p", "Pause "),
    ("c", "Cont  "),
    ("o", "OnDem "),
    ("t", "Theme "),
    ("q", "Quit  "),
];

/// Draw the bottom key bar (htop-style: key label on a colored block,
/// description beside it)
pub fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let cs = &app.color_scheme;

    // Full-width background first
    let bg_fill = " ".repeat(area.width as usize);
    f.render_widget(
        Paragraph::new(bg_fill).style(Style::default().bg(cs.footer_desc_bg)),
        area,
    );

    let mut spans: Vec<Span> = Vec::new();
    for (key, desc) in KEYS {
        spans.push(Span::styled(
            key.to_string(),
            Style::default()
                .fg(cs.footer_key_fg)
                .bg(cs.footer_key_bg)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            desc.to_string(),
            Style::default().fg(cs.footer_desc_fg).bg(cs.footer_desc_bg),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

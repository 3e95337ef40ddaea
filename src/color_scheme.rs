use ratatui::style::{Color, Modifier, Style};

/// Available color scheme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSchemeId {
    Default = 0,
    Monochrome = 1,
    LightTerminal = 2,
    DarkVivid = 3,
}

impl ColorSchemeId {
    pub fn all() -> &'static [ColorSchemeId] {
        &[
            ColorSchemeId::Default,
            ColorSchemeId::Monochrome,
            ColorSchemeId::LightTerminal,
            ColorSchemeId::DarkVivid,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ColorSchemeId::Default => "Default",
            ColorSchemeId::Monochrome => "Monochrome",
            ColorSchemeId::LightTerminal => "Light Terminal",
            ColorSchemeId::DarkVivid => "Dark Vivid",
        }
    }

    pub fn from_index(idx: usize) -> Self {
        match idx {
            1 => ColorSchemeId::Monochrome,
            2 => ColorSchemeId::LightTerminal,
            3 => ColorSchemeId::DarkVivid,
            _ => ColorSchemeId::Default,
        }
    }

    /// Next scheme in cycle order (wraps around)
    pub fn next(&self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|s| s == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }
}

/// All configurable color slots used across the app
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Status bar
    pub bar_bg: Color,
    pub bar_title: Color,
    pub bar_mode_tag: Color,

    // Drop-down panel
    pub menu_border: Color,
    pub menu_title: Color,
    pub menu_row: Color,
    pub menu_empty_row: Color,
    pub mode_current: Color,
    pub menu_hint: Color,

    // Footer key bar
    pub footer_key_fg: Color,
    pub footer_key_bg: Color,
    pub footer_desc_fg: Color,
    pub footer_desc_bg: Color,
}

impl ColorScheme {
    pub fn from_id(id: ColorSchemeId) -> Self {
        match id {
            ColorSchemeId::Default => Self {
                bar_bg: Color::Indexed(234),
                bar_title: Color::Cyan,
                bar_mode_tag: Color::DarkGray,
                menu_border: Color::Cyan,
                menu_title: Color::White,
                menu_row: Color::White,
                menu_empty_row: Color::DarkGray,
                mode_current: Color::Green,
                menu_hint: Color::DarkGray,
                footer_key_fg: Color::Black,
                footer_key_bg: Color::Cyan,
                footer_desc_fg: Color::Indexed(252),
                footer_desc_bg: Color::Indexed(234),
            },
            ColorSchemeId::Monochrome => Self {
                bar_bg: Color::Black,
                bar_title: Color::White,
                bar_mode_tag: Color::Gray,
                menu_border: Color::White,
                menu_title: Color::White,
                menu_row: Color::White,
                menu_empty_row: Color::Gray,
                mode_current: Color::White,
                menu_hint: Color::Gray,
                footer_key_fg: Color::Black,
                footer_key_bg: Color::White,
                footer_desc_fg: Color::White,
                footer_desc_bg: Color::Black,
            },
            ColorSchemeId::LightTerminal => Self {
                bar_bg: Color::White,
                bar_title: Color::Blue,
                bar_mode_tag: Color::Gray,
                menu_border: Color::Blue,
                menu_title: Color::Black,
                menu_row: Color::Black,
                menu_empty_row: Color::Gray,
                mode_current: Color::Green,
                menu_hint: Color::Gray,
                footer_key_fg: Color::White,
                footer_key_bg: Color::Blue,
                footer_desc_fg: Color::Black,
                footer_desc_bg: Color::White,
            },
            ColorSchemeId::DarkVivid => Self {
                bar_bg: Color::Indexed(233),
                bar_title: Color::LightMagenta,
                bar_mode_tag: Color::Indexed(244),
                menu_border: Color::LightMagenta,
                menu_title: Color::LightCyan,
                menu_row: Color::LightCyan,
                menu_empty_row: Color::Indexed(240),
                mode_current: Color::LightGreen,
                menu_hint: Color::Indexed(244),
                footer_key_fg: Color::Black,
                footer_key_bg: Color::LightMagenta,
                footer_desc_fg: Color::Indexed(252),
                footer_desc_bg: Color::Indexed(233),
            },
        }
    }

    /// Style for the current-mode marker in the drop-down
    pub fn mode_current_style(&self) -> Style {
        Style::default()
            .fg(self.mode_current)
            .add_modifier(Modifier::BOLD)
    }
}

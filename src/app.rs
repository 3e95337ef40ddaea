use crate::color_scheme::{ColorScheme, ColorSchemeId};
use crate::config::Config;

/// UI-side application state. Sampling state lives in
/// [`crate::net::monitor::Monitor`]; this tracks what the terminal
/// chrome needs between frames.
pub struct App {
    pub should_quit: bool,
    /// Whether the drop-down history panel is showing. Toggling this is
    /// what drives the monitor's menu open/close triggers.
    pub menu_open: bool,

    // Color scheme
    pub color_scheme_id: ColorSchemeId,
    pub color_scheme: ColorScheme,
}

impl App {
    pub fn new(cfg: &Config) -> Self {
        Self {
            should_quit: false,
            menu_open: false,
            color_scheme_id: cfg.color_scheme_id,
            color_scheme: ColorScheme::from_id(cfg.color_scheme_id),
        }
    }

    /// Cycle to the next color scheme
    pub fn cycle_color_scheme(&mut self) {
        self.color_scheme_id = self.color_scheme_id.next();
        self.color_scheme = ColorScheme::from_id(self.color_scheme_id);
    }
}

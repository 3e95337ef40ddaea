//! netbar configuration persistence (htoprc-style key=value format)
//!
//! Saves/loads settings to `$XDG_CONFIG_HOME/netbar/netbarrc`
//! (falling back to `$HOME/.config/netbar/netbarrc`).

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::color_scheme::ColorSchemeId;
use crate::net::monitor::Mode;

/// Get the config file path
fn config_path() -> Option<PathBuf> {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| std::env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;
    Some(base.join("netbar").join("netbarrc"))
}

/// Persistable settings (subset of App/Monitor state)
pub struct Config {
    pub mode: Mode,
    pub color_scheme_id: ColorSchemeId,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::Continuous,
            color_scheme_id: ColorSchemeId::Default,
        }
    }
}

impl Config {
    /// Load config from file, returning defaults if file doesn't exist
    pub fn load() -> Self {
        let path = match config_path() {
            Some(p) => p,
            None => return Self::default(),
        };

        match fs::read_to_string(&path) {
            Ok(content) => Self::parse(&content),
            Err(_) => Self::default(),
        }
    }

    fn parse(content: &str) -> Self {
        let mut cfg = Self::default();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                let value = value.trim();
                match key {
                    "mode" => {
                        if let Ok(idx) = value.parse::<usize>() {
                            cfg.mode = Mode::from_index(idx);
                        }
                    }
                    "color_scheme" => {
                        if let Ok(idx) = value.parse::<usize>() {
                            cfg.color_scheme_id = ColorSchemeId::from_index(idx);
                        }
                    }
                    _ => {} // Ignore unknown keys
                }
            }
        }

        cfg
    }

    fn render(&self) -> String {
        let lines = [
            "# netbar configuration file".to_string(),
            "# Auto-generated — do not edit while netbar is running".to_string(),
            String::new(),
            format!("mode={}", self.mode.index()),
            format!("color_scheme={}", self.color_scheme_id as usize),
        ];
        lines.join("\n") + "\n"
    }

    /// Save config to file
    pub fn save(&self) -> Result<(), String> {
        let path = match config_path() {
            Some(p) => p,
            None => return Err("Could not determine config path".into()),
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| format!("Failed to create config dir: {}", e))?;
        }

        let mut file =
            fs::File::create(&path).map_err(|e| format!("Failed to create config file: {}", e))?;
        file.write_all(self.render().as_bytes())
            .map_err(|e| format!("Failed to write config file: {}", e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reads_known_keys() {
        let cfg = Config::parse("mode=2\ncolor_scheme=1\n");
        assert_eq!(cfg.mode, Mode::OnDemand);
        assert_eq!(cfg.color_scheme_id, ColorSchemeId::Monochrome);
    }

    #[test]
    fn parse_ignores_comments_blanks_and_unknown_keys() {
        let cfg = Config::parse("# comment\n\nnot_a_key=5\nmode=0\n");
        assert_eq!(cfg.mode, Mode::Paused);
        assert_eq!(cfg.color_scheme_id, ColorSchemeId::Default);
    }

    #[test]
    fn parse_falls_back_on_garbage_values() {
        let cfg = Config::parse("mode=banana\ncolor_scheme=\n");
        assert_eq!(cfg.mode, Mode::Continuous);
        assert_eq!(cfg.color_scheme_id, ColorSchemeId::Default);
    }

    #[test]
    fn render_parse_round_trip() {
        let cfg = Config {
            mode: Mode::OnDemand,
            color_scheme_id: ColorSchemeId::DarkVivid,
        };
        let reparsed = Config::parse(&cfg.render());
        assert_eq!(reparsed.mode, Mode::OnDemand);
        assert_eq!(reparsed.color_scheme_id, ColorSchemeId::DarkVivid);
    }
}

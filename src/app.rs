use crate::config::Config;
use crate::ui::{banner, Palette};
use crate::wrap::WrapMode;

/// Everything a command needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
    pub palette: Palette,
    pub terminal_width: u16,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let palette = Palette::resolve(config.color);
        let terminal_width = banner::terminal_width(config.terminal_width);
        Self {
            config,
            palette,
            terminal_width,
        }
    }

    /// State with explicit styling and width, independent of the real terminal.
    pub fn detached(config: Config, palette: Palette, terminal_width: u16) -> Self {
        Self {
            config,
            palette,
            terminal_width,
        }
    }

    pub fn wrap_mode(&self, compat_flag: bool) -> WrapMode {
        if compat_flag || self.config.wrap_compat {
            WrapMode::Compat
        } else {
            WrapMode::Guarded
        }
    }
}

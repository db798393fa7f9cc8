//! ANSI escape formatting

use serde::{Deserialize, Serialize};

use super::Rgb;

pub const ESCAPE: &str = "\x1b";
pub const RESET: &str = "\x1b[0m";

/// SGR parameter selecting a true-color foreground
pub const CODE_FOREGROUND: u8 = 38;
/// SGR parameter selecting a true-color background
pub const CODE_BACKGROUND: u8 = 48;

/// The eight standard terminal colors
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnsiColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl AnsiColor {
    pub fn code(self) -> u8 {
        match self {
            AnsiColor::Black => 0,
            AnsiColor::Red => 1,
            AnsiColor::Green => 2,
            AnsiColor::Yellow => 3,
            AnsiColor::Blue => 4,
            AnsiColor::Magenta => 5,
            AnsiColor::Cyan => 6,
            AnsiColor::White => 7,
        }
    }

    /// Foreground escape sequence, e.g. `ESC[34m` for blue
    pub fn escape(self) -> String {
        format!("{ESCAPE}[3{}m", self.code())
    }
}

/// Wraps `s` in a standard foreground color
pub fn colored(s: &str, color: AnsiColor) -> String {
    format!("{}{s}{RESET}", color.escape())
}

/// True-color escape sequence for `specifier` (foreground or background)
pub fn true_color(color: Rgb, specifier: u8) -> String {
    format!(
        "{ESCAPE}[{specifier};2;{};{};{}m",
        color.r, color.g, color.b
    )
}

/// Wraps `s` in a true-color foreground
pub fn true_colored(s: &str, color: Rgb) -> String {
    format!("{}{s}{RESET}", true_color(color, CODE_FOREGROUND))
}

/// Applies colors, or passes text through untouched when disabled
#[derive(Clone, Copy, Debug)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Enabled unless `no_color` is set or `NO_COLOR` was given a value
    pub fn from_env(no_color: bool, no_color_env: Option<&str>) -> Self {
        let env_disabled = no_color_env.is_some_and(|v| !v.is_empty());
        Self::new(!no_color && !env_disabled)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn paint(&self, s: &str, color: AnsiColor) -> String {
        if self.enabled {
            colored(s, color)
        } else {
            s.to_string()
        }
    }

    pub fn paint_rgb(&self, s: &str, color: Rgb) -> String {
        if self.enabled {
            true_colored(s, color)
        } else {
            s.to_string()
        }
    }
}

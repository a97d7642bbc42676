//! Light/dark colour themes for terminal output

use console::{Color, Style};
use serde::{Deserialize, Serialize};

use crate::error::{PwToolkitError, Result};
use crate::types::ScoreBucket;
use crate::validation_error;

/// Colour theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Style table for one theme. Colours are `#rrggbb` strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub label: &'static str,
    pub accent: &'static str,
    pub footer: &'static str,
}

const LIGHT: Palette = Palette {
    label: "#333333",
    accent: "#4caf50",
    footer: "#888888",
};

const DARK: Palette = Palette {
    label: "#f0f0f0",
    accent: "#2196f3",
    footer: "#999999",
};

impl Theme {
    pub fn palette(&self) -> &'static Palette {
        match self {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }

    /// The other theme
    pub fn toggle(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Label for the control that switches away from this theme
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Light => "☾  Dark Mode",
            Theme::Dark => "☀  Light Mode",
        }
    }

    /// Style for headings and labels
    pub fn label_style(&self) -> Style {
        hex_style(self.palette().label).bold()
    }

    /// Style for success messages and highlighted values
    pub fn accent_style(&self) -> Style {
        hex_style(self.palette().accent)
    }

    pub fn footer_style(&self) -> Style {
        hex_style(self.palette().footer).dim()
    }

    /// Style for a score line, coloured by bucket
    pub fn score_style(&self, bucket: ScoreBucket) -> Style {
        hex_style(bucket.color()).bold()
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = PwToolkitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(validation_error!(
                "Unknown theme '{}'. Supported themes: light, dark",
                other
            )),
        }
    }
}

fn hex_style(hex: &str) -> Style {
    match ansi256(hex) {
        Some(code) => Style::new().fg(Color::Color256(code)),
        None => Style::new(),
    }
}

/// Nearest xterm-256 colour cube index for a `#rrggbb` colour
pub fn ansi256(hex: &str) -> Option<u8> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| -> Option<u8> { u8::from_str_radix(hex.get(i..i + 2)?, 16).ok() };
    let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);

    // Cube levels are 0, 95, 135, 175, 215, 255
    let level = |v: u8| -> u8 {
        if v < 48 {
            0
        } else if v < 115 {
            1
        } else {
            (v - 35) / 40
        }
    };

    Some(16 + 36 * level(r) + 6 * level(g) + level(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle().toggle(), Theme::Dark);
        assert_eq!(Theme::default(), Theme::Light);
        assert!(Theme::Light.toggle_label().contains("Dark"));
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Theme::Light.palette(), Theme::Dark.palette());
        assert_eq!(Theme::Dark.palette().accent, "#2196f3");
        assert_eq!(Theme::Light.palette().label, "#333333");
    }

    #[test]
    fn test_parse_theme() {
        assert_eq!("Dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!(" light ".parse::<Theme>().unwrap(), Theme::Light);
        let err = "solarized".parse::<Theme>().unwrap_err();
        assert!(matches!(err, PwToolkitError::Validation { .. }));
        assert!(err.to_string().contains("solarized"));
    }

    #[test]
    fn test_ansi256() {
        assert_eq!(ansi256("#000000"), Some(16));
        assert_eq!(ansi256("#ffffff"), Some(231));
        assert_eq!(ansi256("#ff0000"), Some(196));
        assert_eq!(ansi256("ff0000"), None);
        assert_eq!(ansi256("#fff"), None);
        assert_eq!(ansi256("#zzzzzz"), None);
    }
}

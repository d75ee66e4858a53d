use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Light or dark rendering, toggled at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Self::Dark => &DARK,
            Self::Light => &LIGHT,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub accent: Color,
    pub status_ok: Color,
    pub status_error: Color,
    pub card: Color,
    pub highlight: Color,
}

pub const DARK: Palette = Palette {
    background: Color::Rgb(0x17, 0x17, 0x17),
    text: Color::Rgb(0xe5, 0xe5, 0xe5),
    muted: Color::Rgb(0x9c, 0xa3, 0xaf),
    border: Color::Rgb(0x40, 0x40, 0x40),
    accent: Color::Rgb(0x60, 0xa5, 0xfa),
    status_ok: Color::Rgb(0x22, 0xc5, 0x5e),
    status_error: Color::Rgb(0xef, 0x44, 0x44),
    card: Color::Rgb(0x26, 0x26, 0x26),
    highlight: Color::Rgb(0x1e, 0x3a, 0x8a),
};

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(0xfa, 0xfa, 0xfa),
    text: Color::Rgb(0x17, 0x17, 0x17),
    muted: Color::Rgb(0x6b, 0x72, 0x80),
    border: Color::Rgb(0xd4, 0xd4, 0xd4),
    accent: Color::Rgb(0x19, 0x76, 0xd2),
    status_ok: Color::Rgb(0x15, 0x80, 0x3d),
    status_error: Color::Rgb(0xb9, 0x1c, 0x1c),
    card: Color::Rgb(0xf0, 0xf0, 0xf0),
    highlight: Color::Rgb(0xbf, 0xdb, 0xfe),
};

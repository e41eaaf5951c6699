#[cfg(test)]
#[path = "theme_test.rs"]
mod tests;

use ratatui::style::Color;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;

#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ThemeName {
    Light,
    Dark,
}

impl ThemeName {
    pub fn parse(text: &str) -> Option<ThemeName> {
        return ThemeName::iter().find(|e| return e.to_string() == text);
    }

    pub fn toggle(self) -> ThemeName {
        match self {
            ThemeName::Light => return ThemeName::Dark,
            ThemeName::Dark => return ThemeName::Light,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: ThemeName,
    pub background: Color,
    pub foreground: Color,
    pub user: Color,
    pub bot: Color,
    pub error: Color,
    pub muted: Color,
    pub progress: Color,
}

impl Theme {
    pub fn new(name: ThemeName) -> Theme {
        match name {
            ThemeName::Dark => {
                return Theme {
                    name,
                    background: Color::Rgb(30, 32, 40),
                    foreground: Color::Rgb(220, 223, 228),
                    user: Color::Rgb(97, 175, 239),
                    bot: Color::Rgb(152, 195, 121),
                    error: Color::Rgb(224, 108, 117),
                    muted: Color::Rgb(92, 99, 112),
                    progress: Color::Rgb(229, 192, 123),
                };
            }
            ThemeName::Light => {
                return Theme {
                    name,
                    background: Color::Rgb(250, 250, 250),
                    foreground: Color::Rgb(56, 58, 66),
                    user: Color::Rgb(64, 120, 242),
                    bot: Color::Rgb(80, 161, 79),
                    error: Color::Rgb(228, 86, 73),
                    muted: Color::Rgb(160, 161, 167),
                    progress: Color::Rgb(193, 132, 1),
                };
            }
        }
    }

    /// Falls back to dark for unknown names.
    pub fn from_config(value: &str) -> Theme {
        return Theme::new(ThemeName::parse(value).unwrap_or(ThemeName::Dark));
    }

    pub fn toggled(&self) -> Theme {
        return Theme::new(self.name.toggle());
    }
}

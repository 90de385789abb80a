//! Theme table for Fieldwork components.
//!
//! Every component resolves its colors through a [`Palette`] selected by
//! [`ThemeName`]. Lookup is infallible: each variant maps to a static
//! palette, so a valid theme can never produce a missing color token.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Selector for one of the built-in color palettes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum ThemeName {
    /// Bright surfaces, dark text.
    #[default]
    Light,
    /// Deep blue surfaces.
    Dark,
    /// True-black surfaces (OLED friendly).
    Black,
}

/// Color tokens consumed by the form components.
///
/// Values are CSS colors (hex strings) applied inline, so a component can
/// switch palettes per render without regenerating any stylesheet.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Palette {
    /// Labels, headings, and entered text.
    pub title_text: &'static str,
    /// Regular copy; also tints the loading spinner.
    pub body_text: &'static str,
    /// Decorative icons and placeholder text.
    pub auxiliary_text: &'static str,
    /// Interactive accessory tint (e.g. the clear-input control).
    pub auxiliary_tint: &'static str,
    /// Field background.
    pub background: &'static str,
    /// Field borders and separators.
    pub separator: &'static str,
    /// Error tinting for borders, text, and messages.
    pub danger: &'static str,
}

/// Light palette.
pub const LIGHT: Palette = Palette {
    title_text: "#0d0e12",
    body_text: "#2f343d",
    auxiliary_text: "#9ca2a8",
    auxiliary_tint: "#6c727a",
    background: "#ffffff",
    separator: "#cbced1",
    danger: "#f5455c",
};

/// Dark palette.
pub const DARK: Palette = Palette {
    title_text: "#f3f4f5",
    body_text: "#e4e7ea",
    auxiliary_text: "#9297a2",
    auxiliary_tint: "#b2b8c6",
    background: "#0e1f38",
    separator: "#32405a",
    danger: "#f5455c",
};

/// Black palette.
pub const BLACK: Palette = Palette {
    title_text: "#f5f5f5",
    body_text: "#e8ebed",
    auxiliary_text: "#7e8792",
    auxiliary_tint: "#b2b8c6",
    background: "#000000",
    separator: "#26282c",
    danger: "#f5455c",
};

impl ThemeName {
    /// Resolve the palette for this theme.
    pub fn palette(self) -> &'static Palette {
        match self {
            ThemeName::Light => &LIGHT,
            ThemeName::Dark => &DARK,
            ThemeName::Black => &BLACK,
        }
    }

    /// Identifier used in config files and `data-theme` attributes.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeName::Light => "light",
            ThemeName::Dark => "dark",
            ThemeName::Black => "black",
        }
    }

    /// All selectable themes, in display order.
    pub fn all() -> &'static [ThemeName] {
        &[ThemeName::Light, ThemeName::Dark, ThemeName::Black]
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized theme identifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme '{0}', expected one of: light, dark, black")]
pub struct ParseThemeError(pub String);

impl FromStr for ThemeName {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeName::Light),
            "dark" => Ok(ThemeName::Dark),
            "black" => Ok(ThemeName::Black),
            _ => Err(ParseThemeError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_light() {
        assert_eq!(ThemeName::default(), ThemeName::Light);
    }

    #[test]
    fn every_theme_resolves_a_palette() {
        for theme in ThemeName::all() {
            let palette = theme.palette();
            for token in [
                palette.title_text,
                palette.body_text,
                palette.auxiliary_text,
                palette.auxiliary_tint,
                palette.background,
                palette.separator,
                palette.danger,
            ] {
                assert!(token.starts_with('#'), "{theme}: token {token:?}");
                assert!(token.len() == 7, "{theme}: token {token:?}");
            }
        }
    }

    #[test]
    fn danger_is_distinct_from_separator() {
        for theme in ThemeName::all() {
            let palette = theme.palette();
            assert_ne!(palette.danger, palette.separator, "{theme}");
        }
    }

    #[test]
    fn identifier_round_trips() {
        for theme in ThemeName::all() {
            let parsed: ThemeName = theme.as_str().parse().unwrap();
            assert_eq!(parsed, *theme);
        }
        assert_eq!("DARK".parse::<ThemeName>().unwrap(), ThemeName::Dark);
    }

    #[test]
    fn unknown_identifier_is_an_error() {
        let err = "solarized".parse::<ThemeName>().unwrap_err();
        assert_eq!(err, ParseThemeError("solarized".to_string()));
        assert!(err.to_string().contains("solarized"));
    }
}

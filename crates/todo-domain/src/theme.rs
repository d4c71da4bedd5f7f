use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    /// `"light"` / `"dark"`, case-insensitive; anything else is unset
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Reads the background index from a `COLORFGBG` value such as `"15;0"`
    /// or `"12;default;0"`.
    pub fn from_colorfgbg(value: &str) -> Option<Self> {
        let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
        match bg {
            0..=6 | 8 => Some(Self::Dark),
            7 | 9..=15 => Some(Self::Light),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub text: Rgb,
    pub background: Rgb,
    pub icon: Rgb,
    pub button: Rgb,
}

const LIGHT_PALETTE: Palette = Palette {
    text: Rgb(0x11, 0x18, 0x1C),
    background: Rgb(0xFF, 0xFF, 0xFF),
    icon: Rgb(0x68, 0x70, 0x76),
    button: Rgb(0x0A, 0x7E, 0xA4),
};

const DARK_PALETTE: Palette = Palette {
    text: Rgb(0xEC, 0xED, 0xEE),
    background: Rgb(0x15, 0x17, 0x18),
    icon: Rgb(0x9B, 0xA1, 0xA6),
    button: Rgb(0xC3, 0xB1, 0xE1),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Only an explicit dark scheme selects the dark theme
    pub fn from_scheme(scheme: Option<ColorScheme>) -> Self {
        match scheme {
            Some(ColorScheme::Dark) => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Self::Light => &LIGHT_PALETTE,
            Self::Dark => &DARK_PALETTE,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Process-wide light/dark preference. Not persisted.
#[derive(Debug, Clone, Default)]
pub struct ThemeStore {
    scheme: Option<ColorScheme>,
}

impl ThemeStore {
    pub fn new(scheme: Option<ColorScheme>) -> Self {
        Self { scheme }
    }

    /// Initial preference: configured override, then the terminal's
    /// `COLORFGBG`, otherwise unset.
    pub fn detect(configured: Option<&str>) -> Self {
        let scheme = configured.and_then(ColorScheme::parse).or_else(|| {
            std::env::var("COLORFGBG")
                .ok()
                .and_then(|v| ColorScheme::from_colorfgbg(&v))
        });
        tracing::debug!(
            "Initial color scheme: {}",
            scheme.map_or("unset", ColorScheme::as_str)
        );
        Self::new(scheme)
    }

    pub fn scheme(&self) -> Option<ColorScheme> {
        self.scheme
    }

    /// Light becomes dark; dark or unset becomes light
    pub fn toggle(&mut self) {
        self.scheme = Some(match self.scheme {
            Some(ColorScheme::Light) => ColorScheme::Dark,
            _ => ColorScheme::Light,
        });
    }

    pub fn theme(&self) -> Theme {
        Theme::from_scheme(self.scheme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_dark_selects_dark_palette() {
        assert_eq!(
            Theme::from_scheme(Some(ColorScheme::Dark)).palette(),
            &DARK_PALETTE
        );
        assert_eq!(
            Theme::from_scheme(Some(ColorScheme::Light)).palette(),
            &LIGHT_PALETTE
        );
        assert_eq!(Theme::from_scheme(None).palette(), &LIGHT_PALETTE);
    }

    #[test]
    fn test_parse_scheme() {
        assert_eq!(ColorScheme::parse("dark"), Some(ColorScheme::Dark));
        assert_eq!(ColorScheme::parse(" Light "), Some(ColorScheme::Light));
        assert_eq!(ColorScheme::parse("no-preference"), None);
        assert_eq!(ColorScheme::parse(""), None);
    }

    #[test]
    fn test_colorfgbg() {
        assert_eq!(ColorScheme::from_colorfgbg("15;0"), Some(ColorScheme::Dark));
        assert_eq!(ColorScheme::from_colorfgbg("0;15"), Some(ColorScheme::Light));
        assert_eq!(
            ColorScheme::from_colorfgbg("12;default;7"),
            Some(ColorScheme::Light)
        );
        assert_eq!(ColorScheme::from_colorfgbg("default"), None);
        assert_eq!(ColorScheme::from_colorfgbg("0;200"), None);
    }

    #[test]
    fn test_toggle_from_unset_goes_light() {
        let mut store = ThemeStore::new(None);
        assert_eq!(store.theme(), Theme::Light);

        store.toggle();
        assert_eq!(store.scheme(), Some(ColorScheme::Light));

        store.toggle();
        assert_eq!(store.scheme(), Some(ColorScheme::Dark));
        assert!(store.theme().is_dark());

        store.toggle();
        assert_eq!(store.scheme(), Some(ColorScheme::Light));
    }

    #[test]
    fn test_configured_scheme_wins() {
        let store = ThemeStore::detect(Some("dark"));
        assert_eq!(store.scheme(), Some(ColorScheme::Dark));
    }
}

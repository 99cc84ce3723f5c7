//! ANSI colour for the bar ticks.  No external deps.

use std::fmt;

#[derive(Debug, PartialEq)]
pub enum ColorError {
    InvalidHexDigit,
    InvalidHexLength,
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::InvalidHexDigit => f.write_str("invalid hex colour digit"),
            ColorError::InvalidHexLength => f.write_str("hex colour must be exactly 6 digits"),
        }
    }
}
impl std::error::Error for ColorError {}

/// Foreground colour of the bars.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarColor {
    /// Standard 8-colour palette, SGR code 30–37.
    Basic(u8),
    /// True-colour `ESC[38;2;R;G;Bm`.
    Rgb(u8, u8, u8),
}

/// Accepted names, in palette order.
pub const COLOR_NAMES: [&str; 9] = [
    "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white", "orange",
];

const RESET: &str = "\x1b[0m";

impl BarColor {
    pub const fn industrial_orange() -> Self {
        Self::Rgb(210, 135, 10)
    }

    /// Parse a colour name or `#rrggbb`.  Falls back to the hex parser on a miss.
    pub fn from_name(s: &str) -> Result<Self, ColorError> {
        let name = s.trim().to_ascii_lowercase();
        if let Some((_, code)) = COLOR_NAMES[..8].iter().zip(30u8..).find(|(n, _)| **n == name) {
            return Ok(Self::Basic(code));
        }
        match name.as_str() {
            "orange" | "industrial" => Ok(Self::industrial_orange()),
            _ => Self::from_hex(s.trim()),
        }
    }

    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let h = hex.trim_start_matches('#');
        if h.len() != 6 || !h.is_ascii() {
            return Err(ColorError::InvalidHexLength);
        }
        let byte = |s: &str| u8::from_str_radix(s, 16).map_err(|_| ColorError::InvalidHexDigit);
        Ok(Self::Rgb(byte(&h[..2])?, byte(&h[2..4])?, byte(&h[4..])?))
    }

    /// Wrap `text` in this colour + reset sequence.
    #[must_use]
    pub fn paint(&self, text: &str) -> String {
        format!("{self}{text}{RESET}")
    }
}

impl fmt::Display for BarColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic(code) => write!(f, "\x1b[{code}m"),
            Self::Rgb(r, g, b) => write!(f, "\x1b[38;2;{r};{g};{b}m"),
        }
    }
}

impl std::str::FromStr for BarColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

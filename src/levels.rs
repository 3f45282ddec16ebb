use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{DEFAULT_DRAW_KEY, DEFAULT_NEW_LEVEL_COLOR};

/// An opaque 24-bit color stored as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub fn from_array(rgb: [u8; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }
}

impl Default for Rgb {
    fn default() -> Self {
        DEFAULT_NEW_LEVEL_COLOR
            .parse()
            .unwrap_or(Rgb::new(0xff, 0xff, 0xff))
    }
}

impl FromStr for Rgb {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| format!("color must start with '#': {s:?}"))?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("color must be #RRGGBB: {s:?}"));
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| e.to_string());
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_string()
    }
}

/// The single alphanumeric character that arms line drawing while held.
///
/// Always stored lowercase. Serialized as a one-character string; an empty
/// string falls back to [`DEFAULT_DRAW_KEY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DrawKey(char);

impl DrawKey {
    /// Build a key from edit-control text. Returns `None` when the text is
    /// longer than one character or not alphanumeric.
    pub fn from_input(text: &str) -> Option<Self> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Some(Self::default()),
            (Some(c), None) if c.is_alphanumeric() => Some(Self(lowercase_char(c))),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        self.0
    }

    pub fn matches(self, c: char) -> bool {
        self.0 == lowercase_char(c)
    }
}

impl Default for DrawKey {
    fn default() -> Self {
        Self(DEFAULT_DRAW_KEY)
    }
}

impl fmt::Display for DrawKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for DrawKey {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_input(&value)
            .ok_or_else(|| format!("draw key must be a single alphanumeric character: {value:?}"))
    }
}

impl From<DrawKey> for String {
    fn from(value: DrawKey) -> Self {
        value.0.to_string()
    }
}

pub(crate) fn lowercase_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// One retracement ratio. Identity is positional; duplicates are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub level: f64,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub color: Rgb,
}

impl Level {
    pub fn new(level: f64, enabled: bool, color: Rgb) -> Self {
        Self {
            level,
            enabled,
            color,
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::new(0.0, true, Rgb::default())
    }
}

fn default_enabled() -> bool {
    true
}

pub fn default_levels() -> Vec<Level> {
    vec![
        Level::new(0.0, true, Rgb::new(0x80, 0x80, 0x80)),
        Level::new(0.214, true, Rgb::new(0xff, 0x00, 0x00)),
        Level::new(0.256, true, Rgb::new(0xad, 0xff, 0x2f)),
        Level::new(0.382, true, Rgb::new(0x00, 0xff, 0x00)),
        Level::new(0.5, true, Rgb::new(0x20, 0xb2, 0xaa)),
        Level::new(0.786, false, Rgb::new(0x00, 0x00, 0x8b)),
        Level::new(1.0, true, Rgb::new(0x80, 0x80, 0x80)),
        Level::new(1.618, false, Rgb::new(0x4b, 0x00, 0x82)),
    ]
}

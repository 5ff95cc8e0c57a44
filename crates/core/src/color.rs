//! Color decomposition and the warmth heuristic.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Colors scoring below this are flagged as not warm enough.
pub const WARMTH_THRESHOLD: f64 = 0.3;

/// An 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Decompose a `#RRGGBB` (or bare `RRGGBB`) literal into channels.
    pub fn from_hex(input: &str) -> Result<Self, CoreError> {
        let hex = input.strip_prefix('#').unwrap_or(input);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(CoreError::InvalidColorFormat(format!(
                "'{input}' is not a #RRGGBB hex color"
            )));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| CoreError::InvalidColorFormat(format!("'{input}'")))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// `(R + 0.8·G) / (R + G + B + 1)`: higher means redder / more yellow.
    pub fn warmth_score(self) -> f64 {
        let (r, g, b) = (f64::from(self.r), f64::from(self.g), f64::from(self.b));
        (r + g * 0.8) / (r + g + b + 1.0)
    }

    pub fn is_warm(self) -> bool {
        self.warmth_score() >= WARMTH_THRESHOLD
    }
}

/// Whether a CSS literal (shadow, border, ...) references pure black.
///
/// Recognises `#000`, `#000000`, `#000000xx`, `rgb(0,0,0)` and
/// `rgba(0,0,0,...)`. Whitespace inside the functional forms is ignored.
pub fn references_pure_black(literal: &str) -> bool {
    let compact: String = literal
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();

    if compact.contains("rgba(0,0,0,") || compact.contains("rgb(0,0,0)") {
        return true;
    }

    compact.match_indices('#').any(|(idx, _)| {
        let digits: String = compact[idx + 1..]
            .chars()
            .take_while(char::is_ascii_hexdigit)
            .collect();
        match digits.len() {
            3 | 6 => digits.bytes().all(|b| b == b'0'),
            8 => digits[..6].bytes().all(|b| b == b'0'),
            _ => false,
        }
    })
}

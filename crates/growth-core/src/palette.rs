// File: crates/growth-core/src/palette.rs
// Summary: RGB colors and the per-category ordered palettes.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::store::Category;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self { Self { r, g, b } }

    /// Build from a packed `0xRRGGBB` literal.
    pub const fn from_hex(v: u32) -> Self {
        Self { r: (v >> 16) as u8, g: (v >> 8) as u8, b: v as u8 }
    }

    pub const fn to_argb(self, alpha: u8) -> (u8, u8, u8, u8) { (alpha, self.r, self.g, self.b) }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid color '{0}', expected #rrggbb")]
pub struct ParseColorError(pub String);

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseColorError(s.to_string()));
        }
        u32::from_str_radix(hex, 16)
            .map(Rgb::from_hex)
            .map_err(|_| ParseColorError(s.to_string()))
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

const HARDWARE: [Rgb; 10] = [
    Rgb::from_hex(0xff7f0e),
    Rgb::from_hex(0x1f77b4),
    Rgb::from_hex(0x17becf),
    Rgb::from_hex(0xd62728),
    Rgb::from_hex(0x2ca02c),
    Rgb::from_hex(0x9467bd),
    Rgb::from_hex(0x8c564b),
    Rgb::from_hex(0xe377c2),
    Rgb::from_hex(0x7f7f7f),
    Rgb::from_hex(0xbcbd22),
];

const SOFTWARE_AI: [Rgb; 8] = [
    Rgb::from_hex(0x2e2e2e), // dark gray
    Rgb::from_hex(0xe67e22),
    Rgb::from_hex(0x8e44ad),
    Rgb::from_hex(0xc0392b),
    Rgb::from_hex(0x16a085),
    Rgb::from_hex(0x3498db),
    Rgb::from_hex(0xf39c12),
    Rgb::from_hex(0x27ae60),
];

/// Ordered colors for one category.
pub fn palette(category: Category) -> &'static [Rgb] {
    match category {
        Category::Hardware => &HARDWARE,
        Category::SoftwareAi => &SOFTWARE_AI,
    }
}

/// Color for the `index`-th entity of a category; wraps around when exhausted.
pub fn color_at(category: Category, index: usize) -> Rgb {
    let p = palette(category);
    p[index % p.len()]
}

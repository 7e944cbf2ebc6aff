// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Fill colors.

use std::fmt;

/// An 8-bit RGB fill color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from a packed `0xRRGGBB` value. Bits above 24 are ignored.
    pub const fn from_packed(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xFF) as u8,
            g: ((packed >> 8) & 0xFF) as u8,
            b: (packed & 0xFF) as u8,
        }
    }

    /// Sample a color uniformly over the whole 24-bit RGB space.
    pub fn random(rng: &mut fastrand::Rng) -> Self {
        Self::from_packed(rng.u32(0..=0xFF_FFFF))
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::BLUE
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<Rgb> for egui::Color32 {
    fn from(color: Rgb) -> Self {
        egui::Color32::from_rgb(color.r, color.g, color.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_blue() {
        assert_eq!(Rgb::default(), Rgb::new(0, 0, 255));
        assert_eq!(Rgb::default().to_string(), "#0000ff");
    }

    #[test]
    fn test_from_packed() {
        assert_eq!(Rgb::from_packed(0x12_34_56), Rgb::new(0x12, 0x34, 0x56));
        assert_eq!(Rgb::from_packed(0xFF_00_00_01), Rgb::new(0, 0, 1));
    }

    #[test]
    fn test_random_is_reproducible_with_seed() {
        let mut a = fastrand::Rng::with_seed(7);
        let mut b = fastrand::Rng::with_seed(7);
        for _ in 0..16 {
            assert_eq!(Rgb::random(&mut a), Rgb::random(&mut b));
        }
    }

    #[test]
    fn test_display_is_lowercase_hex() {
        assert_eq!(Rgb::new(0xAB, 0x0C, 0xFF).to_string(), "#ab0cff");
    }
}

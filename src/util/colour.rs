use crate::util::real;
use serde::{Deserialize, Serialize};
use std::{fmt, fmt::Formatter};

/// An RGBA colour with unclamped `f32` channels; `0.0..=1.0` is the nominal
/// range and everything the packing functions assume.
///
/// # Examples
///
/// ```
/// use spindle::core::prelude::*;
///
/// assert_eq!(Color::from_rgba(0xFFFF_FFFF), Color::white());
/// assert_eq!(Color::red().to_rgba32(), 0xFF00_00FF);
/// ```
#[repr(C)]
#[derive(
    Copy, Clone, Debug, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode,
)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Color {
        Color { r, g, b, a }
    }

    /// An opaque colour.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Color {
        Color::new(r, g, b, 1.0)
    }

    #[must_use]
    pub const fn white() -> Color {
        Color::rgb(1.0, 1.0, 1.0)
    }
    #[must_use]
    pub const fn black() -> Color {
        Color::rgb(0.0, 0.0, 0.0)
    }
    #[must_use]
    pub const fn red() -> Color {
        Color::rgb(1.0, 0.0, 0.0)
    }
    #[must_use]
    pub const fn green() -> Color {
        Color::rgb(0.0, 1.0, 0.0)
    }
    #[must_use]
    pub const fn blue() -> Color {
        Color::rgb(0.0, 0.0, 1.0)
    }
    #[must_use]
    pub const fn transparent() -> Color {
        Color::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Unpacks a `0xRRGGBBAA` integer.
    #[must_use]
    pub fn from_rgba(rgba: u32) -> Color {
        Color::new(
            ((rgba >> 24) & 0xFF) as f32 / 255.0,
            ((rgba >> 16) & 0xFF) as f32 / 255.0,
            ((rgba >> 8) & 0xFF) as f32 / 255.0,
            (rgba & 0xFF) as f32 / 255.0,
        )
    }

    /// Hue, saturation and value, each in `0.0..=1.0`; the alpha channel is
    /// carried through unchanged. The hue wraps, so `h = 1.25` is the same
    /// as `h = 0.25`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_hsv(h: f32, s: f32, v: f32, a: f32) -> Color {
        if s == 0.0 {
            return Color::new(v, v, v, a);
        }
        let h = real::posmod(h, 1.0) * 6.0;
        let i = h.floor();
        let f = h - i;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));
        match i as i32 {
            0 => Color::new(v, t, p, a),
            1 => Color::new(q, v, p, a),
            2 => Color::new(p, v, t, a),
            3 => Color::new(p, q, v, a),
            4 => Color::new(t, p, v, a),
            _ => Color::new(v, p, q, a),
        }
    }

    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    fn to_u8(c: f32) -> u32 {
        (c * 255.0).round() as u32
    }

    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    fn to_u16(c: f32) -> u64 {
        (c * 65535.0).round() as u64
    }

    /// Packs into a `0xRRGGBBAA` integer, rounding each channel to 8 bits.
    #[must_use]
    pub fn to_rgba32(&self) -> u32 {
        (Self::to_u8(self.r) << 24)
            | (Self::to_u8(self.g) << 16)
            | (Self::to_u8(self.b) << 8)
            | Self::to_u8(self.a)
    }

    /// Packs into a `0xAARRGGBB` integer.
    #[must_use]
    pub fn to_argb32(&self) -> u32 {
        (Self::to_u8(self.a) << 24)
            | (Self::to_u8(self.r) << 16)
            | (Self::to_u8(self.g) << 8)
            | Self::to_u8(self.b)
    }

    /// Packs into a `0xAABBGGRR` integer.
    #[must_use]
    pub fn to_abgr32(&self) -> u32 {
        (Self::to_u8(self.a) << 24)
            | (Self::to_u8(self.b) << 16)
            | (Self::to_u8(self.g) << 8)
            | Self::to_u8(self.r)
    }

    /// 16 bits per channel, in RGBA order from the high word down.
    #[must_use]
    pub fn to_rgba64(&self) -> u64 {
        (Self::to_u16(self.r) << 48)
            | (Self::to_u16(self.g) << 32)
            | (Self::to_u16(self.b) << 16)
            | Self::to_u16(self.a)
    }

    /// 16 bits per channel, in ARGB order from the high word down.
    #[must_use]
    pub fn to_argb64(&self) -> u64 {
        (Self::to_u16(self.a) << 48)
            | (Self::to_u16(self.r) << 32)
            | (Self::to_u16(self.g) << 16)
            | Self::to_u16(self.b)
    }

    /// 16 bits per channel, in ABGR order from the high word down.
    #[must_use]
    pub fn to_abgr64(&self) -> u64 {
        (Self::to_u16(self.a) << 48)
            | (Self::to_u16(self.b) << 32)
            | (Self::to_u16(self.g) << 16)
            | Self::to_u16(self.r)
    }

    #[must_use]
    pub fn get_h(&self) -> f32 {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let delta = max - min;
        if delta == 0.0 {
            return 0.0;
        }
        let mut h = if self.r == max {
            (self.g - self.b) / delta
        } else if self.g == max {
            2.0 + (self.b - self.r) / delta
        } else {
            4.0 + (self.r - self.g) / delta
        };
        h /= 6.0;
        if h < 0.0 {
            h += 1.0;
        }
        h
    }

    #[must_use]
    pub fn get_s(&self) -> f32 {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        if max == 0.0 {
            0.0
        } else {
            (max - min) / max
        }
    }

    #[must_use]
    pub fn get_v(&self) -> f32 {
        self.r.max(self.g).max(self.b)
    }

    /// Average of the three colour channels.
    #[must_use]
    pub fn gray(&self) -> f32 {
        (self.r + self.g + self.b) / 3.0
    }

    /// Alpha-composites `over` on top of this colour. A fully transparent
    /// result collapses to [`transparent`](Color::transparent).
    #[must_use]
    pub fn blend(&self, over: Color) -> Color {
        let sa = 1.0 - over.a;
        let res_a = self.a * sa + over.a;
        if res_a == 0.0 {
            Color::transparent()
        } else {
            Color::new(
                (self.r * self.a * sa + over.r * over.a) / res_a,
                (self.g * self.a * sa + over.g * over.a) / res_a,
                (self.b * self.a * sa + over.b * over.a) / res_a,
                res_a,
            )
        }
    }

    /// Shifts each channel half way round the hue-agnostic value range, for
    /// a readable colour against this one.
    #[must_use]
    pub fn contrasted(&self) -> Color {
        Color::new(
            (self.r + 0.5) % 1.0,
            (self.g + 0.5) % 1.0,
            (self.b + 0.5) % 1.0,
            self.a,
        )
    }

    /// Scales the colour channels towards black; `amount` of 1 gives black.
    #[must_use]
    pub fn darkened(&self, amount: f32) -> Color {
        Color::new(
            self.r * (1.0 - amount),
            self.g * (1.0 - amount),
            self.b * (1.0 - amount),
            self.a,
        )
    }

    /// Moves the colour channels towards white; `amount` of 1 gives white.
    #[must_use]
    pub fn lightened(&self, amount: f32) -> Color {
        Color::new(
            self.r + (1.0 - self.r) * amount,
            self.g + (1.0 - self.g) * amount,
            self.b + (1.0 - self.b) * amount,
            self.a,
        )
    }

    /// The colour channels flipped; alpha is untouched.
    #[must_use]
    pub fn inverted(&self) -> Color {
        Color::new(1.0 - self.r, 1.0 - self.g, 1.0 - self.b, self.a)
    }

    /// Per-channel linear interpolation (including alpha), unclamped in `t`.
    #[must_use]
    pub fn linear_interpolate(&self, b: Color, t: f32) -> Color {
        Color::new(
            real::lerp(self.r, b.r, t),
            real::lerp(self.g, b.g, t),
            real::lerp(self.b, b.b, t),
            real::lerp(self.a, b.a, t),
        )
    }

    pub fn almost_eq(&self, rhs: Color) -> bool {
        real::is_equal_approx(self.r, rhs.r)
            && real::is_equal_approx(self.g, rhs.g)
            && real::is_equal_approx(self.b, rhs.b)
            && real::is_equal_approx(self.a, rhs.a)
    }
}

/// Opaque black, not the all-zero (fully transparent) colour.
impl Default for Color {
    fn default() -> Self {
        Color::rgb(0.0, 0.0, 0.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08x}", self.to_rgba32())
    }
}

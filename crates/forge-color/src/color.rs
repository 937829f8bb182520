// SPDX-License-Identifier: MIT
//
// forge-color color model — hex, RGB and HSB with deterministic rounding.
//
// Single-character variable names (r, g, b, h, s, c, x, m) are the
// standard mathematical convention in color science. Renaming them would
// make the code harder to compare against reference implementations.
#![allow(clippy::many_single_char_names)]
//
// Design tokens are authored in HSB (hue / saturation / brightness, the
// model every design tool's color picker exposes) and delivered in CSS
// forms (hex, `rgba()`). This module converts between the two without
// drift: all channel math runs in f64 with a fixed operation order, so
// the same token set always serializes to the same bytes. That is what
// keeps generated token files diffable across runs and machines.
//
// Conversion pipeline:
//
//   hex string ↔ RGB (8-bit) ↔ HSB (degrees / percent)
//
// Alpha never participates in the conversions themselves. Flattening a
// translucent color against a backdrop is `composite_over`, which is the
// piece the contrast checks build on.

use std::fmt;

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Error produced when a hex color string cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseColorError {
    /// The string (after an optional `#`) was not exactly six digits.
    /// Shorthand `#rgb` is deliberately not accepted: every stored token
    /// is full-form, so a short string is almost always a typo.
    InvalidLength(usize),

    /// A character outside `0-9a-fA-F` appeared where a digit belongs.
    InvalidDigit(char),
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => write!(f, "expected 6 hex digits, found {len}"),
            Self::InvalidDigit(c) => write!(f, "invalid hex digit {c:?}"),
        }
    }
}

impl std::error::Error for ParseColorError {}

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An 8-bit sRGB color — the form tokens are delivered in.
///
/// Channel values are `u8`, so an `Rgb` is always in range by
/// construction and compares exactly. All derivation math happens in
/// [`Hsb`] space; `Rgb` is the endpoint.
///
/// # Examples
///
/// ```
/// use forge_color::color::Rgb;
///
/// let brand = Rgb::from_hex("#3b82f6").unwrap();
/// assert_eq!((brand.r, brand.g, brand.b), (59, 130, 246));
/// assert_eq!(brand.to_hex(), "#3b82f6");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from 8-bit channel values.
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string (`#rrggbb`, with or without `#`).
    ///
    /// # Errors
    ///
    /// Returns [`ParseColorError`] if the string is not exactly six hex
    /// digits after the optional `#`.
    pub fn from_hex(s: &str) -> Result<Self, ParseColorError> {
        parse_hex(s)
    }

    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Format as a lowercase `#rrggbb` string.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Format as a CSS `rgba()` string at the given opacity.
    ///
    /// Alpha is always printed with two decimals (`1.00`, `0.05`) so
    /// that regenerated token files do not churn on formatting.
    #[must_use]
    pub fn rgba_string(self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {alpha:.2})", self.r, self.g, self.b)
    }

    /// Convert to HSB with whole-number components, matching what a
    /// design tool's picker would display for this color.
    #[must_use]
    pub fn to_hsb(self) -> Hsb {
        rgb_to_hsb(self)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

// ─── Hsb ─────────────────────────────────────────────────────────────────────

/// A color in HSB space (hue / saturation / brightness, a.k.a. HSV).
///
/// This is the authoring space: token derivation adjusts brightness and
/// saturation directly, which reads the way a designer thinks ("same
/// hue, 20% brighter") rather than as opaque channel arithmetic.
///
/// # Examples
///
/// ```
/// use forge_color::color::Hsb;
///
/// let ink = Hsb::new(230.0, 100.0, 15.0);
/// let rgb = ink.to_rgb();
/// assert_eq!((rgb.r, rgb.g, rgb.b), (0, 6, 38));
/// ```
#[derive(Clone, Copy)]
pub struct Hsb {
    /// Hue angle in degrees: 0.0 to 360.0.
    pub h: f32,

    /// Saturation: 0.0 (gray) to 100.0 (fully saturated).
    pub s: f32,

    /// Brightness: 0.0 (black) to 100.0 (full).
    pub b: f32,
}

impl Hsb {
    /// Create an HSB color. Hue wraps into [0, 360); saturation and
    /// brightness clamp to [0, 100].
    #[must_use]
    pub fn new(h: f32, s: f32, b: f32) -> Self {
        Self {
            h: normalize_hue(h),
            s: s.clamp(0.0, 100.0),
            b: b.clamp(0.0, 100.0),
        }
    }

    /// Parse a hex color string and convert to HSB.
    ///
    /// # Errors
    ///
    /// Returns [`ParseColorError`] if the string is not a valid
    /// six-digit hex color.
    pub fn from_hex(s: &str) -> Result<Self, ParseColorError> {
        Ok(Rgb::from_hex(s)?.to_hsb())
    }

    /// Attach an alpha channel (clamped to [0, 1]).
    #[inline]
    #[must_use]
    pub fn with_alpha(self, a: f32) -> Hsba {
        Hsba::new(self.h, self.s, self.b, a)
    }

    /// Convert to 8-bit RGB.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        hsb_to_rgb(self.h, self.s, self.b)
    }

    /// Whether hue is meaningless for this color (gray or black).
    #[inline]
    #[must_use]
    pub fn is_achromatic(self) -> bool {
        self.s < 1e-5 || self.b < 1e-5
    }
}

impl fmt::Debug for Hsb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hsb::new({:.1}, {:.1}, {:.1})", self.h, self.s, self.b)
    }
}

impl PartialEq for Hsb {
    fn eq(&self, other: &Self) -> bool {
        // Compare with small epsilon for floating point
        const EPS: f32 = 1e-5;
        (self.s - other.s).abs() < EPS
            && (self.b - other.b).abs() < EPS
            && (self.is_achromatic()
                || other.is_achromatic()
                || hue_diff(self.h, other.h) < EPS)
    }
}

// ─── Hsba ────────────────────────────────────────────────────────────────────

/// An HSB color with an alpha channel.
///
/// Alpha stays out of the channel math entirely; it only matters when a
/// color is serialized (`rgba()` strings) or flattened against a
/// backdrop ([`composite_over`]).
#[derive(Clone, Copy)]
pub struct Hsba {
    /// Hue angle in degrees: 0.0 to 360.0.
    pub h: f32,

    /// Saturation: 0.0 to 100.0.
    pub s: f32,

    /// Brightness: 0.0 to 100.0.
    pub b: f32,

    /// Alpha (opacity): 0.0 (fully transparent) to 1.0 (fully opaque).
    pub a: f32,
}

impl Hsba {
    /// Create an HSBA color. Hue wraps into [0, 360); saturation and
    /// brightness clamp to [0, 100]; alpha clamps to [0, 1].
    #[must_use]
    pub fn new(h: f32, s: f32, b: f32, a: f32) -> Self {
        Self {
            h: normalize_hue(h),
            s: s.clamp(0.0, 100.0),
            b: b.clamp(0.0, 100.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Create a fully opaque HSBA color.
    #[inline]
    #[must_use]
    pub fn opaque(h: f32, s: f32, b: f32) -> Self {
        Self::new(h, s, b, 1.0)
    }

    /// Whether this color is fully opaque (alpha >= 1.0).
    #[inline]
    #[must_use]
    pub fn is_opaque(self) -> bool {
        self.a >= 1.0
    }

    /// Drop the alpha channel.
    #[inline]
    #[must_use]
    pub fn hsb(self) -> Hsb {
        Hsb::new(self.h, self.s, self.b)
    }

    /// Convert the base color to 8-bit RGB, ignoring alpha.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        hsb_to_rgb(self.h, self.s, self.b)
    }

    /// Format as a CSS `rgba()` string, converting through RGB.
    #[must_use]
    pub fn to_rgba_string(self) -> String {
        self.to_rgb().rgba_string(self.a)
    }

    /// Format as a functional `hsba()` string, the way design tools
    /// label a picker swatch.
    #[must_use]
    pub fn to_hsba_string(self) -> String {
        format!("hsba({}, {}%, {}%, {:.2})", self.h, self.s, self.b, self.a)
    }
}

impl fmt::Debug for Hsba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Hsba::new({:.1}, {:.1}, {:.1}, {:.2})",
            self.h, self.s, self.b, self.a
        )
    }
}

impl fmt::Display for Hsba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hsba_string())
    }
}

impl PartialEq for Hsba {
    fn eq(&self, other: &Self) -> bool {
        // Compare with small epsilon for floating point
        const EPS: f32 = 1e-5;
        (self.s - other.s).abs() < EPS
            && (self.b - other.b).abs() < EPS
            && (self.a - other.a).abs() < EPS
            && (self.hsb().is_achromatic()
                || other.hsb().is_achromatic()
                || hue_diff(self.h, other.h) < EPS)
    }
}

// ─── Alpha Compositing ───────────────────────────────────────────────────────

/// Flatten a foreground color with the given alpha over an opaque
/// backdrop, producing the color a viewer actually sees.
///
/// Plain source-over blending per channel, rounded to the nearest 8-bit
/// value. Contrast measurement needs this because translucent tokens
/// (`rgba(0, 0, 0, 0.04)` hover tints and the like) have no luminance
/// of their own until they are resolved against a background.
#[must_use]
pub fn composite_over(fg: Rgb, alpha: f32, backdrop: Rgb) -> Rgb {
    let a = f64::from(alpha.clamp(0.0, 1.0));
    Rgb::new(
        blend_channel(fg.r, backdrop.r, a),
        blend_channel(fg.g, backdrop.g, a),
        blend_channel(fg.b, backdrop.b, a),
    )
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn blend_channel(fg: u8, bg: u8, a: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    let v = f64::from(fg).mul_add(a, f64::from(bg) * (1.0 - a));
    (v + 0.5).clamp(0.0, 255.0) as u8
}

// ─── Linear Channels ─────────────────────────────────────────────────────────

/// Convert an 8-bit sRGB channel to its linear-light value (0.0 to 1.0).
///
/// This is the transfer function from the WCAG 2.x relative-luminance
/// definition, including its published 0.03928 threshold (the sRGB spec
/// itself uses 0.04045; WCAG kept the older constant and conformance
/// tooling matches it).
#[inline]
#[must_use]
pub fn channel_to_linear(c: u8) -> f64 {
    let c = f64::from(c) / 255.0;
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ─── RGB ↔ HSB Conversion ────────────────────────────────────────────────────
//
// Both directions run in f64 with a fixed operation order. The rounding
// step at the end is the only place precision is discarded, so a token
// set derives to identical bytes on every run.

/// Convert 8-bit RGB to HSB with whole-number components.
// Exact float equality is correct here: max is bit-identical to one of
// r, g, b, never an approximation of them.
#[allow(clippy::float_cmp, clippy::cast_possible_truncation)]
fn rgb_to_hsb(rgb: Rgb) -> Hsb {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let mut h = 0.0;
    if delta != 0.0 {
        if max == r {
            h = ((g - b) / delta) % 6.0;
            if h < 0.0 {
                h += 6.0;
            }
        } else if max == g {
            h = (b - r) / delta + 2.0;
        } else {
            h = (r - g) / delta + 4.0;
        }
        h *= 60.0;
    }

    let s = if max == 0.0 { 0.0 } else { delta / max * 100.0 };
    let v = max * 100.0;

    Hsb::new(h.round() as f32, s.round() as f32, v.round() as f32)
}

/// Convert HSB to 8-bit RGB via the standard six-sector piecewise formula.
fn hsb_to_rgb(h: f32, s: f32, b: f32) -> Rgb {
    let h_norm = f64::from(h) / 360.0;
    let s_norm = f64::from(s) / 100.0;
    let b_norm = f64::from(b) / 100.0;

    let c = b_norm * s_norm;
    let x = c * (1.0 - ((h_norm * 6.0) % 2.0 - 1.0).abs());
    let m = b_norm - c;

    let (r, g, bl) = if h_norm < 1.0 / 6.0 {
        (c, x, 0.0)
    } else if h_norm < 2.0 / 6.0 {
        (x, c, 0.0)
    } else if h_norm < 3.0 / 6.0 {
        (0.0, c, x)
    } else if h_norm < 4.0 / 6.0 {
        (0.0, x, c)
    } else if h_norm < 5.0 / 6.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    Rgb::new(to_u8(r + m), to_u8(g + m), to_u8(bl + m))
}

/// Convert a normalized channel (0.0–1.0) to a u8 with correct rounding.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

/// Parse a six-digit hex color string into [`Rgb`].
fn parse_hex(s: &str) -> Result<Rgb, ParseColorError> {
    let s = s.strip_prefix('#').unwrap_or(s);
    if s.len() != 6 {
        return Err(ParseColorError::InvalidLength(s.len()));
    }

    let bytes = s.as_bytes();
    let r = parse_hex_byte(&bytes[0..2])?;
    let g = parse_hex_byte(&bytes[2..4])?;
    let b = parse_hex_byte(&bytes[4..6])?;
    Ok(Rgb::new(r, g, b))
}

#[inline]
const fn parse_hex_digit(c: u8) -> Result<u8, ParseColorError> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(ParseColorError::InvalidDigit(c as char)),
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Result<u8, ParseColorError> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Ok(hi << 4 | lo)
}

// ─── Hue Helpers ─────────────────────────────────────────────────────────────

/// Normalize a hue angle to the range [0, 360).
#[inline]
fn normalize_hue(h: f32) -> f32 {
    let h = h % 360.0;
    if h < 0.0 { h + 360.0 } else { h }
}

/// Absolute hue difference (shortest arc on the color wheel).
#[inline]
fn hue_diff(a: f32, b: f32) -> f32 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // Helper: check that two f32 values are approximately equal.
    fn approx_eq(a: f32, b: f32, epsilon: f32) -> bool {
        (a - b).abs() < epsilon
    }

    // Helper: assert RGB channels are close (within ±1 out of 255).
    fn assert_rgb_close(actual: Rgb, expected: (u8, u8, u8)) {
        let (er, eg, eb) = expected;
        assert!(
            (i16::from(actual.r) - i16::from(er)).unsigned_abs() <= 1
                && (i16::from(actual.g) - i16::from(eg)).unsigned_abs() <= 1
                && (i16::from(actual.b) - i16::from(eb)).unsigned_abs() <= 1,
            "RGB mismatch: got ({}, {}, {}), expected ({er}, {eg}, {eb})",
            actual.r,
            actual.g,
            actual.b
        );
    }

    // ── Hex Parsing ──────────────────────────────────────────────────────

    #[test]
    fn hex_parse_rrggbb() {
        let c = Rgb::from_hex("#3b82f6").unwrap();
        assert_eq!(c, Rgb::new(59, 130, 246));
    }

    #[test]
    fn hex_parse_without_hash() {
        let c = Rgb::from_hex("dc2626").unwrap();
        assert_eq!(c, Rgb::new(220, 38, 38));
    }

    #[test]
    fn hex_parse_uppercase() {
        let c = Rgb::from_hex("#F59E0B").unwrap();
        assert_eq!(c, Rgb::new(245, 158, 11));
    }

    #[test]
    fn hex_parse_rejects_shorthand() {
        assert_eq!(
            Rgb::from_hex("#fff"),
            Err(ParseColorError::InvalidLength(3))
        );
    }

    #[test]
    fn hex_parse_rejects_empty() {
        assert_eq!(Rgb::from_hex(""), Err(ParseColorError::InvalidLength(0)));
    }

    #[test]
    fn hex_parse_rejects_bad_digit() {
        assert_eq!(
            Rgb::from_hex("#12345g"),
            Err(ParseColorError::InvalidDigit('g'))
        );
    }

    #[test]
    fn to_hex_is_lowercase() {
        assert_eq!(Rgb::new(245, 158, 11).to_hex(), "#f59e0b");
        assert_eq!(format!("{}", Rgb::new(59, 130, 246)), "#3b82f6");
    }

    // ── RGB → HSB ────────────────────────────────────────────────────────

    #[test]
    fn rgb_to_hsb_brand_blue() {
        assert_eq!(
            Rgb::new(59, 130, 246).to_hsb(),
            Hsb::new(217.0, 76.0, 96.0)
        );
    }

    #[test]
    fn rgb_to_hsb_red_sector() {
        assert_eq!(Rgb::new(220, 38, 38).to_hsb(), Hsb::new(0.0, 83.0, 86.0));
    }

    #[test]
    fn rgb_to_hsb_green_sector() {
        assert_eq!(Rgb::new(22, 163, 74).to_hsb(), Hsb::new(142.0, 87.0, 64.0));
    }

    #[test]
    fn rgb_to_hsb_orange() {
        assert_eq!(Rgb::new(245, 158, 11).to_hsb(), Hsb::new(38.0, 96.0, 96.0));
    }

    #[test]
    fn rgb_to_hsb_magenta_wraps_negative_hue() {
        // Blue > green forces the red-sector formula negative before the
        // +6 correction. Magenta must come out at 300°, not -60°.
        assert_eq!(
            Rgb::new(255, 0, 255).to_hsb(),
            Hsb::new(300.0, 100.0, 100.0)
        );
    }

    #[test]
    fn rgb_to_hsb_gray_is_achromatic() {
        let hsb = Rgb::new(128, 128, 128).to_hsb();
        assert!(hsb.is_achromatic());
        assert!(approx_eq(hsb.s, 0.0, 1e-6));
        assert!(approx_eq(hsb.b, 50.0, 1e-6));
    }

    #[test]
    fn rgb_to_hsb_black_and_white() {
        assert_eq!(Rgb::BLACK.to_hsb(), Hsb::new(0.0, 0.0, 0.0));
        assert_eq!(Rgb::WHITE.to_hsb(), Hsb::new(0.0, 0.0, 100.0));
    }

    // ── HSB → RGB ────────────────────────────────────────────────────────

    #[test]
    fn hsb_to_rgb_brand_blue() {
        assert_eq!(Hsb::new(217.0, 76.0, 96.0).to_rgb(), Rgb::new(59, 130, 245));
    }

    #[test]
    fn hsb_to_rgb_ink_ramp() {
        // The deep navy ramp the monochromatic tokens are built from.
        assert_eq!(Hsb::new(230.0, 100.0, 15.0).to_rgb(), Rgb::new(0, 6, 38));
        assert_eq!(Hsb::new(230.0, 100.0, 20.0).to_rgb(), Rgb::new(0, 9, 51));
        assert_eq!(Hsb::new(230.0, 100.0, 30.0).to_rgb(), Rgb::new(0, 13, 77));
        assert_eq!(Hsb::new(230.0, 100.0, 40.0).to_rgb(), Rgb::new(0, 17, 102));
        assert_eq!(Hsb::new(230.0, 100.0, 50.0).to_rgb(), Rgb::new(0, 21, 128));
    }

    #[test]
    fn hsb_to_rgb_sector_boundaries() {
        assert_eq!(Hsb::new(0.0, 100.0, 100.0).to_rgb(), Rgb::new(255, 0, 0));
        assert_eq!(Hsb::new(60.0, 100.0, 100.0).to_rgb(), Rgb::new(255, 255, 0));
        assert_eq!(Hsb::new(120.0, 100.0, 100.0).to_rgb(), Rgb::new(0, 255, 0));
        assert_eq!(Hsb::new(240.0, 100.0, 100.0).to_rgb(), Rgb::new(0, 0, 255));
        assert_eq!(
            Hsb::new(300.0, 100.0, 100.0).to_rgb(),
            Rgb::new(255, 0, 255)
        );
    }

    #[test]
    fn hsb_to_rgb_zero_brightness_is_black() {
        assert_eq!(Hsb::new(217.0, 76.0, 0.0).to_rgb(), Rgb::BLACK);
    }

    #[test]
    fn rgb_hsb_roundtrip_within_one() {
        // Whole-number HSB cannot represent every 8-bit color exactly,
        // but a roundtrip must stay within ±1 per channel.
        for hex in ["#3b82f6", "#dc2626", "#f59e0b", "#16a34a", "#808080"] {
            let rgb = Rgb::from_hex(hex).unwrap();
            assert_rgb_close(rgb.to_hsb().to_rgb(), (rgb.r, rgb.g, rgb.b));
        }
    }

    // ── Constructors ─────────────────────────────────────────────────────

    #[test]
    fn new_wraps_hue() {
        assert!(approx_eq(Hsb::new(370.0, 50.0, 50.0).h, 10.0, 1e-4));
        assert!(approx_eq(Hsb::new(-30.0, 50.0, 50.0).h, 330.0, 1e-4));
        assert!(approx_eq(Hsb::new(360.0, 50.0, 50.0).h, 0.0, 1e-4));
    }

    #[test]
    fn new_clamps_saturation_and_brightness() {
        let hsb = Hsb::new(200.0, 150.0, -5.0);
        assert!(approx_eq(hsb.s, 100.0, 1e-6));
        assert!(approx_eq(hsb.b, 0.0, 1e-6));
    }

    #[test]
    fn hsba_clamps_alpha() {
        assert!(approx_eq(Hsba::new(0.0, 0.0, 0.0, 1.5).a, 1.0, 1e-6));
        assert!(approx_eq(Hsba::new(0.0, 0.0, 0.0, -0.2).a, 0.0, 1e-6));
    }

    #[test]
    fn with_alpha_keeps_channels() {
        let hsba = Hsb::new(217.0, 76.0, 96.0).with_alpha(0.5);
        assert_eq!(hsba, Hsba::new(217.0, 76.0, 96.0, 0.5));
        assert!(!hsba.is_opaque());
        assert!(Hsba::opaque(217.0, 76.0, 96.0).is_opaque());
    }

    #[test]
    fn equality_ignores_hue_when_achromatic() {
        assert_eq!(Hsb::new(120.0, 0.0, 50.0), Hsb::new(300.0, 0.0, 50.0));
        assert_ne!(Hsb::new(120.0, 50.0, 50.0), Hsb::new(300.0, 50.0, 50.0));
    }

    // ── String Forms ─────────────────────────────────────────────────────

    #[test]
    fn rgb_rgba_string_keeps_exact_channels() {
        let brand = Rgb::new(59, 130, 246);
        assert_eq!(brand.rgba_string(0.05), "rgba(59, 130, 246, 0.05)");
        assert_eq!(brand.rgba_string(1.0), "rgba(59, 130, 246, 1.00)");
    }

    #[test]
    fn rgba_string_pads_alpha_to_two_decimals() {
        let ink = Hsba::new(230.0, 100.0, 15.0, 0.9);
        assert_eq!(ink.to_rgba_string(), "rgba(0, 6, 38, 0.90)");
    }

    #[test]
    fn rgba_string_full_alpha() {
        let brand = Hsba::opaque(217.0, 76.0, 96.0);
        assert_eq!(brand.to_rgba_string(), "rgba(59, 130, 245, 1.00)");
    }

    #[test]
    fn hsba_string_matches_picker_form() {
        let ink = Hsba::new(230.0, 100.0, 15.0, 0.9);
        assert_eq!(ink.to_hsba_string(), "hsba(230, 100%, 15%, 0.90)");
        assert_eq!(format!("{ink}"), "hsba(230, 100%, 15%, 0.90)");
    }

    // ── Compositing ──────────────────────────────────────────────────────

    #[test]
    fn composite_half_black_over_white() {
        let flat = composite_over(Rgb::BLACK, 0.5, Rgb::WHITE);
        assert_eq!(flat, Rgb::new(128, 128, 128));
    }

    #[test]
    fn composite_opaque_ignores_backdrop() {
        let fg = Rgb::new(59, 130, 246);
        assert_eq!(composite_over(fg, 1.0, Rgb::BLACK), fg);
    }

    #[test]
    fn composite_transparent_is_backdrop() {
        let bg = Rgb::new(250, 250, 250);
        assert_eq!(composite_over(Rgb::BLACK, 0.0, bg), bg);
    }

    #[test]
    fn composite_clamps_alpha() {
        let fg = Rgb::new(59, 130, 246);
        assert_eq!(
            composite_over(fg, 2.0, Rgb::WHITE),
            composite_over(fg, 1.0, Rgb::WHITE)
        );
    }

    // ── Linear Channels ──────────────────────────────────────────────────

    #[test]
    fn channel_to_linear_endpoints() {
        assert!((channel_to_linear(0) - 0.0).abs() < 1e-12);
        assert!((channel_to_linear(255) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn channel_to_linear_low_range_is_linear() {
        // 8/255 ≈ 0.0314 sits below the 0.03928 threshold.
        let expected = 8.0 / 255.0 / 12.92;
        assert!((channel_to_linear(8) - expected).abs() < 1e-12);
    }

    #[test]
    fn channel_to_linear_is_monotonic() {
        assert!(channel_to_linear(128) < channel_to_linear(200));
    }
}

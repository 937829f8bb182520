//! Palette derivation — opacity scales, the monochromatic ramp,
//! semantic roles, and tint/shade ramps.
//!
//! Everything here fans out from the four configured brand/status hex
//! colors. Each color gets a fixed four-step opacity scale
//! ([`color_scale`]); the interface neutrals come from a fixed
//! single-hue ink ramp ([`MonoScale`]); the two meet in
//! [`semantic_tokens`], the `element-tone-emphasis` role map
//! (`bg-brand`, `stroke-error-weak`, `text-disabled`, …) that
//! stylesheets reference directly. [`shade_ramp`] is the eleven-step
//! 50–950 tint/shade preview for a single color.

use forge_color::color::{Hsba, ParseColorError, Rgb};

use crate::config::ColorTokens;

// ─── Opacity Scale ───────────────────────────────────────────────────────────

/// The fixed usage steps of a per-color opacity scale, strongest first.
///
/// The contrast label is the WCAG target a step should satisfy when
/// used for its named purpose. `N/A` steps are decorative and carry no
/// target.
const OPACITY_STEPS: [(&str, f32, &str); 4] = [
    ("text", 1.0, "4.5:1"),
    ("stroke-strong", 0.80, "3:1"),
    ("stroke-weak", 0.20, "N/A"),
    ("fill", 0.05, "N/A"),
];

/// One step of a derived opacity scale.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleEntry {
    /// Usage slot: `text`, `stroke-strong`, `stroke-weak` or `fill`.
    pub name: &'static str,
    /// Opacity applied to the base color.
    pub opacity: f32,
    /// CSS `rgba()` form, ready for a stylesheet.
    pub rgba: String,
    /// `hsba()` form, as a picker swatch labels it.
    pub hsba: String,
    /// Advisory WCAG target for the slot, not a measurement.
    pub contrast_label: &'static str,
}

/// Derive the four-step opacity scale for one brand or status color.
///
/// Every step keeps the base color's channels and varies only the
/// alpha, so a whole scale re-tints in lockstep when the base changes.
#[must_use]
pub fn color_scale(base: Rgb) -> [ScaleEntry; 4] {
    let hsb = base.to_hsb();
    OPACITY_STEPS.map(|(name, opacity, contrast_label)| ScaleEntry {
        name,
        opacity,
        rgba: base.rgba_string(opacity),
        hsba: hsb.with_alpha(opacity).to_hsba_string(),
        contrast_label,
    })
}

// ─── Monochromatic Scale ─────────────────────────────────────────────────────

/// The fixed monochromatic scale: six ink steps on hue 230.
///
/// Deliberately not derived from the brand color — neutral text and
/// hairlines have to stay put while the brand hue is being explored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonoScale {
    /// Primary text ink.
    pub text_strong: Hsba,
    /// Secondary text ink.
    pub text_weak: Hsba,
    /// Emphasized borders.
    pub stroke_strong: Hsba,
    /// Hairline borders.
    pub stroke_weak: Hsba,
    /// Subtle fills: wells, hover tints.
    pub fill_weak: Hsba,
    /// Barely-there fills.
    pub fill_weaker: Hsba,
}

impl MonoScale {
    /// The standard ink ramp: one hue, rising brightness, falling alpha.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            text_strong: Hsba::new(230.0, 100.0, 15.0, 0.90),
            text_weak: Hsba::new(230.0, 100.0, 20.0, 0.65),
            stroke_strong: Hsba::new(230.0, 100.0, 30.0, 0.45),
            stroke_weak: Hsba::new(230.0, 100.0, 40.0, 0.10),
            fill_weak: Hsba::new(230.0, 100.0, 50.0, 0.04),
            fill_weaker: Hsba::new(230.0, 100.0, 50.0, 0.02),
        }
    }

    /// All steps as `(name, color)` pairs, display order.
    #[must_use]
    pub fn entries(self) -> [(&'static str, Hsba); 6] {
        [
            ("text-strong", self.text_strong),
            ("text-weak", self.text_weak),
            ("stroke-strong", self.stroke_strong),
            ("stroke-weak", self.stroke_weak),
            ("fill-weak", self.fill_weak),
            ("fill-weaker", self.fill_weaker),
        ]
    }
}

// ─── Semantic Tokens ─────────────────────────────────────────────────────────

/// The four configured brand/status colors, resolved from hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrandColors {
    pub primary: Rgb,
    pub error: Rgb,
    pub warning: Rgb,
    pub success: Rgb,
}

impl BrandColors {
    /// Resolve the hex strings of a color config.
    ///
    /// # Errors
    ///
    /// Returns the parse error of the first malformed hex string.
    pub fn resolve(colors: &ColorTokens) -> Result<Self, ParseColorError> {
        Ok(Self {
            primary: Rgb::from_hex(&colors.primary)?,
            error: Rgb::from_hex(&colors.error)?,
            warning: Rgb::from_hex(&colors.warning)?,
            success: Rgb::from_hex(&colors.success)?,
        })
    }
}

/// The hover-state variant of an interactive color: every channel drops
/// by 30, saturating at black.
#[must_use]
pub fn hover_darken(color: Rgb) -> Rgb {
    Rgb::new(
        color.r.saturating_sub(30),
        color.g.saturating_sub(30),
        color.b.saturating_sub(30),
    )
}

/// Derive the semantic role map, in name order.
///
/// Brand and status tones share one alpha ladder — 0.05 fills, 0.20
/// weak strokes, 0.50 medium, 0.80 strong, 1.00 text — while the
/// neutral `bg-*` entries are fixed grays and the neutral text/stroke
/// roles pass the [`MonoScale`] through under role names.
#[must_use]
pub fn semantic_tokens(brand: BrandColors) -> Vec<(&'static str, String)> {
    let mono = MonoScale::standard();
    let BrandColors { primary, error, warning, success } = brand;

    vec![
        ("bg-active", Rgb::BLACK.rgba_string(0.04)),
        ("bg-base", Rgb::WHITE.rgba_string(1.0)),
        ("bg-brand", primary.rgba_string(0.05)),
        ("bg-brand-strong", primary.rgba_string(1.0)),
        ("bg-error", error.rgba_string(0.05)),
        ("bg-hover", Rgb::BLACK.rgba_string(0.02)),
        ("bg-subtle", Rgb::new(250, 250, 250).rgba_string(1.0)),
        ("bg-success", success.rgba_string(0.05)),
        ("bg-warning", warning.rgba_string(0.05)),
        ("border-base", mono.stroke_weak.to_rgba_string()),
        ("border-brand", primary.rgba_string(0.20)),
        ("border-error", error.rgba_string(0.20)),
        ("border-focus", primary.rgba_string(0.50)),
        ("border-strong", mono.stroke_strong.to_rgba_string()),
        ("border-success", success.rgba_string(0.20)),
        ("border-warning", warning.rgba_string(0.20)),
        ("stroke-brand-medium", primary.rgba_string(0.50)),
        ("stroke-brand-strong", primary.rgba_string(0.80)),
        ("stroke-brand-weak", primary.rgba_string(0.20)),
        ("stroke-disabled", Rgb::new(200, 200, 200).rgba_string(0.30)),
        ("stroke-error-medium", error.rgba_string(0.50)),
        ("stroke-error-strong", error.rgba_string(0.80)),
        ("stroke-error-weak", error.rgba_string(0.20)),
        ("stroke-focus", primary.rgba_string(0.50)),
        ("stroke-selected", primary.rgba_string(0.80)),
        ("stroke-strong", mono.stroke_strong.to_rgba_string()),
        ("stroke-success-medium", success.rgba_string(0.50)),
        ("stroke-success-strong", success.rgba_string(0.80)),
        ("stroke-success-weak", success.rgba_string(0.20)),
        ("stroke-warning-medium", warning.rgba_string(0.50)),
        ("stroke-warning-strong", warning.rgba_string(0.80)),
        ("stroke-warning-weak", warning.rgba_string(0.20)),
        ("stroke-weak", mono.stroke_weak.to_rgba_string()),
        ("text-brand", primary.rgba_string(1.0)),
        ("text-brand-hover", hover_darken(primary).rgba_string(1.0)),
        ("text-disabled", Rgb::new(150, 150, 150).rgba_string(0.50)),
        ("text-error", error.rgba_string(1.0)),
        ("text-strong", mono.text_strong.to_rgba_string()),
        ("text-success", success.rgba_string(1.0)),
        ("text-warning", warning.rgba_string(1.0)),
        ("text-weak", mono.text_weak.to_rgba_string()),
    ]
}

// ─── Tint / Shade Ramp ───────────────────────────────────────────────────────

/// Ramp keys, lightest to darkest. Shade 500 is the base color itself.
pub const SHADES: [u16; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

/// Derive one tint or shade of a base color.
///
/// Keys below 500 blend toward white with a 1.5 gain, so the top of the
/// ramp reaches pure white for most bases; keys above 500 scale toward
/// black. Channels clamp after rounding, so extreme keys saturate.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[allow(clippy::suboptimal_flops)] // plain ch + (255 - ch) * f * 1.5 keeps each intermediate rounding
pub fn shade(base: Rgb, key: u16) -> Rgb {
    let factor = (500.0 - f64::from(key)) / 500.0;
    let adjust = |ch: u8| -> u8 {
        let ch = f64::from(ch);
        let v = if key < 500 {
            ch + (255.0 - ch) * factor * 1.5
        } else {
            ch * (1.0 + factor)
        };
        v.round().clamp(0.0, 255.0) as u8
    };
    Rgb::new(adjust(base.r), adjust(base.g), adjust(base.b))
}

/// The full eleven-step ramp as `(key, color)` pairs, lightest first.
#[must_use]
pub fn shade_ramp(base: Rgb) -> [(u16, Rgb); 11] {
    SHADES.map(|key| (key, shade(base, key)))
}

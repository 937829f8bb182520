//! Token set configuration — the base values everything derives from.
//!
//! A [`TokenSet`] is deliberately tiny: four brand/status colors, two
//! surfaces, three typography numbers, four spacing numbers. The rest
//! of the crate turns those dozen inputs into hundreds of tokens, so
//! the config file stays reviewable while the output stays complete.
//!
//! Every struct here implements `Default` with the documented starter
//! values, and every field is optional in the file — a partial config
//! overrides only what it names.

use forge_color::color::Hsba;
use serde::{Deserialize, Serialize};

/// An HSBA color as it appears in configuration files.
///
/// A plain serde mirror of [`Hsba`]. Conversion through
/// [`Self::to_color`] re-applies the range invariants (hue wraps,
/// saturation/brightness/alpha clamp), so out-of-range values in a
/// hand-edited file are corrected rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HsbaValue {
    pub h: f32,
    pub s: f32,
    pub b: f32,
    pub a: f32,
}

impl HsbaValue {
    #[inline]
    #[must_use]
    pub const fn new(h: f32, s: f32, b: f32, a: f32) -> Self {
        Self { h, s, b, a }
    }

    /// Convert to a range-checked color value.
    #[must_use]
    pub fn to_color(self) -> Hsba {
        Hsba::new(self.h, self.s, self.b, self.a)
    }
}

/// Base color inputs: brand and status colors as hex strings, plus the
/// two surfaces contrast is measured against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorTokens {
    /// Brand color (hex). Drives the primary scale, semantic brand
    /// roles, and the tint/shade ramp.
    pub primary: String,

    /// Error status color (hex).
    pub error: String,

    /// Warning status color (hex).
    pub warning: String,

    /// Success status color (hex).
    pub success: String,

    /// Default page background.
    pub background: HsbaValue,

    /// Default text color.
    pub foreground: HsbaValue,
}

impl Default for ColorTokens {
    fn default() -> Self {
        Self {
            primary: "#3b82f6".to_string(),
            error: "#dc2626".to_string(),
            warning: "#f59e0b".to_string(),
            success: "#16a34a".to_string(),
            background: HsbaValue::new(0.0, 0.0, 100.0, 1.0),
            foreground: HsbaValue::new(0.0, 0.0, 0.0, 1.0),
        }
    }
}

/// Typography inputs. A base size and a modular ratio generate the
/// whole font-size ramp; line heights interpolate from the ramp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypographyTokens {
    /// Body text size in px. Sensible values run 12–20.
    pub base_size: f64,

    /// Modular scale ratio between adjacent ramp steps.
    /// See [`crate::typography::TypeScale`] for the named ratios.
    pub type_scale: f64,

    /// Line height multiplier at body size. Sensible values run 1.0–2.0;
    /// large display sizes taper toward 1.0 regardless.
    pub base_line_height: f64,

    /// CSS font stack for headings.
    pub heading_font: String,

    /// CSS font stack for body text.
    pub body_font: String,
}

impl Default for TypographyTokens {
    fn default() -> Self {
        Self {
            base_size: 16.0,
            type_scale: 1.25,
            base_line_height: 1.5,
            heading_font: "Inter, sans-serif".to_string(),
            body_font: "Inter, sans-serif".to_string(),
        }
    }
}

/// Spacing and border-radius inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpacingTokens {
    /// Base spacing unit in px. Sensible values run 2–8.
    pub base_spacing: f64,

    /// Preset multiplier; routes between the linear and Fibonacci
    /// spacing tables. See [`crate::spacing::SpacingPreset`].
    pub spacing_scale: f64,

    /// Base border radius in px.
    pub base_radius: f64,

    /// Kept for config-file compatibility. The radius table uses fixed
    /// per-step factors, so this multiplier never enters the math.
    pub radius_scale: f64,
}

impl Default for SpacingTokens {
    fn default() -> Self {
        Self {
            base_spacing: 4.0,
            spacing_scale: 2.0,
            base_radius: 4.0,
            radius_scale: 2.0,
        }
    }
}

/// The complete set of base values a token system derives from.
///
/// Everything in an exported token file traces back to a field here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TokenSet {
    #[serde(default)]
    pub colors: ColorTokens,

    #[serde(default)]
    pub typography: TypographyTokens,

    #[serde(default)]
    pub spacing: SpacingTokens,
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_colors_are_the_documented_starters() {
        let colors = ColorTokens::default();
        assert_eq!(colors.primary, "#3b82f6");
        assert_eq!(colors.error, "#dc2626");
        assert_eq!(colors.warning, "#f59e0b");
        assert_eq!(colors.success, "#16a34a");
    }

    #[test]
    fn default_surfaces_are_black_on_white() {
        let colors = ColorTokens::default();
        let bg = colors.background.to_color().to_rgb();
        let fg = colors.foreground.to_color().to_rgb();
        assert_eq!((bg.r, bg.g, bg.b), (255, 255, 255));
        assert_eq!((fg.r, fg.g, fg.b), (0, 0, 0));
    }

    #[test]
    fn default_typography_and_spacing() {
        let set = TokenSet::default();
        assert!((set.typography.base_size - 16.0).abs() < 1e-9);
        assert!((set.typography.type_scale - 1.25).abs() < 1e-9);
        assert!((set.typography.base_line_height - 1.5).abs() < 1e-9);
        assert_eq!(set.typography.heading_font, "Inter, sans-serif");
        assert!((set.spacing.base_spacing - 4.0).abs() < 1e-9);
        assert!((set.spacing.base_radius - 4.0).abs() < 1e-9);
    }

    #[test]
    fn hsba_value_corrects_out_of_range_input() {
        let color = HsbaValue::new(400.0, 150.0, -10.0, 2.0).to_color();
        assert_eq!(color, Hsba::new(40.0, 100.0, 0.0, 1.0));
    }
}

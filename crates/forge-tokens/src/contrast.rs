//! WCAG contrast measurement for token pairs.
//!
//! Token files ship colors that land on real pages, so the question
//! "is this text readable on that background?" has to be answerable
//! from the token set itself. This module measures the WCAG 2.x
//! contrast ratio between any two tokens and evaluates it against the
//! four conformance levels (AA/AAA × normal/large text).
//!
//! Translucent tokens have no luminance of their own. Before measuring,
//! both colors are flattened: the background over an opaque white page,
//! then the foreground over that result — the same stacking a browser
//! performs when it paints them.

use std::fmt;

use forge_color::color::{Hsba, Rgb, channel_to_linear, composite_over};

/// Compute the relative luminance of a color per WCAG 2.x.
///
/// Uses the standard sRGB linearization + weighted sum formula:
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(color: Rgb) -> f64 {
    let r_lin = channel_to_linear(color.r);
    let g_lin = channel_to_linear(color.g);
    let b_lin = channel_to_linear(color.b);
    0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
}

/// Flatten a foreground/background token pair into the opaque colors a
/// viewer actually sees.
///
/// The background composites over an opaque white page first, then the
/// foreground composites over that result.
#[must_use]
pub fn resolve_pair(fg: Hsba, bg: Hsba) -> (Rgb, Rgb) {
    let bg_flat = composite_over(bg.to_rgb(), bg.a, Rgb::WHITE);
    let fg_flat = composite_over(fg.to_rgb(), fg.a, bg_flat);
    (fg_flat, bg_flat)
}

/// Compute the WCAG 2.x contrast ratio between two tokens.
///
/// Returns a value in [1.0, 21.0]. The formula is:
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// The result is always >= 1.0 regardless of argument order.
#[must_use]
pub fn contrast_ratio(fg: Hsba, bg: Hsba) -> f64 {
    let (fg_flat, bg_flat) = resolve_pair(fg, bg);
    let la = relative_luminance(fg_flat);
    let lb = relative_luminance(bg_flat);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

// ─── Conformance Levels ──────────────────────────────────────────────────────

/// The four WCAG 2.x conformance levels for text contrast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WcagLevel {
    /// AA for normal text: >= 4.5:1.
    AaNormal,
    /// AA for large text (18pt+, or 14pt+ bold): >= 3.0:1.
    AaLarge,
    /// AAA for normal text: >= 7.0:1.
    AaaNormal,
    /// AAA for large text: >= 4.5:1.
    AaaLarge,
}

impl WcagLevel {
    /// Minimum contrast ratio required by this level.
    #[must_use]
    pub const fn threshold(self) -> f64 {
        match self {
            Self::AaNormal | Self::AaaLarge => 4.5,
            Self::AaLarge => 3.0,
            Self::AaaNormal => 7.0,
        }
    }

    /// Human-readable label for reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AaNormal => "AA (normal text)",
            Self::AaLarge => "AA (large text)",
            Self::AaaNormal => "AAA (normal text)",
            Self::AaaLarge => "AAA (large text)",
        }
    }

    /// All levels, in report order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::AaNormal,
            Self::AaLarge,
            Self::AaaNormal,
            Self::AaaLarge,
        ]
    }
}

bitflags::bitflags! {
    /// Which conformance levels a measured ratio satisfies, as a
    /// compact bitfield.
    ///
    /// ```
    /// use forge_tokens::contrast::WcagPass;
    ///
    /// let passed = WcagPass::evaluate(5.0);
    /// assert!(passed.contains(WcagPass::AA_NORMAL));
    /// assert!(!passed.contains(WcagPass::AAA_NORMAL));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct WcagPass: u8 {
        /// Meets AA for normal text.
        const AA_NORMAL = 1 << 0;
        /// Meets AA for large text.
        const AA_LARGE = 1 << 1;
        /// Meets AAA for normal text.
        const AAA_NORMAL = 1 << 2;
        /// Meets AAA for large text.
        const AAA_LARGE = 1 << 3;
    }
}

impl WcagPass {
    /// Evaluate a measured ratio against every conformance level.
    #[must_use]
    pub fn evaluate(ratio: f64) -> Self {
        let mut passed = Self::empty();
        for &level in WcagLevel::all() {
            if ratio >= level.threshold() {
                passed |= Self::from_level(level);
            }
        }
        passed
    }

    /// The flag bit for a single level.
    #[must_use]
    pub const fn from_level(level: WcagLevel) -> Self {
        match level {
            WcagLevel::AaNormal => Self::AA_NORMAL,
            WcagLevel::AaLarge => Self::AA_LARGE,
            WcagLevel::AaaNormal => Self::AAA_NORMAL,
            WcagLevel::AaaLarge => Self::AAA_LARGE,
        }
    }

    /// Whether this result satisfies the given level.
    #[must_use]
    pub const fn passes(self, level: WcagLevel) -> bool {
        self.contains(Self::from_level(level))
    }
}

// ─── Report ──────────────────────────────────────────────────────────────────

/// The result of measuring one foreground/background token pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastReport {
    /// Measured contrast ratio, in [1.0, 21.0].
    pub ratio: f64,

    /// Conformance levels the ratio satisfies.
    pub passed: WcagPass,
}

impl ContrastReport {
    /// Measure a foreground/background pair and evaluate every level.
    #[must_use]
    pub fn measure(fg: Hsba, bg: Hsba) -> Self {
        let ratio = contrast_ratio(fg, bg);
        Self {
            ratio,
            passed: WcagPass::evaluate(ratio),
        }
    }
}

impl fmt::Display for ContrastReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contrast ratio: {:.2}:1", self.ratio)?;
        for &level in WcagLevel::all() {
            let verdict = if self.passed.passes(level) {
                "✓ Pass"
            } else {
                "✗ Fail"
            };
            write!(f, "\n{}: {verdict}", level.label())?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    fn black() -> Hsba {
        Hsba::opaque(0.0, 0.0, 0.0)
    }

    fn white() -> Hsba {
        Hsba::opaque(0.0, 0.0, 100.0)
    }

    // ── Relative luminance ──────────────────────────────────────────

    #[test]
    fn luminance_black_is_zero() {
        let lum = relative_luminance(Rgb::BLACK);
        assert!(approx_eq(lum, 0.0, 1e-9), "Black luminance: {lum}");
    }

    #[test]
    fn luminance_white_is_one() {
        let lum = relative_luminance(Rgb::WHITE);
        assert!(approx_eq(lum, 1.0, 1e-9), "White luminance: {lum}");
    }

    #[test]
    fn luminance_mid_gray() {
        let lum = relative_luminance(Rgb::new(128, 128, 128));
        // sRGB 128 linearizes to ~0.2159
        assert!(lum > 0.15 && lum < 0.30, "Mid-gray luminance: {lum}");
    }

    #[test]
    fn luminance_pure_red() {
        let lum = relative_luminance(Rgb::new(255, 0, 0));
        // Red contributes 0.2126
        assert!(approx_eq(lum, 0.2126, 1e-4), "Red luminance: {lum}");
    }

    #[test]
    fn luminance_pure_green() {
        let lum = relative_luminance(Rgb::new(0, 255, 0));
        // Green contributes 0.7152
        assert!(approx_eq(lum, 0.7152, 1e-4), "Green luminance: {lum}");
    }

    // ── Contrast ratio ──────────────────────────────────────────────

    #[test]
    fn contrast_black_white_is_21() {
        let ratio = contrast_ratio(black(), white());
        assert!(approx_eq(ratio, 21.0, 1e-9), "B/W contrast: {ratio}");
    }

    #[test]
    fn contrast_same_color_is_1() {
        let c = Hsba::opaque(217.0, 76.0, 96.0);
        let ratio = contrast_ratio(c, c);
        assert!(approx_eq(ratio, 1.0, 1e-9), "Same-color contrast: {ratio}");
    }

    #[test]
    fn contrast_is_symmetric() {
        let a = Hsba::opaque(217.0, 76.0, 96.0);
        let b = Hsba::opaque(38.0, 96.0, 96.0);
        let ab = contrast_ratio(a, b);
        let ba = contrast_ratio(b, a);
        assert!(approx_eq(ab, ba, 1e-12), "Asymmetric: {ab} vs {ba}");
    }

    #[test]
    fn contrast_always_at_least_one() {
        let a = Hsba::opaque(120.0, 30.0, 55.0);
        let b = Hsba::opaque(280.0, 40.0, 60.0);
        assert!(contrast_ratio(a, b) >= 1.0);
    }

    #[test]
    fn contrast_brand_blue_on_white() {
        // #3b82f6 has luminance ~0.2355 → ratio ~3.68 against white.
        let blue = Hsba::opaque(217.0, 76.0, 96.0);
        let ratio = contrast_ratio(blue, white());
        assert!(ratio > 3.6 && ratio < 3.8, "Blue-on-white: {ratio}");
    }

    // ── Alpha flattening ────────────────────────────────────────────

    #[test]
    fn translucent_black_flattens_to_gray() {
        // 50% black over white reads as mid-gray, ratio ~3.95.
        let fg = Hsba::new(0.0, 0.0, 0.0, 0.5);
        let ratio = contrast_ratio(fg, white());
        assert!(ratio > 3.9 && ratio < 4.0, "Flattened contrast: {ratio}");
    }

    #[test]
    fn translucent_background_composites_over_white() {
        // A fully transparent background is just the white page.
        let bg = Hsba::new(217.0, 76.0, 96.0, 0.0);
        let (_, bg_flat) = resolve_pair(black(), bg);
        assert_eq!(bg_flat, Rgb::WHITE);
    }

    // ── Conformance levels ──────────────────────────────────────────

    #[test]
    fn thresholds_match_wcag() {
        assert!(approx_eq(WcagLevel::AaNormal.threshold(), 4.5, 1e-12));
        assert!(approx_eq(WcagLevel::AaLarge.threshold(), 3.0, 1e-12));
        assert!(approx_eq(WcagLevel::AaaNormal.threshold(), 7.0, 1e-12));
        assert!(approx_eq(WcagLevel::AaaLarge.threshold(), 4.5, 1e-12));
    }

    #[test]
    fn evaluate_mid_ratio_splits_levels() {
        // 4.6 clears both AA levels and AAA-large, but not AAA-normal.
        let passed = WcagPass::evaluate(4.6);
        assert!(passed.passes(WcagLevel::AaNormal));
        assert!(passed.passes(WcagLevel::AaLarge));
        assert!(!passed.passes(WcagLevel::AaaNormal));
        assert!(passed.passes(WcagLevel::AaaLarge));
    }

    #[test]
    fn evaluate_low_ratio_passes_large_only() {
        let passed = WcagPass::evaluate(3.2);
        assert_eq!(passed, WcagPass::AA_LARGE);
    }

    #[test]
    fn evaluate_extremes() {
        assert_eq!(WcagPass::evaluate(1.0), WcagPass::empty());
        assert_eq!(WcagPass::evaluate(21.0), WcagPass::all());
    }

    #[test]
    fn threshold_is_inclusive() {
        assert!(WcagPass::evaluate(4.5).passes(WcagLevel::AaNormal));
        assert!(!WcagPass::evaluate(4.4999).passes(WcagLevel::AaNormal));
    }

    // ── Report ──────────────────────────────────────────────────────

    #[test]
    fn report_black_on_white_passes_everything() {
        let report = ContrastReport::measure(black(), white());
        assert_eq!(
            report.to_string(),
            "Contrast ratio: 21.00:1\n\
             AA (normal text): ✓ Pass\n\
             AA (large text): ✓ Pass\n\
             AAA (normal text): ✓ Pass\n\
             AAA (large text): ✓ Pass"
        );
    }

    #[test]
    fn report_brand_blue_fails_normal_text() {
        let report = ContrastReport::measure(Hsba::opaque(217.0, 76.0, 96.0), white());
        assert!(report.passed.passes(WcagLevel::AaLarge));
        assert!(!report.passed.passes(WcagLevel::AaNormal));
        assert!(report.to_string().contains("AA (large text): ✓ Pass"));
        assert!(report.to_string().contains("AA (normal text): ✗ Fail"));
    }
}

//! Modular type ramp — font sizes and line heights from one ratio.
//!
//! A base size and a scale ratio generate the whole nine-step ramp:
//! sizes above body text multiply up by successive powers of the ratio,
//! the one size below divides by it. Heading steps round up to whole
//! pixels; the two body steps keep the configured size untouched, so a
//! fractional base like 15.5 survives into the output.
//!
//! Line heights interpolate: body text gets the configured multiplier,
//! the largest display size tapers to a tight 1.0, and every step
//! between lands proportionally on that line, rounded to two decimals.

/// Named modular scale ratios, as type-scale pickers present them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeScale {
    /// 1.2 — subtle steps, dense interfaces.
    MinorThird,
    /// 1.25 — the common default.
    MajorThird,
    /// 1.333 — classic editorial scale.
    PerfectFourth,
    /// √2 — each second step doubles.
    AugmentedFourth,
    /// 1.5 — dramatic jumps, marketing pages.
    PerfectFifth,
    /// 1.618 — the golden ratio.
    GoldenRatio,
}

impl TypeScale {
    /// The numeric ratio between adjacent ramp steps.
    #[must_use]
    pub const fn ratio(self) -> f64 {
        match self {
            Self::MinorThird => 1.2,
            Self::MajorThird => 1.25,
            Self::PerfectFourth => 1.333,
            Self::AugmentedFourth => std::f64::consts::SQRT_2,
            Self::PerfectFifth => 1.5,
            Self::GoldenRatio => 1.618,
        }
    }

    /// Machine-friendly name of this scale.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MinorThird => "minor-third",
            Self::MajorThird => "major-third",
            Self::PerfectFourth => "perfect-fourth",
            Self::AugmentedFourth => "augmented-fourth",
            Self::PerfectFifth => "perfect-fifth",
            Self::GoldenRatio => "golden-ratio",
        }
    }

    /// Human-readable label for pickers and docs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MinorThird => "Minor Third",
            Self::MajorThird => "Major Third",
            Self::PerfectFourth => "Perfect Fourth",
            Self::AugmentedFourth => "Augmented Fourth",
            Self::PerfectFifth => "Perfect Fifth",
            Self::GoldenRatio => "Golden Ratio",
        }
    }

    /// Parse a scale from its name string (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::all().iter().find(|s| s.name() == lower).copied()
    }

    /// Match a raw ratio back to a named scale, if any.
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Option<Self> {
        Self::all()
            .iter()
            .find(|s| (s.ratio() - ratio).abs() < 1e-9)
            .copied()
    }

    /// All named scales, smallest ratio first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::MinorThird,
            Self::MajorThird,
            Self::PerfectFourth,
            Self::AugmentedFourth,
            Self::PerfectFifth,
            Self::GoldenRatio,
        ]
    }
}

// ─── Font Size Ramp ──────────────────────────────────────────────────────────

/// The nine-step font size ramp, in px.
///
/// `sm` and `base` both carry the configured base size; the distinction
/// exists so stylesheets can name the two roles separately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSizes {
    pub xs: f64,
    pub sm: f64,
    pub base: f64,
    pub lg: f64,
    pub h4: f64,
    pub h3: f64,
    pub h2: f64,
    pub h1: f64,
    pub display: f64,
}

impl FontSizes {
    /// Generate the ramp from a base size and scale ratio.
    ///
    /// Heading sizes round up to whole px so the ramp never loses a
    /// pixel to truncation; the two body steps stay exact.
    #[must_use]
    pub fn from_scale(base_size: f64, ratio: f64) -> Self {
        Self {
            xs: (base_size / ratio).ceil(),
            sm: base_size,
            base: base_size,
            lg: (base_size * ratio).ceil(),
            h4: (base_size * ratio.powi(2)).ceil(),
            h3: (base_size * ratio.powi(3)).ceil(),
            h2: (base_size * ratio.powi(4)).ceil(),
            h1: (base_size * ratio.powi(5)).ceil(),
            display: (base_size * ratio.powi(6)).ceil(),
        }
    }

    /// All steps as `(name, px)` pairs, smallest first.
    #[must_use]
    pub fn entries(self) -> [(&'static str, f64); 9] {
        [
            ("xs", self.xs),
            ("sm", self.sm),
            ("base", self.base),
            ("lg", self.lg),
            ("h4", self.h4),
            ("h3", self.h3),
            ("h2", self.h2),
            ("h1", self.h1),
            ("display", self.display),
        ]
    }

    /// The smallest and largest sizes — the interpolation endpoints for
    /// [`line_height`].
    #[must_use]
    pub const fn min_max(self) -> (f64, f64) {
        (self.xs, self.display)
    }
}

// ─── Line Heights ────────────────────────────────────────────────────────────

/// Interpolated line height multiplier for one ramp step.
///
/// The smallest size gets `base_line_height`, the largest tapers to
/// 1.0, and sizes between land linearly on that line. Rounded to two
/// decimals so emitted values stay short.
// Plain a - b * t keeps every intermediate rounding where the
// two-decimal step expects it.
#[allow(clippy::suboptimal_flops)]
#[must_use]
pub fn line_height(size: f64, min_size: f64, max_size: f64, base_line_height: f64) -> f64 {
    let span = max_size - min_size;
    let t = if span.abs() < f64::EPSILON {
        0.0
    } else {
        (size - min_size) / span
    };
    let lh = base_line_height - (base_line_height - 1.0) * t;
    (lh * 100.0).round() / 100.0
}

/// Line height in whole px for a size, rounding up.
#[must_use]
pub fn line_height_px(size: f64, line_height: f64) -> f64 {
    (size * line_height).ceil()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Spacing and border-radius step tables.
//!
//! Spacing comes in two families. The linear family multiplies the base
//! unit by each step key (a 4px base gives 4, 8, 12, 16 …). The
//! Fibonacci family walks the Fibonacci sequence instead, so gaps grow
//! organically (4, 8, 12, 20, 32 …). Which family applies is routed by
//! the preset multiplier: 1.618 selects Fibonacci, anything else is
//! linear — the multiplier itself never scales a value.
//!
//! Radius steps are fixed factors of the base radius, bracketed by
//! `none` (0) and `full` (9999, the CSS pill convention).

/// Named spacing presets, as spacing pickers present them.
///
/// Fibonacci and Golden Ratio share the 1.618 multiplier and therefore
/// the same table; both names are kept because pickers offer both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpacingPreset {
    /// Even steps: every gap is a multiple of the base unit.
    Linear,
    /// Fibonacci-sequence steps.
    Fibonacci,
    /// Alias of Fibonacci at the golden ratio multiplier.
    GoldenRatio,
    /// Material Design's doubled unit.
    MaterialDesign,
}

impl SpacingPreset {
    /// The multiplier stored in config for this preset.
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Linear => 1.0,
            Self::Fibonacci | Self::GoldenRatio => 1.618,
            Self::MaterialDesign => 2.0,
        }
    }

    /// Machine-friendly name of this preset.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Fibonacci => "fibonacci",
            Self::GoldenRatio => "golden-ratio",
            Self::MaterialDesign => "material-design",
        }
    }

    /// Human-readable label for pickers and docs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::Fibonacci => "Fibonacci",
            Self::GoldenRatio => "Golden Ratio",
            Self::MaterialDesign => "Material Design",
        }
    }

    /// Parse a preset from its name string (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::all().iter().find(|p| p.name() == lower).copied()
    }

    /// Match a stored multiplier back to a preset (first match wins, so
    /// 1.618 reads as Fibonacci).
    #[must_use]
    pub fn from_multiplier(multiplier: f64) -> Option<Self> {
        Self::all()
            .iter()
            .find(|p| (p.multiplier() - multiplier).abs() < 1e-9)
            .copied()
    }

    /// All presets, in picker order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Linear,
            Self::Fibonacci,
            Self::GoldenRatio,
            Self::MaterialDesign,
        ]
    }
}

// ─── Spacing Steps ───────────────────────────────────────────────────────────

/// Step keys for the linear family. Tailwind-style: dense at the small
/// end, sparse past 6.
const LINEAR_KEYS: [(&str, f64); 14] = [
    ("0", 0.0),
    ("0.5", 0.5),
    ("1", 1.0),
    ("2", 2.0),
    ("3", 3.0),
    ("4", 4.0),
    ("5", 5.0),
    ("6", 6.0),
    ("8", 8.0),
    ("10", 10.0),
    ("12", 12.0),
    ("16", 16.0),
    ("20", 20.0),
    ("24", 24.0),
];

/// The Fibonacci run the organic family walks. The first three entries
/// are covered by the fixed 0 / half / base steps.
const FIB: [f64; 10] = [0.0, 1.0, 1.0, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0, 34.0];

/// Generate the spacing table as `(key, px)` pairs, smallest first.
///
/// The multiplier routes between the two families and does nothing
/// else: 1.618 selects the Fibonacci table, every other value selects
/// the linear one (where steps are key × base, so the Linear and
/// Material presets produce identical values).
// The 1.618 sentinel is stored verbatim in config and compared
// verbatim here; it is never the result of arithmetic.
#[allow(clippy::float_cmp)]
#[must_use]
pub fn spacing_steps(base: f64, multiplier: f64) -> Vec<(&'static str, f64)> {
    if multiplier == 1.618 {
        vec![
            ("0", 0.0),
            ("0.5", base / 2.0),
            ("1", base),
            ("2", base * FIB[3]),
            ("3", base * FIB[4]),
            ("4", base * FIB[5]),
            ("5", base * FIB[6]),
            ("6", base * FIB[7]),
            ("8", base * FIB[8]),
            ("10", base * FIB[9]),
        ]
    } else {
        LINEAR_KEYS
            .iter()
            .map(|&(key, factor)| (key, base * factor))
            .collect()
    }
}

// ─── Radius Steps ────────────────────────────────────────────────────────────

/// Generate the border-radius table as `(key, px)` pairs, smallest
/// first. `DEFAULT` is the Tailwind convention for the bare `rounded`
/// utility; `full` is the 9999px pill.
#[must_use]
pub fn radius_steps(base: f64) -> [(&'static str, f64); 9] {
    [
        ("none", 0.0),
        ("sm", base / 2.0),
        ("DEFAULT", base),
        ("md", base * 1.5),
        ("lg", base * 2.0),
        ("xl", base * 3.0),
        ("2xl", base * 4.0),
        ("3xl", base * 6.0),
        ("full", 9999.0),
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn values(steps: &[(&'static str, f64)]) -> Vec<f64> {
        steps.iter().map(|&(_, v)| v).collect()
    }

    // ── Presets ─────────────────────────────────────────────────────

    #[test]
    fn four_presets() {
        assert_eq!(SpacingPreset::all().len(), 4);
    }

    #[test]
    fn name_roundtrip() {
        for &preset in SpacingPreset::all() {
            assert_eq!(SpacingPreset::from_name(preset.name()), Some(preset));
        }
        assert_eq!(SpacingPreset::from_name("Material-Design"), Some(SpacingPreset::MaterialDesign));
        assert_eq!(SpacingPreset::from_name("cubic"), None);
    }

    #[test]
    fn from_multiplier_first_match_wins() {
        // Fibonacci and Golden Ratio share 1.618; Fibonacci is listed first.
        assert_eq!(
            SpacingPreset::from_multiplier(1.618),
            Some(SpacingPreset::Fibonacci)
        );
        assert_eq!(
            SpacingPreset::from_multiplier(1.0),
            Some(SpacingPreset::Linear)
        );
        assert_eq!(
            SpacingPreset::from_multiplier(2.0),
            Some(SpacingPreset::MaterialDesign)
        );
        assert_eq!(SpacingPreset::from_multiplier(3.0), None);
    }

    // ── Spacing steps ───────────────────────────────────────────────

    #[test]
    fn linear_table_scales_by_key() {
        let steps = spacing_steps(4.0, 1.0);
        let keys: Vec<&str> = steps.iter().map(|&(k, _)| k).collect();
        assert_eq!(
            keys,
            ["0", "0.5", "1", "2", "3", "4", "5", "6", "8", "10", "12", "16", "20", "24"]
        );
        assert_eq!(
            values(&steps),
            [0.0, 2.0, 4.0, 8.0, 12.0, 16.0, 20.0, 24.0, 32.0, 40.0, 48.0, 64.0, 80.0, 96.0]
        );
    }

    #[test]
    fn fibonacci_table_walks_the_sequence() {
        let steps = spacing_steps(4.0, 1.618);
        let keys: Vec<&str> = steps.iter().map(|&(k, _)| k).collect();
        assert_eq!(keys, ["0", "0.5", "1", "2", "3", "4", "5", "6", "8", "10"]);
        assert_eq!(
            values(&steps),
            [0.0, 2.0, 4.0, 8.0, 12.0, 20.0, 32.0, 52.0, 84.0, 136.0]
        );
    }

    #[test]
    fn multiplier_only_routes_the_table() {
        // Linear and Material differ in multiplier but not in output.
        assert_eq!(spacing_steps(4.0, 1.0), spacing_steps(4.0, 2.0));
        // Only the exact Fibonacci sentinel switches families.
        assert_eq!(spacing_steps(4.0, 1.619), spacing_steps(4.0, 1.0));
    }

    #[test]
    fn spacing_is_ascending() {
        for multiplier in [1.0, 1.618, 2.0] {
            let vals = values(&spacing_steps(4.0, multiplier));
            for pair in vals.windows(2) {
                assert!(pair[0] < pair[1], "not ascending: {pair:?}");
            }
        }
    }

    // ── Radius steps ────────────────────────────────────────────────

    #[test]
    fn radius_table_for_default_base() {
        let steps = radius_steps(4.0);
        let keys: Vec<&str> = steps.iter().map(|&(k, _)| k).collect();
        assert_eq!(
            keys,
            ["none", "sm", "DEFAULT", "md", "lg", "xl", "2xl", "3xl", "full"]
        );
        assert_eq!(
            values(&steps),
            [0.0, 2.0, 4.0, 6.0, 8.0, 12.0, 16.0, 24.0, 9999.0]
        );
    }

    #[test]
    fn radius_full_is_pinned() {
        // The pill radius is a constant, not a multiple of the base.
        let steps = radius_steps(10.0);
        assert_eq!(steps[8], ("full", 9999.0));
    }
}

//! The curated font catalog behind the heading/body pickers.
//!
//! Each entry pairs a display name with the CSS font stack the exports
//! emit. The catalog is advisory: config files may carry any stack
//! string, and [`find_font`] simply answers whether a name is one of
//! the curated ones. Multi-word family names are pre-quoted in their
//! stacks, so values drop into stylesheets as-is.

/// Picker groupings for the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontCategory {
    SansSerif,
    Serif,
    /// Attention-grabbing faces for hero text.
    Display,
    Monospace,
    /// Stacks resolved from fonts the platform ships.
    System,
}

impl FontCategory {
    /// Human-readable label, as pickers group fonts.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SansSerif => "Sans-serif",
            Self::Serif => "Serif",
            Self::Display => "Display",
            Self::Monospace => "Monospace",
            Self::System => "System",
        }
    }

    /// All categories, in picker order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::SansSerif,
            Self::Serif,
            Self::Display,
            Self::Monospace,
            Self::System,
        ]
    }
}

/// One catalog font: display name, CSS stack, picker group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontOption {
    pub name: &'static str,
    pub stack: &'static str,
    pub category: FontCategory,
}

const fn font(name: &'static str, stack: &'static str, category: FontCategory) -> FontOption {
    FontOption { name, stack, category }
}

/// The full catalog, in picker order: sans-serif, serif, display,
/// monospace, then system stacks.
pub static FONT_CATALOG: [FontOption; 46] = [
    // ── Sans-serif ───────────────────────────────────────────────────────
    font("Inter", "Inter, sans-serif", FontCategory::SansSerif),
    font("Roboto", "Roboto, sans-serif", FontCategory::SansSerif),
    font("Open Sans", "'Open Sans', sans-serif", FontCategory::SansSerif),
    font("Lato", "Lato, sans-serif", FontCategory::SansSerif),
    font("Poppins", "Poppins, sans-serif", FontCategory::SansSerif),
    font("Montserrat", "Montserrat, sans-serif", FontCategory::SansSerif),
    font("Raleway", "Raleway, sans-serif", FontCategory::SansSerif),
    font(
        "Source Sans Pro",
        "'Source Sans Pro', sans-serif",
        FontCategory::SansSerif,
    ),
    font("Nunito", "Nunito, sans-serif", FontCategory::SansSerif),
    font("Work Sans", "'Work Sans', sans-serif", FontCategory::SansSerif),
    font("DM Sans", "'DM Sans', sans-serif", FontCategory::SansSerif),
    font("Manrope", "Manrope, sans-serif", FontCategory::SansSerif),
    font(
        "Space Grotesk",
        "'Space Grotesk', sans-serif",
        FontCategory::SansSerif,
    ),
    font("Outfit", "Outfit, sans-serif", FontCategory::SansSerif),
    font(
        "Plus Jakarta Sans",
        "'Plus Jakarta Sans', sans-serif",
        FontCategory::SansSerif,
    ),
    font("Figtree", "Figtree, sans-serif", FontCategory::SansSerif),
    font("Satoshi", "Satoshi, sans-serif", FontCategory::SansSerif),
    font("Urbanist", "Urbanist, sans-serif", FontCategory::SansSerif),
    font("Quicksand", "Quicksand, sans-serif", FontCategory::SansSerif),
    // ── Serif ────────────────────────────────────────────────────────────
    font(
        "Playfair Display",
        "'Playfair Display', serif",
        FontCategory::Serif,
    ),
    font("Merriweather", "Merriweather, serif", FontCategory::Serif),
    font("Georgia", "Georgia, serif", FontCategory::Serif),
    font("Lora", "Lora, serif", FontCategory::Serif),
    font("Crimson Text", "'Crimson Text', serif", FontCategory::Serif),
    font("PT Serif", "'PT Serif', serif", FontCategory::Serif),
    font("Bitter", "Bitter, serif", FontCategory::Serif),
    font(
        "Libre Baskerville",
        "'Libre Baskerville', serif",
        FontCategory::Serif,
    ),
    font("EB Garamond", "'EB Garamond', serif", FontCategory::Serif),
    font("Cormorant", "Cormorant, serif", FontCategory::Serif),
    // ── Display ──────────────────────────────────────────────────────────
    font("Bebas Neue", "'Bebas Neue', display", FontCategory::Display),
    font("Righteous", "Righteous, display", FontCategory::Display),
    font("Alfa Slab One", "'Alfa Slab One', display", FontCategory::Display),
    font("Archivo Black", "'Archivo Black', display", FontCategory::Display),
    font("Passion One", "'Passion One', display", FontCategory::Display),
    // ── Monospace ────────────────────────────────────────────────────────
    font("Roboto Mono", "'Roboto Mono', monospace", FontCategory::Monospace),
    font(
        "JetBrains Mono",
        "'JetBrains Mono', monospace",
        FontCategory::Monospace,
    ),
    font(
        "Source Code Pro",
        "'Source Code Pro', monospace",
        FontCategory::Monospace,
    ),
    font(
        "IBM Plex Mono",
        "'IBM Plex Mono', monospace",
        FontCategory::Monospace,
    ),
    font("Fira Code", "'Fira Code', monospace", FontCategory::Monospace),
    font("Space Mono", "'Space Mono', monospace", FontCategory::Monospace),
    font("Inconsolata", "Inconsolata, monospace", FontCategory::Monospace),
    // ── System ───────────────────────────────────────────────────────────
    font(
        "System UI",
        "system-ui, -apple-system, sans-serif",
        FontCategory::System,
    ),
    font("Arial", "Arial, sans-serif", FontCategory::System),
    font("Helvetica", "Helvetica, sans-serif", FontCategory::System),
    font("Times New Roman", "'Times New Roman', serif", FontCategory::System),
    font("Courier New", "'Courier New', monospace", FontCategory::System),
];

/// Look up a catalog font by display name (case-insensitive).
#[must_use]
pub fn find_font(name: &str) -> Option<&'static FontOption> {
    FONT_CATALOG.iter().find(|f| f.name.eq_ignore_ascii_case(name))
}

/// All catalog fonts in one category, in catalog order.
pub fn fonts_in_category(category: FontCategory) -> impl Iterator<Item = &'static FontOption> {
    FONT_CATALOG.iter().filter(move |f| f.category == category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn catalog_counts_per_category() {
        let count = |c| fonts_in_category(c).count();
        assert_eq!(count(FontCategory::SansSerif), 19);
        assert_eq!(count(FontCategory::Serif), 10);
        assert_eq!(count(FontCategory::Display), 5);
        assert_eq!(count(FontCategory::Monospace), 7);
        assert_eq!(count(FontCategory::System), 5);
    }

    #[test]
    fn catalog_is_grouped_by_category() {
        // Picker order: each category is one contiguous run.
        let order = FontCategory::all();
        let positions: Vec<_> = FONT_CATALOG
            .iter()
            .map(|f| order.iter().position(|c| *c == f.category).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn find_font_ignores_case() {
        assert_eq!(find_font("inter").unwrap().stack, "Inter, sans-serif");
        assert_eq!(
            find_font("JETBRAINS MONO").unwrap().stack,
            "'JetBrains Mono', monospace"
        );
    }

    #[test]
    fn find_font_unknown_is_none() {
        assert_eq!(find_font("Comic Sans MS"), None);
    }

    #[test]
    fn multi_word_families_are_quoted() {
        for f in &FONT_CATALOG {
            if f.name.contains(' ') && f.name != "System UI" {
                assert!(f.stack.starts_with('\''), "{} stack unquoted", f.name);
            }
        }
    }

    #[test]
    fn default_fonts_are_in_the_catalog() {
        assert!(find_font("Inter").is_some());
        assert_eq!(find_font("Inter").unwrap().category, FontCategory::SansSerif);
    }
}

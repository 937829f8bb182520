//! Export format selection.

/// The output formats a token set ships in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// CSS custom properties in a `:root` block.
    Css,
    /// SCSS variables.
    Scss,
    /// Plain JSON.
    Json,
    /// A JavaScript module exporting the tokens as an object literal.
    Js,
}

impl ExportFormat {
    /// Machine-friendly name, as the CLI accepts it.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Json => "json",
            Self::Js => "js",
        }
    }

    /// Conventional file extension. Coincides with [`name`](Self::name)
    /// for every current format.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        self.name()
    }

    /// Human-readable label for pickers and docs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Css => "CSS Variables",
            Self::Scss => "SCSS Variables",
            Self::Json => "JSON",
            Self::Js => "JavaScript",
        }
    }

    /// Parse a format from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::all().iter().find(|f| f.name() == lower).copied()
    }

    /// All formats, in picker order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Css, Self::Scss, Self::Json, Self::Js]
    }
}

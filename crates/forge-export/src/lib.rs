//! # forge-export — Token File Writers
//!
//! Serializes a token set into the formats build pipelines consume:
//! CSS custom properties, SCSS variables, plain JSON, and a JavaScript
//! module. Every writer walks the same derivation in the same order, so
//! the formats always agree — a token present in one export is present
//! in all of them, under the same name and value.
//!
//! ```
//! use forge_export::{ExportFormat, render};
//! use forge_tokens::TokenSet;
//!
//! let css = render(&TokenSet::default(), ExportFormat::Css).unwrap();
//! assert!(css.starts_with(":root {"));
//! ```

pub mod format;
pub mod json;
pub mod stylesheet;

pub use format::ExportFormat;

use forge_color::color::ParseColorError;
use forge_tokens::TokenSet;

/// Render a token set in the given format.
///
/// # Errors
///
/// Returns the parse error of the first malformed hex color in the
/// set's config.
pub fn render(tokens: &TokenSet, format: ExportFormat) -> Result<String, ParseColorError> {
    match format {
        ExportFormat::Css => stylesheet::render_css(tokens),
        ExportFormat::Scss => stylesheet::render_scss(tokens),
        ExportFormat::Json => json::render_json(tokens),
        ExportFormat::Js => json::render_js(tokens),
    }
}

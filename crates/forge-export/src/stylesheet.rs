//! CSS and SCSS writers.
//!
//! Both formats are the same walk over the derived tokens — titled
//! sections of name/value lines — spelled with different sigils
//! (`--name` vs `$name`) and comment syntax. The walk lives in
//! [`sections`]; the two writers only decide how a line looks.

use forge_color::color::{ParseColorError, Rgb};
use forge_tokens::config::TokenSet;
use forge_tokens::palette::{self, BrandColors, MonoScale};
use forge_tokens::spacing::{radius_steps, spacing_steps};
use forge_tokens::typography::FontSizes;

/// One stylesheet section: a comment title above name/value lines.
///
/// Entry names carry everything but the sigil (`color-primary-text`,
/// `bg-active`, `font-size-xs`), so one section list serves both
/// formats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub entries: Vec<(String, String)>,
}

impl Section {
    fn new(title: &'static str) -> Self {
        Self { title, entries: Vec::new() }
    }

    fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }
}

/// Assemble every export section, in emission order: brand colors,
/// status colors, the monochromatic scale, semantic tokens, typography,
/// spacing, border radius.
///
/// # Errors
///
/// Returns the parse error of the first malformed hex color.
pub fn sections(tokens: &TokenSet) -> Result<Vec<Section>, ParseColorError> {
    let brand = BrandColors::resolve(&tokens.colors)?;

    let mut brand_colors = Section::new("Brand Colors");
    push_scale(&mut brand_colors, "primary", brand.primary);

    let mut status = Section::new("Status Colors");
    push_scale(&mut status, "error", brand.error);
    push_scale(&mut status, "warning", brand.warning);
    push_scale(&mut status, "success", brand.success);

    let mut mono = Section::new("Monochromatic Scale");
    for (name, color) in MonoScale::standard().entries() {
        mono.push(format!("color-mono-{name}"), color.to_rgba_string());
    }

    let mut semantic = Section::new("Semantic Tokens");
    for (name, value) in palette::semantic_tokens(brand) {
        semantic.push(name, value);
    }

    let t = &tokens.typography;
    let mut typography = Section::new("Typography");
    typography.push("font-heading", t.heading_font.clone());
    typography.push("font-body", t.body_font.clone());
    typography.push("line-height-base", number(t.base_line_height));
    for (name, size) in FontSizes::from_scale(t.base_size, t.type_scale).entries() {
        typography.push(format!("font-size-{name}"), px(size));
    }

    let s = &tokens.spacing;
    let mut spacing = Section::new("Spacing");
    for (key, value) in spacing_steps(s.base_spacing, s.spacing_scale) {
        spacing.push(format!("spacing-{key}"), px(value));
    }

    let mut radius = Section::new("Border Radius");
    for (key, value) in radius_steps(s.base_radius) {
        radius.push(format!("radius-{key}"), px(value));
    }

    Ok(vec![
        brand_colors,
        status,
        mono,
        semantic,
        typography,
        spacing,
        radius,
    ])
}

fn push_scale(section: &mut Section, color_name: &str, base: Rgb) {
    for entry in palette::color_scale(base) {
        section.push(format!("color-{color_name}-{}", entry.name), entry.rgba);
    }
}

/// Render the token set as a CSS `:root` block. No trailing newline:
/// the closing brace is the last byte.
///
/// # Errors
///
/// Returns the parse error of the first malformed hex color.
pub fn render_css(tokens: &TokenSet) -> Result<String, ParseColorError> {
    let sections = sections(tokens)?;
    let mut out = String::with_capacity(4096);
    out.push_str(":root {\n");
    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str("  /* ");
        out.push_str(section.title);
        out.push_str(" */\n");
        for (name, value) in &section.entries {
            out.push_str("  --");
            out.push_str(name);
            out.push_str(": ");
            out.push_str(value);
            out.push_str(";\n");
        }
    }
    out.push('}');
    Ok(out)
}

/// Render the token set as SCSS variables.
///
/// # Errors
///
/// Returns the parse error of the first malformed hex color.
pub fn render_scss(tokens: &TokenSet) -> Result<String, ParseColorError> {
    let sections = sections(tokens)?;
    let mut out = String::with_capacity(4096);
    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str("// ");
        out.push_str(section.title);
        out.push('\n');
        for (name, value) in &section.entries {
            out.push('$');
            out.push_str(name);
            out.push_str(": ");
            out.push_str(value);
            out.push_str(";\n");
        }
    }
    Ok(out)
}

/// A px quantity with no trailing zeros: `0px`, `2px`, `2.5px`.
fn px(value: f64) -> String {
    format!("{}px", number(value))
}

/// Minimal decimal form of a number: `2`, `2.5`, `1.618`.
#[allow(clippy::float_cmp, clippy::cast_possible_truncation)]
fn number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

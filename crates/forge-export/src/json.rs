//! JSON and JavaScript-module writers.
//!
//! The tree nests the derived scales under alphabetical top-level keys
//! (`borderRadius`, `colors`, `spacing`, `typography`). Maps keep
//! insertion order (serde_json's `preserve_order` feature), so the
//! emitted document reads the same every run and diffs stay small.

use forge_color::color::{ParseColorError, Rgb};
use forge_tokens::config::TokenSet;
use forge_tokens::palette::{self, BrandColors, MonoScale};
use forge_tokens::spacing::{radius_steps, spacing_steps};
use forge_tokens::typography::FontSizes;
use serde_json::{Map, Number, Value};

/// Render the token set as pretty-printed JSON (two-space indent).
///
/// # Errors
///
/// Returns the parse error of the first malformed hex color.
pub fn render_json(tokens: &TokenSet) -> Result<String, ParseColorError> {
    let tree = build_tree(tokens)?;
    Ok(serde_json::to_string_pretty(&tree).expect("a Value tree always serializes"))
}

/// Render the token set as a JavaScript module: the JSON wrapped in an
/// `export const tokens` declaration.
///
/// # Errors
///
/// Returns the parse error of the first malformed hex color.
pub fn render_js(tokens: &TokenSet) -> Result<String, ParseColorError> {
    Ok(format!("export const tokens = {}", render_json(tokens)?))
}

fn build_tree(tokens: &TokenSet) -> Result<Value, ParseColorError> {
    let brand = BrandColors::resolve(&tokens.colors)?;
    let s = &tokens.spacing;

    let mut radius = Map::new();
    for (key, value) in radius_steps(s.base_radius) {
        radius.insert(key.to_string(), number_value(value));
    }

    let mut spacing = Map::new();
    for (key, value) in spacing_steps(s.base_spacing, s.spacing_scale) {
        spacing.insert(key.to_string(), number_value(value));
    }

    let mut root = Map::new();
    root.insert("borderRadius".to_string(), Value::Object(radius));
    root.insert("colors".to_string(), colors_value(tokens, brand));
    root.insert("spacing".to_string(), Value::Object(spacing));
    root.insert("typography".to_string(), typography_value(tokens));
    Ok(Value::Object(root))
}

fn colors_value(tokens: &TokenSet, brand: BrandColors) -> Value {
    let c = &tokens.colors;
    let mut colors = Map::new();
    colors.insert("error".to_string(), base_and_scale(&c.error, brand.error));
    colors.insert("monochromatic".to_string(), mono_value());
    colors.insert(
        "primary".to_string(),
        base_and_scale(&c.primary, brand.primary),
    );
    colors.insert("semantic".to_string(), semantic_value(brand));
    colors.insert(
        "success".to_string(),
        base_and_scale(&c.success, brand.success),
    );
    colors.insert(
        "warning".to_string(),
        base_and_scale(&c.warning, brand.warning),
    );
    Value::Object(colors)
}

/// `{ "base": <configured hex>, "scale": { step: rgba } }` for one
/// brand or status color. The hex passes through as configured.
fn base_and_scale(hex: &str, base: Rgb) -> Value {
    let mut scale = Map::new();
    for entry in palette::color_scale(base) {
        scale.insert(entry.name.to_string(), Value::String(entry.rgba));
    }
    let mut map = Map::new();
    map.insert("base".to_string(), Value::String(hex.to_string()));
    map.insert("scale".to_string(), Value::Object(scale));
    Value::Object(map)
}

fn mono_value() -> Value {
    let mut mono = Map::new();
    for (name, color) in MonoScale::standard().entries() {
        mono.insert(name.to_string(), Value::String(color.to_rgba_string()));
    }
    Value::Object(mono)
}

fn semantic_value(brand: BrandColors) -> Value {
    let mut semantic = Map::new();
    for (name, value) in palette::semantic_tokens(brand) {
        semantic.insert(name.to_string(), Value::String(value));
    }
    Value::Object(semantic)
}

fn typography_value(tokens: &TokenSet) -> Value {
    let t = &tokens.typography;

    let mut fonts = Map::new();
    fonts.insert("body".to_string(), Value::String(t.body_font.clone()));
    fonts.insert("heading".to_string(), Value::String(t.heading_font.clone()));

    let mut line_height = Map::new();
    line_height.insert("base".to_string(), number_value(t.base_line_height));

    let mut sizes = Map::new();
    for (name, size) in FontSizes::from_scale(t.base_size, t.type_scale).entries() {
        sizes.insert(name.to_string(), number_value(size));
    }

    let mut typography = Map::new();
    typography.insert("fonts".to_string(), Value::Object(fonts));
    typography.insert("lineHeight".to_string(), Value::Object(line_height));
    typography.insert("sizes".to_string(), Value::Object(sizes));
    Value::Object(typography)
}

/// A JSON number: integral values emit as integers (`16`, not `16.0`),
/// the rest as doubles. Non-finite values have no JSON number form and
/// fall back to null.
#[allow(clippy::float_cmp, clippy::cast_possible_truncation)]
fn number_value(value: f64) -> Value {
    if value.fract() == 0.0 && value.abs() < 9e15 {
        Value::Number(Number::from(value as i64))
    } else {
        Number::from_f64(value).map_or(Value::Null, Value::Number)
    }
}

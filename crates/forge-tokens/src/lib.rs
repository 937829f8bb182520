//! # forge-tokens — Design Token Derivation Engine
//!
//! Generates a complete design token set from a handful of base values.
//! One parameter shift (brand hex, type scale ratio, spacing preset)
//! reflows every derived token — color scales, semantic roles, the type
//! ramp, spacing and radius steps — while keeping them consistent with
//! each other.
//!
//! # Architecture
//!
//! ```text
//! TokenSet (config.rs: base colors + typography + spacing inputs)
//!     │
//!     ├─▶ palette.rs:    opacity scales, monochromatic ramp,
//!     │                  semantic roles, tint/shade ramps
//!     │
//!     ├─▶ typography.rs: modular font-size ramp + line heights
//!     │
//!     ├─▶ spacing.rs:    spacing steps + border radius steps
//!     │
//!     └─▶ contrast.rs:   WCAG 2.x ratio measurement and pass/fail
//!                        evaluation for any token pair
//! ```
//!
//! # Determinism
//!
//! Derivation is pure arithmetic over the inputs. The same `TokenSet`
//! always produces the same tokens down to the exact string, which is
//! what makes regenerated output files diffable.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Scale math uses small integer-to-float casts (step indices, exponents).
#![allow(clippy::cast_precision_loss)]
// Hue/saturation/brightness variable names are inherently similar.
#![allow(clippy::similar_names)]
// Token tables are inherently long — one entry per token.
#![allow(clippy::too_many_lines)]

pub mod config;
pub mod contrast;
pub mod fonts;
pub mod palette;
pub mod spacing;
pub mod typography;

pub use config::TokenSet;
pub use contrast::{ContrastReport, WcagLevel};
pub use spacing::SpacingPreset;
pub use typography::TypeScale;

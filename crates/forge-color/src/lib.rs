// SPDX-License-Identifier: MIT
//
// forge-color — Color primitives for token-forge.
//
// The smallest crate in the workspace and the one everything else
// leans on. It models colors the way designers hand them to us
// (hex strings, hue/saturation/brightness sliders) and converts
// between those forms without drifting: the same input always
// produces the same bytes in the output, which is what makes
// generated token files diffable.
//
// This crate intentionally avoids external color libraries (palette,
// csscolorparser) in favor of direct channel math. Every conversion
// is a handful of arithmetic ops with a documented rounding step.

pub mod color;

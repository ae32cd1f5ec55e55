// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Color conversion, part of the style extractor (C2). Figma channels are
//! floats in `[0,1]`; the emitted `ColorString` is either `#RRGGBB` or
//! `rgba(r,g,b,a)` depending on effective alpha.

use crate::figma_schema::FigmaColor;

/// The sentinel returned when effective alpha is exactly zero: the style
/// field carrying it should be dropped by the caller rather than emitted.
pub const TRANSPARENT: &str = "transparent";

/// Converts a Figma color plus an ambient opacity multiplier (the parent
/// node's `opacity`, or the paint's own `opacity`) into a `ColorString`.
/// `alpha = (color.a ?? 1) * opacity_multiplier`.
pub fn to_color_string(color: &FigmaColor, opacity_multiplier: f32) -> String {
    let alpha = color.a.unwrap_or(1.0) * opacity_multiplier;
    if alpha <= 0.0 {
        return TRANSPARENT.to_string();
    }
    let r = to_u8(color.r);
    let g = to_u8(color.g);
    let b = to_u8(color.b);
    if alpha < 1.0 {
        format!("rgba({},{},{},{:.2})", r, g, b, alpha)
    } else {
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }
}

fn to_u8(channel: f32) -> u8 {
    (channel * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(r: f32, g: f32, b: f32, a: Option<f32>) -> FigmaColor {
        FigmaColor { r, g, b, a }
    }

    #[test]
    fn opaque_color_emits_hex() {
        let c = color(0.03, 0.56, 0.72, None);
        assert_eq!(to_color_string(&c, 1.0), "#088FB8");
    }

    #[test]
    fn zero_alpha_is_transparent_sentinel() {
        let c = color(1.0, 1.0, 1.0, Some(0.0));
        assert_eq!(to_color_string(&c, 1.0), "transparent");
    }

    #[test]
    fn partial_alpha_emits_rgba_with_two_decimals() {
        let c = color(0.0, 0.0, 0.0, Some(0.5));
        assert_eq!(to_color_string(&c, 1.0), "rgba(0,0,0,0.50)");
    }

    #[test]
    fn node_opacity_multiplies_into_alpha() {
        let c = color(1.0, 0.0, 0.0, Some(1.0));
        assert_eq!(to_color_string(&c, 0.5), "rgba(255,0,0,0.50)");
    }
}

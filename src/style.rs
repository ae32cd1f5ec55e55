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

//! Style extractor (C2): converts Figma fills, strokes, effects, corner
//! radius, opacity and typography into a language-neutral `UIStyle`.

use serde::{Deserialize, Serialize};

use crate::color::to_color_string;
use crate::figma_schema::FigmaNode;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub color: String,
    pub offset: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundGradient {
    #[serde(rename = "type")]
    pub gradient_type: String, // always "linear"
    pub start: Point,
    pub end: Point,
    pub stops: Vec<GradientStop>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UIStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_gradient: Option<BackgroundGradient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

impl UIStyle {
    pub fn is_empty(&self) -> bool {
        self.background_color.is_none()
            && self.background_gradient.is_none()
            && self.border_color.is_none()
            && self.border_width.is_none()
            && self.border_radius.is_none()
            && self.opacity.is_none()
            && self.text_color.is_none()
            && self.font_size.is_none()
            && self.font_weight.is_none()
            && self.font_family.is_none()
    }
}

/// Extracts visual style common to any node (fills/strokes/effects/corner
/// radius/opacity), per section 4.2. Typography is layered on top by
/// `extract_text_style` for TEXT nodes specifically.
pub fn extract_style(node: &FigmaNode) -> UIStyle {
    let mut style = UIStyle::default();
    let node_opacity = node.opacity.unwrap_or(1.0);

    if let Some((handles, stops, paint_opacity)) = FigmaNode::first_visible_linear_gradient(&node.fills) {
        let start = handles.first().map(|v| Point { x: v.x, y: v.y }).unwrap_or(Point { x: 0.0, y: 0.0 });
        let end = handles.get(1).map(|v| Point { x: v.x, y: v.y }).unwrap_or(Point { x: 1.0, y: 1.0 });
        style.background_gradient = Some(BackgroundGradient {
            gradient_type: "linear".to_string(),
            start,
            end,
            stops: stops
                .iter()
                .map(|s| GradientStop {
                    color: to_color_string(&s.color, paint_opacity),
                    offset: s.position.unwrap_or(s.offset),
                })
                .collect(),
        });
    } else if let Some((fill, paint_opacity)) = FigmaNode::first_visible_solid(&node.fills) {
        let color_string = to_color_string(fill, paint_opacity);
        if color_string != crate::color::TRANSPARENT {
            style.background_color = Some(color_string);
        }
    }

    if let Some((stroke, paint_opacity)) = FigmaNode::first_visible_solid(&node.strokes) {
        let color_string = to_color_string(stroke, paint_opacity);
        if color_string != crate::color::TRANSPARENT {
            style.border_color = Some(color_string);
            style.border_width = Some(node.stroke_weight.unwrap_or(1.0));
        }
    }

    if let Some(radius) = node.corner_radius {
        style.border_radius = Some(radius);
    }

    if node_opacity < 1.0 {
        style.opacity = Some(node_opacity);
    }

    style
}

/// Typography overlay for TEXT nodes: `fontSize`/`fontWeight`/`fontFamily`
/// copied verbatim, `textColor` from the first visible solid fill.
pub fn extract_text_style(node: &FigmaNode) -> UIStyle {
    let mut style = extract_style(node);
    if let Some(type_style) = &node.style {
        style.font_size = type_style.font_size;
        style.font_weight = type_style.font_weight;
        style.font_family = type_style.font_family.clone();
    }
    if let Some((fill, paint_opacity)) = FigmaNode::first_visible_solid(&node.fills) {
        let color_string = to_color_string(fill, paint_opacity);
        if color_string != crate::color::TRANSPARENT {
            style.text_color = Some(color_string);
        }
    }
    // backgroundColor doesn't apply to TEXT nodes; the fill there is text color.
    style.background_color = None;
    style
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figma_schema::{FigmaColor, Paint, PaintData};

    fn solid_fill(r: f32, g: f32, b: f32) -> Paint {
        Paint { visible: true, opacity: 1.0, data: PaintData::Solid { color: FigmaColor { r, g, b, a: None } } }
    }

    #[test]
    fn background_color_from_first_visible_solid_fill() {
        let node = FigmaNode { fills: vec![solid_fill(1.0, 0.0, 0.0)], ..Default::default() };
        let style = extract_style(&node);
        assert_eq!(style.background_color.as_deref(), Some("#FF0000"));
    }

    #[test]
    fn invisible_fill_is_skipped() {
        let mut fill = solid_fill(1.0, 0.0, 0.0);
        fill.visible = false;
        let node = FigmaNode { fills: vec![fill], ..Default::default() };
        let style = extract_style(&node);
        assert!(style.background_color.is_none());
    }

    #[test]
    fn border_width_defaults_to_one() {
        let node = FigmaNode { strokes: vec![solid_fill(0.0, 0.0, 0.0)], ..Default::default() };
        let style = extract_style(&node);
        assert_eq!(style.border_width, Some(1.0));
    }

    #[test]
    fn fill_opacity_multiplies_into_background_alpha_independent_of_node_opacity() {
        let mut fill = solid_fill(1.0, 0.0, 0.0);
        fill.opacity = 0.5;
        let node = FigmaNode { fills: vec![fill], opacity: None, ..Default::default() };
        let style = extract_style(&node);
        assert_eq!(style.background_color.as_deref(), Some("rgba(255,0,0,0.50)"));
        assert!(style.opacity.is_none());
    }
}

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

//! We use serde to decode a Figma REST API document into Rust structures.
//! Unlike a full client, we consult only the whitelisted fields the core
//! cares about; every other field present in a real Figma response is
//! silently ignored by `#[serde(default)]` rather than rejected, so the
//! transport layer can hand us an unmodified response.

use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct FigmaColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default)]
    pub a: Option<f32>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default)]
pub struct Rectangle {
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    #[serde(default)]
    pub width: f32,
    #[serde(default)]
    pub height: f32,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ColorStop {
    pub color: FigmaColor,
    pub offset: f32,
    #[serde(default)]
    pub position: Option<f32>,
}

fn default_visible() -> bool {
    true
}
fn default_opacity() -> f32 {
    1.0
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum PaintData {
    #[serde(rename = "SOLID")]
    Solid {
        color: FigmaColor,
    },
    #[serde(rename = "GRADIENT_LINEAR", rename_all = "camelCase")]
    GradientLinear {
        #[serde(default)]
        gradient_handle_positions: Vec<Vector>,
        gradient_stops: Vec<ColorStop>,
    },
    #[serde(other)]
    Other,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Paint {
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default = "default_opacity")]
    pub opacity: f32,
    #[serde(flatten)]
    pub data: PaintData,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EffectType {
    InnerShadow,
    DropShadow,
    LayerBlur,
    BackgroundBlur,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Effect {
    #[serde(rename = "type")]
    pub effect_type: EffectType,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutMode {
    #[default]
    None,
    Horizontal,
    Vertical,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CounterAxisAlignItems {
    Min,
    Center,
    Max,
    Stretch,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct TypeStyle {
    pub font_size: Option<f32>,
    pub font_weight: Option<f32>,
    pub font_family: Option<String>,
}

/// Known Figma node types whose presence the classifier and builder care
/// about. Anything else deserializes into `Other` and is treated as a
/// generic frame.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeType {
    #[serde(rename = "DOCUMENT")]
    Document,
    #[serde(rename = "CANVAS")]
    Canvas,
    #[serde(rename = "PAGE")]
    Page,
    #[serde(rename = "FRAME")]
    Frame,
    #[serde(rename = "GROUP")]
    Group,
    #[serde(rename = "COMPONENT")]
    Component,
    #[serde(rename = "COMPONENT_SET")]
    ComponentSet,
    #[serde(rename = "INSTANCE")]
    Instance,
    #[serde(rename = "TEXT")]
    Text,
    #[serde(rename = "VECTOR")]
    Vector,
    #[serde(other)]
    #[default]
    Other,
}

/// A raw Figma node, restricted to the whitelisted fields of spec section
/// 3.1. `#[serde(default)]` everywhere means a bare `{"id":..,"name":..,
/// "type":..}` document still deserializes.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct FigmaNode {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default = "default_node_type")]
    pub node_type: NodeType,
    #[serde(default = "default_visible")]
    pub visible: bool,
    pub opacity: Option<f32>,
    #[serde(default)]
    pub children: Vec<FigmaNode>,
    pub characters: Option<String>,
    pub layout_mode: Option<LayoutMode>,
    pub item_spacing: Option<f32>,
    pub padding_top: Option<f32>,
    pub padding_right: Option<f32>,
    pub padding_bottom: Option<f32>,
    pub padding_left: Option<f32>,
    pub counter_axis_align_items: Option<CounterAxisAlignItems>,
    pub absolute_bounding_box: Option<Rectangle>,
    pub style: Option<TypeStyle>,
    #[serde(default)]
    pub fills: Vec<Paint>,
    #[serde(default)]
    pub strokes: Vec<Paint>,
    pub stroke_weight: Option<f32>,
    #[serde(default)]
    pub effects: Vec<Effect>,
    pub corner_radius: Option<f32>,
}

fn default_node_type() -> NodeType {
    NodeType::Other
}

impl FigmaNode {
    pub fn is_text(&self) -> bool {
        self.node_type == NodeType::Text
    }

    /// First visible solid fill, honoring gradient precedence rules handled
    /// by the caller (style.rs): this only walks the fill list. Returns the
    /// paint's own `opacity` alongside the color, distinct from the node's
    /// own `opacity`, so the caller can fold it into the alpha formula
    /// (section 4.2). A paint with `opacity: 0.0` is still the first visible
    /// paint and is selected here; it's `to_color_string` that turns it into
    /// the transparent sentinel.
    pub fn first_visible_solid(paints: &[Paint]) -> Option<(&FigmaColor, f32)> {
        paints.iter().find_map(|p| {
            if !p.visible {
                return None;
            }
            match &p.data {
                PaintData::Solid { color } => Some((color, p.opacity)),
                _ => None,
            }
        })
    }

    pub fn first_visible_linear_gradient(paints: &[Paint]) -> Option<(&[Vector], &[ColorStop], f32)> {
        paints.iter().find_map(|p| {
            if !p.visible {
                return None;
            }
            match &p.data {
                PaintData::GradientLinear { gradient_handle_positions, gradient_stops } => {
                    Some((gradient_handle_positions.as_slice(), gradient_stops.as_slice(), p.opacity))
                }
                _ => None,
            }
        })
    }
}

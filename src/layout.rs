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

//! Layout extractor (C3): reads Figma auto-layout fields into a normalized,
//! framework-neutral `UILayout`.

use serde::{Deserialize, Serialize};

use crate::figma_schema::{CounterAxisAlignItems, FigmaNode, LayoutMode};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Start,
    Center,
    End,
    Stretch,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaddingSides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Padding {
    Uniform(f32),
    Sides(PaddingSides),
}

impl Padding {
    /// The "dominant" numeric padding used by CARD's padding-size quantization:
    /// the uniform value, or the largest side present.
    pub fn dominant(&self) -> f32 {
        match self {
            Padding::Uniform(n) => *n,
            Padding::Sides(sides) => [sides.top, sides.right, sides.bottom, sides.left]
                .into_iter()
                .flatten()
                .fold(0.0_f32, f32::max),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UILayout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<Padding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
}

impl UILayout {
    pub fn is_empty(&self) -> bool {
        self.direction.is_none() && self.gap.is_none() && self.padding.is_none() && self.align.is_none()
    }
}

/// Extracts auto-layout fields from a node. Returns `None` when no field
/// survives, per section 4.3.
pub fn extract_layout(node: &FigmaNode) -> Option<UILayout> {
    let direction = match node.layout_mode {
        Some(LayoutMode::Horizontal) => Some(Direction::Horizontal),
        Some(LayoutMode::Vertical) => Some(Direction::Vertical),
        Some(LayoutMode::None) | None => None,
    };
    let gap = node.item_spacing;
    let padding = extract_padding(node);
    let align = node.counter_axis_align_items.map(|a| match a {
        CounterAxisAlignItems::Min => Align::Start,
        CounterAxisAlignItems::Center => Align::Center,
        CounterAxisAlignItems::Max => Align::End,
        CounterAxisAlignItems::Stretch => Align::Stretch,
    });

    let layout = UILayout { direction, gap, padding, align };
    if layout.is_empty() {
        None
    } else {
        Some(layout)
    }
}

fn extract_padding(node: &FigmaNode) -> Option<Padding> {
    let sides = (node.padding_top, node.padding_right, node.padding_bottom, node.padding_left);
    if sides == (None, None, None, None) {
        return None;
    }
    if let (Some(t), Some(r), Some(b), Some(l)) = sides {
        if t == r && r == b && b == l {
            return Some(Padding::Uniform(t));
        }
    }
    Some(Padding::Sides(PaddingSides {
        top: sides.0,
        right: sides.1,
        bottom: sides.2,
        left: sides.3,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figma_schema::FigmaNode;

    fn node_with_padding(t: Option<f32>, r: Option<f32>, b: Option<f32>, l: Option<f32>) -> FigmaNode {
        FigmaNode { padding_top: t, padding_right: r, padding_bottom: b, padding_left: l, ..Default::default() }
    }

    #[test]
    fn equal_padding_collapses_to_uniform() {
        let n = node_with_padding(Some(8.0), Some(8.0), Some(8.0), Some(8.0));
        let layout = extract_layout(&n).unwrap();
        assert_eq!(layout.padding, Some(Padding::Uniform(8.0)));
    }

    #[test]
    fn partial_padding_keeps_only_present_sides() {
        let n = node_with_padding(Some(8.0), None, Some(4.0), None);
        let layout = extract_layout(&n).unwrap();
        assert_eq!(
            layout.padding,
            Some(Padding::Sides(PaddingSides { top: Some(8.0), right: None, bottom: Some(4.0), left: None }))
        );
    }

    #[test]
    fn no_fields_returns_none() {
        let n = FigmaNode::default();
        assert!(extract_layout(&n).is_none());
    }

    #[test]
    fn dominant_padding_prefers_largest_side() {
        let sides = Padding::Sides(PaddingSides { top: Some(20.0), right: Some(4.0), bottom: None, left: None });
        assert_eq!(sides.dominant(), 20.0);
    }
}

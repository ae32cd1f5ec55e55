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

//! Semantic tree builder (C4): the largest component. Drives the recursion
//! over a raw Figma tree, dispatches to specialized parsers per component
//! type, enforces the semantic-collapse invariants (I2-I4), and sorts
//! siblings by visual position (I5).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::classify::{self, classify};
use crate::error::Error;
use crate::figma_schema::{EffectType, FigmaNode, LayoutMode, NodeType};
use crate::layout::{extract_layout, UILayout};
use crate::style::{extract_style, extract_text_style, UIStyle};

/// The closed set of recognized semantic component types (section 3.3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ComponentType {
    #[serde(rename = "TEXT")]
    Text,
    #[serde(rename = "VIEW")]
    View,
    #[serde(rename = "SCROLLABLE_VIEW")]
    ScrollableView,
    #[serde(rename = "SAFEAREAVIEW")]
    SafeAreaView,
    #[serde(rename = "HEADER")]
    Header,
    #[serde(rename = "TOPBAR")]
    Topbar,
    #[serde(rename = "BUTTON")]
    Button,
    #[serde(rename = "CARD")]
    Card,
    #[serde(rename = "TOUCHABLE_CARD")]
    TouchableCard,
    #[serde(rename = "CHIP")]
    Chip,
    #[serde(rename = "INPUT")]
    Input,
    #[serde(rename = "SEARCHABLE_INPUT")]
    SearchableInput,
    #[serde(rename = "DROPDOWN")]
    Dropdown,
    #[serde(rename = "CHECKBOX")]
    Checkbox,
    #[serde(rename = "RADIO")]
    Radio,
    #[serde(rename = "SWITCH")]
    Switch,
    #[serde(rename = "AVATAR")]
    Avatar,
    #[serde(rename = "LISTITEM")]
    ListItem,
    #[serde(rename = "SPACER")]
    Spacer,
    #[serde(rename = "ICON")]
    Icon,
    #[serde(rename = "SVG")]
    Svg,
    #[serde(rename = "BACKBUTTON")]
    BackButton,
    #[serde(rename = "UNKNOWN")]
    #[default]
    Unknown,
}

impl ComponentType {
    /// Maps the captured `TYPE` suffix from a `Name_TYPE` name verbatim
    /// (I1): no synonym remapping happens here, only at emit time (C5).
    pub fn from_suffix(suffix: &str) -> ComponentType {
        match suffix {
            "TEXT" => ComponentType::Text,
            "VIEW" => ComponentType::View,
            "SCROLLABLE_VIEW" => ComponentType::ScrollableView,
            "SAFEAREAVIEW" => ComponentType::SafeAreaView,
            "HEADER" => ComponentType::Header,
            "TOPBAR" => ComponentType::Topbar,
            "BUTTON" => ComponentType::Button,
            "CARD" => ComponentType::Card,
            "TOUCHABLE_CARD" => ComponentType::TouchableCard,
            "CHIP" => ComponentType::Chip,
            "INPUT" => ComponentType::Input,
            "SEARCHABLE_INPUT" => ComponentType::SearchableInput,
            "DROPDOWN" => ComponentType::Dropdown,
            "CHECKBOX" => ComponentType::Checkbox,
            "RADIO" => ComponentType::Radio,
            "SWITCH" => ComponentType::Switch,
            "AVATAR" => ComponentType::Avatar,
            "LISTITEM" => ComponentType::ListItem,
            "SPACER" => ComponentType::Spacer,
            "ICON" => ComponentType::Icon,
            "SVG" => ComponentType::Svg,
            "BACKBUTTON" => ComponentType::BackButton,
            _ => ComponentType::Unknown,
        }
    }

    /// True for the leaf semantic types of invariant I2: they never carry
    /// `children`.
    pub fn is_leaf(self) -> bool {
        matches!(
            self,
            ComponentType::Text
                | ComponentType::Button
                | ComponentType::Input
                | ComponentType::SearchableInput
                | ComponentType::Icon
                | ComponentType::Svg
                | ComponentType::Checkbox
                | ComponentType::Radio
                | ComponentType::Dropdown
                | ComponentType::Chip
                | ComponentType::Avatar
                | ComponentType::ListItem
                | ComponentType::Spacer
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    Press,
    Submit,
    Navigate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type")]
    pub action_type: ActionType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StyleHints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

impl StyleHints {
    fn is_empty(&self) -> bool {
        self.variant.is_none() && self.size.is_none()
    }
}

/// A prop value: booleans, numbers, strings, color strings, or a nested
/// node (used for HEADER's `leftAction`/`rightAction`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    Bool(bool),
    Number(f64),
    Str(String),
    /// An object or array value, `JSON.stringify`'d at emit time (section 4.6).
    Json(serde_json::Value),
    Node(Box<UITreeNode>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UITreeNode {
    pub id: String,
    pub component_type: ComponentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<UILayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<UIStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_hints: Option<StyleHints>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub props: BTreeMap<String, PropValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<UITreeNode>>,
}

impl UITreeNode {
    fn new(id: &str, component_type: ComponentType) -> UITreeNode {
        UITreeNode { id: id.to_string(), component_type, ..Default::default() }
    }

    fn set_style_hints(&mut self, hints: StyleHints) {
        if !hints.is_empty() {
            self.style_hints = Some(hints);
        }
    }

    fn set_styles(&mut self, style: UIStyle) {
        if !style.is_empty() {
            self.styles = Some(style);
        }
    }
}

/// Entry point: finds the document root (`figmaJson.document ?? figmaJson`),
/// descends through skipped frames to the first recognized component, and
/// parses it. The only terminal error (section 4.4.5 / 7).
pub fn build(figma_json: &serde_json::Value) -> Result<UITreeNode, Error> {
    let doc_value = figma_json.get("document").unwrap_or(figma_json);
    let root_node: FigmaNode = serde_json::from_value(doc_value.clone())?;

    match find_root(&root_node) {
        Some(node) => Ok(parse_node(node)),
        None => {
            log::warn!("no node in the document matches the Name_TYPE naming convention");
            Err(Error::NoRootComponent)
        }
    }
}

/// Depth-first search for the first node whose name matches the
/// `Name_TYPE` convention, skipping over DOCUMENT/CANVAS/PAGE wrappers
/// along the way (section 4.1). An ordinary non-matching FRAME is not
/// transparent: it stops the search rather than being descended into.
fn find_root(node: &FigmaNode) -> Option<&FigmaNode> {
    if classify::is_component_name(&node.name) {
        Some(node)
    } else if matches!(node.node_type, NodeType::Document | NodeType::Canvas | NodeType::Page) {
        node.children.iter().find_map(find_root)
    } else {
        None
    }
}

/// Depth-first, raw-document-order search for TEXT descendants. Used for
/// "first TEXT descendant" rules that aren't about sibling visual order.
fn collect_text_descendants<'a>(node: &'a FigmaNode, out: &mut Vec<&'a FigmaNode>) {
    for child in &node.children {
        if child.is_text() {
            out.push(child);
        } else {
            collect_text_descendants(child, out);
        }
    }
}

fn first_text_descendant(node: &FigmaNode) -> Option<&FigmaNode> {
    let mut found = Vec::new();
    collect_text_descendants(node, &mut found);
    found.into_iter().next()
}

fn is_frame_like(node: &FigmaNode) -> bool {
    matches!(node.node_type, NodeType::Frame | NodeType::Component)
}

/// Dispatches a single Figma node to its semantic parser. Runs the text
/// rules (T1-T3) before name classification, per section 4.4.2.
pub fn parse_node(node: &FigmaNode) -> UITreeNode {
    // T1
    if node.is_text() {
        let mut out = UITreeNode::new(&node.id, ComponentType::Text);
        out.text = node.characters.clone();
        out.set_styles(extract_text_style(node));
        return out;
    }

    // T2
    if is_frame_like(node) && node.name.ends_with("_TEXT") {
        let mut texts = Vec::new();
        collect_text_descendants(node, &mut texts);
        if texts.len() == 1 {
            let text_node = texts[0];
            let mut out = UITreeNode::new(&node.id, ComponentType::Text);
            out.component_name = Some(node.name.trim_end_matches("_TEXT").to_string());
            out.text = text_node.characters.clone();
            out.set_styles(extract_text_style(text_node));
            return out;
        } else {
            let mut out = UITreeNode::new(&node.id, ComponentType::View);
            out.role = Some(node.name.clone());
            out.children = Some(
                texts
                    .into_iter()
                    .map(|t| {
                        let mut tn = UITreeNode::new(&t.id, ComponentType::Text);
                        tn.text = t.characters.clone();
                        tn.set_styles(extract_text_style(t));
                        tn
                    })
                    .collect(),
            );
            return out;
        }
    }

    // T3
    if is_frame_like(node) && !node.name.contains('_') {
        let visible_children: Vec<&FigmaNode> = node.children.iter().filter(|c| c.visible).collect();
        if visible_children.len() == 1 && visible_children[0].is_text() {
            let text_node = visible_children[0];
            let mut out = UITreeNode::new(&node.id, ComponentType::Text);
            out.text = text_node.characters.clone();
            out.set_styles(extract_text_style(text_node));
            return out;
        }
    }

    let classification = classify(&node.name);
    let mut component_type = classification.component_type;
    if component_type == ComponentType::Unknown && node.node_type == NodeType::Vector {
        component_type = ComponentType::Icon;
    }

    if component_type == ComponentType::TouchableCard {
        return parse_touchable_card(node, &classification);
    }

    let mut out = UITreeNode::new(&node.id, component_type);
    out.component_name = classification.component_name.clone();
    out.role = Some(classification.role.clone());

    match component_type {
        ComponentType::Button => parse_button(node, out),
        ComponentType::Chip => parse_chip(node, out),
        ComponentType::Card => parse_card(node, out),
        ComponentType::Input | ComponentType::SearchableInput => parse_input(node, out),
        ComponentType::Dropdown => parse_dropdown(node, out),
        ComponentType::Checkbox | ComponentType::Radio => parse_checkbox_or_radio(node, out),
        ComponentType::Switch => parse_switch(node, out),
        ComponentType::Avatar => parse_avatar(node, out),
        ComponentType::ListItem => parse_list_item(node, out),
        ComponentType::Spacer => parse_spacer(node, out),
        ComponentType::Icon | ComponentType::Svg | ComponentType::BackButton => {
            out.set_styles(extract_style(node));
            out
        }
        _ => parse_container(node, out),
    }
}

/// I4: TOUCHABLE_CARD rewrites to CARD with a press action, title/subtitle
/// from the first two TEXT descendants, and no other children.
fn parse_touchable_card(node: &FigmaNode, classification: &classify::Classification) -> UITreeNode {
    log::debug!("rewriting TOUCHABLE_CARD {} to CARD (I4)", node.id);
    let mut texts = Vec::new();
    collect_text_descendants(node, &mut texts);

    let mut out = UITreeNode::new(&node.id, ComponentType::Card);
    out.component_name = classification.component_name.clone();
    out.role = Some(classification.role.clone());
    out.title = texts.first().and_then(|t| t.characters.clone());
    out.subtitle = texts.get(1).and_then(|t| t.characters.clone());
    out.action = Some(Action { action_type: ActionType::Press });
    out.set_styles(extract_style(node));
    out.set_style_hints(StyleHints { variant: Some(card_variant(node)), size: None });
    out
}

fn icon_like(node: &FigmaNode) -> bool {
    let classified = classify(&node.name).component_type;
    matches!(classified, ComponentType::Icon | ComponentType::Svg)
        || node.node_type == NodeType::Vector
        || (node.node_type == NodeType::Instance && node.name.to_lowercase().contains("icon"))
}

fn icon_name(node: &FigmaNode) -> String {
    classify(&node.name).component_name.unwrap_or_else(|| node.name.clone())
}

fn parse_button(node: &FigmaNode, mut out: UITreeNode) -> UITreeNode {
    out.set_styles(extract_style(node));

    let text_node = first_text_descendant(node);
    out.text = text_node.and_then(|t| t.characters.clone());

    let size = text_node
        .and_then(|t| t.style.as_ref())
        .and_then(|s| s.font_size)
        .map(|font_size| {
            if font_size <= 12.0 {
                "sm"
            } else if font_size <= 16.0 {
                "md"
            } else {
                "lg"
            }
        })
        .unwrap_or("md")
        .to_string();

    let has_fill = FigmaNode::first_visible_solid(&node.fills).is_some();
    let has_stroke = FigmaNode::first_visible_solid(&node.strokes).is_some();
    let variant = if has_stroke && !has_fill {
        "outline"
    } else if has_fill {
        "regular"
    } else {
        "ghost"
    };
    out.set_style_hints(StyleHints { variant: Some(variant.to_string()), size: Some(size) });

    let text_x = text_node.and_then(|t| t.absolute_bounding_box).map(|b| b.x);
    if let Some(text_x) = text_x {
        for child in &node.children {
            if !child.visible || Some(child.id.as_str()) == text_node.map(|t| t.id.as_str()) {
                continue;
            }
            if icon_like(child) {
                if let Some(bbox) = child.absolute_bounding_box {
                    let key = if bbox.x < text_x { "leftIcon" } else { "rightIcon" };
                    out.props.insert(key.to_string(), PropValue::Str(icon_name(child)));
                }
            }
        }
    }

    if node.opacity.unwrap_or(1.0) < 0.9 {
        out.props.insert("disabled".to_string(), PropValue::Bool(true));
    }

    out.action = Some(Action { action_type: ActionType::Press });
    out
}

fn parse_chip(node: &FigmaNode, mut out: UITreeNode) -> UITreeNode {
    out.set_styles(extract_style(node));
    out.set_style_hints(StyleHints { variant: Some("flat".to_string()), size: None });

    out.text = first_text_descendant(node).and_then(|t| t.characters.clone());

    let mut has_selected = false;
    for child in node.children.iter().filter(|c| c.visible && icon_like(c)) {
        let name_lower = child.name.to_lowercase();
        if name_lower.contains("tick") || name_lower.contains("check") {
            out.props.insert("selected".to_string(), PropValue::Bool(true));
            has_selected = true;
        } else if !out.props.contains_key("icon") {
            out.props.insert("icon".to_string(), PropValue::Str(icon_name(child)));
        }
    }

    let grey_fill = FigmaNode::first_visible_solid(&node.fills)
        .map(|(c, _)| {
            let max = c.r.max(c.g).max(c.b);
            let min = c.r.min(c.g).min(c.b);
            (max - min).abs() <= 0.05
        })
        .unwrap_or(false);
    let disabled = node.opacity.unwrap_or(1.0) < 0.9 || grey_fill;
    if disabled {
        out.props.insert("disabled".to_string(), PropValue::Bool(true));
    }

    let has_icon = out.props.contains_key("icon") || has_selected;
    if has_icon && !disabled {
        out.action = Some(Action { action_type: ActionType::Press });
    }
    out
}

fn card_variant(node: &FigmaNode) -> String {
    let has_drop_shadow =
        node.effects.iter().any(|e| e.visible && e.effect_type == EffectType::DropShadow);
    if has_drop_shadow {
        "elevated".to_string()
    } else if FigmaNode::first_visible_solid(&node.strokes).is_some() {
        "outlined".to_string()
    } else {
        "filled".to_string()
    }
}

fn parse_card(node: &FigmaNode, mut out: UITreeNode) -> UITreeNode {
    out.layout = extract_layout(node);
    out.set_styles(extract_style(node));
    out.props.insert("variant".to_string(), PropValue::Str(card_variant(node)));

    let padding_size = out
        .layout
        .as_ref()
        .and_then(|l| l.padding.as_ref())
        .map(|p| {
            let n = p.dominant();
            if n == 0.0 {
                "none"
            } else if n <= 12.0 {
                "sm"
            } else if n <= 20.0 {
                "md"
            } else {
                "lg"
            }
        })
        .unwrap_or("none");
    out.props.insert("padding".to_string(), PropValue::Str(padding_size.to_string()));

    let children = parse_children(node, false);
    if !children.is_empty() {
        out.children = Some(children);
    }
    out
}

fn parse_input(node: &FigmaNode, mut out: UITreeNode) -> UITreeNode {
    out.set_styles(extract_style(node));
    for child in node.children.iter().filter(|c| c.is_text()) {
        if child.name.to_lowercase().contains("label") {
            if out.title.is_none() {
                out.title = child.characters.clone();
            }
        } else if out.text.is_none() {
            out.text = child.characters.clone();
        }
    }
    out
}

fn parse_dropdown(node: &FigmaNode, mut out: UITreeNode) -> UITreeNode {
    out.set_styles(extract_style(node));
    if let Some(placeholder) = first_text_descendant(node).and_then(|t| t.characters.clone()) {
        out.props.insert("placeholder".to_string(), PropValue::Str(placeholder));
    }
    out
}

fn parse_checkbox_or_radio(node: &FigmaNode, mut out: UITreeNode) -> UITreeNode {
    out.set_styles(extract_style(node));
    let key = if out.component_type == ComponentType::Checkbox { "checked" } else { "selected" };
    for child in &node.children {
        if child.name.ends_with("_TRUE") {
            out.props.insert(key.to_string(), PropValue::Bool(true));
        } else if child.name.ends_with("_FALSE") {
            out.props.insert(key.to_string(), PropValue::Bool(false));
        }
    }
    if let Some(label) = node.children.iter().find(|c| c.is_text()).and_then(|t| t.characters.clone()) {
        out.props.insert("label".to_string(), PropValue::Str(label));
    }
    out
}

/// SWITCH, AVATAR, LISTITEM and SPACER aren't given specialized parsers by
/// section 4.4.3's dispatch table, but section 3.4's I2 still requires them
/// to be leaves. We extract the minimal content a leaf of each type can
/// carry and never recurse into children.
fn parse_switch(node: &FigmaNode, mut out: UITreeNode) -> UITreeNode {
    out.set_styles(extract_style(node));
    for child in &node.children {
        if child.name.ends_with("_TRUE") {
            out.props.insert("value".to_string(), PropValue::Bool(true));
        } else if child.name.ends_with("_FALSE") {
            out.props.insert("value".to_string(), PropValue::Bool(false));
        }
    }
    if let Some(label) = first_text_descendant(node).and_then(|t| t.characters.clone()) {
        out.props.insert("label".to_string(), PropValue::Str(label));
    }
    out
}

fn parse_avatar(node: &FigmaNode, mut out: UITreeNode) -> UITreeNode {
    out.set_styles(extract_style(node));
    if let Some(name) = first_text_descendant(node).and_then(|t| t.characters.clone()) {
        out.props.insert("name".to_string(), PropValue::Str(name));
    }
    out
}

fn parse_list_item(node: &FigmaNode, mut out: UITreeNode) -> UITreeNode {
    out.set_styles(extract_style(node));
    let mut texts = Vec::new();
    collect_text_descendants(node, &mut texts);
    out.title = texts.first().and_then(|t| t.characters.clone());
    out.subtitle = texts.get(1).and_then(|t| t.characters.clone());

    let icons: Vec<&FigmaNode> = node.children.iter().filter(|c| c.visible && icon_like(c)).collect();
    if let Some(left) = icons.first() {
        out.props.insert("leftElement".to_string(), PropValue::Str(icon_name(left)));
    }
    if let Some(right) = icons.get(1) {
        out.props.insert("rightElement".to_string(), PropValue::Str(icon_name(right)));
    }
    out
}

fn parse_spacer(node: &FigmaNode, mut out: UITreeNode) -> UITreeNode {
    if let Some(bbox) = node.absolute_bounding_box {
        let size = bbox.width.max(bbox.height);
        out.props.insert("size".to_string(), PropValue::Number(size as f64));
    }
    out
}

/// Generic container dispatch used for VIEW/SCROLLABLE_VIEW/HEADER/TOPBAR/
/// SAFEAREAVIEW/UNKNOWN and any other non-leaf type: recurse over children
/// in visual order, hoist direct TEXT children into the parent's `text`
/// slot (first wins), flatten per I3.
fn parse_container(node: &FigmaNode, mut out: UITreeNode) -> UITreeNode {
    out.layout = extract_layout(node);
    out.set_styles(extract_style(node));

    for child in &node.children {
        if child.visible && child.is_text() && out.text.is_none() {
            out.text = child.characters.clone();
        }
    }

    let children = parse_children(node, true);
    if !children.is_empty() {
        out.children = Some(children);
    }
    out
}

/// Recurses into children in visual order, parses each, and applies the I3
/// view-flattening invariant. `drop_text` hoists direct TEXT children into
/// the parent's `text` slot instead of emitting them as children, per
/// section 4.4.3's rule for the generic VIEW/SCROLLABLE_VIEW/HEADER/TOPBAR/
/// SAFEAREAVIEW dispatch. CARD has no such carve-out, so `parse_card` passes
/// `drop_text: false` and its direct TEXT children survive as ordinary
/// children instead of vanishing.
fn parse_children(node: &FigmaNode, drop_text: bool) -> Vec<UITreeNode> {
    let direction = node.layout_mode.unwrap_or(LayoutMode::None);
    let ordered = sort_siblings(&node.children, direction);

    ordered
        .into_iter()
        .filter(|c| !drop_text || !c.is_text())
        .map(parse_node)
        .filter(|n| !should_flatten(n))
        .collect()
}

/// I3: a VIEW with no text/title/subtitle, no visual style, and no
/// semantic descendants is removed (its would-be children were already
/// hoisted up by the caller, since this function only ever produces leaf
/// VIEWs once children are parsed; an empty VIEW is simply dropped).
fn should_flatten(n: &UITreeNode) -> bool {
    if n.component_type != ComponentType::View {
        return false;
    }
    let has_text = n.text.is_some() || n.title.is_some() || n.subtitle.is_some();
    let has_style = n.styles.is_some();
    let has_children = n.children.as_ref().map(|c| !c.is_empty()).unwrap_or(false);
    !has_text && !has_style && !has_children
}

/// I5: stable sort by visual position. Nodes without bounds keep their
/// relative input order (both among themselves and the comparator treats
/// them as equal to any node they're compared against, so a stable sort
/// leaves them where they started).
fn sort_siblings(children: &[FigmaNode], direction: LayoutMode) -> Vec<&FigmaNode> {
    let mut visible: Vec<&FigmaNode> = children.iter().filter(|c| c.visible).collect();
    let horizontal = direction == LayoutMode::Horizontal;

    visible.sort_by(|a, b| {
        let (ka, kb) = match (a.absolute_bounding_box, b.absolute_bounding_box) {
            (Some(ba), Some(bb)) => (ba, bb),
            _ => return std::cmp::Ordering::Equal,
        };
        // Horizontal layouts sort purely by x. Vertical/none layouts sort by y,
        // but treat rows within a 2-unit band as the same row and break ties
        // by x (visually side-by-side siblings keep left-to-right order).
        if horizontal || (ka.y - kb.y).abs() <= 2.0 {
            ka.x.partial_cmp(&kb.x).unwrap_or(std::cmp::Ordering::Equal)
        } else {
            ka.y.partial_cmp(&kb.y).unwrap_or(std::cmp::Ordering::Equal)
        }
    });
    visible
}

/// Used by the HEADER prop mapper (C5) to recognize a back-button
/// descendant without re-running the whole classifier.
pub fn find_backbutton(children: &[UITreeNode]) -> Option<&UITreeNode> {
    children.iter().find(|c| c.component_type == ComponentType::BackButton)
}

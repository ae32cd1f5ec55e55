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

//! Component map (C5): a pure table from `UITree.componentType` to a
//! target component name, a prop mapper, and whether the target takes
//! children. Entries are plain functions, not a trait object hierarchy
//! (section 9's note on polymorphism-as-capability-record).

use serde_json::json;

use crate::layout::{Align, Direction, Padding, UILayout};
use crate::ui_tree::{find_backbutton, ActionType, ComponentType, PropValue, UITreeNode};

/// One emitted prop: name plus value, in the exact order the emitter
/// should print them.
pub type Props = Vec<(&'static str, PropValue)>;

/// A capability record for one `ComponentType`. `component` is a function
/// of the node because VIEW alone switches target between `View` and
/// `LinearGradient`.
pub struct ComponentEntry {
    pub component: fn(&UITreeNode) -> &'static str,
    pub has_children: bool,
    pub prop_mapper: fn(&UITreeNode) -> Props,
}

fn str_prop(v: &str) -> PropValue {
    PropValue::Str(v.to_string())
}

/// Narrows an UNKNOWN-set of UITree-level variant strings down to the
/// `Button` target's closed set `{regular, outline, ghost}`.
fn map_button_variant(v: Option<&str>) -> &'static str {
    match v {
        Some("outline") => "outline",
        Some("ghost") => "ghost",
        _ => "regular",
    }
}

/// Narrows to the `Card` target's closed set `{elevated, outlined, filled}`.
fn map_card_variant(v: Option<&str>) -> &'static str {
    match v {
        Some("elevated") => "elevated",
        Some("outlined") => "outlined",
        _ => "filled",
    }
}

/// Renders the non-`gap` parts of a `UILayout` into RN flexbox style
/// fields. `gap` is realized separately as explicit `<Spacer>` elements.
fn layout_style_fields(layout: &UILayout) -> serde_json::Map<String, serde_json::Value> {
    let mut fields = serde_json::Map::new();
    if let Some(direction) = &layout.direction {
        fields.insert(
            "flexDirection".to_string(),
            json!(if *direction == Direction::Horizontal { "row" } else { "column" }),
        );
    }
    if let Some(align) = &layout.align {
        let value = match align {
            Align::Start => "flex-start",
            Align::Center => "center",
            Align::End => "flex-end",
            Align::Stretch => "stretch",
        };
        fields.insert("alignItems".to_string(), json!(value));
    }
    match &layout.padding {
        Some(Padding::Uniform(n)) => {
            fields.insert("padding".to_string(), json!(n));
        }
        Some(Padding::Sides(sides)) => {
            if let Some(v) = sides.top {
                fields.insert("paddingTop".to_string(), json!(v));
            }
            if let Some(v) = sides.right {
                fields.insert("paddingRight".to_string(), json!(v));
            }
            if let Some(v) = sides.bottom {
                fields.insert("paddingBottom".to_string(), json!(v));
            }
            if let Some(v) = sides.left {
                fields.insert("paddingLeft".to_string(), json!(v));
            }
        }
        None => {}
    }
    fields
}

fn background_color_object(node: &UITreeNode) -> Option<serde_json::Value> {
    node.styles.as_ref().and_then(|s| s.background_color.clone()).map(|c| json!({"backgroundColor": c}))
}

fn text_component(_: &UITreeNode) -> &'static str {
    "Text"
}
fn text_props(node: &UITreeNode) -> Props {
    let mut props = Props::new();
    if let Some(style) = &node.styles {
        if !style.is_empty() {
            props.push(("style", PropValue::Json(serde_json::to_value(style).unwrap())));
        }
    }
    props
}

fn view_component(node: &UITreeNode) -> &'static str {
    if node.styles.as_ref().and_then(|s| s.background_gradient.as_ref()).is_some() {
        "LinearGradient"
    } else {
        "View"
    }
}
fn view_props(node: &UITreeNode) -> Props {
    let mut props = Props::new();
    if let Some(gradient) = node.styles.as_ref().and_then(|s| s.background_gradient.as_ref()) {
        props.push((
            "colors",
            PropValue::Json(json!(gradient.stops.iter().map(|s| s.color.clone()).collect::<Vec<_>>())),
        ));
        props.push((
            "locations",
            PropValue::Json(json!(gradient.stops.iter().map(|s| s.offset).collect::<Vec<_>>())),
        ));
        props.push(("start", PropValue::Json(json!({"x": gradient.start.x, "y": gradient.start.y}))));
        props.push(("end", PropValue::Json(json!({"x": gradient.end.x, "y": gradient.end.y}))));
    } else {
        let mut style = node
            .styles
            .as_ref()
            .map(|s| serde_json::to_value(s).unwrap().as_object().unwrap().clone())
            .unwrap_or_default();
        if let Some(layout) = &node.layout {
            style.extend(layout_style_fields(layout));
        }
        if !style.is_empty() {
            props.push(("style", PropValue::Json(serde_json::Value::Object(style))));
        }
    }
    props
}

fn scrollable_view_component(_: &UITreeNode) -> &'static str {
    "ScrollView"
}
fn scrollable_view_props(node: &UITreeNode) -> Props {
    // `gap` is realized as explicit `<Spacer>` elements between children
    // (see emit.rs), so it's left out of the container's own style to
    // avoid double-spacing.
    let mut props = Props::new();
    if let Some(layout) = &node.layout {
        let style = layout_style_fields(layout);
        if !style.is_empty() {
            props.push(("contentContainerStyle", PropValue::Json(serde_json::Value::Object(style))));
        }
    }
    props
}

fn safe_area_view_component(_: &UITreeNode) -> &'static str {
    "SafeAreaView"
}
fn safe_area_view_props(node: &UITreeNode) -> Props {
    let mut style = json!({"flex": 1});
    if let Some(bg) = node.styles.as_ref().and_then(|s| s.background_color.clone()) {
        style["backgroundColor"] = json!(bg);
    }
    if let Some(padding) = node.layout.as_ref().and_then(|l| l.padding.as_ref()) {
        style["paddingHorizontal"] = json!(padding.dominant());
    }
    vec![("style", PropValue::Json(style))]
}

fn button_component(_: &UITreeNode) -> &'static str {
    "Button"
}
fn button_props(node: &UITreeNode) -> Props {
    let mut props = Props::new();
    if let Some(text) = &node.text {
        props.push(("text", str_prop(text)));
    }
    let variant = map_button_variant(node.style_hints.as_ref().and_then(|h| h.variant.as_deref()));
    props.push(("variant", str_prop(variant)));
    if let Some(size) = node.style_hints.as_ref().and_then(|h| h.size.as_deref()) {
        props.push(("size", str_prop(size)));
    }
    if matches!(node.props.get("disabled"), Some(PropValue::Bool(true))) {
        props.push(("disabled", PropValue::Bool(true)));
    }
    if let Some(PropValue::Str(icon)) = node.props.get("leftIcon") {
        props.push(("leftIcon", str_prop(icon)));
    }
    if let Some(PropValue::Str(icon)) = node.props.get("rightIcon") {
        props.push(("rightIcon", str_prop(icon)));
    }
    props.push(("onPress", PropValue::Str("() => {}".to_string())));
    if let Some(bg) = background_color_object(node) {
        props.push(("buttonStyle", PropValue::Json(bg)));
    }
    props
}

fn card_component(_: &UITreeNode) -> &'static str {
    "Card"
}
fn card_props(node: &UITreeNode) -> Props {
    let mut props = Props::new();
    let variant_str = match node.props.get("variant") {
        Some(PropValue::Str(v)) => Some(v.as_str()),
        _ => node.style_hints.as_ref().and_then(|h| h.variant.as_deref()),
    };
    props.push(("variant", str_prop(map_card_variant(variant_str))));
    if let Some(PropValue::Str(padding)) = node.props.get("padding") {
        props.push(("padding", str_prop(padding)));
    }
    if node.action.as_ref().map(|a| a.action_type) == Some(ActionType::Press) {
        props.push(("onPress", PropValue::Str("() => {}".to_string())));
    }
    if let Some(bg) = background_color_object(node) {
        props.push(("containerStyle", PropValue::Json(bg)));
    }
    props
}

fn chip_component(_: &UITreeNode) -> &'static str {
    "Chip"
}
fn chip_props(node: &UITreeNode) -> Props {
    let mut props = Props::new();
    if let Some(text) = &node.text {
        props.push(("text", str_prop(text)));
    }
    if matches!(node.props.get("selected"), Some(PropValue::Bool(true))) {
        props.push(("selected", PropValue::Bool(true)));
    }
    if let Some(mode) = node.style_hints.as_ref().and_then(|h| h.variant.as_deref()) {
        props.push(("mode", str_prop(mode)));
    }
    if let Some(PropValue::Str(icon)) = node.props.get("icon") {
        props.push(("icon", str_prop(icon)));
    }
    if matches!(node.props.get("disabled"), Some(PropValue::Bool(true))) {
        props.push(("disabled", PropValue::Bool(true)));
    }
    if node.action.is_some() {
        props.push(("onPress", PropValue::Str("() => {}".to_string())));
    }
    props
}

fn checkbox_component(_: &UITreeNode) -> &'static str {
    "Checkbox"
}
fn checkbox_props(node: &UITreeNode) -> Props {
    let mut props = Props::new();
    let checked = matches!(node.props.get("checked"), Some(PropValue::Bool(true)));
    props.push(("checked", PropValue::Bool(checked)));
    props.push(("onChange", PropValue::Str("(val) => {}".to_string())));
    if let Some(PropValue::Str(label)) = node.props.get("label") {
        props.push(("label", str_prop(label)));
    }
    if matches!(node.props.get("disabled"), Some(PropValue::Bool(true))) {
        props.push(("disabled", PropValue::Bool(true)));
    }
    props
}

fn radio_component(_: &UITreeNode) -> &'static str {
    "RadioGroup"
}
fn radio_props(node: &UITreeNode) -> Props {
    let label = if let Some(PropValue::Str(l)) = node.props.get("label") { l.clone() } else { String::new() };
    let value = label.to_lowercase().replace(' ', "_");
    vec![("options", PropValue::Json(json!([{"label": label, "value": value}])))]
}

fn dropdown_component(_: &UITreeNode) -> &'static str {
    "Dropdown"
}
fn dropdown_props(node: &UITreeNode) -> Props {
    let mut props = vec![("data", PropValue::Json(json!([])))];
    if let Some(PropValue::Str(placeholder)) = node.props.get("placeholder") {
        props.push(("placeholder", str_prop(placeholder)));
    }
    if matches!(node.props.get("disabled"), Some(PropValue::Bool(true))) {
        props.push(("disabled", PropValue::Bool(true)));
    }
    props
}

fn input_component(_: &UITreeNode) -> &'static str {
    "TextInput"
}
fn searchable_input_component(_: &UITreeNode) -> &'static str {
    "SearchableInput"
}
fn input_props(node: &UITreeNode) -> Props {
    let mut props = Props::new();
    if let Some(text) = &node.text {
        props.push(("placeholder", str_prop(text)));
    }
    if let Some(title) = &node.title {
        props.push(("label", str_prop(title)));
    }
    props.push(("onChangeText", PropValue::Str("(text) => {}".to_string())));
    props
}

fn switch_component(_: &UITreeNode) -> &'static str {
    "Switch"
}
fn switch_props(node: &UITreeNode) -> Props {
    let mut props = Props::new();
    let value = matches!(node.props.get("value"), Some(PropValue::Bool(true)));
    props.push(("value", PropValue::Bool(value)));
    props.push(("onValueChange", PropValue::Str("(val) => {}".to_string())));
    if let Some(PropValue::Str(label)) = node.props.get("label") {
        props.push(("label", str_prop(label)));
    }
    props
}

fn avatar_component(_: &UITreeNode) -> &'static str {
    "Avatar"
}
fn avatar_props(node: &UITreeNode) -> Props {
    let mut props = Props::new();
    if let Some(PropValue::Str(name)) = node.props.get("name") {
        props.push(("name", str_prop(name)));
    }
    if let Some(size) = node.style_hints.as_ref().and_then(|h| h.size.as_deref()) {
        props.push(("size", str_prop(size)));
    }
    if node.action.is_some() {
        props.push(("onPress", PropValue::Str("() => {}".to_string())));
    }
    if let Some(bg) = background_color_object(node) {
        props.push(("containerStyle", PropValue::Json(bg)));
    }
    props
}

fn list_item_component(_: &UITreeNode) -> &'static str {
    "ListItem"
}
fn list_item_props(node: &UITreeNode) -> Props {
    let mut props = Props::new();
    if let Some(title) = &node.title {
        props.push(("title", str_prop(title)));
    }
    if let Some(subtitle) = &node.subtitle {
        props.push(("subtitle", str_prop(subtitle)));
    }
    if let Some(PropValue::Str(left)) = node.props.get("leftElement") {
        props.push(("leftElement", str_prop(left)));
    }
    if let Some(PropValue::Str(right)) = node.props.get("rightElement") {
        props.push(("rightElement", str_prop(right)));
    }
    if node.action.is_some() {
        props.push(("onPress", PropValue::Str("() => {}".to_string())));
    }
    props
}

fn spacer_component(_: &UITreeNode) -> &'static str {
    "Spacer"
}
fn spacer_props(node: &UITreeNode) -> Props {
    let size = if let Some(PropValue::Number(n)) = node.props.get("size") { *n } else { 12.0 };
    let horizontal = node.layout.as_ref().and_then(|l| l.direction.as_ref()) == Some(&Direction::Horizontal);
    let mut props = vec![("size", PropValue::Number(size))];
    if horizontal {
        props.push(("horizontal", PropValue::Bool(true)));
    }
    props
}

fn icon_component(_: &UITreeNode) -> &'static str {
    "View"
}
fn icon_props(_: &UITreeNode) -> Props {
    vec![("style", PropValue::Json(json!({"width": 24, "height": 24, "backgroundColor": "#CCCCCC"})))]
}

fn header_component(_: &UITreeNode) -> &'static str {
    "Header"
}
fn header_props(node: &UITreeNode) -> Props {
    let mut props = Props::new();
    let children = node.children.as_deref().unwrap_or(&[]);

    let title = node.text.clone().or_else(|| {
        children.iter().find(|c| c.component_type == ComponentType::Text).and_then(|t| t.text.clone())
    });
    if let Some(title) = title {
        props.push(("title", str_prop(&title)));
    }

    let button_children: Vec<&UITreeNode> =
        children.iter().filter(|c| c.component_type == ComponentType::Button).collect();
    if let Some(left) = button_children.first() {
        props.push(("leftAction", PropValue::Node(Box::new((*left).clone()))));
    }
    if let Some(right) = button_children.get(1) {
        props.push(("rightAction", PropValue::Node(Box::new((*right).clone()))));
    }

    if let Some(back) = find_backbutton(children) {
        props.push(("showBackButton", PropValue::Bool(true)));
        let _ = back;
        props.push(("onBackPress", PropValue::Str("() => navigation.goBack()".to_string())));
    }
    props
}

/// Looks up the capability record for a `ComponentType`. Returns `None`
/// for types this emitter doesn't map to a target component (e.g. TOPBAR,
/// which isn't part of the component library's closed surface and falls
/// through to the emitter's unmapped-type placeholder), matching the rest
/// of the pipeline's "degrade, never fail" policy (section 7).
pub fn lookup(component_type: ComponentType) -> Option<ComponentEntry> {
    use ComponentType::*;
    let entry = match component_type {
        Text => ComponentEntry { component: text_component, has_children: true, prop_mapper: text_props },
        View => ComponentEntry { component: view_component, has_children: true, prop_mapper: view_props },
        ScrollableView => ComponentEntry {
            component: scrollable_view_component,
            has_children: true,
            prop_mapper: scrollable_view_props,
        },
        SafeAreaView => ComponentEntry {
            component: safe_area_view_component,
            has_children: true,
            prop_mapper: safe_area_view_props,
        },
        Button => {
            ComponentEntry { component: button_component, has_children: false, prop_mapper: button_props }
        }
        Card => ComponentEntry { component: card_component, has_children: true, prop_mapper: card_props },
        Chip => ComponentEntry { component: chip_component, has_children: false, prop_mapper: chip_props },
        Checkbox => ComponentEntry {
            component: checkbox_component,
            has_children: false,
            prop_mapper: checkbox_props,
        },
        Radio => ComponentEntry { component: radio_component, has_children: false, prop_mapper: radio_props },
        Dropdown => {
            ComponentEntry { component: dropdown_component, has_children: false, prop_mapper: dropdown_props }
        }
        Input => ComponentEntry { component: input_component, has_children: false, prop_mapper: input_props },
        SearchableInput => ComponentEntry {
            component: searchable_input_component,
            has_children: false,
            prop_mapper: input_props,
        },
        Switch => {
            ComponentEntry { component: switch_component, has_children: false, prop_mapper: switch_props }
        }
        Avatar => {
            ComponentEntry { component: avatar_component, has_children: false, prop_mapper: avatar_props }
        }
        ListItem => ComponentEntry {
            component: list_item_component,
            has_children: false,
            prop_mapper: list_item_props,
        },
        Spacer => {
            ComponentEntry { component: spacer_component, has_children: false, prop_mapper: spacer_props }
        }
        Icon | Svg => {
            ComponentEntry { component: icon_component, has_children: false, prop_mapper: icon_props }
        }
        Header => {
            // HEADER's title/leftAction/rightAction/back-button are all
            // captured as props by `header_props`; nothing is left to render
            // as a JSX child.
            ComponentEntry { component: header_component, has_children: false, prop_mapper: header_props }
        }
        TouchableCard | Topbar | BackButton | Unknown => return None,
    };
    Some(entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui_tree::build;
    use serde_json::json;

    #[test]
    fn button_variant_is_narrowed_to_closed_set() {
        assert_eq!(map_button_variant(Some("regular")), "regular");
        assert_eq!(map_button_variant(Some("ghost")), "ghost");
        assert_eq!(map_button_variant(None), "regular");
    }

    #[test]
    fn lookup_returns_none_for_topbar() {
        assert!(lookup(ComponentType::Topbar).is_none());
    }

    #[test]
    fn scrollable_view_style_omits_gap_but_keeps_padding() {
        let doc = json!({
            "name": "Screen_SCROLLABLE_VIEW", "type": "FRAME", "layoutMode": "VERTICAL", "itemSpacing": 16.0,
            "paddingTop": 12.0, "paddingLeft": 12.0, "paddingRight": 12.0, "paddingBottom": 12.0,
            "children": [{"name":"A_BUTTON","type":"FRAME","children":[{"type":"TEXT","name":"t","characters":"A"}]}]
        });
        let tree = build(&doc).unwrap();
        let entry = lookup(tree.component_type).unwrap();
        let props = (entry.prop_mapper)(&tree);
        let (_, style) = props.iter().find(|(k, _)| *k == "contentContainerStyle").unwrap();
        let PropValue::Json(style) = style else { panic!("expected Json prop") };
        assert!(style.get("gap").is_none());
        assert_eq!(style.get("padding"), Some(&json!(12.0)));
    }

    #[test]
    fn touchable_card_variant_falls_back_to_style_hints() {
        let doc = json!({
            "name": "Billing_TOUCHABLE_CARD", "type": "FRAME",
            "effects": [{"type": "DROP_SHADOW", "visible": true}],
            "children": [{"type":"TEXT","name":"t1","characters":"Billing"}]
        });
        let tree = build(&doc).unwrap();
        let entry = lookup(tree.component_type).unwrap();
        let props = (entry.prop_mapper)(&tree);
        assert_eq!(props.iter().find(|(k, _)| *k == "variant").unwrap().1, PropValue::Str("elevated".to_string()));
    }

    #[test]
    fn button_props_include_press_handler_and_background() {
        let doc = json!({
            "name": "Sign_BUTTON", "type": "FRAME",
            "fills": [{"type":"SOLID","visible":true,"opacity":1.0,"color":{"r":0.03,"g":0.56,"b":0.72}}],
            "children": [{"type":"TEXT","name":"Sign in","characters":"Sign in","style":{"fontSize":14}}]
        });
        let tree = build(&doc).unwrap();
        let entry = lookup(tree.component_type).unwrap();
        let props = (entry.prop_mapper)(&tree);
        assert_eq!(props[0], ("text", PropValue::Str("Sign in".to_string())));
        assert!(props.iter().any(|(k, _)| *k == "onPress"));
        assert!(props.iter().any(|(k, _)| *k == "buttonStyle"));
    }
}

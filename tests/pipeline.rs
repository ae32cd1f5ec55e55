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

//! End-to-end tests running full Figma documents through `build` and
//! `emit` together, mirroring the six scenarios used to validate the
//! pipeline's determinism and collapse rules.

use figma_jsx::error::Error;
use figma_jsx::{build, emit};
use serde_json::json;

#[test]
fn simple_button_scenario_emits_button_jsx() {
    let doc = json!({
        "name": "Sign_BUTTON", "type": "FRAME",
        "fills": [{"type":"SOLID","visible":true,"opacity":1.0,"color":{"r":0.03,"g":0.56,"b":0.72}}],
        "children": [{"type":"TEXT","name":"Sign in","characters":"Sign in","style":{"fontSize":14}}]
    });
    let tree = build(&doc).expect("build should succeed");
    let jsx = emit(&tree);
    assert!(jsx.contains("<Button"));
    assert!(jsx.contains("text=\"Sign in\""));
    assert!(jsx.contains("variant=\"regular\""));
}

#[test]
fn touchable_card_scenario_emits_card_with_press_handler() {
    let doc = json!({
        "name": "Billing_TOUCHABLE_CARD", "type": "FRAME",
        "strokes": [{"type":"SOLID","visible":true,"opacity":1.0,"color":{"r":0.0,"g":0.0,"b":0.0}}],
        "children": [
            {"type":"TEXT","name":"t1","characters":"Billing"},
            {"type":"TEXT","name":"t2","characters":"Invoices"}
        ]
    });
    let tree = build(&doc).expect("build should succeed");
    let jsx = emit(&tree);
    assert!(jsx.contains("<Card"));
    assert!(jsx.contains("variant=\"outlined\""));
    assert!(jsx.contains("onPress={() => {}}"));
}

#[test]
fn grey_chip_scenario_emits_disabled_chip_without_press_handler() {
    let doc = json!({
        "name": "Tag_CHIP", "type": "FRAME",
        "fills": [{"type":"SOLID","visible":true,"opacity":1.0,"color":{"r":0.9,"g":0.9,"b":0.9}}],
        "children": [{"type":"TEXT","name":"t1","characters":"Normal chip"}]
    });
    let tree = build(&doc).expect("build should succeed");
    let jsx = emit(&tree);
    assert!(jsx.contains("<Chip"));
    assert!(jsx.contains("disabled"));
    assert!(!jsx.contains("onPress"));
}

#[test]
fn vertical_container_with_gap_injects_spacers() {
    let doc = json!({
        "name": "Root_VIEW", "type": "FRAME", "layoutMode": "VERTICAL", "itemSpacing": 12.0,
        "children": [
            {"name":"A_VIEW","type":"FRAME","fills":[{"type":"SOLID","visible":true,"opacity":1.0,"color":{"r":1.0,"g":0.0,"b":0.0}}]},
            {"name":"B_VIEW","type":"FRAME","fills":[{"type":"SOLID","visible":true,"opacity":1.0,"color":{"r":0.0,"g":1.0,"b":0.0}}]},
            {"name":"C_VIEW","type":"FRAME","fills":[{"type":"SOLID","visible":true,"opacity":1.0,"color":{"r":0.0,"g":0.0,"b":1.0}}]}
        ]
    });
    let tree = build(&doc).expect("build should succeed");
    let jsx = emit(&tree);
    assert_eq!(jsx.matches("<Spacer size={12}").count(), 2);
}

#[test]
fn unknown_suffix_degrades_to_placeholder_view() {
    let doc = json!({"name": "Widget_FOO", "type": "FRAME"});
    let tree = build(&doc).expect("build should succeed");
    let jsx = emit(&tree);
    assert!(jsx.contains("/* Unknown: Unknown */"));
    assert!(jsx.contains("<View />"));
}

#[test]
fn document_with_no_recognizable_component_is_a_terminal_error() {
    let doc = json!({
        "document": {
            "type": "DOCUMENT",
            "children": [{"type": "CANVAS", "children": [{"name": "Plain frame", "type": "FRAME"}]}]
        }
    });
    let err = build(&doc).expect_err("should fail to find a root component");
    assert!(matches!(err, Error::NoRootComponent));
}

#[test]
fn identical_documents_produce_byte_identical_jsx() {
    let doc = json!({
        "name": "Header_HEADER", "type": "FRAME",
        "children": [
            {"name":"Back_BACKBUTTON","type":"FRAME"},
            {"type":"TEXT","name":"Title","characters":"Settings"}
        ]
    });
    let tree_a = build(&doc).unwrap();
    let tree_b = build(&doc).unwrap();
    assert_eq!(emit(&tree_a), emit(&tree_b));
    assert!(emit(&tree_a).contains("GeneratedScreen({ navigation }: any)"));
}

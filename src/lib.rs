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

//! `figma_jsx` deterministically transpiles a Figma document (as exported
//! by the Figma REST API) into a React Native JSX screen.
//!
//! The pipeline has two stages: [`ui_tree::build`] parses the raw Figma
//! JSON into a semantic [`ui_tree::UITreeNode`], and [`emit::emit`] renders
//! that tree into formatted JSX source text. Both stages are pure
//! functions of their input: the same document always produces the same
//! tree and the same source text.

pub mod classify;
pub mod color;
pub mod component_map;
pub mod emit;
pub mod error;
pub mod figma_schema;
pub mod layout;
pub mod style;
pub mod ui_tree;

pub use emit::emit;
pub use error::Error;
pub use ui_tree::{build, ComponentType, UITreeNode};

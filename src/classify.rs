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

//! Name classifier (C1): recovers semantic meaning from Figma layer names
//! using the `Name_TYPE` convention rather than visual heuristics.

use crate::ui_tree::ComponentType;

/// Result of classifying a raw Figma node name.
pub struct Classification {
    pub component_name: Option<String>,
    pub component_type: ComponentType,
    pub role: String,
}

/// Splits `name` at its first `_`. Everything after it must match
/// `^[A-Z_]+$` to be accepted as a `componentType`; otherwise the whole
/// name classifies as `UNKNOWN`.
pub fn classify(name: &str) -> Classification {
    let role = name.to_string();
    if let Some(idx) = name.find('_') {
        let (prefix, rest) = name.split_at(idx);
        let suffix = &rest[1..];
        if !suffix.is_empty() && suffix.chars().all(|c| c == '_' || c.is_ascii_uppercase()) {
            return Classification {
                component_name: Some(prefix.to_string()),
                component_type: ComponentType::from_suffix(suffix),
                role,
            };
        }
    }
    Classification { component_name: None, component_type: ComponentType::Unknown, role }
}

/// True if `name` matches the `Name_TYPE` grammar `^[^_]+_[A-Z_]+$`. This is
/// purely syntactic: the suffix need not map to a *known* `ComponentType` to
/// count here, only to look like one (an unrecognized suffix still degrades
/// to `UNKNOWN` rather than being treated as "not a component").
pub fn is_component_name(name: &str) -> bool {
    match name.find('_') {
        Some(idx) => {
            let suffix = &name[idx + 1..];
            !suffix.is_empty() && suffix.chars().all(|c| c == '_' || c.is_ascii_uppercase())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_name_and_type() {
        let c = classify("Sign_BUTTON");
        assert_eq!(c.component_name.as_deref(), Some("Sign"));
        assert_eq!(c.component_type, ComponentType::Button);
        assert_eq!(c.role, "Sign_BUTTON");
    }

    #[test]
    fn unrecognized_suffix_still_splits_but_stores_role() {
        // The suffix must be all-caps letters/underscores; lowercase fails the
        // grammar and the whole name degrades to UNKNOWN.
        let c = classify("Sign in");
        assert_eq!(c.component_type, ComponentType::Unknown);
        assert_eq!(c.role, "Sign in");
    }

    #[test]
    fn no_underscore_is_unknown() {
        let c = classify("Widget");
        assert_eq!(c.component_type, ComponentType::Unknown);
        assert_eq!(c.component_name, None);
    }

    #[test]
    fn lowercase_suffix_is_unknown() {
        let c = classify("Widget_foo");
        assert_eq!(c.component_type, ComponentType::Unknown);
    }

    #[test]
    fn underscore_only_suffix_is_accepted_by_grammar() {
        // `^[A-Z_]+$` accepts a run of bare underscores too.
        let c = classify("Name___");
        assert_eq!(c.component_type, ComponentType::Unknown); // "___" isn't a known TYPE token
        assert_eq!(c.component_name.as_deref(), Some("Name"));
    }
}

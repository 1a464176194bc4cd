// Copyright 2026 the Spendpie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Errors returned when encoding or decoding a [`SavedState`].
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// The bundle is not valid JSON or does not have the expected shape.
    #[error("invalid saved view state: {0}")]
    Json(#[from] serde_json::Error),
}

/// View state kept across configuration changes (e.g. rotation).
///
/// `super_state` is the host framework's own view state, carried opaquely. An
/// absent base state omits the `"super"` key; a `null` one is written and read back
/// as `Some(Value::Null)`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SavedState {
    /// The framework's default view state.
    #[serde(
        rename = "super",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_value"
    )]
    pub super_state: Option<Value>,
    /// The selected category, if any.
    #[serde(
        rename = "selectedCategory",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub selected_category: Option<String>,
}

/// A present key always yields `Some`, even when its value is `null`.
fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl SavedState {
    /// Encodes the state as a JSON bundle.
    pub fn to_json(&self) -> Result<String, StateError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes a JSON bundle produced by [`SavedState::to_json`].
    pub fn from_json(json: &str) -> Result<Self, StateError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn bundle_uses_the_framework_keys() {
        let state = SavedState {
            super_state: Some(json!({ "focused": true })),
            selected_category: Some("food".into()),
        };
        let value: Value = serde_json::from_str(&state.to_json().unwrap()).unwrap();
        assert_eq!(value["selectedCategory"], "food");
        assert_eq!(value["super"]["focused"], true);
    }

    #[test]
    fn bundle_round_trips() {
        for state in [
            SavedState::default(),
            SavedState {
                super_state: None,
                selected_category: Some("transport".into()),
            },
            SavedState {
                super_state: Some(json!([1, 2, 3])),
                selected_category: None,
            },
            SavedState {
                super_state: Some(Value::Null),
                selected_category: Some("food".into()),
            },
        ] {
            let back = SavedState::from_json(&state.to_json().unwrap()).unwrap();
            assert_eq!(back, state);
        }
    }

    #[test]
    fn absent_and_null_base_states_stay_distinct() {
        let absent = SavedState::default().to_json().unwrap();
        assert_eq!(absent, "{}");

        let null = SavedState {
            super_state: Some(Value::Null),
            selected_category: None,
        };
        let json = null.to_json().unwrap();
        assert_eq!(json, r#"{"super":null}"#);
        assert_eq!(
            SavedState::from_json(&json).unwrap().super_state,
            Some(Value::Null)
        );
    }

    #[test]
    fn missing_fields_default_to_absent() {
        let state = SavedState::from_json("{}").unwrap();
        assert_eq!(state, SavedState::default());
    }

    #[test]
    fn garbage_is_an_error() {
        let err = SavedState::from_json("not json").unwrap_err();
        assert!(err.to_string().starts_with("invalid saved view state"));
    }
}

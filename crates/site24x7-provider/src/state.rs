//! Untyped resource state as exchanged with the plugin host.
//!
//! The host sees a resource as an identifier plus a flat JSON attribute
//! map. Converters never work on the map directly; they decode it into
//! their typed attribute struct and encode the struct back afterwards.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ProviderError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceState {
    /// Server-assigned identifier; empty while the resource is absent.
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub attributes: Map<String, Value>,
}

impl ResourceState {
    pub fn new(attributes: Map<String, Value>) -> Self {
        Self {
            id: String::new(),
            attributes,
        }
    }

    /// A state holding only an identifier, as produced by import.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: Map::new(),
        }
    }

    /// Build a state from a JSON object of attributes.
    pub fn from_value(value: Value) -> Result<Self, ProviderError> {
        match value {
            Value::Object(attributes) => Ok(Self::new(attributes)),
            Value::Null => Ok(Self::default()),
            other => Err(ProviderError::InvalidState(serde::de::Error::custom(format!(
                "expected an attribute object, got {other}"
            )))),
        }
    }

    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }

    /// The identifier, or `MissingId` when the resource was never created.
    pub fn require_id(&self) -> Result<&str, ProviderError> {
        if self.has_id() {
            Ok(&self.id)
        } else {
            Err(ProviderError::MissingId)
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Decode into a typed attribute struct. `null` members count as unset.
    pub fn decode<A: DeserializeOwned>(&self) -> Result<A, ProviderError> {
        let set: Map<String, Value> = self
            .attributes
            .iter()
            .filter(|(_, v)| !v.is_null())
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        serde_json::from_value(Value::Object(set)).map_err(ProviderError::InvalidState)
    }

    /// Replace every attribute the typed struct knows about. Keys the
    /// struct does not model are left untouched.
    pub fn encode<A: Serialize>(&mut self, attrs: &A) -> Result<(), ProviderError> {
        match serde_json::to_value(attrs).map_err(ProviderError::InvalidState)? {
            Value::Object(map) => {
                self.attributes.extend(map);
                Ok(())
            }
            other => Err(ProviderError::InvalidState(serde::ser::Error::custom(format!(
                "attributes must encode to an object, got {other}"
            )))),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    struct Attrs {
        name: String,
        port: u32,
    }

    #[test]
    fn nulls_decode_as_defaults() {
        let state = ResourceState::from_value(json!({ "name": null, "port": 443 })).unwrap();
        let attrs: Attrs = state.decode().unwrap();
        assert_eq!(
            attrs,
            Attrs {
                name: String::new(),
                port: 443
            }
        );
    }

    #[test]
    fn encode_keeps_unmodelled_keys() {
        let mut state =
            ResourceState::from_value(json!({ "name": "a", "extra": true })).unwrap();
        state
            .encode(&Attrs {
                name: "b".into(),
                port: 1,
            })
            .unwrap();

        assert_eq!(state.get("name"), Some(&json!("b")));
        assert_eq!(state.get("port"), Some(&json!(1)));
        assert_eq!(state.get("extra"), Some(&json!(true)));
    }

    #[test]
    fn missing_id_is_reported() {
        let state = ResourceState::default();
        assert!(matches!(state.require_id(), Err(ProviderError::MissingId)));
        assert_eq!(ResourceState::with_id("7").require_id().unwrap(), "7");
    }

    #[test]
    fn non_object_state_is_rejected() {
        assert!(matches!(
            ResourceState::from_value(json!([1, 2])),
            Err(ProviderError::InvalidState(_))
        ));
    }
}

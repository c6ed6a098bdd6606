//! Declarative resource schemas handed to the plugin host.
//!
//! The host validates and diffs attribute trees against these; the
//! provider itself only uses them for export. Defaults listed here come
//! from the same functions the typed attribute structs use as serde
//! defaults, so the two cannot drift apart.

use serde::Serialize;
use serde_json::Value;

/// Attribute value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    String,
    Int,
    Bool,
    ListOfString,
    MapOfString,
    /// Nested `{value, severity}` block.
    Object,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attribute {
    #[serde(rename = "type")]
    pub ty: AttributeType,
    pub required: bool,
    pub optional: bool,
    pub computed: bool,
    pub sensitive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl Attribute {
    fn new(ty: AttributeType) -> Self {
        Self {
            ty,
            required: false,
            optional: true,
            computed: false,
            sensitive: false,
            default: None,
            description: String::new(),
        }
    }

    pub fn string() -> Self {
        Self::new(AttributeType::String)
    }

    pub fn int() -> Self {
        Self::new(AttributeType::Int)
    }

    pub fn bool() -> Self {
        Self::new(AttributeType::Bool)
    }

    pub fn list() -> Self {
        Self::new(AttributeType::ListOfString)
    }

    pub fn map() -> Self {
        Self::new(AttributeType::MapOfString)
    }

    pub fn object() -> Self {
        Self::new(AttributeType::Object)
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self.optional = false;
        self
    }

    /// Optional and filled in by the provider when omitted.
    pub fn computed(mut self) -> Self {
        self.computed = true;
        self
    }

    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn describe(mut self, description: &str) -> Self {
        self.description = description.to_owned();
        self
    }
}

/// Schema of one resource type. Attribute order is preserved for export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schema {
    pub version: u32,
    pub attributes: Vec<(String, Attribute)>,
}

impl Schema {
    pub fn v0() -> Self {
        Self {
            version: 0,
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, name: &str, attribute: Attribute) -> Self {
        self.attributes.push((name.to_owned(), attribute));
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, a)| a)
    }

    /// Export as `{ "version": .., "attributes": { name: {...}, .. } }`.
    pub fn to_json(&self) -> Value {
        let attributes = self
            .attributes
            .iter()
            .map(|(name, attr)| {
                (
                    name.clone(),
                    serde_json::to_value(attr).unwrap_or(Value::Null),
                )
            })
            .collect::<serde_json::Map<_, _>>();
        serde_json::json!({ "version": self.version, "attributes": attributes })
    }
}

// ── Shared attribute sets ───────────────────────────────────────────

/// Reference attributes shared by website, SSL and REST API monitors.
pub(crate) fn with_monitor_references(schema: Schema) -> Schema {
    schema
        .with_attribute(
            "location_profile_id",
            Attribute::string()
                .computed()
                .describe("Location profile; defaults to the profile matching location_profile_name, else the first one"),
        )
        .with_attribute(
            "location_profile_name",
            Attribute::string()
                .computed()
                .describe("Name used to pick the default location profile"),
        )
        .with_attribute(
            "notification_profile_id",
            Attribute::string()
                .computed()
                .describe("Notification profile; defaults to the first one"),
        )
        .with_attribute(
            "threshold_profile_id",
            Attribute::string()
                .computed()
                .describe("Threshold profile; defaults to the first one for the monitor type"),
        )
        .with_attribute("monitor_groups", Attribute::list())
        .with_attribute(
            "user_group_ids",
            Attribute::list()
                .computed()
                .describe("User groups alerted; defaults to the first user group"),
        )
        .with_attribute(
            "actions",
            Attribute::map().describe("Alert type (as decimal string) to IT automation id"),
        )
}

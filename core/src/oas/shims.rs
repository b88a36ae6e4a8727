#![deny(missing_docs)]

//! # OpenAPI Shims
//!
//! Structures acting as an Intermediate Deserialization Layer.
//! They map the subset of the OpenAPI object tree the renderers consume and
//! keep every map in document declaration order (`IndexMap`).
//!
//! Raw maps are buffered as `serde_yaml::Value` rather than `serde_json::Value`
//! because YAML mappings may carry non-string keys (e.g. unquoted `200:` status codes).
//! Scalar keys are turned back into strings before typed deserialization, so an
//! unquoted `200:` property name reads the same as `'200':`.

use crate::oas::models::HttpMethod;
use indexmap::IndexMap;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer};
use serde_yaml::{Mapping, Value};

/// Schema for the root document.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct ShimOpenApi {
    /// OpenAPI version (e.g. "3.1.0").
    pub openapi: Option<String>,

    /// Swagger version (e.g. "2.0").
    pub swagger: Option<String>,

    /// Path items. Absence is a structural error for the translator.
    pub paths: Option<ShimPaths>,

    /// Reusable definitions used for local `$ref` resolution.
    #[serde(default)]
    pub components: Option<ShimComponents>,
}

/// Represents the Paths Object, ignoring specification extensions.
#[derive(Clone, Debug, Default)]
pub struct ShimPaths {
    /// Parsed path items keyed by path template, in declaration order.
    pub items: IndexMap<String, ShimPathItem>,
}

impl<'de> Deserialize<'de> for ShimPaths {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = IndexMap::<String, Value>::deserialize(deserializer)?;
        let mut items = IndexMap::new();

        for (key, value) in raw {
            if key.starts_with("x-") {
                continue;
            }
            let path_item = serde_yaml::from_value::<ShimPathItem>(stringify_keys(value))
                .map_err(|e| {
                    DeError::custom(format!("Failed to parse path item '{}': {}", key, e))
                })?;
            items.insert(key, path_item);
        }

        Ok(Self { items })
    }
}

/// A Path Item: the operations declared under one URL template.
#[derive(Clone, Debug, Default)]
pub struct ShimPathItem {
    /// Operations keyed by method, in declaration order.
    pub operations: IndexMap<HttpMethod, ShimOperation>,
    /// Parameters shared by every operation of this path.
    pub parameters: Vec<ShimParameter>,
}

impl<'de> Deserialize<'de> for ShimPathItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<IndexMap<String, Value>>::deserialize(deserializer)?.unwrap_or_default();
        let mut item = ShimPathItem::default();

        for (key, value) in raw {
            if key == "parameters" {
                item.parameters = serde_yaml::from_value(stringify_keys(value)).map_err(|e| {
                    DeError::custom(format!("Failed to parse path parameters: {}", e))
                })?;
                continue;
            }
            // summary, description, servers, $ref and x- extensions are not rendered.
            let Some(method) = HttpMethod::from_key(&key) else {
                continue;
            };
            let operation = serde_yaml::from_value::<ShimOperation>(stringify_keys(value))
                .map_err(|e| {
                    DeError::custom(format!("Failed to parse '{}' operation: {}", key, e))
                })?;
            item.operations.insert(method, operation);
        }

        Ok(item)
    }
}

/// Rewrites numeric, boolean and null mapping keys as strings, recursively.
///
/// `from_str` hands scalar keys to `String` fields as text, but a buffered
/// `Value::Number` key no longer deserializes into `String`.
fn stringify_keys(value: Value) -> Value {
    match value {
        Value::Mapping(mapping) => Value::Mapping(
            mapping
                .into_iter()
                .map(|(key, value)| (stringify_key(key), stringify_keys(value)))
                .collect(),
        ),
        Value::Sequence(sequence) => {
            Value::Sequence(sequence.into_iter().map(stringify_keys).collect())
        }
        Value::Tagged(mut tagged) => {
            tagged.value = stringify_keys(std::mem::take(&mut tagged.value));
            Value::Tagged(tagged)
        }
        scalar => scalar,
    }
}

fn stringify_key(key: Value) -> Value {
    match key {
        Value::Number(number) => Value::String(number.to_string()),
        Value::Bool(flag) => Value::String(flag.to_string()),
        Value::Null => Value::String("null".to_string()),
        other => other,
    }
}

/// Describes a single API operation on a path.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct ShimOperation {
    /// Request body, inline or by reference.
    #[serde(rename = "requestBody")]
    pub request_body: Option<ShimRequestBody>,

    /// Operation-level parameters.
    #[serde(default)]
    pub parameters: Vec<ShimParameter>,

    /// Responses keyed by status code. Only checked for existence.
    #[serde(default)]
    pub responses: Mapping,
}

/// Describes a single request body.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct ShimRequestBody {
    /// Reference to `#/components/requestBodies/...`.
    #[serde(rename = "$ref")]
    pub reference: Option<String>,

    /// Content keyed by media type.
    #[serde(default)]
    pub content: IndexMap<String, ShimMediaType>,
}

/// A Media Type Object.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct ShimMediaType {
    /// The schema describing the payload.
    pub schema: Option<ShimSchema>,
}

/// A Parameter Object (query, path, header, cookie).
#[derive(Deserialize, Clone, Debug, Default)]
pub struct ShimParameter {
    /// Reference to `#/components/parameters/...`.
    #[serde(rename = "$ref")]
    pub reference: Option<String>,

    /// Parameter name.
    #[serde(default)]
    pub name: String,

    /// Location (`query`, `path`, `header`, `cookie`).
    #[serde(rename = "in", default)]
    pub location: String,

    /// Whether the parameter is mandatory.
    pub required: Option<bool>,

    /// Schema of the parameter value.
    pub schema: Option<ShimSchema>,
}

/// The `type` keyword: a single name or, since OAS 3.1, a list of names.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum ShimSchemaType {
    /// `type: string`
    Single(String),
    /// `type: [string, "null"]`
    Multiple(Vec<String>),
}

impl ShimSchemaType {
    /// Returns the declared type names in order.
    pub fn names(&self) -> Vec<&str> {
        match self {
            Self::Single(name) => vec![name.as_str()],
            Self::Multiple(names) => names.iter().map(String::as_str).collect(),
        }
    }
}

/// The subset of a JSON Schema the body listing needs.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct ShimSchema {
    /// Reference to `#/components/schemas/...`.
    #[serde(rename = "$ref")]
    pub reference: Option<String>,

    /// Declared type(s).
    #[serde(rename = "type")]
    pub schema_type: Option<ShimSchemaType>,

    /// Object properties, in declaration order.
    #[serde(default)]
    pub properties: IndexMap<String, ShimSchema>,

    /// Names of required properties.
    #[serde(default)]
    pub required: Vec<String>,

    /// Array element schema.
    pub items: Option<Box<ShimSchema>>,

    /// All members must match; object members are merged.
    #[serde(rename = "allOf", default)]
    pub all_of: Vec<ShimSchema>,

    /// Any member may match.
    #[serde(rename = "anyOf", default)]
    pub any_of: Vec<ShimSchema>,

    /// Exactly one member matches.
    #[serde(rename = "oneOf", default)]
    pub one_of: Vec<ShimSchema>,
}

impl ShimSchema {
    /// Returns true if `type` is, or includes, the given name.
    pub fn has_type(&self, name: &str) -> bool {
        self.schema_type
            .as_ref()
            .is_some_and(|ty| ty.names().contains(&name))
    }
}

/// Components object holding reusable definitions.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct ShimComponents {
    /// Reusable schemas.
    #[serde(default)]
    pub schemas: IndexMap<String, ShimSchema>,

    /// Reusable request bodies.
    #[serde(rename = "requestBodies", default)]
    pub request_bodies: IndexMap<String, ShimRequestBody>,

    /// Reusable parameters.
    #[serde(default)]
    pub parameters: IndexMap<String, ShimParameter>,
}

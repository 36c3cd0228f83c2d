//! Data model for a parsed API description — format-agnostic.
//!
//! Every field is decoded leniently: a value of the wrong JSON type is
//! treated as absent, so a half-written document still renders whatever is
//! well-formed. Mappings keep the document's key order.

use indexmap::IndexMap;
use serde::de::{self, DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// Complete parsed API description.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Document {
    #[serde(deserialize_with = "lenient")]
    pub info: Option<Info>,
    /// Path string → methods at that path
    #[serde(deserialize_with = "lenient_map")]
    pub paths: Option<IndexMap<String, PathItem>>,
    #[serde(deserialize_with = "lenient")]
    pub components: Option<Components>,
    /// The parsed JSON value, untouched
    #[serde(skip)]
    pub raw: Value,
}

impl Document {
    /// Named schemas under `components.schemas`, if any.
    pub fn schemas(&self) -> Option<&IndexMap<String, Schema>> {
        self.components.as_ref()?.schemas.as_ref()
    }
}

/// `info` block.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Info {
    #[serde(deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub version: Option<String>,
}

/// `components` block. Only `schemas` is read.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Components {
    #[serde(deserialize_with = "lenient_map")]
    pub schemas: Option<IndexMap<String, Schema>>,
}

/// Methods declared under a single path.
///
/// A path whose value is not an object has no operations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathItem {
    /// Method name (as written) → operation
    pub operations: IndexMap<String, Operation>,
}

impl<'de> Deserialize<'de> for PathItem {
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        let operations = match Value::deserialize(de)? {
            Value::Object(methods) => methods
                .into_iter()
                .map(|(method, details)| (method, decode_or_default(details)))
                .collect(),
            _ => IndexMap::new(),
        };
        Ok(PathItem { operations })
    }
}

/// One HTTP method's behavior at one path.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Operation {
    #[serde(deserialize_with = "lenient")]
    pub summary: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub description: Option<String>,
    /// Alternative requirements; any one of them grants access
    #[serde(deserialize_with = "lenient_items")]
    pub security: Option<Vec<SecurityRequirement>>,
    #[serde(deserialize_with = "lenient_items")]
    pub parameters: Option<Vec<Parameter>>,
    #[serde(deserialize_with = "lenient")]
    pub request_body: Option<RequestBody>,
    /// Status code → response
    #[serde(deserialize_with = "lenient_map")]
    pub responses: Option<IndexMap<String, Response>>,
}

impl Operation {
    /// True when `security` is present and non-empty.
    pub fn requires_auth(&self) -> bool {
        self.security.as_ref().is_some_and(|reqs| !reqs.is_empty())
    }
}

/// Scheme name → scopes.
///
/// Every scheme key is kept; a scope list that is not an array of strings
/// decodes as empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SecurityRequirement {
    pub schemes: IndexMap<String, Vec<String>>,
}

impl<'de> Deserialize<'de> for SecurityRequirement {
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        match Value::deserialize(de)? {
            Value::Object(schemes) => Ok(SecurityRequirement {
                schemes: schemes
                    .into_iter()
                    .map(|(name, scopes)| (name, decode_or_default(scopes)))
                    .collect(),
            }),
            other => Err(de::Error::custom(format!(
                "security requirement must be an object, got {}",
                other
            ))),
        }
    }
}

impl SecurityRequirement {
    pub fn scheme_names(&self) -> impl Iterator<Item = &str> {
        self.schemes.keys().map(String::as_str)
    }
}

/// A single operation parameter.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Parameter {
    #[serde(deserialize_with = "lenient_or_default")]
    pub name: String,
    #[serde(rename = "in", deserialize_with = "lenient")]
    pub location: Option<ParameterLocation>,
    #[serde(deserialize_with = "lenient_or_default")]
    pub required: bool,
    #[serde(deserialize_with = "lenient")]
    pub description: Option<String>,
}

/// Where a parameter is carried. Unknown locations are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ParameterLocation {
    Query,
    Path,
    Header,
    Cookie,
    Other(String),
}

impl From<String> for ParameterLocation {
    fn from(s: String) -> Self {
        match s.as_str() {
            "query" => ParameterLocation::Query,
            "path" => ParameterLocation::Path,
            "header" => ParameterLocation::Header,
            "cookie" => ParameterLocation::Cookie,
            _ => ParameterLocation::Other(s),
        }
    }
}

impl ParameterLocation {
    pub fn as_str(&self) -> &str {
        match self {
            ParameterLocation::Query => "query",
            ParameterLocation::Path => "path",
            ParameterLocation::Header => "header",
            ParameterLocation::Cookie => "cookie",
            ParameterLocation::Other(s) => s,
        }
    }
}

impl fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `requestBody` block.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RequestBody {
    /// Media type → entry
    #[serde(deserialize_with = "lenient_map")]
    pub content: Option<IndexMap<String, MediaType>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MediaType {
    #[serde(deserialize_with = "lenient")]
    pub schema: Option<SchemaRef>,
}

/// A schema given either as a `$ref` pointer or inline.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaRef {
    /// Raw pointer string, e.g. `#/components/schemas/User`
    Reference(String),
    Inline(Box<Schema>),
}

impl SchemaRef {
    /// Final segment of a reference (`User` for `#/components/schemas/User`).
    /// Inline schemas have no name.
    pub fn reference_name(&self) -> Option<&str> {
        match self {
            SchemaRef::Reference(target) => {
                target.rsplit('/').next().filter(|name| !name.is_empty())
            }
            SchemaRef::Inline(_) => None,
        }
    }
}

impl<'de> Deserialize<'de> for SchemaRef {
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(de)?;
        if let Some(Value::String(target)) = value.get("$ref") {
            return Ok(SchemaRef::Reference(target.clone()));
        }
        Schema::deserialize(value)
            .map(|schema| SchemaRef::Inline(Box::new(schema)))
            .map_err(de::Error::custom)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Response {
    #[serde(deserialize_with = "lenient")]
    pub description: Option<String>,
}

/// Named data-shape definition.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Schema {
    #[serde(deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_map")]
    pub properties: Option<IndexMap<String, PropertyDetail>>,
    /// Names of mandatory properties
    #[serde(deserialize_with = "lenient_list")]
    pub required: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PropertyDetail {
    #[serde(rename = "type", deserialize_with = "lenient")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub description: Option<String>,
}

impl PropertyDetail {
    /// Type shown for the property; `object` when none is declared.
    pub fn type_label(&self) -> &str {
        self.kind.as_deref().unwrap_or("object")
    }
}

// -- lenient decoding helpers --

fn decode<T: DeserializeOwned>(value: Value) -> Option<T> {
    T::deserialize(value).ok()
}

fn decode_or_default<T: DeserializeOwned + Default>(value: Value) -> T {
    decode(value).unwrap_or_default()
}

/// Any value that does not decode as `T` becomes `None`.
fn lenient<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(decode(Value::deserialize(de)?))
}

fn lenient_or_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(decode_or_default(Value::deserialize(de)?))
}

/// Objects keep every key; entries that do not decode fall back to `T::default()`.
fn lenient_map<'de, D, T>(de: D) -> Result<Option<IndexMap<String, T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    match Value::deserialize(de)? {
        Value::Object(entries) => Ok(Some(
            entries
                .into_iter()
                .map(|(key, value)| (key, decode_or_default(value)))
                .collect(),
        )),
        _ => Ok(None),
    }
}

/// Arrays keep the elements that decode; anything else is `None`.
fn lenient_items<'de, D, T>(de: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(de)? {
        Value::Array(items) => Ok(Some(items.into_iter().filter_map(decode).collect())),
        _ => Ok(None),
    }
}

fn lenient_list<'de, D, T>(de: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(lenient_items(de)?.unwrap_or_default())
}

//! Canonical schema: the normalized, source-agnostic model/field
//! representation consumed by code generation.
//!
//! Three distinct inputs (database introspection, OpenAPI document, JSON
//! config) converge on this one shape; see `domain::normalize`.

use serde::{Deserialize, Serialize};

/// Type tag for a canonical field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    String,
    Int,
    Float,
    Boolean,
    DateTime,
    Array,
    Object,
}

impl FieldType {
    /// Joi-style validation primitive emitted for this type in generated
    /// model files.
    pub fn validator_primitive(self) -> &'static str {
        match self {
            Self::String => "Joi.string()",
            Self::Int => "Joi.number().integer()",
            Self::Float => "Joi.number()",
            Self::Boolean => "Joi.boolean()",
            Self::DateTime => "Joi.date()",
            Self::Array => "Joi.array()",
            Self::Object => "Joi.object()",
        }
    }
}

/// One typed field of a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default, rename = "isRequired")]
    pub required: bool,
    #[serde(default, rename = "isUnique")]
    pub unique: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            required: false,
            unique: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }
}

/// One model: a named, ordered list of fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub name: String,
    pub fields: Vec<Field>,
}

impl Model {
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Naive pluralized collection name: lower-cased name + literal "s".
    /// Irregular plurals are not handled (documented limitation).
    pub fn plural(&self) -> String {
        format!("{}s", self.name.to_lowercase())
    }

    /// Router mount point (`/api/<plural>`).
    pub fn route_base(&self) -> String {
        format!("/api/{}", self.plural())
    }
}

/// The full normalized schema. Produced fresh per generation call and never
/// mutated after normalization.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CanonicalSchema {
    pub models: Vec<Model>,
}

impl CanonicalSchema {
    pub fn new(models: Vec<Model>) -> Self {
        Self { models }
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

/// One generated REST endpoint, used for README generation and status
/// reporting independently of file generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    pub method: String,
    pub path: String,
    pub description: String,
}

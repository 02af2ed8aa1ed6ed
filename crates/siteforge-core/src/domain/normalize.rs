//! Schema normalization: three distinct inputs converge on one
//! [`CanonicalSchema`].
//!
//! - Database introspection metadata (supplied by the `SchemaSource` port)
//! - An OpenAPI document (`components.schemas`)
//! - A hand-written JSON config (expected already-canonical)

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{
    entities::schema::{CanonicalSchema, Field, FieldType, Model},
    error::DomainError,
};

// ── Database introspection input ─────────────────────────────────────────────

/// Raw structural metadata returned by a data-source introspection, before
/// any type mapping. Produced by the `SchemaSource` port implementation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDatabaseSchema {
    pub tables: Vec<RawTable>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTable {
    pub name: String,
    pub columns: Vec<RawColumn>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawColumn {
    pub name: String,
    /// Source type name as reported by the data source (e.g. "varchar").
    pub data_type: String,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default)]
    pub unique: bool,
}

/// Map each discovered table to a model, each column to a field, with a
/// best-effort source-type mapping.
pub fn from_database(raw: &RawDatabaseSchema) -> CanonicalSchema {
    let models = raw
        .tables
        .iter()
        .map(|table| {
            let fields = table
                .columns
                .iter()
                .map(|col| {
                    let mut field = Field::new(&col.name, map_column_type(&col.data_type));
                    field.required = !col.nullable;
                    field.unique = col.unique;
                    field
                })
                .collect();
            Model::new(&table.name, fields)
        })
        .collect();
    CanonicalSchema::new(models)
}

/// Best-effort mapping from a source column type name to a type tag.
/// Unknown names fall back to `String`.
fn map_column_type(data_type: &str) -> FieldType {
    let t = data_type.to_lowercase();
    match t.as_str() {
        _ if t.contains("int") || t.contains("serial") => FieldType::Int,
        _ if t.contains("float") || t.contains("double") || t.contains("numeric")
            || t.contains("decimal") || t.contains("real") =>
        {
            FieldType::Float
        }
        _ if t.contains("bool") => FieldType::Boolean,
        _ if t.contains("timestamp") || t.contains("date") || t.contains("time") => {
            FieldType::DateTime
        }
        _ if t.contains("json") => FieldType::Object,
        _ => FieldType::String,
    }
}

// ── OpenAPI input ─────────────────────────────────────────────────────────────

/// Walk `components.schemas` of an OpenAPI-like document.
///
/// Only entries with `type == "object"` become models. `isUnique` is always
/// false: uniqueness is not derivable from OpenAPI alone (documented
/// limitation).
pub fn from_openapi(document: &Value) -> CanonicalSchema {
    let Some(schemas) = document
        .pointer("/components/schemas")
        .and_then(Value::as_object)
    else {
        return CanonicalSchema::default();
    };

    let mut models = Vec::new();
    for (name, schema) in schemas {
        if schema.get("type").and_then(Value::as_str) != Some("object") {
            continue;
        }

        let required: Vec<&str> = schema
            .get("required")
            .and_then(Value::as_array)
            .map(|xs| xs.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();

        let mut fields = Vec::new();
        if let Some(properties) = schema.get("properties").and_then(Value::as_object) {
            for (prop_name, prop) in properties {
                let type_tag = prop
                    .get("type")
                    .and_then(Value::as_str)
                    .map_or(FieldType::String, map_openapi_type);
                let mut field = Field::new(prop_name, type_tag);
                field.required = required.contains(&prop_name.as_str());
                fields.push(field);
            }
        }
        models.push(Model::new(name, fields));
    }
    CanonicalSchema::new(models)
}

/// Fixed primitive-type lookup; unknown types fall back to `String`.
fn map_openapi_type(t: &str) -> FieldType {
    match t {
        "string" => FieldType::String,
        "integer" => FieldType::Int,
        "number" => FieldType::Float,
        "boolean" => FieldType::Boolean,
        "array" => FieldType::Array,
        "object" => FieldType::Object,
        _ => FieldType::String,
    }
}

// ── Config input ──────────────────────────────────────────────────────────────

/// Validate and pass through an already-canonical config document.
///
/// # Errors
///
/// `DomainError::Validation` unless the input has a `models` list where every
/// model has a `name` string and a `fields` list.
pub fn from_config(document: &Value) -> Result<CanonicalSchema, DomainError> {
    let Some(models) = document.get("models").and_then(Value::as_array) else {
        return Err(DomainError::Validation(
            "config must contain a 'models' list".into(),
        ));
    };

    let mut out = Vec::with_capacity(models.len());
    for (index, model) in models.iter().enumerate() {
        let Some(name) = model.get("name").and_then(Value::as_str) else {
            return Err(DomainError::Validation(format!(
                "models[{index}] is missing a string 'name'"
            )));
        };
        let Some(fields) = model.get("fields").and_then(Value::as_array) else {
            return Err(DomainError::Validation(format!(
                "model '{name}' is missing a 'fields' list"
            )));
        };

        let fields: Vec<Field> = fields
            .iter()
            .map(|f| {
                serde_json::from_value(f.clone()).map_err(|e| {
                    DomainError::Validation(format!("model '{name}' has a malformed field: {e}"))
                })
            })
            .collect::<Result<_, _>>()?;

        out.push(Model::new(name, fields));
    }
    Ok(CanonicalSchema::new(out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn config_requires_models_key() {
        let err = from_config(&json!({})).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn config_with_empty_models_is_valid() {
        let schema = from_config(&json!({"models": []})).unwrap();
        assert!(schema.is_empty());
    }

    #[test]
    fn config_passthrough_preserves_flags() {
        let schema = from_config(&json!({
            "models": [
                {"name": "User", "fields": [
                    {"name": "id", "type": "Int", "isRequired": true, "isUnique": true},
                    {"name": "bio", "type": "String"}
                ]}
            ]
        }))
        .unwrap();

        let user = &schema.models[0];
        assert_eq!(user.name, "User");
        assert!(user.fields[0].required && user.fields[0].unique);
        assert!(!user.fields[1].required);
    }

    #[test]
    fn config_rejects_model_without_name() {
        let err = from_config(&json!({"models": [{"fields": []}]})).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn config_type_tags_are_canonical_capitalized() {
        // "string" is not a type tag; the canonical set is String, Int,
        // Float, Boolean, DateTime, Array, Object.
        let err = from_config(&json!({
            "models": [
                {"name": "Post", "fields": [{"name": "title", "type": "string"}]}
            ]
        }))
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(err.to_string().contains("malformed field"));
    }

    #[test]
    fn openapi_only_objects_become_models() {
        let schema = from_openapi(&json!({
            "components": {"schemas": {
                "User": {
                    "type": "object",
                    "required": ["email"],
                    "properties": {
                        "email": {"type": "string"},
                        "age": {"type": "integer"},
                        "score": {"type": "number"},
                        "active": {"type": "boolean"},
                        "tags": {"type": "array"},
                        "meta": {"type": "object"},
                        "odd": {"type": "weird"}
                    }
                },
                "Role": {"type": "string", "enum": ["admin", "user"]}
            }}
        }));

        assert_eq!(schema.models.len(), 1);
        let user = &schema.models[0];
        let by_name = |n: &str| user.fields.iter().find(|f| f.name == n).unwrap();

        assert_eq!(by_name("email").field_type, FieldType::String);
        assert!(by_name("email").required);
        assert_eq!(by_name("age").field_type, FieldType::Int);
        assert_eq!(by_name("score").field_type, FieldType::Float);
        assert_eq!(by_name("active").field_type, FieldType::Boolean);
        assert_eq!(by_name("tags").field_type, FieldType::Array);
        assert_eq!(by_name("meta").field_type, FieldType::Object);
        // Unknown type name falls back to String.
        assert_eq!(by_name("odd").field_type, FieldType::String);
        // Uniqueness is never derivable from OpenAPI.
        assert!(user.fields.iter().all(|f| !f.unique));
    }

    #[test]
    fn openapi_without_schemas_yields_empty() {
        assert!(from_openapi(&json!({"openapi": "3.0.0"})).is_empty());
    }

    #[test]
    fn database_mapping_covers_common_types() {
        let raw = RawDatabaseSchema {
            tables: vec![RawTable {
                name: "users".into(),
                columns: vec![
                    RawColumn { name: "id".into(), data_type: "serial".into(), nullable: false, unique: true },
                    RawColumn { name: "name".into(), data_type: "varchar(255)".into(), nullable: false, unique: false },
                    RawColumn { name: "balance".into(), data_type: "numeric".into(), nullable: true, unique: false },
                    RawColumn { name: "active".into(), data_type: "boolean".into(), nullable: true, unique: false },
                    RawColumn { name: "created".into(), data_type: "timestamptz".into(), nullable: false, unique: false },
                    RawColumn { name: "payload".into(), data_type: "jsonb".into(), nullable: true, unique: false },
                ],
            }],
        };

        let schema = from_database(&raw);
        let fields = &schema.models[0].fields;
        assert_eq!(fields[0].field_type, FieldType::Int);
        assert!(fields[0].required && fields[0].unique);
        assert_eq!(fields[1].field_type, FieldType::String);
        assert_eq!(fields[2].field_type, FieldType::Float);
        assert!(!fields[2].required);
        assert_eq!(fields[3].field_type, FieldType::Boolean);
        assert_eq!(fields[4].field_type, FieldType::DateTime);
        assert_eq!(fields[5].field_type, FieldType::Object);
    }
}

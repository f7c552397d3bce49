//! JSON Schema helpers
//!
//! Builders for schema fragments, deterministic schema derivation from a
//! declared chat signature, and a shallow validator for orchestrator-side
//! argument checks.

use agentry_core::ChatSignature;
use serde_json::{Map, Value, json};

/// Create a JSON Schema object type
///
/// # Arguments
///
/// * `properties` - Map of property names to their schemas
/// * `required` - List of required property names
///
/// # Example
///
/// ```
/// use agentry_tools::schema::{object, string};
/// use serde_json::json;
///
/// let schema = object(
///     json!({
///         "query": string(Some("Search query")),
///     }),
///     vec!["query"],
/// );
/// ```
pub fn object(properties: Value, required: Vec<&str>) -> Value {
    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

/// Create a JSON Schema string type
pub fn string(description: Option<&str>) -> Value {
    typed("string", description)
}

/// Create a JSON Schema number type
pub fn number(description: Option<&str>) -> Value {
    typed("number", description)
}

/// Create a JSON Schema integer type
pub fn integer(description: Option<&str>) -> Value {
    typed("integer", description)
}

/// Create a JSON Schema boolean type
pub fn boolean(description: Option<&str>) -> Value {
    typed("boolean", description)
}

/// Create a JSON Schema array type
///
/// # Arguments
///
/// * `items` - Schema for array items
/// * `description` - Optional description of the array field
pub fn array(items: Value, description: Option<&str>) -> Value {
    match description {
        Some(d) => json!({
            "type": "array",
            "items": items,
            "description": d,
        }),
        None => json!({
            "type": "array",
            "items": items,
        }),
    }
}

fn typed(type_name: &str, description: Option<&str>) -> Value {
    match description {
        Some(d) => json!({
            "type": type_name,
            "description": d,
        }),
        None => json!({"type": type_name}),
    }
}

/// Derive a tool input schema from a declared chat signature
///
/// The result is an object schema titled with `label`, with one property per
/// declared parameter and a `required` list of the required parameter names
/// in declaration order. Derivation is a pure function of its inputs:
/// equal (label, signature) pairs always yield identical schemas. No fields
/// beyond the declared parameters are introduced.
pub fn derive_schema(label: &str, signature: &ChatSignature) -> Value {
    let mut properties = Map::new();
    let mut required = Vec::new();

    for param in signature.params() {
        let mut property = Map::new();
        property.insert("type".to_string(), json!(param.kind.type_name()));
        if let Some(description) = &param.description {
            property.insert("description".to_string(), json!(description));
        }
        properties.insert(param.name.clone(), Value::Object(property));

        if param.required {
            required.push(param.name.clone());
        }
    }

    json!({
        "title": label,
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

/// Validate that a value matches a JSON schema (shallow validation)
///
/// Checks the top-level type, and for objects that every required property is
/// present. Nested property types are not descended into; full validation
/// belongs to a dedicated JSON Schema library.
pub fn validate_basic(value: &Value, schema: &Value) -> bool {
    let Some(schema_type) = schema.get("type").and_then(Value::as_str) else {
        return true; // no type constraint, accept anything
    };

    match schema_type {
        "string" => value.is_string(),
        "number" => value.is_number(),
        "integer" => value.is_i64() || value.is_u64(),
        "boolean" => value.is_boolean(),
        "array" => value.is_array(),
        "null" => value.is_null(),
        "object" => {
            let Some(fields) = value.as_object() else {
                return false;
            };
            schema
                .get("required")
                .and_then(Value::as_array)
                .is_none_or(|required| {
                    required
                        .iter()
                        .filter_map(Value::as_str)
                        .all(|name| fields.contains_key(name))
                })
        }
        _ => true, // unknown type, accept
    }
}

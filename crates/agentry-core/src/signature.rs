//! Declared chat-operation signatures
//!
//! Rust has no runtime introspection of function parameters, so agents
//! declare their chat parameter list explicitly. A [`ChatSignature`] is the
//! sole input to schema derivation: two agents with equal declarations
//! produce structurally identical schemas.

use serde::{Deserialize, Serialize};

/// JSON type of a declared parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    /// A text value
    String,
    /// A floating point value
    Number,
    /// An integral value
    Integer,
    /// A true/false value
    Boolean,
    /// An ordered list of values
    Array,
    /// A nested key/value object
    Object,
}

impl ParamKind {
    /// JSON Schema type name for this kind
    pub fn type_name(self) -> &'static str {
        match self {
            ParamKind::String => "string",
            ParamKind::Number => "number",
            ParamKind::Integer => "integer",
            ParamKind::Boolean => "boolean",
            ParamKind::Array => "array",
            ParamKind::Object => "object",
        }
    }
}

/// A single declared chat parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamSpec {
    /// Parameter name as it appears in the derived schema
    pub name: String,

    /// JSON type of the parameter
    pub kind: ParamKind,

    /// Optional human-readable description
    pub description: Option<String>,

    /// Whether callers must supply this parameter
    pub required: bool,
}

impl ParamSpec {
    /// Declare a required parameter
    pub fn new(name: impl Into<String>, kind: ParamKind) -> Self {
        Self {
            name: name.into(),
            kind,
            description: None,
            required: true,
        }
    }

    /// Declare an optional parameter
    pub fn optional(name: impl Into<String>, kind: ParamKind) -> Self {
        Self {
            required: false,
            ..Self::new(name, kind)
        }
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Ordered parameter list of an agent's chat operation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatSignature {
    params: Vec<ParamSpec>,
}

impl ChatSignature {
    /// Create a signature from a parameter list
    pub fn new(params: Vec<ParamSpec>) -> Self {
        Self { params }
    }

    /// Append a parameter declaration
    pub fn with_param(mut self, param: ParamSpec) -> Self {
        self.params.push(param);
        self
    }

    /// The declared parameters, in declaration order
    pub fn params(&self) -> &[ParamSpec] {
        &self.params
    }

    /// Number of declared parameters
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Check if no parameters are declared
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

//! Tool Descriptors and Parameter Schemas
//!
//! Parameter schemas are plain data: an ordered list of named, typed
//! parameters. Call arguments are validated by walking the declared schema
//! against the supplied argument map.


use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::collections::HashSet;
use std::fmt;

use crate::mcp::errors::{ArgumentError, RegistryError};

/// Arguments supplied to a tool call, keyed by parameter name
pub type Arguments = Map<String, Value>;

/// JSON type a parameter value must have
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    String,
    Integer,
    Number,
    Boolean,
    Array,
    Object,
}

impl TypeTag {
    /// Whether `value` is an instance of this type
    #[inline]
    pub fn matches(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Integer => value.is_i64() || value.is_u64(),
            Self::Number => value.is_number(),
            Self::Boolean => value.is_boolean(),
            Self::Array => value.is_array(),
            Self::Object => value.is_object(),
        }
    }

    /// JSON Schema name of this type
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for TypeTag {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name of the JSON type of `value`, used in validation messages
#[inline]
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "number",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A single declared tool parameter
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSpec {
    pub name: String,
    pub type_tag: TypeTag,
    pub required: bool,
    pub description: Option<String>,
    /// Value substituted when an optional parameter is omitted
    pub default: Option<Value>,
}

impl ParamSpec {
    #[inline]
    pub fn required(name: impl Into<String>, type_tag: TypeTag) -> Self {
        Self {
            name: name.into(),
            type_tag,
            required: true,
            description: None,
            default: None,
        }
    }

    #[inline]
    pub fn optional(name: impl Into<String>, type_tag: TypeTag) -> Self {
        Self {
            required: false,
            ..Self::required(name, type_tag)
        }
    }

    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    fn json_schema(&self) -> Value {
        let mut schema = Map::new();
        schema.insert("type".to_string(), json!(self.type_tag.as_str()));
        if let Some(description) = &self.description {
            schema.insert("description".to_string(), json!(description));
        }
        if let Some(default) = &self.default {
            schema.insert("default".to_string(), default.clone());
        }
        Value::Object(schema)
    }
}

/// Metadata describing a callable tool
#[derive(Debug, Clone, PartialEq)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    pub params: Vec<ParamSpec>,
}

impl ToolDescriptor {
    #[inline]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            params: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn with_param(mut self, param: ParamSpec) -> Self {
        self.params.push(param);
        self
    }

    /// Look up a declared parameter by name
    #[inline]
    pub fn param(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|param| param.name == name)
    }

    /// Check the descriptor is well formed before it is registered
    #[inline]
    pub fn validate(&self) -> Result<(), RegistryError> {
        let invalid = |reason: String| RegistryError::InvalidDescriptor {
            name: self.name.clone(),
            reason,
        };

        if self.name.trim().is_empty() {
            return Err(invalid("tool name cannot be empty".to_string()));
        }

        let mut seen = HashSet::new();
        for param in &self.params {
            if param.name.trim().is_empty() {
                return Err(invalid("parameter name cannot be empty".to_string()));
            }
            if !seen.insert(param.name.as_str()) {
                return Err(invalid(format!("duplicate parameter '{}'", param.name)));
            }
            if let Some(default) = &param.default {
                if param.required {
                    return Err(invalid(format!(
                        "required parameter '{}' cannot have a default",
                        param.name
                    )));
                }
                if !param.type_tag.matches(default) {
                    return Err(invalid(format!(
                        "default for '{}' must be {}, got {}",
                        param.name,
                        param.type_tag,
                        json_type_name(default)
                    )));
                }
            }
        }

        Ok(())
    }

    /// Validate call arguments against the declared parameters.
    ///
    /// Returns the arguments the tool should be invoked with, with defaults
    /// filled in for omitted optional parameters. Required parameters are
    /// checked first, then unrecognized names, then value types.
    #[inline]
    pub fn check_arguments(&self, arguments: &Arguments) -> Result<Arguments, ArgumentError> {
        if let Some(param) = self
            .params
            .iter()
            .find(|param| param.required && !arguments.contains_key(&param.name))
        {
            return Err(ArgumentError::Missing {
                param: param.name.clone(),
            });
        }

        if let Some(name) = arguments.keys().find(|name| self.param(name).is_none()) {
            return Err(ArgumentError::Unknown {
                param: name.clone(),
            });
        }

        let mut validated = Arguments::new();
        for param in &self.params {
            match arguments.get(&param.name) {
                Some(value) => {
                    if !param.type_tag.matches(value) {
                        return Err(ArgumentError::TypeMismatch {
                            param: param.name.clone(),
                            expected: param.type_tag,
                            actual: json_type_name(value),
                        });
                    }
                    validated.insert(param.name.clone(), value.clone());
                }
                None => {
                    if let Some(default) = &param.default {
                        validated.insert(param.name.clone(), default.clone());
                    }
                }
            }
        }

        Ok(validated)
    }

    /// Render the parameter schema as a JSON Schema object
    #[inline]
    pub fn input_schema(&self) -> Value {
        let properties: Map<String, Value> = self
            .params
            .iter()
            .map(|param| (param.name.clone(), param.json_schema()))
            .collect();
        let required: Vec<&str> = self
            .params
            .iter()
            .filter(|param| param.required)
            .map(|param| param.name.as_str())
            .collect();

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
            "additionalProperties": false
        })
    }
}

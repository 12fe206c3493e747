//! MCP Error Handling
//!
//! Registration-time errors, argument validation errors, and the failure
//! classification carried by dispatch responses.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::{error, warn};

use crate::mcp::schema::TypeTag;

/// Errors raised by the tool registry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Tool already registered: {name}")]
    DuplicateTool { name: String },

    #[error("Invalid tool descriptor '{name}': {reason}")]
    InvalidDescriptor { name: String, reason: String },

    #[error("Tool not found: {name}")]
    ToolNotFound { name: String },
}

/// Reasons a set of call arguments does not satisfy a tool's parameter schema
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("Missing required parameter: {param}")]
    Missing { param: String },

    #[error("Unrecognized parameter: {param}")]
    Unknown { param: String },

    #[error("Parameter '{param}' must be {expected}, got {actual}")]
    TypeMismatch {
        param: String,
        expected: TypeTag,
        actual: &'static str,
    },
}

impl ArgumentError {
    /// Name of the parameter that failed validation
    #[inline]
    pub fn param(&self) -> &str {
        match self {
            Self::Missing { param } | Self::Unknown { param } | Self::TypeMismatch { param, .. } => {
                param
            }
        }
    }
}

/// Standard JSON-RPC error codes
pub mod error_codes {
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;
}

/// MCP-specific error codes
pub mod mcp_error_codes {
    pub const TOOL_NOT_FOUND: i32 = -32001;
}

/// Classification of a failed dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    UnknownTool,
    InvalidArguments,
    ToolExecutionError,
}

impl FailureKind {
    /// JSON-RPC error code a transport should use for this failure
    #[inline]
    pub fn code(self) -> i32 {
        match self {
            Self::UnknownTool => mcp_error_codes::TOOL_NOT_FOUND,
            Self::InvalidArguments => error_codes::INVALID_PARAMS,
            Self::ToolExecutionError => error_codes::INTERNAL_ERROR,
        }
    }

    /// Log a failure of this kind with appropriate level
    #[inline]
    pub fn log(self, tool: &str, detail: &dyn fmt::Display) {
        match self {
            Self::UnknownTool | Self::InvalidArguments => {
                warn!("Rejected call to '{}': {} ({})", tool, detail, self);
            }
            Self::ToolExecutionError => {
                error!("Tool '{}' failed: {}", tool, detail);
            }
        }
    }
}

impl fmt::Display for FailureKind {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::UnknownTool => "unknown tool",
            Self::InvalidArguments => "invalid arguments",
            Self::ToolExecutionError => "tool execution error",
        };
        f.write_str(name)
    }
}

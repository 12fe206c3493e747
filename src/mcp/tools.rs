//! Built-in Tools
//!
//! Demonstration tools registered by [`ToolRegistry::create_default`].
//!
//! [`ToolRegistry::create_default`]: crate::mcp::registry::ToolRegistry::create_default

use anyhow::{Result, anyhow};
use serde_json::{Value, json};
use tracing::debug;

use crate::mcp::registry::ToolHandler;
use crate::mcp::schema::{Arguments, ParamSpec, ToolDescriptor, TypeTag};

/// Greeting tool used to confirm the server is reachable
pub struct HelloTool;

/// Echo tool handler
pub struct EchoTool;

impl HelloTool {
    pub const DEFAULT_NAME: &'static str = "world";

    /// Create the hello tool definition
    #[inline]
    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::new("hello", "Say hello to confirm the MCP server is running").with_param(
            ParamSpec::optional("name", TypeTag::String)
                .with_description("Who to greet")
                .with_default(json!(Self::DEFAULT_NAME)),
        )
    }
}

impl ToolHandler for HelloTool {
    #[inline]
    fn call(&self, arguments: &Arguments) -> Result<Value> {
        let name = arguments
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or(Self::DEFAULT_NAME);

        debug!("Greeting '{}'", name);
        Ok(json!(format!("Hello, {}! MCP is running.", name)))
    }
}

impl EchoTool {
    /// Create the echo tool definition
    #[inline]
    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::new("echo", "Echo a message back to the client.").with_param(
            ParamSpec::required("text", TypeTag::String).with_description("The text to echo"),
        )
    }
}

impl ToolHandler for EchoTool {
    #[inline]
    fn call(&self, arguments: &Arguments) -> Result<Value> {
        arguments
            .get("text")
            .cloned()
            .ok_or_else(|| anyhow!("Missing required parameter: text"))
    }
}

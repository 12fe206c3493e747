//! Tool Registry
//!
//! Holds the callable tools known to the server. Names are unique: a second
//! registration under an existing name is rejected and the original tool
//! stays in place. Tools are listed in registration order.


use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

use crate::mcp::errors::RegistryError;
use crate::mcp::schema::{Arguments, ToolDescriptor};
use crate::mcp::tools::{EchoTool, HelloTool};

/// Tool handler trait for implementing tool execution
///
/// Handlers receive arguments that have already been validated against
/// their descriptor.
pub trait ToolHandler: Send + Sync {
    fn call(&self, arguments: &Arguments) -> anyhow::Result<Value>;
}

impl<F> ToolHandler for F
where
    F: Fn(&Arguments) -> anyhow::Result<Value> + Send + Sync,
{
    #[inline]
    fn call(&self, arguments: &Arguments) -> anyhow::Result<Value> {
        self(arguments)
    }
}

/// A descriptor paired with its implementation
pub struct RegisteredTool {
    descriptor: ToolDescriptor,
    handler: Box<dyn ToolHandler>,
}

impl RegisteredTool {
    #[inline]
    pub fn descriptor(&self) -> &ToolDescriptor {
        &self.descriptor
    }

    #[inline]
    pub fn handler(&self) -> &dyn ToolHandler {
        self.handler.as_ref()
    }
}

/// Tool registry for managing tool registration
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<RegisteredTool>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Create an empty tool registry
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool under its descriptor's name
    #[inline]
    pub fn register<H>(&mut self, descriptor: ToolDescriptor, handler: H) -> Result<(), RegistryError>
    where
        H: ToolHandler + 'static,
    {
        descriptor.validate()?;

        if self.index.contains_key(&descriptor.name) {
            return Err(RegistryError::DuplicateTool {
                name: descriptor.name,
            });
        }

        debug!(
            "Registered tool: {} ({} parameters)",
            descriptor.name,
            descriptor.params.len()
        );
        self.index.insert(descriptor.name.clone(), self.tools.len());
        self.tools.push(RegisteredTool {
            descriptor,
            handler: Box::new(handler),
        });
        Ok(())
    }

    /// Get a specific tool by name
    #[inline]
    pub fn lookup(&self, name: &str) -> Result<&RegisteredTool, RegistryError> {
        self.index
            .get(name)
            .map(|&position| &self.tools[position])
            .ok_or_else(|| RegistryError::ToolNotFound {
                name: name.to_string(),
            })
    }

    /// Iterate over registered tool descriptors in registration order
    #[inline]
    pub fn list(&self) -> impl Iterator<Item = &ToolDescriptor> + Clone + '_ {
        self.tools.iter().map(RegisteredTool::descriptor)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Create a registry holding the built-in tools
    #[inline]
    pub fn create_default() -> Result<Self, RegistryError> {
        let mut registry = Self::new();

        registry.register(HelloTool::descriptor(), HelloTool)?;
        registry.register(EchoTool::descriptor(), EchoTool)?;

        Ok(registry)
    }
}

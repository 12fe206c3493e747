use anyhow::Context;
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::Config;
use crate::mcp::{
    Arguments, Dispatcher, InvocationRequest, InvocationResponse, ToolDescriptor, ToolRegistry,
};
use crate::{HelloError, Result};

/// Build the dispatcher over the built-in tools.
///
/// Registration errors abort startup.
#[inline]
pub fn build_dispatcher() -> Result<Dispatcher> {
    let registry = ToolRegistry::create_default()?;
    info!("Registered {} tools", registry.len());
    Ok(Dispatcher::new(registry))
}

/// Print the effective configuration
#[inline]
pub fn show_config(config: &Config) -> Result<()> {
    let endpoint = config.server.endpoint_url()?;
    let content = toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;

    println!("Configuration file: {}", config.config_file_path().display());
    println!("Endpoint: {}", endpoint);
    println!();
    print!("{}", content);
    Ok(())
}

/// Write the configuration file, returning its path
#[inline]
pub fn write_config(config: &Config) -> Result<PathBuf> {
    config.save()?;
    let path = config.config_file_path();
    info!("Wrote configuration to {}", path.display());
    Ok(path)
}

/// One-line summary of a tool and its parameters
#[inline]
pub fn format_tool(descriptor: &ToolDescriptor) -> String {
    let params: Vec<String> = descriptor
        .params
        .iter()
        .map(|param| {
            let marker = if param.required { "" } else { "?" };
            match &param.default {
                Some(default) => format!("{}{}: {} = {}", param.name, marker, param.type_tag, default),
                None => format!("{}{}: {}", param.name, marker, param.type_tag),
            }
        })
        .collect();

    format!(
        "{}({}) - {}",
        descriptor.name,
        params.join(", "),
        descriptor.description
    )
}

/// Print registered tools in registration order
#[inline]
pub fn list_tools(registry: &ToolRegistry) {
    if registry.is_empty() {
        println!("No tools registered.");
        return;
    }

    println!("Registered tools:");
    for descriptor in registry.list() {
        println!("  {}", format_tool(descriptor));
    }
}

/// Parse `--args` as a JSON object; absent means no arguments
#[inline]
pub fn parse_arguments(raw: Option<&str>) -> Result<Arguments> {
    let Some(raw) = raw else {
        return Ok(Arguments::new());
    };

    match serde_json::from_str::<Value>(raw)? {
        Value::Object(arguments) => Ok(arguments),
        other => Err(HelloError::Arguments(format!(
            "expected a JSON object, got {}",
            other
        ))),
    }
}

/// Dispatch a single call against `dispatcher`
#[inline]
pub fn call_tool(dispatcher: &Dispatcher, tool: &str, raw_args: Option<&str>) -> Result<InvocationResponse> {
    let arguments = parse_arguments(raw_args)?;
    let request = InvocationRequest::new(tool, arguments);
    debug!("Calling tool '{}' with {} arguments", tool, request.arguments.len());
    Ok(dispatcher.handle(&request))
}

/// Tool definitions in `{name, description, inputSchema}` form
#[inline]
pub fn tool_schemas(registry: &ToolRegistry) -> Vec<Value> {
    registry
        .list()
        .map(|descriptor| {
            json!({
                "name": descriptor.name,
                "description": descriptor.description,
                "inputSchema": descriptor.input_schema()
            })
        })
        .collect()
}

/// Write all tool schemas to `output` as a JSON array, returning the count
#[inline]
pub fn export_schemas(registry: &ToolRegistry, output: &Path) -> Result<usize> {
    let schemas = tool_schemas(registry);
    let content = serde_json::to_string_pretty(&schemas)?;

    if let Some(parent) = output.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(output, content)
        .with_context(|| format!("Failed to write schemas: {}", output.display()))?;

    info!("Exported {} tool schemas to {}", schemas.len(), output.display());
    Ok(schemas.len())
}

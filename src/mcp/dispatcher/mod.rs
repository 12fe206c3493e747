//! Request Dispatcher
//!
//! Routes a decoded tool invocation to the registered tool and converts
//! every outcome, including lookup and validation failures, into an
//! [`InvocationResponse`]. Dispatch errors never propagate past this module.


use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::mcp::errors::FailureKind;
use crate::mcp::registry::ToolRegistry;
use crate::mcp::schema::Arguments;

/// A decoded request to invoke a tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvocationRequest {
    #[serde(rename = "name")]
    pub tool_name: String,
    #[serde(default)]
    pub arguments: Arguments,
}

impl InvocationRequest {
    #[inline]
    pub fn new(tool_name: impl Into<String>, arguments: Arguments) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments,
        }
    }
}

/// Outcome of a dispatched request, ready for the transport to encode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum InvocationResponse {
    Success { value: Value },
    Failure { kind: FailureKind, message: String },
}

impl InvocationResponse {
    #[inline]
    pub fn success(value: Value) -> Self {
        Self::Success { value }
    }

    #[inline]
    pub fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        Self::Failure {
            kind,
            message: message.into(),
        }
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Failure classification, if this is a failure
    #[inline]
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { kind, .. } => Some(*kind),
        }
    }
}

/// Stateless dispatcher over a frozen tool registry
#[derive(Clone)]
pub struct Dispatcher {
    registry: Arc<ToolRegistry>,
}

impl Dispatcher {
    /// Freeze `registry` and dispatch against it.
    ///
    /// No tools can be registered once the registry is owned by a dispatcher.
    #[inline]
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    #[inline]
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Handle a single invocation request
    #[inline]
    pub fn handle(&self, request: &InvocationRequest) -> InvocationResponse {
        let name = request.tool_name.as_str();
        debug!("Dispatching tool call: {}", name);

        let tool = match self.registry.lookup(name) {
            Ok(tool) => tool,
            Err(e) => {
                FailureKind::UnknownTool.log(name, &e);
                return InvocationResponse::failure(FailureKind::UnknownTool, name);
            }
        };

        let arguments = match tool.descriptor().check_arguments(&request.arguments) {
            Ok(arguments) => arguments,
            Err(e) => {
                FailureKind::InvalidArguments.log(name, &e);
                return InvocationResponse::failure(FailureKind::InvalidArguments, e.param());
            }
        };

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| tool.handler().call(&arguments)));
        match outcome {
            Ok(Ok(value)) => {
                debug!("Tool '{}' completed", name);
                InvocationResponse::success(value)
            }
            Ok(Err(e)) => {
                let message = format!("{:#}", e);
                FailureKind::ToolExecutionError.log(name, &message);
                InvocationResponse::failure(FailureKind::ToolExecutionError, message)
            }
            Err(payload) => {
                let message = format!("tool panicked: {}", panic_message(&*payload));
                FailureKind::ToolExecutionError.log(name, &message);
                InvocationResponse::failure(FailureKind::ToolExecutionError, message)
            }
        }
    }

    /// Dispatch on tokio's blocking pool.
    ///
    /// Tools may block, so each call gets its own blocking task. Dropping or
    /// aborting the handle abandons the result; the dispatcher applies no
    /// timeout of its own.
    #[inline]
    pub fn spawn(&self, request: InvocationRequest) -> JoinHandle<InvocationResponse> {
        let dispatcher = self.clone();
        tokio::task::spawn_blocking(move || dispatcher.handle(&request))
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        *message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown panic"
    }
}

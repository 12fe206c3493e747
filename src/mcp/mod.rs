//! MCP tool registry and request dispatch
//!
//! The transport decodes incoming calls into [`InvocationRequest`]s, hands
//! them to the [`Dispatcher`], and encodes the resulting
//! [`InvocationResponse`]s. Wire framing and protocol negotiation live
//! outside this crate.


pub mod dispatcher;
pub mod errors;
pub mod registry;
pub mod schema;
pub mod tools;

pub use dispatcher::{Dispatcher, InvocationRequest, InvocationResponse};
pub use errors::{ArgumentError, FailureKind, RegistryError};
pub use registry::{RegisteredTool, ToolHandler, ToolRegistry};
pub use schema::{Arguments, ParamSpec, ToolDescriptor, TypeTag};
pub use tools::{EchoTool, HelloTool};

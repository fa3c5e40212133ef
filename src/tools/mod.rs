//! Tool System Module
//!
//! Provides structured tool calling with JSON schema definitions. Every
//! tool is a pure function of its arguments plus the immutable frequency
//! catalog, so the registry is built once at startup and holds no mutable
//! state at all.

mod catalog;
mod calculate;

pub use calculate::{
    FibonacciFrequencyTool, FractalFrequenciesTool, FrequencyMatrixTool, GoldenRatioTool,
    HarmonicSeriesTool, PhiSpiralTool, PrimeHarmonicsTool, PythagoreanFrequencyTool,
    QuantumHarmonicTool, ResonanceCascadeTool,
};
pub use catalog::{ChakraFrequenciesTool, WellToneListTool, WellToneLookupTool};

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

use crate::calc::DEFAULT_PRIMES;
use crate::catalog::FrequencyCatalog;

/// Errors raised while validating or running a single tool call. All of
/// them are caller input errors; the registry converts each into a
/// structured failure payload at the invocation boundary.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Missing required argument '{0}'")]
    MissingArgument(&'static str),
    #[error("Argument '{name}' must be {expected}")]
    MalformedArgument {
        name: &'static str,
        expected: &'static str,
    },
}

pub type ToolResult<T> = Result<T, ToolError>;

/// Output from a tool execution
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolOutput {
    /// Whether the tool execution was successful
    pub success: bool,
    /// The output data (JSON payload echoing inputs plus results)
    pub data: Value,
    /// Human-readable summary of the output
    pub summary: String,
    /// Optional error message if success is false
    pub error: Option<String>,
}

impl ToolOutput {
    /// Create a successful output
    pub fn success(data: impl Into<Value>, summary: impl Into<String>) -> Self {
        Self {
            success: true,
            data: data.into(),
            summary: summary.into(),
            error: None,
        }
    }

    /// Create a failed output
    pub fn failure(error: impl Into<String>) -> Self {
        let error = error.into();
        Self {
            success: false,
            data: Value::Null,
            summary: format!("Error: {}", error),
            error: Some(error),
        }
    }

    /// Create a failed output carrying a structured payload, e.g. the list
    /// of valid names after a failed lookup
    pub fn failure_with(data: impl Into<Value>, error: impl Into<String>) -> Self {
        let error = error.into();
        Self {
            success: false,
            data: data.into(),
            summary: format!("Error: {}", error),
            error: Some(error),
        }
    }
}

/// A tool call request: operation name plus argument bag
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolCall {
    /// Name of the tool to call
    pub name: String,
    /// Parameters for the tool
    pub parameters: Value,
}

/// Trait for the named frequency operations
#[async_trait]
pub trait Tool: Send + Sync {
    /// Get the unique name of the tool
    fn name(&self) -> String;

    /// Get a description of what the tool does
    fn description(&self) -> String;

    /// Get the JSON schema for the tool's parameters
    fn parameters(&self) -> Value;

    /// Execute the tool with the given parameters
    async fn execute(&self, params: Value) -> ToolResult<ToolOutput>;
}

// ──────────────────────────────────────────────────────────────────────────
// Argument extraction
//
// Implements the validation policy: required arguments must be present and
// well-typed, optional arguments fall back to their declared default, and a
// present-but-mistyped value is always reported rather than substituted.
// ──────────────────────────────────────────────────────────────────────────

pub(crate) fn require_f64(params: &Value, name: &'static str) -> ToolResult<f64> {
    match params.get(name) {
        None | Some(Value::Null) => Err(ToolError::MissingArgument(name)),
        Some(value) => value.as_f64().ok_or(ToolError::MalformedArgument {
            name,
            expected: "a number",
        }),
    }
}

pub(crate) fn require_i64(params: &Value, name: &'static str) -> ToolResult<i64> {
    match params.get(name) {
        None | Some(Value::Null) => Err(ToolError::MissingArgument(name)),
        Some(value) => value.as_i64().ok_or(ToolError::MalformedArgument {
            name,
            expected: "an integer",
        }),
    }
}

pub(crate) fn require_usize(params: &Value, name: &'static str) -> ToolResult<usize> {
    match params.get(name) {
        None | Some(Value::Null) => Err(ToolError::MissingArgument(name)),
        Some(value) => value
            .as_u64()
            .map(|n| n as usize)
            .ok_or(ToolError::MalformedArgument {
                name,
                expected: "a non-negative integer",
            }),
    }
}

pub(crate) fn require_str(params: &Value, name: &'static str) -> ToolResult<String> {
    match params.get(name) {
        None | Some(Value::Null) => Err(ToolError::MissingArgument(name)),
        Some(value) => value
            .as_str()
            .map(str::to_string)
            .ok_or(ToolError::MalformedArgument {
                name,
                expected: "a string",
            }),
    }
}

pub(crate) fn optional_usize(
    params: &Value,
    name: &'static str,
    default: usize,
) -> ToolResult<usize> {
    match params.get(name) {
        None | Some(Value::Null) => Ok(default),
        Some(value) => value
            .as_u64()
            .map(|n| n as usize)
            .ok_or(ToolError::MalformedArgument {
                name,
                expected: "a non-negative integer",
            }),
    }
}

pub(crate) fn optional_bool(params: &Value, name: &'static str, default: bool) -> ToolResult<bool> {
    match params.get(name) {
        None | Some(Value::Null) => Ok(default),
        Some(value) => value.as_bool().ok_or(ToolError::MalformedArgument {
            name,
            expected: "a boolean",
        }),
    }
}

/// The `primes` argument: absent means the first ten primes, present means
/// an array of integers used in caller order.
pub(crate) fn optional_primes(params: &Value, name: &'static str) -> ToolResult<Vec<u64>> {
    let malformed = ToolError::MalformedArgument {
        name,
        expected: "an array of non-negative integers",
    };
    match params.get(name) {
        None | Some(Value::Null) => Ok(DEFAULT_PRIMES.to_vec()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| item.as_u64())
            .collect::<Option<Vec<u64>>>()
            .ok_or(malformed),
        Some(_) => Err(malformed),
    }
}

// ──────────────────────────────────────────────────────────────────────────
// Registry
// ──────────────────────────────────────────────────────────────────────────

/// Registry for the fixed set of frequency tools. Populated during
/// bootstrap, immutable afterwards.
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Registry pre-loaded with every built-in tool
    pub fn with_builtin_tools(catalog: Arc<FrequencyCatalog>) -> Self {
        let mut registry = Self::new();
        registry.register_instance(WellToneLookupTool::new(catalog.clone()));
        registry.register_instance(WellToneListTool::new(catalog.clone()));
        registry.register_instance(ChakraFrequenciesTool::new(catalog));
        registry.register_instance(HarmonicSeriesTool);
        registry.register_instance(PythagoreanFrequencyTool);
        registry.register_instance(FibonacciFrequencyTool);
        registry.register_instance(GoldenRatioTool);
        registry.register_instance(PrimeHarmonicsTool);
        registry.register_instance(PhiSpiralTool);
        registry.register_instance(QuantumHarmonicTool);
        registry.register_instance(FractalFrequenciesTool);
        registry.register_instance(ResonanceCascadeTool);
        registry.register_instance(FrequencyMatrixTool);
        registry
    }

    /// Register a tool instance
    pub fn register_instance<T: Tool + 'static>(&mut self, tool: T) {
        self.tools.insert(tool.name(), Arc::new(tool));
    }

    /// Get all tool names, sorted
    pub fn tool_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tools.keys().cloned().collect();
        names.sort();
        names
    }

    /// Get a specific tool by name
    pub fn get_tool(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Capability discovery: name, description, and input schema for every
    /// registered tool, name-sorted.
    pub fn describe(&self) -> Vec<Value> {
        self.tool_names()
            .into_iter()
            .filter_map(|name| self.tools.get(&name))
            .map(|tool| {
                json!({
                    "name": tool.name(),
                    "description": tool.description(),
                    "inputSchema": tool.parameters(),
                })
            })
            .collect()
    }

    /// Execute a tool call. Every failure, including an unknown tool name
    /// and every validation error, comes back as a structured failure
    /// output; a well-formed invocation never propagates a fault.
    pub async fn execute(&self, call: &ToolCall) -> ToolOutput {
        let Some(tool) = self.tools.get(&call.name) else {
            tracing::warn!("Rejected call to unknown tool: {}", call.name);
            return ToolOutput::failure(format!("Unknown tool: {}", call.name));
        };

        tracing::debug!("Executing tool: {}", call.name);
        match tool.execute(call.parameters.clone()).await {
            Ok(output) => output,
            Err(err) => {
                tracing::debug!("Tool '{}' rejected its arguments: {}", call.name, err);
                ToolOutput::failure(err.to_string())
            }
        }
    }

    /// Execute multiple tool calls in parallel. Safe without coordination:
    /// every tool is pure over immutable shared data.
    pub async fn execute_parallel(&self, calls: &[ToolCall]) -> Vec<ToolOutput> {
        let futures: Vec<_> = calls.iter().map(|call| self.execute(call)).collect();
        futures_util::future::join_all(futures).await
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

//! Sound Healing Frequency Service
//!
//! A Rust MCP server built around two components:
//! - An immutable catalog of named healing frequencies (chakra, solfeggio,
//!   earth resonance, brainwave bands)
//! - A registry of pure, stateless calculation tools with JSON schema
//!   definitions and structured success/failure payloads
//!
//! Transport (stdio JSON-RPC) and bootstrap live in `server` and the
//! binary; everything else is side-effect free.

pub mod calc;
pub mod catalog;
pub mod server;
pub mod tools;

// Re-exports for convenience
pub use catalog::FrequencyCatalog;
pub use tools::{Tool, ToolCall, ToolOutput, ToolRegistry};

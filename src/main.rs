//! Sound Healing MCP Server
//!
//! A Rust MCP server exposing:
//! - The well-tone frequency catalog (chakra, solfeggio, earth resonance, brainwaves)
//! - Harmonic calculation tools (harmonic series, golden ratio, Fibonacci, primes, fractals)
//! - Structured tool calling with JSON schema discovery
//! - stdio JSON-RPC transport

use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use sound_healing_mcp::catalog::FrequencyCatalog;
use sound_healing_mcp::server;
use sound_healing_mcp::tools::ToolRegistry;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize logging. stdout is the protocol channel, so the
    // subscriber writes to stderr only.
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    eprintln!("Sound Healing MCP Server starting...");
    eprintln!("Server name: {}", server::SERVER_NAME);
    eprintln!("Version: {}", server::SERVER_VERSION);
    eprintln!("Communication: stdio (standard input/output)");

    let catalog = Arc::new(FrequencyCatalog::new());
    info!("Catalog initialized with {} well-tone entries", catalog.len());

    let registry = Arc::new(ToolRegistry::with_builtin_tools(catalog));
    info!("Tools: {}", registry.tool_names().join(", "));

    eprintln!("Ready for MCP client connections...");

    server::run_stdio(registry).await
}

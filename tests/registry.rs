//! Registry Verification Suite
//!
//! Exercises the full tool registry through the public API: catalog
//! round-trips, calculation results, validation failures, purity, and
//! dispatch isolation.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use sound_healing_mcp::tools::{Tool, ToolResult};
use sound_healing_mcp::{FrequencyCatalog, ToolCall, ToolOutput, ToolRegistry};

const TOLERANCE: f64 = 1e-9;

fn registry() -> ToolRegistry {
    ToolRegistry::with_builtin_tools(Arc::new(FrequencyCatalog::new()))
}

fn call(name: &str, parameters: Value) -> ToolCall {
    ToolCall {
        name: name.to_string(),
        parameters,
    }
}

#[test]
fn tools_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<ToolRegistry>();
    assert_send_sync::<FrequencyCatalog>();
}

#[tokio::test]
async fn every_catalog_entry_round_trips() {
    let expected = [
        ("chakra_base", 396.0),
        ("chakra_sacral", 417.0),
        ("chakra_solar_plexus", 528.0),
        ("chakra_heart", 639.0),
        ("chakra_throat", 741.0),
        ("chakra_third_eye", 852.0),
        ("chakra_crown", 963.0),
        ("love_frequency", 528.0),
        ("solfeggio_174", 174.0),
        ("solfeggio_285", 285.0),
        ("solfeggio_396", 396.0),
        ("solfeggio_417", 417.0),
        ("solfeggio_528", 528.0),
        ("solfeggio_639", 639.0),
        ("solfeggio_741", 741.0),
        ("solfeggio_852", 852.0),
        ("solfeggio_963", 963.0),
        ("earth_432", 432.0),
        ("earth_8", 8.0),
        ("earth_7_83", 7.83),
        ("theta", 4.0),
        ("delta", 0.5),
        ("alpha", 8.0),
        ("beta", 13.0),
        ("gamma", 40.0),
    ];
    assert_eq!(expected.len(), 25);

    let registry = registry();
    for (name, hz) in expected {
        let output = registry
            .execute(&call(
                "get_well_tone_frequency",
                json!({ "frequency_name": name }),
            ))
            .await;
        assert!(output.success, "lookup of '{}' failed", name);
        assert_eq!(output.data["frequency_hz"], hz, "wrong value for '{}'", name);
    }
}

#[tokio::test]
async fn unknown_frequency_reports_all_25_valid_names() {
    let registry = registry();
    let output = registry
        .execute(&call(
            "get_well_tone_frequency",
            json!({ "frequency_name": "solfeggio_440" }),
        ))
        .await;

    assert!(!output.success);
    let available = output.data["available_frequencies"].as_array().unwrap();
    assert_eq!(available.len(), 25);

    // Sorted, so enumerable output is stable for callers
    let names: Vec<&str> = available.iter().map(|v| v.as_str().unwrap()).collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
}

#[tokio::test]
async fn reference_calculations_match_known_values() {
    let registry = registry();

    let output = registry
        .execute(&call(
            "calculate_harmonic_series",
            json!({ "base_frequency": 100.0, "harmonics_count": 5 }),
        ))
        .await;
    assert_eq!(
        output.data["harmonics"],
        json!([100.0, 200.0, 300.0, 400.0, 500.0])
    );

    let output = registry
        .execute(&call(
            "calculate_pythagorean_frequency",
            json!({ "base_frequency": 220.0, "numerator": 3, "denominator": 2 }),
        ))
        .await;
    assert_eq!(output.data["calculated_frequency"], 330.0);

    let output = registry
        .execute(&call(
            "calculate_fibonacci_frequency",
            json!({ "base_frequency": 10.0, "fibonacci_index": 5 }),
        ))
        .await;
    assert_eq!(output.data["calculated_frequency"], 80.0);

    let output = registry
        .execute(&call(
            "calculate_golden_ratio_frequency",
            json!({ "base_frequency": 100.0 }),
        ))
        .await;
    let frequency = output.data["golden_ratio_frequency"].as_f64().unwrap();
    assert!((frequency - 161.803398875).abs() < TOLERANCE);

    let output = registry
        .execute(&call(
            "calculate_resonance_cascade",
            json!({ "base_frequency": 1.0, "steps": 3 }),
        ))
        .await;
    let cascade: Vec<f64> = output.data["resonance_cascade"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_f64().unwrap())
        .collect();
    assert_eq!(cascade.len(), 3);
    assert!((cascade[0] - 1.0).abs() < TOLERANCE);
    assert!((cascade[1] - 2.0_f64.sqrt()).abs() < TOLERANCE);
    assert!((cascade[2] - 2.0).abs() < TOLERANCE);
}

#[tokio::test]
async fn generated_sets_are_sorted_and_unique() {
    let registry = registry();
    let inputs = [
        ("generate_fractal_frequencies", json!({ "base_frequency": 432.0, "depth": 7 })),
        ("generate_fractal_frequencies", json!({ "base_frequency": 7.83 })),
        ("generate_custom_frequency_matrix", json!({ "base_frequency": 100.0 })),
        (
            "generate_custom_frequency_matrix",
            json!({ "base_frequency": 432.0, "matrix_size": 12, "include_golden_ratio": false }),
        ),
    ];

    for (tool, params) in inputs {
        let output = registry.execute(&call(tool, params.clone())).await;
        assert!(output.success, "{} failed for {}", tool, params);
        let key = if tool == "generate_fractal_frequencies" {
            "fractal_frequencies"
        } else {
            "frequency_matrix"
        };
        let values: Vec<f64> = output.data[key]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_f64().unwrap())
            .collect();
        for pair in values.windows(2) {
            assert!(
                pair[0] < pair[1],
                "{} output not strictly ascending: {:?}",
                tool,
                pair
            );
        }
    }
}

#[tokio::test]
async fn repeated_invocation_is_pure() {
    let registry = registry();
    let call = call(
        "generate_custom_frequency_matrix",
        json!({ "base_frequency": 432.0, "matrix_size": 10 }),
    );

    let first = registry.execute(&call).await;
    assert!(first.success);
    for _ in 0..999 {
        let output = registry.execute(&call).await;
        assert_eq!(output, first);
    }
}

#[tokio::test]
async fn parallel_invocations_need_no_coordination() {
    let registry = Arc::new(registry());
    let calls: Vec<ToolCall> = (1..=16)
        .map(|n| call("calculate_harmonic_series", json!({ "base_frequency": n as f64 })))
        .collect();

    let outputs = registry.execute_parallel(&calls).await;
    assert_eq!(outputs.len(), 16);
    for (n, output) in outputs.iter().enumerate() {
        assert!(output.success);
        assert_eq!(output.data["harmonics"][0], (n + 1) as f64);
    }
}

#[tokio::test]
async fn missing_required_argument_is_reported() {
    let registry = registry();
    let output = registry
        .execute(&call("calculate_harmonic_series", json!({})))
        .await;
    assert!(!output.success);
    assert_eq!(
        output.error.as_deref(),
        Some("Missing required argument 'base_frequency'")
    );
}

#[tokio::test]
async fn malformed_argument_is_reported() {
    let registry = registry();
    let output = registry
        .execute(&call(
            "calculate_harmonic_series",
            json!({ "base_frequency": "loud" }),
        ))
        .await;
    assert!(!output.success);
    assert_eq!(
        output.error.as_deref(),
        Some("Argument 'base_frequency' must be a number")
    );
}

/// Tool that records whether it was ever executed
struct CountingTool {
    executions: Arc<AtomicUsize>,
}

#[async_trait]
impl Tool for CountingTool {
    fn name(&self) -> String {
        "counting_tool".to_string()
    }
    fn description(&self) -> String {
        "Counts executions".to_string()
    }
    fn parameters(&self) -> Value {
        json!({"type": "object"})
    }
    async fn execute(&self, _params: Value) -> ToolResult<ToolOutput> {
        self.executions.fetch_add(1, Ordering::SeqCst);
        Ok(ToolOutput::success(json!({}), "counted"))
    }
}

#[tokio::test]
async fn unknown_operation_never_dispatches() {
    let executions = Arc::new(AtomicUsize::new(0));
    let mut registry = ToolRegistry::new();
    registry.register_instance(CountingTool {
        executions: executions.clone(),
    });

    let output = registry
        .execute(&call("counting_tool_v2", json!({})))
        .await;
    assert!(!output.success);
    assert_eq!(output.error.as_deref(), Some("Unknown tool: counting_tool_v2"));
    assert_eq!(executions.load(Ordering::SeqCst), 0);

    registry.execute(&call("counting_tool", json!({}))).await;
    assert_eq!(executions.load(Ordering::SeqCst), 1);
}

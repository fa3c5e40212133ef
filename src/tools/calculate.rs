//! Harmonic Calculation Tools
//!
//! One tool per named calculation. Each declares its argument schema
//! (names, types, defaults, and descriptive bounds), validates the bag,
//! and shapes the result payload around a pure function from `calc`.
//!
//! The advertised numeric bounds (fibonacci index 0-11, quantum level
//! 1-10) are schema metadata only; out-of-table Fibonacci indices clamp
//! to the last tabulated value instead of failing.

use async_trait::async_trait;
use serde_json::{json, Value};

use super::{
    optional_bool, optional_primes, optional_usize, require_f64, require_i64, require_usize, Tool,
    ToolOutput, ToolResult,
};
use crate::calc;

/// Tool computing the integer harmonic series of a base frequency
#[derive(Default)]
pub struct HarmonicSeriesTool;

#[async_trait]
impl Tool for HarmonicSeriesTool {
    fn name(&self) -> String {
        "calculate_harmonic_series".to_string()
    }

    fn description(&self) -> String {
        "Calculate harmonic series from a base frequency".to_string()
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "base_frequency": {
                    "type": "number",
                    "description": "Base frequency in Hz"
                },
                "harmonics_count": {
                    "type": "integer",
                    "description": "Number of harmonics to calculate (default: 10)",
                    "default": 10
                }
            },
            "required": ["base_frequency"]
        })
    }

    async fn execute(&self, params: Value) -> ToolResult<ToolOutput> {
        let base = require_f64(&params, "base_frequency")?;
        let count = optional_usize(&params, "harmonics_count", 10)?;

        let harmonics = calc::harmonic_series(base, count);
        let summary = format!("{} harmonics of {} Hz", harmonics.len(), base);
        Ok(ToolOutput::success(
            json!({
                "base_frequency": base,
                "harmonics": harmonics,
                "count": harmonics.len()
            }),
            summary,
        ))
    }
}

/// Tool scaling a frequency by a Pythagorean interval ratio
#[derive(Default)]
pub struct PythagoreanFrequencyTool;

#[async_trait]
impl Tool for PythagoreanFrequencyTool {
    fn name(&self) -> String {
        "calculate_pythagorean_frequency".to_string()
    }

    fn description(&self) -> String {
        "Calculate frequency using Pythagorean ratios".to_string()
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "base_frequency": {
                    "type": "number",
                    "description": "Base frequency in Hz"
                },
                "numerator": {
                    "type": "integer",
                    "description": "Numerator of the ratio"
                },
                "denominator": {
                    "type": "integer",
                    "description": "Denominator of the ratio"
                }
            },
            "required": ["base_frequency", "numerator", "denominator"]
        })
    }

    async fn execute(&self, params: Value) -> ToolResult<ToolOutput> {
        let base = require_f64(&params, "base_frequency")?;
        let numerator = require_i64(&params, "numerator")?;
        let denominator = require_i64(&params, "denominator")?;

        let frequency = calc::pythagorean_ratio(base, numerator, denominator);
        Ok(ToolOutput::success(
            json!({
                "base_frequency": base,
                "ratio": format!("{}/{}", numerator, denominator),
                "calculated_frequency": frequency
            }),
            format!("{} Hz × {}/{} = {} Hz", base, numerator, denominator, frequency),
        ))
    }
}

/// Tool scaling a frequency by a tabulated Fibonacci value
#[derive(Default)]
pub struct FibonacciFrequencyTool;

#[async_trait]
impl Tool for FibonacciFrequencyTool {
    fn name(&self) -> String {
        "calculate_fibonacci_frequency".to_string()
    }

    fn description(&self) -> String {
        "Calculate frequency based on Fibonacci sequence".to_string()
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "base_frequency": {
                    "type": "number",
                    "description": "Base frequency in Hz"
                },
                "fibonacci_index": {
                    "type": "integer",
                    "description": "Index in Fibonacci sequence (0-11)",
                    "minimum": 0,
                    "maximum": 11
                }
            },
            "required": ["base_frequency", "fibonacci_index"]
        })
    }

    async fn execute(&self, params: Value) -> ToolResult<ToolOutput> {
        let base = require_f64(&params, "base_frequency")?;
        let index = require_usize(&params, "fibonacci_index")?;

        let frequency = calc::fibonacci_frequency(base, index);
        Ok(ToolOutput::success(
            json!({
                "base_frequency": base,
                "fibonacci_index": index,
                "calculated_frequency": frequency
            }),
            format!("Fibonacci index {} of {} Hz = {} Hz", index, base, frequency),
        ))
    }
}

/// Tool scaling a frequency by the golden ratio
#[derive(Default)]
pub struct GoldenRatioTool;

#[async_trait]
impl Tool for GoldenRatioTool {
    fn name(&self) -> String {
        "calculate_golden_ratio_frequency".to_string()
    }

    fn description(&self) -> String {
        "Calculate frequency using golden ratio (phi)".to_string()
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "base_frequency": {
                    "type": "number",
                    "description": "Base frequency in Hz"
                }
            },
            "required": ["base_frequency"]
        })
    }

    async fn execute(&self, params: Value) -> ToolResult<ToolOutput> {
        let base = require_f64(&params, "base_frequency")?;

        let frequency = calc::golden_ratio_frequency(base);
        Ok(ToolOutput::success(
            json!({
                "base_frequency": base,
                "golden_ratio_frequency": frequency,
                "phi": calc::phi()
            }),
            format!("{} Hz × φ = {} Hz", base, frequency),
        ))
    }
}

/// Tool scaling a frequency by a list of primes
#[derive(Default)]
pub struct PrimeHarmonicsTool;

#[async_trait]
impl Tool for PrimeHarmonicsTool {
    fn name(&self) -> String {
        "calculate_prime_harmonics".to_string()
    }

    fn description(&self) -> String {
        "Calculate harmonics using prime numbers".to_string()
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "base_frequency": {
                    "type": "number",
                    "description": "Base frequency in Hz"
                },
                "primes": {
                    "type": "array",
                    "items": {"type": "integer"},
                    "description": "List of prime numbers to use (default: first 10 primes)"
                }
            },
            "required": ["base_frequency"]
        })
    }

    async fn execute(&self, params: Value) -> ToolResult<ToolOutput> {
        let base = require_f64(&params, "base_frequency")?;
        let primes = optional_primes(&params, "primes")?;

        let harmonics = calc::prime_harmonics(base, &primes);
        let summary = format!("{} prime harmonics of {} Hz", harmonics.len(), base);
        Ok(ToolOutput::success(
            json!({
                "base_frequency": base,
                "primes_used": primes,
                "prime_harmonics": harmonics
            }),
            summary,
        ))
    }
}

/// Tool generating a golden-ratio power spiral
#[derive(Default)]
pub struct PhiSpiralTool;

#[async_trait]
impl Tool for PhiSpiralTool {
    fn name(&self) -> String {
        "generate_phi_spiral_frequencies".to_string()
    }

    fn description(&self) -> String {
        "Generate frequencies based on golden ratio spiral".to_string()
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "base_frequency": {
                    "type": "number",
                    "description": "Base frequency in Hz"
                },
                "count": {
                    "type": "integer",
                    "description": "Number of frequencies to generate (default: 10)",
                    "default": 10
                }
            },
            "required": ["base_frequency"]
        })
    }

    async fn execute(&self, params: Value) -> ToolResult<ToolOutput> {
        let base = require_f64(&params, "base_frequency")?;
        let count = optional_usize(&params, "count", 10)?;

        let frequencies = calc::phi_spiral(base, count);
        let summary = format!("φ-spiral of {} frequencies from {} Hz", frequencies.len(), base);
        Ok(ToolOutput::success(
            json!({
                "base_frequency": base,
                "phi_spiral_frequencies": frequencies,
                "count": frequencies.len()
            }),
            summary,
        ))
    }
}

/// Tool computing an energy-level harmonic
#[derive(Default)]
pub struct QuantumHarmonicTool;

#[async_trait]
impl Tool for QuantumHarmonicTool {
    fn name(&self) -> String {
        "calculate_quantum_harmonic".to_string()
    }

    fn description(&self) -> String {
        "Calculate quantum-level harmonics based on energy levels".to_string()
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "base_frequency": {
                    "type": "number",
                    "description": "Base frequency in Hz"
                },
                "quantum_level": {
                    "type": "integer",
                    "description": "Quantum energy level (1-10)",
                    "minimum": 1,
                    "maximum": 10
                }
            },
            "required": ["base_frequency", "quantum_level"]
        })
    }

    async fn execute(&self, params: Value) -> ToolResult<ToolOutput> {
        let base = require_f64(&params, "base_frequency")?;
        let level = require_i64(&params, "quantum_level")?;

        let frequency = calc::quantum_harmonic(base, level);
        Ok(ToolOutput::success(
            json!({
                "base_frequency": base,
                "quantum_level": level,
                "quantum_harmonic_frequency": frequency
            }),
            format!("{} Hz × {}² = {} Hz", base, level, frequency),
        ))
    }
}

/// Tool generating a self-similar fractal frequency set
#[derive(Default)]
pub struct FractalFrequenciesTool;

#[async_trait]
impl Tool for FractalFrequenciesTool {
    fn name(&self) -> String {
        "generate_fractal_frequencies".to_string()
    }

    fn description(&self) -> String {
        "Generate fractal-based frequencies using self-similar patterns".to_string()
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "base_frequency": {
                    "type": "number",
                    "description": "Base frequency in Hz"
                },
                "depth": {
                    "type": "integer",
                    "description": "Fractal depth (default: 5)",
                    "default": 5
                }
            },
            "required": ["base_frequency"]
        })
    }

    async fn execute(&self, params: Value) -> ToolResult<ToolOutput> {
        let base = require_f64(&params, "base_frequency")?;
        let depth = optional_usize(&params, "depth", 5)?;

        let frequencies = calc::fractal_frequencies(base, depth);
        let summary = format!(
            "{} fractal frequencies from {} Hz at depth {}",
            frequencies.len(),
            base,
            depth
        );
        Ok(ToolOutput::success(
            json!({
                "base_frequency": base,
                "fractal_depth": depth,
                "fractal_frequencies": frequencies,
                "count": frequencies.len()
            }),
            summary,
        ))
    }
}

/// Tool generating a √2 resonance cascade
#[derive(Default)]
pub struct ResonanceCascadeTool;

#[async_trait]
impl Tool for ResonanceCascadeTool {
    fn name(&self) -> String {
        "calculate_resonance_cascade".to_string()
    }

    fn description(&self) -> String {
        "Calculate resonance cascade frequencies".to_string()
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "base_frequency": {
                    "type": "number",
                    "description": "Base frequency in Hz"
                },
                "steps": {
                    "type": "integer",
                    "description": "Number of cascade steps (default: 7)",
                    "default": 7
                }
            },
            "required": ["base_frequency"]
        })
    }

    async fn execute(&self, params: Value) -> ToolResult<ToolOutput> {
        let base = require_f64(&params, "base_frequency")?;
        let steps = optional_usize(&params, "steps", 7)?;

        let cascade = calc::resonance_cascade(base, steps);
        let summary = format!("{}-step resonance cascade from {} Hz", cascade.len(), base);
        Ok(ToolOutput::success(
            json!({
                "base_frequency": base,
                "steps": steps,
                "resonance_cascade": cascade
            }),
            summary,
        ))
    }
}

/// Tool generating the combined frequency matrix
#[derive(Default)]
pub struct FrequencyMatrixTool;

#[async_trait]
impl Tool for FrequencyMatrixTool {
    fn name(&self) -> String {
        "generate_custom_frequency_matrix".to_string()
    }

    fn description(&self) -> String {
        "Generate a matrix of frequencies combining multiple mathematical principles".to_string()
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "base_frequency": {
                    "type": "number",
                    "description": "Base frequency in Hz"
                },
                "include_fibonacci": {
                    "type": "boolean",
                    "description": "Include Fibonacci-based frequencies",
                    "default": true
                },
                "include_golden_ratio": {
                    "type": "boolean",
                    "description": "Include golden ratio frequencies",
                    "default": true
                },
                "include_primes": {
                    "type": "boolean",
                    "description": "Include prime-based harmonics",
                    "default": true
                },
                "matrix_size": {
                    "type": "integer",
                    "description": "Size of the frequency matrix (default: 8)",
                    "default": 8
                }
            },
            "required": ["base_frequency"]
        })
    }

    async fn execute(&self, params: Value) -> ToolResult<ToolOutput> {
        let base = require_f64(&params, "base_frequency")?;
        let include_fibonacci = optional_bool(&params, "include_fibonacci", true)?;
        let include_golden_ratio = optional_bool(&params, "include_golden_ratio", true)?;
        let include_primes = optional_bool(&params, "include_primes", true)?;
        let size = optional_usize(&params, "matrix_size", 8)?;

        let matrix = calc::frequency_matrix(
            base,
            include_fibonacci,
            include_golden_ratio,
            include_primes,
            size,
        );
        let summary = format!("{} matrix frequencies from {} Hz", matrix.len(), base);
        Ok(ToolOutput::success(
            json!({
                "base_frequency": base,
                "matrix_size": matrix.len(),
                "frequency_matrix": matrix,
                "includes": {
                    "fibonacci": include_fibonacci,
                    "golden_ratio": include_golden_ratio,
                    "primes": include_primes
                }
            }),
            summary,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::ToolError;

    #[tokio::test]
    async fn test_harmonic_series_default_count() {
        let output = HarmonicSeriesTool
            .execute(json!({"base_frequency": 100.0}))
            .await
            .unwrap();
        assert!(output.success);
        assert_eq!(output.data["count"], 10);
        assert_eq!(output.data["harmonics"][0], 100.0);
        assert_eq!(output.data["harmonics"][9], 1000.0);
    }

    #[tokio::test]
    async fn test_harmonic_series_explicit_count() {
        let output = HarmonicSeriesTool
            .execute(json!({"base_frequency": 100.0, "harmonics_count": 5}))
            .await
            .unwrap();
        assert_eq!(
            output.data["harmonics"],
            json!([100.0, 200.0, 300.0, 400.0, 500.0])
        );
        assert_eq!(output.data["count"], 5);
    }

    #[tokio::test]
    async fn test_harmonic_series_missing_base() {
        let err = HarmonicSeriesTool.execute(json!({})).await.unwrap_err();
        assert!(matches!(err, ToolError::MissingArgument("base_frequency")));
    }

    #[tokio::test]
    async fn test_pythagorean_payload() {
        let output = PythagoreanFrequencyTool
            .execute(json!({"base_frequency": 220.0, "numerator": 3, "denominator": 2}))
            .await
            .unwrap();
        assert!(output.success);
        assert_eq!(output.data["ratio"], "3/2");
        assert_eq!(output.data["calculated_frequency"], 330.0);
    }

    #[tokio::test]
    async fn test_pythagorean_requires_both_ratio_parts() {
        let err = PythagoreanFrequencyTool
            .execute(json!({"base_frequency": 220.0, "numerator": 3}))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::MissingArgument("denominator")));
    }

    #[tokio::test]
    async fn test_fibonacci_clamps_out_of_table_index() {
        let output = FibonacciFrequencyTool
            .execute(json!({"base_frequency": 10.0, "fibonacci_index": 50}))
            .await
            .unwrap();
        assert!(output.success);
        assert_eq!(output.data["calculated_frequency"], 1440.0);
    }

    #[tokio::test]
    async fn test_golden_ratio_payload_includes_phi() {
        let output = GoldenRatioTool
            .execute(json!({"base_frequency": 100.0}))
            .await
            .unwrap();
        let frequency = output.data["golden_ratio_frequency"].as_f64().unwrap();
        assert!((frequency - 161.803398875).abs() < 1e-9);
        let phi = output.data["phi"].as_f64().unwrap();
        assert!((phi - 1.618033988749895).abs() < 1e-12);
    }

    #[tokio::test]
    async fn test_prime_harmonics_default_list() {
        let output = PrimeHarmonicsTool
            .execute(json!({"base_frequency": 10.0}))
            .await
            .unwrap();
        assert_eq!(
            output.data["primes_used"],
            json!([2, 3, 5, 7, 11, 13, 17, 19, 23, 29])
        );
        assert_eq!(output.data["prime_harmonics"][0], 20.0);
        assert_eq!(output.data["prime_harmonics"][9], 290.0);
    }

    #[tokio::test]
    async fn test_prime_harmonics_caller_order_preserved() {
        let output = PrimeHarmonicsTool
            .execute(json!({"base_frequency": 10.0, "primes": [5, 2]}))
            .await
            .unwrap();
        assert_eq!(output.data["prime_harmonics"], json!([50.0, 20.0]));
    }

    #[tokio::test]
    async fn test_phi_spiral_default_count() {
        let output = PhiSpiralTool
            .execute(json!({"base_frequency": 100.0}))
            .await
            .unwrap();
        assert_eq!(output.data["count"], 10);
        assert_eq!(
            output.data["phi_spiral_frequencies"].as_array().unwrap().len(),
            10
        );
    }

    #[tokio::test]
    async fn test_quantum_harmonic() {
        let output = QuantumHarmonicTool
            .execute(json!({"base_frequency": 100.0, "quantum_level": 3}))
            .await
            .unwrap();
        assert_eq!(output.data["quantum_harmonic_frequency"], 900.0);
    }

    #[tokio::test]
    async fn test_fractal_default_depth() {
        let output = FractalFrequenciesTool
            .execute(json!({"base_frequency": 432.0}))
            .await
            .unwrap();
        assert_eq!(output.data["fractal_depth"], 5);
        let frequencies = output.data["fractal_frequencies"].as_array().unwrap();
        assert_eq!(frequencies.len(), 11);
        assert_eq!(output.data["count"], 11);
    }

    #[tokio::test]
    async fn test_cascade_default_steps() {
        let output = ResonanceCascadeTool
            .execute(json!({"base_frequency": 440.0}))
            .await
            .unwrap();
        assert_eq!(output.data["steps"], 7);
        assert_eq!(
            output.data["resonance_cascade"].as_array().unwrap().len(),
            7
        );
    }

    #[tokio::test]
    async fn test_matrix_defaults() {
        let output = FrequencyMatrixTool
            .execute(json!({"base_frequency": 100.0}))
            .await
            .unwrap();
        assert!(output.success);
        assert_eq!(output.data["includes"]["fibonacci"], true);
        assert_eq!(output.data["includes"]["golden_ratio"], true);
        assert_eq!(output.data["includes"]["primes"], true);

        let matrix = output.data["frequency_matrix"].as_array().unwrap();
        assert_eq!(output.data["matrix_size"], matrix.len());
        let values: Vec<f64> = matrix.iter().map(|v| v.as_f64().unwrap()).collect();
        for pair in values.windows(2) {
            assert!(pair[0] < pair[1], "matrix not strictly ascending");
        }
    }

    #[tokio::test]
    async fn test_matrix_rejects_malformed_flag() {
        let err = FrequencyMatrixTool
            .execute(json!({"base_frequency": 100.0, "include_primes": "yes"}))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ToolError::MalformedArgument { name: "include_primes", .. }
        ));
    }
}

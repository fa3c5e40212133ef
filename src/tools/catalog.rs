//! Well-Tone Lookup Tools
//!
//! The three catalog-backed tools. These are the only tools holding shared
//! state, and that state is read-only after startup.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use super::{require_str, Tool, ToolOutput, ToolResult};
use crate::catalog::{Category, FrequencyCatalog};

/// Tool for retrieving one well-tone frequency by exact name
pub struct WellToneLookupTool {
    catalog: Arc<FrequencyCatalog>,
}

impl WellToneLookupTool {
    pub fn new(catalog: Arc<FrequencyCatalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl Tool for WellToneLookupTool {
    fn name(&self) -> String {
        "get_well_tone_frequency".to_string()
    }

    fn description(&self) -> String {
        "Get a specific well-tone healing frequency by name (e.g., chakra_base, solfeggio_528, earth_432)".to_string()
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "frequency_name": {
                    "type": "string",
                    "description": "Name of the well-tone frequency to retrieve"
                }
            },
            "required": ["frequency_name"]
        })
    }

    async fn execute(&self, params: Value) -> ToolResult<ToolOutput> {
        let name = require_str(&params, "frequency_name")?;

        match self.catalog.get(&name) {
            Some(frequency) => Ok(ToolOutput::success(
                json!({
                    "frequency_name": name,
                    "frequency_hz": frequency,
                    "description": format!("Retrieved {} frequency", name)
                }),
                format!("{} = {} Hz", name, frequency),
            )),
            None => Ok(ToolOutput::failure_with(
                json!({
                    "error": format!("Frequency '{}' not found", name),
                    "available_frequencies": self.catalog.names()
                }),
                format!("Frequency '{}' not found", name),
            )),
        }
    }
}

/// Tool listing every well-tone frequency grouped by category
pub struct WellToneListTool {
    catalog: Arc<FrequencyCatalog>,
}

impl WellToneListTool {
    pub fn new(catalog: Arc<FrequencyCatalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl Tool for WellToneListTool {
    fn name(&self) -> String {
        "list_all_well_tones".to_string()
    }

    fn description(&self) -> String {
        "List all available well-tone frequencies organized by category".to_string()
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {}
        })
    }

    async fn execute(&self, _params: Value) -> ToolResult<ToolOutput> {
        let grouped = self.catalog.categorized();
        let category_count = grouped.as_object().map(|g| g.len()).unwrap_or(0);
        Ok(ToolOutput::success(
            grouped,
            format!(
                "{} well-tone frequencies across {} categories",
                self.catalog.len(),
                category_count
            ),
        ))
    }
}

/// Tool returning the chakra frequency family
pub struct ChakraFrequenciesTool {
    catalog: Arc<FrequencyCatalog>,
}

impl ChakraFrequenciesTool {
    pub fn new(catalog: Arc<FrequencyCatalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl Tool for ChakraFrequenciesTool {
    fn name(&self) -> String {
        "get_chakra_frequencies".to_string()
    }

    fn description(&self) -> String {
        "Get all chakra healing frequencies".to_string()
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {}
        })
    }

    async fn execute(&self, _params: Value) -> ToolResult<ToolOutput> {
        let chakras = self.catalog.by_category(Category::Chakras);
        let count = chakras.as_object().map(|g| g.len()).unwrap_or(0);
        Ok(ToolOutput::success(
            chakras,
            format!("{} chakra frequencies", count),
        ))
    }
}

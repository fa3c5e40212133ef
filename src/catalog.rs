//! Well-Tone Frequency Catalog
//!
//! The static table of named healing frequencies: chakra tones, solfeggio
//! scale, earth resonances, and brainwave bands. Built once at startup and
//! shared read-only; nothing writes to it afterwards.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// The 25 well-tone entries. Names are unique; category membership is
/// derived from the name alone (prefix or exact match), never stored.
const WELL_TONES: [(&str, f64); 25] = [
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
    ("earth_8", 8.0), // Schumann resonance base
    ("earth_7_83", 7.83), // Schumann resonance primary
    ("theta", 4.0),
    ("delta", 0.5),
    ("alpha", 8.0),
    ("beta", 13.0),
    ("gamma", 40.0),
];

/// Well-tone category families
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Chakras,
    Solfeggio,
    EarthResonance,
    Brainwaves,
    Special,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Chakras,
        Category::Solfeggio,
        Category::EarthResonance,
        Category::Brainwaves,
        Category::Special,
    ];

    /// Key used for this category in grouped JSON views
    pub fn key(&self) -> &'static str {
        match self {
            Category::Chakras => "chakras",
            Category::Solfeggio => "solfeggio",
            Category::EarthResonance => "earth_resonance",
            Category::Brainwaves => "brainwaves",
            Category::Special => "special",
        }
    }

    /// Whether an entry name belongs to this category. Rules are evaluated
    /// independently per category; the 25 canonical entries each match
    /// exactly one.
    fn matches(&self, name: &str) -> bool {
        match self {
            Category::Chakras => name.starts_with("chakra_"),
            Category::Solfeggio => name.starts_with("solfeggio_"),
            Category::EarthResonance => name.starts_with("earth_"),
            Category::Brainwaves => {
                matches!(name, "theta" | "delta" | "alpha" | "beta" | "gamma")
            }
            Category::Special => name == "love_frequency",
        }
    }
}

/// Immutable catalog of named reference frequencies.
///
/// Constructed once in `main` and handed to the lookup tools behind an
/// `Arc`; all views are read-only.
pub struct FrequencyCatalog {
    entries: BTreeMap<&'static str, f64>,
}

impl FrequencyCatalog {
    pub fn new() -> Self {
        Self {
            entries: WELL_TONES.iter().copied().collect(),
        }
    }

    /// Exact-name lookup in Hz
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries.get(name).copied()
    }

    /// All entry names, sorted
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries of one category as a JSON object (name → Hz, name-sorted)
    pub fn by_category(&self, category: Category) -> Value {
        let mut group = Map::new();
        for (name, freq) in &self.entries {
            if category.matches(name) {
                group.insert(name.to_string(), Value::from(*freq));
            }
        }
        Value::Object(group)
    }

    /// Every entry partitioned into the five category families. An entry
    /// matching no category rule would be omitted from this view.
    pub fn categorized(&self) -> Value {
        let mut grouped = Map::new();
        for category in Category::ALL {
            grouped.insert(category.key().to_string(), self.by_category(category));
        }
        Value::Object(grouped)
    }
}

impl Default for FrequencyCatalog {
    fn default() -> Self {
        Self::new()
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Heuristic governing how outfit slots are filled
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Favour garments that suit the temperature band
    WeatherFocused,
    /// Build around color compatibility with pieces already chosen
    ColorHarmony,
    /// Restrict candidates to a randomly drawn style before weather scoring
    StyleBased,
    /// Uniform random picks, with more frequent dresses and extra accessories
    CreativeRandom,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::WeatherFocused,
        Strategy::ColorHarmony,
        Strategy::StyleBased,
        Strategy::CreativeRandom,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::WeatherFocused => "weather-focused",
            Strategy::ColorHarmony => "color-harmony",
            Strategy::StyleBased => "style-based",
            Strategy::CreativeRandom => "creative-random",
        }
    }

    /// Human-readable title shown alongside a recommendation
    pub fn title(&self) -> &'static str {
        match self {
            Strategy::WeatherFocused => "Weather-Ready Look",
            Strategy::ColorHarmony => "Color-Coordinated Look",
            Strategy::StyleBased => "Signature Style",
            Strategy::CreativeRandom => "Creative Mix",
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One entry of the strategy history, written after every `recommend` call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StrategyRecord {
    pub strategy: Strategy,
    pub timestamp: DateTime<Utc>,
    pub item_count: usize,
}

impl StrategyRecord {
    pub fn new(strategy: Strategy, item_count: usize) -> Self {
        Self {
            strategy,
            timestamp: Utc::now(),
            item_count,
        }
    }
}

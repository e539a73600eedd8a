use serde::{Deserialize, Serialize};

/// Weather at the time of the recommendation request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherContext {
    /// Air temperature in degrees Celsius
    pub temperature: f64,
    /// Free-text descriptor such as "rainy" or "partly cloudy"
    #[serde(default)]
    pub condition: String,
}

impl WeatherContext {
    pub fn new(temperature: f64, condition: impl Into<String>) -> Self {
        Self {
            temperature,
            condition: condition.into(),
        }
    }

    /// Case-insensitive substring match against the condition text
    pub fn condition_mentions(&self, keyword: &str) -> bool {
        self.condition
            .to_lowercase()
            .contains(&keyword.to_lowercase())
    }
}

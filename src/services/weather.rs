use crate::models::{ClothingItem, ClothingType, Season, WeatherContext};

/// Conditions that call for a jacket or coat regardless of temperature
const OUTERWEAR_CONDITIONS: [&str; 3] = ["rain", "snow", "storm"];

/// Below this temperature outerwear is always suggested
const OUTERWEAR_TEMPERATURE: f64 = 15.0;

/// Coarse temperature classification driving seasonal filtering and scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureBand {
    /// Below 10°C
    Cold,
    /// 10°C up to (not including) 20°C
    Mild,
    /// 20°C and above
    Warm,
}

impl TemperatureBand {
    pub fn of(temperature: f64) -> Self {
        if temperature < 10.0 {
            TemperatureBand::Cold
        } else if temperature < 20.0 {
            TemperatureBand::Mild
        } else {
            TemperatureBand::Warm
        }
    }

    /// Seasons whose garments suit this band
    pub fn seasons(&self) -> [Season; 2] {
        match self {
            TemperatureBand::Cold => [Season::Winter, Season::Fall],
            TemperatureBand::Mild => [Season::Fall, Season::Spring],
            TemperatureBand::Warm => [Season::Summer, Season::Spring],
        }
    }

    /// Garment types that earn a bonus in this band
    pub fn favoured_types(&self) -> &'static [ClothingType] {
        match self {
            TemperatureBand::Cold => &[
                ClothingType::Sweater,
                ClothingType::Coat,
                ClothingType::Boots,
                ClothingType::Jeans,
                ClothingType::Pants,
            ],
            TemperatureBand::Mild => &[
                ClothingType::Shirt,
                ClothingType::Blouse,
                ClothingType::Jacket,
                ClothingType::Jeans,
                ClothingType::Pants,
            ],
            TemperatureBand::Warm => &[
                ClothingType::TShirt,
                ClothingType::Shorts,
                ClothingType::Skirt,
                ClothingType::Dress,
            ],
        }
    }
}

/// Whether `item` is wearable in the given weather by season tag alone
pub fn is_suitable(item: &ClothingItem, weather: &WeatherContext) -> bool {
    item.is_all_season() || item.has_any_season(&TemperatureBand::of(weather.temperature).seasons())
}

/// Narrows a wardrobe to weather-appropriate items
///
/// Never returns an empty set for a non-empty input: when nothing matches the
/// temperature band, the whole wardrobe is returned instead.
pub fn filter<'a>(items: &'a [ClothingItem], weather: &WeatherContext) -> Vec<&'a ClothingItem> {
    let suitable: Vec<&ClothingItem> = items.iter().filter(|i| is_suitable(i, weather)).collect();

    if suitable.is_empty() && !items.is_empty() {
        tracing::warn!(
            temperature = weather.temperature,
            wardrobe_size = items.len(),
            "No weather-appropriate items, falling back to full wardrobe"
        );
        return items.iter().collect();
    }

    tracing::debug!(
        temperature = weather.temperature,
        wardrobe_size = items.len(),
        suitable = suitable.len(),
        "Filtered wardrobe by weather"
    );
    suitable
}

pub fn needs_outerwear(weather: &WeatherContext) -> bool {
    weather.temperature < OUTERWEAR_TEMPERATURE
        || OUTERWEAR_CONDITIONS
            .iter()
            .any(|c| weather.condition_mentions(c))
}

/// Rule-based fitness of a garment for the current temperature
///
/// +3 for a season matching the band, +2 for a type favoured by the band,
/// +1 for an all-season tag.
pub fn weather_score(item: &ClothingItem, weather: &WeatherContext) -> f64 {
    let band = TemperatureBand::of(weather.temperature);
    let mut score = 0.0;

    if item.has_any_season(&band.seasons()) {
        score += 3.0;
    }
    if band.favoured_types().contains(&item.item_type) {
        score += 2.0;
    }
    if item.is_all_season() {
        score += 1.0;
    }

    score
}

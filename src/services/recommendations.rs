use rand::Rng;

use crate::models::{ClothingItem, Outfit, Recommendation, Strategy, StrategyRecord, WeatherContext};

use super::assembler::OutfitAssembler;
use super::color_harmony::ColorHarmonyScorer;
use super::history::{StrategyHistory, DEFAULT_CAPACITY};
use super::strategy::{select_strategy, REPEAT_WINDOW};
use super::weather;

/// Rule-based outfit recommendation engine
///
/// Owns the strategy history shared by every call made through this instance.
/// Randomness is supplied by the caller on each call so results can be
/// reproduced with a seeded generator.
#[derive(Debug)]
pub struct RecommendationEngine {
    assembler: OutfitAssembler,
    history: StrategyHistory,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl RecommendationEngine {
    pub fn new(history_capacity: usize) -> Self {
        Self::with_parts(OutfitAssembler::default(), StrategyHistory::new(history_capacity))
    }

    pub fn with_parts(assembler: OutfitAssembler, history: StrategyHistory) -> Self {
        Self { assembler, history }
    }

    pub fn with_scorer(scorer: ColorHarmonyScorer) -> Self {
        Self::with_parts(OutfitAssembler::new(scorer), StrategyHistory::default())
    }

    pub fn history(&self) -> &StrategyHistory {
        &self.history
    }

    /// Recommends one outfit for the given weather
    ///
    /// Picks a strategy not used in the last three calls, assembles the outfit
    /// and records the choice. The history lock is held across the whole
    /// sequence.
    pub fn recommend<'a, R: Rng + ?Sized>(
        &self,
        items: &'a [ClothingItem],
        weather: &WeatherContext,
        rng: &mut R,
    ) -> Outfit<'a> {
        if items.is_empty() {
            tracing::info!("Empty wardrobe, nothing to recommend");
            return Outfit::default();
        }

        let candidates = weather::filter(items, weather);

        self.history.update(|log| {
            let recent: Vec<StrategyRecord> = log.recent(REPEAT_WINDOW);
            let strategy = select_strategy(&recent, rng);

            let outfit = match self.assembler.assemble(&candidates, weather, strategy, rng) {
                Ok(outfit) => outfit,
                Err(e) => {
                    tracing::error!(error = %e, %strategy, "Outfit assembly failed");
                    Outfit::default()
                }
            };

            log.record(strategy, outfit.len());
            tracing::info!(
                %strategy,
                temperature = weather.temperature,
                condition = %weather.condition,
                wardrobe_size = items.len(),
                candidates = candidates.len(),
                item_count = outfit.len(),
                "Outfit recommended"
            );
            outfit
        })
    }

    /// Runs every strategy independently and returns one outfit per strategy
    ///
    /// Does not consult or update the strategy history. A strategy whose
    /// assembly faults is logged and left out of the result.
    pub fn recommend_multiple<'a, R: Rng + ?Sized>(
        &self,
        items: &'a [ClothingItem],
        weather: &WeatherContext,
        rng: &mut R,
    ) -> Vec<Recommendation<'a>> {
        let candidates = weather::filter(items, weather);
        let mut recommendations = Vec::with_capacity(Strategy::ALL.len());

        for strategy in Strategy::ALL {
            match self.assembler.assemble(&candidates, weather, strategy, rng) {
                Ok(outfit) => recommendations.push(Recommendation {
                    title: strategy.title().to_string(),
                    description: describe(strategy, weather),
                    strategy,
                    items: outfit,
                }),
                Err(e) => {
                    tracing::error!(error = %e, %strategy, "Skipping strategy after assembly fault");
                }
            }
        }

        tracing::info!(
            temperature = weather.temperature,
            wardrobe_size = items.len(),
            outfits = recommendations.len(),
            "Multiple outfits recommended"
        );
        recommendations
    }
}

fn describe(strategy: Strategy, weather: &WeatherContext) -> String {
    let conditions = if weather.condition.trim().is_empty() {
        format!("{:.0}°C", weather.temperature)
    } else {
        format!("{:.0}°C and {}", weather.temperature, weather.condition.trim())
    };

    match strategy {
        Strategy::WeatherFocused => format!("Pieces picked to suit {}.", conditions),
        Strategy::ColorHarmony => format!("A color-coordinated outfit for {}.", conditions),
        Strategy::StyleBased => format!("A single-style outfit for {}.", conditions),
        Strategy::CreativeRandom => format!("Something different to try in {}.", conditions),
    }
}

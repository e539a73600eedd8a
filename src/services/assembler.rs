use rand::Rng;
use thiserror::Error;

use crate::models::{ClothingItem, ClothingType, ItemId, Outfit, Strategy, WeatherContext};

use super::classifier::{classify, Category, CategoryPools, Slot};
use super::color_harmony::{has_neutral_color, ColorHarmonyScorer, NEUTRAL_DEFAULT_SCORE};
use super::selector::{pick_random, select, Scored, SelectionMode};
use super::strategy::Style;
use super::weather::{needs_outerwear, weather_score};

/// Faults raised while assembling a single outfit
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Item {0} was selected twice")]
    DuplicateItem(ItemId),
    #[error("Item {item_id} ({category:?}) cannot fill the {slot:?} slot")]
    SlotMismatch {
        item_id: ItemId,
        category: Category,
        slot: Slot,
    },
}

/// Below this temperature a hat or scarf is added on top of the first accessory
const COLD_ACCESSORY_TEMPERATURE: f64 = 10.0;

/// Strategy resolved for one call, carrying any per-call draw (the style)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotPolicy {
    WeatherFocused,
    ColorHarmony,
    StyleBased(Style),
    CreativeRandom,
}

impl SlotPolicy {
    pub fn for_strategy<R: Rng + ?Sized>(strategy: Strategy, rng: &mut R) -> Self {
        match strategy {
            Strategy::WeatherFocused => SlotPolicy::WeatherFocused,
            Strategy::ColorHarmony => SlotPolicy::ColorHarmony,
            Strategy::StyleBased => SlotPolicy::StyleBased(Style::random(rng)),
            Strategy::CreativeRandom => SlotPolicy::CreativeRandom,
        }
    }

    /// Strategy-specific pick for a slot with no color reference
    ///
    /// Color harmony has nothing to match against here, so it takes a diverse
    /// pick over weather scores.
    pub fn pick<'a, R: Rng + ?Sized>(
        &self,
        pool: &[&'a ClothingItem],
        weather: &WeatherContext,
        rng: &mut R,
    ) -> Option<&'a ClothingItem> {
        let by_weather = |items: &[&'a ClothingItem]| -> Vec<Scored<'a>> {
            items
                .iter()
                .map(|&i| Scored::new(i, weather_score(i, weather)))
                .collect()
        };

        match self {
            SlotPolicy::WeatherFocused => select(&by_weather(pool), SelectionMode::Best, rng),
            SlotPolicy::StyleBased(style) => {
                let restricted = style.restrict(pool);
                select(&by_weather(&restricted), SelectionMode::Best, rng)
            }
            SlotPolicy::ColorHarmony => select(&by_weather(pool), SelectionMode::Diverse, rng),
            SlotPolicy::CreativeRandom => pick_random(pool, rng),
        }
    }
}

/// Accumulates outfit items, enforcing slot and uniqueness invariants
#[derive(Debug, Default)]
struct OutfitBuilder<'a> {
    items: Vec<&'a ClothingItem>,
}

impl<'a> OutfitBuilder<'a> {
    fn place(&mut self, item: &'a ClothingItem, slot: Slot) -> Result<(), EngineError> {
        let category = classify(item);
        if !slot.accepts(category) {
            return Err(EngineError::SlotMismatch {
                item_id: item.id.clone(),
                category,
                slot,
            });
        }
        if self.contains(item) {
            return Err(EngineError::DuplicateItem(item.id.clone()));
        }
        tracing::debug!(item_id = %item.id, name = %item.name, ?slot, "Placed item");
        self.items.push(item);
        Ok(())
    }

    fn contains(&self, item: &ClothingItem) -> bool {
        self.items.iter().any(|i| i.id == item.id)
    }

    /// Pool entries not yet in the outfit, optionally restricted to `types`
    fn unselected(
        &self,
        pool: &[&'a ClothingItem],
        types: Option<&[ClothingType]>,
    ) -> Vec<&'a ClothingItem> {
        pool.iter()
            .copied()
            .filter(|i| !self.contains(i))
            .filter(|i| types.map_or(true, |t| t.contains(&i.item_type)))
            .collect()
    }

    fn finish(self) -> Outfit<'a> {
        Outfit::from_items(self.items)
    }
}

/// Builds a complete outfit from weather-filtered candidates
#[derive(Debug, Clone)]
pub struct OutfitAssembler {
    scorer: ColorHarmonyScorer,
    /// Chance that creative-random wears a dress even when tops and bottoms exist
    dress_probability: f64,
    /// Chance that creative-random adds one more accessory
    extra_accessory_probability: f64,
}

impl Default for OutfitAssembler {
    fn default() -> Self {
        Self::new(ColorHarmonyScorer::default())
    }
}

impl OutfitAssembler {
    pub fn new(scorer: ColorHarmonyScorer) -> Self {
        Self {
            scorer,
            dress_probability: 0.4,
            extra_accessory_probability: 0.6,
        }
    }

    /// Fills the main, footwear, outerwear and accessory slots in order
    ///
    /// Slots with no candidates are left out; an empty candidate list gives an
    /// empty outfit.
    pub fn assemble<'a, R: Rng + ?Sized>(
        &self,
        candidates: &[&'a ClothingItem],
        weather: &WeatherContext,
        strategy: Strategy,
        rng: &mut R,
    ) -> Result<Outfit<'a>, EngineError> {
        let policy = SlotPolicy::for_strategy(strategy, rng);
        self.assemble_with_policy(candidates, weather, policy, rng)
    }

    /// Assembly with the per-call draws already made
    pub(crate) fn assemble_with_policy<'a, R: Rng + ?Sized>(
        &self,
        candidates: &[&'a ClothingItem],
        weather: &WeatherContext,
        policy: SlotPolicy,
        rng: &mut R,
    ) -> Result<Outfit<'a>, EngineError> {
        let pools = CategoryPools::from_items(candidates);
        let mut outfit = OutfitBuilder::default();

        tracing::debug!(
            ?policy,
            tops = pools.tops.len(),
            bottoms = pools.bottoms.len(),
            dresses = pools.dresses.len(),
            footwear = pools.footwear.len(),
            outerwear = pools.outerwear.len(),
            accessories = pools.accessories.len(),
            "Assembling outfit"
        );

        self.select_main(&pools, &policy, weather, &mut outfit, rng)?;
        self.select_footwear(&pools, &policy, weather, &mut outfit, rng)?;
        self.select_outerwear(&pools, &policy, weather, &mut outfit, rng)?;
        self.select_accessories(&pools, &policy, weather, &mut outfit, rng)?;

        Ok(outfit.finish())
    }

    fn select_main<'a, R: Rng + ?Sized>(
        &self,
        pools: &CategoryPools<'a>,
        policy: &SlotPolicy,
        weather: &WeatherContext,
        outfit: &mut OutfitBuilder<'a>,
        rng: &mut R,
    ) -> Result<(), EngineError> {
        let wear_dress = !pools.dresses.is_empty()
            && (pools.tops.is_empty()
                || pools.bottoms.is_empty()
                || (*policy == SlotPolicy::CreativeRandom && rng.gen_bool(self.dress_probability)));

        if wear_dress {
            if let Some(dress) = policy.pick(&pools.dresses, weather, rng) {
                outfit.place(dress, Slot::Main)?;
            }
            return Ok(());
        }

        let top = policy.pick(&pools.tops, weather, rng);
        if let Some(top) = top {
            outfit.place(top, Slot::Main)?;
        }

        let bottom = match (policy, top) {
            (SlotPolicy::ColorHarmony, Some(top)) => {
                self.pick_matching(&pools.bottoms, &[top], SelectionMode::Best, rng)
            }
            _ => policy.pick(&pools.bottoms, weather, rng),
        };
        if let Some(bottom) = bottom {
            outfit.place(bottom, Slot::Main)?;
        }

        Ok(())
    }

    fn select_footwear<'a, R: Rng + ?Sized>(
        &self,
        pools: &CategoryPools<'a>,
        policy: &SlotPolicy,
        weather: &WeatherContext,
        outfit: &mut OutfitBuilder<'a>,
        rng: &mut R,
    ) -> Result<(), EngineError> {
        if pools.footwear.is_empty() {
            return Ok(());
        }

        let shoes = match (policy, outfit.items.first()) {
            (SlotPolicy::ColorHarmony, Some(first)) => {
                let reference = [*first];
                self.pick_matching(&pools.footwear, &reference, SelectionMode::Best, rng)
            }
            _ => policy.pick(&pools.footwear, weather, rng),
        };
        if let Some(shoes) = shoes {
            outfit.place(shoes, Slot::Footwear)?;
        }
        Ok(())
    }

    fn select_outerwear<'a, R: Rng + ?Sized>(
        &self,
        pools: &CategoryPools<'a>,
        policy: &SlotPolicy,
        weather: &WeatherContext,
        outfit: &mut OutfitBuilder<'a>,
        rng: &mut R,
    ) -> Result<(), EngineError> {
        if pools.outerwear.is_empty() || !needs_outerwear(weather) {
            return Ok(());
        }

        let layer = if *policy == SlotPolicy::ColorHarmony {
            let neutral: Vec<&ClothingItem> = pools
                .outerwear
                .iter()
                .copied()
                .filter(|i| has_neutral_color(&i.colors))
                .collect();

            if !neutral.is_empty() {
                self.pick_matching(&neutral, &outfit.items, SelectionMode::Best, rng)
            } else if !outfit.items.is_empty() {
                self.pick_matching(&pools.outerwear, &outfit.items, SelectionMode::Diverse, rng)
            } else {
                policy.pick(&pools.outerwear, weather, rng)
            }
        } else {
            policy.pick(&pools.outerwear, weather, rng)
        };

        if let Some(layer) = layer {
            outfit.place(layer, Slot::Outerwear)?;
        }
        Ok(())
    }

    fn select_accessories<'a, R: Rng + ?Sized>(
        &self,
        pools: &CategoryPools<'a>,
        policy: &SlotPolicy,
        weather: &WeatherContext,
        outfit: &mut OutfitBuilder<'a>,
        rng: &mut R,
    ) -> Result<(), EngineError> {
        // At least one accessory whenever any exist
        let Some(first) = pick_random(&pools.accessories, rng) else {
            return Ok(());
        };
        outfit.place(first, Slot::Accessory)?;

        if weather.temperature < COLD_ACCESSORY_TEMPERATURE {
            let warm = outfit.unselected(
                &pools.accessories,
                Some([ClothingType::Hat, ClothingType::Scarf].as_slice()),
            );
            if let Some(extra) = pick_random(&warm, rng) {
                outfit.place(extra, Slot::Accessory)?;
            }
        }

        if weather.condition_mentions("rain") {
            let hats = outfit.unselected(&pools.accessories, Some([ClothingType::Hat].as_slice()));
            if let Some(hat) = pick_random(&hats, rng) {
                outfit.place(hat, Slot::Accessory)?;
            }
        }

        if *policy == SlotPolicy::CreativeRandom
            && pools.accessories.len() > 1
            && rng.gen_bool(self.extra_accessory_probability)
        {
            let remaining = outfit.unselected(&pools.accessories, None);
            if let Some(extra) = pick_random(&remaining, rng) {
                outfit.place(extra, Slot::Accessory)?;
            }
        }

        Ok(())
    }

    /// Best color match for `reference`, averaged over its pieces
    fn pick_matching<'a, R: Rng + ?Sized>(
        &self,
        pool: &[&'a ClothingItem],
        reference: &[&ClothingItem],
        mode: SelectionMode,
        rng: &mut R,
    ) -> Option<&'a ClothingItem> {
        let scored: Vec<Scored<'a>> = pool
            .iter()
            .map(|&candidate| {
                let score = if reference.is_empty() {
                    NEUTRAL_DEFAULT_SCORE
                } else {
                    let total: f64 = reference
                        .iter()
                        .map(|r| self.scorer.score(&r.colors, &candidate.colors, rng))
                        .sum();
                    total / reference.len() as f64
                };
                Scored::new(candidate, score)
            })
            .collect();

        select(&scored, mode, rng)
    }
}

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{ClothingItem, ClothingType, Strategy, StrategyRecord};

/// How many of the most recent history entries are excluded from selection
pub const REPEAT_WINDOW: usize = 3;

/// Chooses the next strategy, avoiding any used in the last [`REPEAT_WINDOW`] calls
///
/// `recent` is the tail of the strategy history, oldest first. If every
/// strategy was used recently the full set is eligible again.
pub fn select_strategy<R: Rng + ?Sized>(recent: &[StrategyRecord], rng: &mut R) -> Strategy {
    let window = &recent[recent.len().saturating_sub(REPEAT_WINDOW)..];

    let mut candidates: Vec<Strategy> = Strategy::ALL
        .into_iter()
        .filter(|s| !window.iter().any(|r| r.strategy == *s))
        .collect();
    if candidates.is_empty() {
        candidates = Strategy::ALL.to_vec();
    }

    // candidates is never empty here
    *candidates
        .choose(rng)
        .unwrap_or(&Strategy::WeatherFocused)
}

/// Dress style drawn once per call by the style-based strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Casual,
    Formal,
    Sporty,
}

impl Style {
    pub const ALL: [Style; 3] = [Style::Casual, Style::Formal, Style::Sporty];

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        *Self::ALL.choose(rng).unwrap_or(&Style::Casual)
    }

    pub fn allowed_types(&self) -> &'static [ClothingType] {
        match self {
            Style::Casual => &[
                ClothingType::TShirt,
                ClothingType::Sweater,
                ClothingType::Jeans,
                ClothingType::Shorts,
                ClothingType::Skirt,
                ClothingType::Dress,
                ClothingType::Shoes,
                ClothingType::Jacket,
            ],
            Style::Formal => &[
                ClothingType::Shirt,
                ClothingType::Blouse,
                ClothingType::Pants,
                ClothingType::Skirt,
                ClothingType::Dress,
                ClothingType::Shoes,
                ClothingType::Boots,
                ClothingType::Coat,
            ],
            Style::Sporty => &[
                ClothingType::TShirt,
                ClothingType::Shorts,
                ClothingType::Pants,
                ClothingType::Shoes,
                ClothingType::Jacket,
            ],
        }
    }

    /// Candidates whose type fits the style, or all of them if none do
    pub fn restrict<'a>(&self, items: &[&'a ClothingItem]) -> Vec<&'a ClothingItem> {
        let allowed = self.allowed_types();
        let matching: Vec<&ClothingItem> = items
            .iter()
            .copied()
            .filter(|i| allowed.contains(&i.item_type))
            .collect();
        if matching.is_empty() {
            items.to_vec()
        } else {
            matching
        }
    }
}

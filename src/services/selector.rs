use std::cmp::Ordering;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::ClothingItem;

/// Size of the shortlist drawn from in [`SelectionMode::Diverse`]
pub const DIVERSE_POOL_SIZE: usize = 5;

/// Scores closer than this are treated as tied
const SCORE_EPSILON: f64 = 1e-9;

/// A candidate item paired with its score for the current slot
#[derive(Debug, Clone, Copy)]
pub struct Scored<'a> {
    pub item: &'a ClothingItem,
    pub score: f64,
}

impl<'a> Scored<'a> {
    pub fn new(item: &'a ClothingItem, score: f64) -> Self {
        Self { item, score }
    }
}

/// Tie-break policy applied over scored candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// Uniform choice among all candidates sharing the maximum score
    Best,
    /// Uniform choice among the top five by score
    Diverse,
    /// Uniform choice over the whole pool, scores ignored
    Random,
}

/// Picks one item from `candidates` according to `mode`
///
/// Returns `None` only when `candidates` is empty. Ties are never resolved by
/// list position.
pub fn select<'a, R: Rng + ?Sized>(
    candidates: &[Scored<'a>],
    mode: SelectionMode,
    rng: &mut R,
) -> Option<&'a ClothingItem> {
    match mode {
        SelectionMode::Best => {
            let max = candidates
                .iter()
                .map(|c| c.score)
                .fold(f64::NEG_INFINITY, f64::max);
            let ties: Vec<&Scored<'a>> = candidates
                .iter()
                .filter(|c| (c.score - max).abs() <= SCORE_EPSILON)
                .collect();
            ties.choose(rng).map(|c| c.item)
        }
        SelectionMode::Diverse => {
            let mut ranked: Vec<&Scored<'a>> = candidates.iter().collect();
            // shuffled first so the stable sort leaves ties at the cutoff in random order
            ranked.shuffle(rng);
            ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
            ranked.truncate(DIVERSE_POOL_SIZE);
            ranked.choose(rng).map(|c| c.item)
        }
        SelectionMode::Random => candidates.choose(rng).map(|c| c.item),
    }
}

/// Uniform pick from unscored items
pub fn pick_random<'a, R: Rng + ?Sized>(
    items: &[&'a ClothingItem],
    rng: &mut R,
) -> Option<&'a ClothingItem> {
    items.choose(rng).copied()
}

use thiserror::Error;

mod clothing;
mod outfit;
mod strategy;
mod weather;

pub use clothing::{ClothingItem, ClothingType, ItemId, Occasion, Season, MAX_COLORS};
pub use outfit::{Outfit, Recommendation};
pub use strategy::{Strategy, StrategyRecord};
pub use weather::WeatherContext;

/// Validation errors raised while constructing model values
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Invalid colors: {0}")]
    InvalidColors(String),
}

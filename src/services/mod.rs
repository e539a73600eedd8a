pub mod assembler;
pub mod catalog;
pub mod classifier;
pub mod color_harmony;
pub mod history;
pub mod recommendations;
pub mod selector;
pub mod strategy;
pub mod weather;

pub use assembler::{EngineError, OutfitAssembler};
pub use catalog::{JsonCatalog, WardrobeSource};
pub use color_harmony::ColorHarmonyScorer;
pub use history::StrategyHistory;
pub use recommendations::RecommendationEngine;

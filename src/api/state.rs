use std::sync::Arc;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tokio::sync::Mutex;

use crate::services::{JsonCatalog, RecommendationEngine, WardrobeSource};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// One engine, and so one strategy history, per server process
    pub engine: Arc<RecommendationEngine>,
    pub wardrobes: Arc<dyn WardrobeSource>,
    pub rng: Arc<Mutex<ChaCha8Rng>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            RecommendationEngine::default(),
            Arc::new(JsonCatalog::default()),
            None,
        )
    }
}

impl AppState {
    /// Creates the state; `seed` fixes the random source for reproducible responses
    pub fn new(
        engine: RecommendationEngine,
        wardrobes: Arc<dyn WardrobeSource>,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        Self {
            engine: Arc::new(engine),
            wardrobes,
            rng: Arc::new(Mutex::new(rng)),
        }
    }
}

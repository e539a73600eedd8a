use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Demo wardrobe catalog (JSON array of clothing items)
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,

    /// Number of strategy records kept for anti-repetition
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,

    /// Seed for the recommendation random source; entropy-seeded when unset
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_catalog_path() -> String {
    "data/clothing_items.json".to_string()
}

fn default_history_capacity() -> usize {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            catalog_path: default_catalog_path(),
            history_capacity: default_history_capacity(),
            rng_seed: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_environment() {
        let config: Config = envy::from_iter(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.history_capacity, 10);
        assert_eq!(config.catalog_path, "data/clothing_items.json");
        assert!(config.rng_seed.is_none());
        assert_eq!(config.bind_address(), "0.0.0.0:5000");
    }

    #[test]
    fn test_overrides() {
        let vars = vec![
            ("PORT".to_string(), "8080".to_string()),
            ("RNG_SEED".to_string(), "42".to_string()),
            ("CATALOG_PATH".to_string(), "/tmp/items.json".to_string()),
        ];
        let config: Config = envy::from_iter(vars).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rng_seed, Some(42));
        assert_eq!(config.catalog_path, "/tmp/items.json");
    }
}

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ModelError;

/// Maximum number of colors a single garment may carry
pub const MAX_COLORS: usize = 3;

/// Garment type as stored in the wardrobe catalog
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum ClothingType {
    TShirt,
    Shirt,
    Blouse,
    Sweater,
    Jacket,
    Coat,
    Jeans,
    Pants,
    Shorts,
    Skirt,
    Dress,
    Shoes,
    Boots,
    Accessory,
    Hat,
    Scarf,
    Other,
    /// Any type string the catalog uses that this service does not know about
    #[serde(other)]
    Unknown,
}

impl ClothingType {
    /// Every garment type the demo catalog generator produces
    pub const GARMENTS: [ClothingType; 13] = [
        ClothingType::TShirt,
        ClothingType::Shirt,
        ClothingType::Blouse,
        ClothingType::Sweater,
        ClothingType::Jacket,
        ClothingType::Coat,
        ClothingType::Jeans,
        ClothingType::Pants,
        ClothingType::Shorts,
        ClothingType::Skirt,
        ClothingType::Dress,
        ClothingType::Shoes,
        ClothingType::Boots,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClothingType::TShirt => "tShirt",
            ClothingType::Shirt => "shirt",
            ClothingType::Blouse => "blouse",
            ClothingType::Sweater => "sweater",
            ClothingType::Jacket => "jacket",
            ClothingType::Coat => "coat",
            ClothingType::Jeans => "jeans",
            ClothingType::Pants => "pants",
            ClothingType::Shorts => "shorts",
            ClothingType::Skirt => "skirt",
            ClothingType::Dress => "dress",
            ClothingType::Shoes => "shoes",
            ClothingType::Boots => "boots",
            ClothingType::Accessory => "accessory",
            ClothingType::Hat => "hat",
            ClothingType::Scarf => "scarf",
            ClothingType::Other => "other",
            ClothingType::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
    /// Wearable year-round
    All,
}

/// Occasion a garment is intended for
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Occasion {
    #[default]
    Casual,
    Formal,
    Sport,
    Special,
    #[serde(other)]
    Other,
}

/// Opaque item identifier
///
/// Any string the caller supplies is kept as-is. Items without one get a
/// random UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single garment in a user's wardrobe
///
/// Items are immutable once constructed. The recommendation engine only ever
/// holds references to them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", try_from = "ClothingItemRecord")]
pub struct ClothingItem {
    pub id: ItemId,
    #[serde(rename = "userId")]
    pub owner_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: ClothingType,
    /// One to three color values, named (`"navy"`) or hex (`"#000080"`)
    pub colors: Vec<String>,
    pub seasons: BTreeSet<Season>,
    pub occasion: Occasion,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Wire shape of a clothing item before validation
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ClothingItemRecord {
    #[serde(default)]
    id: ItemId,
    #[serde(rename = "userId", alias = "ownerId", default)]
    owner_id: String,
    #[serde(default)]
    name: String,
    #[serde(rename = "type")]
    item_type: ClothingType,
    colors: Vec<String>,
    #[serde(default)]
    seasons: BTreeSet<Season>,
    #[serde(default)]
    occasion: Occasion,
    #[serde(default)]
    brand: Option<String>,
    #[serde(default)]
    image_url: Option<String>,
}

impl TryFrom<ClothingItemRecord> for ClothingItem {
    type Error = ModelError;

    fn try_from(record: ClothingItemRecord) -> Result<Self, Self::Error> {
        let mut item = ClothingItem::new(
            record.owner_id,
            record.name,
            record.item_type,
            record.colors,
            record.seasons,
        )?;
        item.id = record.id;
        item.occasion = record.occasion;
        item.brand = record.brand;
        item.image_url = record.image_url;
        Ok(item)
    }
}

impl ClothingItem {
    /// Creates a new clothing item with a fresh id
    ///
    /// Fails if `colors` is empty, holds more than three entries, or contains a
    /// blank value.
    pub fn new(
        owner_id: impl Into<String>,
        name: impl Into<String>,
        item_type: ClothingType,
        colors: Vec<String>,
        seasons: impl IntoIterator<Item = Season>,
    ) -> Result<Self, ModelError> {
        if colors.is_empty() || colors.len() > MAX_COLORS {
            return Err(ModelError::InvalidColors(format!(
                "expected 1 to {} colors, got {}",
                MAX_COLORS,
                colors.len()
            )));
        }
        if colors.iter().any(|c| c.trim().is_empty()) {
            return Err(ModelError::InvalidColors(
                "color values must not be blank".to_string(),
            ));
        }

        Ok(Self {
            id: ItemId::new(),
            owner_id: owner_id.into(),
            name: name.into(),
            item_type,
            colors,
            seasons: seasons.into_iter().collect(),
            occasion: Occasion::default(),
            brand: None,
            image_url: None,
        })
    }

    pub fn with_occasion(mut self, occasion: Occasion) -> Self {
        self.occasion = occasion;
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn has_season(&self, season: Season) -> bool {
        self.seasons.contains(&season)
    }

    /// True if the item is tagged with any of the given seasons
    pub fn has_any_season(&self, seasons: &[Season]) -> bool {
        seasons.iter().any(|s| self.seasons.contains(s))
    }

    pub fn is_all_season(&self) -> bool {
        self.has_season(Season::All)
    }
}

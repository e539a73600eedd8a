use serde::Serialize;

use crate::models::{ClothingItem, ClothingType};

/// Semantic role a garment can play in an outfit
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    MainTop,
    MainBottom,
    /// Worn in place of a top and bottom
    Dress,
    Footwear,
    Outerwear,
    Accessory,
    /// Never placed in any slot
    Unclassified,
}

/// Structural position in an assembled outfit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Main,
    Footwear,
    Outerwear,
    Accessory,
}

impl Slot {
    /// Whether an item of `category` may fill this slot
    pub fn accepts(&self, category: Category) -> bool {
        matches!(
            (self, category),
            (Slot::Main, Category::MainTop | Category::MainBottom | Category::Dress)
                | (Slot::Footwear, Category::Footwear)
                | (Slot::Outerwear, Category::Outerwear)
                | (Slot::Accessory, Category::Accessory)
        )
    }
}

/// Single classification table for garment types
pub fn category_of(item_type: ClothingType) -> Category {
    match item_type {
        ClothingType::TShirt | ClothingType::Shirt | ClothingType::Blouse | ClothingType::Sweater => {
            Category::MainTop
        }
        ClothingType::Jeans | ClothingType::Pants | ClothingType::Shorts | ClothingType::Skirt => {
            Category::MainBottom
        }
        ClothingType::Dress => Category::Dress,
        ClothingType::Shoes | ClothingType::Boots => Category::Footwear,
        ClothingType::Jacket | ClothingType::Coat => Category::Outerwear,
        ClothingType::Accessory | ClothingType::Hat | ClothingType::Scarf | ClothingType::Other => {
            Category::Accessory
        }
        ClothingType::Unknown => Category::Unclassified,
    }
}

pub fn classify(item: &ClothingItem) -> Category {
    category_of(item.item_type)
}

/// Wardrobe items partitioned by category
#[derive(Debug, Default, Clone)]
pub struct CategoryPools<'a> {
    pub tops: Vec<&'a ClothingItem>,
    pub bottoms: Vec<&'a ClothingItem>,
    pub dresses: Vec<&'a ClothingItem>,
    pub footwear: Vec<&'a ClothingItem>,
    pub outerwear: Vec<&'a ClothingItem>,
    pub accessories: Vec<&'a ClothingItem>,
}

impl<'a> CategoryPools<'a> {
    /// Partitions `items`, dropping anything unclassified
    pub fn from_items(items: &[&'a ClothingItem]) -> Self {
        let mut pools = Self::default();
        for &item in items {
            match classify(item) {
                Category::MainTop => pools.tops.push(item),
                Category::MainBottom => pools.bottoms.push(item),
                Category::Dress => pools.dresses.push(item),
                Category::Footwear => pools.footwear.push(item),
                Category::Outerwear => pools.outerwear.push(item),
                Category::Accessory => pools.accessories.push(item),
                Category::Unclassified => {
                    tracing::debug!(item_id = %item.id, "Skipping unclassified item");
                }
            }
        }
        pools
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Season;

    fn item(item_type: ClothingType) -> ClothingItem {
        ClothingItem::new("user1", item_type.as_str(), item_type, vec!["black".into()], [Season::All])
            .unwrap()
    }

    #[test]
    fn test_classification_table() {
        assert_eq!(category_of(ClothingType::Sweater), Category::MainTop);
        assert_eq!(category_of(ClothingType::Skirt), Category::MainBottom);
        assert_eq!(category_of(ClothingType::Dress), Category::Dress);
        assert_eq!(category_of(ClothingType::Boots), Category::Footwear);
        assert_eq!(category_of(ClothingType::Coat), Category::Outerwear);
        assert_eq!(category_of(ClothingType::Scarf), Category::Accessory);
        assert_eq!(category_of(ClothingType::Other), Category::Accessory);
        assert_eq!(category_of(ClothingType::Unknown), Category::Unclassified);
    }

    #[test]
    fn test_slot_accepts() {
        assert!(Slot::Main.accepts(Category::Dress));
        assert!(Slot::Main.accepts(Category::MainBottom));
        assert!(!Slot::Main.accepts(Category::Footwear));
        assert!(!Slot::Footwear.accepts(Category::MainTop));
        assert!(!Slot::Accessory.accepts(Category::Unclassified));
    }

    #[test]
    fn test_pools_drop_unclassified() {
        let wardrobe = vec![
            item(ClothingType::Shirt),
            item(ClothingType::Jeans),
            item(ClothingType::Dress),
            item(ClothingType::Shoes),
            item(ClothingType::Jacket),
            item(ClothingType::Hat),
            item(ClothingType::Unknown),
        ];
        let refs: Vec<&ClothingItem> = wardrobe.iter().collect();
        let pools = CategoryPools::from_items(&refs);

        assert_eq!(pools.tops.len(), 1);
        assert_eq!(pools.bottoms.len(), 1);
        assert_eq!(pools.dresses.len(), 1);
        assert_eq!(pools.footwear.len(), 1);
        assert_eq!(pools.outerwear.len(), 1);
        assert_eq!(pools.accessories.len(), 1);
    }
}

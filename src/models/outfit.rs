use serde::Serialize;

use super::{ClothingItem, Strategy};

/// Ordered selection of wardrobe items: main garment(s), shoes, outerwear, accessories
///
/// Holds references into the caller's wardrobe; nothing is copied.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(transparent)]
pub struct Outfit<'a> {
    items: Vec<&'a ClothingItem>,
}

impl<'a> Outfit<'a> {
    pub(crate) fn from_items(items: Vec<&'a ClothingItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[&'a ClothingItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a ClothingItem> + '_ {
        self.items.iter().copied()
    }

    pub fn contains(&self, item: &ClothingItem) -> bool {
        self.items.iter().any(|i| i.id == item.id)
    }

    /// Clones the referenced items, e.g. for an owned response body
    pub fn to_owned_items(&self) -> Vec<ClothingItem> {
        self.items.iter().map(|i| (*i).clone()).collect()
    }
}

impl<'a> IntoIterator for Outfit<'a> {
    type Item = &'a ClothingItem;
    type IntoIter = std::vec::IntoIter<&'a ClothingItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// One outfit produced by a named strategy, as returned by `recommend_multiple`
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation<'a> {
    pub title: String,
    pub description: String,
    pub strategy: Strategy,
    pub items: Outfit<'a>,
}

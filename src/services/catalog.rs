use std::path::Path;

use crate::{error::AppResult, models::ClothingItem};

/// Source of wardrobes for recommendation requests
///
/// The HTTP layer asks a source for an owner's items whenever a request does
/// not carry its own item list.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait WardrobeSource: Send + Sync {
    /// Returns the items belonging to `owner_id`, possibly empty
    ///
    /// An empty `owner_id` means the caller did not name an owner.
    async fn wardrobe_for(&self, owner_id: &str) -> AppResult<Vec<ClothingItem>>;

    /// Source name for logging
    fn name(&self) -> &'static str;
}

/// Demo catalog loaded from a JSON array of clothing items
///
/// Owners without any items fall back to the first owner in the file so the
/// demo always has something to show.
#[derive(Debug, Clone, Default)]
pub struct JsonCatalog {
    items: Vec<ClothingItem>,
}

impl JsonCatalog {
    pub fn new(items: Vec<ClothingItem>) -> Self {
        Self { items }
    }

    /// Reads the catalog file; a missing file yields an empty catalog
    pub async fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = match tokio::fs::read_to_string(path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(
                    path = %path.display(),
                    "Catalog file not found, run generate_catalog to create one"
                );
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        let items: Vec<ClothingItem> = serde_json::from_str(&raw)?;
        tracing::info!(path = %path.display(), items = items.len(), "Catalog loaded");
        Ok(Self::new(items))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn items_of(&self, owner_id: &str) -> Vec<ClothingItem> {
        self.items
            .iter()
            .filter(|i| i.owner_id == owner_id)
            .cloned()
            .collect()
    }
}

#[async_trait::async_trait]
impl WardrobeSource for JsonCatalog {
    async fn wardrobe_for(&self, owner_id: &str) -> AppResult<Vec<ClothingItem>> {
        let owned = self.items_of(owner_id);
        if !owned.is_empty() {
            return Ok(owned);
        }

        let Some(first) = self.items.first() else {
            return Ok(Vec::new());
        };
        tracing::info!(
            requested = owner_id,
            demo_owner = %first.owner_id,
            "No items for owner, using demo owner"
        );
        Ok(self.items_of(&first.owner_id))
    }

    fn name(&self) -> &'static str {
        "json-catalog"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::{ClothingType, Season};

    fn item(owner: &str, item_type: ClothingType) -> ClothingItem {
        ClothingItem::new(owner, item_type.as_str(), item_type, vec!["white".into()], [Season::All])
            .unwrap()
    }

    fn catalog() -> JsonCatalog {
        JsonCatalog::new(vec![
            item("user2", ClothingType::Shirt),
            item("user1", ClothingType::Jeans),
            item("user2", ClothingType::Shoes),
        ])
    }

    #[test]
    fn test_wardrobe_for_known_owner() {
        let items = tokio_test::block_on(catalog().wardrobe_for("user1")).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].item_type, ClothingType::Jeans);
    }

    #[test]
    fn test_unknown_owner_falls_back_to_first_owner() {
        let items = tokio_test::block_on(catalog().wardrobe_for("nobody")).unwrap();
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i.owner_id == "user2"));

        let items = tokio_test::block_on(catalog().wardrobe_for("")).unwrap();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_empty_catalog_yields_empty_wardrobe() {
        let items = tokio_test::block_on(JsonCatalog::default().wardrobe_for("user1")).unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_load_missing_file_is_empty() {
        let path = std::env::temp_dir().join(format!("missing-{}.json", uuid::Uuid::new_v4()));
        let catalog = JsonCatalog::load(&path).await.unwrap();
        assert!(catalog.is_empty());
    }

    #[tokio::test]
    async fn test_load_catalog_file() {
        let path = std::env::temp_dir().join(format!("catalog-{}.json", uuid::Uuid::new_v4()));
        let json = serde_json::to_string(&catalog().items).unwrap();
        tokio::fs::write(&path, json).await.unwrap();

        let loaded = JsonCatalog::load(&path).await.unwrap();
        assert_eq!(loaded.len(), 3);
        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_load_invalid_json() {
        let path = std::env::temp_dir().join(format!("broken-{}.json", uuid::Uuid::new_v4()));
        tokio::fs::write(&path, "[{\"type\": \"shirt\"").await.unwrap();

        let result = JsonCatalog::load(&path).await;
        assert!(matches!(result, Err(AppError::Json(_))));
        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[test]
    fn test_mock_source() {
        let mut source = MockWardrobeSource::new();
        source
            .expect_wardrobe_for()
            .returning(|_| Ok(vec![item("user9", ClothingType::Hat)]));
        source.expect_name().return_const("mock");

        let items = tokio_test::block_on(source.wardrobe_for("user9")).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(source.name(), "mock");
    }
}

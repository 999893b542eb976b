use store::KeyValueStore;

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{Asset, AssetCreate, AssetType, AssetTypes, AssetUpdate};

impl<S: KeyValueStore + Clone> ApiClient<S> {
    /// Selectable asset types. Rarely changes, so it is cached.
    pub async fn asset_types(&self) -> Result<Vec<AssetType>> {
        let types: AssetTypes = self.get_cached("/assets/types", &()).await?;
        Ok(types.types)
    }

    pub async fn create_asset(&self, body: &AssetCreate) -> Result<Asset> {
        self.post("/assets", body).await
    }

    pub async fn list_assets(&self) -> Result<Vec<Asset>> {
        self.get("/assets").await
    }

    pub async fn get_asset(&self, id: &str) -> Result<Asset> {
        self.get(&format!("/assets/{id}")).await
    }

    pub async fn update_asset(&self, id: &str, body: &AssetUpdate) -> Result<Asset> {
        self.put(&format!("/assets/{id}"), body).await
    }

    pub async fn delete_asset(&self, id: &str) -> Result<()> {
        self.delete(&format!("/assets/{id}")).await
    }
}

use crate::shared::api_error::RequestError;
use crate::shared::api_utils::{api_url, item_path};
use crate::shared::entity_editor::CollectionApi;
use crate::shared::http;
use async_trait::async_trait;
use contracts::domain::a001_district::aggregate::{District, DistrictDto};
use contracts::domain::common::{Entity, EntityId};

/// `districts` collection over HTTP
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpDistrictApi;

#[async_trait(?Send)]
impl CollectionApi<District> for HttpDistrictApi {
    async fn list(&self) -> Result<Vec<District>, RequestError> {
        http::get_data(&api_url(&format!("/{}", District::collection_name()))).await
    }

    async fn create(&self, draft: &DistrictDto) -> Result<Vec<District>, RequestError> {
        http::post_json(&api_url(&format!("/{}", District::collection_name())), draft).await
    }

    async fn update(&self, id: &EntityId, draft: &DistrictDto) -> Result<Vec<District>, RequestError> {
        http::put_json(&api_url(&item_path(District::collection_name(), id)), draft).await
    }

    async fn delete(&self, id: &EntityId) -> Result<Vec<District>, RequestError> {
        http::delete_data(&api_url(&item_path(District::collection_name(), id))).await
    }
}

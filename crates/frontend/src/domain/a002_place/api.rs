use crate::shared::api_error::RequestError;
use crate::shared::api_utils::{api_url, item_path, query_path};
use crate::shared::cascade::ChildSource;
use crate::shared::entity_editor::CollectionApi;
use crate::shared::http;
use async_trait::async_trait;
use contracts::domain::a002_place::aggregate::{Place, PlaceDto, PlaceFilter};
use contracts::domain::common::{Entity, EntityId};

/// `places` collection over HTTP
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpPlaceApi;

#[async_trait(?Send)]
impl CollectionApi<Place> for HttpPlaceApi {
    async fn list(&self) -> Result<Vec<Place>, RequestError> {
        http::get_data(&api_url(&format!("/{}", Place::collection_name()))).await
    }

    async fn create(&self, draft: &PlaceDto) -> Result<Vec<Place>, RequestError> {
        http::post_json(&api_url(&format!("/{}", Place::collection_name())), draft).await
    }

    async fn update(&self, id: &EntityId, draft: &PlaceDto) -> Result<Vec<Place>, RequestError> {
        http::put_json(&api_url(&item_path(Place::collection_name(), id)), draft).await
    }

    async fn delete(&self, id: &EntityId) -> Result<Vec<Place>, RequestError> {
        http::delete_data(&api_url(&item_path(Place::collection_name(), id))).await
    }
}

#[async_trait(?Send)]
impl ChildSource<Place> for HttpPlaceApi {
    /// `GET places?district={id}`
    async fn children_of(&self, district: &EntityId) -> Result<Vec<Place>, RequestError> {
        let filter = PlaceFilter {
            district: district.clone(),
        };
        let path = query_path(Place::collection_name(), &filter)?;
        http::get_data(&api_url(&path)).await
    }
}

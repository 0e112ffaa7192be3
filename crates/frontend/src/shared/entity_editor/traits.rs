use crate::shared::api_error::RequestError;
use async_trait::async_trait;
use contracts::domain::common::{Entity, EntityId};

/// Сущность, которую можно редактировать в строке формы
pub trait EditableEntity: Entity + Clone + PartialEq + std::fmt::Debug + Send + Sync + 'static {
    /// Поля формы (тело запроса create/update)
    type Draft: Clone + Default + PartialEq + std::fmt::Debug + Send + Sync + 'static;

    fn to_draft(&self) -> Self::Draft;

    /// Заполнены ли обязательные поля для создания
    fn is_submittable(draft: &Self::Draft) -> bool;
}

/// Серверная коллекция: каждая мутация возвращает полный свежий снимок
#[async_trait(?Send)]
pub trait CollectionApi<E: EditableEntity> {
    async fn list(&self) -> Result<Vec<E>, RequestError>;
    async fn create(&self, draft: &E::Draft) -> Result<Vec<E>, RequestError>;
    async fn update(&self, id: &EntityId, draft: &E::Draft) -> Result<Vec<E>, RequestError>;
    async fn delete(&self, id: &EntityId) -> Result<Vec<E>, RequestError>;
}

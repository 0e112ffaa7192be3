use crate::domain::common::{Entity, EntityId};
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Населённый пункт внутри района.
///
/// Ссылочную целостность `district_id` клиент не проверяет: это делает сервер.
/// Отфильтрованный по району список может не содержать `district_id` вовсе.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    pub id: EntityId,

    #[serde(alias = "name")]
    pub place_name: String,

    #[serde(default)]
    pub district_id: Option<EntityId>,

    /// Человекочитаемое имя района (только в общем списке)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district_name: Option<String>,
}

impl Place {
    /// Подпись района для таблицы: имя, если сервер его прислал, иначе id
    pub fn district_label(&self) -> String {
        match (&self.district_name, &self.district_id) {
            (Some(name), _) => name.clone(),
            (None, Some(id)) => id.as_string(),
            (None, None) => "-".to_string(),
        }
    }
}

impl Entity for Place {
    fn id(&self) -> &EntityId {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.place_name
    }

    fn collection_name() -> &'static str {
        "places"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Тело запроса создания/обновления населённого пункта
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PlaceDto {
    pub place_name: String,
    pub district_id: Option<EntityId>,
}

impl From<&Place> for PlaceDto {
    fn from(p: &Place) -> Self {
        Self {
            place_name: p.place_name.clone(),
            district_id: p.district_id.clone(),
        }
    }
}

/// Query-параметры `GET places?district={id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceFilter {
    pub district: EntityId,
}

use crate::domain::common::{Entity, EntityId};
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Район. Идентификатор назначается сервером при создании и не меняется.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct District {
    pub id: EntityId,

    #[serde(alias = "name")]
    pub district_name: String,
}

impl Entity for District {
    fn id(&self) -> &EntityId {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.district_name
    }

    fn collection_name() -> &'static str {
        "districts"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Тело запроса создания/обновления района
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DistrictDto {
    pub name: String,
}

impl From<&District> for DistrictDto {
    fn from(d: &District) -> Self {
        Self {
            name: d.district_name.clone(),
        }
    }
}

pub mod api;
pub mod ui;

use crate::shared::entity_editor::EditableEntity;
use contracts::domain::a001_district::aggregate::{District, DistrictDto};

impl EditableEntity for District {
    type Draft = DistrictDto;

    fn to_draft(&self) -> DistrictDto {
        DistrictDto::from(self)
    }

    fn is_submittable(draft: &DistrictDto) -> bool {
        !draft.name.trim().is_empty()
    }
}

pub mod api;
pub mod ui;

use crate::shared::entity_editor::EditableEntity;
use contracts::domain::a002_place::aggregate::{Place, PlaceDto};

impl EditableEntity for Place {
    type Draft = PlaceDto;

    fn to_draft(&self) -> PlaceDto {
        PlaceDto::from(self)
    }

    /// District is optional: the server decides what to do without one
    fn is_submittable(draft: &PlaceDto) -> bool {
        !draft.place_name.trim().is_empty()
    }
}

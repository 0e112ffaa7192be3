use crate::domain::common::EntityId;
use serde::{Deserialize, Serialize};

/// Имена частей multipart-запроса `POST register`
pub mod fields {
    pub const FULL_NAME: &str = "full_name";
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
    pub const PHOTO: &str = "photo";
    pub const PLACE_ID: &str = "place_id";
}

/// Скалярная часть заявки на регистрацию гостя.
///
/// Фото передаётся отдельной файловой частью. Район на сервер не уходит:
/// он однозначно определяется выбранным населённым пунктом.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RegistrationRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub place_id: Option<EntityId>,
}

impl RegistrationRequest {
    /// Текстовые части в порядке отправки; невыбранный пункт уходит пустой строкой
    pub fn text_parts(&self) -> Vec<(&'static str, String)> {
        vec![
            (fields::FULL_NAME, self.full_name.clone()),
            (fields::EMAIL, self.email.clone()),
            (fields::PASSWORD, self.password.clone()),
            (
                fields::PLACE_ID,
                self.place_id
                    .as_ref()
                    .map(EntityId::as_string)
                    .unwrap_or_default(),
            ),
        ]
    }
}

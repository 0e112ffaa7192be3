use serde::{Deserialize, Serialize};

/// Обёртка ответа API: полезная нагрузка всегда лежит в поле `data`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: T,
}

impl<T> ApiEnvelope<T> {
    pub fn into_data(self) -> T {
        self.data
    }
}

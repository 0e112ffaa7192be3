use super::EntityId;

/// Базовый трейт для сущностей, которые сервер отдаёт коллекциями
pub trait Entity {
    fn id(&self) -> &EntityId;
    fn display_name(&self) -> &str;

    /// Имя коллекции в API (`districts`, `places`)
    fn collection_name() -> &'static str;
}

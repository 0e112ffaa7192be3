//! Entity List Editor
//!
//! Список сущностей одного типа с одной строкой формы (создание или
//! редактирование) над таблицей. Сервер остаётся единственным источником
//! истины: после каждой успешной мутации локальная коллекция целиком
//! заменяется снимком из ответа.
//!
//! - `session.rs`: сессия редактирования и её чистые переходы
//! - `collection.rs`: локальный кэш коллекции
//! - `traits.rs`: швы для сущности и API
//! - `controller.rs`: асинхронный контроллер поверх сигналов Leptos

pub mod collection;
pub mod controller;
pub mod session;
pub mod traits;

pub use collection::EntityCache;
pub use controller::{EditorState, ListEditor};
pub use session::{EditSession, SaveTarget, SessionEvent};
pub use traits::{CollectionApi, EditableEntity};

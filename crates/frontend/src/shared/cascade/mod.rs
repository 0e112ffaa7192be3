//! Cascading Selector
//!
//! Дочерний список (населённые пункты), набор и значение которого выводятся
//! из родительского выбора (район).

pub mod controller;
pub mod state;

pub use controller::{CascadingSelector, ChildSource};
pub use state::CascadeState;

pub mod api_error;
pub mod api_utils;
pub mod cascade;
pub mod config;
pub mod entity_editor;
pub mod http;
pub mod icons;
pub mod lifecycle;
pub mod reporting;

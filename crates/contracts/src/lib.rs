//! Wire contracts shared between the admin/guest frontend and the registry API.

pub mod domain;
pub mod shared;
pub mod usecases;

//! Users module - demo sign-in session and user models.

mod users_model;
mod users_service;
mod users_traits;

pub use users_model::{name_from_email, NewUser, User, UserRole};
pub use users_service::AuthService;
pub use users_traits::AuthServiceTrait;

use crate::errors::Result;
use crate::users::users_model::{NewUser, User};

/// Trait for the in-memory sign-in session
pub trait AuthServiceTrait: Send + Sync {
    fn login(&self, email: &str, password: &str) -> Result<User>;
    fn register(&self, new_user: NewUser) -> Result<User>;
    fn logout(&self) -> Result<()>;
    fn current_user(&self) -> Result<Option<User>>;
    /// Returns the signed-in user or `Error::Unauthorized`.
    fn require_user(&self) -> Result<User>;
}

use log::{info, warn};
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use super::users_model::{name_from_email, NewUser, User, UserRole};
use super::users_traits::AuthServiceTrait;
use crate::constants::DEMO_USER_ID;
use crate::errors::{lock_poisoned, require_non_blank, Error, Result};
use crate::events::{DomainEvent, DomainEventSink};

/// Demo sign-in service.
///
/// Credentials are only checked for presence; nothing is stored or verified.
/// The signed-in user lives in memory for the lifetime of the service.
pub struct AuthService {
    current: RwLock<Option<User>>,
    last_role: RwLock<Option<UserRole>>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl AuthService {
    pub fn new(event_sink: Arc<dyn DomainEventSink>) -> Self {
        Self {
            current: RwLock::new(None),
            last_role: RwLock::new(None),
            event_sink,
        }
    }

    fn set_current(&self, user: Option<User>) -> Result<()> {
        let user_id = user.as_ref().map(|u| u.id.clone());
        *self.current.write().map_err(lock_poisoned)? = user;
        self.event_sink.emit(DomainEvent::session_changed(user_id));
        Ok(())
    }
}

impl AuthServiceTrait for AuthService {
    fn login(&self, email: &str, password: &str) -> Result<User> {
        require_non_blank("email", email)?;
        require_non_blank("password", password)?;

        let role = self
            .last_role
            .read()
            .map_err(lock_poisoned)?
            .unwrap_or(UserRole::Buyer);
        let user = User {
            id: DEMO_USER_ID.to_string(),
            name: name_from_email(email),
            email: email.trim().to_string(),
            role,
            avatar: None,
        };

        self.set_current(Some(user.clone()))?;
        info!("User {} signed in as {}", user.email, role.as_str());
        Ok(user)
    }

    fn register(&self, new_user: NewUser) -> Result<User> {
        require_non_blank("name", &new_user.name)?;
        require_non_blank("email", &new_user.email)?;
        require_non_blank("password", &new_user.password)?;

        let user = User {
            id: Uuid::new_v4().to_string(),
            name: new_user.name.trim().to_string(),
            email: new_user.email.trim().to_string(),
            role: new_user.role,
            avatar: None,
        };

        *self.last_role.write().map_err(lock_poisoned)? = Some(new_user.role);
        self.set_current(Some(user.clone()))?;
        info!("Registered {} as {}", user.email, user.role.as_str());
        Ok(user)
    }

    fn logout(&self) -> Result<()> {
        if self.current_user()?.is_some() {
            self.set_current(None)?;
            info!("User signed out");
        }
        Ok(())
    }

    fn current_user(&self) -> Result<Option<User>> {
        Ok(self.current.read().map_err(lock_poisoned)?.clone())
    }

    fn require_user(&self) -> Result<User> {
        self.current_user()?.ok_or_else(|| {
            warn!("Rejected operation: no user signed in");
            Error::Unauthorized("you must be signed in".to_string())
        })
    }
}

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use chrono::Utc;

use crate::auth::models::{RegistrationForm, Role, User, UserUpdate};
use crate::auth::validation::{summarize, validate_login, validate_registration};
use crate::errors::AppError;
use crate::storage::SessionStorage;

#[derive(Debug, Clone)]
struct Session {
    token: String,
    user: User,
}

/// Mock auth store. Any pattern-valid credentials succeed; the user record
/// is fabricated, never verified. The current session is held in memory and
/// mirrored to the session file so it survives a restart.
#[derive(Clone)]
pub struct AuthStore {
    inner: Arc<AuthInner>,
}

struct AuthInner {
    storage: SessionStorage,
    current: Mutex<Option<Session>>,
}

impl AuthStore {
    pub fn new(storage: SessionStorage) -> Self {
        Self {
            inner: Arc::new(AuthInner {
                storage,
                current: Mutex::new(None),
            }),
        }
    }

    /// Startup hook: restores the session persisted by a previous run.
    pub fn restore(&self) {
        if let Some((token, user)) = self.inner.storage.load() {
            tracing::info!("Restored session for {}", user.email);
            *self.lock_current() = Some(Session { token, user });
        }
    }

    /// Mock login. Accepts any credentials that pass form validation and
    /// fabricates a recruiter user, as the stub has no failure path.
    pub fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let errors = validate_login(email, password);
        if !errors.is_empty() {
            return Err(AppError::Validation(summarize(&errors)));
        }

        let user = User {
            id: "mock-user-id".to_string(),
            email: email.to_string(),
            full_name: "Demo User".to_string(),
            role: Role::Recruiter,
        };
        self.start_session(user)
    }

    /// Mock registration. The submitted role is taken at face value.
    pub fn register(&self, form: RegistrationForm) -> Result<User, AppError> {
        let errors = validate_registration(&form);
        if !errors.is_empty() {
            return Err(AppError::Validation(summarize(&errors)));
        }

        let user = User {
            id: format!("mock-user-id-{}", Utc::now().timestamp_millis()),
            email: form.email,
            full_name: form.full_name,
            role: form.role,
        };
        self.start_session(user)
    }

    pub fn logout(&self) -> Result<(), AppError> {
        self.inner.storage.clear()?;
        *self.lock_current() = None;
        Ok(())
    }

    /// Merges field updates into the current user and re-persists the
    /// session under the existing token.
    pub fn update_user(&self, updates: UserUpdate) -> Result<User, AppError> {
        let mut guard = self.lock_current();
        let session = guard.as_mut().ok_or(AppError::Unauthorized)?;
        session.user.apply(updates);
        self.inner.storage.save(&session.token, &session.user)?;
        Ok(session.user.clone())
    }

    pub fn current_user(&self) -> Option<User> {
        self.lock_current().as_ref().map(|s| s.user.clone())
    }

    pub fn token(&self) -> Option<String> {
        self.lock_current().as_ref().map(|s| s.token.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.lock_current().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }

    pub fn is_recruiter(&self) -> bool {
        self.has_role(Role::Recruiter)
    }

    pub fn is_applicant(&self) -> bool {
        self.has_role(Role::Applicant)
    }

    fn has_role(&self, role: Role) -> bool {
        self.lock_current()
            .as_ref()
            .map(|s| s.user.role == role)
            .unwrap_or(false)
    }

    fn start_session(&self, user: User) -> Result<User, AppError> {
        let token = format!("mock-jwt-token-{}", Utc::now().timestamp_millis());
        self.inner.storage.save(&token, &user)?;
        *self.lock_current() = Some(Session {
            token,
            user: user.clone(),
        });
        Ok(user)
    }

    fn lock_current(&self) -> std::sync::MutexGuard<'_, Option<Session>> {
        self.inner.current.lock().expect("auth session lock poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, AuthStore) {
        let dir = tempfile::tempdir().unwrap();
        let storage = SessionStorage::new(dir.path().join("session.json"));
        (dir, AuthStore::new(storage))
    }

    fn make_form() -> RegistrationForm {
        RegistrationForm {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@analytical.engine".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
            role: Role::Admin,
        }
    }

    #[test]
    fn test_login_always_succeeds_with_valid_shape() {
        let (_dir, store) = temp_store();
        let user = store.login("anyone@anywhere.io", "whatever").unwrap();

        assert_eq!(user.id, "mock-user-id");
        assert_eq!(user.full_name, "Demo User");
        assert_eq!(user.role, Role::Recruiter);
        assert!(store.is_authenticated());
        assert!(store.is_recruiter());
        assert!(!store.is_admin());
    }

    #[test]
    fn test_login_rejects_invalid_email() {
        let (_dir, store) = temp_store();
        let err = store.login("not-an-email", "pw").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_register_takes_submitted_role_at_face_value() {
        let (_dir, store) = temp_store();
        let user = store.register(make_form()).unwrap();

        assert_eq!(user.role, Role::Admin);
        assert!(user.id.starts_with("mock-user-id-"));
        assert!(store.is_admin());
    }

    #[test]
    fn test_register_rejects_short_password() {
        let (_dir, store) = temp_store();
        let mut form = make_form();
        form.password = "short".to_string();
        form.confirm_password = "short".to_string();

        assert!(store.register(form).is_err());
        assert!(store.current_user().is_none());
    }

    #[test]
    fn test_session_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = AuthStore::new(SessionStorage::new(path.clone()));
        store.login("demo@hirehelp.dev", "password").unwrap();
        let token = store.token().unwrap();
        drop(store);

        // A fresh store with the same file is a process restart.
        let reborn = AuthStore::new(SessionStorage::new(path));
        assert!(!reborn.is_authenticated());
        reborn.restore();

        assert!(reborn.is_authenticated());
        assert_eq!(reborn.token().unwrap(), token);
        assert_eq!(reborn.current_user().unwrap().email, "demo@hirehelp.dev");
    }

    #[test]
    fn test_logout_clears_session_and_storage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = AuthStore::new(SessionStorage::new(path.clone()));
        store.login("demo@hirehelp.dev", "password").unwrap();
        store.logout().unwrap();
        assert!(!store.is_authenticated());

        let reborn = AuthStore::new(SessionStorage::new(path));
        reborn.restore();
        assert!(!reborn.is_authenticated());
    }

    #[test]
    fn test_update_user_merges_and_persists() {
        let (_dir, store) = temp_store();
        store.login("demo@hirehelp.dev", "password").unwrap();

        let updated = store
            .update_user(UserUpdate {
                full_name: Some("Renamed User".to_string()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(updated.full_name, "Renamed User");
        assert_eq!(updated.email, "demo@hirehelp.dev");
        assert_eq!(store.current_user().unwrap().full_name, "Renamed User");
    }

    #[test]
    fn test_update_user_without_session_is_unauthorized() {
        let (_dir, store) = temp_store();
        let err = store.update_user(UserUpdate::default()).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized));
    }
}

//! Auth service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::{
    auth::{AuthError, Credentials, NewAccount, Session, UserUuid},
    backend::{BackendClient, BackendError, SessionRow},
};

/// Identity-provider operations the auth service depends on.
#[automock]
#[async_trait]
pub trait AuthStore: Send + Sync {
    async fn password_sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> Result<SessionRow, BackendError>;

    async fn create_account(&self, account: &NewAccount) -> Result<SessionRow, BackendError>;

    async fn revoke_session(&self, access_token: &str) -> Result<(), BackendError>;
}

#[async_trait]
impl AuthStore for BackendClient {
    async fn password_sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> Result<SessionRow, BackendError> {
        self.sign_in_with_password(email, password).await
    }

    async fn create_account(&self, account: &NewAccount) -> Result<SessionRow, BackendError> {
        self.register_account(
            account.email.trim(),
            &account.password,
            account.full_name.trim(),
            account.roll_number.trim(),
        )
        .await
    }

    async fn revoke_session(&self, access_token: &str) -> Result<(), BackendError> {
        self.revoke_token(access_token).await
    }
}

/// Client-side authentication flows.
#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Sign in with email and password.
    async fn sign_in(&self, credentials: Credentials) -> Result<Session, AuthError>;

    /// Create an account and return its first session.
    async fn sign_up(&self, account: NewAccount) -> Result<Session, AuthError>;

    /// Revoke the session's access token.
    async fn sign_out(&self, session: &Session) -> Result<(), AuthError>;
}

/// Auth service backed by the hosted identity provider.
#[derive(Clone)]
pub struct RestAuthService {
    store: Arc<dyn AuthStore>,
}

impl RestAuthService {
    #[must_use]
    pub fn new(store: Arc<dyn AuthStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AuthService for RestAuthService {
    async fn sign_in(&self, credentials: Credentials) -> Result<Session, AuthError> {
        credentials.validate()?;

        let row = self
            .store
            .password_sign_in(credentials.email.trim(), &credentials.password)
            .await?;

        Ok(session_from_row(row))
    }

    async fn sign_up(&self, account: NewAccount) -> Result<Session, AuthError> {
        account.validate()?;

        let row = self.store.create_account(&account).await?;

        Ok(session_from_row(row))
    }

    async fn sign_out(&self, session: &Session) -> Result<(), AuthError> {
        self.store.revoke_session(&session.access_token).await?;

        Ok(())
    }
}

fn session_from_row(row: SessionRow) -> Session {
    Session {
        access_token: row.access_token,
        user_uuid: UserUuid::from_uuid(row.user.id),
        email: row.user.email,
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use crate::backend::AccountRow;

    use super::*;

    fn session_row() -> SessionRow {
        SessionRow {
            access_token: "token-abc".to_string(),
            user: AccountRow {
                id: Uuid::now_v7(),
                email: Some("asha@campus.edu".to_string()),
            },
        }
    }

    fn credentials() -> Credentials {
        Credentials {
            email: "asha@campus.edu".to_string(),
            password: "secret1".to_string(),
        }
    }

    #[tokio::test]
    async fn sign_in_maps_the_session_row() {
        let row = session_row();
        let expected_uuid = row.user.id;

        let mut store = MockAuthStore::new();
        store
            .expect_password_sign_in()
            .withf(|email, password| email == "asha@campus.edu" && password == "secret1")
            .return_once(move |_, _| Ok(row));

        let service = RestAuthService::new(Arc::new(store));

        let session = service
            .sign_in(credentials())
            .await
            .expect("sign_in should succeed");

        assert_eq!(session.access_token, "token-abc");
        assert_eq!(session.user_uuid.into_uuid(), expected_uuid);
    }

    #[tokio::test]
    async fn malformed_email_fails_validation_without_a_backend_call() {
        // No expectations are set: any call on the mock would panic.
        let store = MockAuthStore::new();
        let service = RestAuthService::new(Arc::new(store));

        let result = service
            .sign_in(Credentials {
                email: "not-an-email".to_string(),
                password: "secret1".to_string(),
            })
            .await;

        assert!(
            matches!(result, Err(AuthError::Validation(_))),
            "expected Validation, got {result:?}"
        );
    }

    #[tokio::test]
    async fn mismatched_passwords_fail_validation_without_a_backend_call() {
        let store = MockAuthStore::new();
        let service = RestAuthService::new(Arc::new(store));

        let result = service
            .sign_up(NewAccount {
                full_name: "Asha Nair".to_string(),
                email: "asha@campus.edu".to_string(),
                roll_number: "MEC2023042".to_string(),
                password: "secret1".to_string(),
                confirm_password: "secret2".to_string(),
            })
            .await;

        let Err(AuthError::Validation(errors)) = result else {
            panic!("expected Validation error");
        };

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.first().map(|error| error.field),
            Some("confirm_password")
        );
    }

    #[tokio::test]
    async fn refused_credentials_surface_the_provider_message() {
        let mut store = MockAuthStore::new();
        store.expect_password_sign_in().return_once(|_, _| {
            Err(BackendError::Rejected {
                status: 400,
                message: "Invalid login credentials".to_string(),
            })
        });

        let service = RestAuthService::new(Arc::new(store));

        let result = service.sign_in(credentials()).await;

        assert!(
            matches!(result, Err(AuthError::Rejected(message)) if message == "Invalid login credentials"),
        );
    }

    #[tokio::test]
    async fn sign_out_revokes_the_session_token() {
        let mut store = MockAuthStore::new();
        store
            .expect_revoke_session()
            .withf(|token| token == "token-abc")
            .return_once(|_| Ok(()));

        let service = RestAuthService::new(Arc::new(store));

        let session = Session {
            access_token: "token-abc".to_string(),
            user_uuid: UserUuid::new(),
            email: None,
        };

        service
            .sign_out(&session)
            .await
            .expect("sign_out should succeed");
    }
}

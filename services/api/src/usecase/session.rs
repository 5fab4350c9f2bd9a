use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use bobatcal_auth_types::cookie::SESSION_MAX_AGE;
use bobatcal_auth_types::token::SessionClaims;
use bobatcal_domain::user::UserRole;

use crate::domain::repository::{IdentityProviderPort, UserRepository};
use crate::domain::types::User;
use crate::error::ApiServiceError;

fn now_secs() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs()
}

/// Sign a session token carrying the user's id and stored role.
///
/// The role claim is copied from the database row at sign-in time; a
/// promotion takes effect on the user's next sign-in.
pub fn issue_session_token(
    user_id: Uuid,
    role: UserRole,
    secret: &str,
) -> Result<(String, u64), ApiServiceError> {
    let exp = now_secs() + SESSION_MAX_AGE;
    let claims = SessionClaims {
        sub: user_id.to_string(),
        role: role.as_u8(),
        exp,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| ApiServiceError::Internal(e.into()))?;
    Ok((token, exp))
}

// ── SignIn (OAuth callback) ──────────────────────────────────────────────────

pub struct SignInInput {
    pub code: String,
}

#[derive(Debug)]
pub struct SignInOutput {
    pub user: User,
    pub session_token: String,
    pub expires_at: u64,
}

pub struct SignInUseCase<U: UserRepository, P: IdentityProviderPort> {
    pub users: U,
    pub provider: P,
    pub session_secret: String,
}

impl<U: UserRepository, P: IdentityProviderPort> SignInUseCase<U, P> {
    /// Exchange the authorization code, find-or-create the user, and issue
    /// the session token. First sign-in creates the user with the
    /// non-privileged role.
    pub async fn execute(&self, input: SignInInput) -> Result<SignInOutput, ApiServiceError> {
        let profile = self.provider.exchange_code(&input.code).await?;

        let user = match self
            .users
            .find_by_provider_account(&profile.subject)
            .await?
        {
            Some(existing) => existing,
            None => {
                let now = Utc::now();
                let user = User {
                    id: Uuid::now_v7(),
                    name: profile.name,
                    email: profile.email,
                    image: profile.picture,
                    role: UserRole::User,
                    provider_account_id: profile.subject,
                    created_at: now,
                    updated_at: now,
                };
                self.users.create(&user).await?;
                user
            }
        };

        let (session_token, expires_at) =
            issue_session_token(user.id, user.role, &self.session_secret)?;

        Ok(SignInOutput {
            user,
            session_token,
            expires_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use bobatcal_auth_types::token::validate_session_token;

    use crate::domain::types::ProviderProfile;

    const TEST_SECRET: &str = "session-usecase-test-secret";

    struct MockUserRepo {
        user: Option<User>,
        created: Mutex<Option<User>>,
    }

    impl UserRepository for MockUserRepo {
        async fn find_by_provider_account(
            &self,
            _provider_account_id: &str,
        ) -> Result<Option<User>, ApiServiceError> {
            Ok(self.user.clone())
        }
        async fn create(&self, user: &User) -> Result<(), ApiServiceError> {
            *self.created.lock().unwrap() = Some(user.clone());
            Ok(())
        }
    }

    struct MockProvider {
        profile: Option<ProviderProfile>,
    }

    impl IdentityProviderPort for MockProvider {
        async fn exchange_code(&self, _code: &str) -> Result<ProviderProfile, ApiServiceError> {
            self.profile
                .clone()
                .ok_or(ApiServiceError::SignInRejected)
        }
    }

    fn test_profile() -> ProviderProfile {
        ProviderProfile {
            subject: "provider-subject-1".into(),
            name: "alice".into(),
            email: "alice@example.com".into(),
            picture: None,
        }
    }

    fn admin_user() -> User {
        let now = Utc::now();
        User {
            id: Uuid::now_v7(),
            name: "alice".into(),
            email: "alice@example.com".into(),
            image: None,
            role: UserRole::Admin,
            provider_account_id: "provider-subject-1".into(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn should_create_user_with_plain_role_on_first_sign_in() {
        let uc = SignInUseCase {
            users: MockUserRepo {
                user: None,
                created: Mutex::new(None),
            },
            provider: MockProvider {
                profile: Some(test_profile()),
            },
            session_secret: TEST_SECRET.into(),
        };
        let out = uc.execute(SignInInput { code: "abc".into() }).await.unwrap();
        assert_eq!(out.user.role, UserRole::User);
        assert_eq!(out.user.provider_account_id, "provider-subject-1");

        let created = uc.users.created.lock().unwrap().clone().unwrap();
        assert_eq!(created.id, out.user.id);
        assert_eq!(created.role, UserRole::User);
    }

    #[tokio::test]
    async fn should_reuse_existing_user_on_repeat_sign_in() {
        let existing = admin_user();
        let uc = SignInUseCase {
            users: MockUserRepo {
                user: Some(existing.clone()),
                created: Mutex::new(None),
            },
            provider: MockProvider {
                profile: Some(test_profile()),
            },
            session_secret: TEST_SECRET.into(),
        };
        let out = uc.execute(SignInInput { code: "abc".into() }).await.unwrap();
        assert_eq!(out.user.id, existing.id);
        assert!(uc.users.created.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn should_copy_stored_role_onto_session_token() {
        let existing = admin_user();
        let uc = SignInUseCase {
            users: MockUserRepo {
                user: Some(existing.clone()),
                created: Mutex::new(None),
            },
            provider: MockProvider {
                profile: Some(test_profile()),
            },
            session_secret: TEST_SECRET.into(),
        };
        let out = uc.execute(SignInInput { code: "abc".into() }).await.unwrap();

        let info = validate_session_token(&out.session_token, TEST_SECRET).unwrap();
        assert_eq!(info.user_id, existing.id);
        assert_eq!(info.user_role, UserRole::Admin.as_u8());
        assert_eq!(info.expires_at, out.expires_at);
    }

    #[tokio::test]
    async fn should_propagate_provider_rejection() {
        let uc = SignInUseCase {
            users: MockUserRepo {
                user: None,
                created: Mutex::new(None),
            },
            provider: MockProvider { profile: None },
            session_secret: TEST_SECRET.into(),
        };
        let result = uc.execute(SignInInput { code: "bad".into() }).await;
        assert!(matches!(result, Err(ApiServiceError::SignInRejected)));
        assert!(uc.users.created.lock().unwrap().is_none());
    }
}

//! Authentication service: registration, login and token verification.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::{Config, SECONDS_PER_HOUR, TOKEN_TYPE_BEARER};
use crate::domain::{Account, Password, PlayerDetails, ScoutDetails, User, UserRole};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;
use crate::with_transaction;

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Token response returned after successful authentication
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TokenResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
    /// Token type (always "Bearer")
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Token expiration time in seconds
    #[schema(example = 86400)]
    pub expires_in: i64,
}

/// Registration data for a player account.
#[derive(Debug, Clone)]
pub struct NewPlayerAccount {
    pub email: String,
    pub password: String,
    pub details: PlayerDetails,
}

/// Registration data for a scout account.
#[derive(Debug, Clone)]
pub struct NewScoutAccount {
    pub email: String,
    pub password: String,
    pub details: ScoutDetails,
}

/// Successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub user: User,
    pub token: TokenResponse,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Create a jugador user and its player profile atomically
    async fn register_player(&self, account: NewPlayerAccount) -> AppResult<Account>;

    /// Create an ojeador user and its scout profile atomically
    async fn register_scout(&self, account: NewScoutAccount) -> AppResult<Account>;

    /// Create an admin user (no profile)
    async fn create_admin(&self, email: String, password: String) -> AppResult<User>;

    /// Check credentials and issue a JWT
    async fn login(&self, email: String, password: String) -> AppResult<LoginOutcome>;

    /// Verify JWT token and extract claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

fn generate_token(user: &User, config: &Config) -> AppResult<TokenResponse> {
    let now = Utc::now();
    let expires_at = now + Duration::hours(config.jwt_expiration_hours);

    let claims = Claims {
        sub: user.id,
        email: user.email.clone(),
        role: user.role.to_string(),
        exp: expires_at.timestamp(),
        iat: now.timestamp(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret_key_bytes()),
    )?;

    Ok(TokenResponse {
        access_token: token,
        token_type: TOKEN_TYPE_BEARER.to_string(),
        expires_in: config.jwt_expiration_hours * SECONDS_PER_HOUR,
    })
}

fn duplicate_email() -> AppError {
    AppError::field("email", "El email ya está registrado")
}

/// Field errors raised inside the transaction are shown as such; anything
/// else becomes the generic registration failure with the cause logged.
fn registration_error(role: UserRole, err: AppError) -> AppError {
    match err {
        AppError::Form(_) => err,
        other => {
            tracing::error!(role = %role, error = ?other, "Registration failed");
            AppError::RegistrationFailed
        }
    }
}

/// Concrete implementation of AuthService using Unit of Work.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
    config: Config,
}

impl<U: UnitOfWork> Authenticator<U> {
    pub fn new(uow: Arc<U>, config: Config) -> Self {
        Self { uow, config }
    }
}

#[async_trait]
impl<U: UnitOfWork> AuthService for Authenticator<U> {
    async fn register_player(&self, account: NewPlayerAccount) -> AppResult<Account> {
        let password_hash = Password::new(&account.password)?.into_string();
        let NewPlayerAccount { email, details, .. } = account;

        let (user, profile) = with_transaction!(self.uow, |ctx| {
            if ctx.users().find_by_email(&email).await?.is_some() {
                return Err(duplicate_email());
            }
            let user = ctx
                .users()
                .create(email, password_hash, UserRole::Jugador)
                .await?;
            let profile = ctx.players().create(user.id, details).await?;
            Ok((user, profile))
        })
        .map_err(|e| registration_error(UserRole::Jugador, e))?;

        tracing::info!(user_id = %user.id, "Player registered");
        Ok(Account::Player { user, profile })
    }

    async fn register_scout(&self, account: NewScoutAccount) -> AppResult<Account> {
        let password_hash = Password::new(&account.password)?.into_string();
        let NewScoutAccount { email, details, .. } = account;

        let (user, profile) = with_transaction!(self.uow, |ctx| {
            if ctx.users().find_by_email(&email).await?.is_some() {
                return Err(duplicate_email());
            }
            let user = ctx
                .users()
                .create(email, password_hash, UserRole::Ojeador)
                .await?;
            let profile = ctx.scouts().create(user.id, details).await?;
            Ok((user, profile))
        })
        .map_err(|e| registration_error(UserRole::Ojeador, e))?;

        tracing::info!(user_id = %user.id, "Scout registered");
        Ok(Account::Scout { user, profile })
    }

    async fn create_admin(&self, email: String, password: String) -> AppResult<User> {
        if self.uow.users().find_by_email(&email).await?.is_some() {
            return Err(duplicate_email());
        }
        let password_hash = Password::new(&password)?.into_string();
        self.uow
            .users()
            .create(email, password_hash, UserRole::Admin)
            .await
    }

    async fn login(&self, email: String, password: String) -> AppResult<LoginOutcome> {
        let user = self.uow.users().find_by_email(&email).await?;

        // Verify against a dummy hash when the user is unknown so both
        // paths cost the same.
        let dummy_hash =
            "$argon2id$v=19$m=19456,t=2,p=1$dummysalt123456$dummyhash1234567890123456789012";
        let stored = Password::from_hash(
            user.as_ref()
                .map_or(dummy_hash, |u| u.password_hash.as_str())
                .to_string(),
        );
        let password_valid = stored.verify(&password);

        let user = match user {
            Some(user) if password_valid => user,
            _ => {
                tracing::warn!(email = %email, "Rejected login");
                return Err(AppError::InvalidCredentials);
            }
        };

        if !user.is_active {
            tracing::warn!(user_id = %user.id, "Login attempt on disabled account");
            return Err(AppError::AccountDisabled);
        }

        let token = generate_token(&user, &self.config)?;
        Ok(LoginOutcome { user, token })
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.secret_key_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }
}

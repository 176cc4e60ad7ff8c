//! Account lifecycle: registration, activation, login, profile updates
//! and admin account management.

use tracing::info;
use uuid::Uuid;

use learnhub_auth::activation::{ActivationCodec, PendingAccount};
use learnhub_auth::jwt::TokenPair;
use learnhub_auth::password::PasswordHasher;
use learnhub_auth::session::SessionManager;
use learnhub_core::error::AppError;
use learnhub_core::result::AppResult;
use learnhub_core::traits::mail::MailTransport;
use learnhub_core::traits::media::MediaStore;
use learnhub_database::repositories::user::UserRepository;
use learnhub_entity::user::model::CreateUser;
use learnhub_entity::user::{User, UserProfile, UserRole};
use learnhub_mail::templates;
use learnhub_mail::MailManager;
use learnhub_media::MediaManager;

use crate::context::RequestContext;

/// Result of a registration request: the activation token the client
/// must present together with the mailed code.
#[derive(Debug, Clone)]
pub struct RegistrationTicket {
    pub activation_token: String,
}

/// Account service.
#[derive(Debug, Clone)]
pub struct UserService {
    users: UserRepository,
    hasher: PasswordHasher,
    activation: ActivationCodec,
    sessions: SessionManager,
    mail: MailManager,
    media: MediaManager,
    password_min_length: usize,
}

impl UserService {
    /// Create a new user service.
    pub fn new(
        users: UserRepository,
        activation: ActivationCodec,
        sessions: SessionManager,
        mail: MailManager,
        media: MediaManager,
        password_min_length: usize,
    ) -> Self {
        Self {
            users,
            hasher: PasswordHasher::new(),
            activation,
            sessions,
            mail,
            media,
            password_min_length,
        }
    }

    /// Start a registration. Nothing is written to the database yet: the
    /// pending account is sealed into the activation token and a 4-digit
    /// code is mailed to the address.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> AppResult<RegistrationTicket> {
        if password.len() < self.password_min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                self.password_min_length
            )));
        }
        if self.users.find_by_email(email).await?.is_some() {
            return Err(AppError::validation("Email already exists"));
        }

        let password_hash = self.hasher.hash_password(password)?;
        let pending = PendingAccount {
            name: name.to_string(),
            email: email.to_lowercase(),
            password_hash,
        };
        let issued = self.activation.issue(pending.clone())?;

        self.mail
            .send(&templates::activation_email(&pending.email, name, &issued.code))
            .await?;

        info!(email = %pending.email, "Registration started, activation code sent");
        Ok(RegistrationTicket {
            activation_token: issued.token,
        })
    }

    /// Complete a registration by presenting the token and mailed code.
    pub async fn activate(&self, token: &str, code: &str) -> AppResult<User> {
        let pending = self.activation.verify(token, code)?;

        if self.users.find_by_email(&pending.email).await?.is_some() {
            return Err(AppError::validation("Email already exists"));
        }

        let user = self
            .users
            .insert(&CreateUser {
                name: pending.name,
                email: pending.email,
                password_hash: Some(pending.password_hash),
                avatar_url: None,
                is_verified: true,
            })
            .await?;

        info!(user_id = %user.id, "Account activated");
        Ok(user)
    }

    /// Log in with email and password, opening a session.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<(UserProfile, TokenPair)> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::validation("Invalid email or password"))?;

        let hash = user
            .password_hash
            .as_deref()
            .ok_or_else(|| AppError::validation("Invalid email or password"))?;
        if !self.hasher.verify_password(password, hash)? {
            return Err(AppError::validation("Invalid email or password"));
        }

        let profile = self.load_profile(user).await?;
        let pair = self.sessions.issue(&profile).await?;
        info!(user_id = %profile.user.id, "Login");
        Ok((profile, pair))
    }

    /// Log in via a social identity provider, creating the account on
    /// first sight. Social accounts carry no password hash.
    pub async fn social_auth(
        &self,
        name: &str,
        email: &str,
        avatar_url: Option<&str>,
    ) -> AppResult<(UserProfile, TokenPair)> {
        let user = match self.users.find_by_email(email).await? {
            Some(user) => user,
            None => {
                self.users
                    .insert(&CreateUser {
                        name: name.to_string(),
                        email: email.to_lowercase(),
                        password_hash: None,
                        avatar_url: avatar_url.map(str::to_string),
                        is_verified: true,
                    })
                    .await?
            }
        };

        let profile = self.load_profile(user).await?;
        let pair = self.sessions.issue(&profile).await?;
        Ok((profile, pair))
    }

    /// Close the caller's session.
    pub async fn logout(&self, user_id: Uuid) -> AppResult<()> {
        self.sessions.revoke(user_id).await
    }

    /// Exchange a refresh token for a fresh pair.
    pub async fn refresh(&self, refresh_token: &str) -> AppResult<(TokenPair, UserProfile)> {
        self.sessions.refresh(refresh_token).await
    }

    /// Update name and email, refreshing the session mirror.
    pub async fn update_info(
        &self,
        ctx: &RequestContext,
        name: &str,
        email: &str,
    ) -> AppResult<UserProfile> {
        if !email.eq_ignore_ascii_case(ctx.email())
            && self.users.find_by_email(email).await?.is_some()
        {
            return Err(AppError::validation("Email already exists"));
        }

        let user = self.users.update_profile(ctx.user_id(), name, email).await?;
        let profile = self.load_profile(user).await?;
        self.sessions.mirror(&profile).await?;
        Ok(profile)
    }

    /// Change the caller's password.
    pub async fn update_password(
        &self,
        ctx: &RequestContext,
        old_password: &str,
        new_password: &str,
    ) -> AppResult<()> {
        if new_password.len() < self.password_min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                self.password_min_length
            )));
        }

        // The mirror drops the hash, so fetch the row.
        let user = self
            .users
            .find_by_id(ctx.user_id())
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;
        let hash = user
            .password_hash
            .as_deref()
            .ok_or_else(|| AppError::validation("Invalid user"))?;

        if !self.hasher.verify_password(old_password, hash)? {
            return Err(AppError::validation("Invalid old password"));
        }

        let new_hash = self.hasher.hash_password(new_password)?;
        self.users.update_password(ctx.user_id(), &new_hash).await?;
        info!(user_id = %ctx.user_id(), "Password changed");
        Ok(())
    }

    /// Replace the caller's avatar, refreshing the session mirror.
    pub async fn update_avatar(
        &self,
        ctx: &RequestContext,
        data_uri: &str,
    ) -> AppResult<UserProfile> {
        if let Some(public_id) = &ctx.profile.user.avatar_public_id {
            self.media.destroy(public_id).await?;
        }
        let asset = self.media.upload("avatars", data_uri).await?;

        let user = self
            .users
            .update_avatar(ctx.user_id(), &asset.public_id, &asset.url)
            .await?;
        let profile = self.load_profile(user).await?;
        self.sessions.mirror(&profile).await?;
        Ok(profile)
    }

    /// List all accounts, newest first. Admin only.
    pub async fn list(&self) -> AppResult<Vec<User>> {
        self.users.find_all().await
    }

    /// Change an account's role. Admin only.
    ///
    /// The target's session mirror is left as-is; the new role takes
    /// effect the next time they log in.
    pub async fn update_role(&self, user_id: Uuid, role: UserRole) -> AppResult<User> {
        self.users
            .update_role(user_id, role)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    async fn load_profile(&self, user: User) -> AppResult<UserProfile> {
        let courses = self.users.course_ids(user.id).await?;
        Ok(UserProfile::new(user, courses))
    }
}

use finanzas_core::endpoints::auth;
use finanzas_core::models::{
    AuthResponse, LoginRequest, PasswordChange, ProfileEnvelope, ProfileUpdate, RecoverRequest,
    ResetRequest, SignupRequest, User,
};
use finanzas_core::guard::ProfileSource;
use finanzas_core::ApiError;

use super::ApiClient;

impl ApiClient {
    pub async fn signup(&self, body: &SignupRequest) -> Result<AuthResponse, ApiError> {
        self.post(auth::SIGNUP, body).await
    }

    pub async fn login(&self, body: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.post(auth::LOGIN, body).await
    }

    pub async fn admin_login(&self, body: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.post(auth::ADMIN_LOGIN, body).await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.post_empty(auth::LOGOUT).await
    }

    /// Renews the session cookies; some backends also hand back a fresh bearer token.
    pub async fn refresh_session(&self) -> Result<AuthResponse, ApiError> {
        self.post(auth::REFRESH, &serde_json::json!({})).await
    }

    pub async fn recover_password(&self, body: &RecoverRequest) -> Result<AuthResponse, ApiError> {
        self.post(auth::RECOVER, body).await
    }

    pub async fn reset_password(
        &self,
        token: &str,
        body: &ResetRequest,
    ) -> Result<AuthResponse, ApiError> {
        self.post(&auth::reset(token), body).await
    }

    pub async fn profile(&self) -> Result<User, ApiError> {
        self.get::<ProfileEnvelope>(auth::PROFILE)
            .await
            .map(ProfileEnvelope::into_user)
    }

    pub async fn update_profile(&self, body: &ProfileUpdate) -> Result<User, ApiError> {
        self.put::<_, ProfileEnvelope>(auth::PROFILE, body)
            .await
            .map(ProfileEnvelope::into_user)
    }

    pub async fn change_password(&self, body: &PasswordChange) -> Result<AuthResponse, ApiError> {
        self.put(auth::CHANGE_PASSWORD, body).await
    }

    pub async fn delete_account(&self) -> Result<(), ApiError> {
        self.delete(auth::ACCOUNT).await
    }
}

impl ProfileSource for ApiClient {
    async fn fetch_profile(&self) -> Result<User, ApiError> {
        self.profile().await
    }
}

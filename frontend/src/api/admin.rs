use finanzas_core::endpoints::admin;
use finanzas_core::models::{
    AdminUserUpdate, Id, NewAdmin, OverviewStats, PasswordResetStats, SessionLog, User,
};
use finanzas_core::ApiError;

use super::ApiClient;

impl ApiClient {
    pub async fn admin_users(&self) -> Result<Vec<User>, ApiError> {
        self.get(admin::USERS).await
    }

    pub async fn admin_user(&self, id: Id) -> Result<User, ApiError> {
        self.get(&admin::user(id)).await
    }

    pub async fn admin_update_user(
        &self,
        id: Id,
        body: &AdminUserUpdate,
    ) -> Result<User, ApiError> {
        self.put(&admin::user(id), body).await
    }

    pub async fn admin_delete_user(&self, id: Id) -> Result<(), ApiError> {
        self.delete(&admin::user(id)).await
    }

    pub async fn overview_stats(&self) -> Result<OverviewStats, ApiError> {
        self.get(admin::OVERVIEW_STATS).await
    }

    pub async fn password_reset_stats(&self) -> Result<PasswordResetStats, ApiError> {
        self.get(admin::PASSWORD_RESET_STATS).await
    }

    pub async fn admins(&self) -> Result<Vec<User>, ApiError> {
        self.get(admin::ADMINS).await
    }

    pub async fn create_admin(&self, body: &NewAdmin) -> Result<User, ApiError> {
        self.post(admin::ADMINS, body).await
    }

    pub async fn delete_admin(&self, id: Id) -> Result<(), ApiError> {
        self.delete(&admin::admin(id)).await
    }

    pub async fn login_logs(&self) -> Result<Vec<SessionLog>, ApiError> {
        self.get(admin::LOGIN_LOGS).await
    }
}

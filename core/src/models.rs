//! Wire types exchanged with the REST backend.
//!
//! Every entity here is owned by the server; the client only keeps the copy
//! from the last successful fetch.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

pub type Id = i64;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    User,
    Admin,
    SuperAdmin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
            Role::SuperAdmin => "super_admin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "Usuario",
            Role::Admin => "Administrador",
            Role::SuperAdmin => "Super administrador",
        }
    }

    /// Roles allowed into the back-office.
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin | Role::SuperAdmin)
    }

    /// Only super admins create or remove other admins.
    pub fn can_manage_admins(&self) -> bool {
        matches!(self, Role::SuperAdmin)
    }

    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "user" => Some(Role::User),
            "admin" => Some(Role::Admin),
            "super_admin" => Some(Role::SuperAdmin),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Id,
    pub email: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub role: Role,
}

impl User {
    /// Name shown in headers and greetings.
    pub fn display_name(&self) -> &str {
        if self.nickname.trim().is_empty() {
            &self.email
        } else {
            &self.nickname
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: Id,
    pub name: String,
    #[serde(deserialize_with = "amount_from_any", default)]
    pub money: f64,
    #[serde(default)]
    pub category_id: Option<Id>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Id,
    pub tipo: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub account_id: Option<Id>,
}

/// Tag as embedded inside a transaction payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagRef {
    #[serde(default)]
    pub id: Option<Id>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Id,
    #[serde(deserialize_with = "amount_from_any")]
    pub amount: f64,
    pub is_income: bool,
    pub transaction_date: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tag_id: Option<Id>,
    #[serde(default)]
    pub tag: Option<TagRef>,
}

impl Transaction {
    /// Calendar date of the transaction, if the server sent a parsable one.
    pub fn date(&self) -> Option<NaiveDate> {
        parse_date(&self.transaction_date)
    }

    pub fn tag_name(&self) -> Option<&str> {
        self.tag
            .as_ref()
            .map(|t| t.name.as_str())
            .filter(|name| !name.trim().is_empty())
    }

    /// Amount with the sign implied by `is_income`.
    pub fn signed_amount(&self) -> f64 {
        if self.is_income {
            self.amount
        } else {
            -self.amount
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionLog {
    pub id: Id,
    pub user_id: Id,
    #[serde(default)]
    pub device_id: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub ip: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub last_used_at: Option<String>,
    #[serde(default)]
    pub revoke: bool,
    #[serde(default)]
    pub user: Option<UserRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OverviewStats {
    pub total_users: u64,
    pub total_admins: u64,
    pub total_accounts: u64,
    pub total_transactions: u64,
    pub active_sessions: u64,
    pub new_users_this_month: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PasswordResetStats {
    pub total: u64,
    pub pending: u64,
    pub completed: u64,
    pub expired: u64,
}

// ---------------------------------------------------------------------------
// Request payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub email: String,
    pub nickname: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoverRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetRequest {
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub email: String,
    pub nickname: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub name: String,
    pub money: f64,
    pub category_id: Option<Id>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub tipo: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTag {
    pub name: String,
    pub description: Option<String>,
    pub account_id: Id,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub amount: f64,
    pub is_income: bool,
    pub transaction_date: String,
    pub description: Option<String>,
    pub tag_id: Option<Id>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAdmin {
    pub email: String,
    pub nickname: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChatReply {
    pub reply: String,
}

/// Body returned by auth endpoints; most only carry a message.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AuthResponse {
    pub message: Option<String>,
    pub user: Option<User>,
    /// Bearer token for the assistant, when the backend hands one out.
    #[serde(alias = "accessToken", alias = "access_token")]
    pub token: Option<String>,
}

/// The profile endpoint answers either with the user or `{ "user": ... }`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ProfileEnvelope {
    Wrapped { user: User },
    Bare(User),
}

impl ProfileEnvelope {
    pub fn into_user(self) -> User {
        match self {
            ProfileEnvelope::Wrapped { user } | ProfileEnvelope::Bare(user) => user,
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse the calendar date out of `YYYY-MM-DD` or a full ISO-8601 timestamp.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let head = raw.trim().get(..10)?;
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

/// Decimal columns reach the client either as JSON numbers or strings.
fn amount_from_any<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Number(f64),
        Text(String),
    }

    match Amount::deserialize(deserializer)? {
        Amount::Number(n) => Ok(n),
        Amount::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid amount: {s}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_decodes_camel_case_with_embedded_tag() {
        let raw = r#"{
            "id": 7,
            "amount": "40.50",
            "isIncome": false,
            "transactionDate": "2024-01-10T00:00:00.000Z",
            "description": null,
            "tagId": 3,
            "tag": { "id": 3, "name": "Food" }
        }"#;
        let tx: Transaction = serde_json::from_str(raw).unwrap();
        assert_eq!(tx.amount, 40.5);
        assert_eq!(tx.tag_name(), Some("Food"));
        assert_eq!(tx.date(), NaiveDate::from_ymd_opt(2024, 1, 10));
        assert_eq!(tx.signed_amount(), -40.5);
    }

    #[test]
    fn transaction_without_tag_has_no_name() {
        let raw = r#"{"id":1,"amount":10,"isIncome":true,"transactionDate":"2024-02-01"}"#;
        let tx: Transaction = serde_json::from_str(raw).unwrap();
        assert_eq!(tx.tag_name(), None);
        assert_eq!(tx.description, None);
    }

    #[test]
    fn role_round_trips_snake_case() {
        let user: User =
            serde_json::from_str(r#"{"id":1,"email":"a@b.co","nickname":"","role":"super_admin"}"#)
                .unwrap();
        assert_eq!(user.role, Role::SuperAdmin);
        assert!(user.role.is_admin());
        assert_eq!(user.display_name(), "a@b.co");
        assert_eq!(serde_json::to_string(&Role::SuperAdmin).unwrap(), "\"super_admin\"");
    }

    #[test]
    fn plain_user_is_not_admin() {
        assert!(!Role::User.is_admin());
        assert!(!Role::Admin.can_manage_admins());
        assert!(Role::SuperAdmin.can_manage_admins());
    }

    #[test]
    fn select_value_maps_to_role() {
        for role in [Role::User, Role::Admin, Role::SuperAdmin] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        assert_eq!(Role::parse("Admin"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn stats_default_missing_fields() {
        let stats: OverviewStats = serde_json::from_str(r#"{"totalUsers": 12}"#).unwrap();
        assert_eq!(stats.total_users, 12);
        assert_eq!(stats.active_sessions, 0);
    }

    #[test]
    fn parse_date_rejects_garbage() {
        assert_eq!(parse_date("hoy"), None);
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("2024-13-01"), None);
    }

    #[test]
    fn profile_accepts_both_shapes() {
        let bare: ProfileEnvelope =
            serde_json::from_str(r#"{"id":2,"email":"b@c.de","role":"admin"}"#).unwrap();
        let wrapped: ProfileEnvelope =
            serde_json::from_str(r#"{"user":{"id":2,"email":"b@c.de","role":"admin"}}"#).unwrap();
        assert_eq!(bare.into_user(), wrapped.into_user());
    }

    #[test]
    fn auth_response_picks_up_token_under_either_key() {
        let plain: AuthResponse =
            serde_json::from_str(r#"{"message":"ok","token":"abc"}"#).unwrap();
        let camel: AuthResponse = serde_json::from_str(r#"{"accessToken":"abc"}"#).unwrap();
        let snake: AuthResponse = serde_json::from_str(r#"{"access_token":"abc"}"#).unwrap();
        assert_eq!(plain.token.as_deref(), Some("abc"));
        assert_eq!(camel.token, plain.token);
        assert_eq!(snake.token, plain.token);
        let bare: AuthResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(bare, AuthResponse::default());
    }

    #[test]
    fn admin_update_skips_unset_fields() {
        let body = serde_json::to_value(AdminUserUpdate {
            role: Some(Role::Admin),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "role": "admin" }));
    }
}

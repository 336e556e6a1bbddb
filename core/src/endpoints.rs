//! Paths of the REST endpoints the client consumes.

use chrono::NaiveDate;

use crate::models::Id;

pub mod auth {
    pub const SIGNUP: &str = "/api/auth/signup";
    pub const LOGIN: &str = "/api/auth/login";
    pub const LOGOUT: &str = "/api/auth/logout";
    pub const ADMIN_LOGIN: &str = "/api/auth/admin/login";
    pub const RECOVER: &str = "/api/auth/recover";
    pub const PROFILE: &str = "/api/auth/profile";
    pub const CHANGE_PASSWORD: &str = "/api/auth/change-password";
    pub const ACCOUNT: &str = "/api/auth/account";
    pub const REFRESH: &str = "/api/auth/refresh";

    pub fn reset(token: &str) -> String {
        format!("/api/auth/reset/{}", token.trim())
    }
}

pub mod admin {
    use crate::models::Id;

    pub const USERS: &str = "/api/admin/users";
    pub const PASSWORD_RESET_STATS: &str = "/api/admin/stats/password-resets";
    pub const OVERVIEW_STATS: &str = "/api/admin/stats/overview";
    pub const ADMINS: &str = "/api/admin/admins";
    pub const LOGIN_LOGS: &str = "/api/admin/logs/login";

    pub fn user(id: Id) -> String {
        format!("{USERS}/{id}")
    }

    pub fn admin(id: Id) -> String {
        format!("{ADMINS}/{id}")
    }
}

pub const CATEGORIES: &str = "/api/categories";
pub const ACCOUNTS: &str = "/api/accounts";
pub const TAGS: &str = "/api/tags";
pub const TRANSACTIONS: &str = "/api/transactions";
pub const CHAT: &str = "/api/chat";

pub fn category(id: Id) -> String {
    format!("{CATEGORIES}/{id}")
}

pub fn account(id: Id) -> String {
    format!("{ACCOUNTS}/{id}")
}

/// Single tag, for update and delete.
pub fn tag(id: Id) -> String {
    format!("{TAGS}/{id}")
}

/// Tags scoped to one account.
pub fn account_tags(account_id: Id) -> String {
    format!("{TAGS}/{account_id}")
}

pub fn transaction(id: Id) -> String {
    format!("{TRANSACTIONS}/{id}")
}

pub fn transactions_on(date: NaiveDate) -> String {
    format!("{TRANSACTIONS}/date/{}", date.format("%Y-%m-%d"))
}

pub fn transactions_of_kind_on(kind: FlowKind, date: NaiveDate) -> String {
    format!(
        "{TRANSACTIONS}/type/{}/date/{}",
        kind.as_str(),
        date.format("%Y-%m-%d")
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowKind {
    Income,
    Expense,
}

impl FlowKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlowKind::Income => "income",
            FlowKind::Expense => "expense",
        }
    }

    pub fn is_income(&self) -> bool {
        matches!(self, FlowKind::Income)
    }
}

/// Filters accepted by `GET /api/transactions`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    pub account_id: Option<Id>,
    pub tag_id: Option<Id>,
    pub kind: Option<FlowKind>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl TransactionFilter {
    pub fn is_empty(&self) -> bool {
        *self == TransactionFilter::default()
    }

    /// Query pairs for the set fields only.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(id) = self.account_id {
            pairs.push(("accountId", id.to_string()));
        }
        if let Some(id) = self.tag_id {
            pairs.push(("tagId", id.to_string()));
        }
        if let Some(kind) = self.kind {
            pairs.push(("isIncome", kind.is_income().to_string()));
        }
        if let Some(date) = self.start_date {
            pairs.push(("startDate", date.format("%Y-%m-%d").to_string()));
        }
        if let Some(date) = self.end_date {
            pairs.push(("endDate", date.format("%Y-%m-%d").to_string()));
        }
        pairs
    }
}

/// Query pairs for `GET /api/accounts?userId=`.
pub fn accounts_query(user_id: Option<Id>) -> Vec<(&'static str, String)> {
    user_id
        .map(|id| vec![("userId", id.to_string())])
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn id_paths() {
        assert_eq!(admin::user(4), "/api/admin/users/4");
        assert_eq!(admin::admin(9), "/api/admin/admins/9");
        assert_eq!(category(2), "/api/categories/2");
        assert_eq!(account(3), "/api/accounts/3");
        assert_eq!(account_tags(8), "/api/tags/8");
        assert_eq!(auth::reset(" abc "), "/api/auth/reset/abc");
    }

    #[test]
    fn dated_transaction_paths() {
        assert_eq!(
            transactions_on(date(2024, 1, 5)),
            "/api/transactions/date/2024-01-05"
        );
        assert_eq!(
            transactions_of_kind_on(FlowKind::Expense, date(2024, 12, 31)),
            "/api/transactions/type/expense/date/2024-12-31"
        );
    }

    #[test]
    fn empty_filter_has_no_pairs() {
        let filter = TransactionFilter::default();
        assert!(filter.is_empty());
        assert!(filter.query_pairs().is_empty());
    }

    #[test]
    fn filter_serializes_set_fields_only() {
        let filter = TransactionFilter {
            account_id: Some(1),
            kind: Some(FlowKind::Income),
            end_date: Some(date(2024, 3, 31)),
            ..Default::default()
        };
        assert_eq!(
            filter.query_pairs(),
            vec![
                ("accountId", "1".to_string()),
                ("isIncome", "true".to_string()),
                ("endDate", "2024-03-31".to_string()),
            ]
        );
    }

    #[test]
    fn accounts_query_optional() {
        assert!(accounts_query(None).is_empty());
        assert_eq!(accounts_query(Some(5)), vec![("userId", "5".to_string())]);
    }
}

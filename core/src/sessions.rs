//! Search and labelling helpers for the admin back-office.

use crate::models::{SessionLog, User};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    All,
    Active,
    Revoked,
}

impl SessionStatus {
    pub fn matches(&self, log: &SessionLog) -> bool {
        match self {
            SessionStatus::All => true,
            SessionStatus::Active => !log.revoke,
            SessionStatus::Revoked => log.revoke,
        }
    }

    pub fn parse(value: &str) -> SessionStatus {
        match value {
            "active" => SessionStatus::Active,
            "revoked" => SessionStatus::Revoked,
            _ => SessionStatus::All,
        }
    }
}

/// Case-insensitive search over email, nickname, IP, device and user id.
pub fn filter_logs(logs: &[SessionLog], query: &str, status: SessionStatus) -> Vec<SessionLog> {
    let needle = query.trim().to_lowercase();
    let mut out: Vec<SessionLog> = logs
        .iter()
        .filter(|log| status.matches(log))
        .filter(|log| needle.is_empty() || haystack(log).contains(&needle))
        .cloned()
        .collect();
    out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    out
}

fn haystack(log: &SessionLog) -> String {
    let mut parts = vec![log.user_id.to_string()];
    if let Some(user) = &log.user {
        parts.extend(user.email.iter().cloned());
        parts.extend(user.nickname.iter().cloned());
    }
    parts.extend(log.ip.iter().cloned());
    parts.extend(log.device_id.iter().cloned());
    parts.join(" ").to_lowercase()
}

/// Users whose email, nickname or role label contain `query`.
pub fn search_users(users: &[User], query: &str) -> Vec<User> {
    let needle = query.trim().to_lowercase();
    users
        .iter()
        .filter(|user| {
            needle.is_empty()
                || user.email.to_lowercase().contains(&needle)
                || user.nickname.to_lowercase().contains(&needle)
                || user.role.label().to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Short browser/OS description from a user-agent string.
pub fn describe_user_agent(user_agent: Option<&str>) -> String {
    let Some(ua) = user_agent.filter(|ua| !ua.trim().is_empty()) else {
        return "Desconocido".to_string();
    };

    let browser = if ua.contains("Edg/") {
        "Edge"
    } else if ua.contains("OPR/") || ua.contains("Opera") {
        "Opera"
    } else if ua.contains("Firefox/") {
        "Firefox"
    } else if ua.contains("Chrome/") {
        "Chrome"
    } else if ua.contains("Safari/") {
        "Safari"
    } else {
        "Otro navegador"
    };

    let os = if ua.contains("Android") {
        "Android"
    } else if ua.contains("iPhone") || ua.contains("iPad") {
        "iOS"
    } else if ua.contains("Windows") {
        "Windows"
    } else if ua.contains("Mac OS") {
        "macOS"
    } else if ua.contains("Linux") {
        "Linux"
    } else {
        "otro sistema"
    };

    format!("{browser} en {os}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, UserRef};

    fn log(id: i64, email: &str, created: &str, revoke: bool) -> SessionLog {
        SessionLog {
            id,
            user_id: id * 10,
            device_id: Some(format!("dev-{id}")),
            user_agent: None,
            ip: Some("10.0.0.1".into()),
            created_at: created.into(),
            last_used_at: None,
            revoke,
            user: Some(UserRef {
                email: Some(email.into()),
                nickname: None,
            }),
        }
    }

    #[test]
    fn filters_by_status_and_sorts_newest_first() {
        let logs = vec![
            log(1, "ana@x.com", "2024-01-01T10:00:00Z", false),
            log(2, "luis@x.com", "2024-01-03T10:00:00Z", true),
            log(3, "eva@x.com", "2024-01-02T10:00:00Z", false),
        ];
        let active = filter_logs(&logs, "", SessionStatus::Active);
        let ids: Vec<i64> = active.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![3, 1]);

        let revoked = filter_logs(&logs, "", SessionStatus::Revoked);
        assert_eq!(revoked.len(), 1);
    }

    #[test]
    fn search_is_case_insensitive() {
        let logs = vec![
            log(1, "Ana@X.com", "2024-01-01", false),
            log(2, "luis@x.com", "2024-01-02", false),
        ];
        let hits = filter_logs(&logs, "ana@", SessionStatus::All);
        assert_eq!(hits.len(), 1);
        assert_eq!(filter_logs(&logs, "dev-2", SessionStatus::All)[0].id, 2);
        assert_eq!(filter_logs(&logs, "10.0.0", SessionStatus::All).len(), 2);
    }

    #[test]
    fn status_from_query_value() {
        assert_eq!(SessionStatus::parse("active"), SessionStatus::Active);
        assert_eq!(SessionStatus::parse("revoked"), SessionStatus::Revoked);
        assert_eq!(SessionStatus::parse("whatever"), SessionStatus::All);
    }

    #[test]
    fn user_agents_are_summarised() {
        let chrome = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";
        assert_eq!(describe_user_agent(Some(chrome)), "Chrome en Windows");
        let safari = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 Version/17.0 Mobile/15E148 Safari/604.1";
        assert_eq!(describe_user_agent(Some(safari)), "Safari en iOS");
        assert_eq!(describe_user_agent(None), "Desconocido");
    }

    #[test]
    fn user_search_covers_nickname_and_role() {
        let users = vec![
            User {
                id: 1,
                email: "ana@correo.es".into(),
                nickname: "Ana".into(),
                role: Role::User,
            },
            User {
                id: 2,
                email: "root@correo.es".into(),
                nickname: "Jefa".into(),
                role: Role::SuperAdmin,
            },
        ];
        assert_eq!(search_users(&users, "  ").len(), 2);
        assert_eq!(search_users(&users, "JEFA")[0].id, 2);
        assert_eq!(search_users(&users, "administrador")[0].id, 2);
        assert!(search_users(&users, "pepe").is_empty());
    }
}

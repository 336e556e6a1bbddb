//! Access decision made by the route guards.
//!
//! A guard starts in [`GuardPhase::Loading`], asks the backend for the
//! current profile and settles on a [`Verdict`]. The member guard retries
//! once, after a short pause, when the user has just logged in and the
//! session cookies may not be visible yet. The admin guard also requires an
//! admin role.

use crate::error::ApiError;
use crate::models::{Role, User};

pub const MEMBER_LOGIN_PATH: &str = "/login";
pub const ADMIN_LOGIN_PATH: &str = "/admin-login";
pub const MEMBER_HOME_PATH: &str = "/dashboard";
pub const ADMIN_HOME_PATH: &str = "/admin";

/// Session-storage flag set right after a successful login.
pub const JUST_LOGGED_IN_KEY: &str = "justLoggedIn";
/// Wait before the single profile retry.
pub const LOGIN_RETRY_DELAY_MS: u32 = 300;
/// Wait after login before navigating away.
pub const POST_LOGIN_DELAY_MS: u32 = 500;

/// Paths a post-login redirect must never point back to.
const AUTH_PAGES: [&str; 5] = [
    MEMBER_LOGIN_PATH,
    ADMIN_LOGIN_PATH,
    "/registro",
    "/recuperar",
    "/reset",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardKind {
    Member,
    Admin,
}

impl GuardKind {
    pub fn login_path(&self) -> &'static str {
        match self {
            GuardKind::Member => MEMBER_LOGIN_PATH,
            GuardKind::Admin => ADMIN_LOGIN_PATH,
        }
    }

    pub fn home_path(&self) -> &'static str {
        match self {
            GuardKind::Member => MEMBER_HOME_PATH,
            GuardKind::Admin => ADMIN_HOME_PATH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denial {
    Unauthenticated,
    /// Signed in, but the role does not open this area.
    Forbidden { role: Role },
}

impl Denial {
    pub fn notice(&self) -> &'static str {
        match self {
            Denial::Unauthenticated => "Inicia sesión para continuar.",
            Denial::Forbidden { .. } => {
                "No tienes permisos para acceder al panel de administración."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Granted(User),
    Denied(Denial),
}

/// What a guard renders while and after deciding.
#[derive(Debug, Clone, PartialEq)]
pub enum GuardPhase {
    Loading,
    Settled(Verdict),
}

#[allow(async_fn_in_trait)]
pub trait ProfileSource {
    async fn fetch_profile(&self) -> Result<User, ApiError>;
}

#[allow(async_fn_in_trait)]
pub trait Pause {
    async fn pause(&self, millis: u32);
}

/// Decide whether the current session may see a guarded page.
pub async fn check_access<P, S>(
    kind: GuardKind,
    just_logged_in: bool,
    source: &P,
    pause: &S,
) -> Verdict
where
    P: ProfileSource,
    S: Pause,
{
    let mut profile = source.fetch_profile().await;

    if profile.is_err() && kind == GuardKind::Member && just_logged_in {
        tracing::debug!("profile not ready after login, retrying once");
        pause.pause(LOGIN_RETRY_DELAY_MS).await;
        profile = source.fetch_profile().await;
    }

    let user = match profile {
        Ok(user) => user,
        Err(err) => {
            tracing::info!(status = err.status_code(), "guard denied: no session");
            return Verdict::Denied(Denial::Unauthenticated);
        }
    };

    if kind == GuardKind::Admin && !user.role.is_admin() {
        tracing::warn!(user_id = user.id, "guard denied: role {}", user.role.as_str());
        return Verdict::Denied(Denial::Forbidden { role: user.role });
    }

    Verdict::Granted(user)
}

/// Where a signed-in user goes after login: the remembered page when it is
/// a safe in-app path, otherwise the area's home. Only the path survives;
/// any query or fragment is dropped.
pub fn post_login_destination(kind: GuardKind, from: Option<&str>) -> String {
    from.map(str::trim)
        .filter(|path| is_safe_return_path(path))
        .map(|path| path.split(['?', '#']).next().unwrap_or(path).to_string())
        .unwrap_or_else(|| kind.home_path().to_string())
}

fn is_safe_return_path(path: &str) -> bool {
    if !path.starts_with('/') || path.starts_with("//") || path.contains('\\') {
        return false;
    }
    let route = path.split(['?', '#']).next().unwrap_or(path);
    !AUTH_PAGES
        .iter()
        .any(|page| route == *page || route.starts_with(&format!("{page}/")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    struct ScriptedProfile {
        replies: RefCell<VecDeque<Result<User, ApiError>>>,
        calls: Cell<u32>,
    }

    impl ScriptedProfile {
        fn new(replies: Vec<Result<User, ApiError>>) -> Self {
            Self {
                replies: RefCell::new(replies.into()),
                calls: Cell::new(0),
            }
        }
    }

    impl ProfileSource for ScriptedProfile {
        async fn fetch_profile(&self) -> Result<User, ApiError> {
            self.calls.set(self.calls.get() + 1);
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or(Err(ApiError::Network))
        }
    }

    #[derive(Default)]
    struct RecordedPause(RefCell<Vec<u32>>);

    impl Pause for RecordedPause {
        async fn pause(&self, millis: u32) {
            self.0.borrow_mut().push(millis);
        }
    }

    fn user(role: Role) -> User {
        User {
            id: 1,
            email: "ana@example.com".into(),
            nickname: "Ana".into(),
            role,
        }
    }

    fn unauthorized() -> ApiError {
        ApiError::Http {
            status: 401,
            message: None,
        }
    }

    #[tokio::test]
    async fn member_granted_with_profile() {
        let source = ScriptedProfile::new(vec![Ok(user(Role::User))]);
        let pause = RecordedPause::default();
        let verdict = check_access(GuardKind::Member, false, &source, &pause).await;
        assert_eq!(verdict, Verdict::Granted(user(Role::User)));
        assert!(pause.0.borrow().is_empty());
    }

    #[tokio::test]
    async fn rejected_profile_redirects_member_to_login() {
        let source = ScriptedProfile::new(vec![Err(unauthorized())]);
        let pause = RecordedPause::default();
        let verdict = check_access(GuardKind::Member, false, &source, &pause).await;
        assert_eq!(verdict, Verdict::Denied(Denial::Unauthenticated));
        assert_eq!(source.calls.get(), 1);
        assert_eq!(GuardKind::Member.login_path(), "/login");
    }

    #[tokio::test]
    async fn just_logged_in_retries_once_after_pause() {
        let source = ScriptedProfile::new(vec![Err(unauthorized()), Ok(user(Role::User))]);
        let pause = RecordedPause::default();
        let verdict = check_access(GuardKind::Member, true, &source, &pause).await;
        assert_matches!(verdict, Verdict::Granted(_));
        assert_eq!(source.calls.get(), 2);
        assert_eq!(*pause.0.borrow(), vec![LOGIN_RETRY_DELAY_MS]);
    }

    #[tokio::test]
    async fn retry_happens_only_once() {
        let source = ScriptedProfile::new(vec![Err(unauthorized()), Err(unauthorized())]);
        let pause = RecordedPause::default();
        let verdict = check_access(GuardKind::Member, true, &source, &pause).await;
        assert_eq!(verdict, Verdict::Denied(Denial::Unauthenticated));
        assert_eq!(source.calls.get(), 2);
    }

    #[tokio::test]
    async fn admin_guard_rejects_plain_user() {
        let source = ScriptedProfile::new(vec![Ok(user(Role::User))]);
        let pause = RecordedPause::default();
        let verdict = check_access(GuardKind::Admin, false, &source, &pause).await;
        assert_eq!(
            verdict,
            Verdict::Denied(Denial::Forbidden { role: Role::User })
        );
        assert_eq!(GuardKind::Admin.login_path(), "/admin-login");
    }

    #[tokio::test]
    async fn admin_guard_accepts_both_admin_roles() {
        for role in [Role::Admin, Role::SuperAdmin] {
            let source = ScriptedProfile::new(vec![Ok(user(role))]);
            let verdict =
                check_access(GuardKind::Admin, false, &source, &RecordedPause::default()).await;
            assert_eq!(verdict, Verdict::Granted(user(role)));
        }
    }

    #[tokio::test]
    async fn admin_guard_never_retries() {
        let source = ScriptedProfile::new(vec![Err(ApiError::Network), Ok(user(Role::Admin))]);
        let pause = RecordedPause::default();
        let verdict = check_access(GuardKind::Admin, true, &source, &pause).await;
        assert_eq!(verdict, Verdict::Denied(Denial::Unauthenticated));
        assert_eq!(source.calls.get(), 1);
    }

    #[test]
    fn denials_have_distinct_notices() {
        assert_ne!(
            Denial::Unauthenticated.notice(),
            Denial::Forbidden { role: Role::User }.notice()
        );
    }

    #[test]
    fn post_login_destination_honours_safe_paths() {
        assert_eq!(
            post_login_destination(GuardKind::Member, Some("/dashboard/cuentas")),
            "/dashboard/cuentas"
        );
        assert_eq!(
            post_login_destination(GuardKind::Member, Some("/dashboard/transacciones?x=1")),
            "/dashboard/transacciones"
        );
        assert_eq!(
            post_login_destination(GuardKind::Admin, Some("/admin/sesiones#reciente")),
            "/admin/sesiones"
        );
        assert_eq!(post_login_destination(GuardKind::Member, None), "/dashboard");
        assert_eq!(post_login_destination(GuardKind::Admin, None), "/admin");
    }

    #[test]
    fn post_login_destination_rejects_unsafe_paths() {
        let unsafe_paths = [
            "https://evil.example",
            "//evil.example",
            "/login",
            "/reset/abc",
            "",
            "/\\evil",
        ];
        for bad in unsafe_paths {
            assert_eq!(
                post_login_destination(GuardKind::Member, Some(bad)),
                "/dashboard",
                "{bad}"
            );
        }
    }
}

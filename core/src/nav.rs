//! Which navigation bar a page gets.

use crate::guard::GuardKind;

/// Who a page is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    Public,
    /// Auth forms: public, but rendered without the marketing chrome.
    Auth,
    Member,
    Admin,
}

impl Audience {
    /// Guard wrapping pages of this audience, if any.
    pub fn guard(&self) -> Option<GuardKind> {
        match self {
            Audience::Public | Audience::Auth => None,
            Audience::Member => Some(GuardKind::Member),
            Audience::Admin => Some(GuardKind::Admin),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavVariant {
    Landing,
    Dashboard,
    Admin,
    /// No navigation bar.
    Bare,
}

impl From<Audience> for NavVariant {
    fn from(audience: Audience) -> Self {
        match audience {
            Audience::Public => NavVariant::Landing,
            Audience::Auth => NavVariant::Bare,
            Audience::Member => NavVariant::Dashboard,
            Audience::Admin => NavVariant::Admin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audience_picks_nav_and_guard() {
        assert_eq!(NavVariant::from(Audience::Public), NavVariant::Landing);
        assert_eq!(NavVariant::from(Audience::Member), NavVariant::Dashboard);
        assert_eq!(NavVariant::from(Audience::Auth), NavVariant::Bare);
        assert_eq!(Audience::Member.guard(), Some(GuardKind::Member));
        assert_eq!(Audience::Admin.guard(), Some(GuardKind::Admin));
        assert_eq!(Audience::Public.guard(), None);
        assert_eq!(Audience::Auth.guard(), None);
    }
}

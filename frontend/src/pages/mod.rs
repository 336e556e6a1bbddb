mod accounts;
pub mod admin;
mod assistant;
mod auth;
mod calendar;
mod categories;
mod dashboard;
mod landing;
mod legal;
mod not_found;
mod preferences;
mod profile;
mod statistics;
mod tags;
mod transactions;

pub use accounts::AccountsPage;
pub use assistant::AssistantPage;
pub use auth::{AdminLoginPage, LoginPage, RecoverPage, RegisterPage, ResetPasswordPage};
pub use calendar::CalendarPage;
pub use categories::CategoriesPage;
pub use dashboard::DashboardPage;
pub use landing::{AboutPage, ContactPage, FeaturesPage, LandingPage};
pub use legal::{CookiesPage, PrivacyPage, TermsPage};
pub use not_found::NotFoundPage;
pub use preferences::PreferencesPage;
pub use profile::ProfilePage;
pub use statistics::StatisticsPage;
pub use tags::TagsPage;
pub use transactions::TransactionsPage;

use chrono::NaiveDate;

/// Today's date in the browser's time zone.
pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

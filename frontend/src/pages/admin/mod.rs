//! Back-office pages, only reachable through the admin guard.

mod admins;
mod logs;
mod overview;
mod users;

pub use admins::AdminsPage;
pub use logs::LoginLogsPage;
pub use overview::AdminOverviewPage;
pub use users::{UserDetailPage, UsersPage};

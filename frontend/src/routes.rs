use finanzas_core::guard::GuardKind;
use finanzas_core::models::Id;
use finanzas_core::nav::{Audience, NavVariant};
use serde::{Deserialize, Serialize};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::{AdminLayout, DashboardLayout, PublicLayout};
use crate::guards::{AdminProtectedRoute, ProtectedRoute};
use crate::pages::admin::{AdminOverviewPage, AdminsPage, LoginLogsPage, UserDetailPage, UsersPage};
use crate::pages::{
    AboutPage, AccountsPage, AdminLoginPage, AssistantPage, CalendarPage, CategoriesPage,
    ContactPage, CookiesPage, DashboardPage, FeaturesPage, LandingPage, LoginPage, NotFoundPage,
    PreferencesPage, PrivacyPage, ProfilePage, RecoverPage, RegisterPage, ResetPasswordPage,
    StatisticsPage, TagsPage, TermsPage, TransactionsPage,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Landing,
    #[at("/caracteristicas")]
    Features,
    #[at("/nosotros")]
    About,
    #[at("/contacto")]
    Contact,
    #[at("/privacidad")]
    Privacy,
    #[at("/terminos")]
    Terms,
    #[at("/cookies")]
    Cookies,

    #[at("/login")]
    Login,
    #[at("/registro")]
    Register,
    #[at("/recuperar")]
    Recover,
    #[at("/reset/:token")]
    ResetPassword { token: String },
    #[at("/admin-login")]
    AdminLogin,

    #[at("/dashboard")]
    Dashboard,
    #[at("/dashboard/transacciones")]
    Transactions,
    #[at("/dashboard/cuentas")]
    Accounts,
    #[at("/dashboard/categorias")]
    Categories,
    #[at("/dashboard/etiquetas")]
    Tags,
    #[at("/dashboard/estadisticas")]
    Statistics,
    #[at("/dashboard/calendario")]
    Calendar,
    #[at("/dashboard/perfil")]
    Profile,
    #[at("/dashboard/ajustes")]
    Preferences,
    #[at("/dashboard/asistente")]
    Assistant,

    #[at("/admin")]
    AdminOverview,
    #[at("/admin/usuarios")]
    AdminUsers,
    #[at("/admin/usuarios/:id")]
    AdminUserDetail { id: Id },
    #[at("/admin/administradores")]
    AdminAdmins,
    #[at("/admin/sesiones")]
    AdminLogs,

    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn audience(&self) -> Audience {
        match self {
            Route::Landing
            | Route::Features
            | Route::About
            | Route::Contact
            | Route::Privacy
            | Route::Terms
            | Route::Cookies
            | Route::NotFound => Audience::Public,
            Route::Login
            | Route::Register
            | Route::Recover
            | Route::ResetPassword { .. }
            | Route::AdminLogin => Audience::Auth,
            Route::Dashboard
            | Route::Transactions
            | Route::Accounts
            | Route::Categories
            | Route::Tags
            | Route::Statistics
            | Route::Calendar
            | Route::Profile
            | Route::Preferences
            | Route::Assistant => Audience::Member,
            Route::AdminOverview
            | Route::AdminUsers
            | Route::AdminUserDetail { .. }
            | Route::AdminAdmins
            | Route::AdminLogs => Audience::Admin,
        }
    }

    pub fn nav(&self) -> NavVariant {
        NavVariant::from(self.audience())
    }
}

/// Query carried to the login pages so the user lands back where they were.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReturnTo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

pub fn switch(route: Route) -> Html {
    let page = match &route {
        Route::Landing => html! { <LandingPage /> },
        Route::Features => html! { <FeaturesPage /> },
        Route::About => html! { <AboutPage /> },
        Route::Contact => html! { <ContactPage /> },
        Route::Privacy => html! { <PrivacyPage /> },
        Route::Terms => html! { <TermsPage /> },
        Route::Cookies => html! { <CookiesPage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Register => html! { <RegisterPage /> },
        Route::Recover => html! { <RecoverPage /> },
        Route::ResetPassword { token } => html! { <ResetPasswordPage token={token.clone()} /> },
        Route::AdminLogin => html! { <AdminLoginPage /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Transactions => html! { <TransactionsPage /> },
        Route::Accounts => html! { <AccountsPage /> },
        Route::Categories => html! { <CategoriesPage /> },
        Route::Tags => html! { <TagsPage /> },
        Route::Statistics => html! { <StatisticsPage /> },
        Route::Calendar => html! { <CalendarPage /> },
        Route::Profile => html! { <ProfilePage /> },
        Route::Preferences => html! { <PreferencesPage /> },
        Route::Assistant => html! { <AssistantPage /> },
        Route::AdminOverview => html! { <AdminOverviewPage /> },
        Route::AdminUsers => html! { <UsersPage /> },
        Route::AdminUserDetail { id } => html! { <UserDetailPage id={*id} /> },
        Route::AdminAdmins => html! { <AdminsPage /> },
        Route::AdminLogs => html! { <LoginLogsPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    };

    let framed = match route.nav() {
        NavVariant::Landing => html! { <PublicLayout>{ page }</PublicLayout> },
        NavVariant::Bare => page,
        NavVariant::Dashboard => html! { <DashboardLayout>{ page }</DashboardLayout> },
        NavVariant::Admin => html! { <AdminLayout>{ page }</AdminLayout> },
    };

    match route.audience().guard() {
        None => framed,
        Some(GuardKind::Member) => html! { <ProtectedRoute>{ framed }</ProtectedRoute> },
        Some(GuardKind::Admin) => html! { <AdminProtectedRoute>{ framed }</AdminProtectedRoute> },
    }
}

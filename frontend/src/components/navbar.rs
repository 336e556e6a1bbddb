//! Navigation chrome. The variant is picked per route from its audience, so
//! landing pages get the marketing bar and dashboard/admin pages a sidebar.

use finanzas_core::error::AuthFlow;
use finanzas_core::nav::NavVariant;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::ApiClient;
use crate::components::icons::{icon, Icon};
use crate::guards::use_current_user;
use crate::routes::Route;
use crate::storage::clear_token;
use crate::toast::use_toast;

struct NavEntry {
    label: &'static str,
    route: Route,
    icon: Icon,
}

fn dashboard_entries() -> Vec<NavEntry> {
    vec![
        NavEntry { label: "Resumen", route: Route::Dashboard, icon: Icon::Grid },
        NavEntry { label: "Transacciones", route: Route::Transactions, icon: Icon::Card },
        NavEntry { label: "Cuentas", route: Route::Accounts, icon: Icon::Wallet },
        NavEntry { label: "Categorías", route: Route::Categories, icon: Icon::Folder },
        NavEntry { label: "Etiquetas", route: Route::Tags, icon: Icon::Tag },
        NavEntry { label: "Estadísticas", route: Route::Statistics, icon: Icon::Chart },
        NavEntry { label: "Calendario", route: Route::Calendar, icon: Icon::Calendar },
        NavEntry { label: "Asistente", route: Route::Assistant, icon: Icon::Chat },
        NavEntry { label: "Perfil", route: Route::Profile, icon: Icon::User },
        NavEntry { label: "Ajustes", route: Route::Preferences, icon: Icon::Settings },
    ]
}

fn admin_entries() -> Vec<NavEntry> {
    vec![
        NavEntry { label: "Panel", route: Route::AdminOverview, icon: Icon::Grid },
        NavEntry { label: "Usuarios", route: Route::AdminUsers, icon: Icon::Users },
        NavEntry { label: "Administradores", route: Route::AdminAdmins, icon: Icon::Shield },
        NavEntry { label: "Sesiones", route: Route::AdminLogs, icon: Icon::Clock },
    ]
}

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub variant: NavVariant,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    match props.variant {
        NavVariant::Landing => html! { <LandingNav /> },
        NavVariant::Dashboard => html! { <Sidebar admin={false} /> },
        NavVariant::Admin => html! { <Sidebar admin={true} /> },
        NavVariant::Bare => html! {},
    }
}

#[function_component(LandingNav)]
fn landing_nav() -> Html {
    let open = use_state(|| false);
    let toggle = {
        let open = open.clone();
        Callback::from(move |_| open.set(!*open))
    };

    let links = [
        ("Inicio", Route::Landing),
        ("Características", Route::Features),
        ("Nosotros", Route::About),
        ("Contacto", Route::Contact),
    ];

    html! {
        <header class="sticky top-0 z-40 bg-white/90 backdrop-blur border-b border-slate-200">
            <div class="max-w-7xl mx-auto px-6 h-16 flex items-center justify-between">
                <Link<Route> to={Route::Landing} classes="flex items-center gap-2">
                    <span class="w-9 h-9 rounded-full bg-[#173E63] text-white flex items-center justify-center">{ icon(Icon::Wallet) }</span>
                    <span class="text-[#173E63] text-xl font-black tracking-tight">{"Finanzas"}</span>
                </Link<Route>>
                <nav class="hidden md:flex items-center gap-6 text-sm font-medium text-slate-600">
                    { for links.iter().map(|(label, route)| html! {
                        <Link<Route> to={route.clone()} classes="hover:text-[#173E63]">{ *label }</Link<Route>>
                    }) }
                </nav>
                <div class="hidden md:flex items-center gap-3">
                    <Link<Route> to={Route::Login} classes="text-sm font-bold text-[#173E63] px-4 py-2">{"Iniciar sesión"}</Link<Route>>
                    <Link<Route> to={Route::Register} classes="text-sm font-bold bg-[#173E63] text-white px-4 py-2 rounded-[10px]">{"Crear cuenta"}</Link<Route>>
                </div>
                <button class="md:hidden p-2 text-[#173E63]" aria-label="Menú" onclick={toggle}>{ icon(Icon::Grid) }</button>
            </div>
            if *open {
                <nav class="md:hidden border-t border-slate-200 px-6 py-3 flex flex-col gap-3 text-sm font-medium text-slate-600">
                    { for links.iter().map(|(label, route)| html! {
                        <Link<Route> to={route.clone()}>{ *label }</Link<Route>>
                    }) }
                    <Link<Route> to={Route::Login}>{"Iniciar sesión"}</Link<Route>>
                    <Link<Route> to={Route::Register}>{"Crear cuenta"}</Link<Route>>
                </nav>
            }
        </header>
    }
}

#[derive(Properties, PartialEq)]
struct SidebarProps {
    admin: bool,
}

#[function_component(Sidebar)]
fn sidebar(props: &SidebarProps) -> Html {
    let current = use_route::<Route>();
    let navigator = use_navigator();
    let toaster = use_toast();
    let user = use_current_user();
    let admin = props.admin;

    let entries = if admin { admin_entries() } else { dashboard_entries() };

    let on_logout = Callback::from(move |_| {
        let navigator = navigator.clone();
        let toaster = toaster.clone();
        spawn_local(async move {
            match ApiClient::with_cookies().logout().await {
                // 401: the session was already gone.
                Err(err) if !err.is_unauthorized() => {
                    tracing::warn!("logout failed: {}", err);
                    toaster.error(AuthFlow::Logout.message_for(&err));
                }
                _ => {
                    clear_token();
                    toaster.clear();
                    toaster.success("Sesión cerrada.");
                    if let Some(navigator) = navigator {
                        navigator.push(&if admin { Route::AdminLogin } else { Route::Login });
                    }
                }
            }
        });
    });

    html! {
        <div class="w-[230px] h-screen bg-[#D8E1E8] p-4 flex flex-col">
            <div class="flex items-center gap-3 px-2 mb-6">
                <div class="w-11 h-11 bg-[#173E63] rounded-full flex items-center justify-center text-white">
                    { icon(if admin { Icon::Shield } else { Icon::Wallet }) }
                </div>
                <div class="flex flex-col">
                    <span class="text-[#173E63] text-xl font-black tracking-tight">{"Finanzas"}</span>
                    if admin {
                        <span class="text-[10px] font-bold uppercase tracking-widest text-slate-500">{"Administración"}</span>
                    }
                </div>
            </div>

            <div class="flex-1 bg-[#173E63] rounded-[24px] flex flex-col py-6 px-3 shadow-lg overflow-y-auto">
                <nav class="flex-1 space-y-1">
                    { for entries.into_iter().map(|entry| {
                        let active = current.as_ref() == Some(&entry.route);
                        let class_name = if active {
                            "flex items-center gap-3 px-4 py-2.5 rounded-xl text-[13px] font-medium bg-[#B2CBDE] text-[#173E63] w-full"
                        } else {
                            "flex items-center gap-3 px-4 py-2.5 rounded-xl text-[13px] font-medium text-slate-300 hover:bg-white/5 hover:text-white w-full"
                        };
                        html! {
                            <Link<Route> to={entry.route} classes={class_name}>
                                <span class="shrink-0">{ icon(entry.icon) }</span>
                                <span class="truncate">{ entry.label }</span>
                            </Link<Route>>
                        }
                    }) }
                </nav>

                <div class="mt-auto pt-4 border-t border-white/10">
                    if let Some(user) = user {
                        <div class="px-4 pb-3">
                            <p class="text-[13px] font-bold text-white truncate">{ user.display_name().to_string() }</p>
                            <p class="text-[11px] text-slate-400">{ user.role.label() }</p>
                        </div>
                    }
                    <button onclick={on_logout} class="flex items-center gap-3 w-full px-4 py-3 rounded-xl hover:bg-white/10 transition-colors text-[13px] font-medium text-slate-300">
                        { icon(Icon::LogOut) }
                        <span>{"Cerrar sesión"}</span>
                    </button>
                </div>
            </div>
        </div>
    }
}

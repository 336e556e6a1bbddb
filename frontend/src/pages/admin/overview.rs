use finanzas_core::models::{OverviewStats, PasswordResetStats};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::ApiClient;
use crate::components::icons::{icon, Icon};
use crate::components::layout::{card, loading_row, page_shell, StatCard};
use crate::routes::Route;
use crate::toast::use_toast;

#[function_component(AdminOverviewPage)]
pub fn admin_overview_page() -> Html {
    let toaster = use_toast();
    let overview = use_state(|| None::<OverviewStats>);
    let resets = use_state(|| None::<PasswordResetStats>);

    {
        let overview = overview.clone();
        let resets = resets.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    let client = ApiClient::with_cookies();
                    match client.overview_stats().await {
                        Ok(stats) => overview.set(Some(stats)),
                        Err(err) => {
                            toaster.api_error(&err);
                            overview.set(Some(OverviewStats::default()));
                        }
                    }
                    match client.password_reset_stats().await {
                        Ok(stats) => resets.set(Some(stats)),
                        Err(err) => {
                            tracing::warn!("password reset stats unavailable: {}", err);
                            resets.set(Some(PasswordResetStats::default()));
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    let shortcuts = [
        (Route::AdminUsers, Icon::Users, "Gestionar usuarios"),
        (Route::AdminAdmins, Icon::Shield, "Administradores"),
        (Route::AdminLogs, Icon::Clock, "Historial de sesiones"),
    ];

    let body = match (&*overview, &*resets) {
        (Some(stats), Some(resets)) => html! {
            <>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
                    <StatCard title="Usuarios" value={stats.total_users.to_string()} icon={Icon::Users}
                        hint={format!("{} nuevos este mes", stats.new_users_this_month)} />
                    <StatCard title="Administradores" value={stats.total_admins.to_string()} icon={Icon::Shield} />
                    <StatCard title="Sesiones activas" value={stats.active_sessions.to_string()} icon={Icon::Clock} />
                    <StatCard title="Cuentas" value={stats.total_accounts.to_string()} icon={Icon::Card} />
                    <StatCard title="Transacciones" value={stats.total_transactions.to_string()} icon={Icon::Chart} />
                    <StatCard title="Recuperaciones pendientes" value={resets.pending.to_string()} icon={Icon::Key}
                        tone="text-amber-600"
                        hint={format!("{} completadas · {} caducadas · {} en total", resets.completed, resets.expired, resets.total)} />
                </div>
                { card(Some("Accesos rápidos"), html! {
                    <div class="grid grid-cols-1 sm:grid-cols-3 gap-3">
                        { for shortcuts.into_iter().map(|(route, kind, label)| html! {
                            <Link<Route> to={route} classes="flex items-center gap-3 p-4 rounded-[10px] border border-slate-200 hover:border-[#B2CBDE] text-[#173E63] font-bold text-sm">
                                { icon(kind) }{ label }
                            </Link<Route>>
                        }) }
                    </div>
                }) }
            </>
        },
        _ => loading_row("Cargando métricas..."),
    };

    page_shell("Panel de administración", html! {}, body)
}

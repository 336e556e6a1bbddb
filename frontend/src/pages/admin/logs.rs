use finanzas_core::format::format_timestamp;
use finanzas_core::models::SessionLog;
use finanzas_core::sessions::{describe_user_agent, filter_logs, SessionStatus};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::form::{bind, SelectField, TextField};
use crate::components::layout::{card, loading_row, page_shell};
use crate::toast::use_toast;

fn status_value(status: SessionStatus) -> &'static str {
    match status {
        SessionStatus::All => "all",
        SessionStatus::Active => "active",
        SessionStatus::Revoked => "revoked",
    }
}

fn log_row(log: &SessionLog) -> Html {
    let who = log
        .user
        .as_ref()
        .and_then(|u| u.email.clone().or_else(|| u.nickname.clone()))
        .unwrap_or_else(|| format!("Usuario #{}", log.user_id));
    let (badge, tone) = if log.revoke {
        ("Revocada", "bg-rose-50 text-rose-600")
    } else {
        ("Activa", "bg-emerald-50 text-emerald-700")
    };
    html! {
        <tr key={log.id}>
            <td class="py-3 font-medium text-[#173E63]">{ who }</td>
            <td class="py-3 text-slate-500">{ describe_user_agent(log.user_agent.as_deref()) }</td>
            <td class="py-3 text-slate-500 font-mono text-xs">{ log.ip.clone().unwrap_or_else(|| "-".to_string()) }</td>
            <td class="py-3 text-slate-500">{ format_timestamp(&log.created_at) }</td>
            <td class="py-3 text-slate-500">{ log.last_used_at.as_deref().map(format_timestamp).unwrap_or_else(|| "-".to_string()) }</td>
            <td class="py-3">
                <span class={classes!("px-2", "py-0.5", "rounded-full", "text-[10px]", "font-bold", "uppercase", tone)}>{ badge }</span>
            </td>
        </tr>
    }
}

#[function_component(LoginLogsPage)]
pub fn login_logs_page() -> Html {
    let toaster = use_toast();
    let logs = use_state(Vec::<SessionLog>::new);
    let loading = use_state(|| true);
    let query = use_state(String::new);
    let status = use_state(SessionStatus::default);

    {
        let logs = logs.clone();
        let loading = loading.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match ApiClient::with_cookies().login_logs().await {
                        Ok(list) => logs.set(list),
                        Err(err) => toaster.api_error(&err),
                    }
                    loading.set(false);
                });
                || ()
            },
            (),
        );
    }

    let on_status = {
        let status = status.clone();
        Callback::from(move |value: String| status.set(SessionStatus::parse(&value)))
    };
    let status_options = [SessionStatus::All, SessionStatus::Active, SessionStatus::Revoked]
        .into_iter()
        .map(|s| {
            let label = match s {
                SessionStatus::All => "Todas",
                SessionStatus::Active => "Activas",
                SessionStatus::Revoked => "Revocadas",
            };
            (status_value(s).to_string(), label.to_string())
        })
        .collect::<Vec<_>>();

    let visible = filter_logs(&logs, &query, *status);
    let table = if *loading {
        loading_row("Cargando sesiones...")
    } else if visible.is_empty() {
        loading_row("No hay sesiones que coincidan.")
    } else {
        html! {
            <div class="overflow-x-auto">
                <table class="w-full text-left text-sm">
                    <thead>
                        <tr class="text-slate-500 text-[10px] uppercase tracking-widest">
                            <th class="py-2 font-bold">{"Usuario"}</th>
                            <th class="py-2 font-bold">{"Dispositivo"}</th>
                            <th class="py-2 font-bold">{"IP"}</th>
                            <th class="py-2 font-bold">{"Inicio"}</th>
                            <th class="py-2 font-bold">{"Último uso"}</th>
                            <th class="py-2 font-bold">{"Estado"}</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-slate-100">
                        { for visible.iter().map(log_row) }
                    </tbody>
                </table>
            </div>
        }
    };

    page_shell(
        "Historial de sesiones",
        html! {
            <div class="flex gap-3">
                <div class="w-64">
                    <TextField label="Buscar" placeholder="Correo, IP o dispositivo" value={(*query).clone()} on_input={bind(&query)} />
                </div>
                <div class="w-40">
                    <SelectField label="Estado" value={status_value(*status)} options={status_options} on_change={on_status} />
                </div>
            </div>
        },
        card(Some(&format!("{} de {} sesiones", visible.len(), logs.len())), table),
    )
}

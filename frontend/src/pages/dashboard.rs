use finanzas_core::endpoints::TransactionFilter;
use finanzas_core::format::{format_percent, format_raw_date, format_signed};
use finanzas_core::models::{Account, Transaction};
use finanzas_core::stats::{dashboard_summary, savings_rate};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::ApiClient;
use crate::components::icons::{icon, Icon};
use crate::components::layout::{card, loading_row, page_shell, StatCard};
use crate::pages::today;
use crate::routes::Route;
use crate::settings::use_settings;
use crate::toast::use_toast;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let settings = use_settings();
    let toaster = use_toast();
    let accounts = use_state(Vec::<Account>::new);
    let transactions = use_state(Vec::<Transaction>::new);
    let loading = use_state(|| true);

    {
        let accounts = accounts.clone();
        let transactions = transactions.clone();
        let loading = loading.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    let client = ApiClient::with_cookies();
                    match client.accounts(None).await {
                        Ok(list) => accounts.set(list),
                        Err(err) => toaster.api_error(&err),
                    }
                    match client.transactions(&TransactionFilter::default()).await {
                        Ok(list) => transactions.set(list),
                        Err(err) => toaster.api_error(&err),
                    }
                    loading.set(false);
                });
                || ()
            },
            (),
        );
    }

    let summary = dashboard_summary(&accounts, &transactions, today());
    let symbol = settings.currency_symbol.clone();

    let recent = if *loading {
        loading_row("Cargando...")
    } else if summary.recent.is_empty() {
        html! {
            <div class="py-6 text-center text-sm text-slate-400">
                {"Aún no has registrado movimientos. "}
                <Link<Route> to={Route::Transactions} classes="font-bold text-[#173E63]">{"Añade el primero"}</Link<Route>>
            </div>
        }
    } else {
        html! {
            <ul class="divide-y divide-slate-100">
                { for summary.recent.iter().map(|tx| {
                    let tone = if tx.is_income { "text-emerald-600" } else { "text-rose-600" };
                    html! {
                        <li key={tx.id} class="flex items-center justify-between py-3 text-sm">
                            <div>
                                <p class="font-medium text-[#173E63]">{ tx.description.clone().unwrap_or_else(|| "Sin descripción".to_string()) }</p>
                                <p class="text-xs text-slate-400">
                                    { format_raw_date(&tx.transaction_date) }
                                    if let Some(tag) = tx.tag_name() {
                                        <span class="ml-2 bg-[#D8E1E8] text-[#173E63] px-2 py-0.5 rounded-full text-[10px] font-bold">{ tag.to_string() }</span>
                                    }
                                </p>
                            </div>
                            <span class={classes!("font-semibold", tone)}>{ format_signed(tx.amount, tx.is_income, &symbol) }</span>
                        </li>
                    }
                }) }
            </ul>
        }
    };

    let account_list = if accounts.is_empty() {
        html! {
            <div class="py-6 text-center text-sm text-slate-400">
                {"Todavía no tienes cuentas. "}
                <Link<Route> to={Route::Accounts} classes="font-bold text-[#173E63]">{"Crear cuenta"}</Link<Route>>
            </div>
        }
    } else {
        html! {
            <ul class="space-y-3">
                { for accounts.iter().map(|account| html! {
                    <li key={account.id} class="flex items-center justify-between text-sm">
                        <span class="flex items-center gap-2 text-slate-600">{ icon(Icon::Wallet) }{ account.name.clone() }</span>
                        <span class="font-semibold text-[#173E63]">{ settings.money(account.money) }</span>
                    </li>
                }) }
            </ul>
        }
    };

    page_shell(
        "Resumen",
        html! {
            <Link<Route> to={Route::Transactions} classes="flex items-center gap-2 bg-[#173E63] text-white px-4 py-2 rounded-[10px] text-xs font-bold">
                { icon(Icon::Plus) }{"Nueva transacción"}
            </Link<Route>>
        },
        html! {
            <>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4">
                    <StatCard title="Saldo total" value={settings.money(summary.balance)} icon={Icon::Wallet} />
                    <StatCard title="Ingresos del mes" value={settings.money(summary.month.income)} icon={Icon::TrendingUp} tone="text-emerald-600" />
                    <StatCard title="Gastos del mes" value={settings.money(summary.month.expenses)} icon={Icon::TrendingDown} tone="text-rose-600" />
                    <StatCard title="Tasa de ahorro" value={format_percent(savings_rate(&summary.month))} icon={Icon::Chart}
                        hint={format!("{} movimientos este mes", summary.month.count)} />
                </div>
                <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                    <div class="lg:col-span-2">{ card(Some("Últimos movimientos"), recent) }</div>
                    { card(Some("Cuentas"), account_list) }
                </div>
            </>
        },
    )
}

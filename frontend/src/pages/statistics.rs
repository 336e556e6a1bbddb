use finanzas_core::calendar::YearMonth;
use finanzas_core::endpoints::TransactionFilter;
use finanzas_core::format::{format_change, format_percent};
use finanzas_core::models::Transaction;
use finanzas_core::stats::{
    category_breakdown, income_expense_ratio, monthly_trend, period_comparison, savings_rate,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::charts::{BreakdownChart, TrendChart};
use crate::components::form::SelectField;
use crate::components::icons::Icon;
use crate::components::layout::{card, loading_row, page_shell, StatCard};
use crate::pages::today;
use crate::settings::use_settings;
use crate::toast::use_toast;

#[derive(Clone, Copy, PartialEq)]
enum Scope {
    ThisMonth,
    AllTime,
}

fn change_tone(change: f64, higher_is_good: bool) -> &'static str {
    match (change > 0.0, change < 0.0, higher_is_good) {
        (true, _, true) | (_, true, false) => "text-emerald-600",
        (true, _, false) | (_, true, true) => "text-rose-600",
        _ => "text-slate-400",
    }
}

#[function_component(StatisticsPage)]
pub fn statistics_page() -> Html {
    let settings = use_settings();
    let toaster = use_toast();
    let transactions = use_state(Vec::<Transaction>::new);
    let loading = use_state(|| true);
    let scope = use_state(|| Scope::ThisMonth);

    {
        let transactions = transactions.clone();
        let loading = loading.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match ApiClient::with_cookies()
                        .transactions(&TransactionFilter::default())
                        .await
                    {
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

    let on_scope = {
        let scope = scope.clone();
        Callback::from(move |value: String| {
            scope.set(if value == "all" { Scope::AllTime } else { Scope::ThisMonth });
        })
    };

    if *loading {
        return page_shell("Estadísticas", html! {}, loading_row("Calculando estadísticas..."));
    }

    let now = today();
    let month = YearMonth::of(now);
    let comparison = period_comparison(&transactions, now);
    let trend = monthly_trend(&transactions, now);
    let scoped: Vec<Transaction> = match *scope {
        Scope::ThisMonth => transactions
            .iter()
            .filter(|tx| tx.date().map(|d| month.contains(d)).unwrap_or(false))
            .cloned()
            .collect(),
        Scope::AllTime => (*transactions).clone(),
    };
    let breakdown = category_breakdown(&scoped);
    let symbol = settings.currency_symbol.clone();
    let current = comparison.current;

    let ratio_hint = match income_expense_ratio(&current) {
        Some(ratio) => format!("{ratio:.2} {symbol} ingresados por cada {symbol} gastado"),
        None => "Sin gastos este mes".to_string(),
    };

    let previous = comparison.previous;
    let comparison_rows = [
        (
            "Ingresos",
            settings.money(current.income),
            settings.money(previous.income),
            comparison.income_change,
            true,
        ),
        (
            "Gastos",
            settings.money(current.expenses),
            settings.money(previous.expenses),
            comparison.expense_change,
            false,
        ),
        (
            "Movimientos",
            current.count.to_string(),
            previous.count.to_string(),
            comparison.count_change,
            true,
        ),
    ];

    page_shell(
        "Estadísticas",
        html! {
            <div class="w-48">
                <SelectField label="Periodo del desglose"
                    value={if *scope == Scope::AllTime { "all" } else { "month" }}
                    options={vec![
                        ("month".to_string(), "Este mes".to_string()),
                        ("all".to_string(), "Todo".to_string()),
                    ]}
                    on_change={on_scope} />
            </div>
        },
        html! {
            <>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4">
                    <StatCard title="Ingresos del mes" value={settings.money(current.income)} icon={Icon::TrendingUp}
                        tone="text-emerald-600" hint={format!("{} vs. mes anterior", format_change(comparison.income_change))} />
                    <StatCard title="Gastos del mes" value={settings.money(current.expenses)} icon={Icon::TrendingDown}
                        tone="text-rose-600" hint={format!("{} vs. mes anterior", format_change(comparison.expense_change))} />
                    <StatCard title="Balance del mes" value={settings.money(current.net())} icon={Icon::Wallet} />
                    <StatCard title="Tasa de ahorro" value={format_percent(savings_rate(&current))} icon={Icon::Chart}
                        hint={ratio_hint} />
                </div>
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                    { card(Some("Gastos por categoría"), html! {
                        <BreakdownChart slices={breakdown.clone()} symbol={symbol.clone()} />
                    }) }
                    { card(Some("Últimos seis meses"), html! {
                        <TrendChart months={trend} symbol={symbol.clone()} />
                    }) }
                </div>
                { card(Some("Principales etiquetas de gasto"), if breakdown.is_empty() {
                    loading_row("Sin gastos en este periodo.")
                } else {
                    html! {
                        <table class="w-full text-left text-sm">
                            <tbody class="divide-y divide-slate-100">
                                { for breakdown.iter().enumerate().map(|(rank, slice)| html! {
                                    <tr>
                                        <td class="py-2 w-8 text-slate-400 font-bold">{ (rank + 1).to_string() }</td>
                                        <td class="py-2 font-medium text-[#173E63]">{ slice.name.clone() }</td>
                                        <td class="py-2 text-right">{ settings.money(slice.amount) }</td>
                                        <td class="py-2 w-20 text-right text-slate-500">{ format_percent(slice.percentage) }</td>
                                    </tr>
                                }) }
                            </tbody>
                        </table>
                    }
                }) }
                { card(Some(&format!("{} frente a {}", month.title(), month.previous().title())), html! {
                    <table class="w-full text-left text-sm">
                        <thead>
                            <tr class="text-slate-500 text-[10px] uppercase tracking-widest">
                                <th class="py-2 font-bold"></th>
                                <th class="py-2 font-bold">{"Este mes"}</th>
                                <th class="py-2 font-bold">{"Mes anterior"}</th>
                                <th class="py-2 font-bold">{"Variación"}</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-slate-100">
                            { for comparison_rows.into_iter().map(|(label, now, before, change, higher_is_good)| html! {
                                <tr>
                                    <td class="py-3 font-medium text-[#173E63]">{ label }</td>
                                    <td class="py-3">{ now }</td>
                                    <td class="py-3 text-slate-500">{ before }</td>
                                    <td class={classes!("py-3", "font-semibold", change_tone(change, higher_is_good))}>{ format_change(change) }</td>
                                </tr>
                            }) }
                        </tbody>
                    </table>
                }) }
            </>
        },
    )
}

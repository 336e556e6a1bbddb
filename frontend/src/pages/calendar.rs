use chrono::NaiveDate;
use finanzas_core::calendar::{daily_totals, is_weekend, month_grid, transactions_on, YearMonth};
use finanzas_core::endpoints::{FlowKind, TransactionFilter};
use finanzas_core::format::{format_date, format_signed, WEEKDAY_SHORT};
use finanzas_core::models::Transaction;
use finanzas_core::stats::totals_in;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::icons::{icon, Icon};
use crate::components::layout::{card, loading_row, page_shell, StatCard};
use crate::pages::today;
use crate::settings::use_settings;
use crate::toast::use_toast;

fn month_filter(month: YearMonth) -> TransactionFilter {
    TransactionFilter {
        start_date: Some(month.first_day()),
        end_date: Some(month.last_day()),
        ..TransactionFilter::default()
    }
}

#[function_component(CalendarPage)]
pub fn calendar_page() -> Html {
    let settings = use_settings();
    let toaster = use_toast();
    let month = use_state(|| YearMonth::of(today()));
    let transactions = use_state(Vec::<Transaction>::new);
    let loading = use_state(|| true);
    let selected = use_state(|| None::<NaiveDate>);

    {
        let transactions = transactions.clone();
        let loading = loading.clone();
        let toaster = toaster.clone();
        use_effect_with_deps(
            move |month: &YearMonth| {
                let filter = month_filter(*month);
                loading.set(true);
                spawn_local(async move {
                    match ApiClient::with_cookies().transactions(&filter).await {
                        Ok(list) => transactions.set(list),
                        Err(err) => toaster.api_error(&err),
                    }
                    loading.set(false);
                });
                || ()
            },
            *month,
        );
    }

    let shift = |delta: i32| {
        let month = month.clone();
        let selected = selected.clone();
        Callback::from(move |_| {
            month.set(month.shift(delta));
            selected.set(None);
        })
    };
    let go_today = {
        let month = month.clone();
        let selected = selected.clone();
        Callback::from(move |_| {
            let now = today();
            month.set(YearMonth::of(now));
            selected.set(Some(now));
        })
    };

    let current = *month;
    let days = daily_totals(&transactions, current);
    let sums = totals_in(&transactions, current);
    let symbol = settings.currency_symbol.clone();
    let now = today();

    let grid = html! {
        <div>
            <div class="grid grid-cols-7 gap-2 mb-2">
                { for WEEKDAY_SHORT.iter().map(|day| html! {
                    <div class="text-center text-[10px] font-bold uppercase tracking-widest text-slate-400">{ *day }</div>
                }) }
            </div>
            { for month_grid(current).into_iter().map(|week| html! {
                <div class="grid grid-cols-7 gap-2 mb-2">
                    { for week.into_iter().map(|cell| match cell {
                        None => html! { <div class="h-20"></div> },
                        Some(day) => {
                            let Some(date) = current.day(day) else {
                                return html! { <div class="h-20"></div> };
                            };
                            let totals = days.get(&day).copied().unwrap_or_default();
                            let is_selected = *selected == Some(date);
                            let base = if is_selected {
                                "border-[#173E63] bg-[#D8E1E8]"
                            } else if is_weekend(date) {
                                "border-slate-100 bg-slate-50 hover:border-[#B2CBDE]"
                            } else {
                                "border-slate-100 bg-white hover:border-[#B2CBDE]"
                            };
                            let onclick = {
                                let selected = selected.clone();
                                Callback::from(move |_| selected.set(Some(date)))
                            };
                            html! {
                                <button {onclick} class={classes!("h-20", "rounded-xl", "border", "p-2", "text-left", "flex", "flex-col", "justify-between", base)}>
                                    <span class={classes!("text-xs", "font-bold", if date == now { "text-[#1D617A] underline" } else { "text-slate-600" })}>{ day.to_string() }</span>
                                    if totals.count > 0 {
                                        <span class="text-[10px] leading-tight">
                                            if totals.income > 0.0 {
                                                <span class="block text-emerald-600">{ format!("+{:.0}", totals.income) }</span>
                                            }
                                            if totals.expenses > 0.0 {
                                                <span class="block text-rose-600">{ format!("-{:.0}", totals.expenses) }</span>
                                            }
                                        </span>
                                    }
                                </button>
                            }
                        }
                    }) }
                </div>
            }) }
        </div>
    };

    page_shell(
        "Calendario",
        html! {
            <div class="flex items-center gap-2">
                <button onclick={shift(-1)} aria-label="Mes anterior" class="p-2 rounded-lg bg-white border border-slate-200 text-[#173E63]">{ icon(Icon::ChevronLeft) }</button>
                <span class="w-40 text-center font-bold text-[#173E63]">{ current.title() }</span>
                <button onclick={shift(1)} aria-label="Mes siguiente" class="p-2 rounded-lg bg-white border border-slate-200 text-[#173E63]">{ icon(Icon::ChevronRight) }</button>
                <button onclick={go_today} class="ml-2 bg-[#B2CBDE] text-[#173E63] px-3 py-2 rounded-[10px] text-xs font-bold">{"Hoy"}</button>
            </div>
        },
        html! {
            <>
                <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
                    <StatCard title="Ingresos" value={settings.money(sums.income)} icon={Icon::TrendingUp} tone="text-emerald-600" />
                    <StatCard title="Gastos" value={settings.money(sums.expenses)} icon={Icon::TrendingDown} tone="text-rose-600" />
                    <StatCard title="Días con movimientos" value={days.len().to_string()} icon={Icon::Calendar} />
                </div>
                <div class="grid grid-cols-1 xl:grid-cols-3 gap-6">
                    <div class="xl:col-span-2">
                        { card(None, if *loading { loading_row("Cargando mes...") } else { grid }) }
                    </div>
                    if let Some(date) = *selected {
                        <DayDetail date={date} month_transactions={(*transactions).clone()} symbol={symbol} />
                    } else {
                        { card(Some("Detalle del día"), loading_row("Selecciona un día para ver sus movimientos.")) }
                    }
                </div>
            </>
        },
    )
}

#[derive(Clone, Copy, PartialEq)]
enum DayView {
    All,
    Only(FlowKind),
}

#[derive(Properties, PartialEq)]
struct DayDetailProps {
    date: NaiveDate,
    month_transactions: Vec<Transaction>,
    symbol: AttrValue,
}

/// Movements of one day, fetched from the per-day endpoints.
#[function_component(DayDetail)]
fn day_detail(props: &DayDetailProps) -> Html {
    let view = use_state(|| DayView::All);
    let items = use_state(Vec::<Transaction>::new);
    let loading = use_state(|| true);

    {
        let items = items.clone();
        let loading = loading.clone();
        let month_transactions = props.month_transactions.clone();
        use_effect_with_deps(
            move |(date, view): &(NaiveDate, DayView)| {
                let (date, view) = (*date, *view);
                loading.set(true);
                spawn_local(async move {
                    let client = ApiClient::with_cookies();
                    let fetched = match view {
                        DayView::All => client.transactions_on(date).await,
                        DayView::Only(kind) => client.transactions_of_kind_on(kind, date).await,
                    };
                    let list = fetched.unwrap_or_else(|err| {
                        tracing::warn!("day detail fetch failed, using month data: {}", err);
                        transactions_on(&month_transactions, date)
                            .into_iter()
                            .filter(|tx| match view {
                                DayView::All => true,
                                DayView::Only(kind) => tx.is_income == kind.is_income(),
                            })
                            .collect()
                    });
                    items.set(list);
                    loading.set(false);
                });
                || ()
            },
            (props.date, *view),
        );
    }

    let tab = |label: &'static str, target: DayView| {
        let view = view.clone();
        let active = *view == target;
        let class_name = if active {
            "px-3 py-1 rounded-full text-xs font-bold bg-[#173E63] text-white"
        } else {
            "px-3 py-1 rounded-full text-xs font-bold bg-slate-100 text-slate-500"
        };
        html! {
            <button class={class_name} onclick={Callback::from(move |_| view.set(target))}>{ label }</button>
        }
    };

    let body = if *loading {
        loading_row("Cargando...")
    } else if items.is_empty() {
        loading_row("Sin movimientos este día.")
    } else {
        html! {
            <ul class="divide-y divide-slate-100">
                { for items.iter().map(|tx| {
                    let tone = if tx.is_income { "text-emerald-600" } else { "text-rose-600" };
                    html! {
                        <li key={tx.id} class="flex items-center justify-between py-3 text-sm">
                            <div>
                                <p class="font-medium text-[#173E63]">{ tx.description.clone().unwrap_or_else(|| "Sin descripción".to_string()) }</p>
                                if let Some(tag) = tx.tag_name() {
                                    <p class="text-xs text-slate-400">{ tag.to_string() }</p>
                                }
                            </div>
                            <span class={classes!("font-semibold", tone)}>{ format_signed(tx.amount, tx.is_income, &props.symbol) }</span>
                        </li>
                    }
                }) }
            </ul>
        }
    };

    card(
        Some(&format_date(props.date)),
        html! {
            <>
                <div class="flex gap-2 mb-4">
                    { tab("Todos", DayView::All) }
                    { tab("Ingresos", DayView::Only(FlowKind::Income)) }
                    { tab("Gastos", DayView::Only(FlowKind::Expense)) }
                </div>
                { body }
            </>
        },
    )
}

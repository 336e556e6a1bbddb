use finanzas_core::endpoints::{FlowKind, TransactionFilter};
use finanzas_core::format::{format_raw_date, format_signed};
use finanzas_core::models::{Account, Id, NewTransaction, Tag, Transaction};
use finanzas_core::stats::totals;
use finanzas_core::validation::{parse_amount, validate_date};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::dialog::{ConfirmDialog, Modal};
use crate::components::form::{bind, on_submit, SelectField, SubmitButton, TextField};
use crate::components::icons::{icon, Icon};
use crate::components::layout::{card, page_shell, StatCard};
use crate::pages::today;
use crate::settings::use_settings;
use crate::toast::use_toast;

fn parse_id(value: &str) -> Option<Id> {
    value.parse().ok()
}

fn id_value(id: Option<Id>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}

fn account_options(accounts: &[Account]) -> Vec<(String, String)> {
    accounts
        .iter()
        .map(|a| (a.id.to_string(), a.name.clone()))
        .collect()
}

fn tag_options(tags: &[Tag]) -> Vec<(String, String)> {
    tags.iter().map(|t| (t.id.to_string(), t.name.clone())).collect()
}

fn kind_options() -> Vec<(String, String)> {
    vec![
        (FlowKind::Income.as_str().to_string(), "Ingresos".to_string()),
        (FlowKind::Expense.as_str().to_string(), "Gastos".to_string()),
    ]
}

fn parse_kind(value: &str) -> Option<FlowKind> {
    match value {
        "income" => Some(FlowKind::Income),
        "expense" => Some(FlowKind::Expense),
        _ => None,
    }
}

/// Tags for one account, or every tag when no account is chosen.
async fn load_tags(account_id: Option<Id>) -> Result<Vec<Tag>, finanzas_core::ApiError> {
    let client = ApiClient::with_cookies();
    match account_id {
        Some(id) => client.tags_for_account(id).await,
        None => client.tags().await,
    }
}

#[function_component(TransactionsPage)]
pub fn transactions_page() -> Html {
    let settings = use_settings();
    let toaster = use_toast();
    let accounts = use_state(Vec::<Account>::new);
    let filter_tags = use_state(Vec::<Tag>::new);
    let filter = use_state(TransactionFilter::default);
    let transactions = use_state(Vec::<Transaction>::new);
    let loading = use_state(|| true);
    let reload = use_state(|| 0u32);
    let editing = use_state(|| None::<Option<Transaction>>);
    let deleting = use_state(|| None::<Transaction>);
    let busy = use_state(|| false);

    {
        let accounts = accounts.clone();
        let toaster = toaster.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match ApiClient::with_cookies().accounts(None).await {
                        Ok(list) => accounts.set(list),
                        Err(err) => toaster.api_error(&err),
                    }
                });
                || ()
            },
            (),
        );
    }

    {
        let filter_tags = filter_tags.clone();
        let toaster = toaster.clone();
        use_effect_with_deps(
            move |account_id: &Option<Id>| {
                let account_id = *account_id;
                spawn_local(async move {
                    match load_tags(account_id).await {
                        Ok(list) => filter_tags.set(list),
                        Err(err) => toaster.api_error(&err),
                    }
                });
                || ()
            },
            filter.account_id,
        );
    }

    {
        let transactions = transactions.clone();
        let loading = loading.clone();
        let toaster = toaster.clone();
        use_effect_with_deps(
            move |(filter, _): &(TransactionFilter, u32)| {
                let filter = filter.clone();
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
            ((*filter).clone(), *reload),
        );
    }

    let update_filter = |apply: fn(&mut TransactionFilter, &str)| {
        let filter = filter.clone();
        Callback::from(move |value: String| {
            let mut next = (*filter).clone();
            apply(&mut next, &value);
            filter.set(next);
        })
    };

    let on_account = update_filter(|f, v| {
        f.account_id = parse_id(v);
        f.tag_id = None;
    });
    let on_tag = update_filter(|f, v| f.tag_id = parse_id(v));
    let on_kind = update_filter(|f, v| f.kind = parse_kind(v));
    let on_start = update_filter(|f, v| f.start_date = validate_date(v).ok());
    let on_end = update_filter(|f, v| f.end_date = validate_date(v).ok());
    let on_clear_filter = {
        let filter = filter.clone();
        Callback::from(move |_| filter.set(TransactionFilter::default()))
    };

    let open_new = {
        let editing = editing.clone();
        Callback::from(move |_| editing.set(Some(None)))
    };
    let close_editor = {
        let editing = editing.clone();
        Callback::from(move |_| editing.set(None))
    };
    let on_saved = {
        let editing = editing.clone();
        let reload = reload.clone();
        Callback::from(move |_| {
            editing.set(None);
            reload.set(*reload + 1);
        })
    };

    let cancel_delete = {
        let deleting = deleting.clone();
        Callback::from(move |_| deleting.set(None))
    };
    let confirm_delete = {
        let deleting = deleting.clone();
        let reload = reload.clone();
        let busy = busy.clone();
        let toaster = toaster.clone();
        Callback::from(move |_| {
            let Some(tx) = (*deleting).clone() else {
                return;
            };
            busy.set(true);
            let deleting = deleting.clone();
            let reload = reload.clone();
            let busy = busy.clone();
            let toaster = toaster.clone();
            spawn_local(async move {
                match ApiClient::with_cookies().delete_transaction(tx.id).await {
                    Ok(()) => {
                        toaster.success("Transacción eliminada.");
                        reload.set(*reload + 1);
                    }
                    Err(err) => toaster.api_error(&err),
                }
                busy.set(false);
                deleting.set(None);
            });
        })
    };

    let sums = totals(&transactions);
    let symbol = settings.currency_symbol.clone();
    let current = (*filter).clone();

    let filters = html! {
        <div class="grid grid-cols-2 md:grid-cols-6 gap-3 items-end">
            <SelectField label="Cuenta" value={id_value(current.account_id)} options={account_options(&accounts)}
                placeholder="Todas" on_change={on_account} />
            <SelectField label="Etiqueta" value={id_value(current.tag_id)} options={tag_options(&filter_tags)}
                placeholder="Todas" on_change={on_tag} />
            <SelectField label="Tipo" value={current.kind.map(|k| k.as_str()).unwrap_or_default().to_string()}
                options={kind_options()} placeholder="Todos" on_change={on_kind} />
            <TextField label="Desde" input_type="date"
                value={current.start_date.map(|d| d.to_string()).unwrap_or_default()} on_input={on_start} />
            <TextField label="Hasta" input_type="date"
                value={current.end_date.map(|d| d.to_string()).unwrap_or_default()} on_input={on_end} />
            <button onclick={on_clear_filter} disabled={current.is_empty()}
                class="bg-[#B2CBDE] text-[#173E63] py-2 rounded-[10px] text-xs font-bold disabled:opacity-50">{"Limpiar filtros"}</button>
        </div>
    };

    let rows = if *loading {
        html! { <tr><td colspan="5" class="px-6 py-6 text-center text-slate-400">{"Cargando..."}</td></tr> }
    } else if transactions.is_empty() {
        html! { <tr><td colspan="5" class="px-6 py-6 text-center text-slate-400">{"No hay transacciones para estos filtros."}</td></tr> }
    } else {
        html! {
            <>
                { for transactions.iter().map(|tx| {
                    let tone = if tx.is_income { "text-emerald-600" } else { "text-rose-600" };
                    let on_edit = {
                        let editing = editing.clone();
                        let tx = tx.clone();
                        Callback::from(move |_| editing.set(Some(Some(tx.clone()))))
                    };
                    let on_delete = {
                        let deleting = deleting.clone();
                        let tx = tx.clone();
                        Callback::from(move |_| deleting.set(Some(tx.clone())))
                    };
                    html! {
                        <tr key={tx.id} class="text-sm hover:bg-slate-50">
                            <td class="px-6 py-3 text-slate-500">{ format_raw_date(&tx.transaction_date) }</td>
                            <td class="px-6 py-3 text-[#173E63]">{ tx.description.clone().unwrap_or_default() }</td>
                            <td class="px-6 py-3">
                                if let Some(tag) = tx.tag_name() {
                                    <span class="bg-[#D8E1E8] text-[#173E63] px-3 py-1 rounded-full text-[10px] font-bold">{ tag.to_string() }</span>
                                }
                            </td>
                            <td class={classes!("px-6", "py-3", "font-semibold", tone)}>{ format_signed(tx.amount, tx.is_income, &symbol) }</td>
                            <td class="px-6 py-3">
                                <div class="flex gap-2 text-slate-400">
                                    <button class="hover:text-[#173E63]" aria-label="Editar" onclick={on_edit}>{ icon(Icon::Pencil) }</button>
                                    <button class="hover:text-red-600" aria-label="Eliminar" onclick={on_delete}>{ icon(Icon::Trash) }</button>
                                </div>
                            </td>
                        </tr>
                    }
                }) }
            </>
        }
    };

    html! {
        <>
            { page_shell(
                "Transacciones",
                html! {
                    <button onclick={open_new} class="flex items-center gap-2 bg-[#173E63] text-white px-4 py-2 rounded-[10px] text-xs font-bold">
                        { icon(Icon::Plus) }{"Nueva transacción"}
                    </button>
                },
                html! {
                    <>
                        <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
                            <StatCard title="Ingresos" value={settings.money(sums.income)} icon={Icon::TrendingUp} tone="text-emerald-600" />
                            <StatCard title="Gastos" value={settings.money(sums.expenses)} icon={Icon::TrendingDown} tone="text-rose-600" />
                            <StatCard title="Balance" value={settings.money(sums.net())} icon={Icon::Wallet}
                                hint={format!("{} movimientos", sums.count)} />
                        </div>
                        { card(None, filters) }
                        <div class="bg-white rounded-2xl shadow-sm border border-slate-200 overflow-x-auto">
                            <table class="w-full text-left border-collapse">
                                <thead>
                                    <tr class="bg-slate-50 text-slate-500 text-[10px] uppercase tracking-widest">
                                        <th class="px-6 py-4 font-bold">{"Fecha"}</th>
                                        <th class="px-6 py-4 font-bold">{"Descripción"}</th>
                                        <th class="px-6 py-4 font-bold">{"Etiqueta"}</th>
                                        <th class="px-6 py-4 font-bold">{"Importe"}</th>
                                        <th class="px-6 py-4 font-bold"></th>
                                    </tr>
                                </thead>
                                <tbody class="divide-y divide-slate-100">{ rows }</tbody>
                            </table>
                        </div>
                    </>
                },
            ) }
            if let Some(existing) = (*editing).clone() {
                <TransactionEditor existing={existing} accounts={(*accounts).clone()}
                    on_saved={on_saved} on_close={close_editor} />
            }
            if let Some(tx) = (*deleting).clone() {
                <ConfirmDialog
                    title="Eliminar transacción"
                    message={format!("¿Seguro que quieres eliminar «{}»? Esta acción no se puede deshacer.",
                        tx.description.unwrap_or_else(|| format_signed(tx.amount, tx.is_income, &settings.currency_symbol)))}
                    busy={*busy}
                    on_confirm={confirm_delete}
                    on_cancel={cancel_delete} />
            }
        </>
    }
}

#[derive(Properties, PartialEq)]
struct TransactionEditorProps {
    existing: Option<Transaction>,
    accounts: Vec<Account>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
}

/// Create or edit form shown in a modal.
#[function_component(TransactionEditor)]
fn transaction_editor(props: &TransactionEditorProps) -> Html {
    let toaster = use_toast();
    let existing = props.existing.clone();
    let amount = use_state(|| {
        existing
            .as_ref()
            .map(|tx| format!("{:.2}", tx.amount))
            .unwrap_or_default()
    });
    let kind = use_state(|| match &existing {
        Some(tx) if tx.is_income => FlowKind::Income.as_str().to_string(),
        _ => FlowKind::Expense.as_str().to_string(),
    });
    let date = use_state(|| {
        existing
            .as_ref()
            .and_then(|tx| tx.date())
            .unwrap_or_else(today)
            .to_string()
    });
    let description = use_state(|| {
        existing
            .as_ref()
            .and_then(|tx| tx.description.clone())
            .unwrap_or_default()
    });
    let account = use_state(String::new);
    let tag = use_state(|| existing.as_ref().map(|tx| id_value(tx.tag_id)).unwrap_or_default());
    let tags = use_state(Vec::<Tag>::new);
    let error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    {
        let tags = tags.clone();
        let toaster = toaster.clone();
        use_effect_with_deps(
            move |account: &String| {
                let account_id = parse_id(account);
                spawn_local(async move {
                    match load_tags(account_id).await {
                        Ok(list) => tags.set(list),
                        Err(err) => toaster.api_error(&err),
                    }
                });
                || ()
            },
            (*account).clone(),
        );
    }

    let on_account = {
        let account = account.clone();
        let tag = tag.clone();
        Callback::from(move |value: String| {
            account.set(value);
            tag.set(String::new());
        })
    };

    let submit = {
        let amount = amount.clone();
        let kind = kind.clone();
        let date = date.clone();
        let description = description.clone();
        let tag = tag.clone();
        let error = error.clone();
        let saving = saving.clone();
        let on_saved = props.on_saved.clone();
        let id = props.existing.as_ref().map(|tx| tx.id);
        Callback::from(move |_| {
            let parsed =
                parse_amount(&amount).and_then(|amount| Ok((amount, validate_date(&date)?)));
            let (value, day) = match parsed {
                Ok(ok) => ok,
                Err(err) => {
                    error.set(Some(err.to_string()));
                    return;
                }
            };
            error.set(None);
            saving.set(true);

            let description = description.trim();
            let body = NewTransaction {
                amount: value,
                is_income: parse_kind(&kind).map(|k| k.is_income()).unwrap_or(false),
                transaction_date: day.format("%Y-%m-%d").to_string(),
                description: (!description.is_empty()).then(|| description.to_string()),
                tag_id: parse_id(&tag),
            };
            let error = error.clone();
            let saving = saving.clone();
            let on_saved = on_saved.clone();
            let toaster = toaster.clone();
            spawn_local(async move {
                let client = ApiClient::with_cookies();
                let result = match id {
                    Some(id) => client.update_transaction(id, &body).await,
                    None => client.create_transaction(&body).await,
                };
                saving.set(false);
                match result {
                    Ok(_) => {
                        toaster.success(if id.is_some() {
                            "Transacción actualizada."
                        } else {
                            "Transacción creada."
                        });
                        on_saved.emit(());
                    }
                    Err(err) => error.set(Some(err.message())),
                }
            });
        })
    };

    let title = if props.existing.is_some() { "Editar transacción" } else { "Nueva transacción" };

    html! {
        <Modal title={title} on_close={props.on_close.clone()}>
            <form class="space-y-4" onsubmit={on_submit(submit)}>
                <div class="grid grid-cols-2 gap-3">
                    <SelectField label="Tipo" value={(*kind).clone()} options={kind_options()} on_change={bind(&kind)} />
                    <TextField label="Importe" input_type="number" placeholder="0,00"
                        value={(*amount).clone()} on_input={bind(&amount)} />
                    <TextField label="Fecha" input_type="date" value={(*date).clone()} on_input={bind(&date)} />
                    <SelectField label="Cuenta" value={(*account).clone()} options={account_options(&props.accounts)}
                        placeholder="Todas" on_change={on_account} />
                </div>
                <SelectField label="Etiqueta" value={(*tag).clone()} options={tag_options(&tags)}
                    placeholder="Sin etiqueta" on_change={bind(&tag)} />
                <TextField label="Descripción" value={(*description).clone()} on_input={bind(&description)} />
                if let Some(msg) = &*error {
                    <p class="text-sm text-red-500">{ msg.clone() }</p>
                }
                <SubmitButton label="Guardar" busy={*saving} />
            </form>
        </Modal>
    }
}

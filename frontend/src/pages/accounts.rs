use finanzas_core::models::{Account, Category, Id, NewAccount};
use finanzas_core::validation::{parse_balance, validate_required};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::dialog::{ConfirmDialog, Modal};
use crate::components::form::{bind, on_submit, SelectField, SubmitButton, TextField};
use crate::components::icons::{icon, Icon};
use crate::components::layout::{loading_row, page_shell, StatCard};
use crate::settings::use_settings;
use crate::toast::use_toast;

fn category_name(categories: &[Category], id: Option<Id>) -> String {
    id.and_then(|id| categories.iter().find(|c| c.id == id))
        .map(|c| c.tipo.clone())
        .unwrap_or_else(|| "Sin categoría".to_string())
}

#[function_component(AccountsPage)]
pub fn accounts_page() -> Html {
    let settings = use_settings();
    let toaster = use_toast();
    let accounts = use_state(Vec::<Account>::new);
    let categories = use_state(Vec::<Category>::new);
    let loading = use_state(|| true);
    let reload = use_state(|| 0u32);
    let editing = use_state(|| None::<Option<Account>>);
    let deleting = use_state(|| None::<Account>);
    let busy = use_state(|| false);

    {
        let accounts = accounts.clone();
        let categories = categories.clone();
        let loading = loading.clone();
        let toaster = toaster.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    let client = ApiClient::with_cookies();
                    match client.accounts(None).await {
                        Ok(list) => accounts.set(list),
                        Err(err) => toaster.api_error(&err),
                    }
                    match client.categories().await {
                        Ok(list) => categories.set(list),
                        Err(err) => toaster.api_error(&err),
                    }
                    loading.set(false);
                });
                || ()
            },
            *reload,
        );
    }

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
            let Some(account) = (*deleting).clone() else {
                return;
            };
            busy.set(true);
            let deleting = deleting.clone();
            let reload = reload.clone();
            let busy = busy.clone();
            let toaster = toaster.clone();
            spawn_local(async move {
                match ApiClient::with_cookies().remove_account(account.id).await {
                    Ok(()) => {
                        toaster.success(format!("Cuenta «{}» eliminada.", account.name));
                        reload.set(*reload + 1);
                    }
                    Err(err) => toaster.api_error(&err),
                }
                busy.set(false);
                deleting.set(None);
            });
        })
    };

    let balance: f64 = accounts.iter().map(|a| a.money).sum();

    let grid = if *loading {
        loading_row("Cargando cuentas...")
    } else if accounts.is_empty() {
        loading_row("Aún no tienes cuentas. Crea la primera para empezar.")
    } else {
        html! {
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
                { for accounts.iter().map(|account| {
                    let on_edit = {
                        let editing = editing.clone();
                        let account = account.clone();
                        Callback::from(move |_| editing.set(Some(Some(account.clone()))))
                    };
                    let on_delete = {
                        let deleting = deleting.clone();
                        let account = account.clone();
                        Callback::from(move |_| deleting.set(Some(account.clone())))
                    };
                    let tone = if account.money < 0.0 { "text-rose-600" } else { "text-[#173E63]" };
                    html! {
                        <div key={account.id} class="bg-white rounded-2xl border border-slate-200 shadow-sm p-5">
                            <div class="flex items-start justify-between">
                                <div class="flex items-center gap-3">
                                    <div class="p-2 rounded-xl bg-[#D8E1E8] text-[#173E63]">{ icon(Icon::Wallet) }</div>
                                    <div>
                                        <p class="font-bold text-[#173E63]">{ account.name.clone() }</p>
                                        <p class="text-xs text-slate-400">{ category_name(&categories, account.category_id) }</p>
                                    </div>
                                </div>
                                <div class="flex gap-2 text-slate-400">
                                    <button class="hover:text-[#173E63]" aria-label="Editar" onclick={on_edit}>{ icon(Icon::Pencil) }</button>
                                    <button class="hover:text-red-600" aria-label="Eliminar" onclick={on_delete}>{ icon(Icon::Trash) }</button>
                                </div>
                            </div>
                            <p class={classes!("mt-4", "text-2xl", "font-bold", tone)}>{ settings.money(account.money) }</p>
                        </div>
                    }
                }) }
            </div>
        }
    };

    html! {
        <>
            { page_shell(
                "Cuentas",
                html! {
                    <button onclick={open_new} class="flex items-center gap-2 bg-[#173E63] text-white px-4 py-2 rounded-[10px] text-xs font-bold">
                        { icon(Icon::Plus) }{"Nueva cuenta"}
                    </button>
                },
                html! {
                    <>
                        <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                            <StatCard title="Saldo total" value={settings.money(balance)} icon={Icon::Wallet} />
                            <StatCard title="Cuentas" value={accounts.len().to_string()} icon={Icon::Folder} />
                        </div>
                        { grid }
                    </>
                },
            ) }
            if let Some(existing) = (*editing).clone() {
                <AccountEditor existing={existing} categories={(*categories).clone()}
                    on_saved={on_saved} on_close={close_editor} />
            }
            if let Some(account) = (*deleting).clone() {
                <ConfirmDialog
                    title="Eliminar cuenta"
                    message={format!("¿Seguro que quieres eliminar la cuenta «{}»? Se perderán sus etiquetas.", account.name)}
                    busy={*busy}
                    on_confirm={confirm_delete}
                    on_cancel={cancel_delete} />
            }
        </>
    }
}

#[derive(Properties, PartialEq)]
struct AccountEditorProps {
    existing: Option<Account>,
    categories: Vec<Category>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
}

#[function_component(AccountEditor)]
fn account_editor(props: &AccountEditorProps) -> Html {
    let toaster = use_toast();
    let name = use_state(|| props.existing.as_ref().map(|a| a.name.clone()).unwrap_or_default());
    let money = use_state(|| {
        props
            .existing
            .as_ref()
            .map(|a| format!("{:.2}", a.money))
            .unwrap_or_default()
    });
    let category = use_state(|| {
        props
            .existing
            .as_ref()
            .and_then(|a| a.category_id)
            .map(|id| id.to_string())
            .unwrap_or_default()
    });
    let error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    let submit = {
        let name = name.clone();
        let money = money.clone();
        let category = category.clone();
        let error = error.clone();
        let saving = saving.clone();
        let on_saved = props.on_saved.clone();
        let id = props.existing.as_ref().map(|a| a.id);
        Callback::from(move |_| {
            let checked = validate_required(&name, "nombre")
                .map(str::to_string)
                .and_then(|name| Ok((name, parse_balance(&money)?)));
            let (name, money) = match checked {
                Ok(ok) => ok,
                Err(err) => {
                    error.set(Some(err.to_string()));
                    return;
                }
            };
            error.set(None);
            saving.set(true);

            let body = NewAccount {
                name,
                money,
                category_id: category.parse().ok(),
            };
            let error = error.clone();
            let saving = saving.clone();
            let on_saved = on_saved.clone();
            let toaster = toaster.clone();
            spawn_local(async move {
                let client = ApiClient::with_cookies();
                let result = match id {
                    Some(id) => client.update_account(id, &body).await,
                    None => client.create_account(&body).await,
                };
                saving.set(false);
                match result {
                    Ok(account) => {
                        toaster.success(format!("Cuenta «{}» guardada.", account.name));
                        on_saved.emit(());
                    }
                    Err(err) => error.set(Some(err.message())),
                }
            });
        })
    };

    let options: Vec<(String, String)> = props
        .categories
        .iter()
        .map(|c| (c.id.to_string(), c.tipo.clone()))
        .collect();
    let title = if props.existing.is_some() { "Editar cuenta" } else { "Nueva cuenta" };

    html! {
        <Modal title={title} on_close={props.on_close.clone()}>
            <form class="space-y-4" onsubmit={on_submit(submit)}>
                <TextField label="Nombre" value={(*name).clone()} on_input={bind(&name)} />
                <TextField label="Saldo" input_type="number" placeholder="0,00"
                    value={(*money).clone()} on_input={bind(&money)} />
                <SelectField label="Categoría" value={(*category).clone()} options={options}
                    placeholder="Sin categoría" on_change={bind(&category)} />
                if let Some(msg) = &*error {
                    <p class="text-sm text-red-500">{ msg.clone() }</p>
                }
                <SubmitButton label="Guardar" busy={*saving} />
            </form>
        </Modal>
    }
}

//! Tags belong to one account; the page works on the selected account.

use finanzas_core::models::{Account, Id, NewTag, Tag};
use finanzas_core::validation::validate_required;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::dialog::{ConfirmDialog, Modal};
use crate::components::form::{bind, on_submit, SelectField, SubmitButton, TextField};
use crate::components::icons::{icon, Icon};
use crate::components::layout::{card, loading_row, page_shell};
use crate::toast::use_toast;

#[function_component(TagsPage)]
pub fn tags_page() -> Html {
    let toaster = use_toast();
    let accounts = use_state(Vec::<Account>::new);
    let selected = use_state(|| None::<Id>);
    let tags = use_state(Vec::<Tag>::new);
    let loading = use_state(|| false);
    let reload = use_state(|| 0u32);
    let editing = use_state(|| None::<Option<Tag>>);
    let deleting = use_state(|| None::<Tag>);
    let busy = use_state(|| false);

    {
        let accounts = accounts.clone();
        let selected = selected.clone();
        let toaster = toaster.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match ApiClient::with_cookies().accounts(None).await {
                        Ok(list) => {
                            selected.set(list.first().map(|a| a.id));
                            accounts.set(list);
                        }
                        Err(err) => toaster.api_error(&err),
                    }
                });
                || ()
            },
            (),
        );
    }

    {
        let tags = tags.clone();
        let loading = loading.clone();
        let toaster = toaster.clone();
        use_effect_with_deps(
            move |(account_id, _): &(Option<Id>, u32)| {
                if let Some(account_id) = *account_id {
                    loading.set(true);
                    spawn_local(async move {
                        match ApiClient::with_cookies().tags_for_account(account_id).await {
                            Ok(list) => tags.set(list),
                            Err(err) => toaster.api_error(&err),
                        }
                        loading.set(false);
                    });
                } else {
                    tags.set(Vec::new());
                }
                || ()
            },
            (*selected, *reload),
        );
    }

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |value: String| selected.set(value.parse().ok()))
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
            let Some(tag) = (*deleting).clone() else {
                return;
            };
            busy.set(true);
            let deleting = deleting.clone();
            let reload = reload.clone();
            let busy = busy.clone();
            let toaster = toaster.clone();
            spawn_local(async move {
                match ApiClient::with_cookies().delete_tag(tag.id).await {
                    Ok(()) => {
                        toaster.success(format!("Etiqueta «{}» eliminada.", tag.name));
                        reload.set(*reload + 1);
                    }
                    Err(err) => toaster.api_error(&err),
                }
                busy.set(false);
                deleting.set(None);
            });
        })
    };

    let options: Vec<(String, String)> = accounts
        .iter()
        .map(|a| (a.id.to_string(), a.name.clone()))
        .collect();
    let selected_value = selected.map(|id| id.to_string()).unwrap_or_default();

    let list = if selected.is_none() {
        loading_row("Crea una cuenta para poder añadir etiquetas.")
    } else if *loading {
        loading_row("Cargando etiquetas...")
    } else if tags.is_empty() {
        loading_row("Esta cuenta aún no tiene etiquetas.")
    } else {
        html! {
            <div class="grid grid-cols-1 sm:grid-cols-2 gap-3">
                { for tags.iter().map(|tag| {
                    let on_edit = {
                        let editing = editing.clone();
                        let tag = tag.clone();
                        Callback::from(move |_| editing.set(Some(Some(tag.clone()))))
                    };
                    let on_delete = {
                        let deleting = deleting.clone();
                        let tag = tag.clone();
                        Callback::from(move |_| deleting.set(Some(tag.clone())))
                    };
                    html! {
                        <div key={tag.id} class="flex items-start justify-between rounded-xl border border-slate-200 p-4">
                            <div>
                                <p class="flex items-center gap-2 font-bold text-[#173E63]">{ icon(Icon::Tag) }{ tag.name.clone() }</p>
                                if let Some(description) = &tag.description {
                                    <p class="mt-1 text-xs text-slate-500">{ description.clone() }</p>
                                }
                            </div>
                            <div class="flex gap-2 text-slate-400">
                                <button class="hover:text-[#173E63]" aria-label="Editar" onclick={on_edit}>{ icon(Icon::Pencil) }</button>
                                <button class="hover:text-red-600" aria-label="Eliminar" onclick={on_delete}>{ icon(Icon::Trash) }</button>
                            </div>
                        </div>
                    }
                }) }
            </div>
        }
    };

    html! {
        <>
            { page_shell(
                "Etiquetas",
                html! {
                    <button onclick={open_new} disabled={selected.is_none()}
                        class="flex items-center gap-2 bg-[#173E63] text-white px-4 py-2 rounded-[10px] text-xs font-bold disabled:opacity-50">
                        { icon(Icon::Plus) }{"Nueva etiqueta"}
                    </button>
                },
                html! {
                    <>
                        <div class="max-w-xs">
                            <SelectField label="Cuenta" value={selected_value} options={options} on_change={on_select} />
                        </div>
                        { card(None, list) }
                    </>
                },
            ) }
            if let (Some(existing), Some(account_id)) = ((*editing).clone(), *selected) {
                <TagEditor existing={existing} account_id={account_id} on_saved={on_saved} on_close={close_editor} />
            }
            if let Some(tag) = (*deleting).clone() {
                <ConfirmDialog
                    title="Eliminar etiqueta"
                    message={format!("¿Eliminar la etiqueta «{}»? Sus transacciones quedarán sin etiqueta.", tag.name)}
                    busy={*busy}
                    on_confirm={confirm_delete}
                    on_cancel={cancel_delete} />
            }
        </>
    }
}

#[derive(Properties, PartialEq)]
struct TagEditorProps {
    existing: Option<Tag>,
    account_id: Id,
    on_saved: Callback<()>,
    on_close: Callback<()>,
}

#[function_component(TagEditor)]
fn tag_editor(props: &TagEditorProps) -> Html {
    let toaster = use_toast();
    let name = use_state(|| props.existing.as_ref().map(|t| t.name.clone()).unwrap_or_default());
    let description = use_state(|| {
        props
            .existing
            .as_ref()
            .and_then(|t| t.description.clone())
            .unwrap_or_default()
    });
    let error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    let submit = {
        let name = name.clone();
        let description = description.clone();
        let error = error.clone();
        let saving = saving.clone();
        let on_saved = props.on_saved.clone();
        let id = props.existing.as_ref().map(|t| t.id);
        let account_id = props
            .existing
            .as_ref()
            .and_then(|t| t.account_id)
            .unwrap_or(props.account_id);
        Callback::from(move |_| {
            let name = match validate_required(&name, "nombre") {
                Ok(name) => name.to_string(),
                Err(err) => {
                    error.set(Some(err.to_string()));
                    return;
                }
            };
            error.set(None);
            saving.set(true);

            let description = description.trim();
            let body = NewTag {
                name,
                description: (!description.is_empty()).then(|| description.to_string()),
                account_id,
            };
            let error = error.clone();
            let saving = saving.clone();
            let on_saved = on_saved.clone();
            let toaster = toaster.clone();
            spawn_local(async move {
                let client = ApiClient::with_cookies();
                let result = match id {
                    Some(id) => client.update_tag(id, &body).await,
                    None => client.create_tag(&body).await,
                };
                saving.set(false);
                match result {
                    Ok(tag) => {
                        toaster.success(format!("Etiqueta «{}» guardada.", tag.name));
                        on_saved.emit(());
                    }
                    Err(err) => error.set(Some(err.message())),
                }
            });
        })
    };

    let title = if props.existing.is_some() { "Editar etiqueta" } else { "Nueva etiqueta" };

    html! {
        <Modal title={title} on_close={props.on_close.clone()}>
            <form class="space-y-4" onsubmit={on_submit(submit)}>
                <TextField label="Nombre" value={(*name).clone()} on_input={bind(&name)} />
                <TextField label="Descripción" value={(*description).clone()} on_input={bind(&description)} />
                if let Some(msg) = &*error {
                    <p class="text-sm text-red-500">{ msg.clone() }</p>
                }
                <SubmitButton label="Guardar" busy={*saving} />
            </form>
        </Modal>
    }
}

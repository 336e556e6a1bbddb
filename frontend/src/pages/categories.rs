use finanzas_core::models::{Category, NewCategory};
use finanzas_core::validation::validate_required;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::dialog::ConfirmDialog;
use crate::components::form::{bind, on_submit, SubmitButton, TextField};
use crate::components::icons::{icon, Icon};
use crate::components::layout::{card, loading_row, page_shell};
use crate::toast::use_toast;

#[function_component(CategoriesPage)]
pub fn categories_page() -> Html {
    let toaster = use_toast();
    let categories = use_state(Vec::<Category>::new);
    let loading = use_state(|| true);
    let reload = use_state(|| 0u32);
    let draft = use_state(String::new);
    let editing = use_state(|| None::<Category>);
    let deleting = use_state(|| None::<Category>);
    let busy = use_state(|| false);
    let error = use_state(|| None::<String>);

    {
        let categories = categories.clone();
        let loading = loading.clone();
        let toaster = toaster.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match ApiClient::with_cookies().categories().await {
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

    let submit = {
        let draft = draft.clone();
        let editing = editing.clone();
        let reload = reload.clone();
        let busy = busy.clone();
        let error = error.clone();
        let toaster = toaster.clone();
        Callback::from(move |_| {
            let tipo = match validate_required(&draft, "nombre") {
                Ok(tipo) => tipo.to_string(),
                Err(err) => {
                    error.set(Some(err.to_string()));
                    return;
                }
            };
            error.set(None);
            busy.set(true);

            let id = editing.as_ref().map(|c| c.id);
            let body = NewCategory { tipo };
            let draft = draft.clone();
            let editing = editing.clone();
            let reload = reload.clone();
            let busy = busy.clone();
            let error = error.clone();
            let toaster = toaster.clone();
            spawn_local(async move {
                let client = ApiClient::with_cookies();
                let result = match id {
                    Some(id) => client.update_category(id, &body).await,
                    None => client.create_category(&body).await,
                };
                match result {
                    Ok(category) => {
                        toaster.success(format!("Categoría «{}» guardada.", category.tipo));
                        draft.set(String::new());
                        editing.set(None);
                        reload.set(*reload + 1);
                    }
                    Err(err) => error.set(Some(err.message())),
                }
                busy.set(false);
            });
        })
    };

    let cancel_edit = {
        let draft = draft.clone();
        let editing = editing.clone();
        Callback::from(move |_| {
            draft.set(String::new());
            editing.set(None);
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
            let Some(category) = (*deleting).clone() else {
                return;
            };
            busy.set(true);
            let deleting = deleting.clone();
            let reload = reload.clone();
            let busy = busy.clone();
            let toaster = toaster.clone();
            spawn_local(async move {
                match ApiClient::with_cookies().delete_category(category.id).await {
                    Ok(()) => {
                        toaster.success("Categoría eliminada.");
                        reload.set(*reload + 1);
                    }
                    Err(err) => toaster.api_error(&err),
                }
                busy.set(false);
                deleting.set(None);
            });
        })
    };

    let list = if *loading {
        loading_row("Cargando categorías...")
    } else if categories.is_empty() {
        loading_row("No hay categorías todavía.")
    } else {
        html! {
            <ul class="divide-y divide-slate-100">
                { for categories.iter().map(|category| {
                    let on_edit = {
                        let draft = draft.clone();
                        let editing = editing.clone();
                        let category = category.clone();
                        Callback::from(move |_| {
                            draft.set(category.tipo.clone());
                            editing.set(Some(category.clone()));
                        })
                    };
                    let on_delete = {
                        let deleting = deleting.clone();
                        let category = category.clone();
                        Callback::from(move |_| deleting.set(Some(category.clone())))
                    };
                    html! {
                        <li key={category.id} class="flex items-center justify-between py-3 text-sm">
                            <span class="flex items-center gap-2 text-[#173E63] font-medium">{ icon(Icon::Folder) }{ category.tipo.clone() }</span>
                            <div class="flex gap-2 text-slate-400">
                                <button class="hover:text-[#173E63]" aria-label="Editar" onclick={on_edit}>{ icon(Icon::Pencil) }</button>
                                <button class="hover:text-red-600" aria-label="Eliminar" onclick={on_delete}>{ icon(Icon::Trash) }</button>
                            </div>
                        </li>
                    }
                }) }
            </ul>
        }
    };

    let form_title = if editing.is_some() { "Editar categoría" } else { "Nueva categoría" };

    html! {
        <>
            { page_shell(
                "Categorías",
                html! {},
                html! {
                    <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                        { card(Some(form_title), html! {
                            <form class="space-y-4" onsubmit={on_submit(submit)}>
                                <TextField label="Nombre" placeholder="Ahorro, Nómina, Tarjetas..."
                                    value={(*draft).clone()} on_input={bind(&draft)} error={(*error).clone()} />
                                <SubmitButton label="Guardar" busy={*busy} />
                                if editing.is_some() {
                                    <button type="button" onclick={cancel_edit} class="w-full bg-[#B2CBDE] text-[#173E63] py-2 rounded-[10px] text-xs font-bold">{"Cancelar"}</button>
                                }
                            </form>
                        }) }
                        <div class="lg:col-span-2">{ card(Some("Tus categorías"), list) }</div>
                    </div>
                },
            ) }
            if let Some(category) = (*deleting).clone() {
                <ConfirmDialog
                    title="Eliminar categoría"
                    message={format!("¿Eliminar la categoría «{}»? Las cuentas que la usan quedarán sin categoría.", category.tipo)}
                    busy={*busy}
                    on_confirm={confirm_delete}
                    on_cancel={cancel_delete} />
            }
        </>
    }
}

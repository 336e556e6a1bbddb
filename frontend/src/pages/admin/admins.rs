use finanzas_core::models::{NewAdmin, Role, User};
use finanzas_core::validation::{validate_email, validate_name, validate_password};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::dialog::{ConfirmDialog, Modal};
use crate::components::form::{bind, on_submit, PasswordHints, SelectField, SubmitButton, TextField};
use crate::components::icons::{icon, Icon};
use crate::components::layout::{card, loading_row, page_shell};
use crate::guards::use_current_user;
use crate::toast::use_toast;

/// Admin accounts. Only super administrators may add or remove them.
#[function_component(AdminsPage)]
pub fn admins_page() -> Html {
    let toaster = use_toast();
    let me = use_current_user();
    let admins = use_state(Vec::<User>::new);
    let loading = use_state(|| true);
    let reload = use_state(|| 0u32);
    let creating = use_state(|| false);
    let deleting = use_state(|| None::<User>);
    let busy = use_state(|| false);

    {
        let admins = admins.clone();
        let loading = loading.clone();
        let toaster = toaster.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match ApiClient::with_cookies().admins().await {
                        Ok(list) => admins.set(list),
                        Err(err) => toaster.api_error(&err),
                    }
                    loading.set(false);
                });
                || ()
            },
            *reload,
        );
    }

    let can_manage = me.as_ref().map(|me| me.role.can_manage_admins()).unwrap_or(false);
    let my_id = me.as_ref().map(|me| me.id);

    let open_create = {
        let creating = creating.clone();
        Callback::from(move |_| creating.set(true))
    };
    let close_create = {
        let creating = creating.clone();
        Callback::from(move |_| creating.set(false))
    };
    let on_created = {
        let creating = creating.clone();
        let reload = reload.clone();
        Callback::from(move |_| {
            creating.set(false);
            reload.set(*reload + 1);
        })
    };

    let confirm_delete = {
        let deleting = deleting.clone();
        let busy = busy.clone();
        let reload = reload.clone();
        Callback::from(move |_| {
            let Some(admin) = (*deleting).clone() else {
                return;
            };
            busy.set(true);
            let deleting = deleting.clone();
            let busy = busy.clone();
            let reload = reload.clone();
            let toaster = toaster.clone();
            spawn_local(async move {
                match ApiClient::with_cookies().delete_admin(admin.id).await {
                    Ok(()) => {
                        toaster.success(format!("{} ya no es administrador.", admin.email));
                        reload.set(*reload + 1);
                    }
                    Err(err) => toaster.api_error(&err),
                }
                busy.set(false);
                deleting.set(None);
            });
        })
    };
    let cancel_delete = {
        let deleting = deleting.clone();
        Callback::from(move |_| deleting.set(None))
    };

    let list = if *loading {
        loading_row("Cargando administradores...")
    } else if admins.is_empty() {
        loading_row("No hay administradores.")
    } else {
        html! {
            <ul class="divide-y divide-slate-100">
                { for admins.iter().map(|admin| {
                    let removable = can_manage && Some(admin.id) != my_id;
                    let on_delete = {
                        let deleting = deleting.clone();
                        let admin = admin.clone();
                        Callback::from(move |_| deleting.set(Some(admin.clone())))
                    };
                    html! {
                        <li key={admin.id} class="flex items-center justify-between py-3">
                            <div class="flex items-center gap-3">
                                <span class="p-2 rounded-lg bg-[#f1f5f9] text-[#173E63]">{ icon(Icon::Shield) }</span>
                                <div>
                                    <p class="font-medium text-[#173E63] text-sm">{ admin.display_name().to_string() }</p>
                                    <p class="text-xs text-slate-400">{ format!("{} · {}", admin.email, admin.role.label()) }</p>
                                </div>
                            </div>
                            if removable {
                                <button onclick={on_delete} aria-label="Eliminar" class="p-1.5 rounded-lg text-rose-600 hover:bg-rose-50">{ icon(Icon::Trash) }</button>
                            }
                        </li>
                    }
                }) }
            </ul>
        }
    };

    page_shell(
        "Administradores",
        if can_manage {
            html! {
                <button onclick={open_create} class="flex items-center gap-2 bg-[#173E63] text-white px-4 py-2 rounded-[10px] text-xs font-bold">
                    { icon(Icon::Plus) }{"Nuevo administrador"}
                </button>
            }
        } else {
            html! {}
        },
        html! {
            <>
                if !can_manage {
                    <p class="text-sm text-slate-500">{"Solo un super administrador puede añadir o retirar administradores."}</p>
                }
                { card(None, list) }
                if *creating {
                    <Modal title="Nuevo administrador" on_close={close_create}>
                        <AdminEditor {on_created} />
                    </Modal>
                }
                if let Some(admin) = &*deleting {
                    <ConfirmDialog
                        title="Retirar administrador"
                        message={format!("¿Quieres retirar el acceso de administración a {}?", admin.email)}
                        confirm_label="Retirar"
                        busy={*busy}
                        on_confirm={confirm_delete}
                        on_cancel={cancel_delete} />
                }
            </>
        },
    )
}

#[derive(Properties, PartialEq)]
struct AdminEditorProps {
    on_created: Callback<()>,
}

#[function_component(AdminEditor)]
fn admin_editor(props: &AdminEditorProps) -> Html {
    let toaster = use_toast();
    let email = use_state(String::new);
    let nickname = use_state(String::new);
    let password = use_state(String::new);
    let role = use_state(|| Role::Admin);
    let error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    let submit = {
        let email = email.clone();
        let nickname = nickname.clone();
        let password = password.clone();
        let role = role.clone();
        let error = error.clone();
        let saving = saving.clone();
        let on_created = props.on_created.clone();
        Callback::from(move |_| {
            let checked = validate_email(&email)
                .and_then(|_| validate_name(&nickname))
                .and_then(|_| validate_password(&password));
            if let Err(err) = checked {
                error.set(Some(err.to_string()));
                return;
            }
            error.set(None);
            saving.set(true);

            let body = NewAdmin {
                email: email.trim().to_string(),
                nickname: nickname.trim().to_string(),
                password: (*password).clone(),
                role: *role,
            };
            let error = error.clone();
            let saving = saving.clone();
            let toaster = toaster.clone();
            let on_created = on_created.clone();
            spawn_local(async move {
                match ApiClient::with_cookies().create_admin(&body).await {
                    Ok(admin) => {
                        toaster.success(format!("{} ahora es administrador.", admin.email));
                        on_created.emit(());
                    }
                    Err(err) => error.set(Some(err.message())),
                }
                saving.set(false);
            });
        })
    };

    let on_role = {
        let role = role.clone();
        Callback::from(move |value: String| {
            if let Some(next) = Role::parse(&value).filter(Role::is_admin) {
                role.set(next);
            }
        })
    };
    let options = vec![
        (Role::Admin.as_str().to_string(), Role::Admin.label().to_string()),
        (Role::SuperAdmin.as_str().to_string(), Role::SuperAdmin.label().to_string()),
    ];

    html! {
        <form class="space-y-4" onsubmit={on_submit(submit)}>
            <TextField label="Correo electrónico" input_type="email" value={(*email).clone()} on_input={bind(&email)} />
            <TextField label="Apodo" value={(*nickname).clone()} on_input={bind(&nickname)} />
            <TextField label="Contraseña inicial" input_type="password" autocomplete="new-password"
                value={(*password).clone()} on_input={bind(&password)} />
            <PasswordHints password={(*password).clone()} />
            <SelectField label="Rol" value={role.as_str()} {options} on_change={on_role} />
            if let Some(msg) = &*error {
                <p class="text-sm text-red-500">{ msg.clone() }</p>
            }
            <SubmitButton label="Crear administrador" busy={*saving} />
        </form>
    }
}

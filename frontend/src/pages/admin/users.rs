use finanzas_core::models::{AdminUserUpdate, Id, Role, User};
use finanzas_core::sessions::search_users;
use finanzas_core::validation::{validate_email, validate_name};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::ApiClient;
use crate::components::dialog::ConfirmDialog;
use crate::components::form::{bind, on_submit, SelectField, SubmitButton, TextField};
use crate::components::icons::{icon, Icon};
use crate::components::layout::{card, loading_row, page_shell};
use crate::guards::use_current_user;
use crate::routes::Route;
use crate::toast::use_toast;

fn role_badge(role: Role) -> Html {
    let tone = match role {
        Role::User => "bg-slate-100 text-slate-600",
        Role::Admin => "bg-[#B2CBDE] text-[#173E63]",
        Role::SuperAdmin => "bg-[#173E63] text-white",
    };
    html! {
        <span class={classes!("px-2", "py-0.5", "rounded-full", "text-[10px]", "font-bold", "uppercase", tone)}>{ role.label() }</span>
    }
}

#[function_component(UsersPage)]
pub fn users_page() -> Html {
    let toaster = use_toast();
    let users = use_state(Vec::<User>::new);
    let loading = use_state(|| true);
    let reload = use_state(|| 0u32);
    let query = use_state(String::new);
    let deleting = use_state(|| None::<User>);
    let busy = use_state(|| false);

    {
        let users = users.clone();
        let loading = loading.clone();
        let toaster = toaster.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match ApiClient::with_cookies().admin_users().await {
                        Ok(list) => users.set(list),
                        Err(err) => toaster.api_error(&err),
                    }
                    loading.set(false);
                });
                || ()
            },
            *reload,
        );
    }

    let confirm_delete = {
        let deleting = deleting.clone();
        let busy = busy.clone();
        let reload = reload.clone();
        Callback::from(move |_| {
            let Some(user) = (*deleting).clone() else {
                return;
            };
            busy.set(true);
            let deleting = deleting.clone();
            let busy = busy.clone();
            let reload = reload.clone();
            let toaster = toaster.clone();
            spawn_local(async move {
                match ApiClient::with_cookies().admin_delete_user(user.id).await {
                    Ok(()) => {
                        toaster.success(format!("Usuario {} eliminado.", user.email));
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

    let visible = search_users(&users, &query);

    let table = if *loading {
        loading_row("Cargando usuarios...")
    } else if visible.is_empty() {
        loading_row("Ningún usuario coincide con la búsqueda.")
    } else {
        html! {
            <table class="w-full text-left text-sm">
                <thead>
                    <tr class="text-slate-500 text-[10px] uppercase tracking-widest">
                        <th class="py-2 font-bold">{"Usuario"}</th>
                        <th class="py-2 font-bold">{"Correo"}</th>
                        <th class="py-2 font-bold">{"Rol"}</th>
                        <th class="py-2"></th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-slate-100">
                    { for visible.into_iter().map(|user| {
                        let on_delete = {
                            let deleting = deleting.clone();
                            let user = user.clone();
                            Callback::from(move |_| deleting.set(Some(user.clone())))
                        };
                        html! {
                            <tr key={user.id}>
                                <td class="py-3 font-medium text-[#173E63]">{ user.display_name().to_string() }</td>
                                <td class="py-3 text-slate-500">{ user.email.clone() }</td>
                                <td class="py-3">{ role_badge(user.role) }</td>
                                <td class="py-3">
                                    <div class="flex justify-end gap-2">
                                        <Link<Route> to={Route::AdminUserDetail { id: user.id }} classes="p-1.5 rounded-lg text-[#1D617A] hover:bg-slate-100">
                                            { icon(Icon::Pencil) }
                                        </Link<Route>>
                                        <button onclick={on_delete} aria-label="Eliminar" class="p-1.5 rounded-lg text-rose-600 hover:bg-rose-50">{ icon(Icon::Trash) }</button>
                                    </div>
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        }
    };

    page_shell(
        "Usuarios",
        html! {
            <div class="w-64">
                <TextField label="Buscar" placeholder="Correo, apodo o rol" value={(*query).clone()} on_input={bind(&query)} />
            </div>
        },
        html! {
            <>
                { card(Some(&format!("{} usuarios", users.len())), table) }
                if let Some(user) = &*deleting {
                    <ConfirmDialog
                        title="Eliminar usuario"
                        message={format!("Se eliminará {} junto con todos sus datos.", user.email)}
                        busy={*busy}
                        on_confirm={confirm_delete}
                        on_cancel={cancel_delete} />
                }
            </>
        },
    )
}

#[derive(Properties, PartialEq)]
pub struct UserDetailProps {
    pub id: Id,
}

#[function_component(UserDetailPage)]
pub fn user_detail_page(props: &UserDetailProps) -> Html {
    let toaster = use_toast();
    let me = use_current_user();
    let user = use_state(|| None::<User>);
    let missing = use_state(|| false);

    {
        let user = user.clone();
        let missing = missing.clone();
        use_effect_with_deps(
            move |id: &Id| {
                let id = *id;
                spawn_local(async move {
                    match ApiClient::with_cookies().admin_user(id).await {
                        Ok(found) => user.set(Some(found)),
                        Err(err) => {
                            toaster.api_error(&err);
                            missing.set(true);
                        }
                    }
                });
                || ()
            },
            props.id,
        );
    }

    let can_change_roles = me.map(|me| me.role.can_manage_admins()).unwrap_or(false);
    let back = html! {
        <Link<Route> to={Route::AdminUsers} classes="flex items-center gap-1 text-sm font-bold text-[#1D617A]">
            { icon(Icon::ChevronLeft) }{"Volver"}
        </Link<Route>>
    };

    let on_saved = {
        let user = user.clone();
        Callback::from(move |saved: User| user.set(Some(saved)))
    };

    let body = match (&*user, *missing) {
        (Some(found), _) => html! {
            <UserEditor key={found.id} user={found.clone()} {can_change_roles} {on_saved} />
        },
        (None, true) => card(None, loading_row("No se ha encontrado el usuario.")),
        (None, false) => loading_row("Cargando usuario..."),
    };

    page_shell("Detalle de usuario", back, body)
}

#[derive(Properties, PartialEq)]
struct UserEditorProps {
    user: User,
    can_change_roles: bool,
    on_saved: Callback<User>,
}

fn changed(before: &str, after: &str) -> Option<String> {
    let after = after.trim();
    (after != before).then(|| after.to_string())
}

#[function_component(UserEditor)]
fn user_editor(props: &UserEditorProps) -> Html {
    let toaster = use_toast();
    let email = use_state(|| props.user.email.clone());
    let nickname = use_state(|| props.user.nickname.clone());
    let role = use_state(|| props.user.role);
    let error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    let submit = {
        let original = props.user.clone();
        let on_saved = props.on_saved.clone();
        let email = email.clone();
        let nickname = nickname.clone();
        let role = role.clone();
        let error = error.clone();
        let saving = saving.clone();
        Callback::from(move |_| {
            if let Err(err) = validate_email(&email).and_then(|_| validate_name(&nickname)) {
                error.set(Some(err.to_string()));
                return;
            }
            let body = AdminUserUpdate {
                email: changed(&original.email, &email),
                nickname: changed(&original.nickname, &nickname),
                role: (*role != original.role).then_some(*role),
            };
            if body == AdminUserUpdate::default() {
                error.set(Some("No hay cambios que guardar.".to_string()));
                return;
            }
            error.set(None);
            saving.set(true);

            let id = original.id;
            let on_saved = on_saved.clone();
            let error = error.clone();
            let saving = saving.clone();
            let toaster = toaster.clone();
            spawn_local(async move {
                match ApiClient::with_cookies().admin_update_user(id, &body).await {
                    Ok(user) => {
                        toaster.success("Usuario actualizado.");
                        on_saved.emit(user);
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
            if let Some(next) = Role::parse(&value) {
                role.set(next);
            }
        })
    };
    let role_options: Vec<(String, String)> = [Role::User, Role::Admin, Role::SuperAdmin]
        .iter()
        .map(|r| (r.as_str().to_string(), r.label().to_string()))
        .collect();

    card(
        Some(&format!("Usuario #{}", props.user.id)),
        html! {
            <form class="space-y-4 max-w-lg" onsubmit={on_submit(submit)}>
                <TextField label="Correo electrónico" input_type="email" value={(*email).clone()} on_input={bind(&email)} />
                <TextField label="Apodo" value={(*nickname).clone()} on_input={bind(&nickname)} />
                if props.can_change_roles {
                    <SelectField label="Rol" value={role.as_str()} options={role_options} on_change={on_role} />
                } else {
                    <div class="flex items-center gap-2 text-sm text-slate-500">
                        {"Rol: "}{ role_badge(*role) }
                    </div>
                }
                if let Some(msg) = &*error {
                    <p class="text-sm text-red-500">{ msg.clone() }</p>
                }
                <SubmitButton label="Guardar cambios" busy={*saving} />
            </form>
        },
    )
}

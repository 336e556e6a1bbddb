use finanzas_core::error::AuthFlow;
use finanzas_core::models::{PasswordChange, ProfileUpdate};
use finanzas_core::validation::{
    validate_email, validate_name, validate_password, validate_password_confirmation,
    validate_required,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::ApiClient;
use crate::components::dialog::ConfirmDialog;
use crate::components::form::{bind, on_submit, PasswordHints, SubmitButton, TextField};
use crate::components::layout::{card, page_shell};
use crate::guards::use_current_user;
use crate::routes::Route;
use crate::storage::clear_token;
use crate::toast::use_toast;

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let user = use_current_user();

    html! {
        { page_shell(
            "Perfil",
            html! {},
            html! {
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                    <ProfileForm
                        email={user.as_ref().map(|u| u.email.clone()).unwrap_or_default()}
                        nickname={user.as_ref().map(|u| u.nickname.clone()).unwrap_or_default()} />
                    <PasswordForm />
                    <div class="lg:col-span-2"><DangerZone /></div>
                </div>
            },
        ) }
    }
}

#[derive(Properties, PartialEq)]
struct ProfileFormProps {
    email: String,
    nickname: String,
}

#[function_component(ProfileForm)]
fn profile_form(props: &ProfileFormProps) -> Html {
    let toaster = use_toast();
    let email = use_state(|| props.email.clone());
    let nickname = use_state(|| props.nickname.clone());
    let error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    let submit = {
        let email = email.clone();
        let nickname = nickname.clone();
        let error = error.clone();
        let saving = saving.clone();
        Callback::from(move |_| {
            if let Err(err) = validate_email(&email).and_then(|_| validate_name(&nickname)) {
                error.set(Some(err.to_string()));
                return;
            }
            error.set(None);
            saving.set(true);

            let body = ProfileUpdate {
                email: email.trim().to_string(),
                nickname: nickname.trim().to_string(),
            };
            let email = email.clone();
            let nickname = nickname.clone();
            let error = error.clone();
            let saving = saving.clone();
            let toaster = toaster.clone();
            spawn_local(async move {
                match ApiClient::with_cookies().update_profile(&body).await {
                    Ok(user) => {
                        email.set(user.email.clone());
                        nickname.set(user.nickname.clone());
                        toaster.success("Perfil actualizado.");
                    }
                    Err(err) => error.set(Some(err.message())),
                }
                saving.set(false);
            });
        })
    };

    card(
        Some("Datos personales"),
        html! {
            <form class="space-y-4" onsubmit={on_submit(submit)}>
                <TextField label="Correo electrónico" input_type="email" value={(*email).clone()} on_input={bind(&email)} />
                <TextField label="Apodo" value={(*nickname).clone()} on_input={bind(&nickname)} />
                if let Some(msg) = &*error {
                    <p class="text-sm text-red-500">{ msg.clone() }</p>
                }
                <SubmitButton label="Guardar cambios" busy={*saving} />
            </form>
        },
    )
}

#[function_component(PasswordForm)]
fn password_form() -> Html {
    let toaster = use_toast();
    let current = use_state(String::new);
    let next = use_state(String::new);
    let confirm = use_state(String::new);
    let error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    let submit = {
        let current = current.clone();
        let next = next.clone();
        let confirm = confirm.clone();
        let error = error.clone();
        let saving = saving.clone();
        Callback::from(move |_| {
            let checked = validate_required(&current, "contraseña actual")
                .map(|_| ())
                .and_then(|_| validate_password(&next))
                .and_then(|_| validate_password_confirmation(&next, &confirm));
            if let Err(err) = checked {
                error.set(Some(err.to_string()));
                return;
            }
            error.set(None);
            saving.set(true);

            let body = PasswordChange {
                current_password: (*current).clone(),
                new_password: (*next).clone(),
            };
            let current = current.clone();
            let next = next.clone();
            let confirm = confirm.clone();
            let error = error.clone();
            let saving = saving.clone();
            let toaster = toaster.clone();
            spawn_local(async move {
                match ApiClient::with_cookies().change_password(&body).await {
                    Ok(_) => {
                        current.set(String::new());
                        next.set(String::new());
                        confirm.set(String::new());
                        toaster.success("Contraseña cambiada.");
                    }
                    Err(err) => error.set(Some(AuthFlow::ChangePassword.message_for(&err))),
                }
                saving.set(false);
            });
        })
    };

    card(
        Some("Cambiar contraseña"),
        html! {
            <form class="space-y-4" onsubmit={on_submit(submit)}>
                <TextField label="Contraseña actual" input_type="password" autocomplete="current-password"
                    value={(*current).clone()} on_input={bind(&current)} />
                <TextField label="Nueva contraseña" input_type="password" autocomplete="new-password"
                    value={(*next).clone()} on_input={bind(&next)} />
                <PasswordHints password={(*next).clone()} />
                <TextField label="Repite la nueva contraseña" input_type="password" autocomplete="new-password"
                    value={(*confirm).clone()} on_input={bind(&confirm)} />
                if let Some(msg) = &*error {
                    <p class="text-sm text-red-500">{ msg.clone() }</p>
                }
                <SubmitButton label="Cambiar contraseña" busy={*saving} />
            </form>
        },
    )
}

#[function_component(DangerZone)]
fn danger_zone() -> Html {
    let toaster = use_toast();
    let navigator = use_navigator();
    let confirming = use_state(|| false);
    let busy = use_state(|| false);

    let open = {
        let confirming = confirming.clone();
        Callback::from(move |_| confirming.set(true))
    };
    let cancel = {
        let confirming = confirming.clone();
        Callback::from(move |_| confirming.set(false))
    };
    let confirm = {
        let confirming = confirming.clone();
        let busy = busy.clone();
        Callback::from(move |_| {
            busy.set(true);
            let confirming = confirming.clone();
            let busy = busy.clone();
            let toaster = toaster.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                match ApiClient::with_cookies().delete_account().await {
                    Ok(()) => {
                        clear_token();
                        toaster.clear();
                        toaster.info("Tu cuenta ha sido eliminada.");
                        if let Some(navigator) = navigator {
                            navigator.replace(&Route::Landing);
                        }
                    }
                    Err(err) => {
                        toaster.error(AuthFlow::DeleteAccount.message_for(&err));
                        busy.set(false);
                        confirming.set(false);
                    }
                }
            });
        })
    };

    html! {
        <>
            <div class="bg-white rounded-2xl border border-red-200 p-5 flex flex-wrap gap-4 items-center justify-between">
                <div>
                    <h3 class="font-bold text-red-700">{"Eliminar cuenta"}</h3>
                    <p class="text-sm text-slate-500">{"Se borrarán tus cuentas, etiquetas y transacciones. No se puede deshacer."}</p>
                </div>
                <button onclick={open} class="bg-red-600 text-white px-4 py-2 rounded-[10px] text-xs font-bold">{"Eliminar mi cuenta"}</button>
            </div>
            if *confirming {
                <ConfirmDialog
                    title="Eliminar cuenta"
                    message="Esta acción es definitiva. ¿Quieres eliminar tu cuenta y todos tus datos?"
                    confirm_label="Eliminar definitivamente"
                    busy={*busy}
                    on_confirm={confirm}
                    on_cancel={cancel} />
            }
        </>
    }
}

//! Sign-in, sign-up and password recovery screens.

use finanzas_core::error::AuthFlow;
use finanzas_core::guard::{post_login_destination, GuardKind, POST_LOGIN_DELAY_MS};
use finanzas_core::models::{LoginRequest, RecoverRequest, ResetRequest, SignupRequest};
use finanzas_core::validation::{
    validate_email, validate_name, validate_password, validate_password_confirmation,
    validate_required,
};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::ApiClient;
use crate::components::form::{bind, on_submit, PasswordHints, SubmitButton, TextField};
use crate::components::icons::{sized_icon, Icon};
use crate::routes::{ReturnTo, Route};
use crate::storage::{flag_just_logged_in, store_token};
use crate::toast::use_toast;

fn auth_card(title: &str, subtitle: &str, icon: Icon, body: Html, footer: Html) -> Html {
    html! {
        <div class="min-h-screen flex items-center justify-center bg-[#D8E1E8] px-4 py-10">
            <div class="w-full max-w-md bg-white rounded-[24px] shadow-xl p-8">
                <Link<Route> to={Route::Landing} classes="flex items-center justify-center gap-2 mb-6">
                    <span class="w-11 h-11 rounded-full bg-[#173E63] text-white flex items-center justify-center">{ sized_icon(icon, 22) }</span>
                </Link<Route>>
                <h1 class="text-2xl font-black text-center text-[#173E63]">{ title.to_string() }</h1>
                <p class="mt-1 mb-6 text-sm text-center text-slate-500">{ subtitle.to_string() }</p>
                { body }
                <div class="mt-6 text-center text-sm text-slate-500 space-y-2">{ footer }</div>
            </div>
        </div>
    }
}

fn inline_error(error: &Option<String>) -> Html {
    match error {
        Some(msg) => html! { <p class="text-sm text-red-500">{ msg.clone() }</p> },
        None => html! {},
    }
}

/// Navigate to an in-app path, falling back to the area's home.
fn go_to(navigator: &Navigator, kind: GuardKind, path: &str) {
    match Route::recognize(path) {
        Some(route) if route != Route::NotFound => navigator.push(&route),
        _ => navigator.push(&match kind {
            GuardKind::Member => Route::Dashboard,
            GuardKind::Admin => Route::AdminOverview,
        }),
    }
}

#[hook]
fn use_return_to() -> Option<String> {
    use_location()
        .and_then(|location| location.query::<ReturnTo>().ok())
        .and_then(|query| query.from)
}

#[derive(Properties, PartialEq)]
struct SignInFormProps {
    kind: GuardKind,
}

/// Email and password form shared by the member and admin logins.
#[function_component(SignInForm)]
fn sign_in_form(props: &SignInFormProps) -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();
    let toaster = use_toast();
    let from = use_return_to();
    let kind = props.kind;

    let submit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let loading = loading.clone();
        Callback::from(move |_| {
            if *loading {
                return;
            }
            let checked = validate_email(&email)
                .and_then(|_| validate_required(&password, "contraseña").map(|_| ()));
            if let Err(err) = checked {
                error.set(Some(err.to_string()));
                return;
            }
            error.set(None);
            loading.set(true);

            let body = LoginRequest {
                email: email.trim().to_string(),
                password: (*password).clone(),
            };
            let error = error.clone();
            let loading = loading.clone();
            let navigator = navigator.clone();
            let toaster = toaster.clone();
            let from = from.clone();
            spawn_local(async move {
                let client = ApiClient::with_cookies();
                let (result, flow) = match kind {
                    GuardKind::Member => (client.login(&body).await, AuthFlow::Login),
                    GuardKind::Admin => (client.admin_login(&body).await, AuthFlow::AdminLogin),
                };
                match result {
                    Ok(response) => {
                        if let Some(token) = response.token.as_deref().filter(|t| !t.is_empty()) {
                            store_token(token);
                        }
                        flag_just_logged_in();
                        toaster.success("Sesión iniciada.");
                        TimeoutFuture::new(POST_LOGIN_DELAY_MS).await;
                        let destination = post_login_destination(kind, from.as_deref());
                        tracing::info!("login ok, going to {}", destination);
                        if let Some(navigator) = navigator {
                            go_to(&navigator, kind, &destination);
                        }
                    }
                    Err(err) => {
                        let message = flow.message_for(&err);
                        toaster.error(message.clone());
                        error.set(Some(message));
                    }
                }
                loading.set(false);
            });
        })
    };

    html! {
        <form class="space-y-4" onsubmit={on_submit(submit)}>
            <TextField label="Correo electrónico" input_type="email" autocomplete="email"
                value={(*email).clone()} on_input={bind(&email)} />
            <TextField label="Contraseña" input_type="password" autocomplete="current-password"
                value={(*password).clone()} on_input={bind(&password)} />
            { inline_error(&error) }
            <SubmitButton label="Entrar" busy={*loading} busy_label="Entrando..." />
        </form>
    }
}

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    auth_card(
        "Inicia sesión",
        "Accede a tu panel de finanzas.",
        Icon::Wallet,
        html! { <SignInForm kind={GuardKind::Member} /> },
        html! {
            <>
                <p><Link<Route> to={Route::Recover} classes="font-bold text-[#173E63]">{"¿Olvidaste tu contraseña?"}</Link<Route>></p>
                <p>{"¿No tienes cuenta? "}<Link<Route> to={Route::Register} classes="font-bold text-[#173E63]">{"Regístrate"}</Link<Route>></p>
            </>
        },
    )
}

#[function_component(AdminLoginPage)]
pub fn admin_login_page() -> Html {
    auth_card(
        "Administración",
        "Acceso reservado al equipo de administración.",
        Icon::Shield,
        html! { <SignInForm kind={GuardKind::Admin} /> },
        html! {
            <p><Link<Route> to={Route::Login} classes="font-bold text-[#173E63]">{"Volver al acceso de usuarios"}</Link<Route>></p>
        },
    )
}

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let email = use_state(String::new);
    let nickname = use_state(String::new);
    let password = use_state(String::new);
    let confirm = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();
    let toaster = use_toast();

    let submit = {
        let email = email.clone();
        let nickname = nickname.clone();
        let password = password.clone();
        let confirm = confirm.clone();
        let error = error.clone();
        let loading = loading.clone();
        Callback::from(move |_| {
            let checked = validate_email(&email)
                .and_then(|_| validate_name(&nickname))
                .and_then(|_| validate_password(&password))
                .and_then(|_| validate_password_confirmation(&password, &confirm));
            if let Err(err) = checked {
                error.set(Some(err.to_string()));
                return;
            }
            error.set(None);
            loading.set(true);

            let body = SignupRequest {
                email: email.trim().to_string(),
                nickname: nickname.trim().to_string(),
                password: (*password).clone(),
            };
            let error = error.clone();
            let loading = loading.clone();
            let navigator = navigator.clone();
            let toaster = toaster.clone();
            spawn_local(async move {
                match ApiClient::with_cookies().signup(&body).await {
                    Ok(_) => {
                        toaster.success("Cuenta creada. Ya puedes iniciar sesión.");
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Login);
                        }
                    }
                    Err(err) => {
                        let message = AuthFlow::Register.message_for(&err);
                        toaster.error(message.clone());
                        error.set(Some(message));
                    }
                }
                loading.set(false);
            });
        })
    };

    auth_card(
        "Crea tu cuenta",
        "Empieza a organizar tus finanzas hoy.",
        Icon::User,
        html! {
            <form class="space-y-4" onsubmit={on_submit(submit)}>
                <TextField label="Correo electrónico" input_type="email" autocomplete="email"
                    value={(*email).clone()} on_input={bind(&email)} />
                <TextField label="Apodo" autocomplete="nickname"
                    value={(*nickname).clone()} on_input={bind(&nickname)} />
                <TextField label="Contraseña" input_type="password" autocomplete="new-password"
                    value={(*password).clone()} on_input={bind(&password)} />
                <PasswordHints password={(*password).clone()} />
                <TextField label="Repite la contraseña" input_type="password" autocomplete="new-password"
                    value={(*confirm).clone()} on_input={bind(&confirm)} />
                { inline_error(&error) }
                <SubmitButton label="Crear cuenta" busy={*loading} busy_label="Creando..." />
            </form>
        },
        html! {
            <p>{"¿Ya tienes cuenta? "}<Link<Route> to={Route::Login} classes="font-bold text-[#173E63]">{"Inicia sesión"}</Link<Route>></p>
        },
    )
}

#[function_component(RecoverPage)]
pub fn recover_page() -> Html {
    let email = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let sent = use_state(|| false);
    let toaster = use_toast();

    let submit = {
        let email = email.clone();
        let error = error.clone();
        let loading = loading.clone();
        let sent = sent.clone();
        Callback::from(move |_| {
            if let Err(err) = validate_email(&email) {
                error.set(Some(err.to_string()));
                return;
            }
            error.set(None);
            loading.set(true);

            let body = RecoverRequest {
                email: email.trim().to_string(),
            };
            let error = error.clone();
            let loading = loading.clone();
            let sent = sent.clone();
            let toaster = toaster.clone();
            spawn_local(async move {
                match ApiClient::with_cookies().recover_password(&body).await {
                    Ok(_) => sent.set(true),
                    Err(err) => {
                        let message = AuthFlow::Recover.message_for(&err);
                        toaster.error(message.clone());
                        error.set(Some(message));
                    }
                }
                loading.set(false);
            });
        })
    };

    let body = if *sent {
        html! {
            <div class="rounded-xl bg-green-50 border border-green-200 p-4 text-sm text-green-800">
                { format!("Si existe una cuenta para {}, recibirás un correo con un enlace para restablecer la contraseña.", email.trim()) }
            </div>
        }
    } else {
        html! {
            <form class="space-y-4" onsubmit={on_submit(submit)}>
                <TextField label="Correo electrónico" input_type="email" autocomplete="email"
                    value={(*email).clone()} on_input={bind(&email)} />
                { inline_error(&error) }
                <SubmitButton label="Enviar enlace" busy={*loading} busy_label="Enviando..." />
            </form>
        }
    };

    auth_card(
        "Recupera tu contraseña",
        "Te enviaremos un enlace para crear una nueva.",
        Icon::Key,
        body,
        html! {
            <p><Link<Route> to={Route::Login} classes="font-bold text-[#173E63]">{"Volver a iniciar sesión"}</Link<Route>></p>
        },
    )
}

#[derive(Properties, PartialEq)]
pub struct ResetPasswordProps {
    pub token: String,
}

#[function_component(ResetPasswordPage)]
pub fn reset_password_page(props: &ResetPasswordProps) -> Html {
    let password = use_state(String::new);
    let confirm = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();
    let toaster = use_toast();

    let submit = {
        let password = password.clone();
        let confirm = confirm.clone();
        let error = error.clone();
        let loading = loading.clone();
        let token = props.token.clone();
        Callback::from(move |_| {
            let checked = validate_password(&password)
                .and_then(|_| validate_password_confirmation(&password, &confirm));
            if let Err(err) = checked {
                error.set(Some(err.to_string()));
                return;
            }
            error.set(None);
            loading.set(true);

            let body = ResetRequest {
                password: (*password).clone(),
            };
            let token = token.clone();
            let error = error.clone();
            let loading = loading.clone();
            let navigator = navigator.clone();
            let toaster = toaster.clone();
            spawn_local(async move {
                match ApiClient::with_cookies().reset_password(&token, &body).await {
                    Ok(_) => {
                        toaster.success("Contraseña actualizada. Inicia sesión con la nueva.");
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Login);
                        }
                    }
                    Err(err) => {
                        let message = AuthFlow::Reset.message_for(&err);
                        toaster.error(message.clone());
                        error.set(Some(message));
                    }
                }
                loading.set(false);
            });
        })
    };

    auth_card(
        "Nueva contraseña",
        "Elige una contraseña segura.",
        Icon::Key,
        html! {
            <form class="space-y-4" onsubmit={on_submit(submit)}>
                <TextField label="Contraseña" input_type="password" autocomplete="new-password"
                    value={(*password).clone()} on_input={bind(&password)} />
                <PasswordHints password={(*password).clone()} />
                <TextField label="Repite la contraseña" input_type="password" autocomplete="new-password"
                    value={(*confirm).clone()} on_input={bind(&confirm)} />
                { inline_error(&error) }
                <SubmitButton label="Guardar contraseña" busy={*loading} />
            </form>
        },
        html! {
            <p><Link<Route> to={Route::Login} classes="font-bold text-[#173E63]">{"Volver a iniciar sesión"}</Link<Route>></p>
        },
    )
}

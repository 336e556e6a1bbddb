//! Route guards for the member dashboard and the admin back-office.

use finanzas_core::guard::{check_access, Denial, GuardKind, GuardPhase, Pause, Verdict};
use finanzas_core::models::User;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::ApiClient;
use crate::routes::{ReturnTo, Route};
use crate::storage::take_just_logged_in;
use crate::toast::use_toast;

struct TimerPause;

impl Pause for TimerPause {
    async fn pause(&self, millis: u32) {
        TimeoutFuture::new(millis).await;
    }
}

/// Profile of the signed-in user, provided to everything behind a guard.
#[derive(Clone, PartialEq)]
pub struct CurrentUser(pub User);

#[hook]
pub fn use_current_user() -> Option<User> {
    use_context::<CurrentUser>().map(|current| current.0)
}

fn login_route(kind: GuardKind) -> Route {
    match kind {
        GuardKind::Member => Route::Login,
        GuardKind::Admin => Route::AdminLogin,
    }
}

#[derive(Properties, PartialEq)]
pub struct GuardProps {
    pub children: Children,
}

#[derive(Properties, PartialEq)]
struct GuardedProps {
    kind: GuardKind,
    children: Children,
}

#[function_component(Guarded)]
fn guarded(props: &GuardedProps) -> Html {
    let phase = use_state(|| GuardPhase::Loading);
    let navigator = use_navigator();
    let location = use_location();
    let toaster = use_toast();

    {
        let phase = phase.clone();
        let kind = props.kind;
        use_effect_with_deps(
            move |_| {
                let just_logged_in = take_just_logged_in();
                spawn_local(async move {
                    let client = ApiClient::with_cookies();
                    let verdict = check_access(kind, just_logged_in, &client, &TimerPause).await;
                    phase.set(GuardPhase::Settled(verdict));
                });
                || ()
            },
            (),
        );
    }

    {
        let kind = props.kind;
        use_effect_with_deps(
            move |phase: &GuardPhase| {
                if let GuardPhase::Settled(Verdict::Denied(denial)) = phase {
                    if matches!(denial, Denial::Forbidden { .. }) {
                        toaster.error(denial.notice());
                    }
                    let from = location.map(|loc| loc.path().to_string());
                    if let Some(navigator) = navigator {
                        let query = ReturnTo { from };
                        if let Err(err) = navigator.replace_with_query(&login_route(kind), &query) {
                            tracing::warn!("redirect to login failed: {}", err);
                            navigator.replace(&login_route(kind));
                        }
                    }
                }
                || ()
            },
            (*phase).clone(),
        );
    }

    match &*phase {
        GuardPhase::Loading => html! {
            <div class="min-h-screen flex items-center justify-center bg-slate-50">
                <div class="flex flex-col items-center gap-3 text-slate-500">
                    <div class="h-10 w-10 rounded-full border-4 border-[#B2CBDE] border-t-[#173E63] animate-spin"></div>
                    <p class="text-sm">{"Comprobando tu sesión..."}</p>
                </div>
            </div>
        },
        GuardPhase::Settled(Verdict::Granted(user)) => html! {
            <ContextProvider<CurrentUser> context={CurrentUser(user.clone())}>
                { for props.children.iter() }
            </ContextProvider<CurrentUser>>
        },
        GuardPhase::Settled(Verdict::Denied(_)) => html! {},
    }
}

#[function_component(ProtectedRoute)]
pub fn protected_route(props: &GuardProps) -> Html {
    html! {
        <Guarded kind={GuardKind::Member}>{ for props.children.iter() }</Guarded>
    }
}

#[function_component(AdminProtectedRoute)]
pub fn admin_protected_route(props: &GuardProps) -> Html {
    html! {
        <Guarded kind={GuardKind::Admin}>{ for props.children.iter() }</Guarded>
    }
}

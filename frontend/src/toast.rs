//! Toast notifications.
//!
//! The queue (and its de-duplication set) lives in a reducer owned by
//! [`ToastProvider`], so each mounted application gets exactly one.

use std::rc::Rc;

use finanzas_core::notify::{Toast, ToastKind, ToastQueue, TOAST_TIMEOUT_MS};
use finanzas_core::ApiError;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

pub enum ToastAction {
    Push(ToastKind, String),
    Dismiss(u64),
    Clear,
}

#[derive(Default, PartialEq)]
pub struct ToastState {
    queue: ToastQueue,
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut queue = self.queue.clone();
        match action {
            ToastAction::Push(kind, message) => {
                if queue.push(kind, message).is_none() {
                    return self;
                }
            }
            ToastAction::Dismiss(id) => queue.dismiss(id),
            ToastAction::Clear => queue.clear(),
        }
        Rc::new(ToastState { queue })
    }
}

pub type ToastContext = UseReducerHandle<ToastState>;

/// Handle pages use to raise toasts.
#[derive(Clone)]
pub struct Toaster {
    dispatcher: Option<UseReducerDispatcher<ToastState>>,
}

impl Toaster {
    fn push(&self, kind: ToastKind, message: String) {
        match &self.dispatcher {
            Some(dispatcher) => dispatcher.dispatch(ToastAction::Push(kind, message)),
            None => tracing::warn!("toast outside provider: {}", message),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastKind::Info, message.into());
    }

    pub fn api_error(&self, err: &ApiError) {
        self.error(err.message());
    }

    pub fn clear(&self) {
        if let Some(dispatcher) = &self.dispatcher {
            dispatcher.dispatch(ToastAction::Clear);
        }
    }
}

#[hook]
pub fn use_toast() -> Toaster {
    let context = use_context::<ToastContext>();
    Toaster {
        dispatcher: context.map(|handle| handle.dispatcher()),
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let state = use_reducer(ToastState::default);

    html! {
        <ContextProvider<ToastContext> context={state.clone()}>
            { for props.children.iter() }
            <div class="fixed top-4 right-4 z-[100] flex flex-col gap-2 w-80">
                { for state.queue.toasts().iter().map(|toast| html! {
                    <ToastItem key={toast.id} toast={toast.clone()} dispatcher={state.dispatcher()} />
                }) }
            </div>
        </ContextProvider<ToastContext>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    dispatcher: UseReducerDispatcher<ToastState>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    {
        let dispatcher = props.dispatcher.clone();
        use_effect_with_deps(
            move |id: &u64| {
                let id = *id;
                let timeout = Timeout::new(TOAST_TIMEOUT_MS, move || {
                    dispatcher.dispatch(ToastAction::Dismiss(id));
                });
                move || drop(timeout)
            },
            props.toast.id,
        );
    }

    let on_close = {
        let dispatcher = props.dispatcher.clone();
        let id = props.toast.id;
        Callback::from(move |_| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    let tone = match props.toast.kind {
        ToastKind::Success => "border-green-500 bg-green-50 text-green-800",
        ToastKind::Error => "border-red-500 bg-red-50 text-red-800",
        ToastKind::Info => "border-sky-500 bg-sky-50 text-sky-800",
    };

    html! {
        <div class={classes!("flex", "items-start", "gap-3", "border-l-4", "rounded-lg", "shadow-lg", "px-4", "py-3", "text-sm", tone)} role="status">
            <p class="flex-1">{ props.toast.message.clone() }</p>
            <button class="text-xs font-bold opacity-60 hover:opacity-100" aria-label="Cerrar" onclick={on_close}>{"✕"}</button>
        </div>
    }
}

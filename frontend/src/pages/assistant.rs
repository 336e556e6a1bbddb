//! Chat with the finance assistant.
//!
//! The conversation only lives in component state; reloading the page
//! starts a fresh one.

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::form::on_submit;
use crate::components::icons::{icon, sized_icon, Icon};
use crate::components::layout::page_shell;
use crate::storage::store_token;
use crate::toast::use_toast;

#[derive(Clone, Copy, PartialEq)]
enum Speaker {
    Member,
    Assistant,
}

#[derive(Clone, PartialEq)]
struct ChatLine {
    speaker: Speaker,
    text: String,
}

const GREETING: &str =
    "Hola, soy tu asistente financiero. Pregúntame por tus gastos, tus cuentas o cómo ahorrar.";

const RENEWED_MESSAGE: &str = "Hemos renovado tu sesión. Vuelve a enviar la pregunta.";
const EXPIRED_MESSAGE: &str = "Tu sesión del asistente ha caducado. Vuelve a iniciar sesión.";
const OFFLINE_MESSAGE: &str = "No se pudo contactar con el asistente. Revisa tu conexión.";

const SUGGESTIONS: [&str; 3] = [
    "¿En qué gasté más este mes?",
    "Dame ideas para ahorrar",
    "¿Cómo va mi balance?",
];

fn bubble(line: &ChatLine) -> Html {
    let (row, tone) = match line.speaker {
        Speaker::Member => ("justify-end", "bg-[#173E63] text-white rounded-br-sm"),
        Speaker::Assistant => ("justify-start", "bg-[#D8E1E8] text-[#173E63] rounded-bl-sm"),
    };
    html! {
        <div class={classes!("flex", row)}>
            <p class={classes!("max-w-[75%]", "whitespace-pre-line", "px-4", "py-2", "rounded-2xl", "text-sm", tone)}>
                { line.text.clone() }
            </p>
        </div>
    }
}

#[function_component(AssistantPage)]
pub fn assistant_page() -> Html {
    let toaster = use_toast();
    let lines = use_state(|| {
        vec![ChatLine {
            speaker: Speaker::Assistant,
            text: GREETING.to_string(),
        }]
    });
    let draft = use_state(String::new);
    let waiting = use_state(|| false);

    let send = {
        let lines = lines.clone();
        let draft = draft.clone();
        let waiting = waiting.clone();
        Callback::from(move |text: String| {
            let text = text.trim().to_string();
            if text.is_empty() || *waiting {
                return;
            }
            let mut history = (*lines).clone();
            history.push(ChatLine {
                speaker: Speaker::Member,
                text: text.clone(),
            });
            lines.set(history.clone());
            draft.set(String::new());
            waiting.set(true);

            let lines = lines.clone();
            let waiting = waiting.clone();
            let toaster = toaster.clone();
            spawn_local(async move {
                match ApiClient::with_stored_token().ask_assistant(&text).await {
                    Ok(answer) => {
                        history.push(ChatLine {
                            speaker: Speaker::Assistant,
                            text: answer.reply,
                        });
                        lines.set(history);
                    }
                    Err(err) if err.is_unauthorized() => {
                        let renewed = ApiClient::with_cookies()
                            .refresh_session()
                            .await
                            .ok()
                            .and_then(|response| response.token)
                            .filter(|token| !token.is_empty());
                        match renewed {
                            Some(token) => {
                                store_token(&token);
                                toaster.info(RENEWED_MESSAGE);
                            }
                            None => toaster.error(EXPIRED_MESSAGE),
                        }
                    }
                    Err(err) if err.is_network() => {
                        toaster.error(OFFLINE_MESSAGE);
                    }
                    Err(err) => {
                        tracing::warn!("assistant call failed: {}", err);
                        toaster.api_error(&err);
                    }
                }
                waiting.set(false);
            });
        })
    };

    let submit = {
        let send = send.clone();
        let draft = draft.clone();
        Callback::from(move |_| send.emit((*draft).clone()))
    };
    let on_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            draft.set(input.value());
        })
    };

    page_shell(
        "Asistente",
        html! {},
        html! {
            <div class="bg-white rounded-2xl border border-slate-200 shadow-sm flex flex-col h-[70vh]">
                <div class="flex items-center gap-3 px-5 py-4 border-b border-slate-100">
                    <span class="w-9 h-9 rounded-full bg-[#173E63] text-white flex items-center justify-center">{ sized_icon(Icon::Chat, 18) }</span>
                    <div>
                        <p class="font-bold text-[#173E63]">{"Asistente financiero"}</p>
                        <p class="text-xs text-slate-400">{"Las respuestas pueden tardar unos segundos."}</p>
                    </div>
                </div>
                <div class="flex-1 overflow-y-auto px-5 py-4 space-y-3">
                    { for lines.iter().map(bubble) }
                    if *waiting {
                        <div class="flex justify-start">
                            <p class="px-4 py-2 rounded-2xl bg-[#D8E1E8] text-[#173E63] text-sm animate-pulse">{"Escribiendo..."}</p>
                        </div>
                    }
                </div>
                if lines.len() == 1 {
                    <div class="flex flex-wrap gap-2 px-5 pb-3">
                        { for SUGGESTIONS.iter().map(|hint| {
                            let send = send.clone();
                            let text = hint.to_string();
                            html! {
                                <button class="px-3 py-1 rounded-full bg-slate-100 text-xs font-bold text-[#1D617A] hover:bg-[#B2CBDE]"
                                    onclick={Callback::from(move |_| send.emit(text.clone()))}>{ *hint }</button>
                            }
                        }) }
                    </div>
                }
                <form class="flex gap-2 px-5 py-4 border-t border-slate-100" onsubmit={on_submit(submit)}>
                    <input class="flex-1 rounded-[10px] border border-slate-200 px-4 py-2 text-sm focus:outline-none focus:border-[#1D617A]"
                        placeholder="Escribe tu pregunta..." value={(*draft).clone()} oninput={on_input} disabled={*waiting} />
                    <button type="submit" aria-label="Enviar" disabled={*waiting || draft.trim().is_empty()}
                        class="bg-[#173E63] text-white px-4 py-2 rounded-[10px] disabled:opacity-50">{ icon(Icon::Send) }</button>
                </form>
            </div>
        },
    )
}

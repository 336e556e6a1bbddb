//! Controlled form inputs. Each field owns no state; the page keeps the value
//! in a `use_state` handle and receives every edit through `on_input`.

use finanzas_core::validation::password_checks;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

const INPUT_CLASS: &str =
    "w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-sm text-[#173E63] border border-transparent focus:border-[#173E63] focus:outline-none";

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_input: Callback<String>,
    #[prop_or(AttrValue::from("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub autocomplete: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit(input.value());
        })
    };

    html! {
        <label class="block space-y-1">
            <span class="text-[12px] font-bold text-slate-500">{ props.label.clone() }</span>
            <input
                type={props.input_type.clone()}
                class={INPUT_CLASS}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                autocomplete={props.autocomplete.clone()}
                disabled={props.disabled}
                {oninput}
            />
            if let Some(error) = &props.error {
                <span class="block text-xs text-red-500">{ error.clone() }</span>
            }
        </label>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextAreaFieldProps {
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_input: Callback<String>,
    #[prop_or_default]
    pub placeholder: AttrValue,
}

#[function_component(TextAreaField)]
pub fn text_area_field(props: &TextAreaFieldProps) -> Html {
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            on_input.emit(input.value());
        })
    };

    html! {
        <label class="block space-y-1">
            <span class="text-[12px] font-bold text-slate-500">{ props.label.clone() }</span>
            <textarea rows="3" class={INPUT_CLASS} value={props.value.clone()} placeholder={props.placeholder.clone()} {oninput}></textarea>
        </label>
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectFieldProps {
    pub label: AttrValue,
    pub value: AttrValue,
    /// `(value, label)` pairs.
    pub options: Vec<(String, String)>,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
}

#[function_component(SelectField)]
pub fn select_field(props: &SelectFieldProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(select.value());
        })
    };

    html! {
        <label class="block space-y-1">
            <span class="text-[12px] font-bold text-slate-500">{ props.label.clone() }</span>
            <select class={INPUT_CLASS} {onchange}>
                if let Some(placeholder) = &props.placeholder {
                    <option value="" selected={props.value.is_empty()}>{ placeholder.clone() }</option>
                }
                { for props.options.iter().map(|(value, label)| html! {
                    <option value={value.clone()} selected={props.value.as_str() == value.as_str()}>{ label.clone() }</option>
                }) }
            </select>
        </label>
    }
}

#[derive(Properties, PartialEq)]
pub struct SubmitButtonProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub busy: bool,
    #[prop_or(AttrValue::from("Guardando..."))]
    pub busy_label: AttrValue,
}

#[function_component(SubmitButton)]
pub fn submit_button(props: &SubmitButtonProps) -> Html {
    html! {
        <button type="submit" disabled={props.busy} class="w-full bg-[#173E63] text-white py-2.5 rounded-[10px] text-sm font-bold disabled:opacity-60">
            { if props.busy { props.busy_label.clone() } else { props.label.clone() } }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct PasswordHintsProps {
    pub password: AttrValue,
}

/// Live checklist of the password composition rules.
#[function_component(PasswordHints)]
pub fn password_hints(props: &PasswordHintsProps) -> Html {
    if props.password.is_empty() {
        return html! {};
    }

    html! {
        <ul class="text-xs space-y-0.5">
            { for password_checks(&props.password).into_iter().map(|(rule, met)| {
                let tone = if met { "text-green-600" } else { "text-slate-400" };
                html! {
                    <li class={tone}>{ if met { "✓ " } else { "• " } }{ rule.hint() }</li>
                }
            }) }
        </ul>
    }
}

/// Prevents the browser's native form submission and forwards to `cb`.
pub fn on_submit(cb: Callback<()>) -> Callback<SubmitEvent> {
    Callback::from(move |e: SubmitEvent| {
        e.prevent_default();
        cb.emit(());
    })
}

/// Sets a `use_state` string from a field.
pub fn bind(handle: &UseStateHandle<String>) -> Callback<String> {
    let handle = handle.clone();
    Callback::from(move |value: String| handle.set(value))
}

use yew::prelude::*;

use crate::components::icons::{icon, Icon};

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: AttrValue,
    pub on_close: Callback<()>,
    pub children: Children,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/40 px-4">
            <div class="w-full max-w-lg bg-white rounded-2xl shadow-xl overflow-hidden" role="dialog" aria-modal="true">
                <div class="flex items-center justify-between px-5 py-4 border-b border-slate-200">
                    <h3 class="font-bold text-[#173E63]">{ props.title.clone() }</h3>
                    <button class="p-1 text-slate-400 hover:text-slate-700" aria-label="Cerrar" onclick={on_close}>{ icon(Icon::Close) }</button>
                </div>
                <div class="p-5">{ for props.children.iter() }</div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
    pub title: AttrValue,
    pub message: AttrValue,
    #[prop_or(AttrValue::from("Eliminar"))]
    pub confirm_label: AttrValue,
    #[prop_or_default]
    pub busy: bool,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Yes/no confirmation before a destructive action.
#[function_component(ConfirmDialog)]
pub fn confirm_dialog(props: &ConfirmDialogProps) -> Html {
    let on_confirm = {
        let cb = props.on_confirm.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_cancel = {
        let cb = props.on_cancel.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <Modal title={props.title.clone()} on_close={props.on_cancel.clone()}>
            <p class="text-sm text-slate-600">{ props.message.clone() }</p>
            <div class="flex gap-3 mt-6">
                <button onclick={on_cancel} class="flex-1 bg-[#B2CBDE] text-[#173E63] py-2 rounded-[10px] text-xs font-bold">{"Cancelar"}</button>
                <button onclick={on_confirm} disabled={props.busy} class="flex-1 bg-red-600 text-white py-2 rounded-[10px] text-xs font-bold disabled:opacity-60">
                    { if props.busy { AttrValue::from("Procesando...") } else { props.confirm_label.clone() } }
                </button>
            </div>
        </Modal>
    }
}

use finanzas_core::format::CURRENCIES;
use yew::prelude::*;

use crate::components::form::SelectField;
use crate::components::layout::{card, page_shell};
use crate::settings::{save_settings, AppSettings};
use crate::toast::use_toast;

#[function_component(PreferencesPage)]
pub fn preferences_page() -> Html {
    let settings = use_context::<UseStateHandle<AppSettings>>();
    let toaster = use_toast();

    let current = settings
        .as_ref()
        .map(|s| (**s).clone())
        .unwrap_or_default();

    let on_currency = {
        let settings = settings.clone();
        Callback::from(move |code: String| {
            let Some(settings) = settings.as_ref() else {
                return;
            };
            let next = AppSettings::with_currency(&code);
            save_settings(&next);
            toaster.success(format!("Moneda cambiada a {}.", next.currency_code));
            settings.set(next);
        })
    };

    let options: Vec<(String, String)> = CURRENCIES
        .iter()
        .map(|(code, symbol)| (code.to_string(), format!("{code} ({symbol})")))
        .collect();

    page_shell(
        "Ajustes",
        html! {},
        html! {
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                { card(Some("Preferencias"), html! {
                    <div class="space-y-3">
                        <SelectField label="Moneda" value={current.currency_code.clone()} options={options} on_change={on_currency} />
                        <p class="text-xs text-slate-400">{"La moneda se aplica a todos los importes del panel. Se guarda en este navegador."}</p>
                    </div>
                }) }
                { card(Some("Vista previa"), html! {
                    <div class="space-y-2 text-sm">
                        <p class="flex justify-between"><span class="text-slate-500">{"Saldo"}</span><span class="font-bold text-[#173E63]">{ current.money(1234.5) }</span></p>
                        <p class="flex justify-between"><span class="text-slate-500">{"Gasto"}</span><span class="font-bold text-rose-600">{ current.money(-89.99) }</span></p>
                    </div>
                }) }
            </div>
        },
    )
}

//! Marketing pages.

use finanzas_core::validation::{validate_email, validate_name, validate_required};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::form::{bind, on_submit, SubmitButton, TextAreaField, TextField};
use crate::components::icons::{sized_icon, Icon};
use crate::routes::Route;
use crate::toast::use_toast;

const FEATURES: [(Icon, &str, &str); 6] = [
    (Icon::Wallet, "Cuentas", "Agrupa tu dinero en cuentas y categorías y consulta el saldo total de un vistazo."),
    (Icon::Card, "Transacciones", "Registra ingresos y gastos con fecha, descripción y etiqueta, y filtra por cuenta o periodo."),
    (Icon::Tag, "Etiquetas", "Clasifica tus movimientos con etiquetas propias de cada cuenta."),
    (Icon::Chart, "Estadísticas", "Desglose de gastos por categoría, tendencia de seis meses y comparación con el mes anterior."),
    (Icon::Calendar, "Calendario", "Mira cada día del mes con sus ingresos y gastos y abre el detalle con un clic."),
    (Icon::Chat, "Asistente", "Pregunta por tus finanzas en lenguaje natural y recibe respuestas al momento."),
];

fn feature_grid() -> Html {
    html! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
            { for FEATURES.iter().map(|(icon, title, body)| html! {
                <div class="bg-white rounded-2xl border border-slate-200 p-6 shadow-sm">
                    <div class="w-10 h-10 rounded-xl bg-[#D8E1E8] text-[#173E63] flex items-center justify-center">{ sized_icon(*icon, 22) }</div>
                    <h3 class="mt-4 font-bold text-[#173E63]">{ *title }</h3>
                    <p class="mt-2 text-sm text-slate-500">{ *body }</p>
                </div>
            }) }
        </div>
    }
}

fn section(title: &str, subtitle: &str, body: Html) -> Html {
    html! {
        <section class="max-w-7xl mx-auto px-6 py-16">
            <h1 class="text-3xl md:text-4xl font-black text-[#173E63]">{ title.to_string() }</h1>
            <p class="mt-3 max-w-2xl text-slate-500">{ subtitle.to_string() }</p>
            <div class="mt-10">{ body }</div>
        </section>
    }
}

#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    html! {
        <>
            <section class="bg-gradient-to-b from-[#D8E1E8] to-white">
                <div class="max-w-7xl mx-auto px-6 py-24 grid md:grid-cols-2 gap-12 items-center">
                    <div>
                        <h1 class="text-4xl md:text-5xl font-black text-[#173E63] leading-tight">
                            {"Controla tus finanzas personales sin complicaciones"}
                        </h1>
                        <p class="mt-5 text-lg text-slate-600">
                            {"Cuentas, movimientos, etiquetas y estadísticas en un panel claro y rápido."}
                        </p>
                        <div class="mt-8 flex gap-3">
                            <Link<Route> to={Route::Register} classes="bg-[#173E63] text-white px-6 py-3 rounded-[10px] font-bold">{"Empieza gratis"}</Link<Route>>
                            <Link<Route> to={Route::Features} classes="bg-white text-[#173E63] border border-[#173E63] px-6 py-3 rounded-[10px] font-bold">{"Ver características"}</Link<Route>>
                        </div>
                    </div>
                    <div class="bg-[#173E63] rounded-[24px] p-8 text-white shadow-xl">
                        <p class="text-sm uppercase tracking-widest text-slate-300">{"Saldo total"}</p>
                        <p class="mt-2 text-4xl font-black">{"12.480,00 €"}</p>
                        <div class="mt-6 grid grid-cols-2 gap-4 text-sm">
                            <div class="bg-white/10 rounded-xl p-4">
                                <p class="text-slate-300">{"Ingresos del mes"}</p>
                                <p class="mt-1 text-xl font-bold text-emerald-300">{"+ 2.350,00 €"}</p>
                            </div>
                            <div class="bg-white/10 rounded-xl p-4">
                                <p class="text-slate-300">{"Gastos del mes"}</p>
                                <p class="mt-1 text-xl font-bold text-rose-300">{"- 1.120,40 €"}</p>
                            </div>
                        </div>
                    </div>
                </div>
            </section>
            { section(
                "Todo lo que necesitas",
                "Herramientas sencillas para entender a dónde va tu dinero.",
                feature_grid(),
            ) }
        </>
    }
}

#[function_component(FeaturesPage)]
pub fn features_page() -> Html {
    section(
        "Características",
        "Finanzas reúne tus cuentas y movimientos y los convierte en información útil.",
        html! {
            <>
                { feature_grid() }
                <div class="mt-12 text-center">
                    <Link<Route> to={Route::Register} classes="bg-[#173E63] text-white px-6 py-3 rounded-[10px] font-bold">{"Crear cuenta"}</Link<Route>>
                </div>
            </>
        },
    )
}

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    section(
        "Nosotros",
        "Somos un equipo pequeño que cree que ordenar las finanzas personales debería ser fácil.",
        html! {
            <div class="grid md:grid-cols-3 gap-6 text-sm text-slate-600">
                <div class="bg-white rounded-2xl border border-slate-200 p-6">
                    <h3 class="font-bold text-[#173E63]">{"Misión"}</h3>
                    <p class="mt-2">{"Ayudar a cualquier persona a saber cuánto gana, cuánto gasta y en qué."}</p>
                </div>
                <div class="bg-white rounded-2xl border border-slate-200 p-6">
                    <h3 class="font-bold text-[#173E63]">{"Privacidad"}</h3>
                    <p class="mt-2">{"Tus datos son tuyos. No los vendemos ni los compartimos con terceros."}</p>
                </div>
                <div class="bg-white rounded-2xl border border-slate-200 p-6">
                    <h3 class="font-bold text-[#173E63]">{"Sencillez"}</h3>
                    <p class="mt-2">{"Sin hojas de cálculo ni configuraciones eternas: registra y consulta."}</p>
                </div>
            </div>
        },
    )
}

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let errors = use_state(|| (None::<String>, None::<String>, None::<String>));
    let toaster = use_toast();

    let submit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let errors = errors.clone();
        Callback::from(move |_| {
            let name_err = validate_name(&name).err().map(|e| e.to_string());
            let email_err = validate_email(&email).err().map(|e| e.to_string());
            let message_err = validate_required(&message, "mensaje")
                .err()
                .map(|e| e.to_string());
            let ok = name_err.is_none() && email_err.is_none() && message_err.is_none();
            errors.set((name_err, email_err, message_err));
            if ok {
                tracing::info!("contact form submitted");
                toaster.success("Gracias por escribirnos. Te responderemos pronto.");
                name.set(String::new());
                email.set(String::new());
                message.set(String::new());
            }
        })
    };

    let (name_err, email_err, message_err) = (*errors).clone();

    section(
        "Contacto",
        "¿Tienes dudas o sugerencias? Escríbenos.",
        html! {
            <form class="max-w-xl space-y-4 bg-white rounded-2xl border border-slate-200 p-6" onsubmit={on_submit(submit)}>
                <TextField label="Nombre" value={(*name).clone()} on_input={bind(&name)} error={name_err} />
                <TextField label="Correo electrónico" input_type="email" value={(*email).clone()} on_input={bind(&email)} error={email_err} />
                <TextAreaField label="Mensaje" value={(*message).clone()} on_input={bind(&message)} />
                if let Some(err) = message_err {
                    <p class="text-xs text-red-500">{ err }</p>
                }
                <SubmitButton label="Enviar" />
            </form>
        },
    )
}

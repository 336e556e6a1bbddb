use yew::prelude::*;

fn legal_page(title: &str, updated: &str, sections: &[(&str, &str)]) -> Html {
    html! {
        <article class="max-w-3xl mx-auto px-6 py-16">
            <h1 class="text-3xl font-black text-[#173E63]">{ title.to_string() }</h1>
            <p class="mt-2 text-xs uppercase tracking-widest text-slate-400">{ format!("Última actualización: {}", updated) }</p>
            { for sections.iter().map(|(heading, body)| html! {
                <section class="mt-8">
                    <h2 class="text-lg font-bold text-[#173E63]">{ heading.to_string() }</h2>
                    <p class="mt-2 text-sm leading-relaxed text-slate-600">{ body.to_string() }</p>
                </section>
            }) }
        </article>
    }
}

#[function_component(PrivacyPage)]
pub fn privacy_page() -> Html {
    legal_page(
        "Política de privacidad",
        "1 de enero de 2024",
        &[
            ("Datos que recogemos", "Guardamos tu correo electrónico, tu apodo y la información financiera que registras: cuentas, categorías, etiquetas y transacciones."),
            ("Para qué los usamos", "Únicamente para prestarte el servicio, calcular tus estadísticas y mantener tu sesión segura."),
            ("Sesiones", "Registramos la fecha, la dirección IP y el navegador de cada inicio de sesión para detectar accesos no autorizados."),
            ("Tus derechos", "Puedes modificar tus datos desde tu perfil o eliminar tu cuenta en cualquier momento; la eliminación es definitiva."),
        ],
    )
}

#[function_component(TermsPage)]
pub fn terms_page() -> Html {
    legal_page(
        "Términos y condiciones",
        "1 de enero de 2024",
        &[
            ("Uso del servicio", "Finanzas es una herramienta de registro personal. No ofrece asesoramiento financiero."),
            ("Cuenta", "Eres responsable de mantener la confidencialidad de tu contraseña y de la actividad de tu cuenta."),
            ("Disponibilidad", "Podemos interrumpir el servicio por mantenimiento. Intentaremos avisar con antelación."),
            ("Cambios", "Si modificamos estos términos lo anunciaremos en esta página."),
        ],
    )
}

#[function_component(CookiesPage)]
pub fn cookies_page() -> Html {
    legal_page(
        "Política de cookies",
        "1 de enero de 2024",
        &[
            ("Cookies de sesión", "Usamos cookies técnicas para mantener tu sesión iniciada y renovarla de forma segura."),
            ("Identificador de dispositivo", "Una cookie identifica tu dispositivo para mostrarte tus sesiones activas."),
            ("Preferencias", "Tu moneda preferida se guarda en el almacenamiento local del navegador, no en una cookie."),
            ("Terceros", "No usamos cookies publicitarias ni de seguimiento de terceros."),
        ],
    )
}

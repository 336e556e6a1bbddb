use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="max-w-xl mx-auto px-6 py-24 text-center">
            <p class="text-7xl font-black text-[#B2CBDE]">{"404"}</p>
            <h1 class="mt-4 text-2xl font-bold text-[#173E63]">{"Página no encontrada"}</h1>
            <p class="mt-2 text-slate-500">{"La dirección que buscas no existe o ha cambiado."}</p>
            <Link<Route> to={Route::Landing} classes="inline-block mt-8 bg-[#173E63] text-white px-6 py-3 rounded-[10px] font-bold">{"Volver al inicio"}</Link<Route>>
        </div>
    }
}

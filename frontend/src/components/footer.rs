use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Utc::now().format("%Y").to_string();

    html! {
        <footer class="bg-[#173E63] text-slate-300">
            <div class="max-w-7xl mx-auto px-6 py-10 grid grid-cols-1 md:grid-cols-3 gap-8 text-sm">
                <div>
                    <p class="text-white text-lg font-black">{"Finanzas"}</p>
                    <p class="mt-2 text-slate-400">{"Tus cuentas, tus movimientos y tus metas en un solo lugar."}</p>
                </div>
                <div class="flex flex-col gap-2">
                    <p class="text-white font-bold">{"Producto"}</p>
                    <Link<Route> to={Route::Features} classes="hover:text-white">{"Características"}</Link<Route>>
                    <Link<Route> to={Route::About} classes="hover:text-white">{"Nosotros"}</Link<Route>>
                    <Link<Route> to={Route::Contact} classes="hover:text-white">{"Contacto"}</Link<Route>>
                </div>
                <div class="flex flex-col gap-2">
                    <p class="text-white font-bold">{"Legal"}</p>
                    <Link<Route> to={Route::Privacy} classes="hover:text-white">{"Privacidad"}</Link<Route>>
                    <Link<Route> to={Route::Terms} classes="hover:text-white">{"Términos"}</Link<Route>>
                    <Link<Route> to={Route::Cookies} classes="hover:text-white">{"Cookies"}</Link<Route>>
                </div>
            </div>
            <div class="border-t border-white/10 py-4 text-center text-xs text-slate-400">
                { format!("© {} Finanzas. Todos los derechos reservados.", year) }
            </div>
        </footer>
    }
}

use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::{switch, Route};
use crate::settings::{load_settings, AppSettings};
use crate::toast::ToastProvider;

#[function_component(App)]
pub fn app() -> Html {
    let settings = use_state(load_settings);

    html! {
        <ContextProvider<UseStateHandle<AppSettings>> context={settings}>
            <ToastProvider>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ToastProvider>
        </ContextProvider<UseStateHandle<AppSettings>>>
    }
}

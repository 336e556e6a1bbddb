use finanzas_core::nav::NavVariant;
use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::icons::{icon, Icon};
use crate::components::navbar::Navbar;
use crate::guards::use_current_user;

/// Title bar plus content column used by every dashboard page.
pub fn page_shell(title: &str, actions: Html, children: Html) -> Html {
    html! {
        <div class="p-6 max-w-7xl mx-auto">
            <div class="flex flex-wrap gap-3 items-center justify-between pb-4 border-b border-slate-200">
                <h1 class="text-2xl font-bold text-[#173E63]">{ title.to_string() }</h1>
                { actions }
            </div>
            <div class="pt-5 space-y-6">
                { children }
            </div>
        </div>
    }
}

/// White rounded panel with an optional heading.
pub fn card(title: Option<&str>, children: Html) -> Html {
    html! {
        <div class="bg-white rounded-2xl shadow-sm border border-slate-200 overflow-hidden">
            if let Some(title) = title {
                <div class="px-5 py-4 border-b border-slate-200">
                    <h3 class="font-bold text-[15px] text-[#1D617A]">{ title.to_string() }</h3>
                </div>
            }
            <div class="p-5">{ children }</div>
        </div>
    }
}

pub fn loading_row(message: &str) -> Html {
    html! { <p class="py-6 text-center text-sm text-slate-400">{ message.to_string() }</p> }
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: AttrValue,
    pub value: AttrValue,
    pub icon: Icon,
    #[prop_or_default]
    pub hint: Option<AttrValue>,
    #[prop_or_default]
    pub tone: Option<&'static str>,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let tone = props.tone.unwrap_or("text-[#1D617A]");
    html! {
        <div class="bg-white p-5 rounded-[10px] shadow-sm border border-slate-200 flex flex-col gap-1">
            <div class="flex items-center gap-2">
                <div class="p-1.5 bg-[#f1f5f9] rounded-lg text-[#173E63]">{ icon(props.icon) }</div>
                <span class="text-slate-500 text-[11px] font-bold uppercase tracking-widest">{ props.title.clone() }</span>
            </div>
            <h3 class={classes!("text-2xl", "font-bold", "tracking-tight", tone)}>{ props.value.clone() }</h3>
            if let Some(hint) = &props.hint {
                <p class="text-xs text-slate-400">{ hint.clone() }</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

#[function_component(PublicLayout)]
pub fn public_layout(props: &LayoutProps) -> Html {
    html! {
        <div class="min-h-screen flex flex-col bg-white">
            <Navbar variant={NavVariant::Landing} />
            <main class="flex-1">{ for props.children.iter() }</main>
            <Footer />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct AppFrameProps {
    variant: NavVariant,
    children: Children,
}

#[function_component(AppFrame)]
fn app_frame(props: &AppFrameProps) -> Html {
    let user = use_current_user();
    let greeting = user
        .as_ref()
        .map(|u| format!("Hola, {}", u.display_name()))
        .unwrap_or_default();

    html! {
        <div class="flex h-screen bg-slate-50">
            <div class="hidden md:flex">
                <Navbar variant={props.variant} />
            </div>
            <div class="flex-1 flex flex-col overflow-hidden">
                <header class="bg-[#D8E1E8] border-b border-slate-200 h-16 flex items-center justify-between px-6">
                    <span class="text-sm font-bold text-[#173E63]">{ greeting }</span>
                    if let Some(user) = &user {
                        <span class="flex items-center gap-2 text-xs text-slate-500">
                            { icon(Icon::User) }
                            { user.email.clone() }
                        </span>
                    }
                </header>
                <main class="flex-1 overflow-y-auto">
                    { for props.children.iter() }
                </main>
            </div>
        </div>
    }
}

#[function_component(DashboardLayout)]
pub fn dashboard_layout(props: &LayoutProps) -> Html {
    html! {
        <AppFrame variant={NavVariant::Dashboard}>{ for props.children.iter() }</AppFrame>
    }
}

#[function_component(AdminLayout)]
pub fn admin_layout(props: &LayoutProps) -> Html {
    html! {
        <AppFrame variant={NavVariant::Admin}>{ for props.children.iter() }</AppFrame>
    }
}

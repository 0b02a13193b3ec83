use leptos::prelude::*;

pub const CONTAINER: &str = "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8";
const GLASS: &str = "backdrop-blur-xl bg-white/5 border border-white/10 shadow-2xl";

#[component]
pub fn SectionTitle(text: &'static str) -> impl IntoView {
    view! {
        <div class="mb-8 flex items-center gap-3">
            <div class="h-6 w-1 rounded-full bg-gradient-to-b from-cyan-400 to-fuchsia-500" />
            <h2 class="text-2xl md:text-3xl font-semibold tracking-tight">{text}</h2>
        </div>
    }
}

#[component]
pub fn Badge(children: Children) -> impl IntoView {
    view! {
        <span class="text-xs md:text-sm px-3 py-1 rounded-full border border-white/15 bg-white/5">
            {children()}
        </span>
    }
}

#[component]
pub fn Card(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    view! { <div class=format!("{GLASS} rounded-2xl p-6 {class}")>{children()}</div> }
}

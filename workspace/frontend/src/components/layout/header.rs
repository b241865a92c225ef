use yew::prelude::*;

use crate::common::loading::Loading;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub dark_mode: bool,
    pub busy: bool,
    /// Export is offered once a trend series is loaded.
    pub can_export: bool,
    pub on_export: Callback<()>,
    pub on_toggle_dark: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_export = {
        let on_export = props.on_export.clone();
        Callback::from(move |_| {
            log::debug!("User clicked export");
            on_export.emit(());
        })
    };
    let on_toggle_dark = {
        let on_toggle_dark = props.on_toggle_dark.clone();
        Callback::from(move |_| on_toggle_dark.emit(()))
    };

    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="flex-1 px-4 gap-3">
                <div class="p-2 rounded-xl bg-success text-white">
                    <i class="fas fa-bolt text-xl"></i>
                </div>
                <div>
                    <h1 class="text-2xl font-bold">{"Renewable Energy Jobs Tracker"}</h1>
                    <p class="text-sm opacity-70">{"India Employment Analytics"}</p>
                </div>
            </div>
            <div class="flex-none gap-2">
                {if props.busy {
                    html! { <Loading /> }
                } else {
                    html! {}
                }}
                <button class="btn btn-outline btn-sm hidden sm:flex" disabled={!props.can_export} onclick={on_export}>
                    <i class="fas fa-download"></i>
                    {" Export"}
                </button>
                <button class="btn btn-ghost btn-circle" onclick={on_toggle_dark} aria-label="Toggle dark mode">
                    <i class={classes!("fas", "text-xl", if props.dark_mode { "fa-sun" } else { "fa-moon" })}></i>
                </button>
            </div>
        </div>
    }
}

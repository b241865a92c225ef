use dashboard::Tab;
use yew::prelude::*;

fn icon(tab: Tab) -> &'static str {
    match tab {
        Tab::Overview => "fa-chart-column",
        Tab::Trends => "fa-arrow-trend-up",
        Tab::Comparison => "fa-chart-bar",
        Tab::Distribution => "fa-chart-pie",
        Tab::MwPrediction => "fa-industry",
    }
}

#[derive(Properties, PartialEq)]
pub struct TabBarProps {
    pub active: Tab,
    pub on_select: Callback<Tab>,
}

#[function_component(TabBar)]
pub fn tab_bar(props: &TabBarProps) -> Html {
    html! {
        <div role="tablist" class="tabs tabs-boxed grid grid-cols-5 bg-base-100 mb-6">
            {for Tab::ALL.iter().map(|&tab| {
                let on_select = props.on_select.clone();
                let onclick = Callback::from(move |_| on_select.emit(tab));
                let active = (tab == props.active).then_some("tab-active");
                html! {
                    <a role="tab" class={classes!("tab", "gap-2", active)} {onclick}>
                        <i class={classes!("fas", icon(tab))}></i>
                        <span class="hidden sm:inline">{tab.label()}</span>
                    </a>
                }
            })}
        </div>
    }
}

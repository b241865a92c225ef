use dashboard::{Action, DashboardState, Tab};
use yew::prelude::*;

use super::chart::{DistributionChart, SeriesChart, SeriesKind};
use super::mw_prediction::MwPredictionPanel;
use super::prediction::PredictionCard;
use super::selectors::Controls;
use super::stats::{KeyInsights, Stats};
use super::tabs::TabBar;
use crate::common::download::download_csv;
use crate::common::error::ErrorBanner;
use crate::common::theme::apply_theme;
use crate::components::layout::header::Header;
use crate::hooks::use_dashboard;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let handle = use_dashboard();
    let state = &handle.state;

    use_effect_with(state.dark_mode, |dark| {
        if let Err(e) = apply_theme(*dark) {
            log::error!("Failed to switch theme: {:?}", e);
        }
        || ()
    });

    let emit = |action: Action| {
        let dispatch = handle.dispatch.clone();
        Callback::from(move |_: ()| dispatch.emit(action.clone()))
    };

    let on_export = {
        let export = state.csv_export();
        Callback::from(move |_: ()| match &export {
            Some(export) => {
                if let Err(e) = download_csv(export) {
                    log::error!("Failed to download CSV: {:?}", e);
                }
            }
            None => log::debug!("Nothing to export yet"),
        })
    };

    html! {
        <div class="min-h-screen">
            <Header
                dark_mode={state.dark_mode}
                busy={state.is_busy()}
                can_export={state.trends().is_some()}
                {on_export}
                on_toggle_dark={emit(Action::ToggleDarkMode)}
            />

            <main class="container mx-auto px-6 py-8">
                <Controls
                    sectors={state.sectors.clone()}
                    selected_sector={state.selected_sector.clone()}
                    selected_year={state.selected_year}
                    can_predict={state.can_predict_year()}
                    predicting={state.year_predict.is_loading()}
                    on_sector={handle.dispatch.reform(Action::SelectSector)}
                    on_year={handle.dispatch.reform(Action::SelectYear)}
                    on_predict={emit(Action::PredictYear)}
                />

                {if let Some(insights) = state.insights() {
                    html! { <Stats insights={insights.clone()} /> }
                } else {
                    html! {}
                }}

                {if let Some(prediction) = &state.prediction {
                    html! { <PredictionCard prediction={prediction.clone()} sector={state.selected_sector.clone()} /> }
                } else {
                    html! {}
                }}

                {if state.selected_sector.is_empty() {
                    html! {}
                } else {
                    html! {
                        <>
                            <TabBar active={state.active_tab} on_select={handle.dispatch.reform(Action::SelectTab)} />
                            {tab_content(state, &handle.dispatch)}
                        </>
                    }
                }}

                {if let Some(message) = &state.error {
                    html! { <ErrorBanner message={message.clone()} /> }
                } else {
                    html! {}
                }}
            </main>

            <footer class="container mx-auto px-6 py-6 text-center text-sm opacity-60">
                {"Built for a sustainable future"}
            </footer>
        </div>
    }
}

fn card(title: Html, description: String, body: Html) -> Html {
    html! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h2 class="card-title">{title}</h2>
                <p class="text-sm opacity-70">{description}</p>
                {body}
            </div>
        </div>
    }
}

fn tab_content(state: &DashboardState, dispatch: &Callback<Action>) -> Html {
    let sector = state.selected_sector.clone();
    let dark = state.dark_mode;

    match state.active_tab {
        Tab::Overview => html! {
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                {card(
                    html! { <span>{format!("Employment Trends - {}", sector)}</span> },
                    "Historical employment data".to_string(),
                    match state.line_chart() {
                        Some(chart) => html! { <SeriesChart id="chart-overview-trends" {chart} kind={SeriesKind::Line} {dark} /> },
                        None => html! {},
                    },
                )}
                {match state.insights() {
                    Some(insights) => html! { <KeyInsights sector={sector.clone()} insights={insights.clone()} /> },
                    None => html! {},
                }}
            </div>
        },
        Tab::Trends => card(
            html! { <><i class="fas fa-arrow-trend-up text-info"></i><span>{format!(" Employment Trends - {}", sector)}</span></> },
            "Detailed view of estimated vs actual employment over time".to_string(),
            match state.line_chart() {
                Some(chart) => html! { <SeriesChart id="chart-trends" {chart} kind={SeriesKind::Line} {dark} height="384px" /> },
                None => html! {},
            },
        ),
        Tab::Comparison => card(
            html! { <><i class="fas fa-chart-bar text-success"></i><span>{" Recent Years Comparison"}</span></> },
            "Estimated vs actual jobs for the last 5 years".to_string(),
            match state.bar_chart() {
                Some(chart) => html! { <SeriesChart id="chart-comparison" {chart} kind={SeriesKind::Bar} {dark} height="384px" /> },
                None => html! {},
            },
        ),
        Tab::Distribution => card(
            html! { <><i class="fas fa-chart-pie text-secondary"></i><span>{" Sector Distribution"}</span></> },
            "Employment distribution across renewable energy sectors".to_string(),
            match state.distribution() {
                Some(slices) => html! { <DistributionChart {slices} {dark} /> },
                None => html! {},
            },
        ),
        Tab::MwPrediction => {
            let on_predict = {
                let dispatch = dispatch.clone();
                Callback::from(move |_: ()| dispatch.emit(Action::PredictMw))
            };
            html! {
                <MwPredictionPanel
                    sectors={state.sectors.clone()}
                    sector={state.mw_sector.clone()}
                    capacity={state.mw_capacity.clone()}
                    prediction={state.mw_prediction.clone()}
                    can_predict={state.can_predict_mw()}
                    predicting={state.mw_predict.is_loading()}
                    on_sector={dispatch.reform(Action::SelectMwSector)}
                    on_capacity={dispatch.reform(Action::SetMwCapacity)}
                    {on_predict}
                />
            }
        }
    }
}

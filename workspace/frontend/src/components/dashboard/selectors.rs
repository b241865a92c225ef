use common::PREDICTION_YEARS;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::common::loading::Loading;

fn selected_value(e: &Event) -> Option<String> {
    e.target_dyn_into::<HtmlSelectElement>().map(|select| select.value())
}

#[derive(Properties, PartialEq)]
pub struct SectorSelectProps {
    pub sectors: Vec<String>,
    pub selected: AttrValue,
    pub on_change: Callback<String>,
}

#[function_component(SectorSelect)]
pub fn sector_select(props: &SectorSelectProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(value) = selected_value(&e) {
                log::debug!("Sector selected: {}", value);
                on_change.emit(value);
            }
        })
    };

    html! {
        <select class="select select-bordered w-full" {onchange}>
            <option value="" disabled=true selected={props.selected.is_empty()}>{"Choose a sector"}</option>
            {for props.sectors.iter().map(|sector| html! {
                <option value={sector.clone()} selected={*sector == *props.selected}>{sector.clone()}</option>
            })}
        </select>
    }
}

#[derive(Properties, PartialEq)]
pub struct ControlsProps {
    pub sectors: Vec<String>,
    pub selected_sector: AttrValue,
    pub selected_year: Option<i32>,
    pub can_predict: bool,
    pub predicting: bool,
    pub on_sector: Callback<String>,
    pub on_year: Callback<Option<i32>>,
    pub on_predict: Callback<()>,
}

/// Sector picker, prediction year picker and the predict button.
#[function_component(Controls)]
pub fn controls(props: &ControlsProps) -> Html {
    let on_year = {
        let on_year = props.on_year.clone();
        Callback::from(move |e: Event| {
            let year = selected_value(&e).and_then(|v| v.parse::<i32>().ok());
            on_year.emit(year);
        })
    };
    let on_predict = {
        let on_predict = props.on_predict.clone();
        Callback::from(move |_| on_predict.emit(()))
    };

    html! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-8">
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body p-4">
                    <h3 class="text-sm font-medium opacity-70">{"Select Sector"}</h3>
                    <SectorSelect
                        sectors={props.sectors.clone()}
                        selected={props.selected_sector.clone()}
                        on_change={props.on_sector.clone()}
                    />
                </div>
            </div>
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body p-4">
                    <h3 class="text-sm font-medium opacity-70">{"Prediction Year"}</h3>
                    <select class="select select-bordered w-full" onchange={on_year}>
                        <option value="" disabled=true selected={props.selected_year.is_none()}>{"Choose a year"}</option>
                        {for PREDICTION_YEARS.iter().map(|year| html! {
                            <option value={year.to_string()} selected={props.selected_year == Some(*year)}>{year.to_string()}</option>
                        })}
                    </select>
                </div>
            </div>
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body p-4">
                    <h3 class="text-sm font-medium opacity-70">{"Prediction"}</h3>
                    <button class="btn btn-primary w-full" disabled={!props.can_predict} onclick={on_predict}>
                        {if props.predicting {
                            html! { <Loading text="Predicting..." /> }
                        } else {
                            html! { <><i class="fas fa-bullseye"></i>{" Predict Jobs"}</> }
                        }}
                    </button>
                </div>
            </div>
        </div>
    }
}

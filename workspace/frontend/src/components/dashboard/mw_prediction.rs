use common::MwPrediction;
use dashboard::display::{format_count, format_optional_count};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::selectors::SectorSelect;
use crate::common::loading::Loading;

#[derive(Properties, PartialEq)]
pub struct MwPredictionProps {
    pub sectors: Vec<String>,
    pub sector: AttrValue,
    pub capacity: AttrValue,
    pub prediction: Option<MwPrediction>,
    pub can_predict: bool,
    pub predicting: bool,
    pub on_sector: Callback<String>,
    pub on_capacity: Callback<String>,
    pub on_predict: Callback<()>,
}

/// Capacity-based predictor with its own sector choice, and the last result.
#[function_component(MwPredictionPanel)]
pub fn mw_prediction_panel(props: &MwPredictionProps) -> Html {
    let on_input = {
        let on_capacity = props.on_capacity.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                on_capacity.emit(input.value());
            }
        })
    };
    let on_predict = {
        let on_predict = props.on_predict.clone();
        Callback::from(move |_| on_predict.emit(()))
    };

    html! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body space-y-4">
                    <h2 class="card-title"><i class="fas fa-industry text-secondary"></i>{" MW Capacity Prediction"}</h2>
                    <p class="text-sm opacity-70">{"Predict job numbers based on installed MW capacity"}</p>

                    <label class="form-control w-full">
                        <span class="label-text mb-2">{"Select Sector"}</span>
                        <SectorSelect
                            sectors={props.sectors.clone()}
                            selected={props.sector.clone()}
                            on_change={props.on_sector.clone()}
                        />
                    </label>
                    <label class="form-control w-full">
                        <span class="label-text mb-2">{"MW Capacity"}</span>
                        <input
                            type="number"
                            class="input input-bordered w-full"
                            placeholder="Enter MW capacity"
                            min="0"
                            step="0.1"
                            value={props.capacity.clone()}
                            oninput={on_input}
                        />
                    </label>
                    <button class="btn btn-secondary w-full" disabled={!props.can_predict} onclick={on_predict}>
                        {if props.predicting {
                            html! { <Loading text="Predicting..." /> }
                        } else {
                            html! { <><i class="fas fa-industry"></i>{" Predict Jobs by MW"}</> }
                        }}
                    </button>
                </div>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h2 class="card-title">{"Prediction Result"}</h2>
                    <p class="text-sm opacity-70">{"Jobs prediction based on MW capacity"}</p>
                    {match &props.prediction {
                        Some(prediction) => html! {
                            <div class="space-y-6">
                                <div class="text-center p-6 rounded-xl border border-secondary">
                                    <i class="fas fa-users text-3xl text-secondary mb-4"></i>
                                    <h3 class="text-2xl font-bold text-secondary mb-2">{format_count(prediction.predicted_jobs)}</h3>
                                    <p class="opacity-70">{"jobs"}</p>
                                </div>
                                <div class="space-y-3">
                                    <div class="flex justify-between">
                                        <span class="text-sm opacity-70">{"Sector:"}</span>
                                        <span class="font-medium">{prediction.sector.clone()}</span>
                                    </div>
                                    <div class="flex justify-between">
                                        <span class="text-sm opacity-70">{"MW Capacity:"}</span>
                                        <span class="font-medium">{format!("{} MW", format_optional_count(prediction.mw_capacity))}</span>
                                    </div>
                                    <div class="flex justify-between">
                                        <span class="text-sm opacity-70">{"Model:"}</span>
                                        <span class="font-medium">{prediction.model_type.clone()}</span>
                                    </div>
                                </div>
                                <div class="badge badge-secondary badge-outline w-full">
                                    {"Based on historical MW-to-jobs correlation"}
                                </div>
                            </div>
                        },
                        None => html! {
                            <div class="text-center py-12 opacity-60">
                                <i class="fas fa-industry text-5xl mb-4"></i>
                                <p>{"Enter MW capacity and select a sector to get job predictions"}</p>
                            </div>
                        },
                    }}
                </div>
            </div>
        </div>
    }
}

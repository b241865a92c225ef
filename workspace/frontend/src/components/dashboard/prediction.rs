use common::YearPrediction;
use dashboard::display::{format_count, format_growth};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PredictionCardProps {
    pub prediction: YearPrediction,
    /// Currently selected sector, shown as the forecast subject.
    pub sector: AttrValue,
}

#[function_component(PredictionCard)]
pub fn prediction_card(props: &PredictionCardProps) -> Html {
    let prediction = &props.prediction;

    html! {
        <div class="card bg-base-100 shadow-xl border border-success mb-8">
            <div class="card-body">
                <div class="flex items-center justify-between">
                    <div class="flex items-center gap-4">
                        <i class="fas fa-wand-magic-sparkles text-3xl text-success"></i>
                        <div>
                            <h3 class="text-lg font-semibold">{format!("Prediction for {}", prediction.year)}</h3>
                            <p class="text-sm opacity-70">{format!("{} sector employment forecast", props.sector)}</p>
                        </div>
                    </div>
                    <div class="text-right">
                        <p class="text-3xl font-bold text-primary">{format_count(prediction.predicted_jobs)}</p>
                        <p class="text-sm opacity-70">{"jobs"}</p>
                    </div>
                </div>
                <div class="mt-4 flex items-center gap-4">
                    <span class="badge badge-success badge-outline">
                        {format!("Growth: {}", format_growth(Some(prediction.growth_rate)))}
                    </span>
                    <span class="badge badge-outline">{format!("Model: {}", prediction.model_type)}</span>
                </div>
            </div>
        </div>
    }
}

use common::Insights;
use dashboard::display::{format_growth, format_optional_count, format_percent, format_plain};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InsightsProps {
    pub insights: Insights,
}

/// Summary cards: growth, latest jobs, capacity and accuracy.
#[function_component(Stats)]
pub fn stats(props: &InsightsProps) -> Html {
    let insights = &props.insights;

    let card = |title: &str, value: String, value_class: &'static str, icon: &'static str| {
        html! {
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-figure"><i class={classes!("fas", icon, "text-2xl", value_class)}></i></div>
                    <div class="stat-title">{title.to_string()}</div>
                    <div class={classes!("stat-value", "text-2xl", value_class)}>{value}</div>
                </div>
            </div>
        }
    };

    html! {
        <div class="grid grid-cols-1 md:grid-cols-4 gap-4 mb-8">
            {card("Total Growth", format_growth(insights.total_growth_percentage), "text-success", "fa-arrow-trend-up")}
            {card("Latest Jobs", format_optional_count(insights.latest_jobs), "text-info", "fa-users")}
            {card("Capacity (MW)", format_optional_count(insights.latest_capacity), "text-secondary", "fa-bolt")}
            {card("Accuracy", format_percent(insights.accuracy_percentage), "text-warning", "fa-bullseye")}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct KeyInsightsProps {
    pub sector: AttrValue,
    pub insights: Insights,
}

/// Growth and accuracy bars with the data coverage figures.
#[function_component(KeyInsights)]
pub fn key_insights(props: &KeyInsightsProps) -> Html {
    let insights = &props.insights;
    let growth_bar = insights.total_growth_percentage.unwrap_or(0.0).clamp(0.0, 100.0);
    let accuracy_bar = insights.accuracy_percentage.unwrap_or(0.0).clamp(0.0, 100.0);

    html! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body space-y-4">
                <h2 class="card-title">{"Key Insights"}</h2>
                <p class="text-sm opacity-70">{format!("Statistical analysis for {}", props.sector)}</p>

                <div class="space-y-2">
                    <div class="flex justify-between text-sm">
                        <span>{"Growth Rate"}</span>
                        <span class="font-medium">{format_growth(insights.total_growth_percentage)}</span>
                    </div>
                    <progress class="progress progress-success w-full" value={growth_bar.to_string()} max="100"></progress>
                </div>
                <div class="space-y-2">
                    <div class="flex justify-between text-sm">
                        <span>{"Prediction Accuracy"}</span>
                        <span class="font-medium">{format_percent(insights.accuracy_percentage)}</span>
                    </div>
                    <progress class="progress progress-info w-full" value={accuracy_bar.to_string()} max="100"></progress>
                </div>

                <div class="divider my-0"></div>
                <div class="grid grid-cols-2 gap-4 text-sm">
                    <div>
                        <p class="opacity-70">{"Data Years"}</p>
                        <p class="font-semibold">{format_plain(insights.years_of_data)}</p>
                    </div>
                    <div>
                        <p class="opacity-70">{"Latest Year"}</p>
                        <p class="font-semibold">{format_plain(insights.latest_year)}</p>
                    </div>
                </div>
            </div>
        </div>
    }
}

use dashboard::charts::{ChartData, DistributionSlice};
use serde_json::{json, Value};
use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = newPlot)]
    fn new_plot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

fn base_layout(dark: bool) -> Value {
    let (font, grid) = if dark { ("#f9fafb", "#374151") } else { ("#111827", "#e5e7eb") };
    json!({
        "margin": {"t": 10, "r": 10, "l": 60, "b": 40},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "plot_bgcolor": "rgba(0,0,0,0)",
        "font": {"color": font},
        "xaxis": {"showgrid": false, "type": "category"},
        "yaxis": {"showgrid": true, "gridcolor": grid},
        "showlegend": true,
        "legend": {"orientation": "h", "y": -0.2}
    })
}

fn plot(element: &Element, traces: &Value, layout: &Value) {
    let div_id = element.id();
    if div_id.is_empty() {
        log::warn!("Chart container has no id, skipping draw");
        return;
    }

    let config = json!({"responsive": true, "displayModeBar": false});
    let args = (
        serde_wasm_bindgen::to_value(traces),
        serde_wasm_bindgen::to_value(layout),
        serde_wasm_bindgen::to_value(&config),
    );
    match args {
        (Ok(data), Ok(layout), Ok(config)) => new_plot(&div_id, data, layout, config),
        _ => log::error!("Failed to convert chart {} for Plotly", div_id),
    }
}

fn line_traces(chart: &ChartData) -> Value {
    chart
        .datasets
        .iter()
        .map(|dataset| {
            json!({
                "x": chart.labels,
                "y": dataset.data,
                "type": "scatter",
                "mode": "lines+markers",
                "fill": "tozeroy",
                "line": {"color": dataset.color, "shape": "spline", "width": 3},
                "marker": {"color": dataset.color, "size": 6},
                "name": dataset.label
            })
        })
        .collect()
}

fn bar_traces(chart: &ChartData) -> Value {
    chart
        .datasets
        .iter()
        .map(|dataset| {
            json!({
                "x": chart.labels,
                "y": dataset.data,
                "type": "bar",
                "marker": {"color": dataset.color},
                "name": dataset.label
            })
        })
        .collect()
}

fn doughnut_trace(slices: &[DistributionSlice]) -> Value {
    let labels: Vec<_> = slices.iter().map(|s| s.sector).collect();
    let values: Vec<_> = slices.iter().map(|s| s.percentage).collect();
    let colors: Vec<_> = slices.iter().map(|s| s.color).collect();
    json!([{
        "labels": labels,
        "values": values,
        "type": "pie",
        "hole": 0.6,
        "sort": false,
        "marker": {"colors": colors},
        "hovertemplate": "%{label}: %{value}%<extra></extra>"
    }])
}

#[derive(Clone, Copy, PartialEq)]
pub enum SeriesKind {
    Line,
    Bar,
}

#[derive(Properties, PartialEq)]
pub struct SeriesChartProps {
    pub id: AttrValue,
    pub chart: ChartData,
    pub kind: SeriesKind,
    pub dark: bool,
    #[prop_or(AttrValue::Static("320px"))]
    pub height: AttrValue,
}

/// Estimated vs actual jobs, as lines over time or bars per year.
#[function_component(SeriesChart)]
pub fn series_chart(props: &SeriesChartProps) -> Html {
    let chart_ref = use_node_ref();

    use_effect_with(
        (chart_ref.clone(), props.chart.clone(), props.kind, props.dark),
        |(chart_ref, chart, kind, dark)| {
            if let Some(element) = chart_ref.cast::<Element>() {
                let traces = match kind {
                    SeriesKind::Line => line_traces(chart),
                    SeriesKind::Bar => bar_traces(chart),
                };
                let mut layout = base_layout(*dark);
                if *kind == SeriesKind::Bar {
                    layout["barmode"] = json!("group");
                }
                log::trace!("Drawing chart with {} points", chart.labels.len());
                plot(&element, &traces, &layout);
            }
            || ()
        },
    );

    html! {
        <div ref={chart_ref} id={props.id.clone()} class="chart-container" style={format!("height: {};", props.height)}></div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DistributionChartProps {
    pub slices: Vec<DistributionSlice>,
    pub dark: bool,
}

#[function_component(DistributionChart)]
pub fn distribution_chart(props: &DistributionChartProps) -> Html {
    let chart_ref = use_node_ref();

    use_effect_with(
        (chart_ref.clone(), props.slices.clone(), props.dark),
        |(chart_ref, slices, dark)| {
            if let Some(element) = chart_ref.cast::<Element>() {
                let mut layout = base_layout(*dark);
                layout["legend"] = json!({"orientation": "v"});
                plot(&element, &doughnut_trace(slices), &layout);
            }
            || ()
        },
    );

    html! {
        <div ref={chart_ref} id="chart-sector-distribution" class="chart-container" style="height: 384px;"></div>
    }
}

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or_default]
    pub text: Option<AttrValue>,
}

/// Inline spinner, optionally labelled, for buttons and the header.
#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <span class="inline-flex items-center gap-2">
            <span class="loading loading-spinner loading-sm"></span>
            {if let Some(text) = &props.text {
                html! { <span>{text}</span> }
            } else {
                html! {}
            }}
        </span>
    }
}

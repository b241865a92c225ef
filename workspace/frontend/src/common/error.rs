use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: AttrValue,
}

/// Banner for the latest failed operation. Stays until replaced or cleared by the state.
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    html! {
        <div class="alert alert-error mt-6" role="alert">
            <i class="fas fa-exclamation-circle text-xl"></i>
            <span>{&props.message}</span>
        </div>
    }
}

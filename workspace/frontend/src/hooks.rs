use std::rc::Rc;

use dashboard::{Action, DashboardController, DashboardState};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api_client::HttpApi;

/// Dashboard state for rendering plus a way to change it.
#[derive(Clone, PartialEq)]
pub struct DashboardHandle {
    pub state: DashboardState,
    pub dispatch: Callback<Action>,
}

/// Owns the dashboard controller for the lifetime of the component.
///
/// The controller notifies the component on every state change. Actions are
/// run with `spawn_local`, so several may be in flight at once; the state
/// itself discards superseded completions. The initial load starts on mount.
#[hook]
pub fn use_dashboard() -> DashboardHandle {
    let controller: Rc<DashboardController<HttpApi>> = use_memo((), |_| {
        log::debug!("Creating dashboard controller");
        DashboardController::new(HttpApi::from_settings())
    });
    let state = use_state(DashboardState::default);

    {
        let controller = controller.clone();
        let state = state.clone();
        use_effect_with((), move |_| {
            controller.subscribe(move |snapshot| state.set(snapshot.clone()));

            log::info!("Loading sectors and years");
            spawn_local(async move {
                controller.dispatch(Action::LoadInitial).await;
            });
            || ()
        });
    }

    let dispatch = {
        let controller = controller.clone();
        use_callback((), move |action: Action, _| {
            log::trace!("Dispatching {:?}", action);
            let controller = controller.clone();
            spawn_local(async move {
                controller.dispatch(action).await;
            });
        })
    };

    DashboardHandle {
        state: (*state).clone(),
        dispatch,
    }
}

use std::cell::RefCell;

use futures::try_join;
use tracing::{debug, instrument, trace};

use crate::api::EmploymentApi;
use crate::state::{Action, DashboardState, Request, SectorData};

type Observer = Box<dyn Fn(&DashboardState)>;

/// Drives a [`DashboardState`] against an [`EmploymentApi`].
///
/// Single-threaded: the state sits in a `RefCell` and no borrow is held across
/// an `.await`, so several `dispatch` futures may run interleaved on one event
/// loop. Overlapping requests are not cancelled; the state's generation
/// counters decide which completion wins.
pub struct DashboardController<A> {
    api: A,
    state: RefCell<DashboardState>,
    observers: RefCell<Vec<Observer>>,
}

impl<A: EmploymentApi> DashboardController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: RefCell::new(DashboardState::default()),
            observers: RefCell::new(Vec::new()),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> DashboardState {
        self.state.borrow().clone()
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> R {
        f(&self.state.borrow())
    }

    /// Registers a callback run after every state change.
    ///
    /// Observers must not dispatch synchronously; spawn instead.
    pub fn subscribe(&self, observer: impl Fn(&DashboardState) + 'static) {
        self.observers.borrow_mut().push(Box::new(observer));
    }

    /// Applies `action` and performs every request it leads to, in sequence,
    /// until the chain settles.
    pub async fn dispatch(&self, action: Action) {
        let mut next = self.apply(action);
        while let Some(request) = next {
            let outcome = self.perform(request).await;
            next = self.apply(outcome);
        }
    }

    fn apply(&self, action: Action) -> Option<Request> {
        let request = self.state.borrow_mut().apply(action);
        self.notify();
        request
    }

    fn notify(&self) {
        let state = self.state.borrow();
        for observer in self.observers.borrow().iter() {
            observer(&state);
        }
    }

    /// Performs one request and turns its outcome into the completing action.
    #[instrument(skip(self))]
    pub async fn perform(&self, request: Request) -> Action {
        trace!("Performing dashboard request");
        match request {
            Request::LoadInitial { generation } => {
                let result = try_join!(self.api.fetch_sectors(), self.api.fetch_years());
                match result {
                    Ok((sectors, years)) => Action::InitialLoaded {
                        generation,
                        sectors: sectors.sectors,
                        years: years.years,
                    },
                    Err(error) => Action::InitialLoadFailed { generation, error },
                }
            }
            Request::LoadSector { sector, generation } => {
                let result = try_join!(
                    self.api.fetch_trends(&sector),
                    self.api.fetch_insights(&sector)
                );
                match result {
                    Ok((trends, insights)) => {
                        debug!(%sector, generation, "Fetched trends and insights");
                        Action::SectorLoaded {
                            generation,
                            data: SectorData {
                                sector,
                                trends,
                                insights,
                            },
                        }
                    }
                    Err(error) => Action::SectorLoadFailed { generation, error },
                }
            }
            Request::PredictYear {
                request,
                generation,
            } => match self.api.predict_jobs(&request).await {
                Ok(prediction) => Action::YearPredicted {
                    generation,
                    prediction,
                },
                Err(error) => Action::YearPredictionFailed { generation, error },
            },
            Request::PredictMw {
                request,
                generation,
            } => match self.api.predict_jobs_by_mw(&request).await {
                Ok(prediction) => Action::MwPredicted {
                    generation,
                    prediction,
                },
                Err(error) => Action::MwPredictionFailed { generation, error },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{
        INITIAL_LOAD_FAILED, MW_PREDICTION_FAILED, SECTOR_LOAD_FAILED, YEAR_PREDICTION_FAILED,
    };
    use crate::testing::ScriptedApi;
    use common::Endpoint;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_initial_load_selects_default_and_loads_it() {
        let controller = DashboardController::new(ScriptedApi::with_sectors(&[
            "Biomass", "Solar", "Wind",
        ]));

        controller.dispatch(Action::LoadInitial).await;

        let state = controller.snapshot();
        assert_eq!(state.sectors, vec!["Solar", "Wind", "Biomass"]);
        assert_eq!(state.years, vec![2020, 2021, 2022]);
        assert_eq!(state.selected_sector, "Solar");
        assert_eq!(state.sector_data.as_ref().unwrap().trends.sector, "Solar");
        assert!(!state.is_busy());
        assert_eq!(state.error, None);
        assert_eq!(
            controller.api().calls_to(Endpoint::Trends),
            vec!["Solar".to_string()]
        );
    }

    #[tokio::test]
    async fn test_initial_load_failure_is_all_or_nothing() {
        let api = ScriptedApi::with_sectors(&["Solar"]).failing(Endpoint::Years);
        let controller = DashboardController::new(api);

        controller.dispatch(Action::LoadInitial).await;

        let state = controller.snapshot();
        assert_eq!(state.error.as_deref(), Some(INITIAL_LOAD_FAILED));
        assert!(state.sectors.is_empty());
        assert_eq!(state.selected_sector, "");
        assert!(!state.initial_load.is_loading());
        assert!(controller.api().calls_to(Endpoint::Trends).is_empty());
    }

    #[tokio::test]
    async fn test_empty_sector_list_fetches_nothing_more() {
        let controller = DashboardController::new(ScriptedApi::with_sectors(&[]));

        controller.dispatch(Action::LoadInitial).await;

        assert_eq!(controller.snapshot().selected_sector, "");
        assert!(controller.api().calls_to(Endpoint::Trends).is_empty());
        assert!(controller.api().calls_to(Endpoint::Insights).is_empty());
    }

    #[tokio::test]
    async fn test_sector_failure_sets_message_and_clears_loading() {
        let api = ScriptedApi::with_sectors(&["Solar", "Wind"]).failing(Endpoint::Insights);
        let controller = DashboardController::new(api);

        controller.dispatch(Action::SelectSector("Wind".into())).await;

        let state = controller.snapshot();
        assert_eq!(state.error.as_deref(), Some(SECTOR_LOAD_FAILED));
        assert!(!state.sector_load.is_loading());
        assert_eq!(state.sector_data, None);
    }

    #[tokio::test]
    async fn test_reselecting_same_sector_does_not_refetch() {
        let controller = DashboardController::new(ScriptedApi::with_sectors(&["Solar", "Wind"]));

        controller.dispatch(Action::SelectSector("Wind".into())).await;
        controller.dispatch(Action::SelectSector("Wind".into())).await;
        controller.dispatch(Action::SelectSector(String::new())).await;

        assert_eq!(controller.api().calls_to(Endpoint::Trends), vec!["Wind".to_string()]);
        assert_eq!(controller.api().calls_to(Endpoint::Insights), vec!["Wind".to_string()]);
    }

    #[tokio::test]
    async fn test_latest_sector_wins_when_responses_overlap() {
        let api = ScriptedApi::with_sectors(&["Solar", "Wind"])
            .delay_sector("Wind", Duration::from_millis(40));
        let controller = DashboardController::new(api);

        futures::join!(
            controller.dispatch(Action::SelectSector("Wind".into())),
            controller.dispatch(Action::SelectSector("Solar".into())),
        );

        let state = controller.snapshot();
        assert_eq!(state.selected_sector, "Solar");
        assert_eq!(state.sector_data.as_ref().unwrap().sector, "Solar");
        assert!(!state.sector_load.is_loading());
        assert_eq!(controller.api().calls_to(Endpoint::Trends).len(), 2);
    }

    #[tokio::test]
    async fn test_year_prediction_round_trip() {
        let controller = DashboardController::new(ScriptedApi::with_sectors(&["Solar"]));

        controller.dispatch(Action::PredictYear).await;
        assert!(controller.api().calls_to(Endpoint::Predict).is_empty());

        controller.dispatch(Action::SelectSector("Solar".into())).await;
        controller.dispatch(Action::SelectYear(Some(2028))).await;
        controller.dispatch(Action::PredictYear).await;

        let state = controller.snapshot();
        let prediction = state.prediction.as_ref().unwrap();
        assert_eq!(prediction.year, 2028);
        assert_eq!(controller.api().calls_to(Endpoint::Predict), vec!["Solar:2028:0".to_string()]);
    }

    #[tokio::test]
    async fn test_prediction_failures_use_their_own_messages() {
        let api = ScriptedApi::with_sectors(&["Solar"])
            .failing(Endpoint::Predict)
            .failing(Endpoint::PredictMw);
        let controller = DashboardController::new(api);

        controller.dispatch(Action::SelectSector("Solar".into())).await;
        controller.dispatch(Action::SelectYear(Some(2026))).await;
        controller.dispatch(Action::PredictYear).await;
        assert_eq!(controller.snapshot().error.as_deref(), Some(YEAR_PREDICTION_FAILED));

        controller.dispatch(Action::SelectMwSector("Solar".into())).await;
        controller.dispatch(Action::SetMwCapacity("120".into())).await;
        controller.dispatch(Action::PredictMw).await;

        let state = controller.snapshot();
        assert_eq!(state.error.as_deref(), Some(MW_PREDICTION_FAILED));
        assert!(!state.year_predict.is_loading());
        assert!(!state.mw_predict.is_loading());
    }

    #[tokio::test]
    async fn test_mw_prediction_skipped_without_capacity() {
        let controller = DashboardController::new(ScriptedApi::with_sectors(&["Wind"]));

        controller.dispatch(Action::SelectMwSector("Wind".into())).await;
        controller.dispatch(Action::PredictMw).await;
        assert!(controller.api().calls_to(Endpoint::PredictMw).is_empty());

        controller.dispatch(Action::SetMwCapacity("75".into())).await;
        controller.dispatch(Action::PredictMw).await;

        let state = controller.snapshot();
        assert_eq!(state.mw_prediction.as_ref().unwrap().sector, "Wind");
        assert_eq!(controller.api().calls_to(Endpoint::PredictMw), vec!["Wind:75".to_string()]);
    }

    #[tokio::test]
    async fn test_observers_see_every_change() {
        let controller = DashboardController::new(ScriptedApi::with_sectors(&["Solar"]));
        let seen = Rc::new(Cell::new(0));
        let loading_seen = Rc::new(Cell::new(false));
        {
            let seen = seen.clone();
            let loading_seen = loading_seen.clone();
            controller.subscribe(move |state| {
                seen.set(seen.get() + 1);
                if state.initial_load.is_loading() {
                    loading_seen.set(true);
                }
            });
        }

        controller.dispatch(Action::LoadInitial).await;

        // LoadInitial, InitialLoaded, SectorLoaded
        assert_eq!(seen.get(), 3);
        assert!(loading_seen.get());
    }
}

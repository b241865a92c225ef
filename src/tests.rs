#[cfg(test)]
mod integration_tests {
    use crate::cli::commands;
    use crate::client::ReqwestApi;
    use crate::schemas::HealthResponse;
    use crate::test_utils::test_utils::{
        init_test_tracing, setup_test_app, setup_test_dist, spawn_mock_backend,
        FAILING_SECTOR, GARBLED_SECTOR,
    };
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use common::{DataQuery, Endpoint, PredictMwRequest, PredictRequest};
    use dashboard::state::{MW_PREDICTION_FAILED, SECTOR_LOAD_FAILED};
    use dashboard::{Action, ApiError, DashboardController, EmploymentApi};
    use tempfile::tempdir;

    // ----- web host -----

    #[tokio::test]
    async fn test_health_check() {
        let dist = setup_test_dist();
        let server = TestServer::new(setup_test_app(dist.path())).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.status, "healthy");
        assert_eq!(body.frontend, "available");
    }

    #[tokio::test]
    async fn test_health_reports_missing_frontend() {
        let empty = tempdir().unwrap();
        let server = TestServer::new(setup_test_app(empty.path())).unwrap();

        let body: HealthResponse = server.get("/health").await.json();
        assert_eq!(body.frontend, "missing");
    }

    #[tokio::test]
    async fn test_serves_frontend_assets() {
        let dist = setup_test_dist();
        let server = TestServer::new(setup_test_app(dist.path())).unwrap();

        let response = server.get("/app.js").await;
        response.assert_status(StatusCode::OK);
        assert!(response.text().contains("renewjobs"));
    }

    #[tokio::test]
    async fn test_unknown_paths_fall_back_to_index() {
        let dist = setup_test_dist();
        let server = TestServer::new(setup_test_app(dist.path())).unwrap();

        let response = server.get("/sectors/solar").await;
        response.assert_status(StatusCode::OK);
        assert!(response.text().contains("dashboard"));
    }

    // ----- native client -----

    #[tokio::test]
    async fn test_client_fetches_lists() {
        let backend = spawn_mock_backend().await;
        let api = ReqwestApi::new(&backend.base).unwrap();

        let sectors = api.fetch_sectors().await.unwrap();
        assert_eq!(sectors.sectors, vec!["Biomass", "Wind", "Solar", "Small Hydro"]);

        let years = api.fetch_years().await.unwrap();
        assert_eq!(years.years.first(), Some(&2017));
        assert_eq!(years.years.len(), 8);
    }

    #[tokio::test]
    async fn test_client_escapes_sector_names() {
        let backend = spawn_mock_backend().await;
        let api = ReqwestApi::new(&backend.base).unwrap();

        let trends = api.fetch_trends("Solar & Wind").await.unwrap();
        assert_eq!(trends.sector, "Solar & Wind");

        let trends = api.fetch_trends("Small Hydro").await.unwrap();
        assert_eq!(trends.sector, "Small Hydro");
        assert_eq!(trends.len(), 8);
    }

    #[tokio::test]
    async fn test_client_tolerates_missing_insight_fields() {
        let backend = spawn_mock_backend().await;
        let api = ReqwestApi::new(&backend.base).unwrap();

        let insights = api.fetch_insights("Wind").await.unwrap();
        assert_eq!(insights.latest_jobs, Some(7200.0));
        assert_eq!(insights.accuracy_percentage, None);
    }

    #[tokio::test]
    async fn test_client_maps_failures() {
        let _guard = init_test_tracing();
        let backend = spawn_mock_backend().await;
        let api = ReqwestApi::new(&backend.base).unwrap();

        let err = api.fetch_insights(FAILING_SECTOR).await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                endpoint: Endpoint::Insights,
                status: 500
            }
        );
        assert_eq!(err.to_string(), "Failed to fetch insights");

        let err = api.fetch_insights(GARBLED_SECTOR).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));

        let unreachable = ReqwestApi::new("http://127.0.0.1:1/api/jobs").unwrap();
        let err = unreachable.fetch_sectors().await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[tokio::test]
    async fn test_client_posts_prediction_bodies() {
        let backend = spawn_mock_backend().await;
        let api = ReqwestApi::new(&backend.base).unwrap();

        let prediction = api
            .predict_jobs(&PredictRequest::new("Solar", 2027))
            .await
            .unwrap();
        assert_eq!(prediction.year, 2027);
        assert_eq!(prediction.predicted_jobs, 9100.0);

        let body = &backend.bodies("/predict")[0];
        assert_eq!(body["sector"], "Solar");
        assert_eq!(body["year"], 2027);
        assert_eq!(body["installed_capacity"], 0.0);

        let prediction = api
            .predict_jobs_by_mw(&PredictMwRequest {
                sector: "Wind".to_string(),
                mw_capacity: 100.0,
            })
            .await
            .unwrap();
        assert_eq!(prediction.predicted_jobs, 1800.0);
        assert_eq!(prediction.mw_capacity, Some(100.0));
    }

    #[tokio::test]
    async fn test_client_passes_data_filters() {
        let backend = spawn_mock_backend().await;
        let api = ReqwestApi::new(&backend.base).unwrap();

        let records = api
            .fetch_data(&DataQuery {
                sector: Some("Wind".to_string()),
                year: Some(2022),
            })
            .await
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["sector"], "Wind");
        assert_eq!(records[0]["year"], "2022");

        let records = api.fetch_data(&DataQuery::default()).await.unwrap();
        assert!(records[0]["sector"].is_null());
    }

    // ----- dashboard over HTTP -----

    #[tokio::test]
    async fn test_dashboard_loads_default_sector() {
        let backend = spawn_mock_backend().await;
        let controller = DashboardController::new(ReqwestApi::new(&backend.base).unwrap());

        controller.dispatch(Action::LoadInitial).await;

        let state = controller.snapshot();
        assert_eq!(state.error, None);
        assert_eq!(state.sectors, vec!["Solar", "Wind", "Biomass", "Small Hydro"]);
        assert_eq!(state.selected_sector, "Solar");
        assert_eq!(state.line_chart().unwrap().labels.len(), 8);
        assert_eq!(
            state.bar_chart().unwrap().labels,
            vec![2020, 2021, 2022, 2023, 2024]
        );

        let export = state.csv_export().unwrap();
        assert_eq!(export.file_name, "Solar_employment_data.csv");
        assert!(export
            .content
            .starts_with("Year,Estimated Jobs,Actual Jobs,Installed Capacity (MW)\n2017,1000,900,50"));
        assert!(export.content.ends_with("2024,8000,7200,400"));
    }

    #[tokio::test]
    async fn test_dashboard_sector_failure_sets_banner() {
        let backend = spawn_mock_backend().await;
        let controller = DashboardController::new(ReqwestApi::new(&backend.base).unwrap());

        controller
            .dispatch(Action::SelectSector(FAILING_SECTOR.to_string()))
            .await;

        let state = controller.snapshot();
        assert_eq!(state.error.as_deref(), Some(SECTOR_LOAD_FAILED));
        assert!(!state.sector_load.is_loading());

        controller.dispatch(Action::SelectSector("Wind".to_string())).await;
        assert_eq!(controller.snapshot().error, None);
    }

    #[tokio::test]
    async fn test_unparsable_capacity_is_sent_as_null() {
        let backend = spawn_mock_backend().await;
        let controller = DashboardController::new(ReqwestApi::new(&backend.base).unwrap());

        controller.dispatch(Action::SelectMwSector("Wind".to_string())).await;
        controller.dispatch(Action::SetMwCapacity("lots".to_string())).await;
        controller.dispatch(Action::PredictMw).await;

        let bodies = backend.bodies("/predict-mw");
        assert_eq!(bodies.len(), 1);
        assert!(bodies[0]["mw_capacity"].is_null());
        assert_eq!(
            controller.snapshot().error.as_deref(),
            Some(MW_PREDICTION_FAILED)
        );
    }

    // ----- commands -----

    #[tokio::test]
    async fn test_predict_mw_command_reads_capacity_with_unit() {
        let backend = spawn_mock_backend().await;

        commands::predict_mw(&backend.base, "Wind", "250MW").await.unwrap();

        let bodies = backend.bodies("/predict-mw");
        assert_eq!(bodies.len(), 1);
        assert_eq!(bodies[0]["mw_capacity"], 250.0);
    }

    #[tokio::test]
    async fn test_export_command_writes_csv() {
        let backend = spawn_mock_backend().await;
        let out = tempdir().unwrap();

        commands::export(&backend.base, "Wind", out.path()).await.unwrap();

        let content = std::fs::read_to_string(out.path().join("Wind_employment_data.csv")).unwrap();
        assert_eq!(content.lines().count(), 9);
        assert!(!content.ends_with('\n'));
    }

    #[tokio::test]
    async fn test_commands_surface_banner_as_error() {
        let backend = spawn_mock_backend().await;

        let err = commands::insights(&backend.base, FAILING_SECTOR)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), SECTOR_LOAD_FAILED);

        commands::predict(&backend.base, "Solar", 2028).await.unwrap();
        commands::predict_mw(&backend.base, "Solar", "50").await.unwrap();
        commands::data(&backend.base, None, Some(2020)).await.unwrap();
    }
}

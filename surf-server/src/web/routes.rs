//! HTTP route handlers.

use std::collections::BTreeMap;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    middleware,
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::provider::{DEFAULT_INTERVAL_HOURS, ForecastQuery};
use crate::report::{
    FullReport, LatestBuoyData, RatingReport, RegionalReport, TideReport, WaveReport, WindReport,
};

use super::auth::require_api_key;
use super::dto::*;
use super::error::AppError;
use super::state::AppState;

/// Most days `/wind` will serve.
const MAX_WIND_DAYS: u32 = 1;

/// Create the application router.
///
/// Data routes sit under `prefix` (empty for the root) behind the API key
/// check; `/` and `/health` are open.
pub fn create_router(state: AppState, prefix: &str) -> Router {
    let api = Router::new()
        .route("/rat", get(refresh_access_token))
        .route("/conditions", get(get_conditions))
        .route("/buoy", get(get_buoy))
        .route("/wind", get(get_wind))
        .route("/wave", get(get_wave))
        .route("/rating", get(get_rating))
        .route("/tide", get(get_tide))
        .route("/report", get(get_full_report))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_api_key));

    let api = if prefix.is_empty() {
        api
    } else {
        Router::new().nest(prefix, api)
    };

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> Json<BTreeMap<&'static str, &'static str>> {
    Json(BTreeMap::from([("Hello", "World")]))
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Log in to the provider; `<3` on success, `</3` otherwise.
async fn refresh_access_token(State(state): State<AppState>) -> &'static str {
    info!("New GET /rat request");
    if state.reports.login().await {
        "<3"
    } else {
        "</3"
    }
}

async fn get_conditions(
    State(state): State<AppState>,
    query: Result<Query<ConditionsQuery>, QueryRejection>,
) -> Result<Json<RegionalReport>, AppError> {
    let Query(q) = query?;
    info!("New GET /conditions request for {} ({} days, now={})", q.spot, q.days, q.now);
    state
        .reports
        .region_conditions(&q.spot, q.days, q.now)
        .await
        .map(Json)
        .map_err(|e| AppError::report(format!("Could not load conditions for {}.", q.spot), e))
}

async fn get_buoy(
    State(state): State<AppState>,
    query: Result<Query<SpotQuery>, QueryRejection>,
) -> Result<Json<LatestBuoyData>, AppError> {
    let Query(q) = query?;
    info!("New GET /buoy request for {}", q.spot);
    state
        .reports
        .buoy_reading(&q.spot)
        .await
        .map(Json)
        .map_err(|e| AppError::report(format!("Data for buoy at {} not found", q.spot), e))
}

async fn get_wind(
    State(state): State<AppState>,
    query: Result<Query<WindQuery>, QueryRejection>,
) -> Result<Json<WindReport>, AppError> {
    let Query(q) = query?;
    info!("New GET /wind request for {}", q.spot);
    if q.days > MAX_WIND_DAYS {
        return Err(AppError::NotImplemented {
            message: "Could not load wind data for days > 1.".to_string(),
        });
    }

    let mut forecast = ForecastQuery::new(q.days);
    if let Some(corrected) = q.corrected {
        forecast = forecast.with_corrected(corrected);
    }

    state
        .reports
        .wind_report(&q.spot, &forecast)
        .await
        .map(Json)
        .map_err(|e| AppError::report(format!("Could not load wind data for spot {}.", q.spot), e))
}

async fn get_wave(
    State(state): State<AppState>,
    query: Result<Query<WaveQuery>, QueryRejection>,
) -> Result<Json<WaveReport>, AppError> {
    let Query(q) = query?;
    info!("New GET /wave request for {}", q.spot);
    let forecast = ForecastQuery::new(q.days)
        .with_interval_hours(q.interval_hours.unwrap_or(DEFAULT_INTERVAL_HOURS))
        .with_max_heights(q.max_heights);
    state
        .reports
        .wave_report(&q.spot, &forecast)
        .await
        .map(Json)
        .map_err(|e| AppError::report(format!("Could not load wave data for spot {}.", q.spot), e))
}

async fn get_rating(
    State(state): State<AppState>,
    query: Result<Query<ForecastParams>, QueryRejection>,
) -> Result<Json<RatingReport>, AppError> {
    let Query(q) = query?;
    info!("New GET /rating request for {}", q.spot);
    let forecast = ForecastQuery::new(q.days)
        .with_interval_hours(q.interval_hours.unwrap_or(DEFAULT_INTERVAL_HOURS));
    state
        .reports
        .rating_report(&q.spot, &forecast)
        .await
        .map(Json)
        .map_err(|e| {
            AppError::report(format!("Could not load rating data for spot {}.", q.spot), e)
        })
}

async fn get_tide(
    State(state): State<AppState>,
    query: Result<Query<DaysQuery>, QueryRejection>,
) -> Result<Json<TideReport>, AppError> {
    let Query(q) = query?;
    info!("New GET /tide request for {}", q.spot);
    state
        .reports
        .tide_report(&q.spot, q.days)
        .await
        .map(Json)
        .map_err(|e| AppError::report(format!("Could not load tide data for spot {}.", q.spot), e))
}

async fn get_full_report(
    State(state): State<AppState>,
    query: Result<Query<DaysQuery>, QueryRejection>,
) -> Result<Json<FullReport>, AppError> {
    let Query(q) = query?;
    info!("New GET /report request for {}", q.spot);
    state
        .reports
        .full_report(&q.spot, q.days)
        .await
        .map(Json)
        .map_err(|e| AppError::report(format!("Could not load report for spot {}.", q.spot), e))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use serde_json::json;
    use tower::ServiceExt;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::provider::sample_units;
    use crate::catalog::Catalog;
    use crate::config::{ProviderConfig, ProviderPaths};
    use crate::provider::ProviderClient;
    use crate::report::SurfReports;
    use crate::web::auth::API_KEY_HEADER;

    const KEY: &str = "secret";

    fn app(base_url: &str) -> Router {
        let paths = ProviderPaths {
            login: "/login".into(),
            conditions: "/conditions".into(),
            wave: "/wave".into(),
            rating: "/rating".into(),
            wind: "/wind".into(),
            tides: "/tides".into(),
            nearby: "/nearby".into(),
        };
        let config = ProviderConfig::new(base_url, "token").with_paths(paths);
        let client = ProviderClient::new(config, Arc::new(Catalog::builtin().unwrap())).unwrap();
        create_router(AppState::new(SurfReports::new(client), KEY), "/surf")
    }

    fn get(uri: &str, key: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(key) = key {
            builder = builder.header(API_KEY_HEADER, key);
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn open_routes_need_no_key() {
        let app = app("http://127.0.0.1:9");

        let response = app.clone().oneshot(get("/", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"Hello": "World"}));

        let response = app.oneshot(get("/health", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "ok");
    }

    #[tokio::test]
    async fn missing_or_wrong_key_is_rejected() {
        let app = app("http://127.0.0.1:9");

        for key in [None, Some("wrong")] {
            let response = app
                .clone()
                .oneshot(get("/surf/buoy?spot=pipeline", key))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(
                body_json(response).await,
                json!({"detail": "API Key incorrect"})
            );
        }
    }

    #[tokio::test]
    async fn key_checked_before_query() {
        let app = app("http://127.0.0.1:9");
        let response = app.oneshot(get("/surf/wind", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn wind_more_than_one_day_not_implemented() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let app = app(&server.uri());
        for spot in ["pipeline", "nowhere"] {
            let uri = format!("/surf/wind?spot={spot}&days=2");
            let response = app.clone().oneshot(get(&uri, Some(KEY))).await.unwrap();
            assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED, "{spot}");
            assert_eq!(
                body_json(response).await,
                json!({"detail": "Could not load wind data for days > 1."})
            );
        }
    }

    #[tokio::test]
    async fn malformed_query_is_json_bad_request() {
        let app = app("http://127.0.0.1:9");

        for uri in [
            "/surf/wind?spot=pipeline&days=abc",
            "/surf/wind?days=1",
            "/surf/buoy",
            "/surf/conditions?spot=pipeline&now=maybe",
        ] {
            let response = app.clone().oneshot(get(uri, Some(KEY))).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
            let body = body_json(response).await;
            assert!(body["detail"].as_str().is_some_and(|d| !d.is_empty()), "{uri}");
        }
    }

    #[tokio::test]
    async fn forecast_flags_reach_provider() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wave"))
            .and(query_param("maxHeights", "true"))
            .and(query_param("intervalHours", "6"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "associated": {"units": {"waveHeight": "FT"}, "utcOffset": -10},
                "data": {"wave": []}
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/wind"))
            .and(query_param("corrected", "false"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "associated": {
                    "units": sample_units(),
                    "utcOffset": -10,
                    "location": {"lat": 21.66, "lon": -158.05},
                    "runInitializationTimestamp": 1699963200
                },
                "data": {"wind": []}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let app = app(&server.uri());
        let response = app
            .clone()
            .oneshot(get(
                "/surf/wave?spot=pipeline&interval_hours=6&max_heights=true",
                Some(KEY),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["units"]["waveHeight"], "FT");

        let response = app
            .oneshot(get("/surf/wind?spot=pipeline&days=1&corrected=false", Some(KEY)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_spot_is_server_error() {
        let app = app("http://127.0.0.1:9");

        let cases = [
            ("/surf/conditions?spot=nowhere&days=1", "Could not load conditions for nowhere."),
            ("/surf/buoy?spot=nowhere", "Data for buoy at nowhere not found"),
            ("/surf/wind?spot=nowhere&days=1", "Could not load wind data for spot nowhere."),
        ];
        for (uri, detail) in cases {
            let response = app.clone().oneshot(get(uri, Some(KEY))).await.unwrap();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body_json(response).await, json!({ "detail": detail }));
        }
    }

    #[tokio::test]
    async fn undecodable_provider_body_is_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wind"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
            .mount(&server)
            .await;

        let response = app(&server.uri())
            .oneshot(get("/surf/wind?spot=pipeline&days=1", Some(KEY)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({"detail": "Could not load wind data for spot pipeline."})
        );
    }

    #[tokio::test]
    async fn wind_report_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wind"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "associated": {
                    "units": sample_units(),
                    "utcOffset": -10,
                    "location": {"lat": 21.66, "lon": -158.05},
                    "runInitializationTimestamp": 1699963200
                },
                "data": {"wind": [{
                    "timestamp": 1700000000, "utcOffset": -10, "speed": 12.3,
                    "direction": 65.4, "directionType": "Cross-shore", "gust": 18.0,
                    "optimalScore": 0
                }]}
            })))
            .mount(&server)
            .await;

        let response = app(&server.uri())
            .oneshot(get("/surf/wind?spot=pipeline&days=1", Some(KEY)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["spot_name"], "Pipeline");
        assert!(body["report_local_datetime"].as_str().unwrap().ends_with("-10:00"));
        let intervals = body["intervals"].as_object().unwrap();
        assert_eq!(intervals.len(), 1);
        let interval = intervals.values().next().unwrap();
        assert_eq!(interval["direction_type"], "Cross-shore");
        assert!(interval.get("gust").is_none());
    }

    #[tokio::test]
    async fn rat_reports_login_outcome() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": "t"})))
            .mount(&server)
            .await;

        let response = app(&server.uri())
            .oneshot(get("/surf/rat", Some(KEY)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "<3");

        let response = app("http://127.0.0.1:9")
            .oneshot(get("/surf/rat", Some(KEY)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "</3");
    }

    #[tokio::test]
    async fn unprefixed_router() {
        let config = ProviderConfig::new("http://127.0.0.1:9", "token");
        let client = ProviderClient::new(config, Arc::new(Catalog::builtin().unwrap())).unwrap();
        let app = create_router(AppState::new(SurfReports::new(client), KEY), "");

        let response = app
            .oneshot(get("/wind?spot=pipeline&days=3", Some(KEY)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
    }
}

//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::router::find_path_with;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(list_stations))
        .route("/route", get(find_route))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List every station name in the current graph.
async fn list_stations(State(state): State<AppState>) -> Json<StationListResponse> {
    let graph = state.network.current().await;
    let stations = graph
        .station_names()
        .into_iter()
        .map(str::to_string)
        .collect();

    Json(StationListResponse { stations })
}

/// Find a route between two stations.
async fn find_route(
    State(state): State<AppState>,
    Query(req): Query<RouteRequest>,
) -> Json<RouteResponse> {
    let graph = state.network.current().await;

    let mut config = (*state.config).clone();
    if let Some(prefer) = req.prefer_fewer_transfers {
        config.prefer_fewer_transfers = prefer;
    }

    let result = find_path_with(&graph, &req.from, &req.to, &config);
    debug!(
        from = %req.from,
        to = %req.to,
        found = result.is_found(),
        "Route request"
    );

    Json(RouteResponse::from_result(&result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{LineSet, NetworkSnapshot};
    use crate::router::RouterConfig;

    /// P-Q-R by two lines, or P-R direct and long.
    const TRIANGLE: &str = r#"[
        {"id": "L1", "stations": [
            {"name": "P", "coords": [0, 0, 0]},
            {"name": "Q", "coords": [5, 0, 0]}
        ]},
        {"id": "L2", "stations": [
            {"name": "Q", "coords": [5, 0, 0]},
            {"name": "R", "coords": [10, 0, 0]}
        ]},
        {"id": "L3", "stations": [
            {"name": "P", "coords": [0, 0, 0]},
            {"name": "R", "coords": [0, 0, 1000]}
        ]}
    ]"#;

    fn state() -> AppState {
        let lines = LineSet::from_json_str(TRIANGLE).unwrap();
        AppState::new(NetworkSnapshot::from_lines(&lines), RouterConfig::default())
    }

    fn request(from: &str, to: &str, prefer: Option<bool>) -> Query<RouteRequest> {
        Query(RouteRequest {
            from: from.to_string(),
            to: to.to_string(),
            prefer_fewer_transfers: prefer,
        })
    }

    #[tokio::test]
    async fn health_ok() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn stations_listed() {
        let Json(response) = list_stations(State(state())).await;
        assert_eq!(response.stations, vec!["P", "Q", "R"]);
    }

    #[tokio::test]
    async fn route_uses_default_preference() {
        let Json(response) = find_route(State(state()), request("P", "R", None)).await;

        assert!(response.found);
        assert_eq!(response.transfers, 0);
        assert_eq!(response.distance, 1000.0);
        assert_eq!(response.lines, vec!["L3"]);
    }

    #[tokio::test]
    async fn route_preference_override() {
        let Json(response) = find_route(State(state()), request("P", "R", Some(false))).await;

        assert_eq!(response.transfers, 1);
        assert_eq!(response.distance, 10.0);
        assert_eq!(response.segments.len(), 2);
    }

    #[tokio::test]
    async fn unknown_station_not_found() {
        let Json(response) = find_route(State(state()), request("P", "Nowhere", None)).await;

        assert!(!response.found);
        assert!(response.path.is_empty());
    }
}

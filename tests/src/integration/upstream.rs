//! # Google Fonts Adapter Against a Mock Upstream
//!
//! Runs a local axum server standing in for the Google Fonts API and
//! exercises the reqwest adapter end to end: credential forwarding,
//! status handling, body decoding, and the fully wired gateway.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use axum::extract::{Query, State};
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use fontgate_gateway::{
        FontCatalogSource, FontGatewayService, GatewayConfig, GoogleFontsClient, SortOrder,
        UpstreamConfig, UpstreamError,
    };
    use serde_json::{json, Value};

    // =============================================================================
    // MOCK UPSTREAM
    // =============================================================================

    type SeenQuery = Arc<Mutex<Option<HashMap<String, String>>>>;

    #[derive(Clone)]
    struct UpstreamState {
        seen_query: SeenQuery,
        status: StatusCode,
        body: Value,
    }

    async fn catalog_endpoint(
        State(state): State<UpstreamState>,
        Query(params): Query<HashMap<String, String>>,
    ) -> (StatusCode, Json<Value>) {
        *state.seen_query.lock().unwrap() = Some(params);
        (state.status, Json(state.body.clone()))
    }

    /// Serve a catalog endpoint on an ephemeral port, returning its URL and
    /// the query parameters it observed
    async fn spawn_upstream(status: StatusCode, body: Value) -> (String, SeenQuery) {
        let seen_query: SeenQuery = Arc::new(Mutex::new(None));
        let state = UpstreamState {
            seen_query: Arc::clone(&seen_query),
            status,
            body,
        };
        let router = Router::new()
            .route("/webfonts", get(catalog_endpoint))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("ephemeral port available");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("server runs");
        });

        (format!("http://{}/webfonts", addr), seen_query)
    }

    fn client_for(base_url: &str) -> GoogleFontsClient {
        GoogleFontsClient::new(UpstreamConfig {
            base_url: base_url.to_string(),
            api_key: "test-key".to_string(),
        })
    }

    // =============================================================================
    // ADAPTER TESTS
    // =============================================================================

    /// The adapter forwards the API key and the sanitized sort as query
    /// parameters and decodes the catalog body.
    #[tokio::test]
    async fn test_adapter_forwards_key_and_sort() {
        let (url, seen_query) = spawn_upstream(
            StatusCode::OK,
            json!({ "items": [ { "family": "Roboto" }, { "family": "Lato" } ] }),
        )
        .await;

        let catalog = client_for(&url)
            .list_fonts(SortOrder::Alpha)
            .await
            .expect("upstream answers");

        assert_eq!(
            catalog.family_names().expect("items is an array"),
            vec!["Roboto", "Lato"]
        );

        let params = seen_query.lock().unwrap().clone().expect("upstream was hit");
        assert_eq!(params.get("key").map(String::as_str), Some("test-key"));
        assert_eq!(params.get("sort").map(String::as_str), Some("alpha"));
    }

    /// Non-success statuses map to `UpstreamError::Status` with the code
    /// and canonical reason.
    #[tokio::test]
    async fn test_adapter_surfaces_status_errors() {
        let (url, _seen) = spawn_upstream(
            StatusCode::FORBIDDEN,
            json!({ "error": { "code": 403 } }),
        )
        .await;

        let err = client_for(&url)
            .list_fonts(SortOrder::Popularity)
            .await
            .unwrap_err();

        match err {
            UpstreamError::Status { status, reason } => {
                assert_eq!(status, 403);
                assert_eq!(reason, "Forbidden");
            }
            other => panic!("expected Status error, got {:?}", other),
        }
    }

    /// Undecodable bodies map to `UpstreamError::Transport`.
    #[tokio::test]
    async fn test_adapter_surfaces_decode_errors() {
        let router = Router::new().route("/webfonts", get(|| async { "not json" }));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("ephemeral port available");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("server runs");
        });

        let err = client_for(&format!("http://{}/webfonts", addr))
            .list_fonts(SortOrder::Popularity)
            .await
            .unwrap_err();

        assert!(matches!(err, UpstreamError::Transport(_)));
    }

    /// Unreachable upstreams map to `UpstreamError::Transport`.
    #[tokio::test]
    async fn test_adapter_surfaces_connection_errors() {
        let err = client_for("http://127.0.0.1:1/webfonts")
            .list_fonts(SortOrder::Popularity)
            .await
            .unwrap_err();

        assert!(matches!(err, UpstreamError::Transport(_)));
    }

    // =============================================================================
    // FULLY WIRED GATEWAY
    // =============================================================================

    /// Gateway, adapter, and mock upstream wired together: the sanitized
    /// sort travels from the client query all the way upstream.
    #[tokio::test]
    async fn test_gateway_end_to_end_against_mock_upstream() {
        let (url, seen_query) = spawn_upstream(
            StatusCode::OK,
            json!({ "items": [
                { "family": "Roboto" },
                { "family": "Open Sans" },
            ] }),
        )
        .await;

        let mut config = GatewayConfig::default();
        config.upstream = UpstreamConfig {
            base_url: url,
            api_key: "test-key".to_string(),
        };
        let catalog = Arc::new(GoogleFontsClient::new(config.upstream.clone()));
        let service = FontGatewayService::new(config, catalog).expect("config is valid");
        let router = service.build_router();

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("ephemeral port available");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("server runs");
        });

        let body: Value = reqwest::get(format!("http://{}/?limit=1&sort=trending", addr))
            .await
            .expect("request succeeds")
            .json()
            .await
            .expect("json body");

        assert_eq!(body["fonts"], json!(["Roboto"]));
        assert_eq!(body["count"], 1);
        assert_eq!(body["limit"], 1);
        assert_eq!(body["sortBy"], "trending");

        let params = seen_query.lock().unwrap().clone().expect("upstream was hit");
        assert_eq!(params.get("sort").map(String::as_str), Some("trending"));
    }
}

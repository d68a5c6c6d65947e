//! HTTP routes driven through the router without binding a socket.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use protein_network_analyzer::data::fixture;
use protein_network_analyzer::server::create_router;
use protein_network_analyzer::{Config, NetworkAnalyzer};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

fn router() -> Router {
    let dataset = fixture::seed_dataset().expect("seed corpus parses");
    create_router(NetworkAnalyzer::new(
        Arc::new(dataset),
        Arc::new(Config::default()),
    ))
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let response = router()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn root_and_health() {
    let (status, body) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Protein Interaction Network Analyzer API");

    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn network_lists_every_protein() {
    let (status, body) = get("/network").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nodes"].as_array().unwrap().len(), 33);
    assert_eq!(body["stats"]["total_nodes"], 33);
    assert_eq!(body["stats"]["is_connected"], false);
    assert!(!body["edges"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn analysis_by_metric() {
    let (status, body) = get("/analysis/betweenness").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["metric"], "Betweenness Centrality");
    assert_eq!(body["values"].as_array().unwrap().len(), 33);
    assert!(body["values"][0]["protein"].is_string());
}

#[tokio::test]
async fn invalid_metric_is_a_bad_request() {
    let (status, body) = get("/analysis/pagerank").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("Invalid metric"));
}

#[tokio::test]
async fn clustering_reports_modularity() {
    let (status, body) = get("/clustering").await;
    assert_eq!(status, StatusCode::OK);

    let communities = body["communities"].as_array().unwrap();
    assert_eq!(body["number_of_communities"], communities.len());
    assert!(body["modularity"].as_f64().unwrap() > 0.0);
    assert!(body.get("merges").is_none());
}

#[tokio::test]
async fn predictions_are_capped() {
    let (status, body) = get("/predictions").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["predictions"].as_array().unwrap().len() <= 20);
    assert!(body["total_predictions"].as_u64().is_some());
}

#[tokio::test]
async fn protein_details_and_not_found() {
    let (status, body) = get("/protein/TP53").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["protein"], "TP53");
    assert_eq!(body["family"], "DNA_Repair");
    assert!(body["neighbors"].as_array().unwrap().len() > 5);
    assert_eq!(body["interactions"][0]["type"], "direct");

    let (status, body) = get("/protein/UNKNOWN1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["detail"].as_str().unwrap().contains("UNKNOWN1"));
}

#[tokio::test]
async fn cors_allows_configured_origin() {
    let response = router()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header(header::ORIGIN, "http://localhost:5173")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "http://localhost:5173"
    );
}

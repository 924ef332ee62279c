mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use enem_dashboard::api::handlers::region_dashboard_handler;

fn app(state: enem_dashboard::AppState) -> Router {
    Router::new()
        .route("/api/regioes/{regiao}", get(region_dashboard_handler))
        .with_state(state)
}

#[tokio::test]
async fn test_dashboard_renders_all_sections() {
    let state = common::create_test_state(common::FixtureProvider::new());
    let server = TestServer::new(app(state)).unwrap();

    let response = server.get("/api/regioes/Nordeste").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["region"], "Nordeste");
    assert_eq!(json["competency"], "Ciências da Natureza");
    assert_eq!(json["mean_scores"]["media_mt"], 542.8);
    assert!(json["histogram"]["bins"].as_array().unwrap().len() >= 1);
    assert!(json["sex"].is_array());
    assert!(json["age_groups"].is_array());
    assert!(json["races"].is_array());
    assert_eq!(json["warnings"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_dashboard_histogram_follows_selected_competency() {
    let state = common::create_test_state(common::FixtureProvider::new());
    let server = TestServer::new(app(state)).unwrap();

    let response = server
        .get("/api/regioes/Nordeste")
        .add_query_param("competencia", "Matemática")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["competency"], "Matemática");
    // three participants have a math score, the absentee row has none
    let bins = json["histogram"]["bins"].as_array().unwrap();
    let total: u64 = bins.iter().map(|b| b["count"].as_u64().unwrap()).sum();
    assert_eq!(total, 3);
}

#[tokio::test]
async fn test_races_sorted_ascending_by_total() {
    let state = common::create_test_state(common::FixtureProvider::new());
    let server = TestServer::new(app(state)).unwrap();

    let json = server
        .get("/api/regioes/Sudeste")
        .await
        .json::<serde_json::Value>();

    let totals: Vec<i64> = json["races"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["total"].as_i64().unwrap())
        .collect();
    assert_eq!(totals, vec![12, 40, 45]);
}

#[tokio::test]
async fn test_absence_rates_computed_sorted_and_zero_cohorts_excluded() {
    let state = common::create_test_state(common::FixtureProvider::new());
    let server = TestServer::new(app(state)).unwrap();

    let json = server
        .get("/api/regioes/Norte")
        .await
        .json::<serde_json::Value>();

    // the zero-total income bracket is dropped, the rest keep upstream order
    let income = json["absence_by_income"].as_array().unwrap();
    assert_eq!(income.len(), 2);
    assert_eq!(income[0]["category"], "Até 1 salário mínimo");
    assert_eq!(income[0]["pct"], 25.0);
    assert_eq!(income[1]["pct"], 10.0);

    // race rates are sorted descending by rate
    let race_rates: Vec<f64> = json["absence_by_race"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["pct"].as_f64().unwrap())
        .collect();
    assert_eq!(race_rates, vec![40.0, 25.0, 10.0]);
}

#[tokio::test]
async fn test_missing_essay_status_degrades_to_warning() {
    let state = common::create_test_state(
        common::FixtureProvider::new().without("status_redacao"),
    );
    let server = TestServer::new(app(state)).unwrap();

    let response = server
        .get("/api/regioes/Sul")
        .add_query_param("competencia", "Redação")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert!(json["essay_status"].is_null());
    assert_eq!(json["shows_essay_status"], true);
    assert_eq!(json["warnings"], serde_json::json!(["status_redacao"]));
    // every other section still renders
    assert!(json["mean_scores"].is_object());
    assert!(json["histogram"].is_object());
    assert!(json["sex"].is_array());
}

#[tokio::test]
async fn test_essay_status_hidden_for_nationwide_view() {
    let state = common::create_test_state(common::FixtureProvider::new());
    let server = TestServer::new(app(state)).unwrap();

    let json = server
        .get("/api/regioes/Brasil")
        .add_query_param("competencia", "Redação")
        .await
        .json::<serde_json::Value>();

    assert_eq!(json["shows_essay_status"], false);
}

#[tokio::test]
async fn test_unknown_region_is_rejected() {
    let state = common::create_test_state(common::FixtureProvider::new());
    let server = TestServer::new(app(state)).unwrap();

    let response = server.get("/api/regioes/Atlantida").await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["details"]["regiao"], "Atlantida");
}

#[tokio::test]
async fn test_unknown_competency_is_rejected() {
    let state = common::create_test_state(common::FixtureProvider::new());
    let server = TestServer::new(app(state)).unwrap();

    let response = server
        .get("/api/regioes/Norte")
        .add_query_param("competencia", "Astrologia")
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

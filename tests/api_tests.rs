// Integration tests for the REST API

mod common;

use actix_web::{test, App};
use neovia_tracker::api::api::api_service_routes;
use serde_json::{json, Value};

#[actix_web::test]
async fn test_api_health() {
    let service_data = common::create_test_service_data().await;

    let app = test::init_service(
        App::new().configure(api_service_routes(service_data))
    ).await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "NEOVIA Mod Download Tracker");
}

#[actix_web::test]
async fn test_api_download_and_stats() {
    let service_data = common::create_test_service_data().await;

    let app = test::init_service(
        App::new().configure(api_service_routes(service_data.clone()))
    ).await;

    for _ in 0..3 {
        let req = test::TestRequest::post()
            .uri("/api/download/TOTK")
            .set_json(json!({"game_name": "Zelda: TOTK", "mod_name": "Ultra Graphics Pack"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "ok");
    }

    let req = test::TestRequest::get().uri("/api/stats/TOTK").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["game_id"], "TOTK");
    assert_eq!(body["total_downloads"], 3);

    let req = test::TestRequest::get().uri("/api/stats").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["total_games"], 1);
    assert_eq!(body["total_downloads"], 3);
    assert_eq!(body["games"]["TOTK"]["total_downloads"], 3);
}

#[actix_web::test]
async fn test_api_download_rejects_empty_game_name() {
    let service_data = common::create_test_service_data().await;

    let app = test::init_service(
        App::new().configure(api_service_routes(service_data))
    ).await;

    let req = test::TestRequest::post()
        .uri("/api/download/TOTK")
        .set_json(json!({"game_name": ""}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 400, "empty game_name is rejected before any mutation");
}

#[actix_web::test]
async fn test_api_stats_unknown_game_returns_404() {
    let service_data = common::create_test_service_data().await;

    let app = test::init_service(
        App::new().configure(api_service_routes(service_data))
    ).await;

    let req = test::TestRequest::get().uri("/api/stats/UNKNOWN").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 404, "unknown game id maps to a protocol-level not found");
}

#[actix_web::test]
async fn test_api_top_respects_limit() {
    let service_data = common::create_test_service_data().await;

    let app = test::init_service(
        App::new().configure(api_service_routes(service_data.clone()))
    ).await;

    for (game_id, game_name, count) in [("TOTK", "Zelda: TOTK", 3), ("MC", "Minecraft", 2), ("SMO", "Super Mario Odyssey", 1)] {
        for _ in 0..count {
            let req = test::TestRequest::post()
                .uri(&format!("/api/download/{game_id}"))
                .set_json(json!({"game_name": game_name}))
                .to_request();
            test::call_service(&app, req).await;
        }
    }

    let req = test::TestRequest::get().uri("/api/top?limit=2").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let top_games = body["top_games"].as_array().unwrap();
    assert_eq!(top_games.len(), 2);
    assert_eq!(top_games[0]["game_id"], "TOTK");
    assert_eq!(top_games[1]["game_id"], "MC");
}

#[actix_web::test]
async fn test_api_export_document_fields() {
    let service_data = common::create_test_service_data().await;

    let app = test::init_service(
        App::new().configure(api_service_routes(service_data.clone()))
    ).await;

    let req = test::TestRequest::post()
        .uri("/api/download/TOTK")
        .set_json(json!({"game_name": "Zelda: TOTK"}))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get().uri("/api/export").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert!(body["export_timestamp"].as_i64().unwrap() > 0);
    assert_eq!(body["total_games"], 1);
    assert_eq!(body["total_downloads"], 1);
    let game = &body["games"][0];
    for field in ["game_id", "game_name", "total_downloads", "first_download", "last_download"] {
        assert!(game.get(field).is_some(), "export game entry carries the {field} field");
    }
}

#[actix_web::test]
async fn test_api_service_stats() {
    let service_data = common::create_test_service_data().await;

    let app = test::init_service(
        App::new().configure(api_service_routes(service_data.clone()))
    ).await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get().uri("/api/service-stats").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert!(body["api_handled"].as_i64().unwrap() >= 1);
    assert_eq!(body["downloads"], 0);
}

#[actix_web::test]
async fn test_api_unknown_route_returns_404() {
    let service_data = common::create_test_service_data().await;

    let app = test::init_service(
        App::new().configure(api_service_routes(service_data))
    ).await;

    let req = test::TestRequest::get().uri("/api/nope").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 404);
}

#[actix_web::test]
async fn test_dashboard_renders_html() {
    let service_data = common::create_test_service_data().await;

    let app = test::init_service(
        App::new().configure(api_service_routes(service_data.clone()))
    ).await;

    let req = test::TestRequest::post()
        .uri("/api/download/TOTK")
        .set_json(json!({"game_name": "Zelda <TOTK>"}))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body = test::read_body(resp).await;
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("Zelda &lt;TOTK&gt;"), "game names are escaped in the dashboard");
    assert!(!html.contains("{total_games}"), "all placeholders are substituted");
}

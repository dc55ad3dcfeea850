use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use actix_cors::Cors;
use actix_web::{App, http, HttpResponse, HttpServer, web};
use actix_web::dev::ServerHandle;
use actix_web::http::header::ContentType;
use actix_web::web::{Data, ServiceConfig};
use log::info;
use serde_json::json;
use crate::api::api_downloads::api_service_download_post;
use crate::api::api_export::api_service_export_get;
use crate::api::api_stats::{api_service_game_stats_get, api_service_service_stats_get, api_service_stats_get, api_service_top_get};
use crate::api::dashboard::dashboard_get;
use crate::api::structs::api_service_data::ApiServiceData;
use crate::stats::enums::stats_event::StatsEvent;

pub fn api_service_cors() -> Cors
{
    Cors::default()
        .send_wildcard()
        .allowed_methods(vec!["GET", "POST"])
        .allowed_headers(vec![http::header::X_FORWARDED_FOR, http::header::ACCEPT])
        .allowed_header(http::header::CONTENT_TYPE)
        .max_age(1)
}

pub fn api_service_routes(data: Arc<ApiServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.default_service(web::route().to(api_service_not_found));
        cfg.service(web::resource("/").route(web::get().to(dashboard_get)));
        cfg.service(web::resource("api/health").route(web::get().to(api_service_health_get)));
        cfg.service(web::resource("api/download/{game_id}").route(web::post().to(api_service_download_post)));
        cfg.service(web::resource("api/stats").route(web::get().to(api_service_stats_get)));
        cfg.service(web::resource("api/stats/{game_id}").route(web::get().to(api_service_game_stats_get)));
        cfg.service(web::resource("api/top").route(web::get().to(api_service_top_get)));
        cfg.service(web::resource("api/export").route(web::get().to(api_service_export_get)));
        cfg.service(web::resource("api/service-stats").route(web::get().to(api_service_service_stats_get)));
    })
}

pub async fn api_service(
    addr: SocketAddr,
    data: Arc<ApiServiceData>,
    keep_alive: u64,
    client_request_timeout: u64,
    client_disconnect_timeout: u64,
    threads: u64,
) -> (ServerHandle, impl Future<Output=Result<(), std::io::Error>>)
{
    info!("[API] Starting server listener on {}", addr);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(api_service_cors())
            .configure(api_service_routes(data.clone()))
    })
        .keep_alive(Duration::from_secs(keep_alive))
        .client_request_timeout(Duration::from_secs(client_request_timeout))
        .client_disconnect_timeout(Duration::from_secs(client_disconnect_timeout))
        .workers(threads as usize)
        .bind((addr.ip(), addr.port()))
        .unwrap()
        .disable_signals()
        .run();

    (server.handle(), server)
}

pub async fn api_service_health_get(data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    data.tracker.update_stats(StatsEvent::ApiHandled, 1);

    HttpResponse::Ok().content_type(ContentType::json()).json(json!({
        "status": "healthy",
        "service": data.tracker.config.tracker_config.service_name
    }))
}

pub async fn api_service_not_found(data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    data.tracker.update_stats(StatsEvent::ApiNotFound, 1);

    HttpResponse::NotFound().content_type(ContentType::json()).json(json!({
        "status": "not found"
    }))
}

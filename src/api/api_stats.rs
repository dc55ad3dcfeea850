use std::sync::Arc;
use actix_web::{HttpRequest, HttpResponse, web};
use actix_web::http::header::ContentType;
use actix_web::web::Data;
use serde_json::json;
use crate::api::structs::api_service_data::ApiServiceData;
use crate::api::structs::query_limit::QueryLimit;
use crate::stats::enums::stats_event::StatsEvent;

#[tracing::instrument(level = "debug", skip(data))]
pub async fn api_service_stats_get(data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    data.tracker.update_stats(StatsEvent::ApiHandled, 1);

    let (global, games) = data.tracker.get_all_with_global();
    HttpResponse::Ok().content_type(ContentType::json()).json(json!({
        "total_games": global.total_games,
        "total_downloads": global.total_downloads,
        "last_updated": global.last_updated,
        "games": games
    }))
}

#[tracing::instrument(level = "debug", skip(data))]
pub async fn api_service_game_stats_get(path: web::Path<String>, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    data.tracker.update_stats(StatsEvent::ApiHandled, 1);

    let game_id = path.into_inner();
    match data.tracker.get_game(&game_id) {
        Ok(stats) => HttpResponse::Ok().content_type(ContentType::json()).json(stats),
        Err(error) => {
            data.tracker.update_stats(StatsEvent::ApiNotFound, 1);
            HttpResponse::NotFound().content_type(ContentType::json()).json(json!({
                "status": error.to_string()
            }))
        }
    }
}

#[tracing::instrument(level = "debug", skip(request, data))]
pub async fn api_service_top_get(request: HttpRequest, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    data.tracker.update_stats(StatsEvent::ApiHandled, 1);

    let params = web::Query::<QueryLimit>::from_query(request.query_string()).unwrap_or(web::Query(QueryLimit { limit: None }));
    let limit = params.limit.unwrap_or(data.tracker.config.tracker_config.default_top_limit as i64);
    HttpResponse::Ok().content_type(ContentType::json()).json(json!({
        "top_games": data.tracker.top(limit)
    }))
}

#[tracing::instrument(level = "debug", skip(data))]
pub async fn api_service_service_stats_get(data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    data.tracker.update_stats(StatsEvent::ApiHandled, 1);

    HttpResponse::Ok().content_type(ContentType::json()).json(data.tracker.get_service_stats())
}

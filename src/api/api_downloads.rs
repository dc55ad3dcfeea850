use std::sync::Arc;
use actix_web::{HttpRequest, HttpResponse, web};
use actix_web::http::header;
use actix_web::http::header::ContentType;
use actix_web::web::Data;
use serde_json::json;
use crate::api::structs::api_service_data::ApiServiceData;
use crate::api::structs::download_request::DownloadRequest;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::enums::tracker_error::TrackerError;

#[tracing::instrument(level = "debug", skip(request, data))]
pub async fn api_service_download_post(
    request: HttpRequest,
    path: web::Path<String>,
    payload: web::Json<DownloadRequest>,
    data: Data<Arc<ApiServiceData>>,
) -> HttpResponse
{
    data.tracker.update_stats(StatsEvent::ApiHandled, 1);

    let game_id = path.into_inner();
    let origin = request.peer_addr().map(|addr| addr.ip().to_string());
    let user_agent = request.headers().get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .map(String::from);

    match data.tracker.record(&game_id, &payload.game_name, payload.mod_name.clone(), origin, user_agent).await {
        Ok(outcome) => {
            let mut body = serde_json::to_value(&outcome).unwrap();
            body["status"] = json!("ok");
            HttpResponse::Ok().content_type(ContentType::json()).json(body)
        }
        Err(error @ TrackerError::InvalidInput(_)) => {
            HttpResponse::BadRequest().content_type(ContentType::json()).json(json!({
                "status": error.to_string()
            }))
        }
        Err(error) => {
            data.tracker.update_stats(StatsEvent::ApiFailure, 1);
            HttpResponse::InternalServerError().content_type(ContentType::json()).json(json!({
                "status": error.to_string()
            }))
        }
    }
}

use std::sync::Arc;
use actix_web::HttpResponse;
use actix_web::http::header::ContentType;
use actix_web::web::Data;
use crate::api::structs::api_service_data::ApiServiceData;
use crate::stats::enums::stats_event::StatsEvent;

#[tracing::instrument(level = "debug", skip(data))]
pub async fn api_service_export_get(data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    data.tracker.update_stats(StatsEvent::ApiHandled, 1);

    HttpResponse::Ok().content_type(ContentType::json()).json(data.tracker.export_snapshot())
}

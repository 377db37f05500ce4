use actix_web::{get, web, Responder};

use crate::modules::stats::application::domain::entities::StatsView;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Derived summary
///
/// Totals per collection plus the technology histogram. Collections that
/// cannot be read contribute zero; this endpoint does not fail with them.
#[utoipa::path(
    get,
    path = "/api/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Aggregated portfolio summary", body = StatsView),
    )
)]
#[get("/api/stats")]
pub async fn get_stats_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.stats.get.execute().await)
}

use utoipa::OpenApi;

use crate::api::schemas::{ErrorDetail, ErrorResponse};
use crate::modules::auth::adapter::incoming::web::routes::login::{
    LoginRequestDto, LoginResponse, LoginUserInfo,
};
use crate::modules::message::adapter::incoming::web::routes::submit_message::{
    SubmitMessageRequest, SubmitMessageResponse,
};
use crate::modules::stats::application::domain::entities::{StatsView, TechnologyCount};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "REST backend for the portfolio site and its admin panel",
    ),
    paths(
        crate::modules::auth::adapter::incoming::web::routes::login::login_handler,
        crate::modules::message::adapter::incoming::web::routes::submit_message::submit_message_handler,
        crate::modules::stats::adapter::incoming::web::routes::get_stats::get_stats_handler,

        // Content endpoints follow the same envelope conventions; see the
        // route modules for the full CRUD surface.
    ),
    components(schemas(
        ErrorResponse,
        ErrorDetail,
        LoginRequestDto,
        LoginResponse,
        LoginUserInfo,
        SubmitMessageRequest,
        SubmitMessageResponse,
        StatsView,
        TechnologyCount,
    )),
    tags(
        (name = "auth", description = "Admin session management"),
        (name = "messages", description = "Contact intake"),
        (name = "stats", description = "Derived summary"),
    )
)]
pub struct ApiDoc;

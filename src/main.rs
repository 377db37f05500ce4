pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::openapi::ApiDoc;
use crate::modules::auth::adapter::outgoing::jwt::JwtTokenService;
use crate::modules::auth::adapter::outgoing::security::Argon2Hasher;
use crate::modules::auth::adapter::outgoing::token_revocation_memory::InMemoryTokenRevocationList;
use crate::modules::auth::application::auth_use_cases::AuthUseCases;
use crate::modules::auth::application::ports::outgoing::password_hasher::PasswordHasher;
use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::modules::auth::application::ports::outgoing::token_revocation::TokenRevocationList;
use crate::modules::auth::application::services::{
    CheckSessionService, LoginService, LogoutService,
};
use crate::modules::certification::adapter::outgoing::CertificationRepositoryMemory;
use crate::modules::certification::application::certification_use_cases::CertificationUseCases;
use crate::modules::certification::application::services::{
    CreateCertificationService, DeleteCertificationService, GetCertificationsService,
    GetSingleCertificationService, UpdateCertificationService,
};
use crate::modules::education::adapter::outgoing::EducationRepositoryMemory;
use crate::modules::education::application::education_use_cases::EducationUseCases;
use crate::modules::education::application::services::{
    CreateEducationService, DeleteEducationService, GetEducationListService,
    GetSingleEducationService, UpdateEducationService,
};
use crate::modules::message::adapter::outgoing::MessageRepositoryMemory;
use crate::modules::message::application::message_use_cases::MessageUseCases;
use crate::modules::message::application::services::{
    DeleteMessageService, GetMessagesService, GetSingleMessageService, MarkMessageReadService,
    SubmitMessageService,
};
use crate::modules::multimedia::adapter::outgoing::{DataUrlStorage, LocalDiskStorage};
use crate::modules::multimedia::application::domain::policies::UploadPolicy;
use crate::modules::multimedia::application::media_use_cases::MediaUseCases;
use crate::modules::multimedia::application::ports::outgoing::media_storage::MediaStorage;
use crate::modules::multimedia::application::services::UploadImageService;
use crate::modules::profile::adapter::outgoing::ProfileRepositoryMemory;
use crate::modules::profile::application::profile_use_cases::ProfileUseCases;
use crate::modules::profile::application::services::{
    CreateProfileService, GetProfileService, UpdateProfileService,
};
use crate::modules::project::adapter::outgoing::ProjectRepositoryMemory;
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::project::application::services::{
    CreateProjectService, DeleteProjectService, GetProjectsService, GetSingleProjectService,
    UpdateProjectService,
};
use crate::modules::stats::application::services::GetStatsService;
use crate::modules::stats::application::stats_use_cases::StatsUseCases;
use crate::shared::api::json_config::custom_json_config;
use crate::shared::config::AppConfig;
use crate::shared::store::seed::load_seed_file;
use crate::shared::store::DocumentStore;

#[derive(Clone)]
pub struct AppState {
    pub profile: ProfileUseCases,
    pub projects: ProjectUseCases,
    pub certifications: CertificationUseCases,
    pub education: EducationUseCases,
    pub messages: MessageUseCases,
    pub stats: StatsUseCases,
    pub auth: AuthUseCases,
    pub media: MediaUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env().expect("Invalid configuration");

    // The document store. Everything the site serves lives here.
    let store = Arc::new(DocumentStore::new());

    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let argon2_hasher = if env == "production" {
        Argon2Hasher::from_env()
    } else {
        Argon2Hasher::fast_env()
    };
    let hasher: Arc<dyn PasswordHasher + Send + Sync> = Arc::new(argon2_hasher);

    if let Some(seed_file) = &config.seed_file {
        load_seed_file(seed_file, &store, hasher.as_ref())
            .await
            .expect("Failed to load seed file");
    }

    // Fallback admin secret, hashed once at startup.
    let fallback_password_hash = match &config.admin_password {
        Some(secret) => Some(
            hasher
                .hash_password(secret)
                .await
                .expect("Failed to hash ADMIN_PASSWORD"),
        ),
        None => None,
    };

    // Auth plumbing
    let jwt_service = JwtTokenService::new(config.jwt.clone());
    let token_provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let revocations: Arc<dyn TokenRevocationList + Send + Sync> =
        Arc::new(InMemoryTokenRevocationList::new());

    // Repositories over the shared store
    let profile_repo = ProfileRepositoryMemory::new(Arc::clone(&store));
    let project_repo = ProjectRepositoryMemory::new(Arc::clone(&store));
    let certification_repo = CertificationRepositoryMemory::new(Arc::clone(&store));
    let education_repo = EducationRepositoryMemory::new(Arc::clone(&store));
    let message_repo = MessageRepositoryMemory::new(Arc::clone(&store));

    // Media storage: hosted files when a directory is configured, inline
    // data URLs otherwise.
    let media_storage: Arc<dyn MediaStorage + Send + Sync> = match &config.media_root {
        Some(root) => Arc::new(LocalDiskStorage::new(
            root.clone(),
            config.public_base_url.clone(),
        )),
        None => Arc::new(DataUrlStorage::new()),
    };

    let state = AppState {
        profile: ProfileUseCases {
            get: Arc::new(GetProfileService::new(profile_repo.clone())),
            create: Arc::new(CreateProfileService::new(
                profile_repo.clone(),
                Arc::clone(&hasher),
            )),
            update: Arc::new(UpdateProfileService::new(
                profile_repo.clone(),
                Arc::clone(&hasher),
            )),
        },
        projects: ProjectUseCases {
            get_list: Arc::new(GetProjectsService::new(project_repo.clone())),
            get_single: Arc::new(GetSingleProjectService::new(project_repo.clone())),
            create: Arc::new(CreateProjectService::new(project_repo.clone())),
            update: Arc::new(UpdateProjectService::new(project_repo.clone())),
            delete: Arc::new(DeleteProjectService::new(project_repo.clone())),
        },
        certifications: CertificationUseCases {
            get_list: Arc::new(GetCertificationsService::new(certification_repo.clone())),
            get_single: Arc::new(GetSingleCertificationService::new(
                certification_repo.clone(),
            )),
            create: Arc::new(CreateCertificationService::new(certification_repo.clone())),
            update: Arc::new(UpdateCertificationService::new(certification_repo.clone())),
            delete: Arc::new(DeleteCertificationService::new(certification_repo.clone())),
        },
        education: EducationUseCases {
            get_list: Arc::new(GetEducationListService::new(education_repo.clone())),
            get_single: Arc::new(GetSingleEducationService::new(education_repo.clone())),
            create: Arc::new(CreateEducationService::new(education_repo.clone())),
            update: Arc::new(UpdateEducationService::new(education_repo.clone())),
            delete: Arc::new(DeleteEducationService::new(education_repo.clone())),
        },
        messages: MessageUseCases {
            submit: Arc::new(SubmitMessageService::new(message_repo.clone())),
            get_list: Arc::new(GetMessagesService::new(message_repo.clone())),
            get_single: Arc::new(GetSingleMessageService::new(message_repo.clone())),
            mark_read: Arc::new(MarkMessageReadService::new(message_repo.clone())),
            delete: Arc::new(DeleteMessageService::new(message_repo.clone())),
        },
        stats: StatsUseCases {
            get: Arc::new(GetStatsService::new(
                Arc::new(project_repo.clone()),
                Arc::new(certification_repo.clone()),
                Arc::new(education_repo.clone()),
                Arc::new(message_repo.clone()),
            )),
        },
        auth: AuthUseCases {
            login: Arc::new(LoginService::new(
                profile_repo.clone(),
                Arc::clone(&hasher),
                Arc::clone(&token_provider),
                fallback_password_hash,
            )),
            logout: Arc::new(LogoutService::new(Arc::clone(&revocations))),
            check_session: Arc::new(CheckSessionService::new(
                Arc::clone(&token_provider),
                Arc::clone(&revocations),
            )),
        },
        media: MediaUseCases {
            upload: Arc::new(UploadImageService::new(
                UploadPolicy::default(),
                media_storage,
            )),
        },
    };

    let server_url = format!("{}:{}", config.host, config.port);
    info!("Server run on: {}", server_url);

    let allowed_origins = config.allowed_origins.clone();
    let store_for_server = Arc::clone(&store);

    HttpServer::new(move || {
        let mut cors = Cors::default().allow_any_method().allow_any_header();
        if allowed_origins.is_empty() {
            cors = cors.allow_any_origin();
        } else {
            for origin in &allowed_origins {
                cors = cors.allowed_origin(origin);
            }
        }

        App::new()
            .wrap(cors)
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&revocations)))
            .app_data(web::Data::new(Arc::clone(&store_for_server)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::login_handler);
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::logout_handler);
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::check_session_handler);
    // Profile
    cfg.service(crate::modules::profile::adapter::incoming::web::routes::get_profile_handler);
    cfg.service(crate::modules::profile::adapter::incoming::web::routes::create_profile_handler);
    cfg.service(crate::modules::profile::adapter::incoming::web::routes::update_profile_handler);
    // Projects
    cfg.service(crate::modules::project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::modules::project::adapter::incoming::web::routes::get_single_project_handler);
    cfg.service(crate::modules::project::adapter::incoming::web::routes::create_project_handler);
    cfg.service(crate::modules::project::adapter::incoming::web::routes::update_project_handler);
    cfg.service(crate::modules::project::adapter::incoming::web::routes::delete_project_handler);
    // Certifications
    cfg.service(
        crate::modules::certification::adapter::incoming::web::routes::get_certifications_handler,
    );
    cfg.service(
        crate::modules::certification::adapter::incoming::web::routes::get_single_certification_handler,
    );
    cfg.service(
        crate::modules::certification::adapter::incoming::web::routes::create_certification_handler,
    );
    cfg.service(
        crate::modules::certification::adapter::incoming::web::routes::update_certification_handler,
    );
    cfg.service(
        crate::modules::certification::adapter::incoming::web::routes::delete_certification_handler,
    );
    // Education
    cfg.service(crate::modules::education::adapter::incoming::web::routes::get_education_handler);
    cfg.service(
        crate::modules::education::adapter::incoming::web::routes::get_single_education_handler,
    );
    cfg.service(crate::modules::education::adapter::incoming::web::routes::create_education_handler);
    cfg.service(crate::modules::education::adapter::incoming::web::routes::update_education_handler);
    cfg.service(crate::modules::education::adapter::incoming::web::routes::delete_education_handler);
    // Messages
    cfg.service(crate::modules::message::adapter::incoming::web::routes::submit_message_handler);
    cfg.service(crate::modules::message::adapter::incoming::web::routes::get_messages_handler);
    cfg.service(crate::modules::message::adapter::incoming::web::routes::get_single_message_handler);
    cfg.service(crate::modules::message::adapter::incoming::web::routes::mark_message_read_handler);
    cfg.service(crate::modules::message::adapter::incoming::web::routes::delete_message_handler);
    // Stats
    cfg.service(crate::modules::stats::adapter::incoming::web::routes::get_stats_handler);
    // Upload
    cfg.service(crate::modules::multimedia::adapter::incoming::web::routes::upload_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}

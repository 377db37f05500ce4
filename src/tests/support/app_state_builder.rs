use actix_web::web;
use std::sync::Arc;

use crate::modules::auth::application::auth_use_cases::AuthUseCases;
use crate::modules::auth::application::ports::incoming::use_cases::{
    CheckSessionUseCase, LoginUseCase, LogoutUseCase,
};
use crate::modules::certification::application::certification_use_cases::CertificationUseCases;
use crate::modules::education::application::education_use_cases::EducationUseCases;
use crate::modules::message::application::message_use_cases::MessageUseCases;
use crate::modules::message::application::ports::incoming::use_cases::{
    MarkMessageReadUseCase, SubmitMessageUseCase,
};
use crate::modules::multimedia::application::media_use_cases::MediaUseCases;
use crate::modules::multimedia::application::ports::incoming::use_cases::UploadImageUseCase;
use crate::modules::profile::application::ports::incoming::use_cases::{
    CreateProfileUseCase, GetProfileUseCase, UpdateProfileUseCase,
};
use crate::modules::profile::application::profile_use_cases::ProfileUseCases;
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, GetProjectsUseCase, UpdateProjectUseCase,
};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::stats::application::ports::incoming::use_cases::GetStatsUseCase;
use crate::modules::stats::application::stats_use_cases::StatsUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an `AppState` where every slot is a harmless stub; tests
/// override only what they exercise.
pub struct TestAppStateBuilder {
    profile: ProfileUseCases,
    projects: ProjectUseCases,
    certifications: CertificationUseCases,
    education: EducationUseCases,
    messages: MessageUseCases,
    stats: StatsUseCases,
    auth: AuthUseCases,
    media: MediaUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            profile: ProfileUseCases {
                get: Arc::new(StubGetProfileUseCase),
                create: Arc::new(StubCreateProfileUseCase),
                update: Arc::new(StubUpdateProfileUseCase),
            },
            projects: ProjectUseCases {
                get_list: Arc::new(StubGetProjectsUseCase),
                get_single: Arc::new(StubGetSingleProjectUseCase),
                create: Arc::new(StubCreateProjectUseCase),
                update: Arc::new(StubUpdateProjectUseCase),
                delete: Arc::new(StubDeleteProjectUseCase),
            },
            certifications: CertificationUseCases {
                get_list: Arc::new(StubGetCertificationsUseCase),
                get_single: Arc::new(StubGetSingleCertificationUseCase),
                create: Arc::new(StubCreateCertificationUseCase),
                update: Arc::new(StubUpdateCertificationUseCase),
                delete: Arc::new(StubDeleteCertificationUseCase),
            },
            education: EducationUseCases {
                get_list: Arc::new(StubGetEducationListUseCase),
                get_single: Arc::new(StubGetSingleEducationUseCase),
                create: Arc::new(StubCreateEducationUseCase),
                update: Arc::new(StubUpdateEducationUseCase),
                delete: Arc::new(StubDeleteEducationUseCase),
            },
            messages: MessageUseCases {
                submit: Arc::new(StubSubmitMessageUseCase),
                get_list: Arc::new(StubGetMessagesUseCase),
                get_single: Arc::new(StubGetSingleMessageUseCase),
                mark_read: Arc::new(StubMarkMessageReadUseCase),
                delete: Arc::new(StubDeleteMessageUseCase),
            },
            stats: StatsUseCases {
                get: Arc::new(StubGetStatsUseCase),
            },
            auth: AuthUseCases {
                login: Arc::new(StubLoginUseCase),
                logout: Arc::new(StubLogoutUseCase),
                check_session: Arc::new(StubCheckSessionUseCase),
            },
            media: MediaUseCases {
                upload: Arc::new(StubUploadImageUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_profile(mut self, uc: impl GetProfileUseCase + Send + Sync + 'static) -> Self {
        self.profile.get = Arc::new(uc);
        self
    }

    pub fn with_create_profile(
        mut self,
        uc: impl CreateProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.profile.create = Arc::new(uc);
        self
    }

    pub fn with_update_profile(
        mut self,
        uc: impl UpdateProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.profile.update = Arc::new(uc);
        self
    }

    pub fn with_get_projects(mut self, uc: impl GetProjectsUseCase + Send + Sync + 'static) -> Self {
        self.projects.get_list = Arc::new(uc);
        self
    }

    pub fn with_create_project(
        mut self,
        uc: impl CreateProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.projects.create = Arc::new(uc);
        self
    }

    pub fn with_update_project(
        mut self,
        uc: impl UpdateProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.projects.update = Arc::new(uc);
        self
    }

    pub fn with_submit_message(
        mut self,
        uc: impl SubmitMessageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.messages.submit = Arc::new(uc);
        self
    }

    pub fn with_mark_message_read(
        mut self,
        uc: impl MarkMessageReadUseCase + Send + Sync + 'static,
    ) -> Self {
        self.messages.mark_read = Arc::new(uc);
        self
    }

    pub fn with_get_stats(mut self, uc: impl GetStatsUseCase + Send + Sync + 'static) -> Self {
        self.stats.get = Arc::new(uc);
        self
    }

    pub fn with_login(mut self, uc: impl LoginUseCase + Send + Sync + 'static) -> Self {
        self.auth.login = Arc::new(uc);
        self
    }

    pub fn with_logout(mut self, uc: impl LogoutUseCase + Send + Sync + 'static) -> Self {
        self.auth.logout = Arc::new(uc);
        self
    }

    pub fn with_check_session(
        mut self,
        uc: impl CheckSessionUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.check_session = Arc::new(uc);
        self
    }

    pub fn with_upload_image(
        mut self,
        uc: impl UploadImageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.media.upload = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            profile: self.profile,
            projects: self.projects,
            certifications: self.certifications,
            education: self.education,
            messages: self.messages,
            stats: self.stats,
            auth: self.auth,
            media: self.media,
        })
    }
}

// Default use-case stubs for TestAppStateBuilder. Each test overrides the
// slots it exercises; everything else answers with a harmless default.

use async_trait::async_trait;

use crate::modules::auth::application::ports::incoming::use_cases::{
    CheckSessionError, CheckSessionUseCase, LoginData, LoginError, LoginResult, LoginUseCase,
    LogoutUseCase, SessionInfo,
};
use crate::modules::certification::application::domain::entities::Certification;
use crate::modules::certification::application::ports::incoming::use_cases::{
    CertificationError, CreateCertificationUseCase, DeleteCertificationUseCase,
    GetCertificationsUseCase, GetSingleCertificationUseCase, UpdateCertificationUseCase,
};
use crate::modules::certification::application::ports::outgoing::certification_repository::CertificationData;
use crate::modules::education::application::domain::entities::Education;
use crate::modules::education::application::ports::incoming::use_cases::{
    CreateEducationUseCase, DeleteEducationUseCase, EducationError, GetEducationListUseCase,
    GetSingleEducationUseCase, UpdateEducationUseCase,
};
use crate::modules::education::application::ports::outgoing::education_repository::EducationData;
use crate::modules::message::application::domain::entities::Message;
use crate::modules::message::application::ports::incoming::use_cases::{
    DeleteMessageUseCase, GetMessagesUseCase, GetSingleMessageUseCase, ManageMessageError,
    MarkMessageReadUseCase, SubmitMessageError, SubmitMessageInput, SubmitMessageOutcome,
    SubmitMessageUseCase,
};
use crate::modules::multimedia::application::ports::incoming::use_cases::{
    UploadImageError, UploadImageUseCase, UploadInput,
};
use crate::modules::multimedia::application::ports::outgoing::media_storage::StoredMedia;
use crate::modules::profile::application::domain::entities::Profile;
use crate::modules::profile::application::ports::incoming::use_cases::{
    CreateProfileError, CreateProfileInput, CreateProfileUseCase, GetProfileError,
    GetProfileUseCase, UpdateProfileError, UpdateProfileInput, UpdateProfileUseCase,
};
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectError, CreateProjectUseCase, DeleteProjectError, DeleteProjectUseCase,
    GetProjectsError, GetProjectsUseCase, GetSingleProjectError, GetSingleProjectUseCase,
    UpdateProjectError, UpdateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectData, ProjectListFilter,
};
use crate::modules::stats::application::domain::entities::StatsView;
use crate::modules::stats::application::ports::incoming::use_cases::GetStatsUseCase;

const NOT_USED: &str = "not used in this test";

/* --------------------------------------------------
 * Profile
 * -------------------------------------------------- */

pub struct StubGetProfileUseCase;

#[async_trait]
impl GetProfileUseCase for StubGetProfileUseCase {
    async fn execute(&self) -> Result<Profile, GetProfileError> {
        Err(GetProfileError::NotFound)
    }
}

pub struct StubCreateProfileUseCase;

#[async_trait]
impl CreateProfileUseCase for StubCreateProfileUseCase {
    async fn execute(&self, _data: CreateProfileInput) -> Result<Profile, CreateProfileError> {
        Err(CreateProfileError::RepositoryError(NOT_USED.to_string()))
    }
}

pub struct StubUpdateProfileUseCase;

#[async_trait]
impl UpdateProfileUseCase for StubUpdateProfileUseCase {
    async fn execute(&self, _data: UpdateProfileInput) -> Result<Profile, UpdateProfileError> {
        Err(UpdateProfileError::NotFound)
    }
}

/* --------------------------------------------------
 * Project
 * -------------------------------------------------- */

pub struct StubGetProjectsUseCase;

#[async_trait]
impl GetProjectsUseCase for StubGetProjectsUseCase {
    async fn execute(&self, _filter: ProjectListFilter) -> Result<Vec<Project>, GetProjectsError> {
        Ok(vec![])
    }
}

pub struct StubGetSingleProjectUseCase;

#[async_trait]
impl GetSingleProjectUseCase for StubGetSingleProjectUseCase {
    async fn execute(&self, _id: i64) -> Result<Project, GetSingleProjectError> {
        Err(GetSingleProjectError::NotFound)
    }
}

pub struct StubCreateProjectUseCase;

#[async_trait]
impl CreateProjectUseCase for StubCreateProjectUseCase {
    async fn execute(&self, _data: ProjectData) -> Result<Project, CreateProjectError> {
        Err(CreateProjectError::RepositoryError(NOT_USED.to_string()))
    }
}

pub struct StubUpdateProjectUseCase;

#[async_trait]
impl UpdateProjectUseCase for StubUpdateProjectUseCase {
    async fn execute(&self, _id: i64, _data: ProjectData) -> Result<Project, UpdateProjectError> {
        Err(UpdateProjectError::NotFound)
    }
}

pub struct StubDeleteProjectUseCase;

#[async_trait]
impl DeleteProjectUseCase for StubDeleteProjectUseCase {
    async fn execute(&self, _id: i64) -> Result<(), DeleteProjectError> {
        Err(DeleteProjectError::NotFound)
    }
}

/* --------------------------------------------------
 * Certification
 * -------------------------------------------------- */

pub struct StubGetCertificationsUseCase;

#[async_trait]
impl GetCertificationsUseCase for StubGetCertificationsUseCase {
    async fn execute(&self) -> Result<Vec<Certification>, CertificationError> {
        Ok(vec![])
    }
}

pub struct StubGetSingleCertificationUseCase;

#[async_trait]
impl GetSingleCertificationUseCase for StubGetSingleCertificationUseCase {
    async fn execute(&self, _id: i64) -> Result<Certification, CertificationError> {
        Err(CertificationError::NotFound)
    }
}

pub struct StubCreateCertificationUseCase;

#[async_trait]
impl CreateCertificationUseCase for StubCreateCertificationUseCase {
    async fn execute(&self, _data: CertificationData) -> Result<Certification, CertificationError> {
        Err(CertificationError::RepositoryError(NOT_USED.to_string()))
    }
}

pub struct StubUpdateCertificationUseCase;

#[async_trait]
impl UpdateCertificationUseCase for StubUpdateCertificationUseCase {
    async fn execute(
        &self,
        _id: i64,
        _data: CertificationData,
    ) -> Result<Certification, CertificationError> {
        Err(CertificationError::NotFound)
    }
}

pub struct StubDeleteCertificationUseCase;

#[async_trait]
impl DeleteCertificationUseCase for StubDeleteCertificationUseCase {
    async fn execute(&self, _id: i64) -> Result<(), CertificationError> {
        Err(CertificationError::NotFound)
    }
}

/* --------------------------------------------------
 * Education
 * -------------------------------------------------- */

pub struct StubGetEducationListUseCase;

#[async_trait]
impl GetEducationListUseCase for StubGetEducationListUseCase {
    async fn execute(&self) -> Result<Vec<Education>, EducationError> {
        Ok(vec![])
    }
}

pub struct StubGetSingleEducationUseCase;

#[async_trait]
impl GetSingleEducationUseCase for StubGetSingleEducationUseCase {
    async fn execute(&self, _id: i64) -> Result<Education, EducationError> {
        Err(EducationError::NotFound)
    }
}

pub struct StubCreateEducationUseCase;

#[async_trait]
impl CreateEducationUseCase for StubCreateEducationUseCase {
    async fn execute(&self, _data: EducationData) -> Result<Education, EducationError> {
        Err(EducationError::RepositoryError(NOT_USED.to_string()))
    }
}

pub struct StubUpdateEducationUseCase;

#[async_trait]
impl UpdateEducationUseCase for StubUpdateEducationUseCase {
    async fn execute(&self, _id: i64, _data: EducationData) -> Result<Education, EducationError> {
        Err(EducationError::NotFound)
    }
}

pub struct StubDeleteEducationUseCase;

#[async_trait]
impl DeleteEducationUseCase for StubDeleteEducationUseCase {
    async fn execute(&self, _id: i64) -> Result<(), EducationError> {
        Err(EducationError::NotFound)
    }
}

/* --------------------------------------------------
 * Message
 * -------------------------------------------------- */

pub struct StubSubmitMessageUseCase;

#[async_trait]
impl SubmitMessageUseCase for StubSubmitMessageUseCase {
    async fn execute(
        &self,
        _data: SubmitMessageInput,
    ) -> Result<SubmitMessageOutcome, SubmitMessageError> {
        Err(SubmitMessageError::RepositoryError(NOT_USED.to_string()))
    }
}

pub struct StubGetMessagesUseCase;

#[async_trait]
impl GetMessagesUseCase for StubGetMessagesUseCase {
    async fn execute(&self) -> Result<Vec<Message>, ManageMessageError> {
        Ok(vec![])
    }
}

pub struct StubGetSingleMessageUseCase;

#[async_trait]
impl GetSingleMessageUseCase for StubGetSingleMessageUseCase {
    async fn execute(&self, _id: i64) -> Result<Message, ManageMessageError> {
        Err(ManageMessageError::NotFound)
    }
}

pub struct StubMarkMessageReadUseCase;

#[async_trait]
impl MarkMessageReadUseCase for StubMarkMessageReadUseCase {
    async fn execute(&self, _id: i64, _read: bool) -> Result<Message, ManageMessageError> {
        Err(ManageMessageError::NotFound)
    }
}

pub struct StubDeleteMessageUseCase;

#[async_trait]
impl DeleteMessageUseCase for StubDeleteMessageUseCase {
    async fn execute(&self, _id: i64) -> Result<(), ManageMessageError> {
        Err(ManageMessageError::NotFound)
    }
}

/* --------------------------------------------------
 * Stats
 * -------------------------------------------------- */

pub struct StubGetStatsUseCase;

#[async_trait]
impl GetStatsUseCase for StubGetStatsUseCase {
    async fn execute(&self) -> StatsView {
        StatsView {
            total_projects: 0,
            total_certifications: 0,
            total_education: 0,
            total_messages: 0,
            technologies: vec![],
        }
    }
}

/* --------------------------------------------------
 * Auth
 * -------------------------------------------------- */

pub struct StubLoginUseCase;

#[async_trait]
impl LoginUseCase for StubLoginUseCase {
    async fn execute(&self, _data: LoginData) -> Result<LoginResult, LoginError> {
        Err(LoginError::InvalidCredentials)
    }
}

pub struct StubLogoutUseCase;

#[async_trait]
impl LogoutUseCase for StubLogoutUseCase {
    async fn execute(&self, _jti: &str) {}
}

pub struct StubCheckSessionUseCase;

#[async_trait]
impl CheckSessionUseCase for StubCheckSessionUseCase {
    async fn execute(&self, _token: &str) -> Result<SessionInfo, CheckSessionError> {
        Err(CheckSessionError::InvalidToken)
    }
}

/* --------------------------------------------------
 * Media
 * -------------------------------------------------- */

pub struct StubUploadImageUseCase;

#[async_trait]
impl UploadImageUseCase for StubUploadImageUseCase {
    async fn execute(&self, _input: UploadInput) -> Result<StoredMedia, UploadImageError> {
        Err(UploadImageError::StorageError(NOT_USED.to_string()))
    }
}

pub mod certification_services;

pub use certification_services::{
    CreateCertificationService, DeleteCertificationService, GetCertificationsService,
    GetSingleCertificationService, UpdateCertificationService,
};

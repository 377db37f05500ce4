pub mod education_services;

pub use education_services::{
    CreateEducationService, DeleteEducationService, GetEducationListService,
    GetSingleEducationService, UpdateEducationService,
};

pub mod education_routes;

pub use education_routes::{
    create_education_handler, delete_education_handler, get_education_handler,
    get_single_education_handler, update_education_handler,
};

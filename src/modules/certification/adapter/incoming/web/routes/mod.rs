pub mod certification_routes;

pub use certification_routes::{
    create_certification_handler, delete_certification_handler, get_certifications_handler,
    get_single_certification_handler, update_certification_handler,
};

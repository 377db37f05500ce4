pub mod certification_repository_memory;

pub use certification_repository_memory::CertificationRepositoryMemory;

//! 대여 이력(`archives`) 리포지토리

pub mod archive_repo;

pub use archive_repo::ArchiveRepository;

//! 대여 이력 서비스 모듈

pub mod archive_service;

pub use archive_service::ArchiveService;

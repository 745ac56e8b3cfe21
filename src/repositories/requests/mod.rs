//! 대여 요청(`requests`) 리포지토리

pub mod request_repo;

pub use request_repo::RequestRepository;

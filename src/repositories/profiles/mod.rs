//! 사용자 프로필(`users`) 리포지토리

pub mod profile_repo;

pub use profile_repo::ProfileRepository;

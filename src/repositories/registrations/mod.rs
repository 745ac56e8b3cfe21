//! 차량 등록(`registrations`) 리포지토리

pub mod registration_repo;

pub use registration_repo::RegistrationRepository;

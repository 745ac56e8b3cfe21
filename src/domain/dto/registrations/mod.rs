//! 차량 등록 DTO
//!
//! - `POST /api/registrations` → [`CreateRegistrationRequest`]
//! - `PATCH /api/registrations/{id}` → [`UpdateRegistrationRequest`]
//! - `GET /api/registrations?hostId=&status=&tag=&limit=` → [`RegistrationQuery`]

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;

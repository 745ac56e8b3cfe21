//! 대여 이력 DTO
//!
//! - `GET /api/archives?guestId=&hostId=&status=` → [`ArchiveQuery`]
//! - `PUT /api/archives/{id}/rate` → [`RateArchiveRequest`]

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;

//! 대여 요청 DTO
//!
//! - `POST /api/requests` → [`CreateRentalRequest`]
//! - `GET /api/requests?guestId=&hostId=&carId=` → [`RequestQuery`]
//! - 승인/거절/취소 시 호출자 확인 → [`ActorQuery`]

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;

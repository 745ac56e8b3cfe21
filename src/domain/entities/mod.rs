//! MongoDB 문서 엔티티
//!
//! | 엔티티 | 컬렉션 |
//! |--------|--------|
//! | [`Registration`] | `registrations` |
//! | [`RentalRequest`] | `requests` |
//! | [`Archive`] | `archives` |
//! | [`Profile`] | `users` |

pub mod registration;
pub mod rental_request;
pub mod archive;
pub mod profile;

pub use registration::Registration;
pub use rental_request::RentalRequest;
pub use archive::Archive;
pub use profile::Profile;

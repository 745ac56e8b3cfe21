use serde::Serialize;
use crate::domain::entities::Profile;
use crate::utils::date_utils::format_datetime;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub uid: String,
    pub name: String,
    pub birth: String,
    pub address: String,
    pub email: String,
    pub updated_at: String,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            updated_at: format_datetime(&profile.updated_at),
            uid: profile.uid,
            name: profile.name,
            birth: profile.birth,
            address: profile.address,
            email: profile.email,
        }
    }
}

use db::models::{
    role::{Attendant, Host},
    user::User,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct UserUpdateRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: User,
    pub host: bool,
    pub attendant: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_data: Option<Host>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendant_data: Option<Attendant>,
}

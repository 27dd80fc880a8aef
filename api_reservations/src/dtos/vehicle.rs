use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct VehicleCreateRequest {
    #[validate(range(min = 1900, max = 2100))]
    pub year: i32,
    #[validate(length(min = 1, max = 20))]
    pub make: String,
    #[validate(length(min = 1, max = 20))]
    pub model: String,
    #[validate(length(min = 1, max = 10))]
    pub color: String,
    #[validate(length(min = 1, max = 8))]
    pub license: String,
    #[validate(length(max = 100))]
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct VehicleUpdateRequest {
    #[validate(range(min = 1900, max = 2100))]
    pub year: Option<i32>,
    #[validate(length(min = 1, max = 20))]
    pub make: Option<String>,
    #[validate(length(min = 1, max = 20))]
    pub model: Option<String>,
    #[validate(length(min = 1, max = 10))]
    pub color: Option<String>,
    #[validate(length(min = 1, max = 8))]
    pub license: Option<String>,
    #[validate(length(max = 100))]
    pub description: Option<String>,
}

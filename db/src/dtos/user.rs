pub struct UserCreateRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Default)]
pub struct UserUpdateRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

use contracts::system::auth::{LoginRequest, LoginResponse};

use crate::shared::api::{ApiError, Gateway};

const LOGIN_PATH: &str = "/api/auth/tenant/login";

/// Exchange tenant credentials for an access token.
pub async fn login(
    gateway: &Gateway,
    email: String,
    password: String,
) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { email, password };
    gateway.post(LOGIN_PATH, &request).await
}

use shared::models::{
    AuthUser, ForgotPasswordRequest, LoginRequest, ResetPasswordRequest, SignupRequest,
};

use super::Gateway;
use crate::http::HttpClient;
use crate::ClientResult;

impl<C: HttpClient> Gateway<C> {
    pub async fn signup(&self, request: &SignupRequest) -> ClientResult<AuthUser> {
        self.http.post("auth/signup", request).await
    }

    pub async fn login(&self, request: &LoginRequest) -> ClientResult<AuthUser> {
        self.http.post("auth/login", request).await
    }

    /// Current user for the session cookie
    pub async fn me(&self) -> ClientResult<AuthUser> {
        self.http.get("auth/me").await
    }

    pub async fn logout(&self) -> ClientResult<()> {
        self.http.post_empty("auth/logout").await
    }

    pub async fn forgot_password(&self, request: &ForgotPasswordRequest) -> ClientResult<()> {
        self.http.post("auth/forgot", request).await
    }

    pub async fn reset_password(&self, request: &ResetPasswordRequest) -> ClientResult<()> {
        self.http.post("auth/reset", request).await
    }
}

//! Account pages: login, signup, password recovery and profile

use std::time::{Duration, Instant};

use shared::i18n::{Notice, StatusKey};
use shared::models::{AuthUser, ForgotPasswordRequest, LoginRequest, ResetPasswordRequest, SignupRequest};
use shared::routes::Route;
use validator::Validate;

use crate::gateway::Gateway;
use crate::http::HttpClient;
use crate::schedule::{take_due, Scheduled};
use crate::session::SessionContext;

/// Delay between a successful reset and the redirect to login
pub const RESET_REDIRECT_DELAY: Duration = Duration::from_millis(800);

/// Entering the login or signup page ends any current session
async fn end_session<C: HttpClient>(gateway: &Gateway<C>, session: &mut SessionContext) {
    if session.logout(gateway).await.is_err() {
        session.clear();
    }
}

#[derive(Debug, Default)]
pub struct LoginPage {
    pub form: LoginRequest,
    error: Option<Notice>,
}

impl LoginPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn enter<C: HttpClient>(&mut self, gateway: &Gateway<C>, session: &mut SessionContext) {
        end_session(gateway, session).await;
    }

    /// Returns the route to navigate to on success
    pub async fn submit<C: HttpClient>(&mut self, gateway: &Gateway<C>, session: &mut SessionContext) -> Option<Route> {
        self.error = None;
        match session.login(gateway, &self.form).await {
            Ok(_) => Some(Route::home()),
            Err(e) => {
                tracing::debug!(error = %e, "Login rejected");
                self.error = Some(StatusKey::LoginInvalid.into());
                None
            }
        }
    }

    pub fn error(&self) -> Option<&Notice> {
        self.error.as_ref()
    }
}

#[derive(Debug, Default)]
pub struct SignupPage {
    pub form: SignupRequest,
    error: Option<Notice>,
}

impl SignupPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn enter<C: HttpClient>(&mut self, gateway: &Gateway<C>, session: &mut SessionContext) {
        end_session(gateway, session).await;
    }

    pub async fn submit<C: HttpClient>(&mut self, gateway: &Gateway<C>, session: &mut SessionContext) -> Option<Route> {
        self.error = None;
        match session.signup(gateway, &self.form).await {
            Ok(_) => Some(Route::home()),
            Err(e) => {
                self.error = Some(e.user_message(StatusKey::SignupFailed));
                None
            }
        }
    }

    pub fn error(&self) -> Option<&Notice> {
        self.error.as_ref()
    }
}

#[derive(Debug, Default)]
pub struct ForgotPage {
    pub form: ForgotPasswordRequest,
    status: Option<Notice>,
    error: Option<Notice>,
}

impl ForgotPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn submit<C: HttpClient>(&mut self, gateway: &Gateway<C>) {
        self.status = None;
        self.error = None;
        if self.form.validate().is_err() {
            self.error = Some(StatusKey::ForgotFailed.into());
            return;
        }
        match gateway.forgot_password(&self.form).await {
            Ok(()) => self.status = Some(StatusKey::ForgotSent.into()),
            Err(e) => self.error = Some(e.user_message(StatusKey::ForgotFailed)),
        }
    }

    pub fn status(&self) -> Option<&Notice> {
        self.status.as_ref()
    }

    pub fn error(&self) -> Option<&Notice> {
        self.error.as_ref()
    }
}

#[derive(Debug, Default)]
pub struct ResetPage {
    pub form: ResetPasswordRequest,
    status: Option<Notice>,
    error: Option<Notice>,
    redirect: Option<Scheduled<Route>>,
}

impl ResetPage {
    /// Page for the token carried by the reset link
    pub fn new(token: Option<&str>) -> Self {
        Self {
            form: ResetPasswordRequest {
                token: token.unwrap_or_default().to_string(),
                new_password: String::new(),
            },
            ..Default::default()
        }
    }

    pub fn from_route(route: &Route) -> Self {
        match route {
            Route::Reset { token } => Self::new(token.as_deref()),
            _ => Self::new(None),
        }
    }

    pub async fn submit<C: HttpClient>(&mut self, gateway: &Gateway<C>, now: Instant) {
        self.status = None;
        self.error = None;
        if self.form.validate().is_err() {
            self.error = Some(StatusKey::ResetFailed.into());
            return;
        }
        match gateway.reset_password(&self.form).await {
            Ok(()) => {
                self.status = Some(StatusKey::ResetDone.into());
                self.redirect = Some(Scheduled::after(now, RESET_REDIRECT_DELAY, Route::Login));
            }
            Err(e) => self.error = Some(e.user_message(StatusKey::ResetFailed)),
        }
    }

    /// Route to navigate to once the redirect delay has passed
    pub fn poll(&mut self, now: Instant) -> Option<Route> {
        take_due(&mut self.redirect, now)
    }

    pub fn status(&self) -> Option<&Notice> {
        self.status.as_ref()
    }

    pub fn error(&self) -> Option<&Notice> {
        self.error.as_ref()
    }
}

#[derive(Debug)]
pub struct ProfilePage {
    user: Option<AuthUser>,
    status: Option<Notice>,
}

impl ProfilePage {
    pub fn new() -> Self {
        Self {
            user: None,
            status: Some(StatusKey::ProfileLoading.into()),
        }
    }

    pub async fn load<C: HttpClient>(&mut self, gateway: &Gateway<C>, session: &mut SessionContext) {
        self.user = session.refresh(gateway).await;
        self.status = match self.user {
            Some(_) => None,
            None => Some(StatusKey::ProfileNeedSignIn.into()),
        };
    }

    pub fn user(&self) -> Option<&AuthUser> {
        self.user.as_ref()
    }

    pub fn status(&self) -> Option<&Notice> {
        self.status.as_ref()
    }
}

impl Default for ProfilePage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_page_reads_token_from_route() {
        let page = ResetPage::from_route(&Route::parse("/reset?token=abc123"));
        assert_eq!(page.form.token, "abc123");

        let page = ResetPage::from_route(&Route::Cart);
        assert!(page.form.token.is_empty());
    }

    #[test]
    fn test_profile_starts_loading() {
        let page = ProfilePage::new();
        assert!(page.status().unwrap().is_key(StatusKey::ProfileLoading));
        assert!(page.user().is_none());
    }
}

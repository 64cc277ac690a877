//! Session context
//!
//! Owns the current user and the UI language. Controllers receive it by
//! reference; views that want change notifications register a listener
//! with [`SessionContext::subscribe`] and tear it down with
//! [`SessionContext::unsubscribe`]. Listeners run in registration order.

use std::fmt;

use shared::i18n::{Language, TextDirection};
use shared::models::{AuthUser, LoginRequest, SignupRequest};
use validator::Validate;

use crate::gateway::Gateway;
use crate::http::HttpClient;
use crate::preferences::Preferences;
use crate::ClientResult;

/// Change published to listeners
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    SignedIn(AuthUser),
    SignedOut,
    /// Result of `me`: `None` when the session is anonymous or expired
    Refreshed(Option<AuthUser>),
    LanguageChanged(Language),
}

/// Handle returned by [`SessionContext::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&SessionEvent) + Send>;

pub struct SessionContext {
    user: Option<AuthUser>,
    language: Language,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl SessionContext {
    pub fn new(language: Language) -> Self {
        Self {
            user: None,
            language,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Context with the language restored from preferences
    pub fn from_preferences(prefs: &Preferences) -> Self {
        Self::new(prefs.language())
    }

    // ========== Listeners ==========

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&SessionEvent) + Send + 'static,
    {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener; returns false if it was already removed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn publish(&mut self, event: SessionEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event);
        }
    }

    // ========== State ==========

    pub fn current_user(&self) -> Option<&AuthUser> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Gate for product administration
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(AuthUser::is_admin)
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn direction(&self) -> TextDirection {
        self.language.direction()
    }

    /// Drop the local user without calling the backend
    pub fn clear(&mut self) {
        if self.user.take().is_some() {
            self.publish(SessionEvent::SignedOut);
        }
    }

    // ========== Backend-driven transitions ==========

    /// Ask the backend who we are; failures leave the session anonymous
    pub async fn refresh<C: HttpClient>(&mut self, gateway: &Gateway<C>) -> Option<AuthUser> {
        self.user = match gateway.me().await {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::debug!(error = %e, "Session refresh failed, treating as anonymous");
                None
            }
        };
        self.publish(SessionEvent::Refreshed(self.user.clone()));
        self.user.clone()
    }

    /// Log in, ending any previous session first
    pub async fn login<C: HttpClient>(
        &mut self,
        gateway: &Gateway<C>,
        request: &LoginRequest,
    ) -> ClientResult<AuthUser> {
        request.validate()?;
        self.end_previous(gateway).await;
        let user = gateway.login(request).await?;
        tracing::info!(username = %user.username, "Logged in");
        self.sign_in(user.clone());
        Ok(user)
    }

    /// Create an account, ending any previous session first
    pub async fn signup<C: HttpClient>(
        &mut self,
        gateway: &Gateway<C>,
        request: &SignupRequest,
    ) -> ClientResult<AuthUser> {
        request.validate()?;
        self.end_previous(gateway).await;
        let user = gateway.signup(request).await?;
        tracing::info!(username = %user.username, "Signed up");
        self.sign_in(user.clone());
        Ok(user)
    }

    pub async fn logout<C: HttpClient>(&mut self, gateway: &Gateway<C>) -> ClientResult<()> {
        gateway.logout().await?;
        tracing::info!("Logged out");
        self.user = None;
        self.publish(SessionEvent::SignedOut);
        Ok(())
    }

    /// Switch language and persist the choice
    pub fn set_language(&mut self, language: Language, prefs: &mut Preferences) -> ClientResult<()> {
        prefs.set_language(language)?;
        if self.language != language {
            self.language = language;
            self.publish(SessionEvent::LanguageChanged(language));
        }
        Ok(())
    }

    /// Restore the persisted language; returns the applied language
    pub fn init_language(&mut self, prefs: &Preferences) -> Language {
        let language = prefs.language();
        if self.language != language {
            self.language = language;
            self.publish(SessionEvent::LanguageChanged(language));
        }
        language
    }

    fn sign_in(&mut self, user: AuthUser) {
        self.user = Some(user.clone());
        self.publish(SessionEvent::SignedIn(user));
    }

    async fn end_previous<C: HttpClient>(&mut self, gateway: &Gateway<C>) {
        if let Err(e) = gateway.logout().await {
            tracing::debug!(error = %e, "Ignoring logout failure before authentication");
        }
        self.clear();
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext")
            .field("user", &self.user)
            .field("language", &self.language)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

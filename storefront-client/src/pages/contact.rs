//! Support contact form

use shared::i18n::{Notice, StatusKey};
use shared::models::ContactMessage;
use validator::Validate;

use crate::gateway::Gateway;
use crate::http::HttpClient;

#[derive(Debug, Default)]
pub struct ContactPage {
    pub form: ContactMessage,
    status: Option<Notice>,
    sending: bool,
}

impl ContactPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Send the form; returns true when the message was delivered
    pub async fn submit<C: HttpClient>(&mut self, gateway: &Gateway<C>) -> bool {
        if self.form.validate().is_err() {
            self.status = Some(StatusKey::ContactRequired.into());
            return false;
        }
        self.sending = true;
        self.status = Some(StatusKey::ContactSending.into());

        let result = gateway.send_contact(&self.form).await;
        self.sending = false;
        match result {
            Ok(()) => {
                self.status = Some(StatusKey::ContactSent.into());
                self.form = ContactMessage::default();
                true
            }
            Err(e) => {
                self.status = Some(e.user_message(StatusKey::ContactFailed));
                false
            }
        }
    }

    pub fn status(&self) -> Option<&Notice> {
        self.status.as_ref()
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }
}

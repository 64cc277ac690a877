use shared::models::ContactMessage;

use super::Gateway;
use crate::http::HttpClient;
use crate::ClientResult;

impl<C: HttpClient> Gateway<C> {
    pub async fn send_contact(&self, message: &ContactMessage) -> ClientResult<()> {
        self.http.post("support/contact", message).await
    }
}

//! Cart and checkout page
//!
//! Card checkout is a demo: it validates the form and closes the dialog
//! without contacting a payment provider. PayPal checkout creates and
//! captures an order through the backend.

use std::time::{Duration, Instant};

use shared::i18n::{Notice, StatusKey};
use shared::models::{Cart, PayPalOrderRequest};
use validator::Validate;

use crate::config::{ClientConfig, DEFAULT_PAYPAL_CURRENCY};
use crate::gateway::Gateway;
use crate::http::HttpClient;
use crate::schedule::{take_due, Scheduled};
use crate::{ClientError, ClientResult};

/// Delay before the dialog closes after a demo card payment
pub const CARD_CLOSE_DELAY: Duration = Duration::from_millis(1400);

/// Delay before the dialog closes after a captured PayPal payment
pub const PAYPAL_CLOSE_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentMethod {
    #[default]
    Card,
    PayPal,
}

/// Card form; billing address is optional
#[derive(Debug, Clone, Default, Validate)]
pub struct CardDetails {
    #[validate(length(min = 1))]
    pub full_name: String,
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub card_number: String,
    #[validate(length(min = 1))]
    pub expiry: String,
    #[validate(length(min = 1))]
    pub cvc: String,
    pub billing_address: String,
}

#[derive(Debug, Clone, Default)]
pub struct CheckoutDialog {
    pub method: PaymentMethod,
    pub card: CardDetails,
    status: Option<Notice>,
    order_id: Option<String>,
    closing: Option<Scheduled<()>>,
}

impl CheckoutDialog {
    pub fn status(&self) -> Option<&Notice> {
        self.status.as_ref()
    }

    /// PayPal order awaiting approval
    pub fn order_id(&self) -> Option<&str> {
        self.order_id.as_deref()
    }

    pub fn is_closing(&self) -> bool {
        self.closing.is_some()
    }
}

#[derive(Debug)]
pub struct CartPage {
    cart: Option<Cart>,
    status: Option<Notice>,
    error: Option<Notice>,
    checkout: Option<CheckoutDialog>,
    /// Cart reload owed after a captured payment, kept even if the dialog is gone
    reload: Option<Scheduled<()>>,
    /// Remembered across dialog openings
    method: PaymentMethod,
    paypal_currency: String,
}

impl CartPage {
    pub fn new(paypal_currency: impl Into<String>) -> Self {
        Self {
            cart: None,
            status: Some(StatusKey::CartLoading.into()),
            error: None,
            checkout: None,
            reload: None,
            method: PaymentMethod::default(),
            paypal_currency: paypal_currency.into(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.paypal_currency.clone())
    }

    // ========== Cart ==========

    /// Fetch the session's cart
    pub async fn load<C: HttpClient>(&mut self, gateway: &Gateway<C>) {
        match gateway.get_cart().await {
            Ok(cart) => {
                self.status = cart.is_empty().then(|| StatusKey::CartEmpty.into());
                self.cart = Some(cart);
            }
            Err(e) => {
                tracing::debug!(error = %e, "Cart unavailable");
                self.cart = None;
                self.status = Some(StatusKey::CartNeedSignIn.into());
            }
        }
    }

    /// Set a line's quantity; zero or less removes the line
    pub async fn update_quantity<C: HttpClient>(
        &mut self,
        gateway: &Gateway<C>,
        item_id: i64,
        quantity: i32,
    ) -> ClientResult<()> {
        if self.cart.is_none() {
            return Ok(());
        }
        if quantity <= 0 {
            return self.remove_item(gateway, item_id).await;
        }
        let Some(product_id) = self.cart.as_ref().and_then(|cart| cart.item(item_id)).map(|item| item.product_id)
        else {
            let e = ClientError::InvalidResponse(format!("cart has no item {}", item_id));
            tracing::warn!(error = %e, "Cart update failed");
            self.error = Some(StatusKey::CartUpdateFailed.into());
            return Err(e);
        };

        let result = gateway.update_cart_item(item_id, product_id, quantity).await.map(|_| ());
        self.after_change(gateway, result).await
    }

    pub async fn remove_item<C: HttpClient>(&mut self, gateway: &Gateway<C>, item_id: i64) -> ClientResult<()> {
        if self.cart.is_none() {
            return Ok(());
        }
        let result = gateway.remove_cart_item(item_id).await;
        self.after_change(gateway, result).await
    }

    async fn after_change<C: HttpClient>(&mut self, gateway: &Gateway<C>, result: ClientResult<()>) -> ClientResult<()> {
        match result {
            Ok(()) => {
                self.error = None;
                self.load(gateway).await;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Cart update failed");
                self.error = Some(e.user_message(StatusKey::CartUpdateFailed));
                Err(e)
            }
        }
    }

    // ========== Checkout ==========

    pub fn open_checkout(&mut self) {
        self.checkout = Some(CheckoutDialog {
            method: self.method,
            ..Default::default()
        });
    }

    pub fn close_checkout(&mut self) {
        self.checkout = None;
    }

    pub fn set_payment_method(&mut self, method: PaymentMethod) {
        self.method = method;
        if let Some(dialog) = self.checkout.as_mut() {
            dialog.method = method;
        }
    }

    /// Submit the dialog; card payments require every card field
    pub fn submit_checkout(&mut self, now: Instant) -> bool {
        let Some(dialog) = self.checkout.as_mut() else {
            return false;
        };
        if dialog.method == PaymentMethod::Card && dialog.card.validate().is_err() {
            dialog.status = Some(StatusKey::CheckoutRequiredFields.into());
            return false;
        }
        dialog.status = Some(StatusKey::CheckoutSubmitted.into());
        dialog.closing = Some(Scheduled::after(now, CARD_CLOSE_DELAY, ()));
        true
    }

    /// Create a PayPal order for the cart total
    pub async fn create_paypal_order<C: HttpClient>(&mut self, gateway: &Gateway<C>) -> ClientResult<String> {
        let Some(cart) = &self.cart else {
            return Err(ClientError::InvalidResponse("no cart loaded".into()));
        };
        let currency = if cart.currency.is_empty() {
            self.paypal_currency.clone()
        } else {
            cart.currency.clone()
        };
        let request = PayPalOrderRequest {
            amount: cart.total,
            currency,
            cart_id: cart.id,
        };

        match gateway.create_paypal_order(&request).await {
            Ok(order) => {
                if let Some(dialog) = self.checkout.as_mut() {
                    dialog.order_id = Some(order.order_id.clone());
                }
                Ok(order.order_id)
            }
            Err(e) => {
                self.fail_checkout(&e);
                Err(e)
            }
        }
    }

    /// Capture an approved order; on success the dialog closes and the cart reloads
    pub async fn capture_paypal_order<C: HttpClient>(
        &mut self,
        gateway: &Gateway<C>,
        order_id: &str,
        now: Instant,
    ) -> ClientResult<()> {
        match gateway.capture_paypal_order(order_id).await {
            Ok(_) => {
                if let Some(dialog) = self.checkout.as_mut() {
                    dialog.status = Some(StatusKey::CheckoutPaid.into());
                    dialog.order_id = None;
                    dialog.closing = Some(Scheduled::after(now, PAYPAL_CLOSE_DELAY, ()));
                }
                self.reload = Some(Scheduled::after(now, PAYPAL_CLOSE_DELAY, ()));
                Ok(())
            }
            Err(e) => {
                self.fail_checkout(&e);
                Err(e)
            }
        }
    }

    fn fail_checkout(&mut self, error: &ClientError) {
        tracing::warn!(error = %error, "PayPal checkout failed");
        if let Some(dialog) = self.checkout.as_mut() {
            dialog.status = Some(StatusKey::CheckoutFailed.into());
        }
    }

    /// Apply a due dialog close; returns true when the cart should be reloaded
    pub fn poll(&mut self, now: Instant) -> bool {
        if let Some(dialog) = self.checkout.as_mut() {
            if take_due(&mut dialog.closing, now).is_some() {
                self.checkout = None;
            }
        }
        take_due(&mut self.reload, now).is_some()
    }

    /// [`poll`](Self::poll) and perform the reload it asks for
    pub async fn tick<C: HttpClient>(&mut self, gateway: &Gateway<C>, now: Instant) {
        if self.poll(now) {
            self.load(gateway).await;
        }
    }

    // ========== View state ==========

    pub fn cart(&self) -> Option<&Cart> {
        self.cart.as_ref()
    }

    pub fn status(&self) -> Option<&Notice> {
        self.status.as_ref()
    }

    /// Last failed quantity change or removal
    pub fn error(&self) -> Option<&Notice> {
        self.error.as_ref()
    }

    pub fn checkout(&self) -> Option<&CheckoutDialog> {
        self.checkout.as_ref()
    }

    pub fn checkout_mut(&mut self) -> Option<&mut CheckoutDialog> {
        self.checkout.as_mut()
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.method
    }
}

impl Default for CartPage {
    fn default() -> Self {
        Self::new(DEFAULT_PAYPAL_CURRENCY)
    }
}

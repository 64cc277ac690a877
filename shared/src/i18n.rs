//! Languages and translation keys
//!
//! Translation content lives with the UI; this module only knows which
//! languages exist and which keys the controllers emit.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Preference key under which the chosen language is persisted
pub const LANGUAGE_KEY: &str = "app.language";

/// Supported UI language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
    Es,
    Ar,
}

/// Text direction for a language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl Language {
    pub const ALL: [Language; 4] = [Language::En, Language::Fr, Language::Es, Language::Ar];

    /// Resolve a language code, falling back to English for anything unsupported
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "fr" => Self::Fr,
            "es" => Self::Es,
            "ar" => Self::Ar,
            _ => Self::En,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
            Self::Es => "es",
            Self::Ar => "ar",
        }
    }

    pub fn direction(&self) -> TextDirection {
        match self {
            Self::Ar => TextDirection::Rtl,
            _ => TextDirection::Ltr,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Translation keys emitted by page controllers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKey {
    // Home
    HomeLoading,
    HomeNoResults,
    HomeNeedSignIn,
    HomeAdded,
    HomeAddFailed,
    HomeSignIn,
    HomeRequiredFields,
    HomeCreateFailed,
    HomeUpdateFailed,
    HomeDeleteFailed,

    // Product detail
    ProductLoading,
    ProductNotFound,
    ProductAdded,
    ProductAddFailed,
    ProductSignIn,

    // Cart and checkout
    CartLoading,
    CartEmpty,
    CartNeedSignIn,
    CartUpdateFailed,
    CheckoutRequiredFields,
    CheckoutSubmitted,
    CheckoutPaid,
    CheckoutFailed,

    // Account
    LoginInvalid,
    SignupFailed,
    ForgotSent,
    ForgotFailed,
    ResetDone,
    ResetFailed,
    ProfileLoading,
    ProfileNeedSignIn,

    // Contact
    ContactRequired,
    ContactSending,
    ContactSent,
    ContactFailed,
}

impl StatusKey {
    /// Translation file key
    pub fn key(&self) -> &'static str {
        match self {
            Self::HomeLoading => "HOME.STATUS.LOADING",
            Self::HomeNoResults => "HOME.STATUS.NO_RESULTS",
            Self::HomeNeedSignIn => "HOME.STATUS.NEED_SIGNIN",
            Self::HomeAdded => "HOME.TOAST.ADDED",
            Self::HomeAddFailed => "HOME.TOAST.ADD_FAILED",
            Self::HomeSignIn => "HOME.TOAST.SIGN_IN",
            Self::HomeRequiredFields => "HOME.ERRORS.REQUIRED_FIELDS",
            Self::HomeCreateFailed => "HOME.ERRORS.ADD_FAILED",
            Self::HomeUpdateFailed => "HOME.ERRORS.UPDATE_FAILED",
            Self::HomeDeleteFailed => "HOME.ERRORS.DELETE_FAILED",

            Self::ProductLoading => "PRODUCT.STATUS.LOADING",
            Self::ProductNotFound => "PRODUCT.STATUS.NOT_FOUND",
            Self::ProductAdded => "PRODUCT.TOAST.ADDED",
            Self::ProductAddFailed => "PRODUCT.TOAST.ADD_FAILED",
            Self::ProductSignIn => "PRODUCT.TOAST.SIGN_IN",

            Self::CartLoading => "CART.STATUS.LOADING",
            Self::CartEmpty => "CART.STATUS.EMPTY",
            Self::CartNeedSignIn => "CART.STATUS.NEED_SIGNIN",
            Self::CartUpdateFailed => "CART.ERRORS.UPDATE_FAILED",
            Self::CheckoutRequiredFields => "CART.CHECKOUT.REQUIRED_FIELDS",
            Self::CheckoutSubmitted => "CART.CHECKOUT.SUBMITTED",
            Self::CheckoutPaid => "CART.CHECKOUT.PAID",
            Self::CheckoutFailed => "CART.CHECKOUT.FAILED",

            Self::LoginInvalid => "AUTH.LOGIN.INVALID",
            Self::SignupFailed => "AUTH.SIGNUP.FAILED",
            Self::ForgotSent => "AUTH.FORGOT.SENT",
            Self::ForgotFailed => "AUTH.FORGOT.FAILED",
            Self::ResetDone => "AUTH.RESET.DONE",
            Self::ResetFailed => "AUTH.RESET.FAILED",
            Self::ProfileLoading => "PROFILE.STATUS.LOADING",
            Self::ProfileNeedSignIn => "PROFILE.STATUS.NEED_SIGNIN",

            Self::ContactRequired => "CONTACT.ERRORS.REQUIRED",
            Self::ContactSending => "CONTACT.STATUS.SENDING",
            Self::ContactSent => "CONTACT.STATUS.SENT",
            Self::ContactFailed => "CONTACT.ERRORS.FAILED",
        }
    }
}

/// User-facing text: a translation key, or a message passed through from the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Key(StatusKey),
    Text(String),
}

impl Notice {
    pub fn is_key(&self, key: StatusKey) -> bool {
        matches!(self, Self::Key(k) if *k == key)
    }
}

impl From<StatusKey> for Notice {
    fn from(key: StatusKey) -> Self {
        Self::Key(key)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key.key()),
            Self::Text(text) => f.write_str(text),
        }
    }
}

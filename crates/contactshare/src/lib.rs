//! Contactshare - one person's contact details over HTTP.
//!
//! A single [`IdentityRecord`] is loaded from the environment at startup and
//! published in three forms:
//!
//! - **HTML**: A contact page rendered with maud (compile-time templates)
//! - **vCard**: A 3.0 contact card for address-book import
//! - **QR**: A PNG QR code of the base URL
//!
//! Every representation is a pure function of the record, which is never
//! mutated after startup, so handlers share it without locking.
//!
//! # Security
//!
//! - All dynamic content in the page is HTML-escaped by maud
//! - Line breaks in vCard values are escaped so they cannot add properties
//! - The page is served with CSP, nosniff and X-Frame-Options: DENY

pub mod config;
pub mod error;
pub mod identity;
pub mod qr;
pub mod render;
pub mod routes;
pub mod state;
pub mod vcard;

pub use config::{Config, ConfigError};
pub use error::ServeError;
pub use identity::{IdentityFields, IdentityRecord};
pub use routes::router;
pub use state::AppState;

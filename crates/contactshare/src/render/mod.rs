//! HTML rendering for the contact page.
//!
//! All rendering uses [maud](https://maud.lambda.xyz/) for compile-time HTML
//! generation with automatic XSS protection (all dynamic values are escaped).
//! Templates are checked by the compiler, so rendering cannot fail at runtime.

pub mod components;
pub mod home;

pub use home::render as render_home;

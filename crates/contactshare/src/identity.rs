//! The identity record every representation is derived from.
//!
//! An [`IdentityRecord`] is built once at startup and never changes. Fields
//! are private; the accessors return `None` for optional fields that were
//! left empty, so callers never have to distinguish "unset" from "blank".

use crate::config::ConfigError;

/// Raw, unvalidated contact fields as read from configuration.
///
/// Empty strings mean "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityFields {
    pub name: String,
    pub base_url: String,
    pub email: String,
    pub phone: String,
    pub bluesky: String,
    pub github: String,
    pub whatsapp: String,
    pub facebook: String,
}

/// Validated, immutable contact information for one person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityRecord {
    name: String,
    base_url: String,
    email: String,
    phone: String,
    bluesky: String,
    github: String,
    whatsapp: String,
    facebook: String,
}

impl IdentityRecord {
    /// Validate the raw fields and build a record.
    ///
    /// `NAME` is checked before `BASE_URL`; only the first missing field is
    /// reported.
    pub fn build(fields: IdentityFields) -> Result<Self, ConfigError> {
        if fields.name.is_empty() {
            return Err(ConfigError::MissingField("NAME"));
        }
        if fields.base_url.is_empty() {
            return Err(ConfigError::MissingField("BASE_URL"));
        }

        Ok(Self {
            name: fields.name,
            base_url: fields.base_url,
            email: fields.email,
            phone: fields.phone,
            bluesky: fields.bluesky,
            github: fields.github,
            whatsapp: fields.whatsapp,
            facebook: fields.facebook,
        })
    }

    /// Display name, shown as the page heading and the vCard `FN`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Canonical URL, encoded into the QR code.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn email(&self) -> Option<&str> {
        non_empty(&self.email)
    }

    pub fn phone(&self) -> Option<&str> {
        non_empty(&self.phone)
    }

    pub fn bluesky(&self) -> Option<&str> {
        non_empty(&self.bluesky)
    }

    pub fn github(&self) -> Option<&str> {
        non_empty(&self.github)
    }

    pub fn whatsapp(&self) -> Option<&str> {
        non_empty(&self.whatsapp)
    }

    pub fn facebook(&self) -> Option<&str> {
        non_empty(&self.facebook)
    }

    /// Number of optional fields that are set.
    pub fn optional_field_count(&self) -> usize {
        [
            self.email(),
            self.phone(),
            self.bluesky(),
            self.github(),
            self.whatsapp(),
            self.facebook(),
        ]
        .iter()
        .filter(|f| f.is_some())
        .count()
    }
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() { None } else { Some(s) }
}

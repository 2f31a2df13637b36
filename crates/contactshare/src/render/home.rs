//! Contact page renderer.
//!
//! Lists each optional field that is set, in a fixed order (email, phone,
//! Bluesky, GitHub, WhatsApp, Facebook), followed by the vCard download link.

use maud::{DOCTYPE, Markup, PreEscaped, html};

use super::components::{PAGE_CSS, contact_entry, profile_entry};
use crate::identity::IdentityRecord;

/// Path the call-to-action button downloads the vCard from.
pub const VCARD_PATH: &str = "/contact.vcf";

/// Render the contact page for `record`.
pub fn render(record: &IdentityRecord) -> Markup {
    let name = record.name();
    let title = format!("{name} - Contact Info");

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                div class="container" {
                    h1 { (name) }
                    ul class="contact-list" {
                        @if let Some(email) = record.email() {
                            (contact_entry("Email", &format!("mailto:{email}"), email))
                        }
                        @if let Some(phone) = record.phone() {
                            (contact_entry("Phone", &format!("tel:{phone}"), phone))
                        }
                        @if let Some(bluesky) = record.bluesky() {
                            (profile_entry("Bluesky", bluesky, "Profile"))
                        }
                        @if let Some(github) = record.github() {
                            (profile_entry("GitHub", github, "Profile"))
                        }
                        @if let Some(whatsapp) = record.whatsapp() {
                            (profile_entry("WhatsApp", whatsapp, "Chat"))
                        }
                        @if let Some(facebook) = record.facebook() {
                            (profile_entry("Facebook", facebook, "Profile"))
                        }
                    }
                    a href=(VCARD_PATH) class="btn" { "Download Contact (vCard)" }
                }
            }
        }
    }
}

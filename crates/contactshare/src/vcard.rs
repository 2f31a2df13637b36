//! vCard 3.0 encoding of the identity record.
//!
//! Layout:
//!
//! ```text
//! BEGIN:VCARD
//! VERSION:3.0
//! FN:<name>
//! EMAIL:<email>                  (if set)
//! TEL;TYPE=CELL:<phone>          (if set)
//! URL:<base url>
//! URL:<github|facebook|bluesky|whatsapp>   (each if set, in that order)
//! NOTE:Bluesky: ..\nGitHub: ..\nFacebook: ..\n   (if any of the three is set)
//! END:VCARD
//! ```
//!
//! WhatsApp gets a `URL` line but is never part of the `NOTE`.

use std::fmt::Write;

use crate::identity::IdentityRecord;

/// Escaped line break, as two literal characters.
const ESCAPED_NEWLINE: &str = "\\n";

/// Encode the record as a vCard. There is no trailing newline after `END:VCARD`.
pub fn encode(record: &IdentityRecord) -> String {
    let mut card = String::with_capacity(256);
    card.push_str("BEGIN:VCARD\nVERSION:3.0\n");
    push_line(&mut card, "FN", record.name());

    if let Some(email) = record.email() {
        push_line(&mut card, "EMAIL", email);
    }
    if let Some(phone) = record.phone() {
        push_line(&mut card, "TEL;TYPE=CELL", phone);
    }

    push_line(&mut card, "URL", record.base_url());
    for url in [
        record.github(),
        record.facebook(),
        record.bluesky(),
        record.whatsapp(),
    ]
    .into_iter()
    .flatten()
    {
        push_line(&mut card, "URL", url);
    }

    let note = note(record);
    if !note.is_empty() {
        // Already escaped while building.
        card.push_str("NOTE:");
        card.push_str(&note);
        card.push('\n');
    }

    card.push_str("END:VCARD");
    card
}

/// Labeled profile links for the `NOTE` property, each terminated by an
/// escaped newline. Empty when none of the three is set.
fn note(record: &IdentityRecord) -> String {
    let labeled = [
        ("Bluesky", record.bluesky()),
        ("GitHub", record.github()),
        ("Facebook", record.facebook()),
    ];

    let mut note = String::new();
    for (label, value) in labeled {
        if let Some(value) = value {
            let _ = write!(note, "{label}: {}{ESCAPED_NEWLINE}", escape(value));
        }
    }
    note
}

fn push_line(card: &mut String, property: &str, value: &str) {
    card.push_str(property);
    card.push(':');
    card.push_str(&escape(value));
    card.push('\n');
}

/// Keep a value on one content line: CR/LF become the `\n` escape token.
fn escape(value: &str) -> String {
    value
        .replace("\r\n", ESCAPED_NEWLINE)
        .replace(['\r', '\n'], ESCAPED_NEWLINE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::IdentityFields;

    fn jane() -> IdentityRecord {
        IdentityRecord::build(IdentityFields {
            name: "Jane Doe".to_string(),
            base_url: "https://example.com/jane".to_string(),
            email: "jane@example.com".to_string(),
            github: "https://github.com/jane".to_string(),
            ..Default::default()
        })
        .unwrap()
    }

    fn full() -> IdentityRecord {
        IdentityRecord::build(IdentityFields {
            name: "Jane Doe".to_string(),
            base_url: "https://example.com/jane".to_string(),
            email: "jane@example.com".to_string(),
            phone: "+15550100".to_string(),
            bluesky: "https://bsky.app/profile/jane".to_string(),
            github: "https://github.com/jane".to_string(),
            whatsapp: "https://wa.me/15550100".to_string(),
            facebook: "https://facebook.com/jane".to_string(),
        })
        .unwrap()
    }

    fn minimal() -> IdentityRecord {
        IdentityRecord::build(IdentityFields {
            name: "Jane Doe".to_string(),
            base_url: "https://example.com/jane".to_string(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn jane_doe_card() {
        let card = encode(&jane());
        assert_eq!(
            card,
            "BEGIN:VCARD\n\
             VERSION:3.0\n\
             FN:Jane Doe\n\
             EMAIL:jane@example.com\n\
             URL:https://example.com/jane\n\
             URL:https://github.com/jane\n\
             NOTE:GitHub: https://github.com/jane\\n\n\
             END:VCARD"
        );
        assert!(!card.contains("TEL"));
        assert!(!card.contains("Bluesky:"));
        assert!(!card.contains("Facebook:"));
    }

    #[test]
    fn minimal_card() {
        let card = encode(&minimal());
        assert_eq!(
            card,
            "BEGIN:VCARD\nVERSION:3.0\nFN:Jane Doe\nURL:https://example.com/jane\nEND:VCARD"
        );
    }

    #[test]
    fn full_card_order() {
        let card = encode(&full());
        let lines: Vec<&str> = card.split('\n').collect();
        assert_eq!(
            lines,
            vec![
                "BEGIN:VCARD",
                "VERSION:3.0",
                "FN:Jane Doe",
                "EMAIL:jane@example.com",
                "TEL;TYPE=CELL:+15550100",
                "URL:https://example.com/jane",
                "URL:https://github.com/jane",
                "URL:https://facebook.com/jane",
                "URL:https://bsky.app/profile/jane",
                "URL:https://wa.me/15550100",
                "NOTE:Bluesky: https://bsky.app/profile/jane\\nGitHub: https://github.com/jane\\nFacebook: https://facebook.com/jane\\n",
                "END:VCARD",
            ]
        );
    }

    #[test]
    fn whatsapp_is_url_but_never_note() {
        let record = IdentityRecord::build(IdentityFields {
            name: "Jane Doe".to_string(),
            base_url: "https://example.com/jane".to_string(),
            whatsapp: "https://wa.me/15550100".to_string(),
            ..Default::default()
        })
        .unwrap();
        let card = encode(&record);
        assert!(card.contains("URL:https://wa.me/15550100\n"));
        assert!(!card.contains("NOTE:"));
        assert!(!card.contains("WhatsApp"));
    }

    #[test]
    fn header_and_footer() {
        for record in [jane(), full(), minimal()] {
            let card = encode(&record);
            assert!(card.starts_with("BEGIN:VCARD\nVERSION:3.0\n"));
            assert!(card.ends_with("END:VCARD"));
            assert!(!card.ends_with('\n'));
        }
    }

    #[test]
    fn social_url_lines_present_iff_set() {
        let card = encode(&jane());
        let urls: Vec<&str> = card.lines().filter(|l| l.starts_with("URL:")).collect();
        assert_eq!(
            urls,
            vec!["URL:https://example.com/jane", "URL:https://github.com/jane"]
        );
    }

    #[test]
    fn embedded_newlines_do_not_break_lines() {
        let record = IdentityRecord::build(IdentityFields {
            name: "Jane\nDoe".to_string(),
            base_url: "https://example.com/jane".to_string(),
            email: "jane@example.com\r\nX-INJECTED:1".to_string(),
            ..Default::default()
        })
        .unwrap();
        let card = encode(&record);
        assert!(card.contains("FN:Jane\\nDoe\n"));
        assert!(card.contains("EMAIL:jane@example.com\\nX-INJECTED:1\n"));
        assert!(!card.lines().any(|l| l.starts_with("X-INJECTED")));
        assert_eq!(card.lines().count(), 6);
    }

    #[test]
    fn encode_is_idempotent() {
        let record = full();
        assert_eq!(encode(&record), encode(&record));
    }
}

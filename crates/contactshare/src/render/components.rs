//! Shared HTML fragments and page constants.

use maud::{Markup, html};

/// Inline CSS for the contact page.
pub const PAGE_CSS: &str = r#"
*{box-sizing:border-box;margin:0;padding:0}
body{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,"Helvetica Neue",Arial,sans-serif;max-width:600px;margin:0 auto;padding:20px;line-height:1.6;background:#f5f5f5}
.container{background:#fff;border-radius:8px;padding:30px;box-shadow:0 2px 10px rgba(0,0,0,.1)}
h1{text-align:center;margin-bottom:30px;color:#333;font-size:2em}
.contact-list{list-style:none;padding:0;margin-bottom:20px}
.contact-list li{margin-bottom:15px;padding:10px;background:#f9f9f9;border-radius:5px;transition:background .2s}
.contact-list li:hover{background:#e9e9e9}
.contact-list strong{display:inline-block;min-width:100px;color:#555}
.contact-list a{text-decoration:none;color:#007bff;word-break:break-all}
.contact-list a:hover{text-decoration:underline}
.btn{display:block;width:100%;padding:15px;background:#28a745;color:#fff;text-align:center;text-decoration:none;border-radius:5px;margin-top:20px;font-weight:bold;transition:background .2s}
.btn:hover{background:#218838}
@media(max-width:600px){
body{padding:10px}
.container{padding:20px}
h1{font-size:1.5em}
.contact-list strong{display:block;margin-bottom:5px}
}
"#;

/// Content-Security-Policy header value.
///
/// Inline styles only; images from this origin or data URIs.
pub const CSP_HEADER: &str = "default-src 'self' 'unsafe-inline'; img-src 'self' data:";

/// A labeled entry whose link stays in the current tab (`mailto:`, `tel:`).
pub fn contact_entry(label: &str, href: &str, text: &str) -> Markup {
    html! {
        li {
            strong { (label) ":" }
            " "
            a href=(href) { (text) }
        }
    }
}

/// A labeled entry linking to an external profile in a new tab.
///
/// `rel="noopener"` keeps the new page from reaching `window.opener`.
pub fn profile_entry(label: &str, href: &str, text: &str) -> Markup {
    html! {
        li {
            strong { (label) ":" }
            " "
            a href=(href) target="_blank" rel="noopener" { (text) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_entry_renders_link() {
        let html = contact_entry("Email", "mailto:a@b.com", "a@b.com").into_string();
        assert_eq!(
            html,
            r#"<li><strong>Email:</strong> <a href="mailto:a@b.com">a@b.com</a></li>"#
        );
    }

    #[test]
    fn profile_entry_opens_new_tab() {
        let html = profile_entry("GitHub", "https://github.com/jane", "Profile").into_string();
        assert!(html.contains(r#"href="https://github.com/jane""#));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener""#));
        assert!(html.contains(">Profile</a>"));
    }

    #[test]
    fn entries_escape_values() {
        let html = profile_entry("GitHub", r#"https://x.test/"><script>"#, "<b>").into_string();
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>"));
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
        assert!(html.contains("&lt;b&gt;"));
    }
}

//! HTML rendering for delivery instructions

use crate::types::Entry;

/// Escape text for inclusion in HTML element content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the instructions fragment: an optional free-text message followed
/// by the numbered list of stops. Used for both the instructions page and
/// the email body.
pub fn render_instructions(entries: &[Entry], message: Option<&str>) -> String {
    let mut html = String::new();
    html.push_str("<div class=\"instructions\">\n");

    if let Some(message) = message {
        html.push_str("  <p class=\"message\">");
        html.push_str(&escape_html(message));
        html.push_str("</p>\n");
    }

    if entries.is_empty() {
        html.push_str("  <p class=\"empty\">No deliveries selected.</p>\n");
    } else {
        html.push_str("  <ol class=\"stops\">\n");
        for entry in entries {
            html.push_str("    <li>\n      <strong>");
            html.push_str(&escape_html(&entry.waypoint()));
            html.push_str("</strong>\n");

            let details: Vec<_> = entry
                .extras
                .iter()
                .filter(|(_, value)| value.is_truthy())
                .collect();
            if !details.is_empty() {
                html.push_str("      <ul class=\"details\">\n");
                for (key, value) in details {
                    html.push_str("        <li>");
                    html.push_str(&escape_html(key));
                    html.push_str(": ");
                    html.push_str(&escape_html(&value.to_string()));
                    html.push_str("</li>\n");
                }
                html.push_str("      </ul>\n");
            }
            html.push_str("    </li>\n");
        }
        html.push_str("  </ol>\n");
    }

    html.push_str("</div>\n");
    html
}

/// Wrap an instructions fragment in a standalone HTML page.
pub fn render_page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape_html(title),
        body
    )
}

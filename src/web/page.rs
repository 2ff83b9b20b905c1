//! HTML Page Rendering
//!
//! Builds the page reflecting a request's target and headers.

use std::borrow::Cow;

use axum::http::HeaderMap;

/// Escapes text for use in HTML element content and attribute values.
pub fn escape_html(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }

    let mut escaped = String::with_capacity(input.len() + 16);
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Renders one `<li>` per header value.
///
/// Names are listed in the order they first arrived. All values of a
/// repeated name are listed together at that name's first position.
pub fn render_header_items(headers: &HeaderMap) -> String {
    let mut items = String::new();
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes());
        items.push_str(&format!(
            "<li><strong>{}:</strong> {}</li>",
            escape_html(name.as_str()),
            escape_html(&value)
        ));
    }
    items
}

/// Renders the full page for a request.
pub fn render_page(target: &str, headers: &HeaderMap) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Mock Web Server</title>
    <style>
        body {{ font-family: Arial, sans-serif; margin: 40px; line-height: 1.6; }}
        h1 {{ color: #333; }}
        .info {{ background-color: #f0f0f0; padding: 20px; border-radius: 5px; }}
    </style>
</head>
<body>
    <h1>Mock Web Server</h1>
    <div class="info">
        <p>Path requested: <strong>{}</strong></p>
        <p>Headers received:</p>
        <ul>
            {}
        </ul>
    </div>
</body>
</html>
"#,
        escape_html(target),
        render_header_items(headers)
    )
}

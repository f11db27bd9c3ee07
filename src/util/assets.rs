use std::{borrow::Cow, sync::OnceLock};

use rust_embed::RustEmbed;

/// Embed the entire `assets/` directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static FAVICON_DATA_URI: OnceLock<String> = OnceLock::new();

pub fn main_css() -> &'static str {
    MAIN_CSS.get_or_init(|| load_text("main.css")).as_str()
}

pub fn favicon_data_uri() -> &'static str {
    FAVICON_DATA_URI
        .get_or_init(|| svg_data_uri(&load_text("favicon.svg")))
        .as_str()
}

/// Missing or non-UTF-8 assets degrade to an empty string.
fn load_text(name: &str) -> String {
    let Some(file) = EmbeddedAssets::get(name) else {
        tracing::warn!("embedded asset {name} is missing");
        return String::new();
    };
    match file.data {
        Cow::Borrowed(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        Cow::Owned(bytes) => String::from_utf8(bytes)
            .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned()),
    }
}

/// Inline SVG as a data URI, escaping only what breaks the URI.
fn svg_data_uri(svg: &str) -> String {
    let mut encoded = String::with_capacity(svg.len() + 32);
    for ch in svg.trim().chars() {
        match ch {
            '"' => encoded.push('\''),
            '%' => encoded.push_str("%25"),
            '#' => encoded.push_str("%23"),
            '<' => encoded.push_str("%3C"),
            '>' => encoded.push_str("%3E"),
            '\n' | '\r' => encoded.push(' '),
            other => encoded.push(other),
        }
    }
    format!("data:image/svg+xml;charset=utf-8,{encoded}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_uri_escapes_markup() {
        let uri = svg_data_uri("<svg fill=\"#0a0\">\n</svg>");
        assert_eq!(
            uri,
            "data:image/svg+xml;charset=utf-8,%3Csvg fill='%230a0'%3E %3C/svg%3E"
        );
    }

    #[test]
    fn embedded_stylesheet_is_present() {
        assert!(main_css().contains(".winner-card"));
    }
}

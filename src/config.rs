use serde::{Deserialize, Serialize};

pub const DEFAULT_JS_CDN: &str = "https://cdn.redoc.ly/redoc/latest/bundles/redoc.standalone.js";
pub const DEFAULT_CSS_CDN: &str = "https://fonts.googleapis.com/css?family=Montserrat:300,400,700|Roboto:300,400,700";
pub const DEFAULT_THEME: &str = "{}";

/// The `x-logo` vendor extension understood by Redoc.
///
/// Serialized into `info.x-logo` of the served document with Redoc's camelCase keys.
/// Every field is written, empty ones as `""`.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XLogo {
    #[serde(default)]
    pub url: String,
    #[serde(default, rename(serialize = "backgroundColor"), alias = "backgroundColor")]
    pub background_color: String,
    #[serde(default, rename(serialize = "altText"), alias = "altText")]
    pub alt_text: String,
}

/// Rendering options for the docs page.
///
/// Empty strings fall back to the defaults. `theme` is written into a single-quoted
/// HTML attribute without escaping; it must not contain `'`.
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct RedocConfig {
    #[serde(default)]
    pub logo: Option<XLogo>,
    /// See <https://github.com/Redocly/redoc#redoc-theme-object>.
    #[serde(default)]
    pub theme: String,
    #[serde(default)]
    pub js_cdn: String,
    #[serde(default)]
    pub css_cdn: String,
}

impl RedocConfig {
    pub fn with_logo(mut self, logo: XLogo) -> Self {
        self.logo = Some(logo);
        self
    }
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }
    pub fn with_js_cdn(mut self, url: impl Into<String>) -> Self {
        self.js_cdn = url.into();
        self
    }
    pub fn with_css_cdn(mut self, url: impl Into<String>) -> Self {
        self.css_cdn = url.into();
        self
    }

    pub fn js_cdn(&self) -> &str {
        or_default(&self.js_cdn, DEFAULT_JS_CDN)
    }
    pub fn css_cdn(&self) -> &str {
        or_default(&self.css_cdn, DEFAULT_CSS_CDN)
    }
    pub fn theme(&self) -> &str {
        or_default(&self.theme, DEFAULT_THEME)
    }
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() {
        default
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let config = RedocConfig::default();
        assert_eq!(config.js_cdn(), DEFAULT_JS_CDN);
        assert_eq!(config.css_cdn(), DEFAULT_CSS_CDN);
        assert_eq!(config.theme(), "{}");
        assert!(config.logo.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = RedocConfig::default()
            .with_js_cdn("https://cdn.example.com/redoc.js")
            .with_css_cdn("https://cdn.example.com/redoc.css")
            .with_theme(r#"{"spacing":{"unit":4}}"#);
        assert_eq!(config.js_cdn(), "https://cdn.example.com/redoc.js");
        assert_eq!(config.css_cdn(), "https://cdn.example.com/redoc.css");
        assert_eq!(config.theme(), r#"{"spacing":{"unit":4}}"#);
    }

    #[test]
    fn test_logo_serializes_camel_case() {
        let logo = XLogo { url: "https://x/y.png".into(), background_color: "#fff".into(), alt_text: String::new() };
        let value = serde_json::to_value(&logo).unwrap();
        assert_eq!(value, json!({"url": "https://x/y.png", "backgroundColor": "#fff", "altText": ""}));
    }

    #[test]
    fn test_logo_accepts_both_key_styles() {
        let snake: XLogo = serde_json::from_value(json!({"url": "u", "background_color": "c"})).unwrap();
        let camel: XLogo = serde_json::from_value(json!({"url": "u", "backgroundColor": "c"})).unwrap();
        assert_eq!(snake, camel);
        assert_eq!(snake.alt_text, "");
    }
}

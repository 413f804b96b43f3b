use serde::Serialize;
use tera::Tera;

use crate::error::DocsError;

/// Registered without an `.html` suffix so tera leaves every value unescaped.
pub const REDOC_INDEX_NAME: &str = "redoc_index";

pub const REDOC_INDEX: &str = r#"
<!DOCTYPE html>
<html>
  <head>
    <title>Redoc</title>
    <!-- needed for adaptive design -->
    <meta charset="utf-8"/>
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <link href="{{ css_cdn }}" rel="stylesheet">

    <!--
    Redoc doesn't change outer page styles
    -->
    <style>
      body {
        margin: 0;
        padding: 0;
      }
    </style>
  </head>
  <body>
    <redoc spec-url='{{ url }}' theme='{{ theme }}'></redoc>
    <script src="{{ js_cdn }}"> </script>
  </body>
</html>
"#;

/// Values substituted into the index template. Inserted verbatim, nothing is escaped.
#[derive(Debug, Clone, Serialize)]
pub struct IndexValues<'a> {
    pub url: &'a str,
    pub js_cdn: &'a str,
    pub css_cdn: &'a str,
    pub theme: &'a str,
}

#[derive(Debug, Clone)]
pub struct IndexTemplate(Tera);

impl IndexTemplate {
    pub fn new() -> Result<Self, DocsError> {
        Self::parse(REDOC_INDEX)
    }

    pub fn parse(source: &str) -> Result<Self, DocsError> {
        let mut tera = Tera::default();
        tera.add_raw_template(REDOC_INDEX_NAME, source)?;
        Ok(Self(tera))
    }

    pub fn render(&self, values: &IndexValues<'_>) -> Result<String, DocsError> {
        let context = tera::Context::from_serialize(values)?;
        Ok(self.0.render(REDOC_INDEX_NAME, &context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values() -> IndexValues<'static> {
        IndexValues { url: "doc.json", js_cdn: "https://js", css_cdn: "https://css", theme: "{}" }
    }

    #[test]
    fn test_render_index() {
        let html = IndexTemplate::new().unwrap().render(&values()).unwrap();
        assert!(html.contains("<redoc spec-url='doc.json' theme='{}'></redoc>"));
        assert!(html.contains(r#"<script src="https://js"> </script>"#));
        assert!(html.contains(r#"<link href="https://css" rel="stylesheet">"#));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn test_theme_is_not_escaped() {
        let theme = r##"{"colors":{"primary":{"main":"#dd5522"}},"x":"a&b<c>"}"##;
        let html = IndexTemplate::new().unwrap().render(&IndexValues { theme, ..values() }).unwrap();
        assert!(html.contains(&format!("theme='{theme}'")));
    }

    #[test]
    fn test_text_only() {
        let template = IndexTemplate::parse("<p>plain</p>").unwrap();
        assert_eq!(template.render(&values()).unwrap(), "<p>plain</p>");
    }

    #[test]
    fn test_unknown_variable() {
        let template = IndexTemplate::parse("<a>{{ title }}</a>").unwrap();
        assert!(matches!(template.render(&values()), Err(DocsError::Template(_))));
    }

    #[test]
    fn test_unterminated_tag() {
        assert!(matches!(IndexTemplate::parse("ok {{ url"), Err(DocsError::Template(_))));
    }
}

use std::path::Path;

use anyhow::Context;
use config::{Environment, File, FileFormat};

use crate::serve::ServeDocsConfig;

pub const ENV_PREFIX: &str = "REDOC";

/// Loads the server config from TOML files, later files overriding earlier ones, then
/// from `REDOC_*` environment variables (`__` separates nested keys).
pub fn load(paths: &[impl AsRef<Path>]) -> anyhow::Result<ServeDocsConfig> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            anyhow::Ok(builder.add_source(File::from_str(&content, FileFormat::Toml)))
        })?
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

pub fn load_str(toml: &str) -> anyhow::Result<ServeDocsConfig> {
    config::Config::builder()
        .add_source(File::from_str(toml, FileFormat::Toml))
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::XLogo;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_load_str() {
        let config = load_str(
            r##"
            url = "http://127.0.0.1:8080/docs"
            spec = "openapi.json"

            [redoc]
            theme = '{"sidebar":{"width":"300px"}}'
            js_cdn = "https://cdn.example.com/redoc.js"

            [redoc.logo]
            url = "https://x/y.png"
            background_color = "#FFFFFF"
            "##,
        )
        .unwrap();

        assert_eq!(config.url.as_str(), "http://127.0.0.1:8080/docs");
        assert_eq!(config.spec.to_str(), Some("openapi.json"));
        let redoc = config.redoc.unwrap();
        assert_eq!(redoc.theme(), r#"{"sidebar":{"width":"300px"}}"#);
        assert_eq!(redoc.js_cdn(), "https://cdn.example.com/redoc.js");
        assert_eq!(redoc.css_cdn(), crate::config::DEFAULT_CSS_CDN);
        assert_eq!(
            redoc.logo,
            Some(XLogo { url: "https://x/y.png".into(), background_color: "#FFFFFF".into(), alt_text: String::new() })
        );
    }

    #[test]
    fn test_load_str_without_redoc() {
        let config = load_str("url = \"http://0.0.0.0:3000/\"\nspec = \"doc.json\"").unwrap();
        assert!(config.redoc.is_none());
        assert_eq!(config.url.path(), "/");
    }

    #[test]
    fn test_load_str_missing_spec() {
        assert!(load_str("url = \"http://0.0.0.0:3000/\"").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load(&["/no/such/redoc.toml"]).unwrap_err();
        assert!(err.to_string().contains("/no/such/redoc.toml"));
    }
}

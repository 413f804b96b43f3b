use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::{config::XLogo, error::DocsError};

/// The OpenAPI document served at `doc.json`, loaded once and never touched again.
#[derive(Debug, Clone)]
pub struct SpecDocument {
    text: String,
}

impl SpecDocument {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DocsError> {
        let path = path.as_ref();
        let text =
            std::fs::read_to_string(path).map_err(|source| DocsError::ReadSpec { path: path.to_path_buf(), source })?;
        Ok(Self { text })
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Sets `info.x-logo`, replacing any existing value.
    ///
    /// The document is left as loaded when it is not valid JSON, has no object-valued
    /// `info` or cannot be serialized again. Returns whether the logo was applied.
    pub fn apply_logo(&mut self, logo: &XLogo) -> bool {
        match patch_logo(&self.text, logo) {
            Some(text) => {
                self.text = text;
                true
            }
            None => false,
        }
    }
}

fn patch_logo(text: &str, logo: &XLogo) -> Option<String> {
    let mut doc: Value = match serde_json::from_str(text) {
        Ok(doc) => doc,
        Err(err) => {
            debug!("Not applying x-logo, spec is not valid JSON: {}", err);
            return None;
        }
    };
    let Some(info) = doc.get_mut("info").and_then(Value::as_object_mut) else {
        debug!("Not applying x-logo, spec has no info object");
        return None;
    };
    let logo = serde_json::to_value(logo).ok()?;
    info.insert("x-logo".to_string(), logo);
    serde_json::to_string(&doc).map_err(|err| debug!("Not applying x-logo: {}", err)).ok()
}

use std::{
    path::Path,
    sync::{Arc, OnceLock},
};

use axum::{
    body::Bytes,
    extract::{MatchedPath, RawPathParams, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tracing::*;

use crate::{
    config::{RedocConfig, XLogo},
    document::SpecDocument,
    error::DocsError,
    prefix,
    template::{IndexTemplate, IndexValues},
};

pub const DOC_URL: &str = "doc.json";
pub const INDEX: &str = "index.html";

const HTML: &str = "text/html; charset=utf-8";
const JSON: &str = "application/json";

/// Serves a Redoc page for one OpenAPI document under one mount point.
///
/// Clones share the document, the rendered page and the mount prefix. The prefix is
/// computed from the first request that reaches the handler and kept from then on.
#[derive(Debug, Clone)]
pub struct RedocHandler {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    document: Bytes,
    index: Bytes,
    logo_applied: bool,
    prefix: OnceLock<String>,
}

impl RedocHandler {
    /// Loads the document at `path` and renders the index page.
    ///
    /// Fails if the file cannot be read. When the config carries a logo or a theme,
    /// `info.x-logo` is written if the document allows it; otherwise the file is served
    /// as it is.
    pub fn new(path: impl AsRef<Path>, config: Option<RedocConfig>) -> Result<Self, DocsError> {
        let path = path.as_ref();
        let document = SpecDocument::load(path)?;
        let handler = Self::from_document(document, config)?;
        info!(
            logo_applied = handler.inner.logo_applied,
            "Loaded spec document {} ({} bytes)",
            path.display(),
            handler.inner.document.len()
        );
        Ok(handler)
    }

    pub fn from_document(mut document: SpecDocument, config: Option<RedocConfig>) -> Result<Self, DocsError> {
        let template = IndexTemplate::new()?;
        let config = config.unwrap_or_default();

        // A theme without a logo still writes an empty x-logo.
        let logo_applied = match (&config.logo, config.theme.is_empty()) {
            (Some(logo), _) => document.apply_logo(logo),
            (None, false) => document.apply_logo(&XLogo::default()),
            (None, true) => false,
        };
        let index = template.render(&IndexValues {
            url: DOC_URL,
            js_cdn: config.js_cdn(),
            css_cdn: config.css_cdn(),
            theme: config.theme(),
        })?;

        let inner = Inner {
            document: Bytes::from(document.as_str().to_owned()),
            index: Bytes::from(index),
            logo_applied,
            prefix: OnceLock::new(),
        };
        Ok(Self { inner: Arc::new(inner) })
    }

    /// The memoized mount prefix, if a request has been served yet.
    pub fn prefix(&self) -> Option<&str> {
        self.inner.prefix.get().map(String::as_str)
    }

    /// Whether `info.x-logo` was written into the served document.
    pub fn logo_applied(&self) -> bool {
        self.inner.logo_applied
    }

    pub fn document(&self) -> &[u8] {
        &self.inner.document
    }

    fn mount_prefix(&self, pattern: Option<&str>, headers: &HeaderMap) -> &str {
        self.inner.prefix.get_or_init(|| {
            let prefix = prefix::mount_prefix(pattern.unwrap_or_default(), headers);
            debug!("Redoc mounted at {:?}", prefix);
            prefix
        })
    }

    /// Answers a request given the path remainder after the mount wildcard and the
    /// route pattern it matched.
    pub fn respond(&self, remainder: &str, pattern: Option<&str>, headers: &HeaderMap) -> Response {
        let mount = self.mount_prefix(pattern, headers);
        trace!(remainder, "Redoc request");

        match remainder {
            INDEX => ([(header::CONTENT_TYPE, HTML)], self.inner.index.clone()).into_response(),
            DOC_URL => ([(header::CONTENT_TYPE, JSON)], self.inner.document.clone()).into_response(),
            "" | "/" => {
                let location = prefix::join(mount, INDEX);
                (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response()
            }
            _ => StatusCode::NOT_FOUND.into_response(),
        }
    }
}

/// Returns the value captured by the wildcard of `pattern`, or `""`.
fn wildcard<'a>(pattern: Option<&str>, params: Option<&'a RawPathParams>) -> &'a str {
    let (Some(pattern), Some(params)) = (pattern, params) else {
        return "";
    };
    let Some((_, name)) = pattern.split_once('*') else {
        return "";
    };
    params.iter().find(|(key, _)| *key == name).map(|(_, value)| value).unwrap_or_default()
}

pub async fn serve_docs(
    State(handler): State<RedocHandler>,
    matched: Option<MatchedPath>,
    params: Option<RawPathParams>,
    headers: HeaderMap,
) -> Response {
    let pattern = matched.as_ref().map(MatchedPath::as_str);
    let remainder = wildcard(pattern, params.as_ref());
    handler.respond(remainder, pattern, &headers)
}

/// Routes for `mount`, `mount/` and everything below it, ready to be merged into an
/// application router.
pub fn docs_routes<S>(mount: &str, handler: RedocHandler) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let base = mount.trim_matches('/');
    let router = if base.is_empty() {
        Router::new().route("/", get(serve_docs)).route("/*rest", get(serve_docs))
    } else {
        Router::new()
            .route(&format!("/{base}"), get(serve_docs))
            .route(&format!("/{base}/"), get(serve_docs))
            .route(&format!("/{base}/*rest"), get(serve_docs))
    };

    router.with_state(handler)
}

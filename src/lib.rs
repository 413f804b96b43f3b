//! Redoc documentation pages for OpenAPI documents, mountable anywhere in an axum application.
//!
//! ```no_run
//! use redoc_router::{docs::{docs_routes, RedocHandler}, config::RedocConfig};
//!
//! # fn app() -> Result<axum::Router, redoc_router::error::DocsError> {
//! let handler = RedocHandler::new("openapi.json", Some(RedocConfig::default().with_theme("{}")))?;
//! let docs: axum::Router = docs_routes("/docs", handler);
//! let app = axum::Router::new().merge(docs);
//! # Ok(app)
//! # }
//! ```

pub mod config;
pub mod docs;
pub mod document;
pub mod error;
pub mod prefix;
pub mod serve;
pub mod settings;
pub mod template;

pub use config::{RedocConfig, XLogo};
pub use docs::{docs_routes, serve_docs, RedocHandler};
pub use error::DocsError;

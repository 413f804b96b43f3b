use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while setting up a docs handler.
///
/// None of these can happen once a [`RedocHandler`](crate::docs::RedocHandler) exists;
/// request-time outcomes are plain responses.
#[derive(Debug, Error)]
pub enum DocsError {
    #[error("Failed to read spec document at {}", path.display())]
    ReadSpec {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to render the index template: {0}")]
    Template(#[from] tera::Error),
}

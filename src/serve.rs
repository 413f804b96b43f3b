use crate::config::RedocConfig;
use crate::docs::{docs_routes, RedocHandler, INDEX};
use crate::prefix::join;
use anyhow::{ensure, Context, Result};
use axum::Router;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::*;
use url::Url;

#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServeDocsConfig {
    /// Listen address; its path is where the docs are mounted.
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub url: Url,
    /// The OpenAPI JSON document to serve.
    pub spec: PathBuf,
    #[serde(default)]
    pub redoc: Option<RedocConfig>,
}

#[derive(Debug, Clone)]
pub struct ServeDocs {
    url: Url,
    handler: RedocHandler,
}
impl ServeDocs {
    pub fn new(config: ServeDocsConfig) -> Result<Self> {
        ensure!(config.url.port().is_some(), "Port is not specified in {}", config.url);
        let handler = RedocHandler::new(&config.spec, config.redoc)
            .with_context(|| format!("failed to set up docs for {}", config.spec.display()))?;
        Ok(Self { url: config.url, handler })
    }

    pub fn router(&self) -> Router {
        docs_routes(self.url.path(), self.handler.clone())
            .layer(CorsLayer::permissive())
            .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
    }

    pub async fn serve(self) -> Result<()> {
        let addr = self.url.authority();
        let router = self.router();
        let listener = TcpListener::bind(addr).await.with_context(|| format!("failed to bind to {}", addr))?;

        let mut docs_url = self.url.clone();
        docs_url.set_path(&join(self.url.path(), INDEX));
        info!("Starting Redoc server at {}", self.url);
        info!("API docs are accessible at {}", docs_url);
        axum::serve(listener, router).await?;
        Ok(())
    }
}

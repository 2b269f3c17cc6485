// crates/jsglue/src/assets.rs — the generated script endpoint and its <script> tag
use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use jsglue_router::{Rule, UrlMap};
use maud::{Markup, Render};
use once_cell::sync::OnceCell;

use crate::args::BuildArgs;
use crate::builder::UrlBuilder;
use crate::config::JsGlueConfig;
use crate::error::{ConfigError, UrlError};
use crate::location::Location;
use crate::script::{generate_js, JS_CONTENT_TYPE};
use crate::table::{get_routes, RouteTable};

/// Endpoint name the script route is registered under.
pub const SERVE_JS_ENDPOINT: &str = "serve_js";

/// Route registry plus settings, shared by the script handler and templates
///
/// Cheap to clone. The registry is frozen once [`JsGlue::init_app`] returns.
#[derive(Debug, Clone)]
pub struct JsGlue {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    config: JsGlueConfig,
    url_map: UrlMap,
    script: OnceCell<String>,
}

impl JsGlue {
    /// Records the script route under [`SERVE_JS_ENDPOINT`] and freezes the map
    ///
    /// ```
    /// use jsglue::{JsGlue, JsGlueConfig};
    /// use jsglue_router::UrlMap;
    ///
    /// let map = UrlMap::new().with_rule("index", "/");
    /// let glue = JsGlue::init_app(map, JsGlueConfig::default()).unwrap();
    /// assert!(glue.url_map().contains("serve_js"));
    /// ```
    pub fn init_app(mut url_map: UrlMap, config: JsGlueConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        url_map.add_rule(Rule::new(SERVE_JS_ENDPOINT, config.js_path.clone()));

        tracing::debug!(
            js_path = %config.js_path,
            namespace = %config.namespace,
            rules = url_map.len(),
            "jsglue initialized"
        );

        Ok(Self {
            inner: Arc::new(Inner {
                config,
                url_map,
                script: OnceCell::new(),
            }),
        })
    }

    pub fn config(&self) -> &JsGlueConfig {
        &self.inner.config
    }

    pub fn url_map(&self) -> &UrlMap {
        &self.inner.url_map
    }

    /// Fresh route table from the registry
    pub fn routes(&self) -> RouteTable {
        get_routes(&self.inner.url_map)
    }

    /// The script body, cached when `cache_script` is set
    pub fn generate_js(&self) -> Result<String, serde_json::Error> {
        let config = &self.inner.config;
        let render = || generate_js(&self.routes(), &config.namespace, config.encoding());

        if config.cache_script {
            self.inner.script.get_or_try_init(render).cloned()
        } else {
            render()
        }
    }

    /// Script response with the JavaScript content type
    pub fn serve_js(&self) -> Response {
        match self.generate_js() {
            Ok(body) => (StatusCode::OK, [(header::CONTENT_TYPE, JS_CONTENT_TYPE)], body).into_response(),
            Err(err) => {
                tracing::error!("Failed to generate jsglue script: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "failed to generate script").into_response()
            }
        }
    }

    /// Router serving the script at the configured path
    ///
    /// Merge into the application router:
    /// ```rust
    /// use axum::Router;
    /// use jsglue::{JsGlue, JsGlueConfig};
    /// use jsglue_router::UrlMap;
    ///
    /// let glue = JsGlue::init_app(UrlMap::new(), JsGlueConfig::default()).unwrap();
    /// let app: Router = Router::new().merge(glue.router::<()>());
    /// ```
    pub fn router<S>(&self) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        let glue = self.clone();
        Router::new().route(
            &self.inner.config.js_path,
            get(move || {
                let glue = glue.clone();
                async move { glue.serve_js() }
            }),
        )
    }

    /// Relative URL for `endpoint`, built exactly as the browser would
    pub fn url_for(&self, endpoint: &str, args: &BuildArgs) -> Result<String, UrlError> {
        UrlBuilder::new(&self.routes())
            .with_encoding(self.inner.config.encoding())
            .build(endpoint, args)
    }

    /// Like [`JsGlue::url_for`], resolving `_external` against `location`
    pub fn url_for_at(&self, endpoint: &str, args: &BuildArgs, location: &Location) -> Result<String, UrlError> {
        UrlBuilder::new(&self.routes())
            .with_location(location)
            .with_encoding(self.inner.config.encoding())
            .build(endpoint, args)
    }

    /// `<script>` tag loading the generated script
    ///
    /// The `src` is obtained by reversing [`SERVE_JS_ENDPOINT`].
    pub fn include(&self) -> Markup {
        let src = self
            .url_for(SERVE_JS_ENDPOINT, &BuildArgs::default())
            .unwrap_or_else(|e| {
                tracing::warn!("{}", e);
                self.inner.config.js_path.clone()
            });
        maud::html! {
            script src=(src) type="text/javascript" {}
        }
    }
}

/// Renders as [`JsGlue::include`], so `(glue)` works inside `html!`
impl Render for JsGlue {
    fn render(&self) -> Markup {
        self.include()
    }
}

/// Axum handler for routers whose state provides a [`JsGlue`]
///
/// ```rust
/// use axum::{routing::get, Router};
/// use jsglue::{assets, JsGlue, JsGlueConfig};
/// use jsglue_router::UrlMap;
///
/// let glue = JsGlue::init_app(UrlMap::new(), JsGlueConfig::default()).unwrap();
/// let app: Router = Router::new()
///     .route("/jsglue.js", get(assets::serve_js))
///     .with_state(glue);
/// ```
pub async fn serve_js(State(glue): State<JsGlue>) -> Response {
    glue.serve_js()
}

mod settings;

use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    routing::get,
    Router,
};
use jsglue::{BuildArgs, JsGlue, Location};
use jsglue_router::UrlMap;
use maud::{html, Markup, DOCTYPE};
use std::collections::BTreeMap;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::settings::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,jsglue=debug")),
        )
        .init();

    let settings = Settings::load_from(jsglue::config::CONFIG_FILE)?;

    let mut url_map = UrlMap::new();
    let app = Router::new();
    let app = url_map.register(app, "index", "/", get(index_handler));
    let app = url_map.register(app, "about_page", "/about", get(about_handler));
    let app = url_map.register(app, "show_item", "/item/<int:id>", get(show_item_handler));
    let app = url_map.register(
        app,
        "user_post",
        "/user/<name>/post/<int:post_id>",
        get(user_post_handler),
    );

    let glue = JsGlue::init_app(url_map, settings.jsglue.clone())?;
    for rule in glue.url_map().rules() {
        info!("  {} -> {}", rule.endpoint(), rule.rule());
    }

    let app = app
        .merge(glue.router::<JsGlue>())
        .with_state(glue)
        .layer(TraceLayer::new_for_http());

    let addr = settings.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server running at http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

/// Index page: server-built links next to the same links built in the browser
async fn index_handler(State(glue): State<JsGlue>, headers: HeaderMap) -> Markup {
    let location = Location::from_headers(&headers).unwrap_or_else(|| Location::new("http", "localhost"));
    let links = [
        ("show_item", BuildArgs::new().arg("id", 5).arg("highlight", true)),
        ("user_post", BuildArgs::new().arg("name", "ada").arg("post_id", 1).anchor("comments")),
        ("about_page", BuildArgs::new().external()),
    ];

    let namespace = glue.config().namespace.clone();
    let client_script = format!(
        "document.getElementById('client').textContent = [\
           {ns}.url_for('show_item', {{id: 5, highlight: true}}),\
           {ns}.url_for('user_post', {{name: 'ada', post_id: 1, _anchor: 'comments'}}),\
           {ns}.url_for('about_page', {{_external: true}})\
         ].join('\\n');",
        ns = namespace
    );

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                title { "jsglue demo" }
                (glue)
            }
            body {
                h1 { "jsglue demo" }
                h2 { "Built on the server" }
                ul {
                    @for (endpoint, args) in &links {
                        @match glue.url_for_at(endpoint, args, &location) {
                            Ok(url) => { li { a href=(url) { (url) } } }
                            Err(e) => { li { "error: " (e.to_string()) } }
                        }
                    }
                }
                h2 { "Built in the browser" }
                pre id="client" {}
                script { (maud::PreEscaped(client_script)) }
            }
        }
    }
}

async fn about_handler() -> &'static str {
    "About jsglue"
}

async fn show_item_handler(Path(id): Path<u64>, Query(query): Query<BTreeMap<String, String>>) -> String {
    format!("Item {} with {:?}", id, query)
}

async fn user_post_handler(Path((name, post_id)): Path<(String, u64)>) -> String {
    format!("Post {} by {}", post_id, name)
}

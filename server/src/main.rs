use anyhow::Context as _;
use leptos::prelude::*;

use app::context::Context;
use app::store;

mod api;

const LEPTOS_SERVER_FN_URL_PATH: &str = "/sfn/{*fn_name}";
const CONTENT_PATH_VAR: &str = "FOLIO_CONTENT_PATH";
const DEFAULT_CONTENT_PATH: &str = "content";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use leptos_axum::{generate_route_list, LeptosRoutes};

    env_logger::init();

    let conf = get_configuration(None).context("Could not load the Leptos configuration")?;
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    let content_path = std::env::var_os(CONTENT_PATH_VAR)
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|| std::path::PathBuf::from(DEFAULT_CONTENT_PATH));
    log::info!("serving content from {:?}", content_path);
    let ctx = Context {
        leptos_options: leptos_options.clone(),
        store: store::Store::new(content_path, leptos_options.env == Env::PROD),
    };
    let routes = generate_route_list(app::App);
    let ctx_fn = {
        let ctx = ctx.clone();
        move || provide_context(ctx.store.clone())
    };
    let app_fn = {
        let ctx = ctx.clone();
        move || app::shell(ctx.leptos_options.clone())
    };

    let leptos_server_fn_method_router =
        axum::routing::get(leptos_server_fn_axum_handler).post(leptos_server_fn_axum_handler);
    let app = axum::Router::new()
        .route(LEPTOS_SERVER_FN_URL_PATH, leptos_server_fn_method_router)
        .nest(api::URL_PATH, api::router())
        .leptos_routes_with_context(&ctx, routes, ctx_fn, app_fn)
        .fallback(leptos_axum::file_and_error_handler::<Context, _>(app::shell))
        .with_state(ctx);

    log::info!("listening in {:?} on http://{}", &leptos_options.env, &addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Could not listen on {}", addr))?;
    axum::serve(listener, app.into_make_service())
        .await
        .context("The server stopped")?;
    Ok(())
}

async fn leptos_server_fn_axum_handler(
    axum::extract::State(ctx): axum::extract::State<Context>,
    request: axum::extract::Request<axum::body::Body>,
) -> impl axum::response::IntoResponse {
    let additional_context = move || {
        provide_context(ctx.store.clone());
    };
    leptos_axum::handle_server_fns_with_context(additional_context, request).await
}

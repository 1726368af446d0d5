use std::{sync::Arc, time::Instant};

use axum::{
    body::Body,
    http::Request,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};

use crate::handlers::{suggest, terms, Ctx};

/// Initialize HTTP routes.
pub fn init_handlers(ctx: Arc<Ctx>) -> Router {
    Router::new()
        .route("/terms", post(terms::register))
        .route("/terms/{term}", get(terms::get).delete(terms::delete))
        .route("/autocomplete", get(suggest::autocomplete))
        .route("/stats", get(suggest::get_stats))
        .layer(middleware::from_fn(log_middleware))
        .with_state(ctx)
}

/// Log every request with its response status and duration.
async fn log_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let resp = next.run(request).await;

    log::debug!(
        "{} {} {} {:.2?}",
        method,
        uri,
        resp.status().as_u16(),
        start.elapsed()
    );
    resp
}

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use super::{ApiErr, Ctx, Result};
use crate::{
    autocomplete::{Deleted, Registered, Suggestion},
    models::RegisterReq,
};

/// Register one occurrence of a term.
pub async fn register(
    State(ctx): State<Arc<Ctx>>,
    payload: std::result::Result<Json<RegisterReq>, JsonRejection>,
) -> Result<Json<Registered>> {
    let Json(req) = payload?;
    let out = ctx.ac.register(&req.term)?;
    Ok(Json(out))
}

/// Remove one occurrence of a term. Unknown terms are not an error.
pub async fn delete(State(ctx): State<Arc<Ctx>>, Path(term): Path<String>) -> Json<Deleted> {
    Json(ctx.ac.delete(&term))
}

/// Get a term by its exact (case-insensitive) value.
pub async fn get(
    State(ctx): State<Arc<Ctx>>,
    Path(term): Path<String>,
) -> Result<Json<Suggestion>> {
    ctx.ac
        .get(&term)
        .map(Json)
        .ok_or_else(|| ApiErr::new("term not found", StatusCode::NOT_FOUND))
}

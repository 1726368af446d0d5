use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use super::Ctx;
use crate::{
    autocomplete::Stats,
    models::{AutocompleteQuery, SuggestResults},
};

/// Ranked suggestions for a prefix.
pub async fn autocomplete(
    State(ctx): State<Arc<Ctx>>,
    Query(q): Query<AutocompleteQuery>,
) -> Json<SuggestResults> {
    // An empty ?boost= is treated as no boost.
    let boost = q.boost.as_deref().filter(|b| !b.is_empty());

    let suggestions = ctx.ac.autocomplete(&q.prefix, boost, q.limit);
    Json(SuggestResults { suggestions })
}

/// Term and trie node counts.
pub async fn get_stats(State(ctx): State<Arc<Ctx>>) -> Json<Stats> {
    Json(ctx.ac.stats())
}

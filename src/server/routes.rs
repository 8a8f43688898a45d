use std::sync::Arc;

use axum::{
    extract::{RawQuery, State},
    http::{StatusCode, Uri},
    response::Html,
};
use url::form_urlencoded;

use super::state::AppState;

pub const SEARCH_PARAM: &str = "chemical";

/// First value of `key` in a raw query string. Later repeats are ignored.
pub fn first_query_value(raw_query: Option<&str>, key: &str) -> Option<String> {
    form_urlencoded::parse(raw_query?.as_bytes())
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.into_owned())
}

/// `GET /`. Always answers 200; lookup failures are shown inline.
pub async fn index_handler(
    State(state): State<Arc<AppState>>,
    RawQuery(raw_query): RawQuery,
) -> Html<String> {
    let chemical = first_query_value(raw_query.as_deref(), SEARCH_PARAM);

    let page = state.search.handle_search(chemical.as_deref()).await;
    Html(state.renderer.render_search(&page))
}

pub async fn about_handler(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.renderer.render_about())
}

pub async fn login_handler(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.renderer.render_login())
}

pub async fn not_found_handler(
    State(state): State<Arc<AppState>>,
    uri: Uri,
) -> (StatusCode, Html<String>) {
    (
        StatusCode::NOT_FOUND,
        Html(state.renderer.render_not_found(uri.path())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_value_wins_for_repeated_key() {
        let value = first_query_value(Some("chemical=linalool&chemical=vanillin"), SEARCH_PARAM);
        assert_eq!(value.as_deref(), Some("linalool"));
    }

    #[test]
    fn test_value_is_form_decoded() {
        let value = first_query_value(Some("page=2&chemical=rose+oxide%2Fcis"), SEARCH_PARAM);
        assert_eq!(value.as_deref(), Some("rose oxide/cis"));
    }

    #[test]
    fn test_missing_key_or_query_is_none() {
        assert_eq!(first_query_value(None, SEARCH_PARAM), None);
        assert_eq!(first_query_value(Some(""), SEARCH_PARAM), None);
        assert_eq!(first_query_value(Some("chem=linalool"), SEARCH_PARAM), None);
    }

    #[test]
    fn test_invalid_percent_escape_is_kept_literally() {
        let value = first_query_value(Some("chemical=%ZZlinalool"), SEARCH_PARAM);
        assert_eq!(value.as_deref(), Some("%ZZlinalool"));
    }
}

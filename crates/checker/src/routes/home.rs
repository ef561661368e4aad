use std::sync::Arc;

use axum::{extract::State, response::Html, Form};
use serde::Deserialize;

use crate::{templates::home_page, AppState};

#[derive(Debug, Deserialize)]
pub struct CityForm {
    pub city: Option<String>,
}

/// Handler for the search form (GET /)
pub async fn index_handler() -> Html<String> {
    Html(home_page(None, None).into_string())
}

/// Handler for a form submission (POST /)
///
/// A missing city field is treated as an empty name; the geocoders simply
/// find nothing for it.
pub async fn lookup_handler(
    State(state): State<Arc<AppState>>,
    Form(form): Form<CityForm>,
) -> Html<String> {
    let city = form.city.unwrap_or_default();

    let page = match state.service.report_for(&city).await {
        Ok(report) => home_page(Some(&report), None),
        Err(error) => home_page(None, Some(&error)),
    };

    Html(page.into_string())
}

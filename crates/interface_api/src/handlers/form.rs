//! HTML claim form handlers

use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    Form,
};
use tracing::warn;

use domain_claims::ClaimInput;

use crate::AppState;
use crate::dto::risk::ClaimForm;
use crate::render::render_page;
use crate::report::build_report;

/// Shows the form pre-filled with default claim values
pub async fn show_form() -> Html<String> {
    let form = ClaimForm::from_input(&ClaimInput::default());
    Html(render_page(&form, None, None))
}

/// Scores a form submission and re-renders the page with the results
///
/// Invalid submissions come back as the same form, values kept, with the
/// error shown and status 422.
pub async fn submit_form(
    State(state): State<AppState>,
    Form(form): Form<ClaimForm>,
) -> (StatusCode, Html<String>) {
    let input = match form.parse().and_then(ClaimInput::try_from) {
        Ok(input) => input,
        Err(err) => {
            warn!(error = %err, "Rejected claim form submission");
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(render_page(&form, None, Some(&err.to_string()))),
            );
        }
    };

    let result = state.scorer.evaluate(&input);
    let report = build_report(&input, &result, state.config.currency);
    (StatusCode::OK, Html(render_page(&form, Some(&report), None)))
}

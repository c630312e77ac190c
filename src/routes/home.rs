use askama::Template;
use axum::response::Html;
use color_eyre::eyre::eyre;

use crate::domain::MembershipAPIError;

#[derive(Template)]
#[template(path = "form.html")]
struct FormTemplate;

#[tracing::instrument(name = "Registration form route handler", skip_all)]
pub async fn home() -> Result<Html<String>, MembershipAPIError> {
    let body = FormTemplate
        .render()
        .map_err(|e| MembershipAPIError::UnexpectedError(eyre!(e)))?;

    Ok(Html(body))
}

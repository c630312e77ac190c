use axum::{extract::State, response::Redirect, Form};
use serde::Deserialize;

use crate::{
    domain::{MembershipAPIError, Registration},
    AppState,
};

#[tracing::instrument(name = "Submit registration route handler", skip_all)]
pub async fn submit(
    State(state): State<AppState>,
    Form(request): Form<SubmitRequest>,
) -> Result<Redirect, MembershipAPIError> {
    let registration =
        Registration::new(request.name, request.email, request.phone);

    let member_id = state
        .member_store
        .write()
        .await
        .add_member(registration)
        .await
        .map_err(|e| MembershipAPIError::UnexpectedError(e.into()))?;

    Ok(Redirect::to(&format!("/payment/{}", member_id.as_ref())))
}

/// Missing form fields deserialise to empty strings rather than rejecting
/// the submission.
#[derive(Debug, PartialEq, Deserialize)]
pub struct SubmitRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

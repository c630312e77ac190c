use askama::Template;
use axum::{
    extract::{Path, State},
    response::Html,
};
use color_eyre::eyre::eyre;

use crate::{
    domain::{MemberId, MembershipAPIError},
    AppState,
};

#[derive(Template)]
#[template(path = "success.html")]
struct SuccessTemplate {
    member_id: i64,
}

/// Placeholder transition: any syntactically valid id is marked paid without
/// a gateway round-trip. Unknown ids are a store no-op and re-confirmation
/// is idempotent.
#[tracing::instrument(name = "Payment success route handler", skip_all)]
pub async fn success(
    State(state): State<AppState>,
    Path(member_id): Path<i64>,
) -> Result<Html<String>, MembershipAPIError> {
    let id = MemberId::new(member_id);

    state
        .member_store
        .write()
        .await
        .mark_paid(&id)
        .await
        .map_err(|e| MembershipAPIError::UnexpectedError(e.into()))?;

    let body = SuccessTemplate { member_id }
        .render()
        .map_err(|e| MembershipAPIError::UnexpectedError(eyre!(e)))?;

    Ok(Html(body))
}

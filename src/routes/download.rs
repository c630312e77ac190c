use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
};

use crate::{
    domain::{MemberId, MemberStoreError, MembershipAPIError},
    AppState,
};

#[tracing::instrument(name = "Card download route handler", skip_all)]
pub async fn download(
    State(state): State<AppState>,
    Path(member_id): Path<i64>,
) -> Result<impl IntoResponse, MembershipAPIError> {
    let id = MemberId::new(member_id);

    let member = state
        .member_store
        .read()
        .await
        .get_paid_member(&id)
        .await
        .map_err(|e| match e {
            MemberStoreError::MemberNotFound => {
                MembershipAPIError::PaymentRequired
            }
            e => MembershipAPIError::UnexpectedError(e.into()),
        })?;

    let card = state
        .card_renderer
        .render(&member)
        .map_err(MembershipAPIError::UnexpectedError)?;

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!(
                "attachment; filename=\"membership_card_{}.pdf\"",
                id.as_ref()
            ),
        ),
    ];

    Ok((StatusCode::OK, headers, card))
}
